use crate::dataset::Dataset;
use crate::stats::Summary;
use anyhow::{Context, Result};
use rmp_serde::encode;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Collects the summaries of one or more dataset files.
pub struct Analyzer {
    summaries: Vec<Summary>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            summaries: Vec::new(),
        }
    }

    pub fn add_file<P: AsRef<Path>>(&mut self, file: P) -> Result<()> {
        let file = file.as_ref();
        let dataset =
            Dataset::from_file(file).with_context(|| format!("failed to load {file:?}"))?;

        let summary = dataset
            .summary()
            .with_context(|| format!("failed to summarize {file:?}"))?;
        log::info!("{file:?}: {summary:?}");

        self.summaries.push(summary);
        Ok(())
    }

    pub fn save_results<P: AsRef<Path>>(&self, file: P) -> Result<()> {
        let file = file.as_ref();
        let file = File::create(file).with_context(|| format!("failed to create {file:?}"))?;
        let mut writer = BufWriter::new(file);

        encode::write(&mut writer, &self.summaries).context("failed to serialize summaries")?;
        writer.flush().context("failed to flush writer stream")?;
        Ok(())
    }
}
