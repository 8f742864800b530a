use crate::analysis::Analyzer;
use crate::config::Config;
use crate::sampler::Sampler;
use anyhow::{Context, Result, bail};
use glob::{Pattern, glob};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Owns the layout of a data directory and drives the CLI commands.
pub struct Manager {
    data_dir: PathBuf,
    cfg: Config,
}

impl Manager {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();

        let cfg =
            Config::from_file(data_dir.join("config.toml")).context("failed to construct cfg")?;
        log::info!("{cfg:#?}");

        Ok(Self { data_dir, cfg })
    }

    pub fn create_dataset(&self) -> Result<()> {
        let checkpoint_file = self.checkpoint_file();
        let mut sampler = if checkpoint_file.is_file() {
            let sampler = Sampler::load_checkpoint(&checkpoint_file)
                .with_context(|| format!("failed to load {checkpoint_file:?}"))?;
            if sampler.cfg() != &self.cfg {
                bail!("checkpoint config differs from the current config");
            }
            log::info!("loaded {checkpoint_file:?}");
            sampler
        } else {
            Sampler::new(self.cfg.clone()).context("failed to construct sampler")?
        };

        let dataset_file = self
            .next_dataset_file()
            .context("failed to pick dataset file")?;

        let dataset = sampler
            .generate_dataset()
            .context("failed to generate dataset")?;

        dataset
            .save_file(&dataset_file)
            .with_context(|| format!("failed to save {dataset_file:?}"))?;
        log::info!("created {dataset_file:?}");

        sampler
            .save_checkpoint(&checkpoint_file)
            .context("failed to save checkpoint")?;

        Ok(())
    }

    pub fn analyze_datasets(&self) -> Result<()> {
        let dataset_files = self
            .list_dataset_files()
            .context("failed to list dataset files")?;
        if dataset_files.is_empty() {
            bail!("no dataset files found in {:?}", self.data_dir);
        }

        let mut analyzer = Analyzer::new();
        for dataset_file in &dataset_files {
            analyzer
                .add_file(dataset_file)
                .context("failed to add file")?;
        }

        let results_file = self.results_file();
        analyzer
            .save_results(&results_file)
            .context("failed to save results")?;
        log::info!("saved {results_file:?}");

        Ok(())
    }

    pub fn clean_data_dir(&self) -> Result<()> {
        for file in [self.results_file(), self.checkpoint_file()] {
            if file.is_file() {
                fs::remove_file(&file).with_context(|| format!("failed to remove {file:?}"))?;
                log::info!("removed {file:?}");
            }
        }

        Ok(())
    }

    /// Dataset files in index order. Names that are not `dataset-NNNN.toml` are ignored.
    fn list_dataset_files(&self) -> Result<Vec<PathBuf>> {
        let data_dir = self.data_dir.to_str().context("data dir is not valid UTF-8")?;
        let pattern =
            Path::new(&Pattern::escape(data_dir)).join("dataset-[0-9][0-9][0-9][0-9].toml");
        let pattern = pattern.to_str().context("pattern is not valid UTF-8")?;
        let mut files: Vec<_> = glob(pattern)
            .context("failed to glob dataset files")?
            .filter_map(Result::ok)
            .filter(|p| p.is_file())
            .collect();
        files.sort();
        Ok(files)
    }

    /// First dataset file in index order that does not exist yet.
    fn next_dataset_file(&self) -> Result<PathBuf> {
        (0..10_000)
            .map(|dataset_idx| self.dataset_file(dataset_idx))
            .find(|file| !file.exists())
            .context("no free dataset index left")
    }

    fn dataset_file(&self, dataset_idx: usize) -> PathBuf {
        self.data_dir.join(format!("dataset-{dataset_idx:04}.toml"))
    }

    fn checkpoint_file(&self) -> PathBuf {
        self.data_dir.join("sampler.msgpack")
    }

    fn results_file(&self) -> PathBuf {
        self.data_dir.join("summaries.msgpack")
    }
}
