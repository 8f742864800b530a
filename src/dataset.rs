//! Dataset files.

use crate::stats::{EmptyInputError, Summary};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Ordered collection of values stored in a TOML file as `values = [...]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub values: Vec<f64>,
}

impl Dataset {
    /// Create a new dataset from the given values.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Load a [`Dataset`] from a TOML file.
    ///
    /// Integer entries are widened to `f64`. Non-finite entries are rejected.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        let dataset =
            Self::from_toml_str(&contents).with_context(|| format!("failed to parse {file:?}"))?;

        Ok(dataset)
    }

    fn from_toml_str(contents: &str) -> Result<Self> {
        let dataset: Dataset = toml::from_str(contents).context("failed to deserialize dataset")?;

        if let Some(idx) = dataset.values.iter().position(|val| !val.is_finite()) {
            bail!("value {idx} is not finite");
        }

        Ok(dataset)
    }

    /// Save the dataset to a TOML file.
    pub fn save_file<P: AsRef<Path>>(&self, file: P) -> Result<()> {
        let file = file.as_ref();
        let contents = toml::to_string(self).context("failed to serialize dataset")?;
        fs::write(file, contents).with_context(|| format!("failed to write {file:?}"))?;
        Ok(())
    }

    /// Compute the [`Summary`] of the values.
    pub fn summary(&self) -> Result<Summary, EmptyInputError> {
        Summary::compute(&self.values)
    }
}
