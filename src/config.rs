use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, fs, ops::RangeBounds, path::Path};

/// Data directory configuration.
///
/// Loaded from a TOML file and validated before use.
/// See [`Config::from_file`] for loading.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Number of values per generated dataset.
    pub n_vals: usize,
    /// Mean of the sampling distribution.
    pub mean: f64,
    /// Standard deviation of the sampling distribution.
    pub std_dev: f64,

    /// Seed of the random number generator (drawn from the OS if absent).
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Config {
    /// Load a [`Config`] from a file.
    ///
    /// The file must be TOML-encoded and contain a serialized [`Config`].
    /// Performs validation on all parameters before returning.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        let config =
            Self::from_toml_str(&contents).with_context(|| format!("failed to parse {file:?}"))?;

        Ok(config)
    }

    fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        check_num(self.n_vals, 1..1_000_000).context("invalid number of values")?;
        check_num(self.mean, -1e12..=1e12).context("invalid mean")?;
        check_num(self.std_dev, 0.0..=1e12).context("invalid standard deviation")?;
        Ok(())
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_config() {
        let cfg = Config::from_toml_str("n_vals = 16\nmean = 2.5\nstd_dev = 0.5\nseed = 7\n")
            .expect("failed to parse config");
        assert_eq!(cfg.n_vals, 16);
        assert_eq!(cfg.mean, 2.5);
        assert_eq!(cfg.std_dev, 0.5);
        assert_eq!(cfg.seed, Some(7));
    }

    #[test]
    fn seed_is_optional() {
        let cfg = Config::from_toml_str("n_vals = 1\nmean = 0.0\nstd_dev = 0.0\n")
            .expect("failed to parse config");
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(Config::from_toml_str("n_vals = 0\nmean = 0.0\nstd_dev = 1.0\n").is_err());
        assert!(Config::from_toml_str("n_vals = 8\nmean = 0.0\nstd_dev = -1.0\n").is_err());
        assert!(Config::from_toml_str("n_vals = 8\nmean = nan\nstd_dev = 1.0\n").is_err());
    }
}
