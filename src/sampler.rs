use crate::config::Config;
use crate::dataset::Dataset;
use anyhow::{Context, Result};
use rand::prelude::*;
use rand_chacha::ChaCha12Rng;
use rand_distr::Normal;
use rmp_serde::{decode, encode};
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

/// Synthetic dataset generator.
///
/// Holds the configuration and random number generator,
/// and provides methods to generate datasets and to save and load checkpoints.
#[derive(Serialize, Deserialize)]
pub struct Sampler {
    cfg: Config,
    rng: ChaCha12Rng,
}

impl Sampler {
    /// Create a new `Sampler`, seeded from the configuration if it has a seed.
    pub fn new(cfg: Config) -> Result<Self> {
        let rng = match cfg.seed {
            Some(seed) => ChaCha12Rng::seed_from_u64(seed),
            None => ChaCha12Rng::try_from_os_rng().context("failed to seed rng from os")?,
        };
        Ok(Self { cfg, rng })
    }

    /// Configuration the sampler was created with.
    pub fn cfg(&self) -> &Config {
        &self.cfg
    }

    /// Draw a dataset of `n_vals` values from a normal distribution.
    pub fn generate_dataset(&mut self) -> Result<Dataset> {
        let val_dist = Normal::new(self.cfg.mean, self.cfg.std_dev)
            .context("failed to construct normal distribution")?;

        let values = (0..self.cfg.n_vals)
            .map(|_| val_dist.sample(&mut self.rng))
            .collect();

        Ok(Dataset::new(values))
    }

    /// Save a checkpoint of the entire sampler state.
    ///
    /// Can be used to continue the same random stream later.
    pub fn save_checkpoint<P: AsRef<Path>>(&self, file: P) -> Result<()> {
        let file = file.as_ref();
        let file = File::create(file).with_context(|| format!("failed to create {file:?}"))?;
        let mut writer = BufWriter::new(file);
        encode::write(&mut writer, &self).context("failed to serialize sampler")?;
        writer.flush().context("failed to flush writer stream")?;
        Ok(())
    }

    /// Load a previously saved sampler checkpoint.
    pub fn load_checkpoint<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let file = File::open(file).with_context(|| format!("failed to open {file:?}"))?;
        let mut reader = BufReader::new(file);
        let sampler = decode::from_read(&mut reader).context("failed to deserialize sampler")?;
        Ok(sampler)
    }
}
