//! Descriptive statistics over numeric datasets.
//!
//! The numeric core lives in [`stats`]. The remaining modules back the
//! `descstats` command-line tool, which generates, summarizes and cleans
//! datasets stored in a data directory.

pub mod analysis;
pub mod config;
pub mod dataset;
pub mod manager;
pub mod sampler;
pub mod stats;
