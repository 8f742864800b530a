use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a statistic is requested for an empty sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("input sequence is empty")]
pub struct EmptyInputError;

/// Compute the arithmetic mean of `values`.
///
/// # Errors
/// Returns [`EmptyInputError`] if `values` is empty.
pub fn average<T>(values: &[T]) -> Result<f64, EmptyInputError>
where
    T: Copy + Into<f64>,
{
    if values.is_empty() {
        return Err(EmptyInputError);
    }
    let sum = values.iter().map(|&val| val.into()).sum::<f64>();
    Ok(sum / values.len() as f64)
}

/// Compute the population variance of `values` (mean of the squared deviations, divided by N).
///
/// # Errors
/// Returns [`EmptyInputError`] if `values` is empty.
pub fn variance<T>(values: &[T]) -> Result<f64, EmptyInputError>
where
    T: Copy + Into<f64>,
{
    let mean = average(values)?;
    let diff_2_vec: Vec<f64> = values
        .iter()
        .map(|&val| (val.into() - mean).powi(2))
        .collect();
    average(&diff_2_vec)
}

/// Compute the population standard deviation of `values`.
///
/// # Errors
/// Returns [`EmptyInputError`] if `values` is empty.
pub fn stddev<T>(values: &[T]) -> Result<f64, EmptyInputError>
where
    T: Copy + Into<f64>,
{
    Ok(variance(values)?.sqrt())
}

/// Summary statistics of a single dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of values.
    pub n_vals: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population variance.
    pub variance: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl Summary {
    /// Compute the summary of `values`.
    ///
    /// # Errors
    /// Returns [`EmptyInputError`] if `values` is empty.
    pub fn compute<T>(values: &[T]) -> Result<Self, EmptyInputError>
    where
        T: Copy + Into<f64>,
    {
        let mean = average(values)?;
        let variance = variance(values)?;
        Ok(Self {
            n_vals: values.len(),
            mean,
            variance,
            std_dev: variance.sqrt(),
        })
    }
}
