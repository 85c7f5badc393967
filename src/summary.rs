//! One-shot summary of a sample: frequencies, PMF, moments, percentiles.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PmfError;
use crate::frequency::{compute_frequencies, FrequencyTable};
use crate::moments::{expected_value, percentiles, variance, Outcome, Percentile};
use crate::pmf::{compute_pmf, Pmf};

/// Everything computed from one sample, in a serializable form.
///
/// `frequencies` and `pmf` are `(value, count)` / `(value, probability)`
/// pairs sorted by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PmfSummary<T> {
    pub sample_size: usize,
    pub frequencies: Vec<(T, u64)>,
    pub pmf: Vec<(T, f64)>,
    pub modes: Vec<T>,
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub percentiles: Vec<Percentile<T>>,
}

/// Run the full pipeline on `sample`.
///
/// Fails with [`PmfError::InvalidInput`] on an empty sample.
pub fn summarize<T: Outcome>(sample: &[T]) -> Result<PmfSummary<T>, PmfError> {
    let frequencies = compute_frequencies(sample)?;
    let pmf = compute_pmf(&frequencies, frequencies.total())?;
    Ok(PmfSummary::from_parts(&frequencies, &pmf))
}

impl<T: Outcome> PmfSummary<T> {
    /// Package an already computed table and PMF, for callers that keep
    /// using the [`Pmf`] afterwards.
    pub fn from_parts(frequencies: &FrequencyTable<T>, pmf: &Pmf<T>) -> Self {
        let mean = expected_value(pmf);
        let var = variance(pmf, mean);
        debug!(mean, variance = var, "summarized sample");

        PmfSummary {
            sample_size: frequencies.total(),
            frequencies: frequencies.iter().map(|(&v, c)| (v, c)).collect(),
            pmf: pmf.iter().map(|(&v, p)| (v, p)).collect(),
            modes: frequencies.modes().into_iter().copied().collect(),
            mean,
            variance: var,
            std_dev: var.sqrt(),
            percentiles: percentiles(pmf),
        }
    }
}

impl<T: Serialize> PmfSummary<T> {
    pub fn to_json_pretty(&self) -> Result<String, PmfError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
