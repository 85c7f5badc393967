//! Probability mass function: value → probability, from a frequency table.

use std::collections::BTreeMap;

use tracing::debug;

use crate::constants::MAX_ROUND_DECIMALS;
use crate::error::PmfError;
use crate::frequency::{compute_frequencies, FrequencyTable};

/// Empirical PMF over the distinct values of a sample.
///
/// Built by [`compute_pmf`] (or [`Pmf::from_sample`]). When the sample size
/// passed in matches the frequency table's total, probabilities sum to 1.0
/// within [`crate::constants::PROBABILITY_TOLERANCE`].
#[derive(Debug, Clone, PartialEq)]
pub struct Pmf<T: Ord> {
    probs: BTreeMap<T, f64>,
}

/// Divide every count in `frequencies` by `sample_size`.
///
/// Returns [`PmfError::DivisionByZero`] when `sample_size` is 0. The size is
/// taken as given; pass `frequencies.total()` for a normalized PMF.
pub fn compute_pmf<T: Ord + Clone>(
    frequencies: &FrequencyTable<T>,
    sample_size: usize,
) -> Result<Pmf<T>, PmfError> {
    if sample_size == 0 {
        return Err(PmfError::DivisionByZero);
    }

    let n = sample_size as f64;
    let probs: BTreeMap<T, f64> = frequencies
        .iter()
        .map(|(value, count)| (value.clone(), count as f64 / n))
        .collect();
    debug!(sample_size, support = probs.len(), "computed pmf");

    Ok(Pmf { probs })
}

impl<T: Ord + Clone> Pmf<T> {
    /// Frequencies followed by normalization over the sample length.
    pub fn from_sample(sample: &[T]) -> Result<Self, PmfError> {
        let frequencies = compute_frequencies(sample)?;
        compute_pmf(&frequencies, frequencies.total())
    }

    /// Copy with every probability rounded to `decimals` places.
    ///
    /// This is a display view: after rounding the total mass can drift from
    /// 1.0 by up to `support_len * 0.5 * 10^-decimals`. Values whose
    /// probability rounds to 0 stay in the table so the view lines up with
    /// the unrounded one. `decimals` is clamped to [`MAX_ROUND_DECIMALS`].
    pub fn rounded(&self, decimals: u32) -> Self {
        let factor = 10f64.powi(decimals.min(MAX_ROUND_DECIMALS) as i32);
        let probs = self
            .probs
            .iter()
            .map(|(v, &p)| (v.clone(), (p * factor).round() / factor))
            .collect();
        Pmf { probs }
    }

    /// Two aligned vectors, ascending by value, ready for a bar chart.
    pub fn series(&self) -> (Vec<T>, Vec<f64>) {
        self.probs.iter().map(|(v, &p)| (v.clone(), p)).unzip()
    }
}

impl<T: Ord> Pmf<T> {
    /// P(X = value); 0.0 outside the support.
    pub fn probability(&self, value: &T) -> f64 {
        self.probs.get(value).copied().unwrap_or(0.0)
    }

    /// P(X ≤ value).
    pub fn cdf(&self, value: &T) -> f64 {
        self.probs.range::<T, _>(..=value).map(|(_, &p)| p).sum()
    }

    /// Σ p(x) over the support.
    pub fn total_mass(&self) -> f64 {
        self.probs.values().sum()
    }

    /// Distinct values in the table, ascending.
    ///
    /// Every value has non-zero probability unless the PMF is a
    /// [`Pmf::rounded`] view.
    pub fn support(&self) -> impl DoubleEndedIterator<Item = &T> {
        self.probs.keys()
    }

    /// `(value, probability)` pairs, ascending by value.
    pub fn iter(&self) -> impl Iterator<Item = (&T, f64)> {
        self.probs.iter().map(|(v, &p)| (v, p))
    }

    pub fn len(&self) -> usize {
        self.probs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DISPLAY_DECIMALS, PROBABILITY_TOLERANCE, REFERENCE_SAMPLE};

    #[test]
    fn test_reference_probabilities() {
        let pmf = Pmf::from_sample(&REFERENCE_SAMPLE).unwrap();
        assert!((pmf.probability(&1) - 4.0 / 13.0).abs() < 1e-12);
        assert!((pmf.probability(&4) - 1.0 / 13.0).abs() < 1e-12);
        assert_eq!(pmf.probability(&6), 0.0);
        assert!((pmf.total_mass() - 1.0).abs() < PROBABILITY_TOLERANCE);
    }

    #[test]
    fn test_rounded_matches_tutorial_table() {
        let pmf = Pmf::from_sample(&REFERENCE_SAMPLE)
            .unwrap()
            .rounded(DISPLAY_DECIMALS);
        let (values, probs) = pmf.series();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
        for (got, want) in probs.iter().zip([0.31, 0.31, 0.15, 0.08, 0.15]) {
            assert!((got - want).abs() < 1e-12, "got={got} want={want}");
        }
    }

    #[test]
    fn test_rounded_clamps_decimals() {
        let pmf = Pmf::from_sample(&[1i64, 2, 2]).unwrap();
        let (_, fine) = pmf.rounded(MAX_ROUND_DECIMALS).series();
        for decimals in [400, u32::MAX] {
            let (values, probs) = pmf.rounded(decimals).series();
            assert_eq!(values, vec![1, 2]);
            assert!(probs.iter().all(|p| p.is_finite()), "decimals={decimals}");
            assert_eq!(probs, fine);
        }
        assert!((fine[0] - 1.0 / 3.0).abs() < 1e-14);
    }

    #[test]
    fn test_rounded_keeps_zero_entries() {
        let mut sample = vec![1i64; 999];
        sample.push(2);
        let rounded = Pmf::from_sample(&sample).unwrap().rounded(DISPLAY_DECIMALS);
        let support: Vec<i64> = rounded.support().copied().collect();
        assert_eq!(support, vec![1, 2]);
        assert_eq!(rounded.probability(&2), 0.0);
        assert_eq!(rounded.probability(&1), 1.0);
    }

    #[test]
    fn test_zero_sample_size() {
        let table = compute_frequencies(&[1, 2]).unwrap();
        assert!(matches!(
            compute_pmf(&table, 0),
            Err(PmfError::DivisionByZero)
        ));
    }

    #[test]
    fn test_explicit_sample_size_is_used_as_divisor() {
        let table = compute_frequencies(&[1, 1, 2, 2]).unwrap();
        let pmf = compute_pmf(&table, 8).unwrap();
        assert!((pmf.probability(&1) - 0.25).abs() < 1e-12);
        assert!((pmf.total_mass() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_cdf() {
        let pmf = Pmf::from_sample(&REFERENCE_SAMPLE).unwrap();
        assert_eq!(pmf.cdf(&0), 0.0);
        assert!((pmf.cdf(&2) - 8.0 / 13.0).abs() < 1e-12);
        assert!((pmf.cdf(&3) - 10.0 / 13.0).abs() < 1e-12);
        assert!((pmf.cdf(&5) - 1.0).abs() < PROBABILITY_TOLERANCE);
        assert!((pmf.cdf(&100) - 1.0).abs() < PROBABILITY_TOLERANCE);
    }

    #[test]
    fn test_singleton() {
        let pmf = Pmf::from_sample(&[7]).unwrap();
        assert_eq!(pmf.len(), 1);
        assert_eq!(pmf.probability(&7), 1.0);
    }
}
