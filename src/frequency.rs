//! Frequency counting: value → number of occurrences in a sample.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::PmfError;

/// Occurrence counts for each distinct value of a sample.
///
/// Keys are unique and iterate in ascending order, so tables built from
/// permutations of the same sample compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<T: Ord> {
    counts: BTreeMap<T, u64>,
    total: usize,
}

impl<T: Ord> FrequencyTable<T> {
    /// Number of observations the table was built from.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count for `value`, 0 if it never occurred.
    pub fn count(&self, value: &T) -> u64 {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// `(value, count)` pairs in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, u64)> {
        self.counts.iter().map(|(v, &c)| (v, c))
    }

    /// All values sharing the highest count, ascending.
    pub fn modes(&self) -> Vec<&T> {
        let max = self.counts.values().copied().max().unwrap_or(0);
        self.counts
            .iter()
            .filter(|&(_, &c)| c == max)
            .map(|(v, _)| v)
            .collect()
    }
}

/// Count the occurrences of every distinct value in `sample`.
///
/// Returns [`PmfError::InvalidInput`] when the sample is empty.
pub fn compute_frequencies<T: Ord + Clone>(sample: &[T]) -> Result<FrequencyTable<T>, PmfError> {
    if sample.is_empty() {
        return Err(PmfError::empty_sample());
    }

    let mut counts = BTreeMap::new();
    for value in sample {
        *counts.entry(value.clone()).or_insert(0u64) += 1;
    }
    debug!(
        sample_size = sample.len(),
        distinct = counts.len(),
        "computed frequencies"
    );

    Ok(FrequencyTable {
        counts,
        total: sample.len(),
    })
}
