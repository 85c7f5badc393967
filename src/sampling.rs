//! Draw values from a PMF by inverse-CDF lookup.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::PmfError;
use crate::pmf::Pmf;

/// Precomputed cumulative distribution for repeated draws.
///
/// Draws are scaled by the PMF's total mass, so a PMF built with a divisor
/// other than its total count still samples proportionally to its counts.
pub struct PmfSampler<T> {
    values: Vec<T>,
    cumulative: Vec<f64>,
}

impl<T: Ord + Clone> PmfSampler<T> {
    pub fn new(pmf: &Pmf<T>) -> Result<Self, PmfError> {
        if pmf.is_empty() {
            return Err(PmfError::InvalidInput(
                "cannot sample from an empty PMF".to_string(),
            ));
        }

        let mut values = Vec::with_capacity(pmf.len());
        let mut cumulative = Vec::with_capacity(pmf.len());
        let mut acc = 0.0;
        for (v, p) in pmf.iter() {
            acc += p;
            values.push(v.clone());
            cumulative.push(acc);
        }
        Ok(Self { values, cumulative })
    }

    /// One draw.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> T {
        let total = self.cumulative[self.cumulative.len() - 1];
        let u: f64 = rng.random::<f64>() * total;
        let idx = self.cumulative.partition_point(|&c| c <= u);
        self.values[idx.min(self.values.len() - 1)].clone()
    }

    /// `n` draws from a `SmallRng` seeded with `seed`.
    pub fn draw(&self, n: usize, seed: u64) -> Vec<T> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let out: Vec<T> = (0..n).map(|_| self.sample(&mut rng)).collect();
        debug!(draws = n, seed, "sampled from pmf");
        out
    }
}
