//! Moments and quantiles of a PMF: expected value, variance, percentiles.

use serde::{Deserialize, Serialize};

use crate::constants::{PERCENTILE_KEYS, PROBABILITY_TOLERANCE};
use crate::pmf::Pmf;

/// A discrete outcome that can be weighted by a probability.
pub trait Outcome: Copy + Ord {
    fn to_f64(self) -> f64;
}

macro_rules! impl_outcome {
    ($($t:ty),*) => {
        $(
            impl Outcome for $t {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_outcome!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// μ = Σ p(x)·x.
pub fn expected_value<T: Outcome>(pmf: &Pmf<T>) -> f64 {
    pmf.iter().map(|(&x, p)| p * x.to_f64()).sum()
}

/// σ² = Σ p(x)·(x−μ)².
///
/// `mu` is taken as given, normally the result of [`expected_value`] on the
/// same PMF.
pub fn variance<T: Outcome>(pmf: &Pmf<T>, mu: f64) -> f64 {
    pmf.iter()
        .map(|(&x, p)| {
            let d = x.to_f64() - mu;
            p * d * d
        })
        .sum()
}

pub fn std_dev<T: Outcome>(pmf: &Pmf<T>) -> f64 {
    variance(pmf, expected_value(pmf)).sqrt()
}

/// One entry of [`percentiles`]: the smallest value whose CDF reaches `level`%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percentile<T> {
    pub level: u32,
    pub value: T,
}

/// Percentiles p1, p5, p10, p25, p50, p75, p90, p95, p99 from the CDF.
///
/// The running CDF is compared with [`PROBABILITY_TOLERANCE`] slack, so a
/// value whose exact CDF equals a level (e.g. 9 at p90 for `1..=10`) is
/// reported even when the float sum lands just below it.
///
/// Levels the accumulated mass never reaches (possible when the PMF was built
/// with a divisor larger than its total count) resolve to the largest value.
/// Empty PMFs yield an empty vector.
pub fn percentiles<T: Outcome>(pmf: &Pmf<T>) -> Vec<Percentile<T>> {
    let Some(&last) = pmf.support().next_back() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(PERCENTILE_KEYS.len());
    let mut cum_prob = 0.0;
    let mut pct_idx = 0;

    for (&value, prob) in pmf.iter() {
        cum_prob += prob;
        while pct_idx < PERCENTILE_KEYS.len()
            && cum_prob + PROBABILITY_TOLERANCE >= PERCENTILE_KEYS[pct_idx] as f64 / 100.0
        {
            out.push(Percentile {
                level: PERCENTILE_KEYS[pct_idx],
                value,
            });
            pct_idx += 1;
        }
    }
    for &level in &PERCENTILE_KEYS[pct_idx..] {
        out.push(Percentile { level, value: last });
    }
    out
}
