//! Chart input preparation: bar-chart series and equal-width histograms.
//!
//! Rendering belongs to an external plotting tool; this module produces the
//! aligned sequences it consumes and writes them as CSV. [`BarSeries::render`]
//! draws a quick terminal version for the binaries.

use std::fmt::Display;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::PmfError;
use crate::moments::Outcome;
use crate::pmf::Pmf;

/// Aligned `(values, probabilities)` for a bar chart, ascending by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries<T> {
    pub values: Vec<T>,
    pub probabilities: Vec<f64>,
}

impl<T: Ord + Clone> BarSeries<T> {
    pub fn from_pmf(pmf: &Pmf<T>) -> Self {
        let (values, probabilities) = pmf.series();
        Self {
            values,
            probabilities,
        }
    }
}

impl<T: Display> BarSeries<T> {
    /// Write `value,probability` rows with a header line.
    pub fn write_csv<W: Write>(&self, mut w: W) -> Result<(), PmfError> {
        writeln!(w, "value,probability")?;
        for (v, p) in self.values.iter().zip(&self.probabilities) {
            writeln!(w, "{},{:.15}", v, p)?;
        }
        Ok(())
    }

    /// One row per value; the largest probability gets a bar of `width` cells.
    pub fn render(&self, width: usize) -> String {
        let labels: Vec<String> = self.values.iter().map(|v| v.to_string()).collect();
        let label_width = labels.iter().map(String::len).max().unwrap_or(0);
        let max_p = self.probabilities.iter().copied().fold(0.0f64, f64::max);

        let mut out = String::new();
        for (label, &p) in labels.iter().zip(&self.probabilities) {
            let cells = if max_p > 0.0 {
                (p / max_p * width as f64).round() as usize
            } else {
                0
            };
            out.push_str(&format!(
                "{:>lw$} | {:<w$} {:.4}\n",
                label,
                "#".repeat(cells),
                p,
                lw = label_width,
                w = width
            ));
        }
        out
    }
}

/// Equal-width histogram over `[min, max]` of a sample.
///
/// `edges` has `bins + 1` entries. Every bin is half-open except the last,
/// which also includes `max`. A constant sample gets the single-unit range
/// `[x - 0.5, x + 0.5]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<u64>,
    /// count / (n · bin width); integrates to 1 over the histogram range.
    pub density: Vec<f64>,
}

impl Histogram {
    pub fn from_sample<T: Outcome>(sample: &[T], bins: usize) -> Result<Self, PmfError> {
        if sample.is_empty() {
            return Err(PmfError::empty_sample());
        }
        if bins == 0 {
            return Err(PmfError::InvalidInput(
                "histogram needs at least one bin".to_string(),
            ));
        }

        let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
        for &x in sample {
            let x = x.to_f64();
            lo = lo.min(x);
            hi = hi.max(x);
        }
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins).map(|i| lo + i as f64 * width).collect();

        let mut counts = vec![0u64; bins];
        for &x in sample {
            let idx = ((x.to_f64() - lo) / width) as usize;
            counts[idx.min(bins - 1)] += 1;
        }

        let n = sample.len() as f64;
        let density = counts.iter().map(|&c| c as f64 / (n * width)).collect();

        Ok(Self {
            edges,
            counts,
            density,
        })
    }

    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    /// Write `bin_start,bin_end,count,density` rows with a header line.
    pub fn write_csv<W: Write>(&self, mut w: W) -> Result<(), PmfError> {
        writeln!(w, "bin_start,bin_end,count,density")?;
        for i in 0..self.bins() {
            writeln!(
                w,
                "{},{},{},{:.15}",
                self.edges[i],
                self.edges[i + 1],
                self.counts[i],
                self.density[i]
            )?;
        }
        Ok(())
    }
}
