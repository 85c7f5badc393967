//! # pmf — Empirical Probability Mass Functions
//!
//! Turns a finite sample of discrete values into its empirical PMF and the
//! two moments that summarize it: the expected value μ and the variance σ².
//!
//! ## Pipeline
//!
//! | Step | Operation | Rust module | Description |
//! |------|-----------|-------------|-------------|
//! | 1 | computeFrequencies | [`frequency`] | Count occurrences of each distinct value |
//! | 2 | computePMF | [`pmf`] | Divide each count by the sample size |
//! | 3 | expectedValue | [`moments::expected_value`] | μ = Σ p(x)·x |
//! | 4 | variance | [`moments::variance`] | σ² = Σ p(x)·(x−μ)² |
//!
//! [`summary::summarize`] runs all four steps and packages the result as a
//! serializable [`summary::PmfSummary`].
//!
//! ## Reference scenario
//!
//! The sample `[1,1,1,1,2,2,2,2,3,3,4,5,5]` ([`constants::REFERENCE_SAMPLE`])
//! has frequencies {1:4, 2:4, 3:2, 4:1, 5:2}. Exact μ = 32/13 ≈ 2.4615 and
//! σ² = 328/169 ≈ 1.9408. With the PMF rounded to two decimals first
//! ([`pmf::Pmf::rounded`]), the same formulas give μ = 2.45 and σ² ≈ 1.927.
//!
//! ## Visualization
//!
//! Plotting is left to an external charting tool. [`chart`] only prepares its
//! input: aligned `(values, probabilities)` series for a bar chart and
//! equal-width histogram bins, with CSV export.

pub mod chart;
pub mod constants;
pub mod env_config;
pub mod error;
pub mod frequency;
pub mod input;
pub mod moments;
pub mod pmf;
pub mod sampling;
pub mod summary;

pub use error::PmfError;
pub use frequency::{compute_frequencies, FrequencyTable};
pub use moments::{expected_value, variance, Outcome};
pub use pmf::{compute_pmf, Pmf};
pub use summary::{summarize, PmfSummary};
