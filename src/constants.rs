//! Numeric tolerances, percentile keys and the reference sample.

/// Maximum accumulated floating-point error allowed when a PMF's
/// probabilities are summed back to 1.0.
pub const PROBABILITY_TOLERANCE: f64 = 1e-9;

/// Percentile levels reported by [`crate::moments::percentiles`], in percent.
pub const PERCENTILE_KEYS: [u32; 9] = [1, 5, 10, 25, 50, 75, 90, 95, 99];

/// Decimal places used by the tutorial when displaying probabilities.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Finest rounding an `f64` probability can carry; larger requests are clamped.
pub const MAX_ROUND_DECIMALS: u32 = 15;

/// The worked-example sample: 13 observations over {1..5}.
pub const REFERENCE_SAMPLE: [i64; 13] = [1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 4, 5, 5];

/// Default number of histogram bins when none is given.
pub const DEFAULT_HISTOGRAM_BINS: usize = 5;

/// Width (in characters) of the longest bar in terminal bar charts.
pub const DEFAULT_BAR_WIDTH: usize = 40;
