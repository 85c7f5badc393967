//! Error type shared by the library and the binaries.

use thiserror::Error;

/// Everything that can go wrong while building or exporting a PMF.
///
/// Only [`PmfError::InvalidInput`] and [`PmfError::DivisionByZero`] come out of
/// the core computation. The remaining variants belong to input parsing and
/// file output in the binaries.
#[derive(Debug, Error)]
pub enum PmfError {
    /// The sample (or a derived argument such as the bin count) is unusable.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A PMF was requested with a sample size of zero.
    #[error("division by zero: sample size must be greater than 0")]
    DivisionByZero,

    /// A sample token could not be parsed as an integer.
    #[error("cannot parse {token:?} as an integer value")]
    Parse {
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl PmfError {
    pub(crate) fn empty_sample() -> Self {
        PmfError::InvalidInput("sample must contain at least one value".to_string())
    }
}
