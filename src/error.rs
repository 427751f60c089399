//! Error types.

use thiserror::Error;

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the tour pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serde")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Reasons an input is rejected before any optimization starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("point {index} has a non-finite coordinate ({latitude}, {longitude})")]
    NonFiniteCoordinate {
        index: usize,
        latitude: f64,
        longitude: f64,
    },

    #[error("point set is empty")]
    EmptyPointSet,

    #[error("start index {start} is out of range for {len} points")]
    StartOutOfRange { start: usize, len: usize },

    #[error("line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("malformed tour: {0}")]
    MalformedTour(String),

    #[error("distance data has {actual} cells, expected {expected}")]
    MatrixShape { expected: usize, actual: usize },

    #[error("distance cell {cell} is {value}, expected a finite non-negative number")]
    InvalidDistance { cell: usize, value: f64 },
}

impl Error {
    /// Returns the input rejection reason, if this is an input error.
    pub fn as_invalid_input(&self) -> Option<&InvalidInput> {
        match self {
            Error::InvalidInput(reason) => Some(reason),
            _ => None,
        }
    }
}
