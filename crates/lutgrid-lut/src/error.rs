//! LUT error types.

use thiserror::Error;

use crate::Dims;

/// Result type for LUT operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur while building or querying a grid.
#[derive(Debug, Error)]
pub enum LutError {
    /// Sample buffers do not match the declared shape.
    ///
    /// Covers wrong channel lengths, an axis count other than 1 or 3, and
    /// channel combinations the grid cannot represent.
    #[error("shape error: {0}")]
    Shape(String),

    /// Too few samples per axis for the boundary slope estimates.
    #[error("degenerate grid: size {size} is below the minimum of {min}")]
    Degenerate {
        /// Declared samples per axis
        size: usize,
        /// Smallest supported size
        min: usize,
    },

    /// Evaluator called on a grid of the other dimensionality.
    #[error("{op} needs a {expected} grid, got {got}")]
    WrongDimensions {
        /// Operation name
        op: &'static str,
        /// Dimensionality the operation works on
        expected: Dims,
        /// Dimensionality of the grid
        got: Dims,
    },

    /// Sample that JSON cannot represent.
    #[error("channel {channel} sample {index} is not finite ({value})")]
    NonFinite {
        /// Channel buffer index
        channel: usize,
        /// Sample index within the channel
        index: usize,
        /// Offending value
        value: f64,
    },

    /// Invalid core value such as an empty input domain.
    #[error(transparent)]
    Core(#[from] lutgrid_core::Error),

    /// Grid details could not be (de)serialized.
    #[error("details error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LutError {
    /// Creates a [`LutError::Shape`] error.
    #[inline]
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }
}
