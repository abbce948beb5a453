//! Error types for lutgrid-core.
//!
//! # Usage
//!
//! ```rust
//! use lutgrid_core::{Domain, Error};
//!
//! let err = Domain::new([0.0; 3], [0.0, 1.0, 1.0]).unwrap_err();
//! assert!(matches!(err, Error::InvalidDomain { channel: 0, .. }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating core types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Input range is empty, inverted or not finite.
    ///
    /// Returned by [`crate::Domain::new`] when `max <= min` for a channel,
    /// or when either bound is NaN or infinite.
    #[error("invalid domain for channel {channel}: [{min}, {max}]")]
    InvalidDomain {
        /// Channel index (0 = R, 1 = G, 2 = B)
        channel: usize,
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDomain`] error.
    #[inline]
    pub fn invalid_domain(channel: usize, min: f64, max: f64) -> Self {
        Self::InvalidDomain { channel, min, max }
    }
}
