//! # lutgrid-core
//!
//! Core types shared by the lutgrid crates.
//!
//! - [`Domain`] - Per-channel input range a lookup grid represents
//! - [`luma`] - Rec.709 luma weights used to fold RGB into a single channel
//! - [`Error`] - Validation errors for the types in this crate
//!
//! ## Crate Structure
//!
//! ```text
//! lutgrid-core (this crate)
//!    ^
//!    |
//!    +-- lutgrid-lut (grids and evaluators)
//!    +-- lutgrid-cli (command line tool)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod domain;
pub mod error;
pub mod luma;

pub use domain::Domain;
pub use error::{Error, Result};
pub use luma::{luma_rec709, REC709_LUMA, REC709_LUMA_B, REC709_LUMA_G, REC709_LUMA_R};

/// Prelude module for convenient imports.
///
/// ```
/// use lutgrid_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::domain::Domain;
    pub use crate::error::{Error, Result};
    pub use crate::luma::{luma_rec709, REC709_LUMA};
}
