//! # lutgrid-lut
//!
//! Lookup grids and their interpolation engine.
//!
//! A [`Grid`] stores a colour transform sampled over one axis (per-channel
//! curves) or three axes (an RGB cube). Queries interpolate between samples
//! and extrapolate linearly outside the sampled domain.
//!
//! # Evaluators
//!
//! - 1D: Hermite cubic or linear along one curve ([`Curve`])
//! - 3D: tricubic ([`Tricubic`]) or trilinear ([`Trilinear`]) inside a cube,
//!   wrapped by the clamp-then-extrapolate policy in [`lattice`]
//!
//! All slopes come from one boundary-aware estimator, [`slope::slope`]:
//! central differences inside, one-sided quadratic fits at the edges.
//!
//! # Usage
//!
//! ```rust
//! use lutgrid_lut::{Grid, Interpolation};
//!
//! // A gamma curve shared by every channel
//! let gamma: Vec<f64> = (0..33).map(|i| (i as f64 / 32.0).powf(2.2)).collect();
//! let curve = Grid::curve(gamma).unwrap();
//! let y = curve.luma_cubic(0.5);
//! assert!((y - 0.5f64.powf(2.2)).abs() < 1e-3);
//!
//! // An RGB cube
//! let cube = Grid::identity_3d(17).unwrap();
//! let rgb = cube.tricubic([0.5, 0.3, 0.2]).unwrap();
//! assert!((rgb[1] - 0.3).abs() < 1e-9);
//!
//! // Out of range inputs extrapolate
//! let rgb = cube.rgb_to_rgb([1.2, -0.1, 0.5], Interpolation::Linear);
//! assert!((rgb[0] - 1.2).abs() < 1e-9);
//! ```
//!
//! # Sharing
//!
//! [`SharedGrid`] holds an `Arc<Grid>` snapshot that can be replaced while
//! other threads keep evaluating the previous one. [`batch`] evaluates whole
//! interleaved buffers in parallel with rayon.
//!
//! # Dependencies
//!
//! - [`lutgrid-core`] - Domain and luma weights
//! - [`thiserror`] - Error handling
//! - [`serde`] / [`serde_json`] - [`GridDetails`] exchange form
//! - [`rayon`] - Batch evaluation
//! - [`tracing`] - Build and swap diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod grid;
mod interp;
mod tricubic;
mod trilinear;

pub mod batch;
pub mod curve;
pub mod details;
pub mod lattice;
pub mod node;
pub mod shared;
pub mod slope;

pub use curve::Curve;
pub use details::GridDetails;
pub use error::{LutError, LutResult};
pub use grid::{Dims, Grid, MIN_SIZE};
pub use interp::Interpolation;
pub use lattice::CLIP_EPSILON;
pub use node::{Axis, Node};
pub use shared::SharedGrid;
pub use tricubic::Tricubic;
pub use trilinear::Trilinear;
