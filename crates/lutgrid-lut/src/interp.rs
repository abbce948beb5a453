//! Interpolation methods for grid evaluation.

use std::fmt;
use std::str::FromStr;

/// Interpolation method for grid evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Linear interpolation (1D) / Trilinear (3D).
    ///
    /// Continuous but not smooth across grid points.
    Linear,

    /// Hermite cubic interpolation (1D) / Tricubic (3D).
    ///
    /// Default method; slopes come from the boundary derivative estimator.
    #[default]
    Cubic,
}

impl Interpolation {
    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Cubic => "cubic",
        }
    }
}

impl fmt::Display for Interpolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Interpolation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" | "lin" | "trilinear" => Ok(Self::Linear),
            "cubic" | "cub" | "tricubic" => Ok(Self::Cubic),
            other => Err(format!("unknown interpolation '{other}' (expected cubic or linear)")),
        }
    }
}
