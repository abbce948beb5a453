//! Input domain of a lookup grid.
//!
//! A grid samples its transform over `[min, max]` on each input channel.
//! Evaluators work in the unit range, so every query is first mapped through
//! [`Domain::normalize`]. Values outside the domain map outside `[0, 1]` and
//! are handled by the evaluators' extrapolation rules.

use crate::error::{Error, Result};
use crate::luma::luma_rec709;

/// Per-channel input range `[min, max]`.
///
/// # Example
///
/// ```rust
/// use lutgrid_core::Domain;
///
/// let domain = Domain::new([-0.1; 3], [1.1; 3]).unwrap();
/// let unit = domain.normalize([0.5, -0.1, 1.1]);
/// assert!((unit[0] - 0.5).abs() < 1e-12);
/// assert!(unit[1].abs() < 1e-12);
/// assert!((unit[2] - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    min: [f64; 3],
    max: [f64; 3],
}

impl Default for Domain {
    fn default() -> Self {
        Self::UNIT
    }
}

impl Domain {
    /// The unit domain `[0, 1]` on every channel.
    pub const UNIT: Self = Self {
        min: [0.0; 3],
        max: [1.0; 3],
    };

    /// Creates a domain, validating every channel.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidDomain`] if a bound is not finite or `max <= min`.
    pub fn new(min: [f64; 3], max: [f64; 3]) -> Result<Self> {
        for c in 0..3 {
            let (lo, hi) = (min[c], max[c]);
            if !lo.is_finite() || !hi.is_finite() || hi <= lo {
                return Err(Error::invalid_domain(c, lo, hi));
            }
        }
        Ok(Self { min, max })
    }

    /// Lower bounds [R, G, B].
    #[inline]
    pub fn min(&self) -> [f64; 3] {
        self.min
    }

    /// Upper bounds [R, G, B].
    #[inline]
    pub fn max(&self) -> [f64; 3] {
        self.max
    }

    /// Returns true for the default `[0, 1]` range.
    #[inline]
    pub fn is_unit(&self) -> bool {
        *self == Self::UNIT
    }

    /// Maps an RGB input into unit coordinates, channel by channel.
    #[inline]
    pub fn normalize(&self, rgb: [f64; 3]) -> [f64; 3] {
        if self.is_unit() {
            return rgb;
        }
        std::array::from_fn(|c| (rgb[c] - self.min[c]) / (self.max[c] - self.min[c]))
    }

    /// Maps a scalar luma input into unit coordinates.
    ///
    /// The luma axis runs along the grey diagonal, so its bounds are the
    /// Rec.709 weighted sums of the per-channel bounds.
    #[inline]
    pub fn normalize_luma(&self, value: f64) -> f64 {
        if self.is_unit() {
            return value;
        }
        let lo = luma_rec709(self.min);
        let hi = luma_rec709(self.max);
        (value - lo) / (hi - lo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_unit_is_passthrough() {
        let d = Domain::default();
        assert!(d.is_unit());
        assert_eq!(d.normalize([-0.5, 0.25, 2.0]), [-0.5, 0.25, 2.0]);
        assert_eq!(d.normalize_luma(1.5), 1.5);
    }

    #[test]
    fn test_per_channel_normalize() {
        let d = Domain::new([0.0, -1.0, 0.0], [2.0, 1.0, 4.0]).unwrap();
        let n = d.normalize([1.0, 0.0, 1.0]);
        assert_abs_diff_eq!(n[0], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(n[1], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(n[2], 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_luma_normalize_uses_weighted_bounds() {
        let d = Domain::new([0.0; 3], [2.0; 3]).unwrap();
        assert_abs_diff_eq!(d.normalize_luma(1.0), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_bad_bounds() {
        assert!(Domain::new([0.0; 3], [1.0, 0.0, 1.0]).is_err());
        assert!(Domain::new([0.0, 0.0, f64::NAN], [1.0; 3]).is_err());
        assert!(Domain::new([0.0; 3], [1.0, 1.0, f64::INFINITY]).is_err());
    }
}
