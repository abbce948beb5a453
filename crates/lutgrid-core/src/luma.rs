//! Rec.709 luma weights.
//!
//! Grids carry a single-channel luma curve next to their RGB samples so that
//! grayscale-only queries touch one sequence instead of three. The same
//! weights recombine RGB results into a scalar.

// ============================================================================
// Rec.709 Luma Constants
// ============================================================================

/// Rec.709 luma coefficient for the red channel.
pub const REC709_LUMA_R: f64 = 0.2126;

/// Rec.709 luma coefficient for the green channel.
pub const REC709_LUMA_G: f64 = 0.7152;

/// Rec.709 luma coefficient for the blue channel.
pub const REC709_LUMA_B: f64 = 0.0722;

/// Rec.709 luma coefficients as an array [R, G, B].
pub const REC709_LUMA: [f64; 3] = [REC709_LUMA_R, REC709_LUMA_G, REC709_LUMA_B];

/// Weighted Rec.709 sum of an RGB triple.
///
/// `Y = 0.2126*R + 0.7152*G + 0.0722*B`
///
/// # Example
/// ```
/// use lutgrid_core::luma_rec709;
/// let y = luma_rec709([0.5, 0.3, 0.2]);
/// assert!((y - 0.3353).abs() < 1e-12);
/// ```
#[inline]
pub fn luma_rec709(rgb: [f64; 3]) -> f64 {
    rgb[0] * REC709_LUMA_R + rgb[1] * REC709_LUMA_G + rgb[2] * REC709_LUMA_B
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_weights_sum_to_one() {
        assert_abs_diff_eq!(REC709_LUMA.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_grey_is_preserved() {
        assert_abs_diff_eq!(luma_rec709([0.18; 3]), 0.18, epsilon = 1e-12);
    }
}
