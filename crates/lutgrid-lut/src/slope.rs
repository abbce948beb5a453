//! Boundary derivative estimator and Hermite cubic segment.
//!
//! Every evaluator in this crate gets its slopes from [`slope`]. The sequence
//! is passed as an index function rather than a slice, so the same estimator
//! runs over stored samples, strided views into a cube, and values that were
//! themselves interpolated along another axis.
//!
//! | index           | estimate                                        |
//! |-----------------|-------------------------------------------------|
//! | `0`             | `(4*y[1] - 3*y[0] - y[2]) / 2`                  |
//! | `0 < i < last`  | `(y[i+1] - y[i-1]) / 2`                         |
//! | `last`          | `0.5*y[last-2] - 2*y[last-1] + 1.5*y[last]`     |
//!
//! The edge rows are the derivatives of the quadratic through the three
//! samples nearest the edge, so a quadratic is reproduced exactly there.

/// Estimated first derivative of `y` at `index`, in samples per step.
///
/// `last` is the highest valid index and must be at least 2. Only indices in
/// `0..=last` are read, and for `0 < index < last` only `index - 1` and
/// `index + 1`.
#[inline]
pub fn slope<F: Fn(usize) -> f64>(y: F, index: usize, last: usize) -> f64 {
    debug_assert!(last >= 2, "slope estimate needs three samples");
    if index == 0 {
        (4.0 * y(1) - 3.0 * y(0) - y(2)) / 2.0
    } else if index >= last {
        0.5 * y(last - 2) - 2.0 * y(last - 1) + 1.5 * y(last)
    } else {
        (y(index + 1) - y(index - 1)) / 2.0
    }
}

/// [`slope`] over a sequence embedded in a larger buffer.
///
/// Element `i` of the sequence is `values[offset + i * stride]`; `last` is
/// the highest sequence index.
#[inline]
pub fn slope_strided(values: &[f64], offset: usize, stride: usize, index: usize, last: usize) -> f64 {
    slope(|i| values[offset + i * stride], index, last)
}

/// Cubic Hermite segment from `(p0, d0)` at `t = 0` to `(p1, d1)` at `t = 1`.
///
/// `a*t^3 + b*t^2 + c*t + d` with `a = 2p0 + d0 - 2p1 + d1`,
/// `b = -3p0 - 2d0 + 3p1 - d1`, `c = d0`, `d = p0`.
#[inline]
pub fn hermite(p0: f64, p1: f64, d0: f64, d1: f64, t: f64) -> f64 {
    let a = 2.0 * p0 + d0 - 2.0 * p1 + d1;
    let b = -3.0 * p0 - 2.0 * d0 + 3.0 * p1 - d1;
    ((a * t + b) * t + d0) * t + p0
}

/// Hermite interpolation of `y` between indices `i` and `i + 1`.
///
/// Both endpoint slopes come from [`slope`], so near an edge the one-sided
/// estimates are used. Every index the two estimates touch lies in
/// `i-1 ..= i+2`, so `y` is called at most four times; this matters when `y`
/// is itself an interpolation along another axis.
///
/// Requires `i + 1 <= last` and `last >= 3`.
#[inline]
pub fn hermite_segment<F: Fn(usize) -> f64>(y: F, i: usize, last: usize, t: f64) -> f64 {
    let lo = i.saturating_sub(1);
    let hi = (i + 2).min(last);
    let mut window = [0.0; 4];
    for k in lo..=hi {
        window[k - lo] = y(k);
    }
    let w = |k: usize| window[k - lo];
    hermite(w(i), w(i + 1), slope(w, i, last), slope(w, i + 1, last), t)
}

/// Value `steps` grid steps past an edge sample, following the edge slope.
///
/// `steps` is negative below the first sample and positive above the last.
#[inline]
pub fn extrapolate(edge: f64, slope: f64, steps: f64) -> f64 {
    edge + steps * slope
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn quad(i: usize) -> f64 {
        let x = i as f64;
        0.5 * x * x - x + 2.0
    }

    fn quad_slope(i: usize) -> f64 {
        i as f64 - 1.0
    }

    #[test]
    fn test_interior_is_central_difference() {
        let y = [0.0, 1.0, 4.0, 9.0, 16.0];
        assert_abs_diff_eq!(slope(|i| y[i], 2, 4), 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(slope(|i| y[i], 1, 4), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(slope(|i| y[i], 3, 4), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_edges_are_exact_for_quadratics() {
        let last = 6;
        for i in [0, last] {
            assert_abs_diff_eq!(slope(quad, i, last), quad_slope(i), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_edge_formulas() {
        let y = [1.0, 3.0, 4.0, 7.0, 11.0];
        assert_abs_diff_eq!(slope(|i| y[i], 0, 4), (4.0 * 3.0 - 3.0 * 1.0 - 4.0) / 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(slope(|i| y[i], 4, 4), 0.5 * 4.0 - 2.0 * 7.0 + 1.5 * 11.0, epsilon = 1e-12);
    }

    #[test]
    fn test_strided_reads_every_nth() {
        // Sequence 0, 2, 4, 6 stored at stride 3 after one padding element.
        let values = [9.0, 0.0, -1.0, -1.0, 2.0, -1.0, -1.0, 4.0, -1.0, -1.0, 6.0];
        for i in 0..=3 {
            assert_abs_diff_eq!(slope_strided(&values, 1, 3, i, 3), 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_hermite_endpoints() {
        assert_abs_diff_eq!(hermite(0.3, 0.9, 1.7, -0.4, 0.0), 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(hermite(0.3, 0.9, 1.7, -0.4, 1.0), 0.9, epsilon = 1e-12);
    }

    #[test]
    fn test_hermite_reproduces_lines() {
        for k in 0..=10 {
            let t = k as f64 / 10.0;
            assert_abs_diff_eq!(hermite(1.0, 3.0, 2.0, 2.0, t), 1.0 + 2.0 * t, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_segment_at_every_cell() {
        let last = 5;
        for i in 0..last {
            assert_abs_diff_eq!(hermite_segment(quad, i, last, 0.0), quad(i), epsilon = 1e-12);
            assert_abs_diff_eq!(hermite_segment(quad, i, last, 1.0), quad(i + 1), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_segment_calls_stay_in_range() {
        let last = 3;
        let y = |k: usize| {
            assert!(k <= last, "read past the end: {k}");
            k as f64
        };
        for i in 0..last {
            assert_abs_diff_eq!(hermite_segment(y, i, last, 0.5), i as f64 + 0.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_extrapolate() {
        assert_abs_diff_eq!(extrapolate(1.0, 0.5, -2.0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(extrapolate(1.0, 0.5, 2.0), 2.0, epsilon = 1e-12);
    }
}
