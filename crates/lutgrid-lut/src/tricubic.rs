//! Tricubic cell kernel.
//!
//! Hermite interpolation is applied one axis at a time:
//!
//! - along R, between the two samples of a grid row;
//! - along G, between two R-interpolated values, with G slopes estimated from
//!   further R-interpolated values on the neighbouring rows;
//! - along B, between two G-interpolated values, with B slopes estimated from
//!   the same construction repeated on the neighbouring planes.
//!
//! Each stage is [`hermite_segment`] over a sequence produced by the stage
//! below it, so the edge rules of the slope estimator apply relative to each
//! axis' own index. A stage never reads further than one index beyond the
//! cell on either side, giving at most `4^3` sample reads per evaluation.

use crate::lattice::{CellKernel, Lattice};
use crate::node::{Axis, Node};
use crate::slope::hermite_segment;

/// Hermite cubic interpolation across three axes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tricubic;

/// Interpolates `field` along `axis` from `node` to its upper neighbour.
///
/// `field` is any function of a grid node. Only the index along `axis` is
/// varied; the other two come from `node`.
#[inline]
fn along<F: Fn(Node) -> f64>(field: &F, node: Node, axis: Axis, t: f64, last: usize) -> f64 {
    hermite_segment(|i| field(node.with(axis, i)), node.get(axis), last, t)
}

impl CellKernel for Tricubic {
    fn sample(&self, lattice: &Lattice<'_>, pos: [f64; 3]) -> f64 {
        let (origin, [tr, tg, tb]) = lattice.locate(pos);
        let last = lattice.last();

        // Every node handed down keeps the origin's index on the axes not
        // yet interpolated, so each stage starts from the cell's low corner.
        let stored = |n: Node| lattice.at(n);
        let red = |n: Node| along(&stored, n, Axis::R, tr, last);
        let green = |n: Node| along(&red, n, Axis::G, tg, last);
        along(&green, origin, Axis::B, tb, last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn cube(size: usize, f: impl Fn(f64, f64, f64) -> f64) -> Vec<f64> {
        let mut out = Vec::with_capacity(size * size * size);
        for b in 0..size {
            for g in 0..size {
                for r in 0..size {
                    out.push(f(r as f64, g as f64, b as f64));
                }
            }
        }
        out
    }

    #[test]
    fn test_exact_at_nodes() {
        let size = 5;
        let samples = cube(size, |r, g, b| (0.3 * r).sin() + g * g * 0.1 - (b * 0.7).cos());
        let lattice = Lattice::new(&samples, size);
        for b in 0..size - 1 {
            for g in 0..size - 1 {
                for r in 0..size - 1 {
                    let v = Tricubic.sample(&lattice, [r as f64, g as f64, b as f64]);
                    assert_abs_diff_eq!(v, lattice.at(Node::new(r, g, b)), epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_reproduces_trilinear_functions() {
        let size = 6;
        let f = |r: f64, g: f64, b: f64| 0.5 + 0.25 * r - 0.125 * g + 2.0 * b + 0.01 * r * g * b;
        let samples = cube(size, f);
        let lattice = Lattice::new(&samples, size);
        for p in [[0.1, 0.2, 0.3], [4.9, 0.5, 2.2], [2.5, 4.75, 4.99], [0.0, 3.3, 1.7]] {
            assert_abs_diff_eq!(Tricubic.sample(&lattice, p), f(p[0], p[1], p[2]), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_reproduces_quadratics() {
        // Central and one-sided slopes are exact for quadratics, so the
        // interpolant is exact everywhere, including edge cells.
        let size = 5;
        let f = |r: f64, g: f64, b: f64| r * r - 0.5 * g * g + 0.25 * b * b + r * b;
        let samples = cube(size, f);
        let lattice = Lattice::new(&samples, size);
        for p in [[0.5, 0.5, 0.5], [3.5, 1.25, 3.75], [0.1, 3.9, 2.0], [3.99, 3.99, 0.01]] {
            assert_abs_diff_eq!(Tricubic.sample(&lattice, p), f(p[0], p[1], p[2]), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_matches_separable_curves() {
        // For f(r,g,b) = u(r) + v(g) + w(b) each axis interpolates independently.
        use crate::curve::Curve;
        let size = 7;
        let u = |x: f64| (x * 0.4).exp();
        let v = |x: f64| x.sqrt();
        let w = |x: f64| (x * 0.9).sin();
        let samples = cube(size, |r, g, b| u(r) + v(g) + w(b));
        let lattice = Lattice::new(&samples, size);

        let us: Vec<f64> = (0..size).map(|i| u(i as f64)).collect();
        let vs: Vec<f64> = (0..size).map(|i| v(i as f64)).collect();
        let ws: Vec<f64> = (0..size).map(|i| w(i as f64)).collect();
        let max = (size - 1) as f64;

        for p in [[0.3, 5.6, 2.2], [5.5, 0.4, 0.9], [3.1, 3.2, 5.95]] {
            let expected = Curve::new(&us).unwrap().cubic(p[0] / max)
                + Curve::new(&vs).unwrap().cubic(p[1] / max)
                + Curve::new(&ws).unwrap().cubic(p[2] / max);
            assert_abs_diff_eq!(Tricubic.sample(&lattice, p), expected, epsilon = 1e-9);
        }
    }
}
