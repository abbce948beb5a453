//! Cube views and the out-of-domain policy shared by 3D kernels.
//!
//! Kernels ([`crate::Tricubic`], [`crate::Trilinear`]) only ever see
//! coordinates inside the cube. [`eval_cube`] does the rest:
//!
//! 1. Scale each unit input to grid units and clamp it into
//!    `[0, (size-1)*(1-CLIP_EPSILON)]`, remembering which side was clipped.
//! 2. Run the kernel at the clamped position for every output channel.
//! 3. For each clipped input channel `k`, rebuild output channel `k` by
//!    linear extrapolation along axis `k`, with the slope estimated from three
//!    kernel samples next to the clamped edge.
//!
//! Keeping the high clamp a hair below `size-1` leaves the containing cell
//! well defined.

use crate::node::{Axis, Node};
use crate::slope::{extrapolate, slope};

/// Relative distance kept between the high clamp and the last grid index.
pub const CLIP_EPSILON: f64 = 1e-12;

/// One output channel of a cube, `size^3` samples stored R-fastest.
#[derive(Debug, Clone, Copy)]
pub struct Lattice<'a> {
    samples: &'a [f64],
    size: usize,
}

impl<'a> Lattice<'a> {
    /// Wraps a channel buffer; `samples.len()` must be `size^3`.
    #[inline]
    pub fn new(samples: &'a [f64], size: usize) -> Self {
        debug_assert_eq!(samples.len(), size * size * size);
        Self { samples, size }
    }

    /// Highest index along any axis.
    #[inline]
    pub fn last(&self) -> usize {
        self.size - 1
    }

    /// Stored sample at `node`.
    #[inline]
    pub fn at(&self, node: Node) -> f64 {
        self.samples[node.index(self.size)]
    }

    /// Cell origin and fractional offsets for an in-cube position.
    ///
    /// `pos` is in grid units with every component in `[0, size-1)`.
    #[inline]
    pub fn locate(&self, pos: [f64; 3]) -> (Node, [f64; 3]) {
        let cell = self.size - 2;
        let base: [usize; 3] = std::array::from_fn(|k| (pos[k].floor() as usize).min(cell));
        let frac = std::array::from_fn(|k| pos[k] - base[k] as f64);
        (Node::new(base[0], base[1], base[2]), frac)
    }
}

/// Interpolation inside one cube cell.
///
/// Implementors read only samples of `lattice` and may assume every
/// component of `pos` lies in `[0, size-1)`.
pub trait CellKernel {
    /// Interpolated value at `pos`, in grid units.
    fn sample(&self, lattice: &Lattice<'_>, pos: [f64; 3]) -> f64;
}

/// Which side of the grid an input channel fell off, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clip {
    /// Inside `[0, size-1)`.
    None,
    /// Below the first sample.
    Low,
    /// At or above the last sample.
    High,
}

/// Clamps a grid-unit coordinate into the cube.
#[inline]
pub fn clamp_axis(l: f64, max: f64) -> (f64, Clip) {
    if l < 0.0 {
        (0.0, Clip::Low)
    } else if l >= max {
        (max * (1.0 - CLIP_EPSILON), Clip::High)
    } else {
        (l, Clip::None)
    }
}

/// Evaluates the three channels of a cube at a unit RGB input.
///
/// Inputs outside `[0, 1]` follow the policy described in the module docs;
/// the extrapolation of output channel `k` only looks along input axis `k`.
pub fn eval_cube<K: CellKernel>(kernel: &K, channels: [Lattice<'_>; 3], rgb: [f64; 3]) -> [f64; 3] {
    let last = channels[0].last();
    let max = last as f64;

    let mut pos = [0.0; 3];
    let mut clip = [Clip::None; 3];
    for k in 0..3 {
        (pos[k], clip[k]) = clamp_axis(rgb[k] * max, max);
    }

    let mut out: [f64; 3] = std::array::from_fn(|c| kernel.sample(&channels[c], pos));

    for axis in Axis::ALL {
        let k = axis.index();
        let lattice = &channels[k];
        let along = |offset: f64| {
            let mut p = pos;
            p[k] = offset;
            kernel.sample(lattice, p)
        };
        match clip[k] {
            Clip::None => {}
            Clip::Low => {
                let p = [along(0.0), along(1.0), along(2.0)];
                let dy = slope(|i| p[i], 0, 2);
                out[k] = extrapolate(p[0], dy, rgb[k] * max);
            }
            Clip::High => {
                let edge = pos[k];
                let p = [along(edge - 2.0), along(edge - 1.0), along(edge)];
                let dy = slope(|i| p[i], 2, 2);
                out[k] = extrapolate(p[2], dy, rgb[k] * max - max);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Kernel that ignores the samples and returns the coordinate sum.
    struct Coordinates;

    impl CellKernel for Coordinates {
        fn sample(&self, _lattice: &Lattice<'_>, pos: [f64; 3]) -> f64 {
            pos[0] + 10.0 * pos[1] + 100.0 * pos[2]
        }
    }

    #[test]
    fn test_clamp_axis() {
        assert_eq!(clamp_axis(-0.5, 4.0), (0.0, Clip::Low));
        assert_eq!(clamp_axis(2.5, 4.0), (2.5, Clip::None));
        let (v, c) = clamp_axis(4.0, 4.0);
        assert_eq!(c, Clip::High);
        assert!(v < 4.0 && v > 4.0 - 1e-9);
    }

    #[test]
    fn test_locate() {
        let samples = vec![0.0; 64];
        let lattice = Lattice::new(&samples, 4);
        let (node, frac) = lattice.locate([0.25, 1.5, 2.999]);
        assert_eq!(node, Node::new(0, 1, 2));
        assert_abs_diff_eq!(frac[0], 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(frac[1], 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(frac[2], 0.999, epsilon = 1e-12);
    }

    #[test]
    fn test_in_domain_passes_through() {
        let samples = vec![0.0; 125];
        let lattice = Lattice::new(&samples, 5);
        let out = eval_cube(&Coordinates, [lattice; 3], [0.25, 0.5, 0.75]);
        for v in out {
            assert_abs_diff_eq!(v, 1.0 + 20.0 + 300.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_out_of_domain_extrapolates_own_axis_only() {
        let samples = vec![0.0; 125];
        let lattice = Lattice::new(&samples, 5);
        // Red below, blue above.
        let out = eval_cube(&Coordinates, [lattice; 3], [-0.25, 0.5, 1.25]);
        let clamped = 0.0 + 20.0 + 400.0;
        // Red output follows the red axis past zero: slope 1 per step.
        assert_abs_diff_eq!(out[0], clamped - 1.0, epsilon = 1e-6);
        // Green input was in range: kernel value at the clamped point.
        assert_abs_diff_eq!(out[1], clamped, epsilon = 1e-6);
        // Blue output follows the blue axis past the top: slope 100 per step.
        assert_abs_diff_eq!(out[2], clamped + 100.0, epsilon = 1e-6);
    }
}
