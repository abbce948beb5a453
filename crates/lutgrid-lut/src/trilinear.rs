//! Trilinear cell kernel.

use crate::lattice::{CellKernel, Lattice};
use crate::node::Axis;

/// Multilinear blend of the 8 corners of the containing cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct Trilinear;

impl CellKernel for Trilinear {
    fn sample(&self, lattice: &Lattice<'_>, pos: [f64; 3]) -> f64 {
        let (o, [rf, gf, bf]) = lattice.locate(pos);
        let c = |dr: isize, dg: isize, db: isize| {
            lattice.at(o.neighbor(Axis::R, dr).neighbor(Axis::G, dg).neighbor(Axis::B, db))
        };

        // Collapse R, then G, then B
        let c00 = c(0, 0, 0) * (1.0 - rf) + c(1, 0, 0) * rf;
        let c10 = c(0, 1, 0) * (1.0 - rf) + c(1, 1, 0) * rf;
        let c01 = c(0, 0, 1) * (1.0 - rf) + c(1, 0, 1) * rf;
        let c11 = c(0, 1, 1) * (1.0 - rf) + c(1, 1, 1) * rf;

        let c0 = c00 * (1.0 - gf) + c10 * gf;
        let c1 = c01 * (1.0 - gf) + c11 * gf;

        c0 * (1.0 - bf) + c1 * bf
    }
}
