//! Curve tabulation command.
//!
//! Samples the grid along its luma axis, optionally past both ends of the
//! domain to show the extrapolation.

use crate::CurveArgs;
use anyhow::{Result, bail};
use lutgrid_lut::Grid;

/// Prints `x y` (or `x r g b`) rows.
pub fn run(args: CurveArgs, _verbose: bool) -> Result<()> {
    if args.steps < 2 {
        bail!("--steps must be at least 2, got {}", args.steps);
    }
    let grid = super::load_grid(&args.grid)?;

    for x in sample_points(&grid, args.steps, args.margin) {
        if args.rgb {
            println!("{:.6} {}", x, super::format_rgb(grid.luma_to_rgb(x, args.mode)));
        } else {
            println!("{:.6} {:.6}", x, grid.luma_to_luma(x, args.mode));
        }
    }
    Ok(())
}

/// Evenly spaced inputs covering the luma domain widened by `margin` on
/// each side, as a fraction of its width.
fn sample_points(grid: &Grid, steps: usize, margin: f64) -> Vec<f64> {
    let d = grid.domain();
    let lo = lutgrid_core::luma_rec709(d.min());
    let hi = lutgrid_core::luma_rec709(d.max());
    let pad = (hi - lo) * margin;
    let (start, end) = (lo - pad, hi + pad);
    (0..steps)
        .map(|i| start + (end - start) * i as f64 / (steps - 1) as f64)
        .collect()
}
