//! Identity grid command.

use crate::IdentityArgs;
use anyhow::{Result, bail};
use lutgrid_lut::Grid;

/// Writes an identity grid of the requested shape.
pub fn run(args: IdentityArgs, verbose: bool) -> Result<()> {
    let grid = match args.dims {
        1 => Grid::identity_1d(args.size)?,
        3 => Grid::identity_3d(args.size)?,
        n => bail!("--dims must be 1 or 3, got {}", n),
    }
    .with_info(args.title, "identity");

    super::save_grid(&args.output, &grid)?;

    if verbose {
        println!("Wrote {} identity grid, size {} -> {}", grid.dims(), grid.size(), args.output.display());
    }
    Ok(())
}
