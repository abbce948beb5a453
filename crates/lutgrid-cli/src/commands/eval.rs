//! Single RGB evaluation.

use crate::EvalArgs;
use anyhow::Result;
use tracing::info;

/// Evaluates one RGB input and prints the result.
pub fn run(args: EvalArgs, verbose: bool) -> Result<()> {
    let grid = super::load_grid(&args.grid)?;
    let input = [args.r, args.g, args.b];
    info!(dims = %grid.dims(), mode = %args.mode, ?input, "eval");

    let out = grid.rgb_to_rgb(input, args.mode);

    if verbose {
        println!("{} -> {}", super::format_rgb(input), super::format_rgb(out));
    } else {
        println!("{}", super::format_rgb(out));
    }
    if args.luma {
        println!("{:.6}", lutgrid_core::luma_rec709(out));
    }
    Ok(())
}
