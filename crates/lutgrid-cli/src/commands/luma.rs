//! Single luma evaluation.

use crate::LumaArgs;
use anyhow::Result;

/// Evaluates one luma input, printing luma or RGB.
pub fn run(args: LumaArgs, verbose: bool) -> Result<()> {
    let grid = super::load_grid(&args.grid)?;

    let text = if args.rgb {
        super::format_rgb(grid.luma_to_rgb(args.x, args.mode))
    } else {
        format!("{:.6}", grid.luma_to_luma(args.x, args.mode))
    };

    if verbose {
        println!("{:.6} -> {}", args.x, text);
    } else {
        println!("{}", text);
    }
    Ok(())
}
