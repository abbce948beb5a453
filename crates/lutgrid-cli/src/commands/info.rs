//! Grid info command.
//!
//! Prints metadata, shape and the value range of each grid.

use crate::InfoArgs;
use anyhow::Result;
use lutgrid_lut::Grid;
use std::path::Path;

/// Runs the info command.
pub fn run(args: InfoArgs, verbose: bool) -> Result<()> {
    for path in &args.input {
        let grid = super::load_grid(path)?;

        if args.json {
            print_json(path, &grid)?;
        } else {
            print_text(path, &grid, verbose);
        }

        if args.input.len() > 1 {
            println!();
        }
    }

    Ok(())
}

/// Min and max over every sample feeding the outputs.
fn value_range(grid: &Grid) -> (f64, f64) {
    let channels: Vec<&[f64]> = match grid.channels() {
        Some(ch) => ch.to_vec(),
        None => vec![grid.luma()],
    };
    channels
        .iter()
        .flat_map(|c| c.iter().copied())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

fn print_text(path: &Path, grid: &Grid, verbose: bool) {
    let (lo, hi) = value_range(grid);
    println!("{}", path.display());
    if !grid.title().is_empty() {
        println!("  Title:      {}", grid.title());
    }
    println!("  Dims:       {}", grid.dims());
    println!("  Size:       {}", grid.size());
    println!(
        "  Channels:   {}",
        if grid.independent_channels() { "independent" } else { "shared curve" }
    );
    println!("  Range:      [{:.6}, {:.6}]", lo, hi);

    if verbose {
        let d = grid.domain();
        if !grid.format().is_empty() {
            println!("  Format:     {}", grid.format());
        }
        println!("  Domain min: {:?}", d.min());
        println!("  Domain max: {:?}", d.max());
        let luma = grid.luma();
        println!("  Luma:       {:.6} .. {:.6}", luma[0], luma[luma.len() - 1]);
    }
}

fn print_json(path: &Path, grid: &Grid) -> Result<()> {
    let (lo, hi) = value_range(grid);
    let info = serde_json::json!({
        "file": path.display().to_string(),
        "title": grid.title(),
        "format": grid.format(),
        "dims": grid.dims(),
        "size": grid.size(),
        "independent": grid.independent_channels(),
        "domain": { "min": grid.domain().min(), "max": grid.domain().max() },
        "range": [lo, hi],
    });
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_range() {
        let grid = Grid::from_fn_3d(4, |[r, g, b]| [r * 2.0, g - 0.5, b]).unwrap();
        assert_eq!(value_range(&grid), (-0.5, 2.0));
        let curve = Grid::identity_1d(4).unwrap();
        assert_eq!(value_range(&curve), (0.0, 1.0));
    }
}
