//! CLI command implementations

pub mod apply;
pub mod curve;
pub mod eval;
pub mod identity;
pub mod info;
pub mod luma;

use anyhow::{Context, Result};
use lutgrid_lut::{Grid, GridDetails};
use std::path::Path;

/// Load a grid from its JSON exchange form
pub fn load_grid(path: &Path) -> Result<Grid> {
    let details = GridDetails::load(path)
        .with_context(|| format!("Failed to load: {}", path.display()))?;
    Grid::from_details(details).with_context(|| format!("Invalid grid: {}", path.display()))
}

/// Save a grid as JSON
pub fn save_grid(path: &Path, grid: &Grid) -> Result<()> {
    grid.details()
        .save(path)
        .with_context(|| format!("Failed to save: {}", path.display()))
}

/// Format an RGB triple for display
pub fn format_rgb(rgb: [f64; 3]) -> String {
    format!("{:.6} {:.6} {:.6}", rgb[0], rgb[1], rgb[2])
}
