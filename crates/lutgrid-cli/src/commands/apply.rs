//! Buffer transform command.
//!
//! Reads a raw little-endian f32 RGB buffer, maps every pixel through the
//! grid in parallel and writes the result in the same layout.

use crate::ApplyArgs;
use anyhow::{Context, Result, bail};
use lutgrid_lut::batch;
use std::fs;
use tracing::info;

/// Runs the apply command.
pub fn run(args: ApplyArgs, verbose: bool) -> Result<()> {
    let grid = super::load_grid(&args.grid)?;

    let bytes = fs::read(&args.input)
        .with_context(|| format!("Failed to read: {}", args.input.display()))?;
    let mut pixels = decode_f32(&bytes)?;
    info!(values = pixels.len(), mode = %args.mode, "apply");

    batch::apply_rgb_f32(&grid, &mut pixels, args.mode)
        .with_context(|| format!("Cannot apply grid to {}", args.input.display()))?;

    fs::write(&args.output, encode_f32(&pixels))
        .with_context(|| format!("Failed to write: {}", args.output.display()))?;

    if verbose {
        println!(
            "Applied {} grid to {} pixels -> {}",
            grid.dims(),
            pixels.len() / 3,
            args.output.display()
        );
    }
    Ok(())
}

fn decode_f32(bytes: &[u8]) -> Result<Vec<f32>> {
    if bytes.len() % 4 != 0 {
        bail!("buffer length {} is not a whole number of f32 values", bytes.len());
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

fn encode_f32(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_codec() {
        let values = [0.0f32, -1.5, 0.18, 1e6];
        assert_eq!(decode_f32(&encode_f32(&values)).unwrap(), values);
        assert!(decode_f32(&[0, 0, 0]).is_err());
    }
}
