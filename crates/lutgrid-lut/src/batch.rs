//! Parallel evaluation over interleaved pixel buffers.
//!
//! Buffers hold RGB triples back to back. Work is split into rows of
//! [`ROW_PIXELS`] pixels with rayon's `par_chunks_mut`; each pixel is an
//! independent query against the same immutable grid.
//!
//! # Example
//!
//! ```rust
//! use lutgrid_lut::{batch, Grid, Interpolation};
//!
//! let grid = Grid::identity_3d(17).unwrap();
//! let mut pixels = vec![0.5f32; 1024 * 3];
//! batch::apply_rgb_f32(&grid, &mut pixels, Interpolation::Cubic).unwrap();
//! assert!((pixels[0] - 0.5).abs() < 1e-6);
//! ```

use rayon::prelude::*;
use tracing::trace;

use crate::{Grid, Interpolation, LutError, LutResult};

/// Pixels handed to one rayon task.
pub const ROW_PIXELS: usize = 1024;

fn check_rgb(len: usize) -> LutResult<usize> {
    if len % 3 != 0 {
        return Err(LutError::shape(format!(
            "interleaved RGB buffer length {len} is not a multiple of 3"
        )));
    }
    Ok(len / 3)
}

/// Transforms every RGB triple of `pixels` in place with [`Grid::rgb_to_rgb`].
///
/// # Errors
///
/// [`LutError::Shape`] if the length is not a multiple of 3.
pub fn apply_rgb(grid: &Grid, pixels: &mut [f64], mode: Interpolation) -> LutResult<()> {
    let count = check_rgb(pixels.len())?;
    trace!(count, %mode, dims = %grid.dims(), "batch::apply_rgb");

    pixels.par_chunks_mut(ROW_PIXELS * 3).for_each(|row| {
        for px in row.chunks_exact_mut(3) {
            let out = grid.rgb_to_rgb([px[0], px[1], px[2]], mode);
            px.copy_from_slice(&out);
        }
    });
    Ok(())
}

/// [`apply_rgb`] for `f32` buffers, evaluated in `f64`.
pub fn apply_rgb_f32(grid: &Grid, pixels: &mut [f32], mode: Interpolation) -> LutResult<()> {
    let count = check_rgb(pixels.len())?;
    trace!(count, %mode, dims = %grid.dims(), "batch::apply_rgb_f32");

    pixels.par_chunks_mut(ROW_PIXELS * 3).for_each(|row| {
        for px in row.chunks_exact_mut(3) {
            let out = grid.rgb_to_rgb([px[0] as f64, px[1] as f64, px[2] as f64], mode);
            for (dst, v) in px.iter_mut().zip(out) {
                *dst = v as f32;
            }
        }
    });
    Ok(())
}

/// Luma of every transformed RGB triple of `pixels`, one value per pixel.
///
/// # Errors
///
/// [`LutError::Shape`] if the length is not a multiple of 3.
pub fn rgb_to_luma(grid: &Grid, pixels: &[f64], mode: Interpolation) -> LutResult<Vec<f64>> {
    let count = check_rgb(pixels.len())?;
    trace!(count, %mode, "batch::rgb_to_luma");

    let mut out = vec![0.0; count];
    out.par_chunks_mut(ROW_PIXELS)
        .zip(pixels.par_chunks(ROW_PIXELS * 3))
        .for_each(|(dst, src)| {
            for (y, px) in dst.iter_mut().zip(src.chunks_exact(3)) {
                *y = grid.rgb_to_luma([px[0], px[1], px[2]], mode);
            }
        });
    Ok(out)
}
