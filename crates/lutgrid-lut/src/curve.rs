//! One-dimensional evaluation.
//!
//! A [`Curve`] is a borrowed view of `len` samples spaced evenly over the
//! unit input range. The samples may be contiguous (a 1D channel or the luma
//! sequence) or strided through a larger buffer (the grey diagonal of a
//! cube, stride `1 + size + size^2`).
//!
//! Inputs are scaled to grid units `l = x * (len - 1)`:
//! - `l < 0`: linear extrapolation from the first sample with the left edge slope
//! - `l >= len - 1`: linear extrapolation from the last sample with the right edge slope
//! - otherwise Hermite cubic or linear interpolation inside the cell `floor(l)`

use crate::{Interpolation, LutError, LutResult, MIN_SIZE};
use crate::slope::{extrapolate, hermite_segment, slope_strided};

/// Read-only view of an evenly sampled 1D function.
#[derive(Debug, Clone, Copy)]
pub struct Curve<'a> {
    values: &'a [f64],
    offset: usize,
    stride: usize,
    len: usize,
}

impl<'a> Curve<'a> {
    /// Contiguous curve over every element of `values`.
    ///
    /// # Errors
    ///
    /// [`LutError::Degenerate`] for fewer than [`MIN_SIZE`] samples.
    pub fn new(values: &'a [f64]) -> LutResult<Self> {
        Self::strided(values, 0, 1, values.len())
    }

    /// Curve whose sample `i` is `values[offset + i * stride]`, for `i < len`.
    ///
    /// # Errors
    ///
    /// - [`LutError::Degenerate`] when `len` is below [`MIN_SIZE`]
    /// - [`LutError::Shape`] when the last sample lies past the end of `values`
    pub fn strided(values: &'a [f64], offset: usize, stride: usize, len: usize) -> LutResult<Self> {
        if len < MIN_SIZE {
            return Err(LutError::Degenerate { size: len, min: MIN_SIZE });
        }
        let last = (len - 1)
            .checked_mul(stride)
            .and_then(|v| v.checked_add(offset))
            .filter(|&i| i < values.len());
        if last.is_none() {
            return Err(LutError::shape(format!(
                "{len} samples at offset {offset}, stride {stride} overrun a buffer of {}",
                values.len()
            )));
        }
        Ok(Self::view(values, offset, stride, len))
    }

    /// Unchecked view for buffers already validated by a [`crate::Grid`].
    #[inline]
    pub(crate) fn view(values: &'a [f64], offset: usize, stride: usize, len: usize) -> Self {
        debug_assert!(len >= MIN_SIZE && offset + (len - 1) * stride < values.len());
        Self {
            values,
            offset,
            stride,
            len,
        }
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; curves hold at least 4 samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Sample `i`.
    #[inline]
    pub fn at(&self, i: usize) -> f64 {
        self.values[self.offset + i * self.stride]
    }

    #[inline]
    fn last(&self) -> usize {
        self.len - 1
    }

    /// Boundary-aware slope at sample `i`, in output units per grid step.
    #[inline]
    pub fn slope(&self, i: usize) -> f64 {
        slope_strided(self.values, self.offset, self.stride, i, self.last())
    }

    /// Hermite cubic evaluation at unit coordinate `x`.
    pub fn cubic(&self, x: f64) -> f64 {
        self.eval_with(x, |base, t| {
            hermite_segment(|k| self.at(k), base, self.last(), t)
        })
    }

    /// Linear evaluation at unit coordinate `x`.
    pub fn linear(&self, x: f64) -> f64 {
        self.eval_with(x, |base, t| {
            self.at(base) * (1.0 - t) + self.at(base + 1) * t
        })
    }

    /// Evaluation with the given method.
    #[inline]
    pub fn eval(&self, x: f64, method: Interpolation) -> f64 {
        match method {
            Interpolation::Cubic => self.cubic(x),
            Interpolation::Linear => self.linear(x),
        }
    }

    /// Shared domain handling; `inside` receives the cell index and the
    /// fraction within it.
    #[inline]
    fn eval_with(&self, x: f64, inside: impl Fn(usize, f64) -> f64) -> f64 {
        let last = self.last();
        let max = last as f64;
        let l = x * max;
        if l < 0.0 {
            extrapolate(self.at(0), self.slope(0), l)
        } else if l >= max {
            extrapolate(self.at(last), self.slope(last), l - max)
        } else {
            // NaN lands here with base 0 and propagates through `t`.
            let base = (l.floor() as usize).min(last - 1);
            inside(base, l - base as f64)
        }
    }
}
