//! The lookup grid container and its queries.
//!
//! A [`Grid`] holds the samples of a colour transform over one axis (a set
//! of curves) or three axes (a cube), plus a derived luma curve. It is
//! immutable once built; every query is a pure function of the grid and its
//! input, so a grid can be shared across threads freely.
//!
//! # Queries
//!
//! | method                          | grid   | input | output |
//! |---------------------------------|--------|-------|--------|
//! | [`Grid::luma_cubic`] / `_linear`   | any    | luma  | luma   |
//! | [`Grid::curves_cubic`] / `_linear` | 1D     | RGB   | RGB    |
//! | [`Grid::tricubic`] / [`Grid::trilinear`] | 3D | RGB | RGB |
//! | [`Grid::rgb_to_rgb`]            | any    | RGB   | RGB    |
//! | [`Grid::rgb_to_luma`]           | any    | RGB   | luma   |
//! | [`Grid::luma_to_rgb`]           | any    | luma  | RGB    |
//!
//! Inputs are first mapped through the grid's [`Domain`]. Inputs outside
//! the domain are never an error: they are extrapolated linearly from the
//! nearest edge using the boundary slope estimate.
//!
//! # Example
//!
//! ```rust
//! use lutgrid_lut::{Grid, Interpolation};
//!
//! let grid = Grid::from_fn_3d(17, |[r, g, b]| [r * r, g, b.sqrt()]).unwrap();
//! let out = grid.rgb_to_rgb([0.5, 0.25, 0.81], Interpolation::Cubic);
//! assert!((out[0] - 0.25).abs() < 1e-6);
//! ```

use std::fmt;

use lutgrid_core::{Domain, luma_rec709};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::curve::Curve;
use crate::lattice::{CellKernel, Lattice, eval_cube};
use crate::node::Node;
use crate::{Interpolation, LutError, LutResult, Tricubic, Trilinear};

/// Smallest number of samples per axis.
///
/// The edge slope estimates read three samples from one side, and the cubic
/// segments next to an edge need a fourth.
pub const MIN_SIZE: usize = 4;

/// Number of input axes of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dims {
    /// Per-channel curves indexed by a single input value.
    #[serde(rename = "1d")]
    One,
    /// A cube indexed by RGB.
    #[serde(rename = "3d")]
    Three,
}

impl Dims {
    /// Parses an axis count.
    ///
    /// # Errors
    ///
    /// [`LutError::Shape`] for anything other than 1 or 3.
    pub fn from_axis_count(axes: usize) -> LutResult<Self> {
        match axes {
            1 => Ok(Self::One),
            3 => Ok(Self::Three),
            n => Err(LutError::shape(format!("axis count must be 1 or 3, got {n}"))),
        }
    }

    /// 1 or 3.
    #[inline]
    pub fn axis_count(self) -> usize {
        match self {
            Self::One => 1,
            Self::Three => 3,
        }
    }

    /// Samples per channel for a grid of edge length `size`.
    pub fn channel_len(self, size: usize) -> Option<usize> {
        match self {
            Self::One => Some(size),
            Self::Three => size.checked_mul(size)?.checked_mul(size),
        }
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.axis_count())
    }
}

/// An immutable 1D or 3D lookup grid.
///
/// Sample values are `f64`. 3D channels are stored R-fastest:
/// `index(r, g, b) = r + size*g + size^2*b`.
///
/// A 1D grid is either a single shared curve (every channel maps through
/// [`Grid::luma`]) or three independent curves. 3D grids always carry three
/// channels.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    dims: Dims,
    size: usize,
    /// `None` for a shared 1D curve.
    channels: Option<[Vec<f64>; 3]>,
    luma: Vec<f64>,
    domain: Domain,
    title: String,
    format: String,
}

impl Grid {
    /// Builds a grid from raw sample buffers.
    ///
    /// - `axis_count` 1 with only `r`: a single shared curve
    /// - `axis_count` 1 with `r`, `g` and `b`: independent channel curves
    /// - `axis_count` 3 with `r`, `g` and `b`: a cube, each buffer `size^3` long
    ///
    /// The luma curve is derived before returning.
    ///
    /// # Errors
    ///
    /// - [`LutError::Shape`] for a bad axis count, channel combination or length
    /// - [`LutError::Degenerate`] when `size` is below [`MIN_SIZE`]
    pub fn build(
        axis_count: usize,
        size: usize,
        r: Vec<f64>,
        g: Option<Vec<f64>>,
        b: Option<Vec<f64>>,
    ) -> LutResult<Self> {
        let dims = Dims::from_axis_count(axis_count)?;
        if size < MIN_SIZE {
            return Err(LutError::Degenerate { size, min: MIN_SIZE });
        }
        let expected = dims
            .channel_len(size)
            .ok_or_else(|| LutError::shape(format!("grid size {size} overflows")))?;

        let (channels, luma) = match (dims, g, b) {
            (Dims::One, None, None) => {
                check_len("R", &r, expected)?;
                (None, r)
            }
            (_, Some(g), Some(b)) => {
                let channels = [r, g, b];
                for (name, ch) in ["R", "G", "B"].into_iter().zip(&channels) {
                    check_len(name, ch, expected)?;
                }
                let luma = derive_luma(dims, size, &channels);
                (Some(channels), luma)
            }
            (Dims::Three, _, _) => {
                return Err(LutError::shape("3D grid needs R, G and B channels"));
            }
            (Dims::One, _, _) => {
                return Err(LutError::shape("1D grid needs either R only or all of R, G and B"));
            }
        };
        let grid = Self::assemble(dims, size, channels, luma);

        debug!(
            dims = %grid.dims,
            size,
            independent = grid.independent_channels(),
            "built grid"
        );
        Ok(grid)
    }

    fn assemble(dims: Dims, size: usize, channels: Option<[Vec<f64>; 3]>, luma: Vec<f64>) -> Self {
        Self {
            dims,
            size,
            channels,
            luma,
            domain: Domain::UNIT,
            title: String::new(),
            format: String::new(),
        }
    }

    /// Single shared 1D curve.
    pub fn curve(values: Vec<f64>) -> LutResult<Self> {
        let size = values.len();
        Self::build(1, size, values, None, None)
    }

    /// Independent 1D curves, one per channel.
    pub fn curves(r: Vec<f64>, g: Vec<f64>, b: Vec<f64>) -> LutResult<Self> {
        let size = r.len();
        Self::build(1, size, r, Some(g), Some(b))
    }

    /// Cube from three R-fastest channel buffers of `size^3` samples.
    pub fn cube(size: usize, r: Vec<f64>, g: Vec<f64>, b: Vec<f64>) -> LutResult<Self> {
        Self::build(3, size, r, Some(g), Some(b))
    }

    /// Shared 1D identity curve.
    pub fn identity_1d(size: usize) -> LutResult<Self> {
        let max = size.saturating_sub(1).max(1) as f64;
        Self::curve((0..size).map(|i| i as f64 / max).collect())
    }

    /// Identity cube.
    pub fn identity_3d(size: usize) -> LutResult<Self> {
        Self::from_fn_3d(size, |rgb| rgb)
    }

    /// Cube sampled from `f` at every node.
    ///
    /// `f` receives the node's unit coordinates.
    pub fn from_fn_3d(size: usize, f: impl Fn([f64; 3]) -> [f64; 3]) -> LutResult<Self> {
        if size < MIN_SIZE {
            return Err(LutError::Degenerate { size, min: MIN_SIZE });
        }
        let total = Dims::Three
            .channel_len(size)
            .ok_or_else(|| LutError::shape(format!("grid size {size} overflows")))?;
        let max = (size - 1) as f64;
        let mut channels = [
            Vec::with_capacity(total),
            Vec::with_capacity(total),
            Vec::with_capacity(total),
        ];
        for b in 0..size {
            for g in 0..size {
                for r in 0..size {
                    let out = f([r as f64 / max, g as f64 / max, b as f64 / max]);
                    for (ch, v) in channels.iter_mut().zip(out) {
                        ch.push(v);
                    }
                }
            }
        }
        let [r, g, b] = channels;
        Self::cube(size, r, g, b)
    }

    /// Sets the title and format tag.
    pub fn with_info(mut self, title: impl Into<String>, format: impl Into<String>) -> Self {
        self.title = title.into();
        self.format = format.into();
        self
    }

    /// Sets the input domain.
    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    /// 1D or 3D.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Samples per axis.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true for per-channel curves.
    #[inline]
    pub fn is_1d(&self) -> bool {
        self.dims == Dims::One
    }

    /// Returns true for a cube.
    #[inline]
    pub fn is_3d(&self) -> bool {
        self.dims == Dims::Three
    }

    /// False for a 1D grid whose channels share one curve.
    #[inline]
    pub fn independent_channels(&self) -> bool {
        self.channels.is_some()
    }

    /// The derived luma curve, `size` samples.
    ///
    /// For a shared 1D curve this is the curve itself.
    #[inline]
    pub fn luma(&self) -> &[f64] {
        &self.luma
    }

    /// The R, G and B sample buffers, absent for a shared 1D curve.
    pub fn channels(&self) -> Option<[&[f64]; 3]> {
        self.channels
            .as_ref()
            .map(|[r, g, b]| [r.as_slice(), g.as_slice(), b.as_slice()])
    }

    /// Samples feeding output channel `c`; the shared curve if there is one.
    #[inline]
    pub fn channel(&self, c: usize) -> &[f64] {
        match &self.channels {
            Some(ch) => &ch[c],
            None => &self.luma,
        }
    }

    /// Input range mapped onto the grid.
    #[inline]
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Human-readable name, empty if unset.
    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Free-form tag naming where the data came from, e.g. `"cube"`.
    #[inline]
    pub fn format(&self) -> &str {
        &self.format
    }

    // === Luma queries ===

    /// Hermite cubic evaluation of the luma curve.
    pub fn luma_cubic(&self, x: f64) -> f64 {
        self.luma_curve().cubic(self.domain.normalize_luma(x))
    }

    /// Linear evaluation of the luma curve.
    pub fn luma_linear(&self, x: f64) -> f64 {
        self.luma_curve().linear(self.domain.normalize_luma(x))
    }

    // === 1D RGB queries ===

    /// Maps each channel through its curve with Hermite cubic interpolation.
    ///
    /// # Errors
    ///
    /// [`LutError::WrongDimensions`] on a 3D grid.
    pub fn curves_cubic(&self, rgb: [f64; 3]) -> LutResult<[f64; 3]> {
        self.expect_dims("curves_cubic", Dims::One)?;
        Ok(self.eval_curves(rgb, Interpolation::Cubic))
    }

    /// Maps each channel through its curve with linear interpolation.
    ///
    /// # Errors
    ///
    /// [`LutError::WrongDimensions`] on a 3D grid.
    pub fn curves_linear(&self, rgb: [f64; 3]) -> LutResult<[f64; 3]> {
        self.expect_dims("curves_linear", Dims::One)?;
        Ok(self.eval_curves(rgb, Interpolation::Linear))
    }

    // === 3D queries ===

    /// Tricubic evaluation of the cube.
    ///
    /// # Errors
    ///
    /// [`LutError::WrongDimensions`] on a 1D grid.
    pub fn tricubic(&self, rgb: [f64; 3]) -> LutResult<[f64; 3]> {
        self.expect_dims("tricubic", Dims::Three)?;
        Ok(self.eval_cube(&Tricubic, rgb))
    }

    /// Trilinear evaluation of the cube.
    ///
    /// # Errors
    ///
    /// [`LutError::WrongDimensions`] on a 1D grid.
    pub fn trilinear(&self, rgb: [f64; 3]) -> LutResult<[f64; 3]> {
        self.expect_dims("trilinear", Dims::Three)?;
        Ok(self.eval_cube(&Trilinear, rgb))
    }

    // === Dispatching queries ===

    /// RGB in, RGB out: channel curves on a 1D grid, the cube on a 3D grid.
    pub fn rgb_to_rgb(&self, rgb: [f64; 3], mode: Interpolation) -> [f64; 3] {
        match (self.dims, mode) {
            (Dims::One, _) => self.eval_curves(rgb, mode),
            (Dims::Three, Interpolation::Cubic) => self.eval_cube(&Tricubic, rgb),
            (Dims::Three, Interpolation::Linear) => self.eval_cube(&Trilinear, rgb),
        }
    }

    /// RGB in, Rec.709 luma of the transformed RGB out.
    pub fn rgb_to_luma(&self, rgb: [f64; 3], mode: Interpolation) -> f64 {
        luma_rec709(self.rgb_to_rgb(rgb, mode))
    }

    /// Luma in, luma out through the luma curve.
    pub fn luma_to_luma(&self, x: f64, mode: Interpolation) -> f64 {
        match mode {
            Interpolation::Cubic => self.luma_cubic(x),
            Interpolation::Linear => self.luma_linear(x),
        }
    }

    /// Luma in, RGB out.
    ///
    /// A shared 1D curve is evaluated once and replicated. Independent curves
    /// are each evaluated at the input. On a 3D grid each output channel is
    /// evaluated along the grey diagonal of the cube.
    pub fn luma_to_rgb(&self, x: f64, mode: Interpolation) -> [f64; 3] {
        let x = self.domain.normalize_luma(x);
        if self.channels.is_none() {
            return [self.luma_curve().eval(x, mode); 3];
        }
        std::array::from_fn(|c| self.diagonal(c).eval(x, mode))
    }

    /// Samples of output channel `c` along the grey diagonal.
    ///
    /// On a 1D grid this is the channel curve itself.
    pub fn diagonal(&self, c: usize) -> Curve<'_> {
        let samples = self.channel(c);
        match self.dims {
            Dims::One => Curve::view(samples, 0, 1, self.size),
            Dims::Three => {
                let stride = Node::diagonal(1).index(self.size);
                Curve::view(samples, 0, stride, self.size)
            }
        }
    }

    #[inline]
    fn luma_curve(&self) -> Curve<'_> {
        Curve::view(&self.luma, 0, 1, self.size)
    }

    fn expect_dims(&self, op: &'static str, expected: Dims) -> LutResult<()> {
        if self.dims == expected {
            Ok(())
        } else {
            Err(LutError::WrongDimensions {
                op,
                expected,
                got: self.dims,
            })
        }
    }

    fn eval_curves(&self, rgb: [f64; 3], mode: Interpolation) -> [f64; 3] {
        let x = self.domain.normalize(rgb);
        std::array::from_fn(|c| Curve::view(self.channel(c), 0, 1, self.size).eval(x[c], mode))
    }

    fn eval_cube<K: CellKernel>(&self, kernel: &K, rgb: [f64; 3]) -> [f64; 3] {
        let lattices = std::array::from_fn(|c| Lattice::new(self.channel(c), self.size));
        eval_cube(kernel, lattices, self.domain.normalize(rgb))
    }
}

fn check_len(name: &str, values: &[f64], expected: usize) -> LutResult<()> {
    if values.len() == expected {
        Ok(())
    } else {
        Err(LutError::shape(format!(
            "channel {name}: expected {expected} samples, got {}",
            values.len()
        )))
    }
}

fn derive_luma(dims: Dims, size: usize, [r, g, b]: &[Vec<f64>; 3]) -> Vec<f64> {
    (0..size)
        .map(|j| {
            let i = match dims {
                Dims::One => j,
                Dims::Three => Node::diagonal(j).index(size),
            };
            luma_rec709([r[i], g[i], b[i]])
        })
        .collect()
}
