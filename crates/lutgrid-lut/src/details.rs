//! Flat grid exchange form.
//!
//! [`GridDetails`] carries everything a [`Grid`] was built from as plain
//! buffers and metadata, so a loader can hand a grid over without knowing the
//! evaluator types. It serializes with serde; JSON helpers are provided.
//!
//! Channel buffers can also be moved as little-endian `f64` bytes with
//! [`to_le_bytes`] and [`from_le_bytes`].
//!
//! # Example
//!
//! ```rust
//! use lutgrid_lut::{Grid, GridDetails};
//!
//! let grid = Grid::identity_1d(16).unwrap().with_info("ramp", "json");
//! let json = grid.details().to_json().unwrap();
//! let back = Grid::from_details(GridDetails::from_json(&json).unwrap()).unwrap();
//! assert_eq!(back, grid);
//! ```

use std::fs;
use std::path::Path;

use lutgrid_core::Domain;
use serde::{Deserialize, Serialize};

use crate::{Dims, Grid, LutError, LutResult};

/// Metadata and sample buffers of a grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridDetails {
    /// Display name.
    #[serde(default)]
    pub title: String,
    /// Source format tag.
    #[serde(default)]
    pub format: String,
    /// 1D or 3D.
    pub dims: Dims,
    /// Samples per axis.
    pub size: usize,
    /// Domain lower bounds [R, G, B].
    #[serde(default = "unit_min")]
    pub min: [f64; 3],
    /// Domain upper bounds [R, G, B].
    #[serde(default = "unit_max")]
    pub max: [f64; 3],
    /// False for a single shared 1D curve.
    pub independent: bool,
    /// One buffer for a shared curve, otherwise R, G and B.
    pub channels: Vec<Vec<f64>>,
}

fn unit_min() -> [f64; 3] {
    Domain::UNIT.min()
}

fn unit_max() -> [f64; 3] {
    Domain::UNIT.max()
}

impl GridDetails {
    /// Serializes to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// [`LutError::NonFinite`] for NaN or infinite samples, which JSON
    /// would write as `null`. Use [`to_le_bytes`] to move such buffers.
    pub fn to_json(&self) -> LutResult<String> {
        self.check_finite()?;
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn check_finite(&self) -> LutResult<()> {
        for (channel, values) in self.channels.iter().enumerate() {
            if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
                return Err(LutError::NonFinite { channel, index, value });
            }
        }
        Ok(())
    }

    /// Parses JSON produced by [`GridDetails::to_json`].
    pub fn from_json(s: &str) -> LutResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Writes JSON to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> LutResult<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Reads JSON from `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> LutResult<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}

impl Grid {
    /// Flattens the grid into its exchange form.
    pub fn details(&self) -> GridDetails {
        let channels = match self.channels() {
            Some(ch) => ch.iter().map(|c| c.to_vec()).collect(),
            None => vec![self.luma().to_vec()],
        };
        GridDetails {
            title: self.title().to_owned(),
            format: self.format().to_owned(),
            dims: self.dims(),
            size: self.size(),
            min: self.domain().min(),
            max: self.domain().max(),
            independent: self.independent_channels(),
            channels,
        }
    }

    /// Rebuilds a grid from its exchange form.
    ///
    /// # Errors
    ///
    /// Everything [`Grid::build`] rejects, [`LutError::Shape`] when the
    /// `independent` flag disagrees with the channel count, and
    /// [`LutError::Core`] for an invalid domain.
    pub fn from_details(details: GridDetails) -> LutResult<Self> {
        let GridDetails {
            title,
            format,
            dims,
            size,
            min,
            max,
            independent,
            channels,
        } = details;

        let domain = Domain::new(min, max)?;
        let axes = dims.axis_count();
        let grid = match (independent, <[Vec<f64>; 3]>::try_from(channels)) {
            (true, Ok([r, g, b])) => Grid::build(axes, size, r, Some(g), Some(b))?,
            (false, Err(mut single)) if single.len() == 1 => {
                let r = single.pop().unwrap_or_default();
                Grid::build(axes, size, r, None, None)?
            }
            (independent, Ok(_)) => {
                return Err(LutError::shape(format!(
                    "3 channels given but independent = {independent}"
                )));
            }
            (independent, Err(ch)) => {
                return Err(LutError::shape(format!(
                    "{} channel(s) given with independent = {independent}",
                    ch.len()
                )));
            }
        };

        Ok(grid.with_domain(domain).with_info(title, format))
    }

    /// Little-endian bytes of the samples feeding output channel `c`.
    pub fn channel_bytes(&self, c: usize) -> Vec<u8> {
        to_le_bytes(self.channel(c))
    }
}

/// Packs samples as consecutive little-endian `f64`.
pub fn to_le_bytes(values: &[f64]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// Unpacks little-endian `f64` samples.
///
/// # Errors
///
/// [`LutError::Shape`] if the length is not a multiple of 8.
pub fn from_le_bytes(bytes: &[u8]) -> LutResult<Vec<f64>> {
    if bytes.len() % 8 != 0 {
        return Err(LutError::shape(format!(
            "{} bytes is not a whole number of f64 samples",
            bytes.len()
        )));
    }
    Ok(bytes
        .chunks_exact(8)
        .map(|c| {
            let mut b = [0u8; 8];
            b.copy_from_slice(c);
            f64::from_le_bytes(b)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_curve_round_trip() {
        let grid = Grid::identity_1d(8).unwrap().with_info("ramp", "test");
        let details = grid.details();
        assert!(!details.independent);
        assert_eq!(details.channels.len(), 1);
        assert_eq!(Grid::from_details(details).unwrap(), grid);
    }

    #[test]
    fn test_cube_json_round_trip() {
        let domain = Domain::new([0.0; 3], [4.0, 2.0, 1.0]).unwrap();
        let grid = Grid::identity_3d(4).unwrap().with_domain(domain);
        let json = grid.details().to_json().unwrap();
        assert!(json.contains("\"3d\""));
        let back = Grid::from_details(GridDetails::from_json(&json).unwrap()).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_flag_mismatch() {
        let mut details = Grid::identity_1d(4).unwrap().details();
        details.independent = true;
        assert!(matches!(Grid::from_details(details), Err(LutError::Shape(_))));
    }

    #[test]
    fn test_bad_domain() {
        let mut details = Grid::identity_1d(4).unwrap().details();
        details.max = [0.0; 3];
        assert!(matches!(Grid::from_details(details), Err(LutError::Core(_))));
    }

    #[test]
    fn test_missing_domain_defaults_to_unit() {
        let json = r#"{"dims":"1d","size":4,"independent":false,"channels":[[0,1,2,3]]}"#;
        let grid = Grid::from_details(GridDetails::from_json(json).unwrap()).unwrap();
        assert!(grid.domain().is_unit());
        assert_eq!(grid.luma(), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_non_finite_samples_refuse_json() {
        let mut values: Vec<f64> = (0..6).map(|i| i as f64 / 5.0).collect();
        values[3] = f64::NAN;
        let details = Grid::curve(values).unwrap().details();
        assert!(matches!(
            details.to_json(),
            Err(LutError::NonFinite { channel: 0, index: 3, .. })
        ));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nan.json");
        assert!(matches!(details.save(&path), Err(LutError::NonFinite { .. })));
        assert!(!path.exists());

        let r = vec![0.0, 0.25, 0.5, 1.0];
        let mut b = r.clone();
        b[1] = f64::NEG_INFINITY;
        let err = Grid::curves(r.clone(), r, b).unwrap().details().to_json().unwrap_err();
        assert!(matches!(err, LutError::NonFinite { channel: 2, index: 1, .. }));
        assert!(err.to_string().contains("channel 2 sample 1"));
    }

    #[test]
    fn test_le_bytes() {
        let grid = Grid::identity_1d(4).unwrap();
        let bytes = grid.channel_bytes(1);
        assert_eq!(bytes.len(), 32);
        assert_eq!(from_le_bytes(&bytes).unwrap(), grid.luma());
        assert!(from_le_bytes(&bytes[..7]).is_err());
    }
}
