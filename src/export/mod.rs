//! Export of rock geometry (JSON) and rendered frames (PNG)
//!
//! This module is only available with the `export` feature.

mod raster;

pub use raster::{save_png, snapshot};

use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, RockError};
use crate::rock::RockGeometry;

/// Serializable geometry description
///
/// ```json
/// {
///   "points": [[x, y], ...],
///   "simplices": [[i, j, k], ...],
///   "size": [width, height],
///   "angle": 0.0
/// }
/// ```
///
/// `points` carry the current rotation (about the local origin, without the
/// screen anchor) and keep generation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeometryExport {
    /// Rotated points in generation order
    pub points: Vec<[f32; 2]>,
    /// Triangle index triples into `points`
    pub simplices: Vec<[usize; 3]>,
    /// Declared size (width, height)
    pub size: [f32; 2],
    /// Rotation in degrees
    pub angle: f32,
}

impl GeometryExport {
    /// Snapshot a rock's geometry at its current angle
    pub fn from_geometry(geometry: &RockGeometry) -> Self {
        Self {
            points: geometry
                .rotated_points()
                .into_iter()
                .map(|p| p.to_array())
                .collect(),
            simplices: geometry.triangulation().to_vec(),
            size: geometry.size().to_array(),
            angle: geometry.angle(),
        }
    }

    /// Encode as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|err| RockError::Export(err.to_string()))
    }

    /// Parse and validate a JSON payload
    ///
    /// # Errors
    ///
    /// Returns `Export` if the JSON is malformed or a simplex references a
    /// point that does not exist.
    pub fn from_json(json: &str) -> Result<Self> {
        let export: Self =
            serde_json::from_str(json).map_err(|err| RockError::Export(err.to_string()))?;
        export.validate()?;
        Ok(export)
    }

    /// Check that every simplex index is a valid point index
    pub fn validate(&self) -> Result<()> {
        let count = self.points.len();
        for (n, simplex) in self.simplices.iter().enumerate() {
            if let Some(&bad) = simplex.iter().find(|&&i| i >= count) {
                return Err(RockError::Export(format!(
                    "simplex {} references point {} but only {} points exist",
                    n, bad, count
                )));
            }
        }
        Ok(())
    }

    /// Signed area of simplex `n`, positive for counter-clockwise triangles
    pub fn simplex_area(&self, n: usize) -> Option<f32> {
        let [i, j, k] = *self.simplices.get(n)?;
        let [ax, ay] = *self.points.get(i)?;
        let [bx, by] = *self.points.get(j)?;
        let [cx, cy] = *self.points.get(k)?;
        Some(((bx - ax) * (cy - ay) - (by - ay) * (cx - ax)) * 0.5)
    }

    /// Write the pretty-printed JSON to `path`
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        info!(
            "exported {} points and {} simplices to {}",
            self.points.len(),
            self.simplices.len(),
            path.display()
        );
        Ok(())
    }
}
