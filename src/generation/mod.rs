//! Core rock generation algorithm
//!
//! Scatters random points in the declared bounding box, triangulates them
//! (Delaunay) and extracts their convex hull.

mod delaunay;
mod hull;
mod points;

pub use delaunay::compute_delaunay;
pub use hull::{compute_outer_body, signed_area};
pub use points::{generate_rock_points, BOUNDARY_POINT_COUNT};

use glam::Vec2;
use log::debug;

use crate::config::RockConfig;
use crate::error::Result;

/// Rock mesh without placement state (geometry only)
///
/// This is an intermediate representation used during generation.
/// [`RockGeometry`](crate::rock::RockGeometry) wraps it with angle, position
/// and size.
#[derive(Debug, Clone)]
pub struct RawGeometry {
    /// Generated points in generation order
    pub points: Vec<Vec2>,
    /// Counter-clockwise index triples into `points`
    pub triangulation: Vec<[usize; 3]>,
    /// Convex hull in traversal order
    pub outer_body: Vec<Vec2>,
}

/// Generate raw rock geometry from configuration
///
/// Returns the geometry together with the seed that produced it, so an
/// unseeded rock can be reproduced later.
///
/// # Errors
///
/// - `InvalidParameter` if the configuration is rejected (checked before any
///   random draw)
/// - `DegenerateGeometry` if this draw cannot be triangulated
pub fn generate_raw_geometry(config: &RockConfig) -> Result<(RawGeometry, u64)> {
    config.validate()?;

    // Step 1: Pick the seed
    let seed = config.seed.unwrap_or_else(rand::random);

    // Step 2: Scatter points (interior, duplicate, boundary)
    let points =
        points::generate_rock_points(config.width, config.height, config.point_count, seed);

    // Step 3-4: Triangulate and hull
    let raw = build_raw_geometry(points)?;

    debug!(
        "generated rock {}x{} (seed {}): {} points, {} triangles, {} hull vertices",
        config.width,
        config.height,
        seed,
        raw.points.len(),
        raw.triangulation.len(),
        raw.outer_body.len()
    );

    Ok((raw, seed))
}

/// Triangulate and hull an explicit point set
///
/// # Errors
///
/// Returns `DegenerateGeometry` if the points span no area.
pub fn build_raw_geometry(points: Vec<Vec2>) -> Result<RawGeometry> {
    let triangulation = delaunay::compute_delaunay(&points)?;
    let outer_body = hull::compute_outer_body(&points)?;

    Ok(RawGeometry {
        points,
        triangulation,
        outer_body,
    })
}
