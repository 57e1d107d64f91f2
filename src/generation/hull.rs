//! Convex hull ("outer body") of the rock's point set
//!
//! Wraps parry2d's quickhull. The hull drives the silhouette fill and bounds
//! the lit mesh.

use glam::Vec2;
use parry2d::math::Point;
use parry2d::transformation;

use crate::error::{Result, RockError};

/// Compute the convex hull of `points` in traversal order
///
/// Callers run [`compute_delaunay`](super::delaunay::compute_delaunay) first,
/// which already rejects point sets spanning no area.
///
/// # Errors
///
/// Returns `DegenerateGeometry` if fewer than three hull vertices remain.
pub fn compute_outer_body(points: &[Vec2]) -> Result<Vec<Vec2>> {
    if points.len() < 3 {
        return Err(RockError::DegenerateGeometry(format!(
            "hull needs at least 3 points (got {})",
            points.len()
        )));
    }

    let parry_points: Vec<Point<f32>> = points.iter().map(|p| Point::new(p.x, p.y)).collect();
    let hull_indices = transformation::convex_hull_idx(&parry_points);

    if hull_indices.len() < 3 {
        return Err(RockError::DegenerateGeometry(format!(
            "hull collapsed to {} vertices",
            hull_indices.len()
        )));
    }

    Ok(hull_indices.into_iter().map(|i| points[i]).collect())
}

/// Signed shoelace area of a closed polygon
///
/// Positive for counter-clockwise traversal.
pub fn signed_area(polygon: &[Vec2]) -> f32 {
    if polygon.len() < 3 {
        return 0.0;
    }
    let twice: f32 = polygon
        .iter()
        .zip(polygon.iter().cycle().skip(1))
        .map(|(a, b)| a.perp_dot(*b))
        .sum();
    twice * 0.5
}
