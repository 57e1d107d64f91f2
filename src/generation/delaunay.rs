//! Delaunay triangulation of the rock's point set
//!
//! Thin wrapper around spade's incremental Delaunay triangulation that maps
//! the triangulation's vertex handles back to indices into the input slice.

use glam::Vec2;
use spade::handles::FixedVertexHandle;
use spade::{DelaunayTriangulation, Point2, Triangulation};
use std::collections::HashMap;

use crate::error::{Result, RockError};

/// Compute the Delaunay triangulation of `points`
///
/// Returns counter-clockwise index triples into `points`. Coincident points
/// collapse onto one triangulation vertex, referenced by the lowest index
/// that carries that position.
///
/// # Errors
///
/// Returns `DegenerateGeometry` if a coordinate cannot be inserted (NaN or out
/// of range) or if the points span no area (all collinear or coincident).
pub fn compute_delaunay(points: &[Vec2]) -> Result<Vec<[usize; 3]>> {
    let mut triangulation: DelaunayTriangulation<Point2<f64>> = DelaunayTriangulation::new();
    let mut handle_to_index: HashMap<FixedVertexHandle, usize> =
        HashMap::with_capacity(points.len());

    for (index, point) in points.iter().enumerate() {
        let handle = triangulation
            .insert(Point2::new(point.x as f64, point.y as f64))
            .map_err(|err| {
                RockError::DegenerateGeometry(format!(
                    "cannot insert point {} ({}, {}): {:?}",
                    index, point.x, point.y, err
                ))
            })?;
        handle_to_index.entry(handle).or_insert(index);
    }

    if triangulation.num_inner_faces() == 0 {
        return Err(RockError::DegenerateGeometry(format!(
            "{} points span no area ({} distinct)",
            points.len(),
            triangulation.num_vertices()
        )));
    }

    let triangles = triangulation
        .inner_faces()
        .map(|face| {
            let [a, b, c] = face.vertices();
            [
                handle_to_index[&a.fix()],
                handle_to_index[&b.fix()],
                handle_to_index[&c.fix()],
            ]
        })
        .collect();

    Ok(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(points: &[Vec2], tri: [usize; 3]) -> f32 {
        let a = points[tri[0]];
        let b = points[tri[1]];
        let c = points[tri[2]];
        (b - a).perp_dot(c - a) * 0.5
    }

    #[test]
    fn test_square() {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ];

        let triangles = compute_delaunay(&points).unwrap();
        assert_eq!(triangles.len(), 2);

        let total: f32 = triangles.iter().map(|&t| area(&points, t)).sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_counter_clockwise() {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(2.0, 3.0),
            Vec2::new(2.0, 1.0),
            Vec2::new(-1.0, 2.0),
        ];

        for tri in compute_delaunay(&points).unwrap() {
            assert!(area(&points, tri) > 0.0, "triangle {:?} is not counter-clockwise", tri);
        }
    }

    #[test]
    fn test_duplicate_maps_to_first_index() {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(0.0, 5.0),
            Vec2::new(0.0, 0.0),
        ];

        let triangles = compute_delaunay(&points).unwrap();
        assert_eq!(triangles.len(), 1);
        assert!(!triangles[0].contains(&3));
        assert!(triangles[0].contains(&0));
    }

    #[test]
    fn test_collinear_is_degenerate() {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(3.0, 3.0),
        ];

        let result = compute_delaunay(&points);
        assert!(matches!(result, Err(RockError::DegenerateGeometry(_))));
    }

    #[test]
    fn test_nan_is_degenerate() {
        let points = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(f32::NAN, 1.0),
            Vec2::new(2.0, 0.0),
        ];

        assert!(compute_delaunay(&points).is_err());
    }
}
