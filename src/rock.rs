//! RockGeometry main structure

use glam::Vec2;

use crate::config::{check_dimension, RockConfig};
use crate::error::Result;
use crate::generation::{build_raw_geometry, generate_raw_geometry, signed_area, RawGeometry};
use crate::render::rotate_point;

/// A generated rock: point set, Delaunay mesh and convex outline
///
/// The point, triangulation and hull data never change after construction;
/// regenerating means building a new `RockGeometry`. Only the placement state
/// (`angle`, `position`) is updated per frame by the owning editor.
///
/// # Examples
///
/// ```
/// use rock2d::*;
///
/// let config = RockConfigBuilder::new()
///     .size(100.0, 80.0)
///     .unwrap()
///     .point_count(10)
///     .unwrap()
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let rock = RockGeometry::generate(config).unwrap();
/// assert_eq!(rock.point_count(), 10);
/// println!("{} triangles", rock.triangle_count());
/// ```
#[derive(Debug, Clone)]
pub struct RockGeometry {
    /// Points in generation order
    points: Vec<Vec2>,

    /// Counter-clockwise index triples into `points`
    triangulation: Vec<[usize; 3]>,

    /// Convex hull of `points` in traversal order
    outer_body: Vec<Vec2>,

    /// Declared bounding-box size (width, height)
    size: Vec2,

    /// Rotation in degrees, applied at draw time only
    angle: f32,

    /// World-space anchor of the local origin
    position: Vec2,

    /// Reserved output scale, not applied to rendering
    scale: f32,

    /// Seed the points were drawn with (`None` for explicit point sets)
    seed: Option<u64>,
}

impl RockGeometry {
    /// Generate a new random rock
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if width/height are not positive or
    ///   `point_count < 4`, raised before any point is drawn
    /// - `DegenerateGeometry` if this draw cannot be triangulated; generate
    ///   again to get a new draw
    pub fn generate(config: RockConfig) -> Result<Self> {
        let (raw, seed) = generate_raw_geometry(&config)?;
        Ok(Self::from_raw(raw, Vec2::new(config.width, config.height), Some(seed)))
    }

    /// Build a rock from an explicit point set
    ///
    /// `width` and `height` are the declared size used for the rotated frame.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if the declared size is not positive
    /// - `DegenerateGeometry` if the points span no area
    pub fn from_points(points: Vec<Vec2>, width: f32, height: f32) -> Result<Self> {
        check_dimension("width", width)?;
        check_dimension("height", height)?;

        let raw = build_raw_geometry(points)?;
        Ok(Self::from_raw(raw, Vec2::new(width, height), None))
    }

    fn from_raw(raw: RawGeometry, size: Vec2, seed: Option<u64>) -> Self {
        Self {
            points: raw.points,
            triangulation: raw.triangulation,
            outer_body: raw.outer_body,
            size,
            angle: 0.0,
            position: Vec2::ZERO,
            scale: 1.0,
            seed,
        }
    }

    /// Place the rock's origin at `position`
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    /// Set the reserved output scale
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Get the points in generation order
    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Get the triangle index triples
    #[inline]
    pub fn triangulation(&self) -> &[[usize; 3]] {
        &self.triangulation
    }

    /// Get the convex hull in traversal order
    #[inline]
    pub fn outer_body(&self) -> &[Vec2] {
        &self.outer_body
    }

    /// Get the declared size (width, height)
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Get the number of points, including the duplicate and boundary points
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Get the number of triangles
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangulation.len()
    }

    /// Get the current rotation in degrees
    #[inline]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Set the rotation in degrees; the mesh is not rebuilt
    #[inline]
    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    /// Get the world-space anchor
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Move the world-space anchor
    #[inline]
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Get the reserved output scale
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Get the seed the points were drawn with
    ///
    /// Feeding it back through [`RockConfigBuilder::seed`] reproduces this rock.
    ///
    /// [`RockConfigBuilder::seed`]: crate::config::RockConfigBuilder::seed
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Points rotated by the current angle about the local origin
    pub fn rotated_points(&self) -> Vec<Vec2> {
        self.points
            .iter()
            .map(|&p| rotate_point(p, self.angle))
            .collect()
    }

    /// Axis-aligned bounds of the outer body in local coordinates
    ///
    /// Returns `(min, max)`. Always equal to the declared box for generated
    /// rocks, since one point is pinned to every side.
    pub fn hull_bounds(&self) -> (Vec2, Vec2) {
        let min = self.outer_body.iter().copied().fold(Vec2::MAX, Vec2::min);
        let max = self.outer_body.iter().copied().fold(Vec2::MIN, Vec2::max);
        (min, max)
    }

    /// Area enclosed by the outer body
    pub fn hull_area(&self) -> f32 {
        signed_area(&self.outer_body).abs()
    }

    /// Summed area of all mesh triangles
    ///
    /// Equal to [`hull_area`](Self::hull_area) up to rounding, since the
    /// triangulation covers the hull without gaps or overlaps.
    pub fn mesh_area(&self) -> f32 {
        self.triangulation
            .iter()
            .map(|&[i, j, k]| {
                let a = self.points[i];
                (self.points[j] - a).perp_dot(self.points[k] - a) * 0.5
            })
            .sum()
    }
}
