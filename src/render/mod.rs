//! Per-frame draw-list generation for RockGeometry
//!
//! Produces engine-agnostic output: either one flat silhouette polygon or a
//! list of lit triangles, in screen coordinates, for any rendering surface to
//! fill.

mod shading;

pub use shading::{shade, LinearFalloff, RockColor, ShadingModel, FALLOFF_RADIUS, SILHOUETTE_COLOR};

use glam::Vec2;

use crate::rock::RockGeometry;

/// Rotate `point` about the origin by `degrees`, counter-clockwise in math
/// coordinates
#[inline]
pub fn rotate_point(point: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(point)
}

/// Size of the axis-aligned box around a `size` rectangle rotated by `degrees`
///
/// The editor uses this to keep its frame around the rotated rock.
pub fn rotated_bounds(size: Vec2, degrees: f32) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    Vec2::new(size.x * cos + size.y * sin, size.x * sin + size.y * cos)
}

/// Inputs for one frame, owned by the caller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    /// Rotation in degrees
    pub angle: f32,
    /// Screen position of the rock's local origin
    pub position: Vec2,
    /// Light position, or `None` to draw the flat silhouette
    pub lighting: Option<Vec2>,
    /// Color lit triangles are shaded from
    pub base_color: RockColor,
    /// Fill for the silhouette
    pub silhouette_color: RockColor,
}

impl FrameParams {
    /// Frame with no rotation at the origin, lighting off
    pub fn new(base_color: RockColor) -> Self {
        Self {
            angle: 0.0,
            position: Vec2::ZERO,
            lighting: None,
            base_color,
            silhouette_color: SILHOUETTE_COLOR,
        }
    }

    /// Frame using the rock's own angle and position
    pub fn for_geometry(geometry: &RockGeometry, base_color: RockColor) -> Self {
        Self {
            angle: geometry.angle(),
            position: geometry.position(),
            ..Self::new(base_color)
        }
    }

    /// Enable lighting from `light`
    pub fn lit_from(mut self, light: Vec2) -> Self {
        self.lighting = Some(light);
        self
    }

    /// Set the rotation in degrees
    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    /// Set the screen position of the local origin
    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }
}

/// One shaded triangle of the lit mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LitTriangle {
    /// Index triple into the geometry's points (same as its triangulation)
    pub indices: [usize; 3],
    /// Screen-space vertices
    pub vertices: [Vec2; 3],
    /// Light intensity in `[0, 1]`
    pub intensity: f32,
    /// Shaded color
    pub color: RockColor,
}

/// Drawable output of one frame
#[derive(Debug, Clone, PartialEq)]
pub enum DrawList {
    /// Filled hull polygon, lighting off
    Silhouette {
        /// Screen-space hull vertices in traversal order
        outline: Vec<Vec2>,
        /// Fill color
        color: RockColor,
    },
    /// Shaded triangles, lighting on; paint order does not matter
    Lit(Vec<LitTriangle>),
}

/// A rendered frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRock {
    /// What to draw
    pub draw_list: DrawList,
    /// Bounding size of the declared rectangle after rotation
    pub rel_dimensions: Vec2,
    /// Screen position the rock was anchored at
    pub position: Vec2,
}

impl RenderedRock {
    /// Check if the frame was drawn with lighting
    pub fn is_lit(&self) -> bool {
        matches!(self.draw_list, DrawList::Lit(_))
    }

    /// Get the lit triangles (empty for a silhouette frame)
    pub fn triangles(&self) -> &[LitTriangle] {
        match &self.draw_list {
            DrawList::Lit(triangles) => triangles,
            DrawList::Silhouette { .. } => &[],
        }
    }
}

/// Renders rocks with a shading model
///
/// # Example
///
/// ```
/// use rock2d::*;
/// use glam::Vec2;
///
/// let config = RockConfigBuilder::new().seed(1).build().unwrap();
/// let rock = RockGeometry::generate(config).unwrap();
///
/// let frame = FrameParams::new(config.color)
///     .with_angle(30.0)
///     .with_position(Vec2::new(600.0, 400.0))
///     .lit_from(Vec2::new(240.0, 140.0));
///
/// let rendered = RockRenderer::new().render(&rock, &frame);
/// assert_eq!(rendered.triangles().len(), rock.triangle_count());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RockRenderer<S = LinearFalloff> {
    shading: S,
}

impl RockRenderer<LinearFalloff> {
    /// Renderer with the standard linear falloff
    pub fn new() -> Self {
        Self {
            shading: LinearFalloff,
        }
    }
}

impl<S: ShadingModel> RockRenderer<S> {
    /// Renderer with a custom shading model
    pub fn with_shading(shading: S) -> Self {
        Self { shading }
    }

    /// Produce the draw list for one frame
    ///
    /// Assumes `geometry` came out of a successful generation; indices are
    /// not re-checked.
    pub fn render(&self, geometry: &RockGeometry, frame: &FrameParams) -> RenderedRock {
        let to_screen = |p: Vec2| rotate_point(p, frame.angle) + frame.position;

        let draw_list = match frame.lighting {
            None => DrawList::Silhouette {
                outline: geometry.outer_body().iter().map(|&p| to_screen(p)).collect(),
                color: frame.silhouette_color,
            },
            Some(light) => {
                let screen: Vec<Vec2> = geometry.points().iter().map(|&p| to_screen(p)).collect();
                DrawList::Lit(
                    geometry
                        .triangulation()
                        .iter()
                        .map(|&indices| {
                            self.shade_triangle(&screen, indices, light, frame.base_color)
                        })
                        .collect(),
                )
            }
        };

        RenderedRock {
            draw_list,
            rel_dimensions: rotated_bounds(geometry.size(), frame.angle),
            position: frame.position,
        }
    }

    fn shade_triangle(
        &self,
        screen: &[Vec2],
        indices: [usize; 3],
        light: Vec2,
        base_color: RockColor,
    ) -> LitTriangle {
        let vertices = indices.map(|i| screen[i]);
        let nearest = vertices
            .iter()
            .map(|v| v.distance(light))
            .fold(f32::INFINITY, f32::min);
        let intensity = self.shading.intensity(nearest);

        LitTriangle {
            indices,
            vertices,
            intensity,
            color: shade(base_color, intensity),
        }
    }
}

/// Render with the standard linear falloff
pub fn render(geometry: &RockGeometry, frame: &FrameParams) -> RenderedRock {
    RockRenderer::new().render(geometry, frame)
}

/// Render with a custom shading model
pub fn render_with_shading<S: ShadingModel>(
    geometry: &RockGeometry,
    frame: &FrameParams,
    shading: S,
) -> RenderedRock {
    RockRenderer::with_shading(shading).render(geometry, frame)
}
