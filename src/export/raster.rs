//! Off-screen rasterization of a rendered frame

use glam::Vec2;
use image::{ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::draw_polygon_mut;
use imageproc::point::Point;
use log::info;
use std::path::Path;

use crate::error::{Result, RockError};
use crate::render::{DrawList, RenderedRock, RockColor};

/// Rasterize a frame onto a transparent canvas
///
/// The canvas is `ceil(rel_dimensions)` pixels and the frame's anchor is
/// mapped to its center, so the rotated rock fits exactly.
pub fn snapshot(rendered: &RenderedRock) -> RgbaImage {
    let width = rendered.rel_dimensions.x.ceil().max(1.0) as u32;
    let height = rendered.rel_dimensions.y.ceil().max(1.0) as u32;
    let offset = Vec2::new(width as f32, height as f32) * 0.5 - rendered.position;

    let mut canvas = RgbaImage::new(width, height);
    match &rendered.draw_list {
        DrawList::Silhouette { outline, color } => {
            fill_polygon(&mut canvas, outline, offset, *color);
        }
        DrawList::Lit(triangles) => {
            for triangle in triangles {
                fill_polygon(&mut canvas, &triangle.vertices, offset, triangle.color);
            }
        }
    }
    canvas
}

/// Save a snapshot as PNG
pub fn save_png(image: &RgbaImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|err| RockError::Export(format!("{}: {}", path.display(), err)))?;
    info!(
        "exported {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

fn fill_polygon(canvas: &mut RgbaImage, vertices: &[Vec2], offset: Vec2, color: RockColor) {
    let mut polygon: Vec<Point<i32>> = vertices
        .iter()
        .map(|&v| {
            let p = (v + offset).round();
            Point::new(p.x as i32, p.y as i32)
        })
        .collect();

    // draw_polygon_mut rejects a closing vertex equal to the first one
    polygon.dedup();
    while polygon.len() > 1 && polygon.first() == polygon.last() {
        polygon.pop();
    }
    if polygon.len() < 3 {
        return;
    }

    let [r, g, b] = color;
    draw_polygon_mut(canvas, &polygon, Rgba([r, g, b, 255]));
}
