//! Procedural 2D rock generation
//!
//! A standalone library that scatters random points in a box, triangulates
//! them (Delaunay) and outlines them with their convex hull, producing a
//! faceted rock that can be drawn as a flat silhouette or shaded by a point
//! light. Output is engine-agnostic draw lists.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rock2d::*;
//!
//! // Generate a rock
//! let config = RockConfigBuilder::new()
//!     .size(720.0, 520.0).unwrap()
//!     .point_count(25).unwrap()
//!     .seed(42)
//!     .build().unwrap();
//!
//! let rock = RockGeometry::generate(config).unwrap();
//!
//! // Render it lit from the top-left
//! let frame = FrameParams::new(config.color)
//!     .with_position(Vec2::new(600.0, 400.0))
//!     .lit_from(Vec2::new(240.0, 140.0));
//! let rendered = render(&rock, &frame);
//! println!("Rendered {} triangles", rendered.triangles().len());
//! ```
//!
//! # Features
//!
//! - `export` (default): JSON geometry export (serde) and PNG snapshots
//!   (image/imageproc)

// Modules
pub mod error;
pub mod config;
pub mod generation;
pub mod rock;
pub mod render;
pub mod editor;

#[cfg(feature = "export")]
pub mod export;

// Re-export core types for convenience
pub use error::{RockError, Result};
pub use config::{RockConfig, RockConfigBuilder};
pub use rock::RockGeometry;
pub use render::{
    render, render_with_shading, DrawList, FrameParams, LinearFalloff, LitTriangle, RenderedRock,
    RockColor, RockRenderer, ShadingModel,
};
pub use editor::RockEditor;

#[cfg(feature = "export")]
pub use export::{save_png, snapshot, GeometryExport};

// Re-export glam::Vec2 for convenience
pub use glam::Vec2;
