//! Rock generation parameters and builder
//!
//! This module holds the values an editor collects from its settings panel
//! (size, point count, color) and hands to [`RockGeometry::generate`].
//!
//! [`RockGeometry::generate`]: crate::rock::RockGeometry::generate

#[cfg(feature = "export")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, RockError};
use crate::render::RockColor;

/// Smallest point count that still places one point on every bounding-box side
pub const MIN_POINT_COUNT: usize = 4;

/// Viewport the stock editor opens with
pub const DEFAULT_VIEWPORT: (f32, f32) = (1200.0, 800.0);

/// Fraction of the viewport width a default rock spans
const VIEWPORT_WIDTH_FRACTION: f32 = 0.6;

/// Fraction of the viewport height a default rock spans
const VIEWPORT_HEIGHT_FRACTION: f32 = 0.65;

/// Default number of generated points
pub const DEFAULT_POINT_COUNT: usize = 25;

/// Default rock color (pure red)
pub const DEFAULT_COLOR: RockColor = [255, 0, 0];

/// Parameters for one rock generation
///
/// # Example
///
/// ```rust
/// use rock2d::*;
///
/// let config = RockConfigBuilder::new()
///     .size(100.0, 80.0)
///     .unwrap()
///     .point_count(10)
///     .unwrap()
///     .seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.point_count, 10);
/// ```
#[cfg_attr(feature = "export", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RockConfig {
    /// Declared bounding-box width in pixels
    pub width: f32,

    /// Declared bounding-box height in pixels
    pub height: f32,

    /// Total number of points, including the four boundary points
    pub point_count: usize,

    /// Base color the lit triangles are shaded from
    pub color: RockColor,

    /// Fixed seed for reproducible rocks
    ///
    /// `None` draws a fresh seed on every generation, so regenerating with the
    /// same config yields a different rock each time.
    pub seed: Option<u64>,
}

impl RockConfig {
    /// Default rock parameters for a viewport of the given size
    ///
    /// The rock spans 60% of the viewport width and 65% of its height.
    pub fn for_viewport(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            width: viewport_width * VIEWPORT_WIDTH_FRACTION,
            height: viewport_height * VIEWPORT_HEIGHT_FRACTION,
            point_count: DEFAULT_POINT_COUNT,
            color: DEFAULT_COLOR,
            seed: None,
        }
    }

    /// Check the parameters without drawing any points
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if width or height is not a positive finite
    /// number, or if `point_count` is below [`MIN_POINT_COUNT`].
    pub fn validate(&self) -> Result<()> {
        check_dimension("width", self.width)?;
        check_dimension("height", self.height)?;
        check_point_count(self.point_count)
    }

    /// Half extents of the declared bounding box
    #[inline]
    pub fn half_extents(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

impl Default for RockConfig {
    fn default() -> Self {
        Self::for_viewport(DEFAULT_VIEWPORT.0, DEFAULT_VIEWPORT.1)
    }
}

pub(crate) fn check_dimension(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(RockError::InvalidParameter(format!(
            "{} must be a positive number (got {})",
            name, value
        )));
    }
    Ok(())
}

fn check_point_count(count: usize) -> Result<()> {
    if count < MIN_POINT_COUNT {
        return Err(RockError::InvalidParameter(format!(
            "point count must be >= {} (got {})",
            MIN_POINT_COUNT, count
        )));
    }
    Ok(())
}

/// Builder for [`RockConfig`] with validation
///
/// Setters that take user input return `Result<Self>` so a settings panel can
/// reject a bad field as soon as it is entered.
#[derive(Debug, Clone)]
pub struct RockConfigBuilder {
    config: RockConfig,
}

impl RockConfigBuilder {
    /// Create a builder with the default viewport-derived parameters
    ///
    /// Defaults:
    /// - size: 720 x 520 (60% x 65% of a 1200 x 800 viewport)
    /// - point_count: 25
    /// - color: red
    /// - seed: none (fresh rock on every generation)
    pub fn new() -> Self {
        Self {
            config: RockConfig::default(),
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: RockConfig) -> Self {
        Self { config }
    }

    /// Set the declared bounding-box size
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is not positive and finite
    pub fn size(mut self, width: f32, height: f32) -> Result<Self> {
        check_dimension("width", width)?;
        check_dimension("height", height)?;
        self.config.width = width;
        self.config.height = height;
        Ok(self)
    }

    /// Set the total point count
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `count` is below [`MIN_POINT_COUNT`]
    pub fn point_count(mut self, count: usize) -> Result<Self> {
        check_point_count(count)?;
        self.config.point_count = count;
        Ok(self)
    }

    /// Set the base color
    pub fn color(mut self, color: RockColor) -> Self {
        self.config.color = color;
        self
    }

    /// Pin the random seed so every generation yields the same rock
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<RockConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for RockConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
