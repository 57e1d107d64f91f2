//! Interactive editor state around one rock
//!
//! [`RockEditor`] owns everything the interactive tool tracks between
//! frames: the generation parameters, the current geometry, the rotation, the
//! screen anchor and the light. A host UI forwards its input events to the
//! editor and paints whatever [`RockEditor::frame`] returns.

use glam::Vec2;
use log::{debug, warn};

#[cfg(feature = "export")]
use std::path::Path;

use crate::config::RockConfig;
use crate::error::Result;
use crate::render::{render, rotated_bounds, FrameParams, RenderedRock, RockColor};
use crate::rock::RockGeometry;

#[cfg(feature = "export")]
use crate::export::{save_png, snapshot, GeometryExport};

/// Generation attempts before a degenerate draw is reported to the caller
pub const MAX_GENERATION_ATTEMPTS: u32 = 16;

/// Editor session for a single rock
///
/// # Example
///
/// ```
/// use rock2d::*;
///
/// let config = RockConfigBuilder::new().seed(5).build().unwrap();
/// let mut editor = RockEditor::new(config).unwrap();
///
/// editor.set_anchor(Vec2::new(600.0, 400.0));
/// editor.set_angle(-30.0);
/// assert_eq!(editor.angle(), 330.0);
///
/// assert!(editor.frame().is_lit());
///
/// editor.toggle_lighting();
/// assert!(!editor.frame().is_lit());
/// ```
#[derive(Debug, Clone)]
pub struct RockEditor {
    config: RockConfig,
    geometry: RockGeometry,

    /// Lighting toggle; the silhouette is drawn while off
    lighting: bool,

    light: Vec2,

    /// Set once the user has moved the light explicitly
    light_placed: bool,

    /// Size of the frame rectangle, from the last render
    frame_size: Vec2,
}

impl RockEditor {
    /// Start a session with a freshly generated rock anchored at the origin
    ///
    /// Lighting starts on, with the light at the frame's top-left corner.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if `config` is rejected
    /// - `DegenerateGeometry` if every attempt up to
    ///   [`MAX_GENERATION_ATTEMPTS`] was degenerate
    pub fn new(config: RockConfig) -> Result<Self> {
        let geometry = generate_with_retries(config)?;
        let frame_size = geometry.size();

        Ok(Self {
            config,
            geometry,
            lighting: true,
            light: Vec2::ZERO,
            light_placed: false,
            frame_size,
        })
    }

    /// Replace the rock with a new draw from the current parameters
    ///
    /// Angle and anchor carry over. On error the previous rock is kept.
    pub fn regenerate(&mut self) -> Result<()> {
        let next = generate_with_retries(self.config)?;
        self.install(next);
        Ok(())
    }

    /// Adopt new parameters without touching the current rock
    ///
    /// The color applies from the next frame on. Size, point count and seed
    /// take effect on the next [`regenerate`](Self::regenerate). Nothing
    /// changes if the parameters are rejected.
    pub fn apply_settings(&mut self, config: RockConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Recolor the current rock
    pub fn set_color(&mut self, color: RockColor) {
        self.config.color = color;
    }

    fn install(&mut self, mut next: RockGeometry) {
        next.set_angle(self.geometry.angle());
        next.set_position(self.geometry.position());
        self.frame_size = rotated_bounds(next.size(), next.angle());
        self.geometry = next;
    }

    /// Get the parameters the next generation uses
    #[inline]
    pub fn config(&self) -> &RockConfig {
        &self.config
    }

    /// Get the current rock
    #[inline]
    pub fn geometry(&self) -> &RockGeometry {
        &self.geometry
    }

    /// Current rotation in degrees, in `[0, 360)`
    #[inline]
    pub fn angle(&self) -> f32 {
        self.geometry.angle()
    }

    /// Set the rotation, wrapping it into `[0, 360)`
    pub fn set_angle(&mut self, degrees: f32) {
        let mut wrapped = degrees.rem_euclid(360.0);
        // rem_euclid rounds tiny negative inputs up to exactly 360
        if wrapped >= 360.0 {
            wrapped = 0.0;
        }
        self.geometry.set_angle(wrapped);
    }

    /// Screen position of the rock's local origin
    #[inline]
    pub fn anchor(&self) -> Vec2 {
        self.geometry.position()
    }

    /// Move the rock's local origin to `anchor`
    pub fn set_anchor(&mut self, anchor: Vec2) {
        self.geometry.set_position(anchor);
    }

    /// Check if frames are drawn lit
    #[inline]
    pub fn lighting(&self) -> bool {
        self.lighting
    }

    /// Switch lighting on or off
    pub fn set_lighting(&mut self, enabled: bool) {
        self.lighting = enabled;
    }

    /// Flip the lighting toggle and return the new state
    pub fn toggle_lighting(&mut self) -> bool {
        self.lighting = !self.lighting;
        debug!("lighting {}", if self.lighting { "on" } else { "off" });
        self.lighting
    }

    /// Place the light at `position`
    pub fn move_light(&mut self, position: Vec2) {
        self.light = position;
        self.light_placed = true;
    }

    /// Light position used for lit frames
    ///
    /// Until the light is moved it sits at the frame rectangle's top-left
    /// corner and follows the frame.
    pub fn light_position(&self) -> Vec2 {
        if self.light_placed {
            self.light
        } else {
            self.frame_rect().0
        }
    }

    /// Frame rectangle `(min, max)`, centered on the anchor
    pub fn frame_rect(&self) -> (Vec2, Vec2) {
        let half = self.frame_size * 0.5;
        let anchor = self.anchor();
        (anchor - half, anchor + half)
    }

    /// Size of the frame rectangle
    #[inline]
    pub fn frame_size(&self) -> Vec2 {
        self.frame_size
    }

    /// Frame parameters for the current state
    pub fn frame_params(&self) -> FrameParams {
        let params = FrameParams::for_geometry(&self.geometry, self.config.color);
        if self.lighting {
            params.lit_from(self.light_position())
        } else {
            params
        }
    }

    /// Render the current state and resize the frame to the rotated rock
    pub fn frame(&mut self) -> RenderedRock {
        let rendered = render(&self.geometry, &self.frame_params());
        self.frame_size = rendered.rel_dimensions;
        rendered
    }

    /// Write the current geometry as JSON
    #[cfg(feature = "export")]
    pub fn export_json(&self, path: impl AsRef<Path>) -> Result<()> {
        GeometryExport::from_geometry(&self.geometry).write_to(path)
    }

    /// Render the current state and save it as PNG
    #[cfg(feature = "export")]
    pub fn export_png(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let rendered = self.frame();
        save_png(&snapshot(&rendered), path)
    }
}

/// Generate a rock, redrawing degenerate point sets
///
/// A pinned seed is advanced by the attempt number so the retries stay
/// reproducible.
fn generate_with_retries(config: RockConfig) -> Result<RockGeometry> {
    retry_generation(config, RockGeometry::generate)
}

/// Run `generate` until it yields a rock or fails with a non-retryable error
fn retry_generation<F>(config: RockConfig, mut generate: F) -> Result<RockGeometry>
where
    F: FnMut(RockConfig) -> Result<RockGeometry>,
{
    let mut attempt_config = config;
    let mut attempt = 1;
    loop {
        match generate(attempt_config) {
            Err(err) if err.is_retryable() && attempt < MAX_GENERATION_ATTEMPTS => {
                warn!(
                    "generation attempt {}/{} failed ({}), redrawing",
                    attempt, MAX_GENERATION_ATTEMPTS, err
                );
                attempt_config.seed = config.seed.map(|seed| seed.wrapping_add(attempt as u64));
                attempt += 1;
            }
            result => return result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RockConfigBuilder;
    use crate::error::RockError;

    fn config(seed: u64) -> RockConfig {
        RockConfigBuilder::new()
            .size(300.0, 200.0)
            .unwrap()
            .point_count(20)
            .unwrap()
            .seed(seed)
            .build()
            .unwrap()
    }

    #[test]
    fn test_new_editor() {
        let editor = RockEditor::new(config(1)).unwrap();
        assert_eq!(editor.geometry().point_count(), 20);
        assert_eq!(editor.geometry().seed(), Some(1));
        assert!(editor.lighting());
        assert_eq!(editor.angle(), 0.0);
        assert_eq!(editor.frame_size(), Vec2::new(300.0, 200.0));
    }

    #[test]
    fn test_set_angle_wraps() {
        let mut editor = RockEditor::new(config(1)).unwrap();

        editor.set_angle(370.0);
        assert!((editor.angle() - 10.0).abs() < 1e-4);

        editor.set_angle(-90.0);
        assert_eq!(editor.angle(), 270.0);

        editor.set_angle(360.0);
        assert_eq!(editor.angle(), 0.0);

        editor.set_angle(-1e-9);
        assert!(editor.angle() < 360.0);
    }

    #[test]
    fn test_regenerate_keeps_placement() {
        let unseeded = RockConfigBuilder::new()
            .size(300.0, 200.0)
            .unwrap()
            .build()
            .unwrap();
        let mut editor = RockEditor::new(unseeded).unwrap();
        editor.set_angle(45.0);
        editor.set_anchor(Vec2::new(600.0, 400.0));

        editor.regenerate().unwrap();

        assert_eq!(editor.angle(), 45.0);
        assert_eq!(editor.anchor(), Vec2::new(600.0, 400.0));
        assert!(editor.geometry().seed().is_some());
    }

    #[test]
    fn test_apply_settings_waits_for_regenerate() {
        let mut editor = RockEditor::new(config(1)).unwrap();
        editor.set_angle(90.0);
        let points = editor.geometry().points().to_vec();

        let next = RockConfigBuilder::from_config(config(2))
            .point_count(40)
            .unwrap()
            .color([0, 0, 255])
            .build()
            .unwrap();
        editor.apply_settings(next).unwrap();

        assert_eq!(editor.config().point_count, 40);
        assert_eq!(editor.geometry().points(), &points[..]);
        assert_eq!(editor.frame_params().base_color, [0, 0, 255]);

        editor.regenerate().unwrap();
        assert_eq!(editor.geometry().point_count(), 40);
        assert_eq!(editor.geometry().seed(), Some(2));
        assert_eq!(editor.angle(), 90.0);
        assert!((editor.frame_size() - Vec2::new(200.0, 300.0)).length() < 1e-3);
    }

    #[test]
    fn test_recolor_keeps_rock() {
        let unseeded = RockConfigBuilder::new()
            .size(300.0, 200.0)
            .unwrap()
            .build()
            .unwrap();
        let mut editor = RockEditor::new(unseeded).unwrap();
        let points = editor.geometry().points().to_vec();

        let mut recolored = unseeded;
        recolored.color = [10, 200, 30];
        editor.apply_settings(recolored).unwrap();
        assert_eq!(editor.geometry().points(), &points[..]);

        editor.set_color([1, 2, 3]);
        assert_eq!(editor.geometry().points(), &points[..]);
        assert_eq!(editor.config().color, [1, 2, 3]);

        editor.move_light(editor.geometry().points()[0]);
        let lit = editor.frame();
        assert!(lit.triangles().iter().all(|t| t.color[0] <= 1 && t.color[2] <= 3));
    }

    #[test]
    fn test_apply_invalid_settings_keeps_state() {
        let mut editor = RockEditor::new(config(1)).unwrap();
        let points = editor.geometry().points().to_vec();

        let mut bad = config(2);
        bad.point_count = 2;

        assert!(matches!(
            editor.apply_settings(bad),
            Err(RockError::InvalidParameter(_))
        ));
        assert_eq!(editor.config().point_count, 20);
        assert_eq!(editor.geometry().points(), &points[..]);
    }

    #[test]
    fn test_lighting_toggle_switches_draw_list() {
        let mut editor = RockEditor::new(config(3)).unwrap();
        let lit = editor.frame();
        assert!(lit.is_lit());
        assert_eq!(lit.triangles().len(), editor.geometry().triangle_count());

        assert!(!editor.toggle_lighting());
        assert!(!editor.frame().is_lit());

        assert!(editor.toggle_lighting());
        assert!(editor.frame().is_lit());
    }

    #[test]
    fn test_default_light_follows_frame() {
        let mut editor = RockEditor::new(config(3)).unwrap();
        editor.set_anchor(Vec2::new(500.0, 300.0));
        assert_eq!(editor.light_position(), Vec2::new(350.0, 200.0));

        editor.set_angle(90.0);
        editor.frame();
        let light = editor.light_position();
        assert!((light - Vec2::new(400.0, 150.0)).length() < 1e-3);

        editor.move_light(Vec2::new(10.0, 20.0));
        editor.set_anchor(Vec2::new(0.0, 0.0));
        assert_eq!(editor.light_position(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_frame_uses_editor_state() {
        let mut editor = RockEditor::new(config(4)).unwrap();
        editor.set_anchor(Vec2::new(100.0, 100.0));
        editor.set_lighting(true);
        editor.move_light(Vec2::new(-50.0, 0.0));

        let params = editor.frame_params();
        assert_eq!(params.position, Vec2::new(100.0, 100.0));
        assert_eq!(params.lighting, Some(Vec2::new(-50.0, 0.0)));
        assert_eq!(params.base_color, editor.config().color);
    }

    #[test]
    fn test_retries_keep_pinned_seed() {
        let rock = generate_with_retries(config(77)).unwrap();
        assert_eq!(rock.seed(), Some(77));
    }

    #[test]
    fn test_retry_after_degenerate_draws() {
        let mut seeds = Vec::new();
        let rock = retry_generation(config(100), |attempt| {
            seeds.push(attempt.seed);
            if seeds.len() <= 3 {
                Err(RockError::DegenerateGeometry("flat".to_string()))
            } else {
                RockGeometry::generate(attempt)
            }
        })
        .unwrap();

        assert_eq!(seeds, vec![Some(100), Some(101), Some(102), Some(103)]);
        assert_eq!(rock.seed(), Some(103));
    }

    #[test]
    fn test_retry_unseeded_draws_fresh() {
        let unseeded = RockConfig {
            seed: None,
            ..config(0)
        };
        let mut seeds = Vec::new();
        let rock = retry_generation(unseeded, |attempt| {
            seeds.push(attempt.seed);
            if seeds.len() == 1 {
                Err(RockError::DegenerateGeometry("flat".to_string()))
            } else {
                RockGeometry::generate(attempt)
            }
        })
        .unwrap();

        assert_eq!(seeds, vec![None, None]);
        assert!(rock.seed().is_some());
    }

    #[test]
    fn test_retry_gives_up() {
        let mut attempts = 0;
        let result = retry_generation(config(5), |_| {
            attempts += 1;
            Err(RockError::DegenerateGeometry("flat".to_string()))
        });

        assert!(matches!(result, Err(RockError::DegenerateGeometry(_))));
        assert_eq!(attempts, MAX_GENERATION_ATTEMPTS);
    }

    #[test]
    fn test_invalid_parameter_not_retried() {
        let mut attempts = 0;
        let result = retry_generation(config(5), |_| {
            attempts += 1;
            Err(RockError::InvalidParameter("width".to_string()))
        });

        assert!(matches!(result, Err(RockError::InvalidParameter(_))));
        assert_eq!(attempts, 1);
    }

    #[cfg(feature = "export")]
    #[test]
    fn test_exports() {
        let mut editor = RockEditor::new(config(6)).unwrap();
        editor.set_angle(30.0);

        let dir = std::env::temp_dir();
        let json = dir.join(format!("rock2d-editor-{}.json", std::process::id()));
        let png = dir.join(format!("rock2d-editor-{}.png", std::process::id()));

        editor.export_json(&json).unwrap();
        editor.export_png(&png).unwrap();

        let exported = GeometryExport::from_json(&std::fs::read_to_string(&json).unwrap()).unwrap();
        let image = image::open(&png).unwrap();
        let _ = std::fs::remove_file(&json);
        let _ = std::fs::remove_file(&png);

        assert_eq!(exported.angle, 30.0);
        assert_eq!(exported.points.len(), 20);
        assert_eq!(image.width(), editor.frame_size().x.ceil() as u32);
        assert_eq!(image.height(), editor.frame_size().y.ceil() as u32);
    }
}
