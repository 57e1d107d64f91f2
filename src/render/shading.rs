//! Point-light shading for rock triangles

/// RGB color, one byte per channel
pub type RockColor = [u8; 3];

/// Silhouette fill used when lighting is off
pub const SILHOUETTE_COLOR: RockColor = [0, 0, 0];

/// Distance at which [`LinearFalloff`] reaches zero intensity
pub const FALLOFF_RADIUS: f32 = 1020.0;

/// Trait for mapping a triangle's distance from the light to an intensity
pub trait ShadingModel {
    /// Intensity in `[0, 1]` for the given vertex-to-light distance
    fn intensity(&self, distance: f32) -> f32;
}

/// Linear falloff from full brightness at the light to black at
/// [`FALLOFF_RADIUS`]
///
/// `k = clamp(255 - d / 4, 0, 255) / 255`
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearFalloff;

impl ShadingModel for LinearFalloff {
    fn intensity(&self, distance: f32) -> f32 {
        (255.0 - distance / 4.0).clamp(0.0, 255.0) / 255.0
    }
}

/// Scale every channel of `color` by `k`
///
/// Channels are truncated toward zero, not rounded, and saturate at 0 and 255.
#[inline]
pub fn shade(color: RockColor, k: f32) -> RockColor {
    color.map(|channel| (channel as f32 * k).clamp(0.0, 255.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_intensity_at_light() {
        assert_eq!(LinearFalloff.intensity(0.0), 1.0);
    }

    #[test]
    fn test_zero_at_falloff_radius() {
        assert_eq!(LinearFalloff.intensity(FALLOFF_RADIUS), 0.0);
        assert_eq!(LinearFalloff.intensity(FALLOFF_RADIUS + 1.0), 0.0);
        assert_eq!(LinearFalloff.intensity(1e9), 0.0);
    }

    #[test]
    fn test_falloff_monotonic() {
        let mut previous = LinearFalloff.intensity(0.0);
        for step in 1..=1200 {
            let k = LinearFalloff.intensity(step as f32);
            assert!(k <= previous, "intensity rose at distance {}", step);
            previous = k;
        }
    }

    #[test]
    fn test_falloff_midpoint() {
        // 255 - 510 / 4 = 127.5
        let k = LinearFalloff.intensity(510.0);
        assert!((k - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_shade_truncates() {
        assert_eq!(shade([255, 100, 3], 0.5), [127, 50, 1]);
        assert_eq!(shade([255, 0, 0], 1.0), [255, 0, 0]);
        assert_eq!(shade([200, 200, 200], 0.0), [0, 0, 0]);
    }

    #[test]
    fn test_shade_saturates() {
        assert_eq!(shade([200, 10, 0], 2.0), [255, 20, 0]);
        assert_eq!(shade([200, 10, 0], -1.0), [0, 0, 0]);
    }

    #[test]
    fn test_custom_model() {
        struct Flat;
        impl ShadingModel for Flat {
            fn intensity(&self, _distance: f32) -> f32 {
                0.25
            }
        }

        let k = Flat.intensity(123.0);
        assert_eq!(shade([100, 40, 8], k), [25, 10, 2]);
    }
}
