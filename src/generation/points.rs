//! Random point scattering inside the rock's bounding box
//!
//! Interior points get integer coordinates drawn uniformly from the box. Four
//! more points are pinned to the box sides, one per side, so the hull always
//! spans the full declared width and height.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Number of points pinned to the bounding-box sides
pub const BOUNDARY_POINT_COUNT: usize = 4;

/// Generate the rock's point set
///
/// Layout of the returned vector (`count` entries):
/// - `count - 4` interior slots; with two or more slots the last one repeats
///   the first point
/// - one point with `y = -height/2`
/// - one point with `y = +height/2`
/// - one point with `x = -width/2`
/// - one point with `x = +width/2`
///
/// Callers validate `count >= 4` and positive dimensions beforehand.
///
/// # Example
///
/// ```rust
/// use rock2d::generation::generate_rock_points;
///
/// let points = generate_rock_points(100.0, 80.0, 10, 42);
/// assert_eq!(points.len(), 10);
/// assert_eq!(points[9].x, 50.0);
/// ```
pub fn generate_rock_points(width: f32, height: f32, count: usize, seed: u64) -> Vec<Vec2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let half_w = width / 2.0;
    let half_h = height / 2.0;
    let x_range = integer_range(half_w);
    let y_range = integer_range(half_h);

    let slots = count.saturating_sub(BOUNDARY_POINT_COUNT);
    let random_slots = if slots >= 2 { slots - 1 } else { slots };

    let mut points: Vec<Vec2> = Vec::with_capacity(slots + BOUNDARY_POINT_COUNT);
    for _ in 0..random_slots {
        let x = rng.gen_range(x_range.0..=x_range.1);
        let y = rng.gen_range(y_range.0..=y_range.1);
        points.push(Vec2::new(x as f32, y as f32));
    }

    // last interior slot repeats the first point
    if slots >= 2 {
        points.push(points[0]);
    }

    let bottom_x = rng.gen_range(x_range.0..=x_range.1) as f32;
    let top_x = rng.gen_range(x_range.0..=x_range.1) as f32;
    let left_y = rng.gen_range(y_range.0..=y_range.1) as f32;
    let right_y = rng.gen_range(y_range.0..=y_range.1) as f32;

    points.push(Vec2::new(bottom_x, -half_h));
    points.push(Vec2::new(top_x, half_h));
    points.push(Vec2::new(-half_w, left_y));
    points.push(Vec2::new(half_w, right_y));

    points
}

/// Integer interval inside `[-half, half]`
///
/// Non-integer extents shrink inwards so every drawn coordinate stays inside
/// the declared box.
fn integer_range(half: f32) -> (i64, i64) {
    let low = (-half).ceil() as i64;
    let high = half.floor() as i64;
    (low, high.max(low))
}
