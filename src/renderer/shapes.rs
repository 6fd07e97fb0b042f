//! Control-point helpers for 2D primitives

use glam::Vec2;

/// Corners of an axis-aligned square of side `size` centered at `center`
#[inline]
pub fn square_corners(center: Vec2, size: f32) -> (Vec2, Vec2) {
    let half = Vec2::splat(size / 2.0);
    (center - half, center + half)
}

/// The two diagonal segments of an X marker with arm length `arm`
pub fn cross_segments(center: Vec2, arm: f32) -> [(Vec2, Vec2); 2] {
    [
        (center + Vec2::new(-arm, -arm), center + Vec2::new(arm, arm)),
        (center + Vec2::new(-arm, arm), center + Vec2::new(arm, -arm)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_corners() {
        let (a, b) = square_corners(Vec2::new(10.0, 20.0), 4.0);
        assert_eq!(a, Vec2::new(8.0, 18.0));
        assert_eq!(b, Vec2::new(12.0, 22.0));
    }

    #[test]
    fn test_cross_segments_meet_at_center() {
        let center = Vec2::new(50.0, 50.0);
        for (a, b) in cross_segments(center, 10.0) {
            assert_eq!((a + b) / 2.0, center);
            assert!((a.distance(b) - 20.0 * std::f32::consts::SQRT_2).abs() < 1e-4);
        }
    }
}
