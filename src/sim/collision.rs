//! Box tests and boundary response
//!
//! All bodies are axis-aligned squares centered on their position. Home
//! containment is inclusive, enemy hits are exclusive so touching edges
//! never counts as a hit.

use glam::Vec2;

/// Check if `point` lies inside the square of side `size` centered at `center`,
/// edges included
#[inline]
pub fn square_contains(center: Vec2, size: f32, point: Vec2) -> bool {
    let half = size / 2.0;
    (center.x - half..=center.x + half).contains(&point.x)
        && (center.y - half..=center.y + half).contains(&point.y)
}

/// Check if `point` lies strictly inside the square of side `size` centered at
/// `center`; points on an edge do not count
#[inline]
pub fn square_contains_strict(center: Vec2, size: f32, point: Vec2) -> bool {
    let half = size / 2.0;
    center.x - half < point.x
        && point.x < center.x + half
        && center.y - half < point.y
        && point.y < center.y + half
}

/// Elastic bounce on one axis.
///
/// Returns the velocity to use next tick: its sign flips when `pos` is
/// outside `[0, extent]`, magnitude unchanged.
#[inline]
pub fn bounce_axis(pos: f32, vel: f32, extent: f32) -> f32 {
    if pos < 0.0 || pos > extent { -vel } else { vel }
}

/// Advance `pos` by `vel` and bounce off the `[0, bounds]` rectangle.
///
/// The position is not clamped: a body that crossed the boundary comes back
/// on the next tick.
pub fn step_and_bounce(pos: &mut Vec2, vel: &mut Vec2, bounds: Vec2) {
    *pos += *vel;
    vel.x = bounce_axis(pos.x, vel.x, bounds.x);
    vel.y = bounce_axis(pos.y, vel.y, bounds.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_square_contains_edges_inclusive() {
        let center = Vec2::new(100.0, 100.0);
        assert!(square_contains(center, 20.0, Vec2::new(110.0, 90.0)));
        assert!(square_contains(center, 20.0, center));
        assert!(!square_contains(center, 20.0, Vec2::new(110.01, 100.0)));
    }

    #[test]
    fn test_square_contains_strict_excludes_edges() {
        let center = Vec2::new(100.0, 100.0);
        assert!(!square_contains_strict(center, 20.0, Vec2::new(110.0, 100.0)));
        assert!(!square_contains_strict(center, 20.0, Vec2::new(100.0, 90.0)));
        assert!(square_contains_strict(center, 20.0, Vec2::new(109.9, 90.1)));
    }

    #[test]
    fn test_step_and_bounce_flips_on_crossing() {
        let mut pos = Vec2::new(798.0, 10.0);
        let mut vel = Vec2::new(3.0, -3.0);
        step_and_bounce(&mut pos, &mut vel, Vec2::new(800.0, 600.0));
        assert_eq!(pos, Vec2::new(801.0, 7.0));
        assert_eq!(vel, Vec2::new(-3.0, -3.0));
    }

    #[test]
    fn test_step_and_bounce_exact_edge_does_not_flip() {
        let mut pos = Vec2::new(797.0, 3.0);
        let mut vel = Vec2::new(3.0, -3.0);
        step_and_bounce(&mut pos, &mut vel, Vec2::new(800.0, 600.0));
        assert_eq!(pos, Vec2::new(800.0, 0.0));
        assert_eq!(vel, Vec2::new(3.0, -3.0));
    }

    proptest! {
        #[test]
        fn prop_contains_matches_axis_ranges(
            cx in -500.0f32..500.0, cy in -500.0f32..500.0,
            size in 1.0f32..100.0,
            px in -600.0f32..600.0, py in -600.0f32..600.0,
        ) {
            let c = Vec2::new(cx, cy);
            let p = Vec2::new(px, py);
            let half = size / 2.0;
            let expected = cx - half <= px && px <= cx + half && cy - half <= py && py <= cy + half;
            prop_assert_eq!(square_contains(c, size, p), expected);
        }

        #[test]
        fn prop_strict_hit_implies_contains(
            cx in -500.0f32..500.0, cy in -500.0f32..500.0,
            size in 1.0f32..100.0,
            px in -600.0f32..600.0, py in -600.0f32..600.0,
        ) {
            let c = Vec2::new(cx, cy);
            let p = Vec2::new(px, py);
            if square_contains_strict(c, size, p) {
                prop_assert!(square_contains(c, size, p));
            }
        }

        #[test]
        fn prop_bounce_preserves_magnitude(
            pos in -50.0f32..850.0,
            vel in -10.0f32..10.0,
        ) {
            let next = bounce_axis(pos, vel, 800.0);
            prop_assert_eq!(next.abs(), vel.abs());
            let crossed = pos < 0.0 || pos > 800.0;
            prop_assert_eq!(next == -vel && vel != 0.0, crossed && vel != 0.0);
        }
    }
}
