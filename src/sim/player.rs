//! The player

use glam::Vec2;
use serde::Serialize;

use super::entity::{Entity, Outcome, TickContext};
use crate::consts::PLAYER_SIZE;
use crate::pursuit_step;
use crate::renderer::shapes::square_corners;
use crate::renderer::{Color, Shape, ShapeId, ShapeKind, Surface};

/// Moves toward the active waypoint at a fixed speed
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub pos: Vec2,
    /// Distance per tick
    pub speed: f32,
    #[serde(skip)]
    sprite: Option<ShapeId>,
}

impl Player {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            speed,
            sprite: None,
        }
    }
}

impl Entity for Player {
    fn create(&mut self, surface: &mut dyn Surface) {
        self.sprite = Some(surface.create_shape(Shape::new(ShapeKind::Sprite, Color::Green)));
    }

    fn update(&mut self, ctx: &mut TickContext<'_>) -> Option<Outcome> {
        // Arrival is checked before any movement
        if ctx.home.contains(self.pos.x, self.pos.y) {
            return Some(Outcome::Win);
        }

        if ctx.waypoint.is_active() {
            let target = ctx.waypoint.position();
            let remaining = self.pos.distance(target);
            self.pos += pursuit_step(self.pos, target, self.speed);
            // Close enough: let this step overshoot and stop here
            if remaining < self.speed {
                ctx.waypoint.deactivate();
            }
        }

        None
    }

    fn render(&self, surface: &mut dyn Surface) {
        if let Some(id) = self.sprite {
            let (a, b) = square_corners(self.pos, PLAYER_SIZE);
            surface.set_coords(id, a, b);
        }
    }

    fn delete(&mut self, surface: &mut dyn Surface) {
        if let Some(id) = self.sprite.take() {
            surface.delete_shape(id);
        }
    }

    fn position(&self) -> Vec2 {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::home::Home;
    use crate::sim::waypoint::Waypoint;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn update(player: &mut Player, home: &mut Home, waypoint: &mut Waypoint) -> Option<Outcome> {
        let mut ctx = TickContext {
            bounds: Vec2::new(800.0, 600.0),
            player: player.pos,
            home,
            waypoint,
        };
        player.update(&mut ctx)
    }

    fn far_home() -> Home {
        Home::new(Vec2::new(700.0, 300.0), 20.0)
    }

    #[test]
    fn test_idle_without_waypoint() {
        let mut player = Player::new(Vec2::new(50.0, 300.0), 5.0);
        let mut home = far_home();
        let mut waypoint = Waypoint::new();
        for _ in 0..10 {
            assert_eq!(update(&mut player, &mut home, &mut waypoint), None);
        }
        assert_eq!(player.pos, Vec2::new(50.0, 300.0));
    }

    #[test]
    fn test_moves_speed_toward_waypoint() {
        let mut player = Player::new(Vec2::new(50.0, 300.0), 5.0);
        let mut home = far_home();
        let mut waypoint = Waypoint::new();
        waypoint.activate(50.0, 200.0);

        update(&mut player, &mut home, &mut waypoint);
        assert_relative_eq!(player.pos.x, 50.0, epsilon = 1e-4);
        assert_relative_eq!(player.pos.y, 295.0, epsilon = 1e-4);
        assert!(waypoint.is_active());
    }

    #[test]
    fn test_overshoots_and_deactivates_when_close() {
        let mut player = Player::new(Vec2::new(50.0, 300.0), 5.0);
        let mut home = far_home();
        let mut waypoint = Waypoint::new();
        waypoint.activate(53.0, 300.0);

        update(&mut player, &mut home, &mut waypoint);
        assert_relative_eq!(player.pos.x, 55.0, epsilon = 1e-4);
        assert!(!waypoint.is_active());

        // Stays put afterwards
        update(&mut player, &mut home, &mut waypoint);
        assert_relative_eq!(player.pos.x, 55.0, epsilon = 1e-4);
    }

    #[test]
    fn test_on_waypoint_does_not_move() {
        let mut player = Player::new(Vec2::new(50.0, 300.0), 5.0);
        let mut home = far_home();
        let mut waypoint = Waypoint::new();
        waypoint.activate(50.0, 300.0);

        update(&mut player, &mut home, &mut waypoint);
        assert_eq!(player.pos, Vec2::new(50.0, 300.0));
        assert!(!waypoint.is_active());
    }

    #[test]
    fn test_win_checked_before_moving() {
        let mut player = Player::new(Vec2::new(700.0, 300.0), 5.0);
        let mut home = far_home();
        let mut waypoint = Waypoint::new();
        waypoint.activate(0.0, 0.0);

        assert_eq!(update(&mut player, &mut home, &mut waypoint), Some(Outcome::Win));
        assert_eq!(player.pos, Vec2::new(700.0, 300.0));
        assert!(waypoint.is_active());
    }

    proptest! {
        #[test]
        fn prop_deactivates_iff_within_speed(
            px in 0.0f32..600.0, py in 0.0f32..600.0,
            wx in 0.0f32..600.0, wy in 0.0f32..600.0,
        ) {
            let mut player = Player::new(Vec2::new(px, py), 5.0);
            let mut home = Home::new(Vec2::new(2000.0, 2000.0), 20.0);
            let mut waypoint = Waypoint::new();
            waypoint.activate(wx, wy);
            let before = player.pos.distance(waypoint.position());

            update(&mut player, &mut home, &mut waypoint);
            prop_assert_eq!(waypoint.is_active(), before >= 5.0);
        }
    }
}
