//! Enemies
//!
//! Every variant is its own type with its own movement state; they share
//! only the square body (position, size, color) and the hit-test against
//! the player. Each variant runs the hit-test after its own movement.

pub mod chasing;
pub mod fencing;
pub mod random_walk;
pub mod thief;

pub use chasing::ChasingEnemy;
pub use fencing::{FenceLeg, FencingEnemy};
pub use random_walk::RandomWalkEnemy;
pub use thief::{ThiefEnemy, ThiefState};

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::square_contains_strict;
use super::entity::{Entity, Outcome};
use crate::renderer::shapes::square_corners;
use crate::renderer::{Color, Shape, ShapeId, ShapeKind, Surface};

/// Enemy variants, in spawn-timer order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    RandomWalk,
    Chasing,
    Fencing,
    Thief,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 4] = [
        EnemyKind::RandomWalk,
        EnemyKind::Chasing,
        EnemyKind::Fencing,
        EnemyKind::Thief,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EnemyKind::RandomWalk => "random_walk",
            EnemyKind::Chasing => "chasing",
            EnemyKind::Fencing => "fencing",
            EnemyKind::Thief => "thief",
        }
    }
}

/// Capabilities common to all enemies
pub trait Enemy: Entity {
    fn kind(&self) -> EnemyKind;

    fn body(&self) -> &EnemyBody;

    fn size(&self) -> f32 {
        self.body().size
    }

    fn color(&self) -> Color {
        self.body().color
    }

    /// Check whether the player stands strictly inside this enemy's box
    fn hits_player(&self, player: Vec2) -> bool {
        self.body().hits(player)
    }

    /// Name of the current movement state, for state-machine variants
    fn state_name(&self) -> Option<&'static str> {
        None
    }
}

/// Square body shared by all enemy variants
#[derive(Debug, Clone, Serialize)]
pub struct EnemyBody {
    pub pos: Vec2,
    pub size: f32,
    pub color: Color,
    #[serde(skip)]
    look: ShapeKind,
    #[serde(skip)]
    shape: Option<ShapeId>,
}

impl EnemyBody {
    pub fn new(pos: Vec2, size: f32, color: Color, look: ShapeKind) -> Self {
        Self {
            pos,
            size,
            color,
            look,
            shape: None,
        }
    }

    pub fn hits(&self, player: Vec2) -> bool {
        square_contains_strict(self.pos, self.size, player)
    }

    /// Hit-test result as a tick outcome
    pub fn catch(&self, player: Vec2) -> Option<Outcome> {
        self.hits(player).then_some(Outcome::Lose)
    }

    pub fn create(&mut self, surface: &mut dyn Surface) {
        self.shape = Some(surface.create_shape(Shape::new(self.look, self.color)));
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        if let Some(id) = self.shape {
            let (a, b) = square_corners(self.pos, self.size);
            surface.set_coords(id, a, b);
        }
    }

    pub fn delete(&mut self, surface: &mut dyn Surface) {
        if let Some(id) = self.shape.take() {
            surface.delete_shape(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;

    #[test]
    fn test_hit_is_strict() {
        let body = EnemyBody::new(Vec2::new(100.0, 100.0), 20.0, Color::Blue, ShapeKind::Oval);
        assert!(body.hits(Vec2::new(100.0, 100.0)));
        assert!(body.hits(Vec2::new(109.0, 91.0)));
        assert!(!body.hits(Vec2::new(110.0, 100.0)));
        assert!(!body.hits(Vec2::new(100.0, 90.0)));
        assert_eq!(body.catch(Vec2::new(100.0, 100.0)), Some(Outcome::Lose));
        assert_eq!(body.catch(Vec2::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_body_lifecycle() {
        let mut surface = RecordingSurface::new(800.0, 600.0);
        let mut body = EnemyBody::new(Vec2::new(50.0, 60.0), 10.0, Color::Red, ShapeKind::Rect);
        body.create(&mut surface);
        body.render(&mut surface);

        let id = body.shape.unwrap();
        let item = surface.item(id).unwrap();
        assert_eq!(item.shape, Shape::new(ShapeKind::Rect, Color::Red));
        assert_eq!(item.a, Vec2::new(45.0, 55.0));

        body.delete(&mut surface);
        body.delete(&mut surface);
        assert_eq!(surface.shape_count(), 0);
    }
}
