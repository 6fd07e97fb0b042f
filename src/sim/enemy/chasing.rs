//! Enemy that runs straight at the player

use glam::Vec2;

use super::{Enemy, EnemyBody, EnemyKind};
use crate::consts::{CHASING_SIZE, CHASING_SPEED};
use crate::pursuit_step;
use crate::renderer::{Color, ShapeKind, Surface};
use crate::sim::entity::{Entity, Outcome, TickContext};

/// Direct pursuit: each tick steps `speed` along the line to the player's
/// current position. Standing exactly on the player means no step.
#[derive(Debug, Clone)]
pub struct ChasingEnemy {
    body: EnemyBody,
    pub speed: f32,
}

impl ChasingEnemy {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: EnemyBody::new(pos, CHASING_SIZE, Color::Blue, ShapeKind::Oval),
            speed: CHASING_SPEED,
        }
    }
}

impl Entity for ChasingEnemy {
    fn create(&mut self, surface: &mut dyn Surface) {
        self.body.create(surface);
    }

    fn update(&mut self, ctx: &mut TickContext<'_>) -> Option<Outcome> {
        self.body.pos += pursuit_step(self.body.pos, ctx.player, self.speed);
        self.body.catch(ctx.player)
    }

    fn render(&self, surface: &mut dyn Surface) {
        self.body.render(surface);
    }

    fn delete(&mut self, surface: &mut dyn Surface) {
        self.body.delete(surface);
    }

    fn position(&self) -> Vec2 {
        self.body.pos
    }
}

impl Enemy for ChasingEnemy {
    fn kind(&self) -> EnemyKind {
        EnemyKind::Chasing
    }

    fn body(&self) -> &EnemyBody {
        &self.body
    }
}
