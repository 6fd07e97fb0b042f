//! Enemy that drifts in a straight line and bounces off the surface edges

use glam::Vec2;

use super::{Enemy, EnemyBody, EnemyKind};
use crate::consts::RANDOM_WALK_SIZE;
use crate::renderer::{Color, ShapeKind, Surface};
use crate::sim::collision::step_and_bounce;
use crate::sim::entity::{Entity, Outcome, TickContext};

#[derive(Debug, Clone)]
pub struct RandomWalkEnemy {
    body: EnemyBody,
    /// Per-axis velocity (units per tick)
    pub vel: Vec2,
}

impl RandomWalkEnemy {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            body: EnemyBody::new(pos, RANDOM_WALK_SIZE, Color::Yellow, ShapeKind::Oval),
            vel,
        }
    }
}

impl Entity for RandomWalkEnemy {
    fn create(&mut self, surface: &mut dyn Surface) {
        self.body.create(surface);
    }

    fn update(&mut self, ctx: &mut TickContext<'_>) -> Option<Outcome> {
        step_and_bounce(&mut self.body.pos, &mut self.vel, ctx.bounds);
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

impl Enemy for RandomWalkEnemy {
    fn kind(&self) -> EnemyKind {
        EnemyKind::RandomWalk
    }

    fn body(&self) -> &EnemyBody {
        &self.body
    }
}
