//! Enemy that patrols a rectangle around home

use glam::Vec2;
use serde::Serialize;

use super::{Enemy, EnemyBody, EnemyKind};
use crate::consts::{FENCING_SIZE, FENCING_SPEED};
use crate::renderer::{Color, ShapeKind, Surface};
use crate::sim::entity::{Entity, Outcome, TickContext};

/// Patrol legs, visited in declaration order and then wrapping around
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FenceLeg {
    Down,
    Right,
    Up,
    Left,
}

impl FenceLeg {
    pub fn next(self) -> Self {
        match self {
            FenceLeg::Down => FenceLeg::Right,
            FenceLeg::Right => FenceLeg::Up,
            FenceLeg::Up => FenceLeg::Left,
            FenceLeg::Left => FenceLeg::Down,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FenceLeg::Down => "move_down",
            FenceLeg::Right => "move_right",
            FenceLeg::Up => "move_up",
            FenceLeg::Left => "move_left",
        }
    }
}

/// Rectangle edges the patrol turns at (screen coordinates, y grows down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fence {
    pub left: f32,
    pub right: f32,
    pub up: f32,
    pub down: f32,
}

impl Fence {
    /// Fence symmetric about `home`, with `left`/`up` as one corner
    pub fn around(home: Vec2, left: f32, up: f32) -> Self {
        Self {
            left,
            right: 2.0 * home.x - left,
            up,
            down: 2.0 * home.y - up,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FencingEnemy {
    body: EnemyBody,
    pub speed: f32,
    pub fence: Fence,
    leg: FenceLeg,
}

impl FencingEnemy {
    /// Fencing enemy starting at `pos` on the first leg (heading down).
    ///
    /// The fence is fixed at spawn from the home position at that moment.
    pub fn new(pos: Vec2, home: Vec2, x_left: f32, y_up: f32) -> Self {
        Self {
            body: EnemyBody::new(pos, FENCING_SIZE, Color::Red, ShapeKind::Rect),
            speed: FENCING_SPEED,
            fence: Fence::around(home, x_left, y_up),
            leg: FenceLeg::Down,
        }
    }

    pub fn leg(&self) -> FenceLeg {
        self.leg
    }

    /// Move along the current leg; turn once its edge is crossed
    fn patrol(&mut self) {
        let pos = &mut self.body.pos;
        let crossed = match self.leg {
            FenceLeg::Down => {
                pos.y += self.speed;
                pos.y > self.fence.down
            }
            FenceLeg::Right => {
                pos.x += self.speed;
                pos.x > self.fence.right
            }
            FenceLeg::Up => {
                pos.y -= self.speed;
                pos.y < self.fence.up
            }
            FenceLeg::Left => {
                pos.x -= self.speed;
                pos.x < self.fence.left
            }
        };
        if crossed {
            self.leg = self.leg.next();
            log::debug!("fencing enemy turns to {}", self.leg.as_str());
        }
    }
}

impl Entity for FencingEnemy {
    fn create(&mut self, surface: &mut dyn Surface) {
        self.body.create(surface);
    }

    fn update(&mut self, ctx: &mut TickContext<'_>) -> Option<Outcome> {
        self.patrol();
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

impl Enemy for FencingEnemy {
    fn kind(&self) -> EnemyKind {
        EnemyKind::Fencing
    }

    fn body(&self) -> &EnemyBody {
        &self.body
    }

    fn state_name(&self) -> Option<&'static str> {
        Some(self.leg.as_str())
    }
}
