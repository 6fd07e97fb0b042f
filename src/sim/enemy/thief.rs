//! Enemy that steals home, carries it around, then puts it back
//!
//! State machine (timers read from the injected clock, not tick counts):
//!
//! ```text
//! MoveRandom --(wander time elapsed)--> FindHome
//! FindHome   --(within tolerance of home)--> MoveHome
//! MoveHome   --(carry time elapsed)--> PlaceHome
//! PlaceHome  --(within tolerance of its recorded spot)--> MoveRandom
//! ```
//!
//! While in `MoveHome` and `PlaceHome` the thief writes home's position to
//! its own after moving, every tick.

use std::time::Duration;

use glam::Vec2;
use serde::Serialize;

use super::{Enemy, EnemyBody, EnemyKind};
use crate::consts::*;
use crate::platform::time::SharedClock;
use crate::renderer::{Color, ShapeKind, Surface};
use crate::sim::collision::step_and_bounce;
use crate::sim::entity::{Entity, Outcome, TickContext};
use crate::{pursuit_step, within_tolerance};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ThiefState {
    /// Bounce around the surface
    MoveRandom,
    /// Pursue home
    FindHome,
    /// Bounce around with home in tow
    MoveHome,
    /// Carry home back to where it was
    PlaceHome,
}

impl ThiefState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThiefState::MoveRandom => "move_random",
            ThiefState::FindHome => "find_home",
            ThiefState::MoveHome => "move_home",
            ThiefState::PlaceHome => "place_home",
        }
    }
}

pub struct ThiefEnemy {
    body: EnemyBody,
    /// Bounce velocity for the wandering states
    pub vel: Vec2,
    /// Pursuit speed for the seeking states
    pub speed: f32,
    /// Home position recorded at spawn
    origin: Vec2,
    state: ThiefState,
    /// Time the current timed phase started
    started: Duration,
    clock: SharedClock,
}

impl ThiefEnemy {
    pub fn new(pos: Vec2, vel: Vec2, home: Vec2, clock: SharedClock) -> Self {
        let started = clock.now();
        Self {
            body: EnemyBody::new(pos, THIEF_SIZE, Color::Green, ShapeKind::Rect),
            vel,
            speed: THIEF_SPEED,
            origin: home,
            state: ThiefState::MoveRandom,
            started,
            clock,
        }
    }

    pub fn state(&self) -> ThiefState {
        self.state
    }

    fn enter(&mut self, state: ThiefState, now: Duration) {
        log::debug!(
            "thief at ({:.1}, {:.1}): {} -> {}",
            self.body.pos.x,
            self.body.pos.y,
            self.state.as_str(),
            state.as_str()
        );
        self.started = now;
        self.state = state;
    }

    fn advance(&mut self, ctx: &mut TickContext<'_>) {
        let now = self.clock.now();
        let elapsed = now.saturating_sub(self.started);

        match self.state {
            ThiefState::MoveRandom => {
                step_and_bounce(&mut self.body.pos, &mut self.vel, ctx.bounds);
                if elapsed >= THIEF_WANDER_TIME {
                    self.vel *= 2.0;
                    self.enter(ThiefState::FindHome, now);
                }
            }
            ThiefState::FindHome => {
                let target = ctx.home.pos;
                self.body.pos += pursuit_step(self.body.pos, target, self.speed);
                if within_tolerance(self.body.pos, target, THIEF_TOLERANCE) {
                    self.speed = THIEF_CARRY_SPEED;
                    self.enter(ThiefState::MoveHome, now);
                }
            }
            ThiefState::MoveHome => {
                step_and_bounce(&mut self.body.pos, &mut self.vel, ctx.bounds);
                ctx.home.pos = self.body.pos;
                if elapsed >= THIEF_CARRY_TIME {
                    self.vel = self.vel.signum() * THIEF_WANDER_SPEED;
                    self.enter(ThiefState::PlaceHome, now);
                }
            }
            ThiefState::PlaceHome => {
                self.body.pos += pursuit_step(self.body.pos, self.origin, self.speed);
                ctx.home.pos = self.body.pos;
                if within_tolerance(self.body.pos, self.origin, THIEF_TOLERANCE) {
                    self.speed = THIEF_SPEED;
                    self.enter(ThiefState::MoveRandom, now);
                }
            }
        }
    }
}

impl std::fmt::Debug for ThiefEnemy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThiefEnemy")
            .field("body", &self.body)
            .field("vel", &self.vel)
            .field("speed", &self.speed)
            .field("origin", &self.origin)
            .field("state", &self.state)
            .field("started", &self.started)
            .finish_non_exhaustive()
    }
}

impl Entity for ThiefEnemy {
    fn create(&mut self, surface: &mut dyn Surface) {
        self.body.create(surface);
    }

    fn update(&mut self, ctx: &mut TickContext<'_>) -> Option<Outcome> {
        self.advance(ctx);
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

impl Enemy for ThiefEnemy {
    fn kind(&self) -> EnemyKind {
        EnemyKind::Thief
    }

    fn body(&self) -> &EnemyBody {
        &self.body
    }

    fn state_name(&self) -> Option<&'static str> {
        Some(self.state.as_str())
    }
}
