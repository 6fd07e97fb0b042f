//! Periodic enemy spawner
//!
//! One independent timer per enemy variant. A timer first fires one interval
//! after the generator starts and re-arms itself at `previous_due + interval`,
//! so a late poll catches up and the spawn count only depends on elapsed time.

use std::time::Duration;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::enemy::{ChasingEnemy, Enemy, EnemyKind, FencingEnemy, RandomWalkEnemy, ThiefEnemy};
use crate::consts::*;
use crate::platform::time::SharedClock;

/// Re-arming timer for one enemy variant
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    pub kind: EnemyKind,
    pub interval: Duration,
    next_due: Duration,
}

impl SpawnTimer {
    fn new(kind: EnemyKind, interval: Duration, start: Duration) -> Self {
        Self {
            kind,
            interval,
            next_due: start + interval,
        }
    }

    pub fn next_due(&self) -> Duration {
        self.next_due
    }
}

/// Level-1 spawn interval of a variant
pub fn base_interval(kind: EnemyKind) -> Duration {
    match kind {
        EnemyKind::RandomWalk => RANDOM_WALK_INTERVAL,
        EnemyKind::Chasing => CHASING_INTERVAL,
        EnemyKind::Fencing => FENCING_INTERVAL,
        EnemyKind::Thief => THIEF_INTERVAL,
    }
}

/// Spawn interval at `level`: base scaled by `10 / (9 + level)`, never below
/// [`MIN_SPAWN_INTERVAL`]
pub fn interval_for(kind: EnemyKind, level: u32) -> Duration {
    let base_ms = base_interval(kind).as_millis() as u64;
    let scaled = base_ms * 10 / (9 + level.max(1) as u64);
    Duration::from_millis(scaled).max(MIN_SPAWN_INTERVAL)
}

/// Spawns enemies of every variant on their own schedules
pub struct EnemyGenerator {
    timers: Vec<SpawnTimer>,
    rng: Pcg32,
    clock: SharedClock,
}

impl EnemyGenerator {
    /// Start all timers at the clock's current time
    pub fn new(level: u32, seed: u64, clock: SharedClock) -> Self {
        let start = clock.now();
        let timers = EnemyKind::ALL
            .iter()
            .map(|&kind| SpawnTimer::new(kind, interval_for(kind, level), start))
            .collect();
        log::debug!("enemy generator armed for level {}", level);
        Self {
            timers,
            rng: Pcg32::seed_from_u64(seed),
            clock,
        }
    }

    pub fn timers(&self) -> &[SpawnTimer] {
        &self.timers
    }

    /// Fire every timer that has come due, re-arming each.
    ///
    /// Returns the variants to spawn, grouped by timer order.
    pub fn due(&mut self) -> Vec<EnemyKind> {
        let now = self.clock.now();
        let mut fired = Vec::new();
        for timer in &mut self.timers {
            while now >= timer.next_due {
                fired.push(timer.kind);
                timer.next_due += timer.interval;
            }
        }
        fired
    }

    /// Build one enemy of `kind` for a surface of extent `bounds` with home at `home`
    pub fn spawn(&mut self, kind: EnemyKind, bounds: Vec2, home: Vec2) -> Box<dyn Enemy> {
        match kind {
            EnemyKind::RandomWalk => {
                let pos = self.random_point(bounds);
                let vel = self.random_signs() * RANDOM_WALK_SPEED;
                Box::new(RandomWalkEnemy::new(pos, vel))
            }
            EnemyKind::Chasing => Box::new(ChasingEnemy::new(self.random_point(bounds))),
            EnemyKind::Fencing => {
                let offset = self.rng.random_range(FENCING_MIN_OFFSET..=FENCING_MAX_OFFSET) as f32;
                let x_left = (home.x - offset).trunc();
                let y_up = (home.y - offset).trunc();
                Box::new(FencingEnemy::new(Vec2::new(x_left, y_up), home, x_left, y_up))
            }
            EnemyKind::Thief => {
                let pos = self.random_point(bounds);
                let vel = self.random_signs() * THIEF_WANDER_SPEED;
                Box::new(ThiefEnemy::new(pos, vel, home, self.clock.clone()))
            }
        }
    }

    /// Uniform integer point on the surface, edges included
    fn random_point(&mut self, bounds: Vec2) -> Vec2 {
        let x = self.rng.random_range(0..=bounds.x.max(0.0) as i32);
        let y = self.rng.random_range(0..=bounds.y.max(0.0) as i32);
        Vec2::new(x as f32, y as f32)
    }

    fn random_signs(&mut self) -> Vec2 {
        let mut sign = || if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        Vec2::new(sign(), sign())
    }
}
