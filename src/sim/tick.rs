//! Per-tick orchestration
//!
//! One tick: fire due spawn timers, then update and render each entity in
//! registration order (waypoint, home, player, enemies by spawn order).
//! Every update in the tick runs even after one of them signals game over;
//! the first signal decides the outcome and the banner is drawn once.

use super::entity::{Entity, Outcome, TickContext};
use super::state::{GameController, GamePhase, SpawnError};
use crate::renderer::Surface;

impl GameController {
    /// Advance the simulation by one tick. No-op once the game is over.
    pub fn tick(&mut self, surface: &mut dyn Surface) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.time_ticks += 1;

        let bounds = surface.size();
        self.spawn_due(surface);

        // Waypoint and home are fixtures: nothing to update, only to draw
        self.waypoint.render(surface);
        self.home.render(surface);

        let mut ended: Option<Outcome> = None;
        let mut ctx = TickContext {
            bounds,
            player: self.player.pos,
            home: &mut self.home,
            waypoint: &mut self.waypoint,
        };

        ended = ended.or(self.player.update(&mut ctx));
        self.player.render(surface);
        ctx.player = self.player.pos;

        for enemy in &mut self.enemies {
            let signal = enemy.update(&mut ctx);
            ended = ended.or(signal);
            enemy.render(surface);
        }

        if let Some(outcome) = ended {
            self.finish(outcome, surface);
        }
    }

    /// Spawn one enemy per fired timer
    fn spawn_due(&mut self, surface: &mut dyn Surface) {
        let bounds = surface.size();
        for kind in self.generator.due() {
            let enemy = self.generator.spawn(kind, bounds, self.home.pos);
            match self.add_enemy(enemy, surface) {
                Ok(()) => self.at_capacity = false,
                Err(SpawnError::CapacityReached { limit }) => {
                    if !self.at_capacity {
                        log::warn!("enemy cap of {} reached, skipping spawns", limit);
                        self.at_capacity = true;
                    }
                }
            }
        }
    }
}
