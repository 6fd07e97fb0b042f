//! Game controller and observable state
//!
//! The controller owns every entity: player, home, waypoint, the enemy list
//! (spawn order) and the generator feeding it. Per-tick orchestration lives
//! in `tick.rs`.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::enemy::{Enemy, EnemyKind};
use super::entity::{Entity, Outcome};
use super::generator::EnemyGenerator;
use super::home::Home;
use super::player::Player;
use super::waypoint::Waypoint;
use crate::consts::*;
use crate::platform::time::SharedClock;
use crate::renderer::{Color, ShapeId, Surface};
use crate::settings::Settings;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticks are running
    Playing,
    /// Player reached home
    Won,
    /// An enemy caught the player
    Lost,
}

impl GamePhase {
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GamePhase::Playing => None,
            GamePhase::Won => Some(Outcome::Win),
            GamePhase::Lost => Some(Outcome::Lose),
        }
    }
}

/// Rejected enemy registration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpawnError {
    #[error("enemy cap of {limit} reached")]
    CapacityReached { limit: usize },
}

/// Serializable view of one enemy
#[derive(Debug, Clone, Serialize)]
pub struct EnemySnapshot {
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub state: Option<&'static str>,
}

/// Serializable view of the whole session
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub player: Vec2,
    pub home: Vec2,
    pub home_size: f32,
    /// Waypoint position while active
    pub waypoint: Option<Vec2>,
    pub enemies: Vec<EnemySnapshot>,
}

/// Owns and drives one session
pub struct GameController {
    pub level: u32,
    pub player: Player,
    pub home: Home,
    pub waypoint: Waypoint,
    pub(super) enemies: Vec<Box<dyn Enemy>>,
    pub(super) generator: EnemyGenerator,
    pub(super) phase: GamePhase,
    pub(super) time_ticks: u64,
    /// Set while spawns are being rejected, so the cap is logged once per episode
    pub(super) at_capacity: bool,
    max_enemies: Option<usize>,
    banner: Option<ShapeId>,
}

impl GameController {
    /// Set up a session on `surface`: waypoint, home and player are created
    /// in that order and the spawn timers start at the clock's current time.
    pub fn new(settings: &Settings, clock: SharedClock, surface: &mut dyn Surface) -> Self {
        let (width, height) = (surface.width(), surface.height());
        let mid_y = (height / 2.0).floor();

        let mut waypoint = Waypoint::new();
        waypoint.create(surface);
        let mut home = Home::new(Vec2::new(width - HOME_INSET_X, mid_y), settings.home_size);
        home.create(surface);
        let mut player = Player::new(Vec2::new(PLAYER_START_X, mid_y), settings.player_speed);
        player.create(surface);

        log::info!(
            "new game: level {}, surface {}x{}, seed {}",
            settings.level,
            width,
            height,
            settings.seed
        );

        Self {
            level: settings.level,
            player,
            home,
            waypoint,
            enemies: Vec::new(),
            generator: EnemyGenerator::new(settings.level, settings.seed, clock),
            phase: GamePhase::Playing,
            time_ticks: 0,
            at_capacity: false,
            max_enemies: settings.max_enemies,
            banner: None,
        }
    }

    /// Mouse click: retarget the player
    pub fn on_click(&mut self, x: f32, y: f32) {
        log::debug!("waypoint set to ({:.1}, {:.1})", x, y);
        self.waypoint.activate(x, y);
    }

    /// Register a new enemy: create its visuals and append it to the update order
    pub fn add_enemy(
        &mut self,
        mut enemy: Box<dyn Enemy>,
        surface: &mut dyn Surface,
    ) -> Result<(), SpawnError> {
        if let Some(limit) = self.max_enemies {
            if self.enemies.len() >= limit {
                return Err(SpawnError::CapacityReached { limit });
            }
        }
        enemy.create(surface);
        log::debug!(
            "spawned {} {} enemy at ({:.0}, {:.0}), {} alive",
            enemy.color().as_str(),
            enemy.kind().as_str(),
            enemy.position().x,
            enemy.position().y,
            self.enemies.len() + 1
        );
        self.enemies.push(enemy);
        Ok(())
    }

    /// End the game as a win. Ignored if the game is already over.
    pub fn game_over_win(&mut self, surface: &mut dyn Surface) {
        self.finish(Outcome::Win, surface);
    }

    /// End the game as a loss. Ignored if the game is already over.
    pub fn game_over_lose(&mut self, surface: &mut dyn Surface) {
        self.finish(Outcome::Lose, surface);
    }

    /// Stop ticking and draw the banner, first caller only
    pub(super) fn finish(&mut self, outcome: Outcome, surface: &mut dyn Surface) {
        if self.phase != GamePhase::Playing {
            log::debug!("ignoring {:?}, game already over", outcome);
            return;
        }
        let color = match outcome {
            Outcome::Win => {
                self.phase = GamePhase::Won;
                Color::Green
            }
            Outcome::Lose => {
                self.phase = GamePhase::Lost;
                Color::Red
            }
        };
        let center = surface.size() / 2.0;
        self.banner = Some(surface.draw_text(center, outcome.banner(), color));
        log::info!(
            "game over after {} ticks: {} ({} enemies)",
            self.time_ticks,
            outcome.banner(),
            self.enemies.len()
        );
    }

    /// Delete every entity's visuals, including the banner
    pub fn shutdown(&mut self, surface: &mut dyn Surface) {
        for enemy in &mut self.enemies {
            enemy.delete(surface);
        }
        self.enemies.clear();
        self.player.delete(surface);
        self.home.delete(surface);
        self.waypoint.delete(surface);
        if let Some(id) = self.banner.take() {
            surface.delete_shape(id);
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase != GamePhase::Playing
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.phase.outcome()
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Live enemies in spawn order
    pub fn enemies(&self) -> &[Box<dyn Enemy>] {
        &self.enemies
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            time_ticks: self.time_ticks,
            phase: self.phase,
            player: self.player.pos,
            home: self.home.pos,
            home_size: self.home.size,
            waypoint: self.waypoint.is_active().then(|| self.waypoint.position()),
            enemies: self
                .enemies
                .iter()
                .map(|e| EnemySnapshot {
                    kind: e.kind(),
                    pos: e.position(),
                    state: e.state_name(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::time::ManualClock;
    use crate::renderer::RecordingSurface;
    use crate::sim::enemy::ChasingEnemy;

    fn setup(settings: &Settings) -> (RecordingSurface, GameController) {
        let mut surface = RecordingSurface::new(800.0, 600.0);
        let controller = GameController::new(settings, ManualClock::shared(), &mut surface);
        (surface, controller)
    }

    #[test]
    fn test_initial_layout() {
        let (surface, controller) = setup(&Settings::default());
        assert_eq!(controller.player.pos, Vec2::new(50.0, 300.0));
        assert_eq!(controller.home.pos, Vec2::new(700.0, 300.0));
        assert_eq!(controller.home.size, 20.0);
        assert!(!controller.waypoint.is_active());
        assert_eq!(controller.phase(), GamePhase::Playing);
        // Two waypoint lines, home outline, player sprite
        assert_eq!(surface.shape_count(), 4);
    }

    #[test]
    fn test_click_activates_waypoint() {
        let (_surface, mut controller) = setup(&Settings::default());
        controller.on_click(900.0, -5.0);
        assert!(controller.waypoint.is_active());
        assert_eq!(controller.waypoint.position(), Vec2::new(900.0, -5.0));
    }

    #[test]
    fn test_add_enemy_respects_cap() {
        let settings = Settings {
            max_enemies: Some(2),
            ..Settings::default()
        };
        let (mut surface, mut controller) = setup(&settings);
        for _ in 0..2 {
            let enemy = Box::new(ChasingEnemy::new(Vec2::new(400.0, 100.0)));
            assert!(controller.add_enemy(enemy, &mut surface).is_ok());
        }
        let extra = Box::new(ChasingEnemy::new(Vec2::new(400.0, 100.0)));
        assert_eq!(
            controller.add_enemy(extra, &mut surface),
            Err(SpawnError::CapacityReached { limit: 2 })
        );
        assert_eq!(controller.enemy_count(), 2);
        assert_eq!(surface.shape_count(), 6);
    }

    #[test]
    fn test_game_over_is_idempotent() {
        let (mut surface, mut controller) = setup(&Settings::default());
        controller.game_over_lose(&mut surface);
        controller.game_over_win(&mut surface);
        controller.game_over_lose(&mut surface);

        assert_eq!(controller.phase(), GamePhase::Lost);
        assert_eq!(controller.outcome(), Some(Outcome::Lose));
        assert_eq!(surface.texts().len(), 1);
        assert_eq!(surface.texts()[0].text, "You Lose");
        assert_eq!(surface.texts()[0].center, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_shutdown_releases_everything() {
        let (mut surface, mut controller) = setup(&Settings::default());
        let enemy = Box::new(ChasingEnemy::new(Vec2::new(400.0, 100.0)));
        controller.add_enemy(enemy, &mut surface).unwrap();
        controller.game_over_win(&mut surface);

        controller.shutdown(&mut surface);
        assert_eq!(surface.shape_count(), 0);
        assert!(surface.texts().is_empty());
        assert_eq!(controller.enemy_count(), 0);
    }

    #[test]
    fn test_snapshot_serializes() {
        let (mut surface, mut controller) = setup(&Settings::default());
        let enemy = Box::new(ChasingEnemy::new(Vec2::new(400.0, 100.0)));
        controller.add_enemy(enemy, &mut surface).unwrap();
        controller.on_click(10.0, 20.0);

        let json = serde_json::to_value(controller.snapshot()).unwrap();
        assert_eq!(json["phase"], "Playing");
        assert_eq!(json["enemies"][0]["kind"], "Chasing");
        assert_eq!(json["waypoint"][0], 10.0);
    }
}
