//! Deterministic simulation module
//!
//! All gameplay logic lives here. Given the same settings, seed, clock
//! readings and clicks, a session plays out identically:
//! - Seeded RNG only
//! - Time read from an injected clock
//! - Stable update order (waypoint, home, player, enemies by spawn order)
//! - Drawing only through the `Surface` trait

pub mod collision;
pub mod enemy;
pub mod entity;
pub mod generator;
pub mod home;
pub mod player;
pub mod state;
pub mod tick;
pub mod waypoint;

pub use enemy::{
    ChasingEnemy, Enemy, EnemyBody, EnemyKind, FenceLeg, FencingEnemy, RandomWalkEnemy,
    ThiefEnemy, ThiefState,
};
pub use entity::{Entity, Outcome, TickContext};
pub use generator::{EnemyGenerator, SpawnTimer, interval_for};
pub use home::Home;
pub use player::Player;
pub use state::{EnemySnapshot, GameController, GamePhase, Snapshot, SpawnError};
pub use waypoint::Waypoint;
