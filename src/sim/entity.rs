//! Lifecycle contract shared by every simulated object
//!
//! An entity is created once when registered, updated and rendered once per
//! tick while alive, and deleted exactly once when removed.
//!
//! There is no isolation between entities inside a tick: each update sees
//! whatever the entities processed before it last wrote, including the
//! Home position a Thief moved earlier in the same tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::home::Home;
use super::waypoint::Waypoint;
use crate::renderer::Surface;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Player reached home
    Win,
    /// An enemy caught the player
    Lose,
}

impl Outcome {
    /// Banner text shown when the game ends
    pub fn banner(&self) -> &'static str {
        match self {
            Outcome::Win => "You Win",
            Outcome::Lose => "You Lose",
        }
    }
}

/// Shared state an update may read or write
pub struct TickContext<'a> {
    /// Surface extent (width, height)
    pub bounds: Vec2,
    /// Player position as last written
    pub player: Vec2,
    pub home: &'a mut Home,
    pub waypoint: &'a mut Waypoint,
}

/// A simulated, drawable object
pub trait Entity {
    /// Allocate the visual representation
    fn create(&mut self, surface: &mut dyn Surface);

    /// Advance by one tick. `Some` signals the game is over.
    ///
    /// Fixtures that never move keep the default no-op.
    fn update(&mut self, _ctx: &mut TickContext<'_>) -> Option<Outcome> {
        None
    }

    /// Sync the visual representation to the current state
    fn render(&self, surface: &mut dyn Surface);

    /// Release the visual representation
    fn delete(&mut self, surface: &mut dyn Surface);

    fn position(&self) -> Vec2;
}
