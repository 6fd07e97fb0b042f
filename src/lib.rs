//! Homebound - a 2D chase-and-evade simulation
//!
//! Core modules:
//! - `sim`: Entity simulation (player navigation, enemy state machines, win/lose)
//! - `renderer`: Drawing-surface contract and an in-memory surface
//! - `platform`: Host abstractions (clock, input, fixed-rate tick driver)
//! - `settings`: Session configuration

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Default surface dimensions
    pub const DEFAULT_WIDTH: f32 = 800.0;
    pub const DEFAULT_HEIGHT: f32 = 600.0;
    /// Default tick rate (20 ms per tick)
    pub const DEFAULT_TICK_RATE_HZ: u32 = 50;
    /// Default enemy population cap
    pub const DEFAULT_MAX_ENEMIES: usize = 200;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_SIZE: f32 = 16.0;
    /// Player start, measured from the left edge (vertically centered)
    pub const PLAYER_START_X: f32 = 50.0;

    /// Home defaults
    pub const HOME_SIZE: f32 = 20.0;
    /// Home center, measured from the right edge (vertically centered)
    pub const HOME_INSET_X: f32 = 100.0;

    /// Half-length of the waypoint cross arms
    pub const WAYPOINT_ARM: f32 = 10.0;

    /// RandomWalk enemy
    pub const RANDOM_WALK_SIZE: f32 = 25.0;
    pub const RANDOM_WALK_SPEED: f32 = 3.0;
    pub const RANDOM_WALK_INTERVAL: Duration = Duration::from_millis(2800);

    /// Chasing enemy
    pub const CHASING_SIZE: f32 = 20.0;
    pub const CHASING_SPEED: f32 = 2.0;
    pub const CHASING_INTERVAL: Duration = Duration::from_millis(5000);

    /// Fencing enemy
    pub const FENCING_SIZE: f32 = 15.0;
    pub const FENCING_SPEED: f32 = 2.0;
    pub const FENCING_INTERVAL: Duration = Duration::from_millis(5000);
    /// Fence offset range from home center (inclusive)
    pub const FENCING_MIN_OFFSET: i32 = 20;
    pub const FENCING_MAX_OFFSET: i32 = 40;

    /// Thief enemy
    pub const THIEF_SIZE: f32 = 30.0;
    /// Pursuit speed while looking for home
    pub const THIEF_SPEED: f32 = 2.0;
    /// Pursuit speed while returning home to its spot
    pub const THIEF_CARRY_SPEED: f32 = 4.0;
    /// Per-axis wander velocity magnitude
    pub const THIEF_WANDER_SPEED: f32 = 2.0;
    pub const THIEF_WANDER_TIME: Duration = Duration::from_millis(6500);
    pub const THIEF_CARRY_TIME: Duration = Duration::from_millis(3000);
    /// Per-axis arrival tolerance
    pub const THIEF_TOLERANCE: f32 = 3.0;
    pub const THIEF_INTERVAL: Duration = Duration::from_millis(8500);

    /// Shortest spawn interval any level can reach
    pub const MIN_SPAWN_INTERVAL: Duration = Duration::from_millis(500);
}

/// Unit vector from `from` toward `to`, or zero when the points coincide
#[inline]
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    let delta = to - from;
    if !delta.is_finite() {
        return Vec2::ZERO;
    }
    delta.try_normalize().unwrap_or(Vec2::ZERO)
}

/// Displacement of a pursuit step: `speed` units along the unit vector toward `to`.
///
/// Coincident points yield zero displacement.
#[inline]
pub fn pursuit_step(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    direction_to(from, to) * speed
}

/// Check that `point` is within `tolerance` of `target` on both axes (inclusive)
#[inline]
pub fn within_tolerance(point: Vec2, target: Vec2, tolerance: f32) -> bool {
    (point - target).abs().max_element() <= tolerance
}
