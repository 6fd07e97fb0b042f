//! Session settings
//!
//! Stored as JSON on disk. Missing fields fall back to their defaults so a
//! config file only needs the values it overrides.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access settings file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Session settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty; higher levels spawn enemies faster
    pub level: u32,

    // === Surface ===
    pub width: f32,
    pub height: f32,
    /// Ticks per second of simulated time
    pub tick_rate_hz: u32,

    // === Determinism ===
    /// Spawn RNG seed (0 = pick one at startup)
    pub seed: u64,

    // === Tuning ===
    /// Enemy population cap (`None` = unbounded)
    pub max_enemies: Option<usize>,
    pub player_speed: f32,
    pub home_size: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level: 1,

            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_rate_hz: DEFAULT_TICK_RATE_HZ,

            seed: 0,

            max_enemies: Some(DEFAULT_MAX_ENEMIES),
            player_speed: PLAYER_SPEED,
            home_size: HOME_SIZE,
        }
    }
}

fn positive(name: &str, value: f32) -> Result<(), SettingsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::Invalid(format!(
            "{} must be a positive number, got {}",
            name, value
        )))
    }
}

impl Settings {
    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("settings saved to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.level == 0 {
            return Err(SettingsError::Invalid("level must be at least 1".into()));
        }
        if self.tick_rate_hz == 0 {
            return Err(SettingsError::Invalid("tick_rate_hz must be at least 1".into()));
        }
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("player_speed", self.player_speed)?;
        positive("home_size", self.home_size)?;
        Ok(())
    }
}
