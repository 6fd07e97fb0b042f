//! Mouse input
//!
//! A click is a surface coordinate plus the simulated time it arrives at.
//! Headless sessions replay clicks from a script of `"x,y@seconds"` entries.

use std::str::FromStr;
use std::time::Duration;

use glam::Vec2;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("click `{0}` is not of the form x,y@seconds")]
    Malformed(String),
    #[error("click `{entry}`: bad number `{value}`")]
    BadNumber { entry: String, value: String },
    #[error("click `{0}`: time must be a finite, non-negative number of seconds")]
    BadTime(String),
}

/// One mouse click delivered at simulated time `at`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClickEvent {
    pub at: Duration,
    pub pos: Vec2,
}

impl ClickEvent {
    pub fn new(at: Duration, x: f32, y: f32) -> Self {
        Self {
            at,
            pos: Vec2::new(x, y),
        }
    }
}

fn parse_number(entry: &str, value: &str) -> Result<f32, ScriptError> {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ScriptError::BadNumber {
            entry: entry.to_string(),
            value: value.trim().to_string(),
        })
}

impl FromStr for ClickEvent {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (point, time) = s
            .split_once('@')
            .ok_or_else(|| ScriptError::Malformed(s.to_string()))?;
        let (x, y) = point
            .split_once(',')
            .ok_or_else(|| ScriptError::Malformed(s.to_string()))?;

        let x = parse_number(s, x)?;
        let y = parse_number(s, y)?;
        let secs = parse_number(s, time)?;
        let at = Duration::try_from_secs_f32(secs)
            .map_err(|_| ScriptError::BadTime(s.to_string()))?;

        Ok(Self::new(at, x, y))
    }
}

/// Clicks ordered by delivery time
#[derive(Debug, Clone, Default)]
pub struct ClickScript {
    events: Vec<ClickEvent>,
    cursor: usize,
}

impl ClickScript {
    pub fn new(mut events: Vec<ClickEvent>) -> Self {
        // Stable: clicks at the same time keep their given order
        events.sort_by_key(|e| e.at);
        Self { events, cursor: 0 }
    }

    /// Parse every entry, failing on the first malformed one
    pub fn parse<S: AsRef<str>>(entries: &[S]) -> Result<Self, ScriptError> {
        let events = entries
            .iter()
            .map(|e| e.as_ref().parse())
            .collect::<Result<Vec<ClickEvent>, _>>()?;
        Ok(Self::new(events))
    }

    /// Take every click due at or before `now`, in order
    pub fn due(&mut self, now: Duration) -> &[ClickEvent] {
        let start = self.cursor;
        while self.cursor < self.events.len() && self.events[self.cursor].at <= now {
            self.cursor += 1;
        }
        &self.events[start..self.cursor]
    }

    /// Clicks not yet delivered
    pub fn remaining(&self) -> usize {
        self.events.len() - self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
