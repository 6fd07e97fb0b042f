//! Platform abstraction layer
//!
//! Stands in for the host game-loop framework:
//! - Time (monotonic clock, injectable for tests)
//! - Input events (mouse clicks)
//! - Fixed-rate tick driver for headless sessions

pub mod headless;
pub mod input;
pub mod time;

pub use headless::{RunReport, run};
pub use input::{ClickEvent, ClickScript, ScriptError};
pub use time::{Clock, ManualClock, MonotonicClock, SharedClock};
