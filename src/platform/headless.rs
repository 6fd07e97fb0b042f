//! Fixed-rate tick driver without a window
//!
//! Plays the host framework's role: advances a manual clock by one tick
//! period, delivers scripted clicks that have come due, then ticks the
//! controller. Stops on game over or after `max_ticks`.

use std::time::Duration;

use serde::Serialize;

use super::input::ClickScript;
use super::time::{Clock, ManualClock};
use crate::renderer::Surface;
use crate::sim::{GameController, GamePhase};

/// Summary of a headless session
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub ticks: u64,
    pub phase: GamePhase,
    /// "You Win" / "You Lose", or `None` if time ran out first
    pub outcome: Option<&'static str>,
    pub enemies: usize,
    pub elapsed_secs: f64,
}

/// Tick period for `tick_rate_hz` (clamped to at least 1 Hz)
pub fn tick_period(tick_rate_hz: u32) -> Duration {
    Duration::from_secs(1) / tick_rate_hz.max(1)
}

/// Drive `controller` until the game ends or `max_ticks` ticks have run
pub fn run(
    controller: &mut GameController,
    surface: &mut dyn Surface,
    clock: &ManualClock,
    script: &mut ClickScript,
    tick_rate_hz: u32,
    max_ticks: u64,
) -> RunReport {
    let period = tick_period(tick_rate_hz);
    let started = clock.now();
    let mut ticks = 0;

    log::info!(
        "headless run: up to {} ticks at {} Hz, {} scripted clicks",
        max_ticks,
        tick_rate_hz,
        script.remaining()
    );

    while ticks < max_ticks && !controller.is_over() {
        clock.advance(period);
        for click in script.due(clock.now()) {
            controller.on_click(click.pos.x, click.pos.y);
        }
        controller.tick(surface);
        ticks += 1;
    }

    let report = RunReport {
        ticks,
        phase: controller.phase(),
        outcome: controller.outcome().map(|o| o.banner()),
        enemies: controller.enemy_count(),
        elapsed_secs: (clock.now() - started).as_secs_f64(),
    };
    log::info!(
        "headless run finished after {} ticks ({:.2} s): {:?}",
        report.ticks,
        report.elapsed_secs,
        report.phase
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::input::ClickEvent;
    use crate::renderer::RecordingSurface;
    use crate::settings::Settings;
    use approx::assert_relative_eq;

    fn setup(settings: &Settings) -> (std::rc::Rc<ManualClock>, RecordingSurface, GameController) {
        let clock = ManualClock::shared();
        let mut surface = RecordingSurface::new(settings.width, settings.height);
        let controller = GameController::new(settings, clock.clone(), &mut surface);
        (clock, surface, controller)
    }

    #[test]
    fn test_tick_period() {
        assert_eq!(tick_period(50), Duration::from_millis(20));
        assert_eq!(tick_period(0), Duration::from_secs(1));
    }

    #[test]
    fn test_idle_session_runs_to_the_limit_or_loses() {
        let (clock, mut surface, mut controller) = setup(&Settings::default());
        let mut script = ClickScript::default();
        let report = run(&mut controller, &mut surface, &clock, &mut script, 50, 100);

        // 2 s: no spawns have come due yet
        assert_eq!(report.ticks, 100);
        assert_eq!(report.phase, GamePhase::Playing);
        assert_eq!(report.outcome, None);
        assert_eq!(report.enemies, 0);
        assert_relative_eq!(report.elapsed_secs, 2.0);
    }

    #[test]
    fn test_scripted_click_walks_player_home() {
        let (clock, mut surface, mut controller) = setup(&Settings::default());
        let mut script = ClickScript::new(vec![ClickEvent::new(Duration::ZERO, 780.0, 300.0)]);
        let report = run(&mut controller, &mut surface, &clock, &mut script, 50, 1000);

        // 650 units at 5 per tick; the first spawn comes due at 2.8 s (tick 140)
        assert_eq!(report.phase, GamePhase::Won);
        assert_eq!(report.outcome, Some("You Win"));
        assert!(report.ticks <= 130);
        assert_eq!(report.enemies, 0);
        assert_eq!(surface.texts().len(), 1);
        assert_eq!(script.remaining(), 0);
    }

    #[test]
    fn test_late_click_leaves_player_idle_until_delivered() {
        let (clock, mut surface, mut controller) = setup(&Settings::default());
        let mut script = ClickScript::new(vec![ClickEvent::new(Duration::from_secs(1), 50.0, 0.0)]);

        run(&mut controller, &mut surface, &clock, &mut script, 50, 49);
        assert_eq!(controller.player.pos.y, 300.0);
        assert_eq!(script.remaining(), 1);

        run(&mut controller, &mut surface, &clock, &mut script, 50, 1);
        assert_eq!(controller.player.pos.y, 295.0);
        assert_eq!(script.remaining(), 0);
    }

    #[test]
    fn test_stops_immediately_when_already_over() {
        let (clock, mut surface, mut controller) = setup(&Settings::default());
        controller.game_over_lose(&mut surface);
        let mut script = ClickScript::default();
        let report = run(&mut controller, &mut surface, &clock, &mut script, 50, 500);
        assert_eq!(report.ticks, 0);
        assert_eq!(report.outcome, Some("You Lose"));
        assert_relative_eq!(report.elapsed_secs, 0.0);
    }

    #[test]
    fn test_report_serializes() {
        let (clock, mut surface, mut controller) = setup(&Settings::default());
        let report = run(&mut controller, &mut surface, &clock, &mut ClickScript::default(), 50, 5);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["ticks"], 5);
        assert_eq!(json["phase"], "Playing");
        assert!(json["outcome"].is_null());
    }
}
