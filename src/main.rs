//! Homebound entry point
//!
//! Runs one headless session: loads settings, replays scripted clicks on a
//! simulated clock and prints how the game went.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use env_logger::{Builder, Env};
use log::LevelFilter;
use thiserror::Error;

use homebound::platform::{self, ClickScript, ManualClock, ScriptError};
use homebound::renderer::RecordingSurface;
use homebound::sim::GameController;
use homebound::{Settings, SettingsError};

/// Guide the player home while enemies close in
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Difficulty level (1 and up)
    #[arg(short, long)]
    level: Option<u32>,

    /// Spawn RNG seed (0 picks one from the system time)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Simulated duration in seconds
    #[arg(long, default_value_t = 60.0)]
    seconds: f64,

    /// Scripted click "x,y@seconds"; repeatable
    #[arg(long = "click", value_name = "X,Y@T")]
    clicks: Vec<String>,

    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error("--seconds must be a finite, non-negative number, got {0}")]
    Duration(f64),
    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let env = Env::default().default_filter_or(level.to_string());
    let _ = Builder::from_env(env).try_init();
}

fn seed_from_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
        .max(1)
}

fn run(args: Args) -> Result<(), CliError> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(level) = args.level {
        settings.level = level;
    }
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    if settings.seed == 0 {
        settings.seed = seed_from_time();
    }
    settings.validate()?;

    if !args.seconds.is_finite() || args.seconds < 0.0 {
        return Err(CliError::Duration(args.seconds));
    }
    let max_ticks = (args.seconds * settings.tick_rate_hz as f64).round() as u64;
    let mut script = ClickScript::parse(args.clicks.as_slice())?;

    let clock = ManualClock::shared();
    let mut surface = RecordingSurface::new(settings.width, settings.height);
    let mut controller = GameController::new(&settings, clock.clone(), &mut surface);

    let report = platform::run(
        &mut controller,
        &mut surface,
        &clock,
        &mut script,
        settings.tick_rate_hz,
        max_ticks,
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&controller.snapshot())?);
    } else {
        println!(
            "{} after {} ticks ({:.2} s), {} enemies on the field",
            report.outcome.unwrap_or("Time up"),
            report.ticks,
            report.elapsed_secs,
            report.enemies
        );
    }

    controller.shutdown(&mut surface);
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
