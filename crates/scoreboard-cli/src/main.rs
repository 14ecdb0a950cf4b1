use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use scoreboard_core::Scoreboard;
use scoreboard_types::{ManualClock, constants};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod demo;

use config::{Config, OutputFormat};
use demo::Pacing;

/// Pause between wall-clock kickoffs, enough for distinct start times.
const WALL_CLOCK_PAUSE: std::time::Duration = std::time::Duration::from_millis(10);

fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .with_context(|| format!("invalid log filter: {}", config.log_level))?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
    Ok(())
}

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;
    init_tracing(&config)?;

    info!(
        version = constants::VERSION,
        wall_clock = config.wall_clock,
        "{} demo starting",
        constants::SCOREBOARD_NAME
    );

    let (board, pacing) = if config.wall_clock {
        (
            Scoreboard::new(),
            Pacing::WallClock {
                pause: WALL_CLOCK_PAUSE,
            },
        )
    } else {
        let clock = Arc::new(ManualClock::new(chrono::Utc::now()));
        let secs = i64::try_from(config.kickoff_interval_secs)?;
        let interval = chrono::Duration::try_seconds(secs)
            .with_context(|| format!("kickoff interval out of range: {secs}s"))?;
        (
            Scoreboard::with_clock(clock.clone()),
            Pacing::Simulated { clock, interval },
        )
    };

    let summary = demo::run(&board, &pacing)?;
    info!(in_progress = summary.len(), "Scenario complete");

    match config.format {
        OutputFormat::Text => println!("{summary}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}
