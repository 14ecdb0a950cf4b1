use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};
use scoreboard_types::constants;

/// How the final summary is printed.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One `Home 1 - Away 0` line per match
    Text,
    /// Pretty-printed JSON array
    Json,
}

/// Live scoreboard demo: plays the World Cup scenario and prints the summary
#[derive(Parser, Debug, Clone)]
#[command(name = "scoreboard", version, about)]
pub struct Config {
    /// Summary output format
    #[arg(long, env = "SCOREBOARD_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log filter directive (overridden by RUST_LOG)
    #[arg(long, env = "SCOREBOARD_LOG", default_value_t = constants::DEFAULT_LOG_FILTER.to_string())]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, env = "SCOREBOARD_LOG_JSON", default_value = "false")]
    pub log_json: bool,

    /// Use real time for kickoffs instead of a simulated clock
    #[arg(long)]
    pub wall_clock: bool,

    /// Simulated gap between kickoffs (seconds)
    #[arg(
        long,
        env = "SCOREBOARD_KICKOFF_INTERVAL_SECS",
        default_value_t = constants::DEFAULT_KICKOFF_INTERVAL_SECS
    )]
    pub kickoff_interval_secs: u64,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !self.wall_clock && self.kickoff_interval_secs == 0 {
            bail!("--kickoff-interval-secs must be > 0 with the simulated clock");
        }
        if self.kickoff_interval_secs > constants::MAX_KICKOFF_INTERVAL_SECS {
            bail!(
                "--kickoff-interval-secs must be <= {}",
                constants::MAX_KICKOFF_INTERVAL_SECS
            );
        }
        Ok(())
    }
}
