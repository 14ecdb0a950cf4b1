//! System-wide constants for the live scoreboard.

/// Default spacing between simulated kickoffs in the demo, in seconds.
pub const DEFAULT_KICKOFF_INTERVAL_SECS: u64 = 60;

/// Longest accepted gap between simulated kickoffs (one week), in seconds.
pub const MAX_KICKOFF_INTERVAL_SECS: u64 = 7 * 24 * 60 * 60;

/// Default `tracing` filter directive for the demo binary.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Product name.
pub const SCOREBOARD_NAME: &str = "Live Scoreboard";
