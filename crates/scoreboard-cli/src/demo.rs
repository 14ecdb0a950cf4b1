//! The World Cup scenario: five matches started one after another.

use std::sync::Arc;

use chrono::Duration;
use scoreboard_core::{Scoreboard, Summary};
use scoreboard_types::{ManualClock, Result};

/// `(home, away, home_score, away_score)` in kickoff order.
pub const WORLD_CUP: &[(&str, &str, i32, i32)] = &[
    ("Mexico", "Canada", 0, 5),
    ("Spain", "Brazil", 10, 2),
    ("Germany", "France", 2, 2),
    ("Uruguay", "Italy", 6, 6),
    ("Argentina", "Australia", 3, 1),
];

/// How time passes between two kickoffs.
#[derive(Debug)]
pub enum Pacing {
    /// Advance a simulated clock shared with the scoreboard.
    Simulated {
        clock: Arc<ManualClock>,
        interval: Duration,
    },
    /// Sleep so that wall-clock start times differ.
    WallClock { pause: std::time::Duration },
}

impl Pacing {
    fn wait(&self) {
        match self {
            Self::Simulated { clock, interval } => clock.advance(*interval),
            Self::WallClock { pause } => std::thread::sleep(*pause),
        }
    }
}

/// Play every fixture on `board` and return the final summary.
pub fn run(board: &Scoreboard, pacing: &Pacing) -> Result<Summary> {
    for (i, &(home, away, home_score, away_score)) in WORLD_CUP.iter().enumerate() {
        if i > 0 {
            pacing.wait();
        }
        let started = board.start_match(home, away)?;
        board.update_score(home, away, home_score, away_score)?;
        tracing::info!(
            match_id = %started.id(),
            kickoff = %started.start_time(),
            "{home} {home_score} - {away} {away_score}"
        );
    }
    Ok(board.summary())
}
