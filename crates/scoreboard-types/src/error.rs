//! Error types for the live scoreboard.
//!
//! All errors use the `SB_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Team name errors
//! - 2xx: Score errors
//! - 3xx: Scoreboard registry errors
//!
//! Every variant is a caller-input problem. [`ScoreboardError::kind`] maps
//! them all to [`ErrorKind::InvalidArgument`].

use std::fmt;

use thiserror::Error;

use crate::Side;

/// Coarse classification of a [`ScoreboardError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied an argument that violates a match or scoreboard
    /// invariant. The operation had no effect.
    InvalidArgument,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "INVALID_ARGUMENT"),
        }
    }
}

/// Central error enum for all scoreboard operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreboardError {
    // =================================================================
    // Team Name Errors (1xx)
    // =================================================================
    /// A team name was empty or consisted only of whitespace.
    #[error("SB_ERR_100: Invalid {side} team name: must not be empty or blank")]
    InvalidTeamName { side: Side },

    /// Home and away team are the same team (case-insensitive).
    #[error("SB_ERR_101: Home and away team cannot be the same: {team}")]
    SameTeam { team: String },

    // =================================================================
    // Score Errors (2xx)
    // =================================================================
    /// At least one of the supplied scores was negative.
    #[error("SB_ERR_200: Scores cannot be negative: {home} - {away}")]
    NegativeScore { home: i32, away: i32 },

    // =================================================================
    // Registry Errors (3xx)
    // =================================================================
    /// A match between the same home and away team is already in progress.
    #[error("SB_ERR_300: A match between {home} and {away} is already in progress")]
    DuplicateMatch { home: String, away: String },

    /// No in-progress match exists for this home/away pair.
    #[error("SB_ERR_301: Match {home} vs {away} not found")]
    MatchNotFound { home: String, away: String },
}

impl ScoreboardError {
    /// The coarse kind of this error. Always [`ErrorKind::InvalidArgument`].
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidTeamName { .. }
            | Self::SameTeam { .. }
            | Self::NegativeScore { .. }
            | Self::DuplicateMatch { .. }
            | Self::MatchNotFound { .. } => ErrorKind::InvalidArgument,
        }
    }

    /// Not-found error for the given home/away pair, as passed by the caller.
    #[must_use]
    pub fn not_found(home: &str, away: &str) -> Self {
        Self::MatchNotFound {
            home: home.to_string(),
            away: away.to_string(),
        }
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, ScoreboardError>;
