//! The match entity.
//!
//! A [`Match`] is identified by its home/away team pair, compared
//! case-insensitively per role. Team names, id and start time are fixed at
//! construction; only the score changes afterwards, and only through
//! [`Match::update_score`].

use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{MatchId, MatchKey, Result, ScoreboardError, Side, TeamName};

/// Validate a pair of absolute scores.
///
/// # Errors
/// Returns [`ScoreboardError::NegativeScore`] if either score is negative.
pub fn check_scores(home: i32, away: i32) -> Result<(u32, u32)> {
    match (u32::try_from(home), u32::try_from(away)) {
        (Ok(h), Ok(a)) => Ok((h, a)),
        _ => Err(ScoreboardError::NegativeScore { home, away }),
    }
}

/// A single in-progress football match.
#[derive(Debug, Clone, Serialize)]
pub struct Match {
    id: MatchId,
    #[serde(skip)]
    key: MatchKey,
    home_team: TeamName,
    away_team: TeamName,
    home_score: u32,
    away_score: u32,
    start_time: DateTime<Utc>,
}

impl Match {
    /// Create a 0-0 match starting now (wall clock).
    pub fn new(home_team: impl Into<String>, away_team: impl Into<String>) -> Result<Self> {
        Self::with_start_time(home_team, away_team, Utc::now())
    }

    /// Create a 0-0 match with an explicit start time.
    ///
    /// # Errors
    /// - [`ScoreboardError::InvalidTeamName`] if either name is empty or blank
    /// - [`ScoreboardError::SameTeam`] if both names are equal ignoring case
    pub fn with_start_time(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        start_time: DateTime<Utc>,
    ) -> Result<Self> {
        let home_team = TeamName::parse(home_team, Side::Home)?;
        let away_team = TeamName::parse(away_team, Side::Away)?;
        if home_team.eq_ignore_case(away_team.as_str()) {
            return Err(ScoreboardError::SameTeam {
                team: home_team.to_string(),
            });
        }

        Ok(Self {
            id: MatchId::new(),
            key: MatchKey::new(home_team.as_str(), away_team.as_str()),
            home_team,
            away_team,
            home_score: 0,
            away_score: 0,
            start_time,
        })
    }

    /// Overwrite both scores with new absolute values.
    ///
    /// On error neither score is changed.
    pub fn update_score(&mut self, home_score: i32, away_score: i32) -> Result<()> {
        let (home, away) = check_scores(home_score, away_score)?;
        self.home_score = home;
        self.away_score = away;
        Ok(())
    }

    /// Whether this match is `home_team` vs `away_team`, comparing each role
    /// with [`TeamName::eq_ignore_case`].
    #[must_use]
    pub fn is_between(&self, home_team: &str, away_team: &str) -> bool {
        self.home_team.eq_ignore_case(home_team) && self.away_team.eq_ignore_case(away_team)
    }

    #[must_use]
    pub fn id(&self) -> MatchId {
        self.id
    }

    /// Case-insensitive identity of this match.
    #[must_use]
    pub fn key(&self) -> &MatchKey {
        &self.key
    }

    #[must_use]
    pub fn home_team(&self) -> &str {
        self.home_team.as_str()
    }

    #[must_use]
    pub fn away_team(&self) -> &str {
        self.away_team.as_str()
    }

    #[must_use]
    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    #[must_use]
    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    #[must_use]
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// Sum of both scores.
    #[must_use]
    pub fn total_score(&self) -> u64 {
        u64::from(self.home_score) + u64::from(self.away_score)
    }
}

impl PartialEq for Match {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Match {}

impl Hash for Match {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_team, self.away_score
        )
    }
}
