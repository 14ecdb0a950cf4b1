//! Team names and the case-insensitive team-pair identity.
//!
//! A [`TeamName`] keeps the caller's spelling for display. Match identity
//! goes through [`MatchKey`], which stores both names lower-cased so that
//! `Eq` and `Hash` agree. Lookup by name uses [`TeamName::eq_ignore_case`],
//! a per-character comparison that also accepts characters whose
//! upper-case forms agree (`'ı'` and `'i'` both upper-case to `'I'`).

use std::fmt;

use serde::Serialize;

use crate::{Result, ScoreboardError};

/// Two characters are equal ignoring case if they are identical or their
/// upper-case or lower-case mappings agree.
fn char_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_uppercase().eq(b.to_uppercase()) || a.to_lowercase().eq(b.to_lowercase())
}

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

/// Which role a team plays in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Home,
    Away,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Away => write!(f, "away"),
        }
    }
}

// ---------------------------------------------------------------------------
// TeamName
// ---------------------------------------------------------------------------

/// A validated, non-blank team name, stored exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TeamName(String);

impl TeamName {
    /// Validate a raw team name playing on `side`.
    ///
    /// # Errors
    /// Returns [`ScoreboardError::InvalidTeamName`] if `raw` is empty or
    /// whitespace-only.
    pub fn parse(raw: impl Into<String>, side: Side) -> Result<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(ScoreboardError::InvalidTeamName { side });
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive, character-by-character comparison against a raw
    /// name. Names of different lengths never match.
    #[must_use]
    pub fn eq_ignore_case(&self, other: &str) -> bool {
        self.0.chars().count() == other.chars().count()
            && self
                .0
                .chars()
                .zip(other.chars())
                .all(|(a, b)| char_eq_ignore_case(a, b))
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// MatchKey
// ---------------------------------------------------------------------------

/// Case-insensitive, role-sensitive identity of a match.
///
/// `("Spain", "Brazil")` and `("SPAIN", "brazil")` share a key;
/// `("Brazil", "Spain")` does not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchKey {
    home: String,
    away: String,
}

impl MatchKey {
    #[must_use]
    pub fn new(home: &str, away: &str) -> Self {
        Self {
            home: home.to_lowercase(),
            away: away.to_lowercase(),
        }
    }
}
