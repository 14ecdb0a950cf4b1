//! Ordered, detached snapshots of the in-progress matches.
//!
//! Order:
//! 1. **Total score**, highest first
//! 2. **Start time**, most recent first
//!
//! Matches equal on both keys keep the order they were started in, since
//! the sort is stable over the scoreboard's insertion order.

use std::cmp::Ordering;
use std::fmt;

use scoreboard_types::Match;
use serde::Serialize;

/// Comparator for summary order.
#[must_use]
pub fn summary_order(a: &Match, b: &Match) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        .then_with(|| b.start_time().cmp(&a.start_time()))
}

/// A sorted snapshot of the scoreboard.
///
/// Owns copies of the matches; later changes to the scoreboard are not
/// reflected here. Only shared access is exposed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Summary {
    matches: Vec<Match>,
}

impl Summary {
    /// Sort `matches` into summary order.
    #[must_use]
    pub fn from_matches(mut matches: Vec<Match>) -> Self {
        matches.sort_by(summary_order);
        Self { matches }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// The leading match, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Match> {
        self.matches.first()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Match> {
        self.matches.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.matches.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Match] {
        &self.matches
    }
}

impl<'a> IntoIterator for &'a Summary {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, m) in self.matches.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{m}")?;
        }
        Ok(())
    }
}
