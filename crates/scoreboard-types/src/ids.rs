//! Identifiers used for log correlation.
//!
//! A [`MatchId`] is assigned when a match is constructed. It is **not** part
//! of match identity: two matches with the same teams are the same match
//! regardless of their ids.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique match identifier. Uses UUIDv7 for time-ordered sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct MatchId(pub Uuid);

impl MatchId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "match:{}", self.0)
    }
}
