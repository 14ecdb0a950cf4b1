//! The scoreboard: a registry of in-progress matches.
//!
//! Matches live in a `Vec` behind a [`RwLock`]. Readers copy out a
//! snapshot under the read lock; every mutation holds the write lock for
//! its whole check-then-act sequence, so two racing `start_match` calls for
//! the same pair cannot both pass the duplicate check.
//!
//! Duplicate detection uses match identity (`Match: Eq`, lower-cased
//! names). Lookup for update/finish/get compares home against home and away
//! against away with `TeamName::eq_ignore_case`, and takes the first match
//! in start order. Lookups are linear scans.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use scoreboard_types::{
    Clock, Match, Result, ScoreboardError, SystemClock, check_scores,
};

use crate::summary::Summary;

/// In-memory scoreboard of live matches.
///
/// Independent instances share nothing. Wrap in an `Arc` to share one
/// board between threads; every operation takes `&self`.
#[derive(Debug)]
pub struct Scoreboard {
    /// Matches in start order.
    matches: RwLock<Vec<Match>>,
    /// Source of start times.
    clock: Arc<dyn Clock>,
}

impl Scoreboard {
    /// Create an empty scoreboard using wall-clock start times.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty scoreboard drawing start times from `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            matches: RwLock::new(Vec::new()),
            clock,
        }
    }

    // The lock only guards plain data and no critical section can leave it
    // half-updated, so a poisoned lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Match>> {
        self.matches.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Match>> {
        self.matches.write().unwrap_or_else(|e| e.into_inner())
    }

    // =================================================================
    // Mutations
    // =================================================================

    /// Start a new 0-0 match and return a snapshot of it.
    ///
    /// # Errors
    /// - `InvalidTeamName` / `SameTeam` if the team names are invalid
    /// - `DuplicateMatch` if the same home/away pair is already in progress
    pub fn start_match(&self, home_team: &str, away_team: &str) -> Result<Match> {
        let candidate = Match::with_start_time(home_team, away_team, self.clock.now())?;

        let mut matches = self.write();
        if matches.iter().any(|m| m == &candidate) {
            tracing::warn!(
                home = home_team,
                away = away_team,
                "Duplicate start rejected: match already in progress"
            );
            return Err(ScoreboardError::DuplicateMatch {
                home: home_team.to_string(),
                away: away_team.to_string(),
            });
        }
        matches.push(candidate.clone());

        tracing::debug!(
            match_id = %candidate.id(),
            home = candidate.home_team(),
            away = candidate.away_team(),
            start_time = %candidate.start_time(),
            in_progress = matches.len(),
            "Match started"
        );
        Ok(candidate)
    }

    /// Set the absolute score of an in-progress match.
    ///
    /// Scores are validated before the lookup.
    ///
    /// # Errors
    /// - `NegativeScore` if either score is negative
    /// - `MatchNotFound` if no match for this home/away pair is in progress
    pub fn update_score(
        &self,
        home_team: &str,
        away_team: &str,
        home_score: i32,
        away_score: i32,
    ) -> Result<()> {
        check_scores(home_score, away_score)?;
        let mut matches = self.write();
        let game = matches
            .iter_mut()
            .find(|m| m.is_between(home_team, away_team))
            .ok_or_else(|| ScoreboardError::not_found(home_team, away_team))?;
        game.update_score(home_score, away_score)?;

        tracing::debug!(
            match_id = %game.id(),
            home = game.home_team(),
            away = game.away_team(),
            home_score = game.home_score(),
            away_score = game.away_score(),
            "Score updated"
        );
        Ok(())
    }

    /// Remove an in-progress match from the board.
    ///
    /// # Errors
    /// Returns `MatchNotFound` if no match for this home/away pair is in
    /// progress; the board is left unchanged.
    pub fn finish_match(&self, home_team: &str, away_team: &str) -> Result<()> {
        let mut matches = self.write();
        let pos = matches
            .iter()
            .position(|m| m.is_between(home_team, away_team))
            .ok_or_else(|| ScoreboardError::not_found(home_team, away_team))?;
        let finished = matches.remove(pos);

        tracing::debug!(
            match_id = %finished.id(),
            final_score = %finished,
            in_progress = matches.len(),
            "Match finished"
        );
        Ok(())
    }

    // =================================================================
    // Queries
    // =================================================================

    /// Snapshot of all in-progress matches in summary order.
    #[must_use]
    pub fn summary(&self) -> Summary {
        let snapshot = self.read().clone();
        Summary::from_matches(snapshot)
    }

    /// Number of in-progress matches.
    #[must_use]
    pub fn matches_count(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if no match is in progress.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Snapshot of the in-progress match for this home/away pair, if any.
    #[must_use]
    pub fn get(&self, home_team: &str, away_team: &str) -> Option<Match> {
        self.read()
            .iter()
            .find(|m| m.is_between(home_team, away_team))
            .cloned()
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Utc};
    use scoreboard_types::{ErrorKind, ManualClock, Side};

    use super::*;

    fn board_with_clock() -> (Scoreboard, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(DateTime::<Utc>::UNIX_EPOCH));
        (Scoreboard::with_clock(clock.clone()), clock)
    }

    #[test]
    fn start_match_at_nil_nil() {
        let board = Scoreboard::new();
        let m = board.start_match("Germany", "France").unwrap();
        assert_eq!(m.home_team(), "Germany");
        assert_eq!(m.away_team(), "France");
        assert_eq!((m.home_score(), m.away_score()), (0, 0));
        assert_eq!(board.matches_count(), 1);
    }

    #[test]
    fn start_uses_injected_clock() {
        let (board, clock) = board_with_clock();
        clock.advance(Duration::minutes(5));
        let m = board.start_match("Germany", "France").unwrap();
        assert_eq!(m.start_time(), DateTime::<Utc>::UNIX_EPOCH + Duration::minutes(5));
    }

    #[test]
    fn duplicate_start_rejected_in_any_case() {
        let board = Scoreboard::new();
        board.start_match("Germany", "France").unwrap();
        for (home, away) in [("Germany", "France"), ("GERMANY", "france"), ("gErMaNy", "FrAnCe")] {
            let err = board.start_match(home, away).unwrap_err();
            assert!(matches!(err, ScoreboardError::DuplicateMatch { .. }));
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
        assert_eq!(board.matches_count(), 1);
    }

    #[test]
    fn reversed_roles_are_a_different_match() {
        let board = Scoreboard::new();
        board.start_match("Germany", "France").unwrap();
        board.start_match("France", "Germany").unwrap();
        assert_eq!(board.matches_count(), 2);
    }

    #[test]
    fn invalid_names_propagate_unchanged() {
        let board = Scoreboard::new();
        assert_eq!(
            board.start_match("", "France").unwrap_err(),
            ScoreboardError::InvalidTeamName { side: Side::Home }
        );
        assert!(matches!(
            board.start_match("Spain", "spain"),
            Err(ScoreboardError::SameTeam { .. })
        ));
        assert!(board.is_empty());
    }

    #[test]
    fn update_score_mutates_stored_match() {
        let board = Scoreboard::new();
        board.start_match("Germany", "France").unwrap();
        board.update_score("germany", "FRANCE", 1, 0).unwrap();

        let summary = board.summary();
        assert_eq!(summary.len(), 1);
        let m = summary.first().unwrap();
        assert_eq!((m.home_score(), m.away_score()), (1, 0));
        assert_eq!(m.home_team(), "Germany");
    }

    #[test]
    fn update_unknown_match_fails() {
        let board = Scoreboard::new();
        let err = board.update_score("Germany", "France", 1, 0).unwrap_err();
        assert_eq!(err, ScoreboardError::not_found("Germany", "France"));
        assert_eq!(board.matches_count(), 0);
    }

    #[test]
    fn update_with_reversed_roles_not_found() {
        let board = Scoreboard::new();
        board.start_match("Germany", "France").unwrap();
        assert!(matches!(
            board.update_score("France", "Germany", 1, 0),
            Err(ScoreboardError::MatchNotFound { .. })
        ));
    }

    #[test]
    fn lookup_matches_on_upper_case_form() {
        let board = Scoreboard::new();
        board.start_match("Italy", "Spain").unwrap();

        board.update_score("ıtaly", "SPAIN", 2, 0).unwrap();
        assert_eq!(board.get("ıtaly", "spain").unwrap().to_string(), "Italy 2 - Spain 0");

        board.finish_match("ıtaly", "Spain").unwrap();
        assert!(board.is_empty());
    }

    #[test]
    fn negative_scores_checked_before_lookup() {
        let board = Scoreboard::new();
        // No such match: the score error still wins.
        assert!(matches!(
            board.update_score("Germany", "France", -1, 0),
            Err(ScoreboardError::NegativeScore { .. })
        ));

        board.start_match("Germany", "France").unwrap();
        board.update_score("Germany", "France", 2, 2).unwrap();
        assert!(board.update_score("Germany", "France", -1, 0).is_err());
        assert!(board.update_score("Germany", "France", 1, -5).is_err());
        let m = board.get("Germany", "France").unwrap();
        assert_eq!((m.home_score(), m.away_score()), (2, 2));
    }

    #[test]
    fn finish_removes_only_target() {
        let board = Scoreboard::new();
        board.start_match("Germany", "France").unwrap();
        board.start_match("Spain", "Brazil").unwrap();
        board.update_score("Spain", "Brazil", 3, 1).unwrap();

        board.finish_match("GERMANY", "france").unwrap();
        assert_eq!(board.matches_count(), 1);
        assert!(board.get("Germany", "France").is_none());
        let spain = board.get("Spain", "Brazil").unwrap();
        assert_eq!(spain.to_string(), "Spain 3 - Brazil 1");
    }

    #[test]
    fn finish_twice_fails() {
        let board = Scoreboard::new();
        board.start_match("Germany", "France").unwrap();
        board.finish_match("Germany", "France").unwrap();
        assert!(matches!(
            board.finish_match("Germany", "France"),
            Err(ScoreboardError::MatchNotFound { .. })
        ));
        assert!(board.is_empty());
    }

    #[test]
    fn finish_unknown_leaves_board_intact() {
        let board = Scoreboard::new();
        board.start_match("Germany", "France").unwrap();
        assert!(board.finish_match("France", "Germany").is_err());
        assert_eq!(board.matches_count(), 1);
    }

    #[test]
    fn restart_after_finish() {
        let board = Scoreboard::new();
        board.start_match("Germany", "France").unwrap();
        board.finish_match("Germany", "France").unwrap();
        let again = board.start_match("Germany", "France").unwrap();
        assert_eq!(again.total_score(), 0);
    }

    #[test]
    fn empty_summary() {
        let board = Scoreboard::new();
        assert!(board.summary().is_empty());
    }

    #[test]
    fn summary_orders_by_total_then_recency() {
        let (board, clock) = board_with_clock();
        board.start_match("A", "B").unwrap();
        board.update_score("A", "B", 1, 1).unwrap();
        clock.advance(Duration::seconds(1));
        board.start_match("C", "D").unwrap();
        board.update_score("C", "D", 0, 2).unwrap();
        clock.advance(Duration::seconds(1));
        board.start_match("E", "F").unwrap();
        board.update_score("E", "F", 5, 0).unwrap();

        let order: Vec<String> = board.summary().iter().map(ToString::to_string).collect();
        assert_eq!(order, vec!["E 5 - F 0", "C 0 - D 2", "A 1 - B 1"]);
    }

    #[test]
    fn summary_is_detached() {
        let board = Scoreboard::new();
        board.start_match("Germany", "France").unwrap();
        let before = board.summary();

        board.update_score("Germany", "France", 4, 0).unwrap();
        board.start_match("Spain", "Brazil").unwrap();

        assert_eq!(before.len(), 1);
        assert_eq!(before.first().unwrap().total_score(), 0);
        assert_eq!(board.summary().len(), 2);
    }

    #[test]
    fn independent_boards() {
        let a = Scoreboard::new();
        let b = Scoreboard::new();
        a.start_match("Germany", "France").unwrap();
        assert_eq!(a.matches_count(), 1);
        assert_eq!(b.matches_count(), 0);
        b.start_match("Germany", "France").unwrap();
    }
}
