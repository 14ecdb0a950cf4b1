//! # scoreboard-core
//!
//! **In-memory live scoreboard.**
//!
//! The [`Scoreboard`] owns the matches currently in progress and is the only
//! way to change them:
//!
//! - **start**: add a 0-0 match, rejecting duplicate home/away pairs
//! - **update**: overwrite the absolute score of an in-progress match
//! - **finish**: remove a match from the board
//! - **summary**: a detached [`Summary`], highest total score first, most
//!   recently started first on ties
//!
//! ```text
//! caller → Scoreboard (RwLock<Vec<Match>>) → Match::update_score
//! ```
//!
//! Team names are matched case-insensitively, but home and away roles are
//! never swapped.

pub mod scoreboard;
pub mod summary;

pub use scoreboard::Scoreboard;
pub use summary::{Summary, summary_order};
