//! # scoreboard-types
//!
//! Shared types, errors, and time sources for the **live scoreboard**.
//!
//! This crate is the leaf dependency of the workspace. It defines:
//!
//! - **Match model**: [`Match`], with score validation in [`check_scores`]
//! - **Team identity**: [`TeamName`], [`Side`], [`MatchKey`]
//! - **Identifiers**: [`MatchId`]
//! - **Time**: [`Clock`], [`SystemClock`], [`ManualClock`]
//! - **Errors**: [`ScoreboardError`] with `SB_ERR_` prefix codes, [`ErrorKind`]
//! - **Constants**: defaults for the demo binary

pub mod clock;
pub mod constants;
pub mod error;
#[cfg(feature = "test-helpers")]
pub mod fixtures;
pub mod game;
pub mod ids;
pub mod team;

pub use clock::*;
pub use error::*;
pub use game::*;
pub use ids::*;
pub use team::*;
