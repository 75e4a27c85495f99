//! Rules for deciding turns and matches.
//!
//! - `resolve`: who takes a single turn, and the message to show
//! - `MatchVerdict`: who took the match once it is over
//!
//! The match engine calls into these but never interprets the defeat
//! relation itself.

pub mod outcome;
pub mod verdict;

pub use outcome::{resolve, Outcome, OutcomeResult, LOSE_PREFIX, TIE_MESSAGE, WIN_PREFIX};
pub use verdict::MatchVerdict;
