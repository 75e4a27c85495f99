//! Core engine types: RNG, configuration, errors.
//!
//! These are independent of the move set. The catalog, rules and match
//! engine build on top of them.

pub mod rng;
pub mod config;
pub mod error;

pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRng};
pub use config::{MatchConfig, DEFAULT_MAX_HISTORY, DEFAULT_TURN_LIMIT};
pub use error::EngineError;
