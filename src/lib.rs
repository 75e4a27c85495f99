//! # rpsls
//!
//! Rule engine for Rock-Paper-Scissors-Lizard-Spock played against a
//! uniformly random CPU opponent.
//!
//! ## Design Principles
//!
//! 1. **Relation, not strings**: who beats whom is a lookup in the move
//!    catalog. Narration text is data attached to each edge and is never
//!    inspected to decide a winner.
//!
//! 2. **Injected randomness**: the CPU draws through a `RandomSource`, so a
//!    seed or a scripted sequence makes every match reproducible.
//!
//! 3. **Presentation stays outside**: the engine returns results and state;
//!    buttons, icons and alerts are someone else's job.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `moves`: Move identifiers, definitions, catalog
//! - `rules`: Turn resolution and match verdicts
//! - `game`: Match state and the engine that drives it

pub mod core;
pub mod moves;
pub mod rules;
pub mod game;

#[cfg(feature = "cli")]
pub mod logging;

// Re-export commonly used types
pub use crate::core::{
    EngineError, GameRng, GameRngState, MatchConfig, RandomSource, ScriptedRng,
    DEFAULT_MAX_HISTORY, DEFAULT_TURN_LIMIT,
};

pub use crate::moves::{Defeat, Move, MoveCatalog, MoveDefinition};

pub use crate::rules::{resolve, MatchVerdict, Outcome, OutcomeResult};

pub use crate::game::{MatchEngine, MatchPhase, MatchSnapshot, MatchState, TurnRecord};
