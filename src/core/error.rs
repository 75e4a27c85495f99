//! Engine error type.

use thiserror::Error;

/// Errors surfaced by the engine.
///
/// None of these leave the match in a modified state: a rejected turn is
/// rejected before anything is drawn or scored.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The move name is not one of the five canonical moves.
    #[error("invalid move {0:?}: expected one of Rock, Paper, Scissors, Lizard, Spock")]
    InvalidMove(String),

    /// A turn was requested after the match ended.
    #[error("match is over ({user_score}-{cpu_score}); reset to start a new one")]
    IllegalTurn {
        /// Final user score.
        user_score: u32,
        /// Final CPU score.
        cpu_score: u32,
    },

    /// Configuration values are out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed.
    #[error("configuration parse error: {0}")]
    Config(#[from] toml::de::Error),
}
