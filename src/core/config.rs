//! Match configuration.
//!
//! A match is configured once, at engine construction:
//! - `turn_limit`: how many scored turns a match lasts
//! - `ties_consume_turn`: whether a tie counts toward the limit
//! - `max_history`: how many past turns the state remembers
//!
//! Configuration can be built in code or loaded from TOML:
//!
//! ```
//! use rpsls::core::MatchConfig;
//!
//! let config = MatchConfig::from_toml("turn_limit = 5\nties_consume_turn = true").unwrap();
//! assert_eq!(config.turn_limit, 5);
//! assert!(config.ties_consume_turn);
//! ```

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Turns per match unless configured otherwise.
pub const DEFAULT_TURN_LIMIT: u32 = 10;

/// Turn records kept in match history unless configured otherwise.
pub const DEFAULT_MAX_HISTORY: usize = 256;

/// Complete match configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatchConfig {
    /// Number of turns before the match is over.
    pub turn_limit: u32,

    /// Does a tie use up one of the remaining turns?
    ///
    /// When false, ties are replayed for free and only decisive turns count.
    pub ties_consume_turn: bool,

    /// Cap on `MatchState::history`. Oldest records are dropped first.
    pub max_history: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            turn_limit: DEFAULT_TURN_LIMIT,
            ties_consume_turn: false,
            max_history: DEFAULT_MAX_HISTORY,
        }
    }
}

impl MatchConfig {
    /// Create a configuration with the given turn limit.
    ///
    /// Panics if `turn_limit` is zero.
    pub fn new(turn_limit: u32) -> Self {
        Self::default().with_turn_limit(turn_limit)
    }

    /// Set the turn limit.
    ///
    /// Panics if `turn_limit` is zero.
    #[must_use]
    pub fn with_turn_limit(mut self, turn_limit: u32) -> Self {
        assert!(turn_limit > 0, "Turn limit must be at least 1");
        self.turn_limit = turn_limit;
        self
    }

    /// Make ties count toward the turn limit.
    #[must_use]
    pub fn ties_consume_turn(mut self, consume: bool) -> Self {
        self.ties_consume_turn = consume;
        self
    }

    /// Keep at most `max_history` turn records.
    #[must_use]
    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self
    }

    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml(source: &str) -> Result<Self, EngineError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that the type system can't.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.turn_limit == 0 {
            return Err(EngineError::InvalidConfig(
                "turn_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
