//! Match engine: the API a front end drives.
//!
//! The engine owns the catalog, the configuration, the current
//! [`MatchState`] and the randomness source used for CPU draws. Callers
//! pick a move, call [`MatchEngine::play_turn`], and render the returned
//! [`OutcomeResult`] alongside [`MatchEngine::state`].
//!
//! ```
//! use rpsls::core::{MatchConfig, ScriptedRng};
//! use rpsls::game::MatchEngine;
//!
//! // CPU draws catalog index 2 (Scissors).
//! let mut engine = MatchEngine::new(MatchConfig::default(), ScriptedRng::new([2])).unwrap();
//! let result = engine.play_turn("Rock").unwrap();
//!
//! assert_eq!(result.message, "You win! Rock crushes Scissors");
//! assert_eq!(engine.state().user_score, 1);
//! assert_eq!(engine.state().turns_remaining, 9);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::state::MatchState;
use crate::core::{EngineError, GameRng, GameRngState, MatchConfig, RandomSource};
use crate::moves::{Move, MoveCatalog};
use crate::rules::{MatchVerdict, OutcomeResult};

/// Drives a single match at a time.
///
/// Not thread-safe by intent: one caller, one turn at a time.
#[derive(Clone, Debug)]
pub struct MatchEngine<R = GameRng> {
    catalog: MoveCatalog,
    config: MatchConfig,
    state: MatchState,
    rng: R,
}

impl<R: RandomSource> MatchEngine<R> {
    /// Build the catalog and a fresh match.
    ///
    /// Fails with `InvalidConfig` if the configuration does not validate.
    pub fn new(config: MatchConfig, rng: R) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            catalog: MoveCatalog::standard(),
            state: MatchState::new(&config),
            config,
            rng,
        })
    }

    /// The move catalog.
    #[must_use]
    pub fn catalog(&self) -> &MoveCatalog {
        &self.catalog
    }

    /// The configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Current match state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// The randomness source.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Has the match ended?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over
    }

    /// Final result, once the match is over.
    #[must_use]
    pub fn verdict(&self) -> Option<MatchVerdict> {
        self.state.verdict()
    }

    /// Play a turn with the move named `user_move`.
    ///
    /// A finished match is reported before the name is checked, so a caller
    /// always learns that it needs to reset.
    pub fn play_turn(&mut self, user_move: &str) -> Result<OutcomeResult, EngineError> {
        self.ensure_in_progress()?;
        let user = self.catalog.lookup(user_move).ok_or_else(|| {
            warn!(user_move, "rejected unknown move");
            EngineError::InvalidMove(user_move.to_string())
        })?;
        self.play_move(user)
    }

    /// Play a turn with an already parsed move.
    pub fn play_move(&mut self, user: Move) -> Result<OutcomeResult, EngineError> {
        self.ensure_in_progress()?;

        let cpu = self.catalog.random_move(&mut self.rng);
        let result = self
            .state
            .apply_turn(&self.catalog, &self.config, user, cpu)?;

        debug!(
            turn = self.state.turns_played,
            user = %user,
            cpu = %cpu,
            outcome = ?result.outcome,
            user_score = self.state.user_score,
            cpu_score = self.state.cpu_score,
            turns_remaining = self.state.turns_remaining,
            "turn resolved"
        );

        if let Some(verdict) = self.state.verdict() {
            info!(
                ?verdict,
                user_score = self.state.user_score,
                cpu_score = self.state.cpu_score,
                turns_played = self.state.turns_played,
                "match over"
            );
        }

        Ok(result)
    }

    /// Start a new match with the same configuration.
    ///
    /// The randomness source carries on from where it was; it is not rewound.
    pub fn reset(&mut self) -> &MatchState {
        info!(
            user_score = self.state.user_score,
            cpu_score = self.state.cpu_score,
            turns_played = self.state.turns_played,
            "match reset"
        );
        self.state = MatchState::new(&self.config);
        &self.state
    }

    fn ensure_in_progress(&self) -> Result<(), EngineError> {
        if self.state.is_over || self.state.turns_remaining == 0 {
            warn!(
                user_score = self.state.user_score,
                cpu_score = self.state.cpu_score,
                "turn requested after match over"
            );
            return Err(EngineError::IllegalTurn {
                user_score: self.state.user_score,
                cpu_score: self.state.cpu_score,
            });
        }
        Ok(())
    }
}

impl MatchEngine<GameRng> {
    /// Engine with a seeded ChaCha stream.
    pub fn seeded(config: MatchConfig, seed: u64) -> Result<Self, EngineError> {
        Self::new(config, GameRng::new(seed))
    }

    /// Capture everything needed to continue this match later.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            config: self.config,
            state: self.state.clone(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild an engine from a snapshot.
    ///
    /// Continuing from the restored engine produces the same CPU draws the
    /// original would have. The configuration must validate and the state
    /// must be one that configuration could have produced.
    pub fn restore(snapshot: &MatchSnapshot) -> Result<Self, EngineError> {
        snapshot.config.validate()?;
        snapshot.state.check_consistent(&snapshot.config)?;
        Ok(Self {
            catalog: MoveCatalog::standard(),
            config: snapshot.config,
            state: snapshot.state.clone(),
            rng: GameRng::from_state(&snapshot.rng),
        })
    }
}

/// In-memory checkpoint of a seeded engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub config: MatchConfig,
    pub state: MatchState,
    pub rng: GameRngState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRng;
    use crate::rules::Outcome;

    fn scripted(config: MatchConfig, picks: &[Move]) -> MatchEngine<ScriptedRng> {
        MatchEngine::new(config, ScriptedRng::new(picks.iter().map(|m| m.index()))).unwrap()
    }

    #[test]
    fn test_paper_loses_to_scissors() {
        let mut engine = scripted(MatchConfig::default(), &[Move::Scissors]);
        let result = engine.play_turn("Paper").unwrap();

        assert_eq!(result.outcome, Outcome::CpuWin);
        assert_eq!(result.message, "You lose! Scissors cut Paper");
        assert_eq!(engine.state().cpu_score, 1);
        assert_eq!(engine.state().turns_remaining, 9);
    }

    #[test]
    fn test_invalid_move_draws_nothing() {
        let mut engine = scripted(MatchConfig::default(), &[Move::Rock]);
        let before = engine.state().clone();

        let err = engine.play_turn("Dynamite").unwrap_err();

        assert!(matches!(err, EngineError::InvalidMove(ref name) if name == "Dynamite"));
        assert_eq!(engine.state(), &before);
        assert_eq!(engine.rng().draws(), 0);
    }

    #[test]
    fn test_match_ends_after_limit() {
        // CPU always plays Lizard; Rock always wins.
        let mut engine = scripted(MatchConfig::new(3), &[Move::Lizard]);
        for _ in 0..3 {
            engine.play_turn("Rock").unwrap();
        }

        assert!(engine.is_over());
        assert_eq!(engine.verdict(), Some(MatchVerdict::UserWon));

        let err = engine.play_turn("Rock").unwrap_err();
        assert!(matches!(err, EngineError::IllegalTurn { user_score: 3, cpu_score: 0 }));
        assert_eq!(engine.state().user_score, 3);
        assert_eq!(engine.rng().draws(), 3);
    }

    #[test]
    fn test_over_reported_before_bad_name() {
        let mut engine = scripted(MatchConfig::new(1), &[Move::Rock]);
        engine.play_turn("Paper").unwrap();

        assert!(matches!(
            engine.play_turn("Banana"),
            Err(EngineError::IllegalTurn { .. })
        ));
    }

    #[test]
    fn test_reset_restores_initial() {
        let mut engine = scripted(MatchConfig::new(2), &[Move::Spock]);
        engine.play_turn("Scissors").unwrap();
        engine.play_turn("Lizard").unwrap();
        assert!(engine.is_over());

        let state = engine.reset().clone();
        assert_eq!(state, MatchState::new(&MatchConfig::new(2)));
        assert!(!engine.is_over());
        assert!(engine.play_turn("Paper").is_ok());
    }

    #[test]
    fn test_seeded_engines_agree() {
        let mut a = MatchEngine::seeded(MatchConfig::default(), 99).unwrap();
        let mut b = MatchEngine::seeded(MatchConfig::default(), 99).unwrap();

        while !a.is_over() {
            let ra = a.play_move(Move::Spock).unwrap();
            let rb = b.play_move(Move::Spock).unwrap();
            assert_eq!(ra, rb);
        }
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_snapshot_restore_continues_identically() {
        let mut engine = MatchEngine::seeded(MatchConfig::default(), 7).unwrap();
        engine.play_turn("Rock").unwrap();
        engine.play_turn("Paper").unwrap();

        let snapshot = engine.snapshot();
        let mut restored = MatchEngine::restore(&snapshot).unwrap();

        for name in ["Lizard", "Spock", "Scissors"] {
            if engine.is_over() {
                break;
            }
            assert_eq!(engine.play_turn(name).unwrap(), restored.play_turn(name).unwrap());
        }
        assert_eq!(engine.state(), restored.state());
    }

    #[test]
    fn test_new_rejects_zero_turn_limit() {
        let config = MatchConfig {
            turn_limit: 0,
            ..MatchConfig::default()
        };
        let err = MatchEngine::new(config, ScriptedRng::new([0])).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn test_restore_rejects_zero_turn_limit() {
        let mut snapshot = MatchEngine::seeded(MatchConfig::default(), 3).unwrap().snapshot();
        snapshot.config.turn_limit = 0;
        snapshot.state.turn_limit = 0;

        assert!(matches!(
            MatchEngine::restore(&snapshot),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_restore_rejects_exhausted_but_open_state() {
        let mut snapshot = MatchEngine::seeded(MatchConfig::default(), 3).unwrap().snapshot();
        snapshot.state.turns_remaining = 0;
        snapshot.state.is_over = false;

        assert!(matches!(
            MatchEngine::restore(&snapshot),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_restore_rejects_mismatched_limit() {
        let mut snapshot = MatchEngine::seeded(MatchConfig::new(5), 3).unwrap().snapshot();
        snapshot.state.turn_limit = 10;
        snapshot.state.turns_remaining = 8;

        assert!(matches!(
            MatchEngine::restore(&snapshot),
            Err(EngineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_restored_finished_match_refuses_turns() {
        let mut engine = scripted(MatchConfig::new(1), &[Move::Lizard]);
        engine.play_turn("Rock").unwrap();

        let snapshot = MatchSnapshot {
            config: *engine.config(),
            state: engine.state().clone(),
            rng: GameRng::new(0).state(),
        };
        let mut restored = MatchEngine::restore(&snapshot).unwrap();
        let before = restored.state().clone();

        assert!(matches!(
            restored.play_turn("Rock"),
            Err(EngineError::IllegalTurn { user_score: 1, cpu_score: 0 })
        ));
        assert_eq!(restored.state(), &before);
    }
}
