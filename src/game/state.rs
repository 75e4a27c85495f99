//! Match state: scores, turn countdown, last turn, history.
//!
//! ## Lifecycle
//!
//! - Created with `turns_remaining = turn_limit` and zero scores
//! - Mutated once per resolved turn
//! - Terminal (`is_over`) once `turns_remaining` reaches zero
//! - Replaced wholesale on reset
//!
//! History uses an `im` persistent vector so `after_turn` can hand back a
//! new state without copying every earlier turn. It keeps at most
//! `MatchConfig::max_history` records; free ties can otherwise make a match
//! arbitrarily long.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{EngineError, MatchConfig};
use crate::moves::{Move, MoveCatalog};
use crate::rules::{resolve, MatchVerdict, Outcome, OutcomeResult};

/// Message shown before the first turn.
pub const OPENING_MESSAGE: &str = "Make your move!";

/// Whether turns are still accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    InProgress,
    Over,
}

/// One resolved turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based count of resolved turns, ties included.
    pub turn: u32,
    pub user_move: Move,
    pub cpu_move: Move,
    pub outcome: Outcome,
    /// Turns left after this one.
    pub turns_remaining: u32,
}

/// Complete match state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub user_score: u32,
    pub cpu_score: u32,

    /// Turns left before the match is over.
    pub turns_remaining: u32,

    /// Limit the match started with.
    pub turn_limit: u32,

    /// Resolved turns so far, ties included.
    pub turns_played: u32,

    pub last_user_move: Option<Move>,
    pub last_cpu_move: Option<Move>,
    pub last_outcome_message: String,

    /// Set when `turns_remaining` reaches zero.
    pub is_over: bool,

    /// Most recent resolved turns, oldest first, capped at `max_history`.
    pub history: Vector<TurnRecord>,
}

impl MatchState {
    /// Fresh state for a new match.
    #[must_use]
    pub fn new(config: &MatchConfig) -> Self {
        Self {
            user_score: 0,
            cpu_score: 0,
            turns_remaining: config.turn_limit,
            turn_limit: config.turn_limit,
            turns_played: 0,
            last_user_move: None,
            last_cpu_move: None,
            last_outcome_message: OPENING_MESSAGE.to_string(),
            is_over: config.turn_limit == 0,
            history: Vector::new(),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        if self.is_over {
            MatchPhase::Over
        } else {
            MatchPhase::InProgress
        }
    }

    /// Final result, once the match is over.
    #[must_use]
    pub fn verdict(&self) -> Option<MatchVerdict> {
        self.is_over
            .then(|| MatchVerdict::from_scores(self.user_score, self.cpu_score))
    }

    /// Check this state could have come from a match under `config`.
    ///
    /// Used when a state arrives from outside the engine, e.g. a snapshot.
    pub fn check_consistent(&self, config: &MatchConfig) -> Result<(), EngineError> {
        let problem = if self.turn_limit != config.turn_limit {
            format!(
                "state turn_limit {} does not match configured {}",
                self.turn_limit, config.turn_limit
            )
        } else if self.turns_remaining > self.turn_limit {
            format!(
                "turns_remaining {} exceeds turn_limit {}",
                self.turns_remaining, self.turn_limit
            )
        } else if self.is_over != (self.turns_remaining == 0) {
            format!(
                "is_over is {} with {} turns remaining",
                self.is_over, self.turns_remaining
            )
        } else if self.history.len() > config.max_history {
            format!(
                "history holds {} turns, more than max_history {}",
                self.history.len(),
                config.max_history
            )
        } else {
            return Ok(());
        };
        Err(EngineError::InvalidConfig(problem))
    }

    /// Resolve a turn in place.
    ///
    /// Returns `IllegalTurn` without touching anything if the match is over
    /// or no turns remain.
    pub fn apply_turn(
        &mut self,
        catalog: &MoveCatalog,
        config: &MatchConfig,
        user: Move,
        cpu: Move,
    ) -> Result<OutcomeResult, EngineError> {
        if self.is_over || self.turns_remaining == 0 {
            return Err(EngineError::IllegalTurn {
                user_score: self.user_score,
                cpu_score: self.cpu_score,
            });
        }

        let result = resolve(catalog, user, cpu);

        match result.outcome {
            Outcome::UserWin => self.user_score += 1,
            Outcome::CpuWin => self.cpu_score += 1,
            Outcome::Tie => {}
        }

        if result.outcome.is_decisive() || config.ties_consume_turn {
            self.turns_remaining = self.turns_remaining.saturating_sub(1);
        }

        self.turns_played += 1;
        self.last_user_move = Some(user);
        self.last_cpu_move = Some(cpu);
        self.last_outcome_message.clone_from(&result.message);
        self.is_over = self.turns_remaining == 0;

        self.history.push_back(TurnRecord {
            turn: self.turns_played,
            user_move: user,
            cpu_move: cpu,
            outcome: result.outcome,
            turns_remaining: self.turns_remaining,
        });
        while self.history.len() > config.max_history {
            self.history.pop_front();
        }

        Ok(result)
    }

    /// Resolve a turn, returning the next state and leaving `self` untouched.
    pub fn after_turn(
        &self,
        catalog: &MoveCatalog,
        config: &MatchConfig,
        user: Move,
        cpu: Move,
    ) -> Result<(MatchState, OutcomeResult), EngineError> {
        let mut next = self.clone();
        let result = next.apply_turn(catalog, config, user, cpu)?;
        Ok((next, result))
    }
}
