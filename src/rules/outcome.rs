//! Turn resolution.
//!
//! `resolve` decides a single pairing of moves. It is pure: score keeping
//! and turn counting belong to the match state.

use serde::{Deserialize, Serialize};

use crate::moves::{Move, MoveCatalog};

/// Message for a tied turn.
pub const TIE_MESSAGE: &str = "It's a tie!";

/// Prefix for a turn the user won.
pub const WIN_PREFIX: &str = "You win! ";

/// Prefix for a turn the user lost.
pub const LOSE_PREFIX: &str = "You lose! ";

/// Who took the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Both sides picked the same move.
    Tie,
    /// The user's move defeats the CPU's.
    UserWin,
    /// The CPU's move defeats the user's.
    CpuWin,
}

impl Outcome {
    /// Does this outcome change a score?
    #[must_use]
    pub fn is_decisive(self) -> bool {
        !matches!(self, Outcome::Tie)
    }
}

/// Result of resolving one turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeResult {
    pub user_move: Move,
    pub cpu_move: Move,
    pub outcome: Outcome,
    /// Text for the player, e.g. "You lose! Scissors cut Paper".
    pub message: String,
}

/// Decide a turn between `user` and `cpu`.
///
/// ```
/// use rpsls::moves::{Move, MoveCatalog};
/// use rpsls::rules::{resolve, Outcome};
///
/// let catalog = MoveCatalog::standard();
/// let result = resolve(&catalog, Move::Rock, Move::Scissors);
///
/// assert_eq!(result.outcome, Outcome::UserWin);
/// assert_eq!(result.message, "You win! Rock crushes Scissors");
/// ```
#[must_use]
pub fn resolve(catalog: &MoveCatalog, user: Move, cpu: Move) -> OutcomeResult {
    let (outcome, message) = if user == cpu {
        (Outcome::Tie, TIE_MESSAGE.to_string())
    } else if let Some(defeat) = catalog.defeat(user, cpu) {
        (Outcome::UserWin, format!("{}{}", WIN_PREFIX, defeat.narration))
    } else {
        let defeat = catalog
            .defeat(cpu, user)
            .expect("every distinct pair of moves has exactly one winner");
        (Outcome::CpuWin, format!("{}{}", LOSE_PREFIX, defeat.narration))
    };

    OutcomeResult {
        user_move: user,
        cpu_move: cpu,
        outcome,
        message,
    }
}
