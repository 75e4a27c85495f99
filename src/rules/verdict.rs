//! Final result of a finished match.

use serde::{Deserialize, Serialize};

/// Result of a completed match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchVerdict {
    /// User finished ahead.
    UserWon,
    /// CPU finished ahead.
    CpuWon,
    /// Scores are level.
    Draw,
}

impl MatchVerdict {
    /// Compare final scores.
    #[must_use]
    pub fn from_scores(user_score: u32, cpu_score: u32) -> Self {
        match user_score.cmp(&cpu_score) {
            std::cmp::Ordering::Greater => MatchVerdict::UserWon,
            std::cmp::Ordering::Less => MatchVerdict::CpuWon,
            std::cmp::Ordering::Equal => MatchVerdict::Draw,
        }
    }

    /// Game-over text for the player.
    #[must_use]
    pub fn summary(self) -> &'static str {
        match self {
            MatchVerdict::UserWon => "The game has ended. You won!",
            MatchVerdict::CpuWon => "The game has ended. CPU won!",
            MatchVerdict::Draw => "The game has ended. It's a draw!",
        }
    }
}
