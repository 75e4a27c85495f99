//! Move definitions - static move data.
//!
//! `Move` is the identifier the engine passes around. `MoveDefinition`
//! carries everything attached to it: display name, icon, and the two moves
//! it defeats along with the narration for each.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use crate::core::EngineError;

/// One of the five canonical moves.
///
/// Discriminants follow catalog order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

impl Move {
    /// Every move, in catalog order.
    pub const ALL: [Move; 5] = [
        Move::Rock,
        Move::Paper,
        Move::Scissors,
        Move::Lizard,
        Move::Spock,
    ];

    /// Number of moves.
    pub const COUNT: usize = Self::ALL.len();

    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
            Move::Lizard => "Lizard",
            Move::Spock => "Spock",
        }
    }

    /// Position in catalog order.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = EngineError;

    /// Parse a canonical name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EngineError::InvalidMove(s.to_string()))
    }
}

/// A single edge of the defeat relation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defeat {
    /// The move that loses.
    pub defeated: Move,

    /// Sentence describing the win, e.g. "Rock crushes Scissors".
    pub narration: String,
}

impl Defeat {
    #[must_use]
    pub fn new(defeated: Move, narration: impl Into<String>) -> Self {
        Self {
            defeated,
            narration: narration.into(),
        }
    }
}

/// Static move definition.
///
/// ## Example
///
/// ```
/// use rpsls::moves::{Move, MoveDefinition};
///
/// let rock = MoveDefinition::new(Move::Rock, "bubbles.and.sparkles.fill")
///     .defeats(Move::Scissors, "Rock crushes Scissors")
///     .defeats(Move::Lizard, "Rock crushes Lizard");
///
/// assert_eq!(rock.name, "Rock");
/// assert_eq!(rock.defeat_of(Move::Lizard).unwrap().narration, "Rock crushes Lizard");
/// assert!(rock.defeat_of(Move::Paper).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDefinition {
    /// Identifier.
    pub id: Move,

    /// Display name.
    pub name: String,

    /// Opaque icon reference for renderers. The engine never reads it.
    pub icon: String,

    /// Moves this one defeats, in narration order.
    pub defeats: SmallVec<[Defeat; 2]>,
}

impl MoveDefinition {
    /// Create a definition with no defeats yet.
    #[must_use]
    pub fn new(id: Move, icon: impl Into<String>) -> Self {
        Self {
            id,
            name: id.name().to_string(),
            icon: icon.into(),
            defeats: SmallVec::new(),
        }
    }

    /// Add a defeat edge (builder pattern).
    #[must_use]
    pub fn defeats(mut self, defeated: Move, narration: impl Into<String>) -> Self {
        self.defeats.push(Defeat::new(defeated, narration));
        self
    }

    /// The defeat edge against `other`, if this move beats it.
    #[must_use]
    pub fn defeat_of(&self, other: Move) -> Option<&Defeat> {
        self.defeats.iter().find(|d| d.defeated == other)
    }
}
