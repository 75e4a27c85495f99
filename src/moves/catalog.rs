//! Move catalog: the five moves and their defeat relation.
//!
//! The catalog is built once and never mutated. Lookups are by `Move`
//! (array index); names resolve through `Move`'s `FromStr`.

use super::definition::{Defeat, Move, MoveDefinition};
use crate::core::RandomSource;

/// Immutable catalog of move definitions.
///
/// ## Example
///
/// ```
/// use rpsls::moves::{Move, MoveCatalog};
///
/// let catalog = MoveCatalog::standard();
///
/// assert!(catalog.beats(Move::Spock, Move::Rock));
/// assert_eq!(
///     catalog.defeat(Move::Lizard, Move::Paper).unwrap().narration,
///     "Lizard eats Paper"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct MoveCatalog {
    moves: Vec<MoveDefinition>,
}

impl MoveCatalog {
    /// Build the Rock-Paper-Scissors-Lizard-Spock catalog.
    #[must_use]
    pub fn standard() -> Self {
        let moves = vec![
            MoveDefinition::new(Move::Rock, "bubbles.and.sparkles.fill")
                .defeats(Move::Scissors, "Rock crushes Scissors")
                .defeats(Move::Lizard, "Rock crushes Lizard"),
            MoveDefinition::new(Move::Paper, "doc.fill")
                .defeats(Move::Rock, "Paper covers Rock")
                .defeats(Move::Spock, "Paper disproves Spock"),
            MoveDefinition::new(Move::Scissors, "scissors")
                .defeats(Move::Paper, "Scissors cut Paper")
                .defeats(Move::Lizard, "Scissors decapitate Lizard"),
            MoveDefinition::new(Move::Lizard, "lizard.fill")
                .defeats(Move::Spock, "Lizard poisons Spock")
                .defeats(Move::Paper, "Lizard eats Paper"),
            MoveDefinition::new(Move::Spock, "hand.raised.fill")
                .defeats(Move::Scissors, "Spock smashes Scissors")
                .defeats(Move::Rock, "Spock vaporizes Rock"),
        ];

        let catalog = Self { moves };
        debug_assert!(catalog.is_regular_tournament());
        catalog
    }

    /// All move definitions in catalog order.
    #[must_use]
    pub fn all_moves(&self) -> &[MoveDefinition] {
        &self.moves
    }

    /// First presentation row: Rock, Paper, Scissors.
    #[must_use]
    pub fn primary_row(&self) -> &[MoveDefinition] {
        &self.moves[..3]
    }

    /// Second presentation row: Lizard, Spock.
    #[must_use]
    pub fn secondary_row(&self) -> &[MoveDefinition] {
        &self.moves[3..]
    }

    /// Definition for a move.
    #[must_use]
    pub fn get(&self, id: Move) -> &MoveDefinition {
        &self.moves[id.index()]
    }

    /// Resolve a name to a move, ignoring ASCII case and surrounding whitespace.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Move> {
        name.parse().ok()
    }

    /// The two moves `id` defeats, with narration, in catalog order.
    #[must_use]
    pub fn defeats_of(&self, id: Move) -> &[Defeat] {
        &self.get(id).defeats
    }

    /// The defeat edge `winner -> loser`, if it exists.
    #[must_use]
    pub fn defeat(&self, winner: Move, loser: Move) -> Option<&Defeat> {
        self.get(winner).defeat_of(loser)
    }

    /// Does `a` defeat `b`?
    #[must_use]
    pub fn beats(&self, a: Move, b: Move) -> bool {
        self.defeat(a, b).is_some()
    }

    /// Draw a move uniformly at random.
    pub fn random_move<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Move {
        self.moves[rng.next_index(self.moves.len())].id
    }

    /// Check the defeat relation is a regular tournament.
    ///
    /// Every move defeats exactly two others and loses to exactly two,
    /// nothing defeats itself, and no pair defeats each other.
    #[must_use]
    pub fn is_regular_tournament(&self) -> bool {
        let mut losses = [0usize; Move::COUNT];

        for def in &self.moves {
            if def.defeats.len() != 2 {
                return false;
            }
            for edge in &def.defeats {
                if edge.defeated == def.id || self.beats(edge.defeated, def.id) {
                    return false;
                }
                losses[edge.defeated.index()] += 1;
            }
        }

        losses.iter().all(|&n| n == 2)
    }
}

impl Default for MoveCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
