//! Randomness sources for CPU move selection.
//!
//! ## Key Features
//!
//! - **Injected**: the engine never reaches for a global RNG; callers hand it
//!   a [`RandomSource`]
//! - **Deterministic**: same seed produces identical CPU draws
//! - **Serializable**: O(1) state capture and restore via [`GameRngState`]
//! - **Scripted**: [`ScriptedRng`] replays fixed picks for tests and replays
//!
//! ```
//! use rpsls::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! for _ in 0..10 {
//!     assert_eq!(a.next_index(5), b.next_index(5));
//! }
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniformly distributed indices.
///
/// The engine only ever asks for an index into the move catalog, so this is
/// the whole surface a test double has to implement.
pub trait RandomSource {
    /// Return an index in `0..bound`, uniformly distributed.
    ///
    /// `bound` is always greater than zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Deterministic RNG for CPU draws.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a freshly drawn seed.
    ///
    /// The seed is kept so the match can be replayed with [`GameRng::new`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RandomSource for GameRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range_usize(0..bound)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of how many
/// draws have been made.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed list of picks, cycling when exhausted.
///
/// Each pick is reduced modulo the requested bound, so any `usize` is a
/// valid script entry.
///
/// ```
/// use rpsls::core::{RandomSource, ScriptedRng};
///
/// let mut rng = ScriptedRng::new([2, 0]);
/// assert_eq!(rng.next_index(5), 2);
/// assert_eq!(rng.next_index(5), 0);
/// assert_eq!(rng.next_index(5), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedRng {
    picks: Vec<usize>,
    cursor: usize,
}

impl ScriptedRng {
    /// Create a scripted source.
    ///
    /// Panics if `picks` is empty.
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        let picks: Vec<usize> = picks.into_iter().collect();
        assert!(!picks.is_empty(), "ScriptedRng needs at least one pick");
        Self { picks, cursor: 0 }
    }

    /// Number of picks handed out so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn next_index(&mut self, bound: usize) -> usize {
        let pick = self.picks[self.cursor % self.picks.len()];
        self.cursor += 1;
        pick % bound
    }
}
