//! Match lifecycle: state and the engine that drives it.

pub mod state;
pub mod engine;

pub use state::{MatchPhase, MatchState, TurnRecord, OPENING_MESSAGE};
pub use engine::{MatchEngine, MatchSnapshot};
