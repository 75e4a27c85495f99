//! Move system: identifiers, definitions, and the catalog.
//!
//! ## Key Types
//!
//! - `Move`: The five canonical moves
//! - `Defeat`: One edge of the defeat relation, with narration
//! - `MoveDefinition`: Static move data (name, icon, defeats)
//! - `MoveCatalog`: Immutable lookup over all definitions

pub mod definition;
pub mod catalog;

pub use definition::{Defeat, Move, MoveDefinition};
pub use catalog::MoveCatalog;
