//! Isola rules: move generation, applying actions, terminal detection.
//!
//! Implemented as methods on [`State`](crate::core::State) so collaborators
//! query one value:
//! - Legal destinations and actions for the side to move
//! - How an action produces the next state
//! - Who has won once the side to move is trapped

pub mod movegen;

pub use movegen::{king_neighbors, DIRECTIONS};
