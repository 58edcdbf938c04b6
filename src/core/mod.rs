//! Core engine types: coordinates, players, actions, state, RNG, errors.
//!
//! Move generation and terminal detection live in [`crate::rules`] as
//! further `impl State` blocks.

pub mod action;
pub mod coord;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::Action;
pub use coord::{Coord, CELL_COUNT, COLS, ROWS};
pub use error::{IsolaError, IsolaResult};
pub use player::Player;
pub use rng::{GameRng, GameRngState};
pub use state::{Grid, State, PLAYER_ONE_START, PLAYER_TWO_START};
