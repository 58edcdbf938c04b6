//! # isola
//!
//! Rules engine and search agents for Isola, a two-player strategy game on a
//! 6x8 board. Each turn the side to move steps its token one king-move to an
//! available, unoccupied cell, then removes one other available cell. The
//! side that cannot move loses.
//!
//! ## Design Principles
//!
//! 1. **Immutable states**: `State::apply` returns a new state and never
//!    mutates its receiver, so search branches share ancestors safely.
//!
//! 2. **Per-agent randomness**: every agent owns a seedable [`GameRng`];
//!    there is no global generator in the hot path.
//!
//! 3. **Explicit preconditions**: asking for a move on a finished game is an
//!    [`IsolaError::NoLegalActions`], never an arbitrary action.
//!
//! ## Modules
//!
//! - `core`: Coordinates, players, actions, state, RNG, errors
//! - `rules`: Move generation, applying actions, terminal detection
//! - `heuristics`: Action evaluators for the search frontier
//! - `search`: Depth-limited minimax with alpha-beta pruning
//! - `agents`: Random and search agents, and the factory composing them
//!
//! ## Example
//!
//! ```rust
//! use isola::{Agent, AgentFactory, State};
//!
//! let mut factory = AgentFactory::new(42);
//! let mut agent = factory.random();
//!
//! let mut state = State::initial(false);
//! while state.winner_if_terminal().is_none() {
//!     let action = agent.choose(&state)?;
//!     state = state.apply(&action);
//! }
//! println!("winner: {}", state.winner_id());
//! # Ok::<(), isola::IsolaError>(())
//! ```

pub mod core;
pub mod rules;
pub mod heuristics;
pub mod search;
pub mod agents;

// Re-export commonly used types
pub use crate::core::{
    Action, Coord, GameRng, GameRngState, Grid, IsolaError, IsolaResult, Player, State,
    COLS, PLAYER_ONE_START, PLAYER_TWO_START, ROWS,
};

pub use crate::heuristics::{Heuristic, HeuristicKind, MobilityHeuristic, TightCellHeuristic};

pub use crate::search::{MinimaxSearch, SearchConfig, SearchOutcome, SearchStats};

pub use crate::agents::{Agent, AgentFactory, AgentKind, MinimaxAgent, RandomAgent};
