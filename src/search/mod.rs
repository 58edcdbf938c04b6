//! Adversarial search for Isola.
//!
//! ## Overview
//!
//! Depth-limited minimax with alpha-beta pruning, parameterized by a
//! [`Heuristic`](crate::heuristics::Heuristic), a depth limit and a
//! move-order randomization flag. Single-threaded and synchronous: a call
//! blocks until the whole tree down to the depth limit has been searched.
//!
//! ## Usage
//!
//! ```rust
//! use isola::core::State;
//! use isola::heuristics::MobilityHeuristic;
//! use isola::search::{MinimaxSearch, SearchConfig};
//!
//! let state = State::initial(false);
//! let mut search = MinimaxSearch::new(MobilityHeuristic, SearchConfig::default().with_depth(1));
//!
//! let action = search.choose(&state)?;
//! assert!(state.is_legal(&action));
//! println!("{} after {} nodes", action, search.stats().nodes);
//! # Ok::<(), isola::IsolaError>(())
//! ```

pub mod config;
pub mod minimax;
pub mod stats;

pub use config::{SearchConfig, DEFAULT_DEPTH};
pub use minimax::{terminal_utility, MinimaxSearch, SearchOutcome, WIN_UTILITY};
pub use stats::SearchStats;
