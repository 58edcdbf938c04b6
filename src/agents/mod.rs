//! Agents: things that pick an action for the side to move.
//!
//! ## Contract
//!
//! `choose` must only be called on a non-terminal state. On a terminal
//! state every agent returns [`IsolaError::NoLegalActions`](crate::IsolaError)
//! rather than inventing an action.
//!
//! Searching can take a while at higher depths and there is no cancellation;
//! interactive callers should run `choose` off their UI thread (agents are
//! `Send` for that reason).
//!
//! ## Example
//!
//! ```rust
//! use isola::agents::{Agent, AgentFactory, AgentKind};
//! use isola::core::State;
//! use isola::heuristics::HeuristicKind;
//!
//! let mut factory = AgentFactory::new(7);
//! let mut agents = [
//!     factory.build(&AgentKind::Random),
//!     factory.build(&AgentKind::minimax(HeuristicKind::TightCells, 1)),
//! ];
//!
//! let mut state = State::initial(false);
//! for turn in 0..4 {
//!     let action = agents[turn % 2].choose(&state)?;
//!     state = state.apply(&action);
//! }
//! assert_eq!(state.available_count(), 44);
//! # Ok::<(), isola::IsolaError>(())
//! ```

pub mod factory;
pub mod minimax;
pub mod random;

use serde::{Deserialize, Serialize};

use crate::core::{Action, IsolaResult, State};
use crate::heuristics::HeuristicKind;
use crate::search::DEFAULT_DEPTH;

pub use factory::AgentFactory;
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;

/// A player that picks actions.
pub trait Agent: Send {
    /// Pick an action for the side to move in `state`.
    fn choose(&mut self, state: &State) -> IsolaResult<Action>;

    /// Human-readable identity, e.g. `Minimax(d=3, MobilityHeuristic)`.
    fn name(&self) -> String;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn choose(&mut self, state: &State) -> IsolaResult<Action> {
        (**self).choose(state)
    }

    fn name(&self) -> String {
        (**self).name()
    }
}

/// Serializable description of an agent, built by [`AgentFactory::build`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgentKind {
    /// Uniform choice among legal actions.
    Random,
    /// Alpha-beta search.
    Minimax {
        heuristic: HeuristicKind,
        depth: u32,
        randomize_order: bool,
    },
}

impl AgentKind {
    /// Search agent with shuffled move order.
    #[must_use]
    pub fn minimax(heuristic: HeuristicKind, depth: u32) -> Self {
        AgentKind::Minimax {
            heuristic,
            depth,
            randomize_order: true,
        }
    }
}

impl Default for AgentKind {
    fn default() -> Self {
        Self::minimax(HeuristicKind::default(), DEFAULT_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_kind() {
        assert_eq!(
            AgentKind::default(),
            AgentKind::Minimax {
                heuristic: HeuristicKind::Mobility,
                depth: 3,
                randomize_order: true,
            }
        );
    }

    #[test]
    fn test_kind_serialization() {
        let kinds = vec![AgentKind::Random, AgentKind::minimax(HeuristicKind::TightCells, 2)];
        let json = serde_json::to_string(&kinds).unwrap();
        let back: Vec<AgentKind> = serde_json::from_str(&json).unwrap();
        assert_eq!(kinds, back);
    }

    #[test]
    fn test_boxed_agent_forwards() {
        let mut boxed: Box<dyn Agent> = Box::new(RandomAgent::new(1));
        let state = State::initial(false);

        assert_eq!(boxed.name(), "Random Agent");
        assert!(state.is_legal(&boxed.choose(&state).unwrap()));
    }
}
