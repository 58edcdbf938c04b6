//! Composition of heuristics, depth and ordering into ready agents.

use crate::core::GameRng;
use crate::heuristics::{Heuristic, HeuristicKind};
use crate::search::{MinimaxSearch, SearchConfig, DEFAULT_DEPTH};

use super::{Agent, AgentKind, MinimaxAgent, RandomAgent};

/// Builds agents, handing each its own forked RNG.
///
/// Two factories created with the same seed build agents that behave
/// identically, call for call.
#[derive(Clone, Debug)]
pub struct AgentFactory {
    rng: GameRng,
}

impl AgentFactory {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }

    /// Uniform random player.
    pub fn random(&mut self) -> RandomAgent {
        RandomAgent::with_rng(self.rng.fork())
    }

    /// Search agent with an explicit heuristic, depth and ordering flag.
    pub fn minimax<H: Heuristic>(&mut self, heuristic: H, depth: u32, randomize_order: bool) -> MinimaxAgent<H> {
        let rng = self.rng.fork();
        let config = SearchConfig::default()
            .with_depth(depth)
            .with_randomized_order(randomize_order)
            .with_seed(rng.seed());
        MinimaxAgent::from_search(MinimaxSearch::new(heuristic, config).with_rng(rng))
    }

    /// Depth-3, shuffled search using the mobility heuristic.
    pub fn mobility(&mut self) -> MinimaxAgent<HeuristicKind> {
        self.minimax(HeuristicKind::Mobility, DEFAULT_DEPTH, true)
    }

    /// Depth-3, shuffled search using the tight-cell heuristic.
    pub fn tight_cells(&mut self) -> MinimaxAgent<HeuristicKind> {
        self.minimax(HeuristicKind::TightCells, DEFAULT_DEPTH, true)
    }

    /// Build the agent described by `kind`.
    pub fn build(&mut self, kind: &AgentKind) -> Box<dyn Agent> {
        match *kind {
            AgentKind::Random => Box::new(self.random()),
            AgentKind::Minimax {
                heuristic,
                depth,
                randomize_order,
            } => Box::new(self.minimax(heuristic, depth, randomize_order)),
        }
    }
}
