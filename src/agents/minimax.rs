//! Search-backed agent.

use tracing::debug;

use crate::core::{Action, IsolaResult, State};
use crate::heuristics::Heuristic;
use crate::search::{MinimaxSearch, SearchConfig};

use super::Agent;

/// Agent backed by a [`MinimaxSearch`].
pub struct MinimaxAgent<H: Heuristic> {
    search: MinimaxSearch<H>,
}

impl<H: Heuristic> MinimaxAgent<H> {
    pub fn new(heuristic: H, config: SearchConfig) -> Self {
        Self::from_search(MinimaxSearch::new(heuristic, config))
    }

    pub fn from_search(search: MinimaxSearch<H>) -> Self {
        Self { search }
    }

    /// The underlying search, for its configuration and statistics.
    pub fn search(&self) -> &MinimaxSearch<H> {
        &self.search
    }
}

impl<H: Heuristic> Agent for MinimaxAgent<H> {
    fn choose(&mut self, state: &State) -> IsolaResult<Action> {
        let outcome = self.search.search(state)?;
        debug!(
            agent = %self.name(),
            action = %outcome.action,
            score = outcome.score,
            "minimax agent chose"
        );
        Ok(outcome.action)
    }

    fn name(&self) -> String {
        format!(
            "Minimax(d={}, {})",
            self.search.config().effective_depth(),
            self.search.heuristic().name()
        )
    }
}
