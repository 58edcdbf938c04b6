//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Depth used when none is given.
pub const DEFAULT_DEPTH: u32 = 3;

/// Minimax search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies searched below the root before the heuristic is applied.
    /// Values below 1 are treated as 1.
    pub max_depth: u32,

    /// Shuffle legal actions at every node before expanding them.
    pub randomize_order: bool,

    /// On an exact tie at the root, replace the incumbent on a coin flip.
    /// When off, the first best candidate is kept.
    pub random_tie_break: bool,

    /// Alpha-beta pruning. Turning it off gives a full-width minimax over
    /// the same tree.
    pub alpha_beta: bool,

    /// Seed for the search's own RNG.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_DEPTH,
            randomize_order: true,
            random_tie_break: true,
            alpha_beta: true,
            seed: 42,
        }
    }
}

impl SearchConfig {
    /// Fully deterministic configuration: fixed order, first-best tie-break.
    #[must_use]
    pub fn deterministic(max_depth: u32) -> Self {
        Self {
            max_depth,
            randomize_order: false,
            random_tie_break: false,
            ..Self::default()
        }
    }

    /// Depth actually searched, never below 1.
    #[must_use]
    pub fn effective_depth(&self) -> u32 {
        self.max_depth.max(1)
    }

    pub fn with_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_randomized_order(mut self, randomize: bool) -> Self {
        self.randomize_order = randomize;
        self
    }

    pub fn with_random_tie_break(mut self, random: bool) -> Self {
        self.random_tie_break = random;
        self
    }

    pub fn with_alpha_beta(mut self, enabled: bool) -> Self {
        self.alpha_beta = enabled;
        self
    }
}
