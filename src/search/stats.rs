//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `choose` call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Root candidates whose subtree was searched.
    pub root_candidates: u32,

    /// Interior and leaf nodes visited below the root.
    pub nodes: u64,

    /// Nodes scored by the heuristic at the depth limit.
    pub leaf_evaluations: u64,

    /// Heuristic calls made across all leaves.
    pub heuristic_calls: u64,

    /// Nodes where the side to move was trapped.
    pub terminal_nodes: u64,

    /// Alpha-beta cutoffs taken.
    pub cutoffs: u64,

    /// Score of the chosen root action.
    pub best_score: f64,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Nodes visited per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
