//! Action evaluators used at the search frontier.
//!
//! A [`Heuristic`] scores one candidate action from one state for one
//! player. Implementations are stateless; each call applies the action and
//! compares the resulting position with the current one.
//!
//! - [`MobilityHeuristic`]: sign of the mover's mobility change, plus a
//!   bonus for trapping or squeezing the opponent.
//! - [`TightCellHeuristic`]: mobility lost by the mover, plus a count of
//!   crowded cells left on the board.
//!
//! [`HeuristicKind`] is the tagged, serializable choice between them used
//! by [`AgentKind`](crate::agents::AgentKind) and the agent factory.

pub mod mobility;
pub mod tight_cells;

use serde::{Deserialize, Serialize};

use crate::core::{Action, Player, State};

pub use mobility::MobilityHeuristic;
pub use tight_cells::TightCellHeuristic;

/// Bonus awarded when the action leaves the opponent with no destinations.
pub const TRAP_BONUS: i32 = 100;

/// Scores a candidate action from `player`'s point of view.
pub trait Heuristic: Send + Sync {
    /// Score `action` played from `state`, as seen by `player`.
    fn evaluate(&self, state: &State, action: &Action, player: Player) -> i32;

    /// Short display name, used in agent names.
    fn name(&self) -> &'static str;
}

/// Selectable heuristic variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeuristicKind {
    #[default]
    Mobility,
    TightCells,
}

impl Heuristic for HeuristicKind {
    fn evaluate(&self, state: &State, action: &Action, player: Player) -> i32 {
        match self {
            HeuristicKind::Mobility => MobilityHeuristic.evaluate(state, action, player),
            HeuristicKind::TightCells => TightCellHeuristic.evaluate(state, action, player),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            HeuristicKind::Mobility => MobilityHeuristic.name(),
            HeuristicKind::TightCells => TightCellHeuristic.name(),
        }
    }
}

/// Mobility of `player` and of their opponent, before and after `action`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct MobilityDelta {
    pub own_before: usize,
    pub own_after: usize,
    pub opponent_before: usize,
    pub opponent_after: usize,
}

impl MobilityDelta {
    /// The opponent's "before" figure is taken from the opponent's square in
    /// `next`, looked up on the `state` board.
    pub(crate) fn measure(state: &State, next: &State, player: Player) -> Self {
        let opponent_square = next.position_of(player.opponent());
        Self {
            own_before: state.mobility(player),
            own_after: next.mobility(player),
            opponent_before: state.legal_destinations_from(opponent_square).len(),
            opponent_after: next.legal_destinations_from(opponent_square).len(),
        }
    }

    pub(crate) fn opponent_trapped(&self) -> bool {
        self.opponent_after == 0
    }
}
