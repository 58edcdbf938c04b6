//! Board-density heuristic.

use crate::core::{Action, Coord, Player, State};

use super::{Heuristic, MobilityDelta, TRAP_BONUS};

/// A cell counts as tight once this many of its neighbors are removed.
pub const TIGHT_THRESHOLD: usize = 3;

/// Scores how cramped the board becomes.
///
/// Score = `own_before - own_after` (note the sign: moves that cost the
/// mover mobility score higher) + [`TRAP_BONUS`] if the opponent is trapped,
/// otherwise the number of tight cells after the action.
#[derive(Clone, Copy, Debug, Default)]
pub struct TightCellHeuristic;

impl Heuristic for TightCellHeuristic {
    fn evaluate(&self, state: &State, action: &Action, player: Player) -> i32 {
        let next = state.apply(action);
        let delta = MobilityDelta::measure(state, &next, player);

        let trend = delta.own_before as i32 - delta.own_after as i32;

        let pressure = if delta.opponent_trapped() {
            TRAP_BONUS
        } else {
            count_tight_cells(&next) as i32
        };

        trend + pressure
    }

    fn name(&self) -> &'static str {
        "TightCellHeuristic"
    }
}

/// Available cells with at least [`TIGHT_THRESHOLD`] removed neighbors.
pub fn count_tight_cells(state: &State) -> usize {
    Coord::all()
        .filter(|&cell| state.is_available(cell))
        .filter(|&cell| {
            state
                .neighbors_of(cell)
                .iter()
                .filter(|&&n| !state.is_available(n))
                .count()
                >= TIGHT_THRESHOLD
        })
        .count()
}
