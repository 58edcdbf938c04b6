//! Mobility-trend heuristic.

use crate::core::{Action, Player, State};

use super::{Heuristic, MobilityDelta, TRAP_BONUS};

/// Bonus when the opponent's mobility shrinks without being trapped.
pub const SQUEEZE_BONUS: i32 = 2;

/// Rewards keeping or gaining mobility and cornering the opponent.
///
/// Score = `signum(own_after - own_before)`
/// + [`TRAP_BONUS`] if the opponent is trapped after the action,
/// otherwise [`SQUEEZE_BONUS`] if the opponent's mobility went down.
#[derive(Clone, Copy, Debug, Default)]
pub struct MobilityHeuristic;

impl Heuristic for MobilityHeuristic {
    fn evaluate(&self, state: &State, action: &Action, player: Player) -> i32 {
        let next = state.apply(action);
        let delta = MobilityDelta::measure(state, &next, player);

        let trend = (delta.own_after as i32 - delta.own_before as i32).signum();

        let pressure = if delta.opponent_trapped() {
            TRAP_BONUS
        } else if delta.opponent_after < delta.opponent_before {
            SQUEEZE_BONUS
        } else {
            0
        };

        trend + pressure
    }

    fn name(&self) -> &'static str {
        "MobilityHeuristic"
    }
}
