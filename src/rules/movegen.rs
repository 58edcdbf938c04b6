//! Move generation and state transitions.
//!
//! ## Implementation Notes
//!
//! - Directions are scanned N, NE, E, SE, S, SW, W, NW so every list this
//!   module returns has a fixed order.
//! - `legal_actions` checks the opponent's square against the *pre-move*
//!   board. The mover's own square is a legal removal.
//! - `apply` is deliberately unchecked; `try_apply` is the validating form.

use smallvec::SmallVec;

use crate::core::{Action, Coord, IsolaError, IsolaResult, Player, State};

/// King-step offsets in scan order: N, NE, E, SE, S, SW, W, NW.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// In-bounds king neighbors of `pos`, ignoring availability and occupancy.
pub fn king_neighbors(pos: Coord) -> SmallVec<[Coord; 8]> {
    DIRECTIONS
        .iter()
        .filter_map(|&(dr, dc)| pos.offset(dr, dc))
        .collect()
}

impl State {
    /// In-bounds king neighbors of `pos`, regardless of board contents.
    #[must_use]
    pub fn neighbors_of(&self, pos: Coord) -> SmallVec<[Coord; 8]> {
        king_neighbors(pos)
    }

    /// Cells a token on `pos` may step to: adjacent, available, unoccupied.
    #[must_use]
    pub fn legal_destinations_from(&self, pos: Coord) -> SmallVec<[Coord; 8]> {
        DIRECTIONS
            .iter()
            .filter_map(|&(dr, dc)| pos.offset(dr, dc))
            .filter(|&cell| self.is_available(cell) && !self.is_occupied(cell))
            .collect()
    }

    /// Number of legal destinations for `player`'s token.
    #[must_use]
    pub fn mobility(&self, player: Player) -> usize {
        self.legal_destinations_from(self.position_of(player)).len()
    }

    /// Cells that may be removed after the active token moves to `destination`.
    ///
    /// Row-major order. Does not check that `destination` is itself legal.
    #[must_use]
    pub fn removals_for(&self, destination: Coord) -> Vec<Coord> {
        let opponent = self.opponent_position();
        Coord::all()
            .filter(|&cell| self.is_available(cell) && cell != destination && cell != opponent)
            .collect()
    }

    /// Every legal action for the side to move.
    ///
    /// Destination-major (in direction order), then removal cells row-major.
    /// Empty exactly when the state is terminal.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        let destinations = self.legal_destinations_from(self.active_position());
        let mut actions = Vec::with_capacity(destinations.len() * self.available_count());

        for destination in destinations {
            actions.extend(
                self.removals_for(destination)
                    .into_iter()
                    .map(|remove| Action::new(destination, remove)),
            );
        }

        actions
    }

    /// Whether `action` is a member of [`State::legal_actions`].
    #[must_use]
    pub fn is_legal(&self, action: &Action) -> bool {
        self.legal_destinations_from(self.active_position())
            .contains(&action.destination)
            && self.is_available(action.remove)
            && action.remove != action.destination
            && action.remove != self.opponent_position()
    }

    /// Play `action`, returning the successor; `self` is left untouched.
    ///
    /// The action is not validated. Passing anything outside
    /// [`State::legal_actions`] is a caller error; the result is some
    /// well-formed but meaningless position.
    #[must_use]
    pub fn apply(&self, action: &Action) -> State {
        let mut next = self.clone();
        next.grid[action.remove.row()][action.remove.col()] = false;
        match self.to_move {
            Player::One => next.player_one = action.destination,
            Player::Two => next.player_two = action.destination,
        }
        next.to_move = self.to_move.opponent();
        next
    }

    /// Validating form of [`State::apply`].
    pub fn try_apply(&self, action: &Action) -> IsolaResult<State> {
        if self.is_legal(action) {
            Ok(self.apply(action))
        } else {
            Err(IsolaError::IllegalAction { action: *action })
        }
    }

    /// The winner once the side to move is trapped, else `None`.
    #[must_use]
    pub fn winner_if_terminal(&self) -> Option<Player> {
        if self.legal_destinations_from(self.active_position()).is_empty() {
            Some(self.to_move.opponent())
        } else {
            None
        }
    }

    /// [`State::winner_if_terminal`] as a numeric id: 0 while play continues.
    #[must_use]
    pub fn winner_id(&self) -> u8 {
        self.winner_if_terminal().map_or(0, Player::id)
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.winner_if_terminal().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CELL_COUNT, ROWS};

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_initial_destinations_in_direction_order() {
        let state = State::initial(false);
        let dests = state.legal_destinations_from(c(0, 2));

        assert_eq!(
            dests.as_slice(),
            &[c(0, 3), c(1, 3), c(1, 2), c(1, 1), c(0, 1)]
        );
    }

    #[test]
    fn test_neighbors_ignore_board_contents() {
        let state = State::parse(
            "1#......
             ##......
             ........
             ........
             ........
             .......2",
            Player::One,
        )
        .unwrap();

        assert_eq!(state.neighbors_of(c(0, 0)).as_slice(), &[c(0, 1), c(1, 1), c(1, 0)]);
        assert_eq!(state.neighbors_of(c(3, 3)).len(), 8);
        assert!(state.legal_destinations_from(c(0, 0)).is_empty());
    }

    #[test]
    fn test_occupied_cell_is_not_a_destination() {
        let state = State::parse(
            "........
             ........
             ...12...
             ........
             ........
             ........",
            Player::One,
        )
        .unwrap();

        let dests = state.legal_destinations_from(state.player_one_position());
        assert!(!dests.contains(&c(2, 4)));
        assert_eq!(dests.len(), 7);
    }

    #[test]
    fn test_initial_action_count() {
        let state = State::initial(false);
        // 5 destinations, each with 48 cells minus destination minus opponent.
        assert_eq!(state.legal_actions().len(), 5 * (CELL_COUNT - 2));
    }

    #[test]
    fn test_own_square_is_removable_but_opponent_square_is_not() {
        let state = State::initial(false);
        let actions = state.legal_actions();

        assert!(actions.contains(&Action::new(c(1, 2), c(0, 2))));
        assert!(!actions.iter().any(|a| a.remove == c(5, 2)));
        assert!(!actions.iter().any(|a| a.remove == a.destination));
    }

    #[test]
    fn test_removals_for_matches_legal_actions() {
        let state = State::initial(false);
        let removals = state.removals_for(c(1, 1));
        let from_actions: Vec<Coord> = state
            .legal_actions()
            .into_iter()
            .filter(|a| a.destination == c(1, 1))
            .map(|a| a.remove)
            .collect();

        assert_eq!(removals, from_actions);
    }

    #[test]
    fn test_apply_moves_removes_and_flips() {
        let state = State::initial(false);
        let next = state.apply(&Action::new(c(1, 2), c(0, 2)));

        assert_eq!(next.player_one_position(), c(1, 2));
        assert_eq!(next.player_two_position(), c(5, 2));
        assert_eq!(next.current_player(), Player::Two);
        assert!(!next.is_available(c(0, 2)));
        assert_eq!(next.available_count(), state.available_count() - 1);

        // Receiver untouched
        assert_eq!(state, State::initial(false));
    }

    #[test]
    fn test_try_apply_rejects_illegal() {
        let state = State::initial(false);

        let onto_opponent = Action::new(c(1, 2), c(5, 2));
        assert_eq!(
            state.try_apply(&onto_opponent),
            Err(IsolaError::IllegalAction { action: onto_opponent })
        );

        let too_far = Action::new(c(2, 2), c(3, 3));
        assert!(state.try_apply(&too_far).is_err());

        assert!(state.try_apply(&Action::new(c(0, 3), c(3, 3))).is_ok());
    }

    #[test]
    fn test_is_legal_agrees_with_legal_actions() {
        let state = State::parse(
            "..#.....
             .1#.....
             ..#.....
             ........
             ....2...
             ........",
            Player::One,
        )
        .unwrap();
        let legal = state.legal_actions();

        for dest in Coord::all() {
            for remove in Coord::all() {
                let action = Action::new(dest, remove);
                assert_eq!(state.is_legal(&action), legal.contains(&action), "{}", action);
            }
        }
    }

    #[test]
    fn test_winner_if_terminal() {
        let open = State::initial(false);
        assert_eq!(open.winner_if_terminal(), None);
        assert_eq!(open.winner_id(), 0);

        // Player two to move, boxed in the corner
        let trapped = State::parse(
            "1.......
             ........
             ........
             ........
             ......##
             ......#2",
            Player::Two,
        )
        .unwrap();

        assert_eq!(trapped.winner_if_terminal(), Some(Player::One));
        assert_eq!(trapped.winner_id(), 1);
        assert!(trapped.legal_actions().is_empty());
    }

    #[test]
    fn test_trapped_by_opponent_token() {
        let state = State::parse(
            "12#.....
             ###.....
             ........
             ........
             ........
             ........",
            Player::One,
        )
        .unwrap();

        assert!(state.is_terminal());
        assert_eq!(state.winner_if_terminal(), Some(Player::Two));
        assert_eq!(state.available_count(), ROWS * 8 - 4);
    }
}
