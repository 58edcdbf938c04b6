//! Action representation: move the active token, then remove a cell.
//!
//! Every Isola turn is one compound action. The destination must be a
//! king-step from the mover's token; the removed cell is any other available
//! cell except the destination and the opponent's square. The square the
//! mover is leaving is a valid removal target.

use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// A complete turn.
///
/// ```
/// use isola::core::{Action, Coord};
///
/// let action = Action::new(Coord::new(1, 2)?, Coord::new(0, 2)?);
/// assert_eq!(action.to_string(), "move (1,2), remove (0,2)");
/// # Ok::<(), isola::IsolaError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// Where the active token moves.
    pub destination: Coord,

    /// Cell taken out of play after the move.
    pub remove: Coord,
}

impl Action {
    #[must_use]
    pub const fn new(destination: Coord, remove: Coord) -> Self {
        Self {
            destination,
            remove,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "move {}, remove {}", self.destination, self.remove)
    }
}
