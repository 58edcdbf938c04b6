//! Board geometry: the fixed 6x8 board and cell coordinates.
//!
//! A [`Coord`] can only be built in bounds, so every grid access through a
//! `Coord` is safe. Raw `(row, col)` pairs go through [`Coord::new`], which
//! performs the bounds check before anything touches the grid.

use serde::{Deserialize, Serialize};

use super::error::{IsolaError, IsolaResult};

/// Number of board rows.
pub const ROWS: usize = 6;

/// Number of board columns.
pub const COLS: usize = 8;

/// Total number of cells.
pub const CELL_COUNT: usize = ROWS * COLS;

/// A cell on the board, compared and hashed by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(i32, i32)", into = "(i32, i32)")]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Build a coordinate, rejecting anything outside the board.
    pub fn new(row: i32, col: i32) -> IsolaResult<Self> {
        if Self::in_bounds(row, col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(IsolaError::OutOfBounds { row, col })
        }
    }

    /// Whether `(row, col)` lies on the board.
    #[must_use]
    pub const fn in_bounds(row: i32, col: i32) -> bool {
        0 <= row && row < ROWS as i32 && 0 <= col && col < COLS as i32
    }

    /// Build from a flat row-major index. Caller guarantees `index < CELL_COUNT`.
    pub(crate) const fn from_index(index: usize) -> Self {
        Self {
            row: (index / COLS) as u8,
            col: (index % COLS) as u8,
        }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Flat row-major index into the grid.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row() * COLS + self.col()
    }

    /// Step by `(dr, dc)`, or `None` if that leaves the board.
    #[must_use]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Self> {
        Self::new(self.row as i32 + dr, self.col as i32 + dc).ok()
    }

    /// All cells in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..CELL_COUNT).map(Self::from_index)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl TryFrom<(i32, i32)> for Coord {
    type Error = IsolaError;

    fn try_from((row, col): (i32, i32)) -> IsolaResult<Self> {
        Self::new(row, col)
    }
}

impl From<Coord> for (i32, i32) {
    fn from(c: Coord) -> Self {
        (c.row as i32, c.col as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_checked() {
        assert!(Coord::new(0, 0).is_ok());
        assert!(Coord::new(5, 7).is_ok());
        assert_eq!(
            Coord::new(-1, 2),
            Err(IsolaError::OutOfBounds { row: -1, col: 2 })
        );
        assert!(Coord::new(6, 0).is_err());
        assert!(Coord::new(0, 8).is_err());
    }

    #[test]
    fn test_offset_stops_at_edge() {
        let corner = Coord::new(0, 0).unwrap();
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(1, 1), Some(Coord::new(1, 1).unwrap()));
    }

    #[test]
    fn test_index_roundtrip() {
        for (i, c) in Coord::all().enumerate() {
            assert_eq!(c.index(), i);
        }
        assert_eq!(Coord::all().count(), CELL_COUNT);
    }

    #[test]
    fn test_value_equality_and_hash() {
        use std::collections::HashSet;

        let a = Coord::new(2, 3).unwrap();
        let b = Coord::new(2, 3).unwrap();
        let mut set = HashSet::new();
        set.insert(a);

        assert_eq!(a, b);
        assert!(set.contains(&b));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::new(4, 1).unwrap().to_string(), "(4,1)");
    }

    #[test]
    fn test_serde_rejects_out_of_bounds() {
        let c = Coord::new(3, 7).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "[3,7]");
        assert_eq!(serde_json::from_str::<Coord>(&json).unwrap(), c);
        assert!(serde_json::from_str::<Coord>("[6,0]").is_err());
    }
}
