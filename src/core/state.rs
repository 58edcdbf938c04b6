//! Game state: availability grid, token positions, side to move.
//!
//! ## Availability vs occupancy
//!
//! A cell is *available* until it is removed; it is *occupied* while a token
//! sits on it. The two are independent: an occupied cell is always
//! available, but an available cell need not be occupied.
//!
//! ## Immutability
//!
//! `State` owns its grid by value. [`State::apply`](State::apply) (see
//! `rules::movegen`) copies the grid into a fresh state and never touches
//! the receiver, so search branches can hold ancestors freely.
//!
//! ## Text form
//!
//! `Display` and [`State::parse`] use one line per row:
//! `.` available, `#` removed, `1`/`2` the tokens.
//!
//! ```text
//! ..1.....
//! ........
//! ........
//! ........
//! ........
//! ..2.....
//! ```

use serde::{Deserialize, Serialize};

use super::coord::{Coord, COLS, ROWS};
use super::error::{IsolaError, IsolaResult};
use super::player::Player;
use super::rng::GameRng;

/// Per-cell availability, `true` while the cell is still in play.
pub type Grid = [[bool; COLS]; ROWS];

/// Player one's starting cell, (0,2).
pub const PLAYER_ONE_START: Coord = Coord::from_index(2);

/// Player two's starting cell, (5,2).
pub const PLAYER_TWO_START: Coord = Coord::from_index(5 * COLS + 2);

/// Complete Isola position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawState")]
pub struct State {
    pub(crate) grid: Grid,
    pub(crate) player_one: Coord,
    pub(crate) player_two: Coord,
    pub(crate) to_move: Player,
}

impl State {
    /// Opening position: every cell available, tokens on their start cells.
    ///
    /// With `randomize_first_player`, the side to move is a fair coin flip
    /// from a freshly seeded generator; otherwise player one starts.
    #[must_use]
    pub fn initial(randomize_first_player: bool) -> Self {
        let mut rng = GameRng::from_entropy();
        Self::initial_with_rng(randomize_first_player, &mut rng)
    }

    /// Like [`State::initial`], drawing the first player from `rng`.
    #[must_use]
    pub fn initial_with_rng(randomize_first_player: bool, rng: &mut GameRng) -> Self {
        let to_move = if randomize_first_player && !rng.coin_flip() {
            Player::Two
        } else {
            Player::One
        };

        Self {
            grid: [[true; COLS]; ROWS],
            player_one: PLAYER_ONE_START,
            player_two: PLAYER_TWO_START,
            to_move,
        }
    }

    /// Assemble a position, checking the token invariants.
    pub fn from_parts(grid: Grid, player_one: Coord, player_two: Coord, to_move: Player) -> IsolaResult<Self> {
        if player_one == player_two {
            return Err(IsolaError::InvalidPosition {
                reason: format!("both tokens on {}", player_one),
            });
        }
        for (player, pos) in [(Player::One, player_one), (Player::Two, player_two)] {
            if !grid[pos.row()][pos.col()] {
                return Err(IsolaError::InvalidPosition {
                    reason: format!("{} stands on removed cell {}", player, pos),
                });
            }
        }

        Ok(Self {
            grid,
            player_one,
            player_two,
            to_move,
        })
    }

    /// Read the text form described in the module docs.
    ///
    /// Blank lines and surrounding whitespace are ignored.
    pub fn parse(text: &str, to_move: Player) -> IsolaResult<Self> {
        let rows: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if rows.len() != ROWS {
            return Err(IsolaError::ParseBoard {
                reason: format!("expected {} rows, found {}", ROWS, rows.len()),
            });
        }

        let mut grid = [[true; COLS]; ROWS];
        let mut player_one = None;
        let mut player_two = None;

        for (r, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().collect();
            if cells.len() != COLS {
                return Err(IsolaError::ParseBoard {
                    reason: format!("row {} has {} cells, expected {}", r, cells.len(), COLS),
                });
            }
            for (c, ch) in cells.into_iter().enumerate() {
                let slot = match ch {
                    '.' => None,
                    '#' => {
                        grid[r][c] = false;
                        None
                    }
                    '1' => Some(&mut player_one),
                    '2' => Some(&mut player_two),
                    other => {
                        return Err(IsolaError::ParseBoard {
                            reason: format!("unexpected '{}' at ({},{})", other, r, c),
                        })
                    }
                };
                if let Some(slot) = slot {
                    if slot.is_some() {
                        return Err(IsolaError::ParseBoard {
                            reason: format!("token '{}' appears twice", ch),
                        });
                    }
                    *slot = Some(Coord::from_index(r * COLS + c));
                }
            }
        }

        match (player_one, player_two) {
            (Some(p1), Some(p2)) => Self::from_parts(grid, p1, p2, to_move),
            _ => Err(IsolaError::ParseBoard {
                reason: "both tokens must be placed".to_string(),
            }),
        }
    }

    // === Accessors ===

    /// Side to move.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    #[must_use]
    pub fn player_one_position(&self) -> Coord {
        self.player_one
    }

    #[must_use]
    pub fn player_two_position(&self) -> Coord {
        self.player_two
    }

    /// Where `player`'s token stands.
    #[must_use]
    pub fn position_of(&self, player: Player) -> Coord {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }

    /// Token of the side to move.
    #[must_use]
    pub fn active_position(&self) -> Coord {
        self.position_of(self.to_move)
    }

    /// Token of the side not to move.
    #[must_use]
    pub fn opponent_position(&self) -> Coord {
        self.position_of(self.to_move.opponent())
    }

    /// The availability grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn is_available(&self, cell: Coord) -> bool {
        self.grid[cell.row()][cell.col()]
    }

    #[must_use]
    pub fn is_occupied(&self, cell: Coord) -> bool {
        cell == self.player_one || cell == self.player_two
    }

    /// Bounds-checked availability lookup by raw indices.
    pub fn is_cell_available(&self, row: i32, col: i32) -> IsolaResult<bool> {
        Coord::new(row, col).map(|cell| self.is_available(cell))
    }

    /// Bounds-checked occupancy lookup by raw indices.
    pub fn is_cell_occupied(&self, row: i32, col: i32) -> IsolaResult<bool> {
        Coord::new(row, col).map(|cell| self.is_occupied(cell))
    }

    /// Number of cells still in play.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.grid.iter().flatten().filter(|&&a| a).count()
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for cell in Coord::all() {
            let ch = if cell == self.player_one {
                '1'
            } else if cell == self.player_two {
                '2'
            } else if self.is_available(cell) {
                '.'
            } else {
                '#'
            };
            write!(f, "{}", ch)?;
            if cell.col() == COLS - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Unchecked wire form; converted through [`State::from_parts`].
#[derive(Deserialize)]
struct RawState {
    grid: Grid,
    player_one: Coord,
    player_two: Coord,
    to_move: Player,
}

impl TryFrom<RawState> for State {
    type Error = IsolaError;

    fn try_from(raw: RawState) -> IsolaResult<Self> {
        Self::from_parts(raw.grid, raw.player_one, raw.player_two, raw.to_move)
    }
}
