//! Error type shared by the rules engine, search and agents.

use thiserror::Error;

use super::action::Action;

/// Errors that can occur in the Isola engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IsolaError {
    /// A raw (row, column) pair outside the 6x8 board.
    #[error("cell ({row},{col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    /// The side to move has no legal action; the state is terminal.
    #[error("no legal actions: the side to move is trapped")]
    NoLegalActions,

    /// An action that is not a member of `legal_actions()`.
    #[error("illegal action: {action}")]
    IllegalAction { action: Action },

    /// Token placement violates a board invariant.
    #[error("invalid position: {reason}")]
    InvalidPosition { reason: String },

    /// Text board could not be parsed.
    #[error("cannot parse board: {reason}")]
    ParseBoard { reason: String },
}

/// Result alias for engine operations.
pub type IsolaResult<T> = Result<T, IsolaError>;
