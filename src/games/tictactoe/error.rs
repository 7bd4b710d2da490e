//! Error types for board, search and session operations.

use derive_more::{Display, Error, From};

/// A move that cannot be applied to the board.
///
/// Recoverable: the caller should pick another cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InvalidMove {
    /// Cell index outside 0-8.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),
    /// Cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] usize),
}

impl InvalidMove {
    /// The cell index the move referenced.
    pub fn cell(&self) -> usize {
        match self {
            InvalidMove::OutOfRange(cell) | InvalidMove::Occupied(cell) => *cell,
        }
    }
}

/// Search was asked for a move on a board that is already over.
///
/// This is a contract violation by the caller, not a user error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("No legal moves: the game is already over")]
pub struct NoLegalMoves;

/// Error from a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// The game has reached a terminal state.
    #[display("Game is already over")]
    GameOver,
    /// The move itself was rejected by the board.
    #[display("{}", _0)]
    #[from]
    Invalid(InvalidMove),
}

/// Malformed board notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// Wrong number of cell symbols.
    #[display("Expected 9 cells, found {}", _0)]
    Length(#[error(not(source))] usize),
    /// Unrecognized cell symbol.
    #[display("Unrecognized cell symbol {:?}", _0)]
    Symbol(#[error(not(source))] char),
}
