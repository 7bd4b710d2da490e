//! Tic-tac-toe: board state, rules, exhaustive search and game sessions.

mod error;
mod game;
pub mod rules;
mod search;
mod types;

pub use error::{BoardParseError, GameError, InvalidMove, NoLegalMoves};
pub use game::Game;
pub use search::{ScoredMove, Value, best_move, best_move_for, evaluate, move_values};
pub use types::{Board, CELL_COUNT, Cell, Mark, Outcome, new_board};
