//! Unbeatable tic-tac-toe.
//!
//! A human plays X against a computer playing O. The computer walks the
//! whole game tree with minimax on every turn, so it never loses.
//!
//! # Architecture
//!
//! - **Board**: the 9-cell grid with winner, full-board and legal-move queries
//! - **Search**: exhaustive minimax returning the optimal cell for either side
//! - **Game**: a session enforcing turn order and refusing moves after the end
//! - **Console**: players and the turn loop used by the CLI
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{Board, Mark, best_move};
//!
//! let mut board = Board::new();
//! board.apply(0, Mark::X).unwrap();
//! assert_eq!(best_move(&board), Ok(4));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console front end
pub use console::Orchestrator;
pub use console::players::{HumanPlayer, MinimaxPlayer, Player};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, CELL_COUNT, Cell, Game, GameError, InvalidMove, Mark, NoLegalMoves,
    Outcome, ScoredMove, Value, best_move, best_move_for, evaluate, move_values, new_board, rules,
};
