//! Game session: the single live board plus turn and history bookkeeping.

use super::error::GameError;
use super::types::{Board, Mark, Outcome};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One game of tic-tac-toe, X to move first.
///
/// Unlike a bare [`Board`], a `Game` enforces alternating turns and refuses
/// any move once the outcome is decided.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Game {
    /// The board.
    board: Board,
    /// Mark to place next.
    to_move: Mark,
    /// Cells played so far, in order.
    history: Vec<usize>,
}

impl Game {
    /// Creates a new game on an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            history: Vec::new(),
        }
    }

    /// Current outcome, derived from the board.
    pub fn status(&self) -> Outcome {
        self.board.outcome()
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }

    /// Places the current mark at `cell` (0-8) and passes the turn.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn place(&mut self, cell: usize) -> Result<Outcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        self.board.apply(cell, self.to_move)?;
        self.history.push(cell);
        self.to_move = self.to_move.opponent();

        let status = self.status();
        debug!(cell, %status, "Move applied");
        if status.is_terminal() {
            info!(%status, moves = self.history.len(), "Game finished");
        }
        Ok(status)
    }

    /// Rebuilds a game by playing `cells` in order from the empty board.
    #[instrument]
    pub fn replay(cells: &[usize]) -> Result<Self, GameError> {
        let mut game = Self::new();
        for &cell in cells {
            game.place(cell)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
