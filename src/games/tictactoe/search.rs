//! Exhaustive minimax search.
//!
//! Values are always scored from O's point of view: O (the computer) is the
//! maximizing side and X (the human) the minimizing side. The tree is at most
//! nine plies deep, so the search walks it to the end without pruning or
//! caching.
//!
//! Candidates are scanned in ascending cell order and a later candidate only
//! replaces the current best on a strict improvement, so among equally good
//! moves the lowest index is chosen.

use super::error::NoLegalMoves;
use super::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Game-theoretic value of a position for O.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Value {
    /// X wins with best play.
    Loss = -1,
    /// Neither side can force a win.
    Draw = 0,
    /// O wins with best play.
    Win = 1,
}

impl Value {
    /// The value as -1, 0 or +1.
    pub fn as_i8(self) -> i8 {
        self as i8
    }
}

/// A legal move together with the value of the position it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// Cell index (0-8).
    pub cell: usize,
    /// Value for O after the move, assuming best play afterwards.
    pub value: Value,
}

/// A trial move that is taken back when the guard goes out of scope.
struct TrialMove<'a> {
    board: &'a mut Board,
    cell: usize,
}

impl<'a> TrialMove<'a> {
    /// `cell` must come from `board.legal_moves()`.
    fn place(board: &'a mut Board, cell: usize, mark: Mark) -> Self {
        board.occupy(cell, mark);
        Self { board, cell }
    }

    fn board(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.undo(self.cell);
    }
}

/// Returns the value of `board` for O with the given side to move.
///
/// `maximizing` is true when O is to move. The caller's board is not touched;
/// the search runs on its own copy.
pub fn evaluate(board: &Board, maximizing: bool) -> Value {
    let mut scratch = *board;
    minimax(&mut scratch, maximizing)
}

fn minimax(board: &mut Board, maximizing: bool) -> Value {
    match board.winner() {
        Some(Mark::O) => return Value::Win,
        Some(Mark::X) => return Value::Loss,
        None => {}
    }
    if board.is_full() {
        return Value::Draw;
    }

    let mark = if maximizing { Mark::O } else { Mark::X };
    let mut best: Option<Value> = None;
    for cell in board.legal_moves() {
        let mut trial = TrialMove::place(board, cell, mark);
        let value = minimax(trial.board(), !maximizing);
        drop(trial);

        best = Some(match best {
            None => value,
            Some(current) if maximizing => current.max(value),
            Some(current) => current.min(value),
        });
    }

    // A non-full board always has at least one legal move.
    best.unwrap_or(Value::Draw)
}

/// Scores every legal move for `mark`, in ascending cell order.
///
/// Terminal boards have no moves to score.
#[instrument(level = "debug", skip(board), fields(board = %board))]
pub fn move_values(board: &Board, mark: Mark) -> Vec<ScoredMove> {
    if board.is_terminal() {
        return Vec::new();
    }

    let mut scratch = *board;
    let opponent_maximizes = mark.opponent() == Mark::O;
    let mut scored = Vec::new();
    for cell in scratch.legal_moves() {
        let mut trial = TrialMove::place(&mut scratch, cell, mark);
        let value = minimax(trial.board(), opponent_maximizes);
        trace!(cell, %value, "Scored candidate");
        scored.push(ScoredMove { cell, value });
    }
    scored
}

/// Picks the optimal move for `mark`.
///
/// O keeps the first candidate with a strictly higher value, X the first with
/// a strictly lower one.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move_for(board: &Board, mark: Mark) -> Result<usize, NoLegalMoves> {
    let mut best: Option<ScoredMove> = None;
    for candidate in move_values(board, mark) {
        let improves = match best {
            None => true,
            Some(current) => match mark {
                Mark::O => candidate.value > current.value,
                Mark::X => candidate.value < current.value,
            },
        };
        if improves {
            best = Some(candidate);
        }
    }

    let best = best.ok_or(NoLegalMoves)?;
    debug!(cell = best.cell, value = %best.value, "Selected move");
    Ok(best.cell)
}

/// Picks the computer's (O's) optimal move.
///
/// Fails with [`NoLegalMoves`] if the board is already won or full.
pub fn best_move(board: &Board) -> Result<usize, NoLegalMoves> {
    best_move_for(board, Mark::O)
}
