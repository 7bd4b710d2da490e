//! Core domain types for tic-tac-toe.

use super::error::{BoardParseError, InvalidMove};
use super::rules;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Mark placed by a player.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// The human player (goes first, minimizing side).
    X,
    /// The computer (maximizing side).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// Outcome derived from the board contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves remain and nobody has three in a row.
    InProgress,
    /// A mark owns a full line.
    Won(Mark),
    /// Every cell is filled and no line is owned.
    Draw,
}

impl Outcome {
    /// Returns true once no further moves may be applied.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Won(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// The board trusts its caller to alternate marks. Turn order is enforced one
/// level up, by [`Game`](super::Game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, cell: usize) -> Option<Cell> {
        self.cells.get(cell).copied()
    }

    /// Checks if a cell is on the board and empty.
    pub fn is_empty(&self, cell: usize) -> bool {
        matches!(self.get(cell), Some(Cell::Empty))
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Places `mark` on `cell`.
    ///
    /// Out-of-range or occupied cells are rejected and the board is left
    /// untouched.
    pub fn apply(&mut self, cell: usize, mark: Mark) -> Result<(), InvalidMove> {
        match self.cells.get(cell) {
            None => Err(InvalidMove::OutOfRange(cell)),
            Some(Cell::Occupied(_)) => Err(InvalidMove::Occupied(cell)),
            Some(Cell::Empty) => {
                self.cells[cell] = Cell::Occupied(mark);
                Ok(())
            }
        }
    }

    /// Places `mark` on a cell known to be empty. Only the search uses this;
    /// its cells come from [`Board::legal_moves`].
    pub(crate) fn occupy(&mut self, cell: usize, mark: Mark) {
        debug_assert!(self.is_empty(cell), "search placed a mark on occupied cell {}", cell);
        self.cells[cell] = Cell::Occupied(mark);
    }

    /// Clears `cell`. Only the search uses this, to take back a trial move.
    pub(crate) fn undo(&mut self, cell: usize) {
        self.cells[cell] = Cell::Empty;
    }

    /// Returns the mark owning a full line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::winner(self)
    }

    /// Returns true iff no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Empty cell indices in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Derives the outcome from the board contents.
    pub fn outcome(&self) -> Outcome {
        if let Some(mark) = self.winner() {
            Outcome::Won(mark)
        } else if rules::is_draw(self) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Returns true if the board is won or full.
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }

    /// Mark due to move next under alternating play with X first.
    pub fn side_to_move(&self) -> Mark {
        if self.count(Mark::X) > self.count(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Formats the board as a human-readable grid.
    ///
    /// With `numbered`, empty cells show their 1-based position so they match
    /// what the move prompt expects.
    pub fn display(&self, numbered: bool) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Occupied(mark) => mark.to_string(),
                    Cell::Empty if numbered => (index + 1).to_string(),
                    Cell::Empty => " ".to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push_str(" | ");
                }
            }
            if row < 2 {
                result.push_str("\n--+---+--\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let compact: String = self
            .cells
            .iter()
            .map(|cell| match cell {
                Cell::Empty => '.',
                Cell::Occupied(Mark::X) => 'X',
                Cell::Occupied(Mark::O) => 'O',
            })
            .collect();
        write!(f, "{}", compact)
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cell characters: `X`/`O` for marks, `.`, `_`, `-`, a space
    /// or a digit for empty cells. `|` and `/` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '|' | '/'))
            .collect();
        if symbols.len() != CELL_COUNT {
            return Err(BoardParseError::Length(symbols.len()));
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (index, symbol) in symbols.into_iter().enumerate() {
            cells[index] = match symbol {
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '.' | '_' | '-' | ' ' => Cell::Empty,
                c if c.is_ascii_digit() => Cell::Empty,
                other => return Err(BoardParseError::Symbol(other)),
            };
        }
        Ok(Self { cells })
    }
}

/// Creates an empty board.
pub fn new_board() -> Board {
    Board::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_places_mark() {
        let mut board = Board::new();
        board.apply(4, Mark::X).unwrap();
        assert_eq!(board.get(4), Some(Cell::Occupied(Mark::X)));
        assert_eq!(board.count(Mark::X), 1);
    }

    #[test]
    fn test_apply_rejects_occupied_without_change() {
        let mut board = Board::new();
        board.apply(0, Mark::X).unwrap();
        let before = board;

        assert_eq!(board.apply(0, Mark::O), Err(InvalidMove::Occupied(0)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_rejects_out_of_range_without_change() {
        let mut board = Board::new();
        let before = board;

        assert_eq!(board.apply(9, Mark::X), Err(InvalidMove::OutOfRange(9)));
        assert_eq!(board.apply(usize::MAX, Mark::O), Err(InvalidMove::OutOfRange(usize::MAX)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_undo_clears_cell() {
        let mut board = Board::new();
        board.apply(7, Mark::O).unwrap();
        board.undo(7);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_legal_moves_ascending() {
        let mut board = Board::new();
        board.apply(4, Mark::X).unwrap();
        board.apply(0, Mark::O).unwrap();
        assert_eq!(board.legal_moves(), vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_side_to_move_alternates() {
        let mut board = Board::new();
        assert_eq!(board.side_to_move(), Mark::X);
        board.apply(0, Mark::X).unwrap();
        assert_eq!(board.side_to_move(), Mark::O);
        board.apply(4, Mark::O).unwrap();
        assert_eq!(board.side_to_move(), Mark::X);
    }

    #[test]
    fn test_parse_and_display_compact() {
        let board: Board = "OO.XX....".parse().unwrap();
        assert_eq!(board.get(0), Some(Cell::Occupied(Mark::O)));
        assert_eq!(board.get(3), Some(Cell::Occupied(Mark::X)));
        assert_eq!(board.to_string(), "OO.XX....");
    }

    #[test]
    fn test_parse_accepts_separators_and_digits() {
        let board: Board = "X2O/456/78X".parse().unwrap();
        assert_eq!(board.to_string(), "X.O.....X");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("XO".parse::<Board>(), Err(BoardParseError::Length(2)));
        assert_eq!("XO?......".parse::<Board>(), Err(BoardParseError::Symbol('?')));
    }

    #[test]
    fn test_display_numbered() {
        let mut board = Board::new();
        board.apply(0, Mark::X).unwrap();
        let text = board.display(true);
        assert!(text.starts_with("X | 2 | 3"));
        assert!(text.ends_with("7 | 8 | 9"));
    }

    #[test]
    fn test_outcome_in_progress_on_empty() {
        assert_eq!(Board::new().outcome(), Outcome::InProgress);
        assert!(!Board::new().is_terminal());
    }
}
