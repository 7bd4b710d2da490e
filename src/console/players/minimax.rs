//! Computer player backed by the exhaustive search.

use super::Player;
use crate::games::tictactoe::{Game, best_move_for};
use anyhow::Result;
use tracing::debug;

/// Plays the optimal move for whichever side is to move.
pub struct MinimaxPlayer {
    name: String,
}

impl MinimaxPlayer {
    /// Creates a new minimax player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for MinimaxPlayer {
    fn choose_move(&mut self, game: &Game) -> Result<usize> {
        let cell = best_move_for(game.board(), *game.to_move())?;
        debug!(player = %self.name, cell, "Minimax chose cell");
        Ok(cell)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_corner_with_center() {
        let game = Game::replay(&[0]).unwrap();
        let mut player = MinimaxPlayer::new("Computer");
        assert_eq!(player.choose_move(&game).unwrap(), 4);
    }

    #[test]
    fn test_finished_game_is_an_error() {
        let game = Game::replay(&[0, 3, 1, 4, 2]).unwrap();
        let mut player = MinimaxPlayer::new("Computer");
        assert!(player.choose_move(&game).is_err());
    }
}
