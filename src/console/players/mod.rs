//! Player trait and implementations.

mod human;
mod minimax;

pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;

use crate::games::tictactoe::Game;
use anyhow::Result;

/// Something that can pick moves for the side to move.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// Returns the cell index (0-8) for the next move.
    fn choose_move(&mut self, game: &Game) -> Result<usize>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Whether the orchestrator should announce this player's moves.
    ///
    /// A human already knows what they typed.
    fn announces_moves(&self) -> bool {
        true
    }

    /// Line printed when this player wins.
    fn victory_message(&self) -> String {
        format!("{} wins!", self.name())
    }
}
