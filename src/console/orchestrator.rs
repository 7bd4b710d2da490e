//! Game orchestration between two players.

use super::players::Player;
use crate::games::tictactoe::{Game, Mark, Outcome};
use anyhow::Result;
use std::io::Write;
use tracing::{debug, info, instrument};

/// Runs one game between X and O, rendering to `out`.
pub struct Orchestrator<W> {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    out: W,
    show_cell_numbers: bool,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator with a fresh game.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>, out: W) -> Self {
        Self {
            game: Game::new(),
            player_x,
            player_o,
            out,
            show_cell_numbers: true,
        }
    }

    /// Chooses whether empty cells are drawn with their position number.
    pub fn with_cell_numbers(mut self, show: bool) -> Self {
        self.show_cell_numbers = show;
        self
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consumes the orchestrator, returning the rendered output.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Plays until the game is won or drawn and returns the outcome.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self) -> Result<Outcome> {
        info!("Starting game orchestration");
        self.render_board()?;

        loop {
            let status = self.game.status();
            if status.is_terminal() {
                self.announce_result(status)?;
                return Ok(status);
            }

            let player = match *self.game.to_move() {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            debug!(player = %player.name(), "Waiting for move");
            let cell = player.choose_move(&self.game)?;
            self.game.place(cell)?;

            if player.announces_moves() {
                writeln!(self.out, "{} chose position {}", player.name(), cell + 1)?;
            }
            self.render_board()?;
        }
    }

    fn render_board(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", self.game.board().display(self.show_cell_numbers))?;
        writeln!(self.out)?;
        Ok(())
    }

    fn announce_result(&mut self, status: Outcome) -> Result<()> {
        let message = match status {
            Outcome::Won(Mark::X) => self.player_x.victory_message(),
            Outcome::Won(Mark::O) => self.player_o.victory_message(),
            Outcome::Draw | Outcome::InProgress => "It's a draw!".to_string(),
        };
        info!(%status, "Game over");
        writeln!(self.out, "{}", message)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::players::{HumanPlayer, MinimaxPlayer};
    use std::io::Cursor;

    /// Plays a fixed list of cells, ignoring the board.
    struct Scripted {
        cells: std::vec::IntoIter<usize>,
    }

    impl Player for Scripted {
        fn choose_move(&mut self, _game: &Game) -> Result<usize> {
            self.cells
                .next()
                .ok_or_else(|| anyhow::anyhow!("Script exhausted"))
        }

        fn name(&self) -> &str {
            "Script"
        }
    }

    #[test]
    fn test_self_play_is_a_draw() {
        let mut orchestrator = Orchestrator::new(
            Box::new(MinimaxPlayer::new("Minimax X")),
            Box::new(MinimaxPlayer::new("Minimax O")),
            Vec::new(),
        );
        assert_eq!(orchestrator.run().unwrap(), Outcome::Draw);
        assert!(orchestrator.game().board().is_full());

        let output = String::from_utf8(orchestrator.into_output()).unwrap();
        assert!(output.ends_with("It's a draw!\n"));
    }

    #[test]
    fn test_computer_punishes_weak_play() {
        // X wanders along the edge; O wins once it has two in a line.
        let human = HumanPlayer::new("You", Cursor::new(b"2\n4\n9\n6\n".to_vec()), Vec::new());
        let mut orchestrator = Orchestrator::new(
            Box::new(human),
            Box::new(MinimaxPlayer::new("Computer")),
            Vec::new(),
        );
        assert_eq!(orchestrator.run().unwrap(), Outcome::Won(Mark::O));

        let output = String::from_utf8(orchestrator.into_output()).unwrap();
        assert!(output.contains("Computer chose position"));
        assert!(output.ends_with("Computer wins!\n"));
    }

    #[test]
    fn test_script_error_propagates() {
        let mut orchestrator = Orchestrator::new(
            Box::new(Scripted { cells: vec![0].into_iter() }),
            Box::new(MinimaxPlayer::new("Computer")),
            Vec::new(),
        );
        assert!(orchestrator.run().is_err());
        assert_eq!(orchestrator.game().history(), &vec![0, 4]);
    }

    #[test]
    fn test_unnumbered_board() {
        let mut orchestrator = Orchestrator::new(
            Box::new(MinimaxPlayer::new("Minimax X")),
            Box::new(MinimaxPlayer::new("Minimax O")),
            Vec::new(),
        )
        .with_cell_numbers(false);
        orchestrator.run().unwrap();

        let output = String::from_utf8(orchestrator.into_output()).unwrap();
        assert!(output.starts_with("\n  |   |  \n"));
    }
}
