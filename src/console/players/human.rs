//! Human player reading moves from line-based input.

use super::Player;
use crate::games::tictactoe::Game;
use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use tracing::debug;

/// Human player answering a prompt with a position from 1 to 9.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Consumes the player, returning the prompt output.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn choose_move(&mut self, game: &Game) -> Result<usize> {
        loop {
            write!(self.output, "Enter your move (1-9): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Input closed before a move was entered");
            }

            let Ok(position) = line.trim().parse::<i64>() else {
                debug!(input = %line.trim(), "Unparseable move");
                writeln!(self.output, "Please enter a number between 1 and 9.")?;
                continue;
            };

            let cell = position
                .checked_sub(1)
                .and_then(|cell| usize::try_from(cell).ok());
            match cell {
                Some(cell) if game.board().is_empty(cell) => return Ok(cell),
                _ => {
                    debug!(position, "Rejected move");
                    writeln!(self.output, "Invalid move. Try again.")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn announces_moves(&self) -> bool {
        false
    }

    fn victory_message(&self) -> String {
        if self.name.eq_ignore_ascii_case("you") {
            "You win!".to_string()
        } else {
            format!("{} wins!", self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn player(input: &str) -> HumanPlayer<Cursor<Vec<u8>>, Vec<u8>> {
        HumanPlayer::new("You", Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_reads_one_based_position() {
        let mut human = player("5\n");
        assert_eq!(human.choose_move(&Game::new()).unwrap(), 4);
    }

    #[test]
    fn test_reprompts_on_garbage() {
        let mut human = player("abc\n\n3\n");
        assert_eq!(human.choose_move(&Game::new()).unwrap(), 2);

        let output = String::from_utf8(human.into_output()).unwrap();
        assert_eq!(output.matches("Please enter a number between 1 and 9.").count(), 2);
        assert_eq!(output.matches("Enter your move (1-9): ").count(), 3);
    }

    #[test]
    fn test_reprompts_on_out_of_range_and_occupied() {
        let game = Game::replay(&[0]).unwrap();
        let mut human = player("-4\n0\n10\n1\n2\n");
        assert_eq!(human.choose_move(&game).unwrap(), 1);

        let output = String::from_utf8(human.into_output()).unwrap();
        assert_eq!(output.matches("Invalid move. Try again.").count(), 4);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let mut human = player("");
        assert!(human.choose_move(&Game::new()).is_err());
    }

    #[test]
    fn test_victory_message() {
        assert_eq!(player("").victory_message(), "You win!");
        let named = HumanPlayer::new("Ada", Cursor::new(Vec::new()), Vec::<u8>::new());
        assert_eq!(named.victory_message(), "Ada wins!");
    }
}
