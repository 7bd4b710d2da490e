//! Command-line interface for unbeatable_tictactoe.

use clap::{Parser, Subcommand};
use unbeatable_tictactoe::Mark;

/// Tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "unbeatable_tictactoe")]
#[command(about = "Play tic-tac-toe against an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play as X against the computer (O)
    Play,

    /// Let two minimax players play each other
    SelfPlay,

    /// Score every legal move of a position
    Analyze {
        /// Nine cells, row by row: X, O, and `.` for empty (e.g. "OO.XX....")
        #[arg(short, long)]
        board: String,

        /// Side to move (inferred from mark counts if omitted)
        #[arg(short, long)]
        to_move: Option<Mark>,

        /// Print the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}
