//! Unbeatable tic-tac-toe CLI.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, Write};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use unbeatable_tictactoe::{
    Board, GameConfig, HumanPlayer, Mark, MinimaxPlayer, Orchestrator, Outcome, best_move_for,
    move_values,
};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?;
    initialize_tracing(config.log_filter());

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(&config).map(|_| ()),
        Command::SelfPlay => run_self_play(&config).map(|_| ()),
        Command::Analyze {
            board,
            to_move,
            json,
        } => run_analyze(&board, to_move, json),
    }
}

/// Human (X) against the computer (O) on stdin/stdout.
#[instrument(skip(config))]
fn run_play(config: &GameConfig) -> Result<Outcome> {
    let mut out = io::stdout();
    writeln!(out, "Welcome to Tic Tac Toe!")?;
    writeln!(out, "{} play X, {} plays O.", config.human_name(), config.computer_name())?;
    writeln!(out, "Choose a position by typing its number (1-9).")?;

    let human = HumanPlayer::new(config.human_name().clone(), io::stdin().lock(), io::stdout());
    let computer = MinimaxPlayer::new(config.computer_name().clone());

    let mut orchestrator = Orchestrator::new(Box::new(human), Box::new(computer), out)
        .with_cell_numbers(*config.show_cell_numbers());
    let outcome = orchestrator.run()?;
    info!(%outcome, "Interactive game finished");
    Ok(outcome)
}

/// Optimal play from both sides; always a draw.
#[instrument(skip(config))]
fn run_self_play(config: &GameConfig) -> Result<Outcome> {
    let mut orchestrator = Orchestrator::new(
        Box::new(MinimaxPlayer::new("X")),
        Box::new(MinimaxPlayer::new("O")),
        io::stdout(),
    )
    .with_cell_numbers(*config.show_cell_numbers());
    let outcome = orchestrator.run()?;
    info!(%outcome, "Self-play finished");
    Ok(outcome)
}

/// Prints the value of every legal move of `board`.
#[instrument]
fn run_analyze(board: &str, to_move: Option<Mark>, json: bool) -> Result<()> {
    let board: Board = board.parse()?;
    let to_move = to_move.unwrap_or_else(|| board.side_to_move());
    let scored = move_values(&board, to_move);
    let best = best_move_for(&board, to_move).ok();

    let mut out = io::stdout();
    if json {
        let report = serde_json::json!({
            "board": board.to_string(),
            "to_move": to_move,
            "outcome": board.outcome(),
            "moves": scored,
            "best": best,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    writeln!(out, "{}", board.display(true))?;
    writeln!(out)?;
    if board.is_terminal() {
        writeln!(out, "Game over: {}", board.outcome())?;
        return Ok(());
    }

    writeln!(out, "{} to move. Values are for O.", to_move)?;
    for candidate in &scored {
        writeln!(
            out,
            "  position {}: {} ({:+})",
            candidate.cell + 1,
            candidate.value,
            candidate.value.as_i8()
        )?;
    }
    if let Some(cell) = best {
        writeln!(out, "Best move: position {}", cell + 1)?;
    }
    Ok(())
}

/// Logs go to stderr so they never interleave with the board.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Tracing initialized");
}
