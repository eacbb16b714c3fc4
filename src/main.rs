//! Noughts - terminal front end.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::{Board, ComputerPlayer, HumanPlayer, Orchestrator, PlayConfig, best_move, run_renderer};
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they don't interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            delay_ms,
            json,
        } => run_play(config, delay_ms, json).await,
        Command::Solve { board, minimizing } => run_solve(&board, !minimizing),
    }
}

/// Runs an interactive game on stdin/stdout.
#[instrument(skip_all)]
async fn run_play(config_path: Option<PathBuf>, delay_ms: Option<u64>, json: bool) -> Result<()> {
    let mut config = match config_path {
        Some(path) => PlayConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => PlayConfig::default(),
    };
    if let Some(ms) = delay_ms {
        config = config.with_thinking_delay_ms(ms);
    }
    if json {
        config = config.with_json_events(true);
    }

    info!(?config, "Starting game");

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let renderer = tokio::spawn(run_renderer(event_rx, config.clone()));

    let human = HumanPlayer::stdin(config.human_name().clone());
    let computer = ComputerPlayer::new(config.computer_name().clone(), config.thinking_delay());
    let mut orchestrator = Orchestrator::new(Box::new(human), Box::new(computer), event_tx);

    let outcome = orchestrator.run().await;
    drop(orchestrator);
    renderer.await.context("Renderer task failed")?;

    let outcome = outcome?;
    info!(?outcome, "Goodbye");
    Ok(())
}

/// Prints the best move for a board given on the command line.
#[instrument]
fn run_solve(board: &str, maximizing: bool) -> Result<()> {
    let board: Board = board.parse().context("Invalid board")?;
    let eval = best_move(&board, maximizing);
    println!("{}", serde_json::to_string(&eval)?);
    Ok(())
}
