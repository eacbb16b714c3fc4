//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - play tic-tac-toe against a perfect opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe against an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal (you are X, the computer is O)
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Computer thinking delay in milliseconds (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Print events as JSON lines instead of drawing the board
        #[arg(long)]
        json: bool,
    },

    /// Print the engine's best move for a board as JSON
    Solve {
        /// Nine cells of X, O or '.', e.g. "XX.OO...."
        board: String,

        /// Search for X (minimizing) instead of O
        #[arg(long)]
        minimizing: bool,
    },
}
