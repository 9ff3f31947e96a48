//! Command-line interface for landung.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Landung - four in a row on a 5x5 board, with a computer opponent
#[derive(Parser, Debug)]
#[command(name = "landung")]
#[command(about = "Self-play tournaments and observed games for Landung", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one contender level against an opponent level, both seatings
    Tournament {
        /// Games per seating
        #[arg(short, long)]
        games: Option<u32>,

        /// Contender level (0-4)
        #[arg(long)]
        contender: Option<u8>,

        /// Opponent level (0-4)
        #[arg(long)]
        opponent: Option<u8>,

        /// Turn index at which a game is drawn
        #[arg(long)]
        max_turns: Option<u32>,

        /// Base seed for the random level
        #[arg(long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play every level 0-4 against one opponent level
    Ladder {
        /// Games per seating and level
        #[arg(short, long)]
        games: Option<u32>,

        /// Opponent level (0-4)
        #[arg(long)]
        opponent: Option<u8>,

        /// Base seed for the random level
        #[arg(long)]
        seed: Option<u64>,

        /// Print the reports as JSON
        #[arg(long)]
        json: bool,
    },

    /// Watch a single computer game, logging the board every turn
    Watch {
        /// Level of the first competitor (0-4)
        #[arg(long)]
        first: Option<u8>,

        /// Level of the second competitor (0-4)
        #[arg(long)]
        second: Option<u8>,

        /// Turn index at which the game is drawn
        #[arg(long)]
        max_turns: Option<u32>,

        /// Resume from a JSON snapshot instead of an empty board
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },
}
