//! Command-line interface for strictly_mastermind.

use clap::{Parser, Subcommand};
use strictly_mastermind::{Difficulty, MAX_COLORS, MIN_COLORS};

/// Strictly Mastermind - break a four-color secret code
#[derive(Parser, Debug)]
#[command(name = "strictly_mastermind")]
#[command(about = "Single-player Mastermind in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Difficulty: easy, medium or hard
    #[arg(short, long, global = true)]
    pub difficulty: Option<Difficulty>,

    /// Number of colors in play
    #[arg(long, global = true, value_parser = clap::value_parser!(u8).range(i64::from(MIN_COLORS)..=i64::from(MAX_COLORS)))]
    pub colors: Option<u8>,

    /// Seed for the random source, for repeatable games
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play,

    /// Score one guess against a secret and print the feedback
    Score {
        /// Secret code as four color numbers, e.g. 1234 or 1,2,3,4
        secret: String,

        /// Guess in the same form
        guess: String,
    },
}
