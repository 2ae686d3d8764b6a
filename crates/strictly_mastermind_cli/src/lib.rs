//! Strictly Mastermind terminal front end
//!
//! A line-oriented adapter over [`strictly_mastermind`]: each prompt line is
//! one command, and the board is redrawn as plain text after every command.
//!
//! # Architecture
//!
//! - **Cli**: clap command line (`play`, `score`)
//! - **Settings**: TOML settings file with command-line overrides
//! - **Input**: prompt command parser
//! - **Render**: plain-text board
//! - **Play**: the game loop, generic over reader and writer

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod input;
mod play;
mod render;
mod score;
mod settings;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Settings
pub use settings::{ConfigError, Settings};

// Crate-level exports - Prompt
pub use input::{HELP, InputCommand, InputError, parse_code, parse_command};
pub use play::{apply, run_session};
pub use render::{render_board, render_buffer, render_feedback, render_legend};
pub use score::score_report;
