//! Strictly Mastermind - terminal game
//!
//! Plays Mastermind on stdin/stdout, or scores a single guess.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_mastermind::GameSession;
use strictly_mastermind_cli::{Cli, Command, Settings, run_session, score_report};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?.with_overrides(
        cli.difficulty,
        cli.colors,
        cli.seed,
    );

    match cli.command {
        Command::Play => run_play(settings),
        Command::Score { secret, guess } => {
            println!("{}", score_report(&secret, &guess)?);
            Ok(())
        }
    }
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(settings))]
fn run_play(settings: Settings) -> Result<()> {
    let rng = match settings.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };
    let mut session = GameSession::with_rng(*settings.session(), rng)?;
    info!(difficulty = %session.difficulty(), "Game ready");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_session(&mut session, stdin.lock(), &mut stdout)
}
