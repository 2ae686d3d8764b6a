//! Session configuration.

use crate::{Difficulty, MAX_COLORS, MIN_COLORS, SessionError};
use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Settings a session is built from.
///
/// Fields missing from a settings file fall back to the classic game:
/// four colors, seven rows, five seeded rows on hard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct SessionConfig {
    /// Feedback shape and turn policies.
    #[serde(default)]
    difficulty: Difficulty,

    /// Size of the color alphabet.
    #[serde(default = "default_num_colors")]
    num_colors: u8,

    /// Rows on the board.
    #[serde(default = "default_max_guesses")]
    max_guesses: usize,

    /// Random rows placed on the board in hard mode.
    #[serde(default = "default_seed_rows")]
    seed_rows: usize,

    /// Candidate guesses drawn before hard-mode seeding gives up.
    #[serde(default = "default_seed_attempts")]
    seed_attempts: usize,

    /// Whether seeded rows use up board rows like player guesses.
    #[serde(default = "default_seeded_rows_count")]
    seeded_rows_count: bool,
}

fn default_num_colors() -> u8 {
    MIN_COLORS
}

fn default_max_guesses() -> usize {
    7
}

fn default_seed_rows() -> usize {
    5
}

fn default_seed_attempts() -> usize {
    100
}

fn default_seeded_rows_count() -> bool {
    true
}

impl SessionConfig {
    /// Creates a configuration with the default board for this difficulty
    /// and color count.
    #[instrument]
    pub fn new(difficulty: Difficulty, num_colors: u8) -> Self {
        Self {
            difficulty,
            num_colors,
            max_guesses: default_max_guesses(),
            seed_rows: default_seed_rows(),
            seed_attempts: default_seed_attempts(),
            seeded_rows_count: default_seeded_rows_count(),
        }
    }

    /// Checks that a session can be played with these settings.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidConfiguration` when the color count is
    /// outside the palette or too small to fill a code without repeats, when
    /// the board has no rows, or when seeded rows would fill the board.
    #[instrument]
    pub fn validate(&self) -> Result<(), SessionError> {
        if !(MIN_COLORS..=MAX_COLORS).contains(&self.num_colors) {
            return Err(SessionError::InvalidConfiguration(format!(
                "Color count must be between {} and {}, got {}",
                MIN_COLORS, MAX_COLORS, self.num_colors
            )));
        }
        if self.max_guesses == 0 {
            return Err(SessionError::InvalidConfiguration(
                "Board needs at least one row".to_string(),
            ));
        }
        if self.difficulty.pre_seeds()
            && self.seeded_rows_count
            && self.seed_rows >= self.max_guesses
        {
            return Err(SessionError::InvalidConfiguration(format!(
                "{} seeded rows leave no turns on a {}-row board",
                self.seed_rows, self.max_guesses
            )));
        }
        debug!("Configuration valid");
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(Difficulty::default(), default_num_colors())
    }
}
