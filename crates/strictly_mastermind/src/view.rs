//! Read-only snapshot of a session for presentation layers.

use crate::{Code, Difficulty, GuessBuffer, HistoryEntry, Phase};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a renderer may read from a session.
///
/// The secret is only present once the game is over.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionView {
    /// Difficulty in play.
    difficulty: Difficulty,
    /// Size of the color alphabet.
    num_colors: u8,
    /// Lifecycle phase.
    phase: Phase,
    /// Board rows, oldest first.
    history: Vec<HistoryEntry>,
    /// Guess under construction.
    buffer: GuessBuffer,
    /// Rows on the board.
    max_guesses: usize,
    /// Rows used so far.
    attempts_used: usize,
    /// Rows left.
    attempts_remaining: usize,
    /// The secret, revealed after a win or loss.
    secret: Option<Code>,
}

impl SessionView {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        difficulty: Difficulty,
        num_colors: u8,
        phase: Phase,
        history: Vec<HistoryEntry>,
        buffer: GuessBuffer,
        max_guesses: usize,
        attempts_used: usize,
        secret: Option<Code>,
    ) -> Self {
        Self {
            difficulty,
            num_colors,
            phase,
            history,
            buffer,
            max_guesses,
            attempts_used,
            attempts_remaining: max_guesses.saturating_sub(attempts_used),
            secret,
        }
    }

    /// Slot the cursor is on.
    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    /// Returns true once the game is won or lost.
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Returns true if the secret was found.
    pub fn is_won(&self) -> bool {
        self.phase.is_won()
    }
}
