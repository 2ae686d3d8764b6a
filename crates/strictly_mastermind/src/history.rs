//! Recorded guesses.

use crate::{Code, Feedback};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A guess on the board together with its feedback.
///
/// Entries are immutable once recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct HistoryEntry {
    /// The submitted colors.
    guess: Code,
    /// Feedback in the session's shape.
    feedback: Feedback,
    /// True for hard-mode rows placed before the player's first turn.
    seeded: bool,
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.guess, self.feedback.tally())
    }
}
