//! Session phases.

use serde::{Deserialize, Serialize};

/// Where a session is in its lifecycle.
///
/// Scoring happens inside `submit_guess` and is never observable, so there
/// is no evaluating phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// The player is composing a guess.
    #[default]
    AwaitingInput,
    /// The secret was found.
    Won,
    /// The guesses ran out.
    Lost,
}

impl Phase {
    /// Returns true once the game is won or lost.
    pub fn is_over(&self) -> bool {
        !matches!(self, Phase::AwaitingInput)
    }

    /// Returns true if the secret was found.
    pub fn is_won(&self) -> bool {
        matches!(self, Phase::Won)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::AwaitingInput => write!(f, "Awaiting input"),
            Phase::Won => write!(f, "Won"),
            Phase::Lost => write!(f, "Lost"),
        }
    }
}
