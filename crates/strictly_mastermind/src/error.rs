//! Error type for session commands.

use crate::ColorIndex;

/// Error returned when a session command is rejected.
///
/// Every variant leaves the session unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// Submit was attempted while at least one buffer slot is empty.
    #[display("Guess is incomplete: every slot needs a color")]
    IncompleteGuess,

    /// A color index outside `[0, num_colors)` was offered to the buffer.
    #[display("Color {} is not available (session uses {} colors)", color, num_colors)]
    InvalidColorIndex {
        /// The rejected color.
        color: ColorIndex,
        /// Number of colors in play.
        num_colors: u8,
    },

    /// The session cannot be built with these settings.
    #[display("Invalid configuration: {}", _0)]
    InvalidConfiguration(String),

    /// The game is already won or lost.
    #[display("Game is already over")]
    GameOver,

    /// A postcondition failed after a state transition.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for SessionError {}
