//! Attempt bookkeeping stays within the board.

use super::Invariant;
use crate::SessionView;

/// Invariant: rows used never exceed the board, and used plus remaining
/// always equals the board size.
pub struct AttemptLimitInvariant;

impl Invariant<SessionView> for AttemptLimitInvariant {
    fn holds(view: &SessionView) -> bool {
        let used = *view.attempts_used();
        let max = *view.max_guesses();
        used <= max && used + *view.attempts_remaining() == max && used <= view.history().len()
    }

    fn description() -> &'static str {
        "Attempts used stay within the board and match the history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Difficulty, GuessBuffer, Phase};

    fn view(attempts_used: usize) -> SessionView {
        SessionView::new(
            Difficulty::Medium,
            5,
            Phase::AwaitingInput,
            Vec::new(),
            GuessBuffer::new(),
            7,
            attempts_used,
            None,
        )
    }

    #[test]
    fn test_fresh_board_holds() {
        assert!(AttemptLimitInvariant::holds(&view(0)));
    }

    #[test]
    fn test_attempts_without_rows_violate() {
        assert!(!AttemptLimitInvariant::holds(&view(2)));
    }
}
