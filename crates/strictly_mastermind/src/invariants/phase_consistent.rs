//! The phase agrees with the board.

use super::Invariant;
use crate::{Phase, SessionView};

/// Invariant: the phase follows from the history.
///
/// - `Won` iff the last row is a winning player guess
/// - `Lost` iff no row wins and the board is used up
/// - the secret is visible exactly when the game is over
pub struct PhaseConsistentInvariant;

impl Invariant<SessionView> for PhaseConsistentInvariant {
    fn holds(view: &SessionView) -> bool {
        let last_wins = view
            .history()
            .last()
            .is_some_and(|entry| entry.feedback().is_win() && !entry.seeded());
        let any_wins = view.history().iter().any(|entry| entry.feedback().is_win());
        let board_full = *view.attempts_remaining() == 0;

        let phase_ok = match view.phase() {
            Phase::Won => last_wins,
            Phase::Lost => !any_wins && board_full,
            Phase::AwaitingInput => !any_wins && !board_full,
        };

        phase_ok && view.secret().is_some() == view.phase().is_over()
    }

    fn description() -> &'static str {
        "Phase matches the history and the secret is revealed only when the game is over"
    }
}
