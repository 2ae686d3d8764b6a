//! Contract-based validation for guess submission.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} submit {Q}.

use crate::invariants::{InvariantSet, MastermindInvariants};
use crate::{GuessBuffer, SessionError, SessionView};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), SessionError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), SessionError>;
}

/// Precondition: the game has not been won or lost.
pub struct GameInProgress;

impl GameInProgress {
    /// Rejects commands once the game is over.
    #[instrument(skip(view))]
    pub fn check(view: &SessionView) -> Result<(), SessionError> {
        if view.is_over() {
            Err(SessionError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: every buffer slot holds a color.
pub struct BufferComplete;

impl BufferComplete {
    /// Rejects a buffer with an empty slot.
    #[instrument]
    pub fn check(buffer: &GuessBuffer) -> Result<(), SessionError> {
        if buffer.is_complete() {
            Ok(())
        } else {
            Err(SessionError::IncompleteGuess)
        }
    }
}

/// Contract for submitting the buffer.
///
/// Preconditions:
/// - Game is in progress
/// - Buffer is complete
///
/// Postconditions:
/// - Exactly one player row was added
/// - All session invariants hold
pub struct SubmitContract;

impl Contract<SessionView, GuessBuffer> for SubmitContract {
    fn pre(view: &SessionView, buffer: &GuessBuffer) -> Result<(), SessionError> {
        GameInProgress::check(view)?;
        BufferComplete::check(buffer)
    }

    fn post(before: &SessionView, after: &SessionView) -> Result<(), SessionError> {
        let added = after.history().len().checked_sub(before.history().len());
        let player_row = after.history().last().is_some_and(|entry| !entry.seeded());
        if added != Some(1) || !player_row {
            warn!(
                before = before.history().len(),
                after = after.history().len(),
                "Submit did not add exactly one player row"
            );
            return Err(SessionError::InvariantViolation(
                "Postcondition failed: submit must add exactly one player row".to_string(),
            ));
        }

        MastermindInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            SessionError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Code, ColorIndex, Difficulty, GameSession, SessionConfig};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn session() -> GameSession<ChaCha8Rng> {
        GameSession::with_secret(
            SessionConfig::new(Difficulty::Medium, 6),
            Code::from_indices([0, 1, 2, 3]),
            ChaCha8Rng::seed_from_u64(1),
        )
        .expect("valid config")
    }

    fn fill(session: &mut GameSession<ChaCha8Rng>, colors: [u8; 4]) {
        for (pos, color) in colors.into_iter().enumerate() {
            session
                .set_buffer_color(pos, ColorIndex::new(color))
                .expect("color in range");
        }
    }

    #[test]
    fn test_precondition_incomplete_buffer() {
        let session = session();
        assert_eq!(
            SubmitContract::pre(&session.view(), session.buffer()),
            Err(SessionError::IncompleteGuess)
        );
    }

    #[test]
    fn test_precondition_game_over() {
        let mut session = session();
        fill(&mut session, [0, 1, 2, 3]);
        session.submit_guess().expect("winning guess");

        fill(&mut session, [3, 2, 1, 0]);
        assert_eq!(
            SubmitContract::pre(&session.view(), session.buffer()),
            Err(SessionError::GameOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_submit() {
        let mut session = session();
        let before = session.view();
        fill(&mut session, [5, 4, 3, 2]);
        session.submit_guess().expect("complete guess");
        assert!(SubmitContract::post(&before, &session.view()).is_ok());
    }

    #[test]
    fn test_postcondition_detects_missing_row() {
        let session = session();
        let view = session.view();
        assert!(matches!(
            SubmitContract::post(&view, &view),
            Err(SessionError::InvariantViolation(_))
        ));
    }
}
