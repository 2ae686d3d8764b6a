//! End-to-end scenarios for a Mastermind session.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use strictly_mastermind::invariants::{InvariantSet, MastermindInvariants};
use strictly_mastermind::seeding::passes_filter;
use strictly_mastermind::{
    Code, ColorIndex, Difficulty, Feedback, GameSession, Phase, SessionConfig, SessionError,
};

fn session_with_secret(
    difficulty: Difficulty,
    num_colors: u8,
    secret: [u8; 4],
) -> GameSession<ChaCha8Rng> {
    GameSession::with_secret(
        SessionConfig::new(difficulty, num_colors),
        Code::from_indices(secret),
        ChaCha8Rng::seed_from_u64(99),
    )
    .expect("valid session")
}

fn enter(session: &mut GameSession<ChaCha8Rng>, colors: [u8; 4]) {
    for (pos, color) in colors.into_iter().enumerate() {
        session
            .set_buffer_color(pos, ColorIndex::new(color))
            .expect("color in range");
    }
}

fn play(session: &mut GameSession<ChaCha8Rng>, colors: [u8; 4]) -> Result<Phase, SessionError> {
    enter(session, colors);
    session.submit_guess()
}

#[test]
fn test_win_is_reported_once() {
    let mut session = session_with_secret(Difficulty::Medium, 4, [0, 1, 2, 3]);

    assert_eq!(play(&mut session, [0, 1, 2, 3]), Ok(Phase::Won));
    assert!(session.is_won());
    assert_eq!(session.history()[0].feedback().tally().exact(), 4);
    assert_eq!(session.revealed_secret(), Some(Code::from_indices([0, 1, 2, 3])));

    // Later submissions are rejected rather than reporting a second win.
    assert_eq!(session.submit_guess(), Err(SessionError::GameOver));
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_easy_keeps_exact_slots() {
    let mut session = session_with_secret(Difficulty::Easy, 4, [0, 3, 1, 2]);

    assert_eq!(play(&mut session, [0, 1, 2, 3]), Ok(Phase::AwaitingInput));

    let slots = session.buffer().slots();
    assert_eq!(slots[0], Some(ColorIndex::new(0)));
    assert_eq!(slots[1..], [None, None, None]);
    assert_eq!(session.cursor(), 0);
}

#[test]
fn test_seven_misses_lose_and_reveal_secret() {
    let mut session = session_with_secret(Difficulty::Medium, 7, [0, 1, 2, 3]);
    let misses = [
        [4, 5, 6, 0],
        [4, 5, 6, 1],
        [4, 5, 6, 2],
        [4, 5, 6, 3],
        [5, 6, 4, 0],
        [5, 6, 4, 1],
    ];

    for guess in misses {
        assert_eq!(session.revealed_secret(), None);
        assert_eq!(play(&mut session, guess), Ok(Phase::AwaitingInput));
    }
    assert_eq!(session.attempts_remaining(), 1);

    assert_eq!(play(&mut session, [5, 6, 4, 2]), Ok(Phase::Lost));
    assert!(session.is_over());
    assert!(!session.is_won());
    assert_eq!(session.attempts_remaining(), 0);
    assert_eq!(session.revealed_secret(), Some(Code::from_indices([0, 1, 2, 3])));
}

#[test]
fn test_win_on_last_row_is_a_win() {
    let mut session = session_with_secret(Difficulty::Easy, 7, [0, 1, 2, 3]);
    for _ in 0..6 {
        play(&mut session, [4, 5, 6, 0]).expect("complete guess");
    }
    assert_eq!(play(&mut session, [0, 1, 2, 3]), Ok(Phase::Won));
}

#[test]
fn test_hard_seed_rows_pass_filter() {
    for seed in 0..25 {
        let session = GameSession::with_rng(
            SessionConfig::new(Difficulty::Hard, 7),
            ChaCha8Rng::seed_from_u64(seed),
        )
        .expect("valid session");

        assert!(session.history().len() <= 5);
        assert_eq!(session.attempts_used(), session.history().len());
        for row in session.history() {
            assert!(*row.seeded());
            assert!(matches!(row.feedback(), Feedback::Aggregate(_)));
            assert!(passes_filter(&row.feedback().tally()));
        }
        assert_eq!(session.phase(), Phase::AwaitingInput);
    }
}

#[test]
fn test_hard_with_four_colors_has_no_seed_rows() {
    let session = GameSession::with_rng(
        SessionConfig::new(Difficulty::Hard, 4),
        ChaCha8Rng::seed_from_u64(8),
    )
    .expect("valid session");
    assert!(session.history().is_empty());
    assert_eq!(session.attempts_remaining(), 7);
}

#[test]
fn test_incomplete_guess_changes_nothing() {
    let mut session = session_with_secret(Difficulty::Easy, 6, [5, 4, 3, 2]);
    session
        .set_buffer_color(1, ColorIndex::new(0))
        .expect("color in range");
    let before = session.view();

    assert_eq!(session.submit_guess(), Err(SessionError::IncompleteGuess));
    assert_eq!(session.view(), before);
}

#[test]
fn test_color_outside_session_rejected() {
    let mut session = session_with_secret(Difficulty::Easy, 5, [0, 1, 2, 3]);
    let result = session.set_buffer_color(0, ColorIndex::new(5));
    assert_eq!(
        result,
        Err(SessionError::InvalidColorIndex {
            color: ColorIndex::new(5),
            num_colors: 5
        })
    );
    assert!(session.buffer().is_empty());
}

#[test]
fn test_reset_starts_fresh_game() {
    let mut session = session_with_secret(Difficulty::Easy, 4, [0, 1, 2, 3]);
    play(&mut session, [0, 1, 2, 3]).expect("winning guess");

    session.reset(Difficulty::Hard, 7).expect("valid reset");
    assert_eq!(session.phase(), Phase::AwaitingInput);
    assert_eq!(session.difficulty(), Difficulty::Hard);
    assert_eq!(session.revealed_secret(), None);
    assert!(session.history().iter().all(|row| *row.seeded()));

    session.new_game().expect("valid reset");
    assert_eq!(session.difficulty(), Difficulty::Hard);
    assert_eq!(session.num_colors(), 7);
}

#[test]
fn test_view_hides_secret_until_game_over() {
    let mut session = session_with_secret(Difficulty::Medium, 6, [1, 2, 3, 4]);

    let json = serde_json::to_value(session.view()).expect("serializable view");
    assert!(json["secret"].is_null());
    assert_eq!(json["attempts_remaining"], 7);
    assert_eq!(json["difficulty"], "medium");

    play(&mut session, [1, 2, 3, 4]).expect("winning guess");
    let json = serde_json::to_value(session.view()).expect("serializable view");
    assert!(!json["secret"].is_null());
    assert_eq!(json["phase"], serde_json::to_value(Phase::Won).expect("phase"));
}

#[test]
fn test_invariants_hold_through_a_game() {
    let mut session = GameSession::with_rng(
        SessionConfig::new(Difficulty::Hard, 7),
        ChaCha8Rng::seed_from_u64(21),
    )
    .expect("valid session");

    let guesses = [[0, 1, 2, 3], [3, 4, 5, 6], [6, 5, 4, 3], [1, 3, 5, 0]];
    for guess in guesses {
        if session.is_over() {
            break;
        }
        play(&mut session, guess).expect("complete guess");
        assert!(MastermindInvariants::check_all(&session.view()).is_ok());
    }
}
