//! Game session: the secret, the board and the guess being composed.

use crate::contracts::{Contract, SubmitContract};
use crate::invariants::{InvariantSet, MastermindInvariants};
use crate::seeding::seed_rows;
use crate::{
    Code, CodeGenerator, ColorIndex, Difficulty, Direction, GuessBuffer, HistoryEntry, Phase,
    SessionConfig, SessionError, SessionView, score,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument, warn};

/// A single game of Mastermind.
///
/// The session is the only owner of the secret. Presentation layers read it
/// through the query methods or [`GameSession::view`] and change it only
/// through the command methods.
///
/// Buffer commands issued after the game is over are ignored.
pub struct GameSession<R = StdRng> {
    config: SessionConfig,
    secret: Code,
    history: Vec<HistoryEntry>,
    buffer: GuessBuffer,
    player_attempts: usize,
    phase: Phase,
    rng: R,
}

impl GameSession<StdRng> {
    /// Starts a session with an OS-seeded random source.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidConfiguration` if the config does not validate.
    #[instrument]
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }
}

impl<R: Rng> GameSession<R> {
    /// Starts a session drawing its secret and seed rows from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidConfiguration` if the config does not validate.
    #[instrument(skip(rng))]
    pub fn with_rng(config: SessionConfig, mut rng: R) -> Result<Self, SessionError> {
        config.validate()?;
        let secret = CodeGenerator::new(&mut rng).generate_code(*config.num_colors())?;
        Ok(Self::start(config, secret, rng))
    }

    /// Starts a session against a known secret.
    ///
    /// Hard-mode seed rows are still drawn from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidColorIndex` if the secret uses a color
    /// outside the session, and `SessionError::InvalidConfiguration` if the
    /// config does not validate or the secret repeats a color.
    #[instrument(skip(secret, rng))]
    pub fn with_secret(config: SessionConfig, secret: Code, rng: R) -> Result<Self, SessionError> {
        config.validate()?;
        let num_colors = *config.num_colors();
        if let Some(&color) = secret.colors().iter().find(|c| c.index() >= num_colors) {
            return Err(SessionError::InvalidColorIndex { color, num_colors });
        }
        if !secret.has_distinct_colors() {
            return Err(SessionError::InvalidConfiguration(
                "Secret must not repeat a color".to_string(),
            ));
        }
        Ok(Self::start(config, secret, rng))
    }

    fn start(config: SessionConfig, secret: Code, rng: R) -> Self {
        let mut session = Self {
            config,
            secret,
            history: Vec::new(),
            buffer: GuessBuffer::new(),
            player_attempts: 0,
            phase: Phase::AwaitingInput,
            rng,
        };
        session.restart(secret);
        session
    }

    fn restart(&mut self, secret: Code) {
        debug!(%secret, "New secret");
        self.secret = secret;
        self.history.clear();
        self.buffer = GuessBuffer::new();
        self.player_attempts = 0;
        self.phase = Phase::AwaitingInput;

        if self.config.difficulty().pre_seeds() {
            self.history = seed_rows(&self.secret, &self.config, &mut self.rng);
        }

        debug_assert!(
            MastermindInvariants::check_all(&self.view()).is_ok(),
            "Fresh session violates invariants"
        );
        info!(
            difficulty = %self.config.difficulty(),
            num_colors = *self.config.num_colors(),
            seeded = self.history.len(),
            "Game started"
        );
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Starts a new game with a fresh secret.
    ///
    /// On error the current game is left untouched.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidConfiguration` if the color count is unusable.
    #[instrument(skip(self))]
    pub fn reset(&mut self, difficulty: Difficulty, num_colors: u8) -> Result<(), SessionError> {
        let config = self
            .config
            .with_difficulty(difficulty)
            .with_num_colors(num_colors);
        config.validate()?;
        let secret = CodeGenerator::new(&mut self.rng).generate_code(num_colors)?;
        self.config = config;
        self.restart(secret);
        Ok(())
    }

    /// Starts a new game with the current difficulty and color count.
    ///
    /// # Errors
    ///
    /// Never fails for a session that was built successfully.
    pub fn new_game(&mut self) -> Result<(), SessionError> {
        self.reset(*self.config.difficulty(), *self.config.num_colors())
    }

    /// Places a color in a buffer slot.
    ///
    /// If the color is already in another slot, that slot is cleared.
    /// Out-of-range slots are ignored.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidColorIndex` if the color is outside the session.
    #[instrument(skip(self))]
    pub fn set_buffer_color(&mut self, pos: usize, color: ColorIndex) -> Result<(), SessionError> {
        if self.phase.is_over() {
            debug!("Game over, ignoring color");
            return Ok(());
        }
        let num_colors = *self.config.num_colors();
        if color.index() >= num_colors {
            warn!("Color outside session");
            return Err(SessionError::InvalidColorIndex { color, num_colors });
        }
        if !self.buffer.set(pos, color) {
            warn!("Slot out of range");
        }
        Ok(())
    }

    /// Places a color in the slot under the cursor.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidColorIndex` if the color is outside the session.
    pub fn select_color(&mut self, color: ColorIndex) -> Result<(), SessionError> {
        self.set_buffer_color(self.buffer.cursor(), color)
    }

    /// Empties a buffer slot.
    #[instrument(skip(self))]
    pub fn clear_buffer_slot(&mut self, pos: usize) {
        if self.phase.is_over() {
            return;
        }
        if !self.buffer.clear(pos) {
            warn!("Slot out of range");
        }
    }

    /// Empties the slot under the cursor.
    pub fn clear_cursor_slot(&mut self) {
        self.clear_buffer_slot(self.buffer.cursor());
    }

    /// Moves the cursor to a slot and steps its color through the colors
    /// not used elsewhere, with empty as the first candidate.
    #[instrument(skip(self))]
    pub fn cycle_buffer_slot(&mut self, pos: usize, direction: Direction) {
        if self.phase.is_over() {
            return;
        }
        if !self.buffer.focus(pos) {
            warn!("Slot out of range");
            return;
        }
        self.buffer.cycle(pos, direction, *self.config.num_colors());
    }

    /// Moves the cursor one slot, wrapping at the ends.
    pub fn move_cursor(&mut self, direction: Direction) {
        if !self.phase.is_over() {
            self.buffer.move_cursor(direction);
        }
    }

    /// Puts the cursor on a slot. Out-of-range slots are ignored.
    pub fn focus_slot(&mut self, pos: usize) {
        if !self.phase.is_over() && !self.buffer.focus(pos) {
            warn!(pos, "Slot out of range");
        }
    }

    /// Scores the buffer and records it on the board.
    ///
    /// Returns the phase after the guess. `Phase::Won` is returned by exactly
    /// one call per game: the one that found the secret.
    ///
    /// On easy difficulty the next buffer starts with the exact slots of
    /// this guess filled in.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::GameOver` after a win or loss and
    /// `SessionError::IncompleteGuess` if a slot is empty. Neither changes
    /// the session.
    #[instrument(skip(self), fields(difficulty = %self.config.difficulty()))]
    pub fn submit_guess(&mut self) -> Result<Phase, SessionError> {
        let before = self.view();
        SubmitContract::pre(&before, &self.buffer)?;
        let guess = self.buffer.to_code().ok_or(SessionError::IncompleteGuess)?;

        let result = score(&self.secret, &guess);
        let feedback = result.feedback(self.config.difficulty().feedback_mode());
        self.history.push(HistoryEntry::new(guess, feedback, false));
        self.player_attempts += 1;
        self.buffer = GuessBuffer::new();

        if result.is_win() {
            self.phase = Phase::Won;
            info!(attempts = self.attempts_used(), "Code broken");
        } else if self.attempts_used() >= *self.config.max_guesses() {
            self.phase = Phase::Lost;
            info!(secret = %self.secret, "Out of guesses");
        } else {
            if self.config.difficulty().auto_fills_exact() {
                self.buffer = GuessBuffer::with_exact_slots(&guess, &result);
            }
            debug!(
                %guess,
                tally = %result.tally(),
                remaining = self.attempts_remaining(),
                "Guess recorded"
            );
        }

        #[cfg(debug_assertions)]
        SubmitContract::post(&before, &self.view())?;

        Ok(self.phase)
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Returns the configuration in play.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the difficulty in play.
    pub fn difficulty(&self) -> Difficulty {
        *self.config.difficulty()
    }

    /// Returns the size of the color alphabet.
    pub fn num_colors(&self) -> u8 {
        *self.config.num_colors()
    }

    /// Returns the lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true once the game is won or lost.
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Returns true if the secret was found.
    pub fn is_won(&self) -> bool {
        self.phase.is_won()
    }

    /// Returns the board rows, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Returns the guess under construction.
    pub fn buffer(&self) -> &GuessBuffer {
        &self.buffer
    }

    /// Returns the slot under the cursor.
    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    /// Returns the number of board rows used.
    ///
    /// Seeded rows count unless the config says otherwise.
    pub fn attempts_used(&self) -> usize {
        if *self.config.seeded_rows_count() {
            self.history.len()
        } else {
            self.player_attempts
        }
    }

    /// Returns the number of board rows left.
    pub fn attempts_remaining(&self) -> usize {
        self.config.max_guesses().saturating_sub(self.attempts_used())
    }

    /// Returns the secret once the game is over.
    pub fn revealed_secret(&self) -> Option<Code> {
        self.phase.is_over().then_some(self.secret)
    }

    /// Takes a snapshot of everything a renderer may read.
    pub fn view(&self) -> SessionView {
        SessionView::new(
            *self.config.difficulty(),
            *self.config.num_colors(),
            self.phase,
            self.history.clone(),
            self.buffer,
            *self.config.max_guesses(),
            self.attempts_used(),
            self.revealed_secret(),
        )
    }
}

impl<R> std::fmt::Debug for GameSession<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("config", &self.config)
            .field("phase", &self.phase)
            .field("history", &self.history)
            .field("buffer", &self.buffer)
            .finish_non_exhaustive()
    }
}
