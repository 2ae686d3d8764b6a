//! Feedback scoring.
//!
//! A guess is scored in two passes. The first pass marks every slot whose
//! color matches the secret at the same position as [`Mark::Exact`] and
//! consumes both sides. The second pass walks the remaining guess slots in
//! ascending order and lets each one claim the first unconsumed secret slot
//! of the same color ([`Mark::Partial`]). Anything left over is
//! [`Mark::Absent`].
//!
//! Because both passes consume in index order, a color that appears more
//! often in the guess than in the secret is only credited to its earliest
//! slots.

use crate::{CODE_LENGTH, Code};
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use tracing::instrument;

/// Classification of a single guess slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, EnumIter)]
pub enum Mark {
    /// Right color in the right slot.
    Exact,
    /// Color is in the secret, but elsewhere.
    Partial,
    /// Color has no remaining match in the secret.
    Absent,
}

/// Shape of the feedback shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeedbackMode {
    /// One mark per slot, aligned with the guess.
    Positional,
    /// Only the number of each mark.
    Aggregate,
}

/// Scores a guess against a secret of any length.
///
/// Returns one mark per guess slot. Neither side has to be free of
/// repeated colors.
#[instrument(level = "trace")]
pub fn score_slices<T: PartialEq + std::fmt::Debug>(secret: &[T], guess: &[T]) -> Vec<Mark> {
    let mut marks = vec![Mark::Absent; guess.len()];
    let mut secret_used = vec![false; secret.len()];
    let mut guess_used = vec![false; guess.len()];

    for (i, (g, s)) in guess.iter().zip(secret).enumerate() {
        if g == s {
            marks[i] = Mark::Exact;
            secret_used[i] = true;
            guess_used[i] = true;
        }
    }

    for (i, g) in guess.iter().enumerate() {
        if guess_used[i] {
            continue;
        }
        if let Some(j) = (0..secret.len()).find(|&j| !secret_used[j] && secret[j] == *g) {
            marks[i] = Mark::Partial;
            secret_used[j] = true;
        }
    }

    marks
}

/// Scores a guess against the secret.
#[instrument(level = "debug", skip(secret, guess), fields(secret = %secret, guess = %guess))]
pub fn score(secret: &Code, guess: &Code) -> Score {
    let marks = score_slices(secret.colors(), guess.colors());
    Score(std::array::from_fn(|i| marks[i]))
}

/// Positional score of a guess: one mark per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score([Mark; CODE_LENGTH]);

impl Score {
    /// Creates a score from its marks.
    pub const fn new(marks: [Mark; CODE_LENGTH]) -> Self {
        Self(marks)
    }

    /// Returns the marks in slot order.
    pub fn marks(&self) -> &[Mark; CODE_LENGTH] {
        &self.0
    }

    /// Counts the marks.
    pub fn tally(&self) -> Tally {
        Tally::from_marks(&self.0)
    }

    /// Whether every slot is exact.
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|m| *m == Mark::Exact)
    }

    /// Reduces the score to the requested feedback shape.
    pub fn feedback(self, mode: FeedbackMode) -> Feedback {
        match mode {
            FeedbackMode::Positional => Feedback::Positional(self),
            FeedbackMode::Aggregate => Feedback::Aggregate(self.tally()),
        }
    }
}

/// Number of each mark in a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_new::new)]
pub struct Tally {
    exact: usize,
    partial: usize,
    absent: usize,
}

impl Tally {
    /// Counts a slice of marks.
    pub fn from_marks(marks: &[Mark]) -> Self {
        marks.iter().fold(Self::default(), |mut tally, mark| {
            match mark {
                Mark::Exact => tally.exact += 1,
                Mark::Partial => tally.partial += 1,
                Mark::Absent => tally.absent += 1,
            }
            tally
        })
    }

    /// Slots with the right color in the right place.
    pub fn exact(&self) -> usize {
        self.exact
    }

    /// Slots with a color found elsewhere.
    pub fn partial(&self) -> usize {
        self.partial
    }

    /// Slots with no remaining match.
    pub fn absent(&self) -> usize {
        self.absent
    }

    /// Total number of marks.
    pub fn total(&self) -> usize {
        self.exact + self.partial + self.absent
    }

    /// Whether every slot of a full-length code is exact.
    pub fn is_win(&self) -> bool {
        self.exact == CODE_LENGTH
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} exact, {} partial, {} absent",
            self.exact, self.partial, self.absent
        )
    }
}

/// Feedback recorded for a guess, in the shape the difficulty allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feedback {
    /// Marks aligned with the guess slots.
    Positional(Score),
    /// Mark counts only.
    Aggregate(Tally),
}

impl Feedback {
    /// Returns the shape of this feedback.
    pub fn mode(&self) -> FeedbackMode {
        match self {
            Feedback::Positional(_) => FeedbackMode::Positional,
            Feedback::Aggregate(_) => FeedbackMode::Aggregate,
        }
    }

    /// Counts the marks, whatever the shape.
    pub fn tally(&self) -> Tally {
        match self {
            Feedback::Positional(score) => score.tally(),
            Feedback::Aggregate(tally) => *tally,
        }
    }

    /// Whether the guess matched the secret.
    pub fn is_win(&self) -> bool {
        self.tally().is_win()
    }

    /// Slots known to be exact. Empty for aggregate feedback.
    pub fn exact_slots(&self) -> Vec<usize> {
        match self {
            Feedback::Positional(score) => score
                .marks()
                .iter()
                .enumerate()
                .filter(|(_, m)| **m == Mark::Exact)
                .map(|(i, _)| i)
                .collect(),
            Feedback::Aggregate(_) => Vec::new(),
        }
    }
}
