//! Hard-mode seed rows.
//!
//! Before the first turn of a hard game the board is given a few random
//! guesses with their feedback. The guesses are not chosen against the
//! player, but a row that nearly solves the code would make the game
//! trivial, so candidates are filtered.

use crate::{Code, CodeGenerator, HistoryEntry, SessionConfig, Tally, score};
use rand::Rng;
use tracing::{info, instrument, trace};

/// Most exact marks a seed row may show.
pub const MAX_SEED_EXACT: usize = 2;

/// Most exact plus partial marks a seed row may show.
pub const MAX_SEED_HITS: usize = 3;

/// Whether a seed row's feedback reveals little enough to keep.
pub fn passes_filter(tally: &Tally) -> bool {
    tally.exact() <= MAX_SEED_EXACT && tally.exact() + tally.partial() <= MAX_SEED_HITS
}

/// Draws seed rows for a secret.
///
/// Candidates are generated like secrets, scored against `secret`, and kept
/// when they pass [`passes_filter`] and are not already on the board.
/// Stops after `seed_rows` rows or `seed_attempts` candidates, whichever
/// comes first, so fewer rows may be returned.
#[instrument(skip(secret, rng))]
pub fn seed_rows<R: Rng>(secret: &Code, config: &SessionConfig, rng: &mut R) -> Vec<HistoryEntry> {
    let target = *config.seed_rows();
    let max_attempts = *config.seed_attempts();
    let mode = config.difficulty().feedback_mode();

    let mut generator = CodeGenerator::new(rng);
    let mut rows: Vec<HistoryEntry> = Vec::with_capacity(target);
    let mut attempts = 0;

    while rows.len() < target && attempts < max_attempts {
        attempts += 1;

        let Ok(guess) = generator.generate_code(*config.num_colors()) else {
            break;
        };
        if rows.iter().any(|row| *row.guess() == guess) {
            trace!(%guess, "Duplicate seed candidate");
            continue;
        }

        let result = score(secret, &guess);
        if passes_filter(&result.tally()) {
            rows.push(HistoryEntry::new(guess, result.feedback(mode), true));
        } else {
            trace!(%guess, tally = %result.tally(), "Seed candidate reveals too much");
        }
    }

    info!(rows = rows.len(), attempts, "Seeded board");
    rows
}
