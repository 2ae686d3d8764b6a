//! Seeded rows stay harmless.

use super::Invariant;
use crate::SessionView;
use crate::seeding::passes_filter;

/// Invariant: seeded rows come before every player row, pass the seed
/// filter, and never repeat a guess.
pub struct SeedRowsInvariant;

impl Invariant<SessionView> for SeedRowsInvariant {
    fn holds(view: &SessionView) -> bool {
        let history = view.history();
        let seeded = history.iter().take_while(|entry| *entry.seeded()).count();

        let prefix_only = history[seeded..].iter().all(|entry| !entry.seeded());
        let filtered = history[..seeded]
            .iter()
            .all(|entry| passes_filter(&entry.feedback().tally()));
        let unique = history[..seeded].iter().enumerate().all(|(i, entry)| {
            history[..i]
                .iter()
                .all(|earlier| earlier.guess() != entry.guess())
        });

        prefix_only && filtered && unique
    }

    fn description() -> &'static str {
        "Seeded rows precede player rows, pass the seed filter and are unique"
    }
}
