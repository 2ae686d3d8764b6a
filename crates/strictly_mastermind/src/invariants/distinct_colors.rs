//! No color appears twice in a guess.

use super::Invariant;
use crate::SessionView;

/// Invariant: every recorded guess and the buffer use distinct colors.
///
/// Uniqueness is enforced when colors are entered, never when scoring.
pub struct DistinctColorsInvariant;

impl Invariant<SessionView> for DistinctColorsInvariant {
    fn holds(view: &SessionView) -> bool {
        view.history()
            .iter()
            .all(|entry| entry.guess().has_distinct_colors())
            && view.buffer().has_distinct_colors()
    }

    fn description() -> &'static str {
        "Every guess uses distinct colors"
    }
}
