//! One-shot scoring of a guess against a given secret.

use crate::input::parse_code;
use crate::render::render_feedback;
use strictly_mastermind::{FeedbackMode, score};
use tracing::instrument;

/// Scores `guess` against `secret` and describes the result in both shapes.
///
/// Repeated colors are accepted here; scoring consumes duplicates in slot
/// order.
#[instrument]
pub fn score_report(secret: &str, guess: &str) -> anyhow::Result<String> {
    let secret = parse_code(secret)?;
    let guess = parse_code(guess)?;
    let result = score(&secret, &guess);

    Ok([
        format!("Secret:     {}", secret.display()),
        format!("Guess:      {}", guess.display()),
        format!(
            "Positional: {}",
            render_feedback(&result.feedback(FeedbackMode::Positional))
        ),
        format!("Aggregate:  {}", result.tally()),
    ]
    .join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lists_both_shapes() {
        let report = score_report("1234", "1325").expect("valid codes");
        assert!(report.contains("Positional: X o o ."));
        assert!(report.contains("Aggregate:  1 exact, 2 partial, 1 absent"));
    }

    #[test]
    fn test_report_rejects_bad_code() {
        assert!(score_report("12", "1234").is_err());
    }
}
