//! Core domain types for Mastermind.

use crate::{FeedbackMode, SessionError};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};
use tracing::instrument;

/// Number of slots in every code and guess.
pub const CODE_LENGTH: usize = 4;

/// Display names for color indices, in index order.
pub const PALETTE: [&str; 7] = ["Red", "Green", "Blue", "Yellow", "Purple", "Cyan", "Orange"];

/// Fewest colors a session accepts (one per slot).
pub const MIN_COLORS: u8 = CODE_LENGTH as u8;

/// Most colors a session accepts (the palette size).
pub const MAX_COLORS: u8 = PALETTE.len() as u8;

/// Index of a color in the palette.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
#[display("{}", _0)]
pub struct ColorIndex(u8);

impl ColorIndex {
    /// Creates a color index.
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the palette name, or `"?"` past the end of the palette.
    pub fn name(self) -> &'static str {
        PALETTE.get(usize::from(self.0)).copied().unwrap_or("?")
    }

    /// Iterates over every color of a session with `num_colors` colors.
    pub fn all(num_colors: u8) -> impl Iterator<Item = ColorIndex> {
        (0..num_colors).map(ColorIndex)
    }
}

/// A fixed-length sequence of colors: the secret, or a submitted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Code([ColorIndex; CODE_LENGTH]);

impl Code {
    /// Creates a code from its colors.
    pub const fn new(colors: [ColorIndex; CODE_LENGTH]) -> Self {
        Self(colors)
    }

    /// Creates a code from raw indices.
    pub fn from_indices(indices: [u8; CODE_LENGTH]) -> Self {
        Self(indices.map(ColorIndex))
    }

    /// Returns the colors in slot order.
    pub fn colors(&self) -> &[ColorIndex; CODE_LENGTH] {
        &self.0
    }

    /// Returns the color in the given slot.
    pub fn get(&self, pos: usize) -> Option<ColorIndex> {
        self.0.get(pos).copied()
    }

    /// Checks whether the color appears anywhere in the code.
    pub fn contains(&self, color: ColorIndex) -> bool {
        self.0.contains(&color)
    }

    /// Checks that no color appears twice.
    pub fn has_distinct_colors(&self) -> bool {
        self.0
            .iter()
            .enumerate()
            .all(|(i, color)| !self.0[i + 1..].contains(color))
    }

    /// Formats the code with palette names, e.g. `Red Green Blue Yellow`.
    pub fn display(&self) -> String {
        self.0.iter().map(|c| c.name()).collect::<Vec<_>>().join(" ")
    }
}

impl TryFrom<&[ColorIndex]> for Code {
    type Error = SessionError;

    #[instrument]
    fn try_from(colors: &[ColorIndex]) -> Result<Self, Self::Error> {
        let colors: [ColorIndex; CODE_LENGTH] = colors.try_into().map_err(|_| {
            SessionError::InvalidConfiguration(format!(
                "Code must have {} colors, got {}",
                CODE_LENGTH,
                colors.len()
            ))
        })?;
        Ok(Self(colors))
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let indices = self.0.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "[{}]", indices.join(", "))
    }
}

/// Difficulty level, selecting the feedback shape and the turn policies.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Positional feedback; exact slots carry over to the next guess.
    #[default]
    Easy,
    /// Aggregate feedback only.
    Medium,
    /// Aggregate feedback, with random guesses already on the board.
    Hard,
}

impl Difficulty {
    /// Returns the feedback shape for this difficulty.
    pub fn feedback_mode(self) -> FeedbackMode {
        match self {
            Self::Easy => FeedbackMode::Positional,
            Self::Medium | Self::Hard => FeedbackMode::Aggregate,
        }
    }

    /// Whether exact slots are copied into the next buffer.
    pub fn auto_fills_exact(self) -> bool {
        matches!(self, Self::Easy)
    }

    /// Whether the history is pre-seeded with random guesses.
    pub fn pre_seeds(self) -> bool {
        matches!(self, Self::Hard)
    }

    /// Returns the display label for this difficulty.
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_code_from_slice_checks_length() {
        let colors = [ColorIndex::new(0), ColorIndex::new(1), ColorIndex::new(2)];
        assert!(matches!(
            Code::try_from(&colors[..]),
            Err(SessionError::InvalidConfiguration(_))
        ));

        let colors = [0, 1, 2, 3].map(ColorIndex::new);
        assert_eq!(
            Code::try_from(&colors[..]),
            Ok(Code::from_indices([0, 1, 2, 3]))
        );
    }

    #[test]
    fn test_distinct_colors() {
        assert!(Code::from_indices([0, 1, 2, 3]).has_distinct_colors());
        assert!(!Code::from_indices([0, 1, 0, 3]).has_distinct_colors());
    }

    #[test]
    fn test_code_display() {
        let code = Code::from_indices([0, 2, 4, 6]);
        assert_eq!(code.to_string(), "[0, 2, 4, 6]");
        assert_eq!(code.display(), "Red Blue Purple Orange");
    }

    #[test]
    fn test_difficulty_parses_case_insensitive() {
        assert_eq!(Difficulty::from_str("HARD"), Ok(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("medium"), Ok(Difficulty::Medium));
        assert!(Difficulty::from_str("nightmare").is_err());
        assert_eq!(Difficulty::Easy.to_string(), "easy");
    }

    #[test]
    fn test_difficulty_policies() {
        assert_eq!(Difficulty::Easy.feedback_mode(), FeedbackMode::Positional);
        assert_eq!(Difficulty::Medium.feedback_mode(), FeedbackMode::Aggregate);
        assert_eq!(Difficulty::Hard.feedback_mode(), FeedbackMode::Aggregate);
        assert!(Difficulty::Easy.auto_fills_exact());
        assert!(!Difficulty::Medium.pre_seeds());
        assert!(Difficulty::Hard.pre_seeds());
    }
}
