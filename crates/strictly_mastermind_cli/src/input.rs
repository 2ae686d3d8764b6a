//! Line commands typed at the prompt.
//!
//! Each command mirrors one key of the graphical game: digits pick a color
//! for the slot under the cursor, `<` and `>` move the cursor, an empty
//! line submits.

use derive_more::{Display, Error};
use strictly_mastermind::{CODE_LENGTH, Code, ColorIndex, Difficulty, Direction};

/// A parsed prompt command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// Put a color in the slot under the cursor.
    Select(ColorIndex),
    /// Empty the slot under the cursor.
    Clear,
    /// Move the cursor.
    Move(Direction),
    /// Cycle a slot's color.
    Cycle {
        /// Zero-based slot.
        slot: usize,
        /// Cycle direction.
        direction: Direction,
    },
    /// Score the buffer.
    Submit,
    /// Start over with the same settings.
    NewGame,
    /// Start over at another difficulty.
    SetDifficulty(Difficulty),
    /// Start over with another color count.
    SetColors(u8),
    /// Show the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Not a known command.
    #[display("Unknown command '{}' (type 'help')", input)]
    Unknown {
        /// The offending text.
        input: String,
    },
    /// Slot number missing or outside 1..=4.
    #[display("Slot must be 1 to {}, got '{}'", CODE_LENGTH, input)]
    BadSlot {
        /// The offending text.
        input: String,
    },
    /// Not a difficulty name.
    #[display("Difficulty must be easy, medium or hard, got '{}'", input)]
    BadDifficulty {
        /// The offending text.
        input: String,
    },
    /// Not a number.
    #[display("Expected a number, got '{}'", input)]
    BadNumber {
        /// The offending text.
        input: String,
    },
    /// Not a code of four color numbers.
    #[display("Expected {} color numbers such as 1234, got '{}'", CODE_LENGTH, input)]
    BadCode {
        /// The offending text.
        input: String,
    },
}

/// Help text listing every prompt command.
pub const HELP: &str = "\
Commands:
  1-7          put that color in the slot under the cursor
  0, clear     empty the slot under the cursor
  <, >         move the cursor left or right
  +N, -N       cycle slot N (1-4) to the next or previous free color
  (empty), submit
               score the guess
  new          start a new game
  difficulty D start over at easy, medium or hard
  colors N     start over with N colors (4-7)
  help         show this list
  quit         leave";

/// Parses one line of input.
pub fn parse_command(line: &str) -> Result<InputCommand, InputError> {
    let line = line.trim();
    let mut words = line.split_whitespace();
    let head = words.next().unwrap_or("");
    let arg = words.next();

    let command = match head.to_ascii_lowercase().as_str() {
        "" | "submit" | "s" => InputCommand::Submit,
        "0" | "clear" | "c" => InputCommand::Clear,
        "<" | "left" => InputCommand::Move(Direction::Backward),
        ">" | "right" => InputCommand::Move(Direction::Forward),
        "new" | "r" => InputCommand::NewGame,
        "help" | "?" | "h" => InputCommand::Help,
        "quit" | "q" | "exit" => InputCommand::Quit,
        "difficulty" | "d" => {
            let name = arg.unwrap_or("");
            let difficulty = name.parse().map_err(|_| InputError::BadDifficulty {
                input: name.to_string(),
            })?;
            InputCommand::SetDifficulty(difficulty)
        }
        "colors" => {
            let count = arg.unwrap_or("");
            let n = count.parse().map_err(|_| InputError::BadNumber {
                input: count.to_string(),
            })?;
            InputCommand::SetColors(n)
        }
        word => {
            if let Some(rest) = word.strip_prefix('+') {
                InputCommand::Cycle {
                    slot: parse_slot(rest)?,
                    direction: Direction::Forward,
                }
            } else if let Some(rest) = word.strip_prefix('-') {
                InputCommand::Cycle {
                    slot: parse_slot(rest)?,
                    direction: Direction::Backward,
                }
            } else if let Some(color) = parse_color_key(word) {
                InputCommand::Select(color)
            } else {
                return Err(InputError::Unknown {
                    input: line.to_string(),
                });
            }
        }
    };
    Ok(command)
}

/// Maps a one-based color key to its color.
fn parse_color_key(word: &str) -> Option<ColorIndex> {
    match word.parse::<u8>() {
        Ok(n @ 1..=9) => Some(ColorIndex::new(n - 1)),
        _ => None,
    }
}

fn parse_slot(text: &str) -> Result<usize, InputError> {
    match text.parse::<usize>() {
        Ok(n) if (1..=CODE_LENGTH).contains(&n) => Ok(n - 1),
        _ => Err(InputError::BadSlot {
            input: text.to_string(),
        }),
    }
}

/// Parses a code written as one-based color numbers, e.g. `1234` or `1,2,3,4`.
pub fn parse_code(text: &str) -> Result<Code, InputError> {
    let bad = || InputError::BadCode {
        input: text.to_string(),
    };
    let colors = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| {
            c.to_digit(10)
                .and_then(|d| parse_color_key(&d.to_string()))
                .ok_or_else(bad)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Code::try_from(colors.as_slice()).map_err(|_| bad())
}
