//! The in-progress guess.

use crate::{CODE_LENGTH, Code, ColorIndex, Mark, Score};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Direction for cursor movement and color cycling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Right, or the next color.
    Forward,
    /// Left, or the previous color.
    Backward,
}

impl Direction {
    /// Steps `index` one place in this direction, wrapping within `len`.
    fn step(self, index: usize, len: usize) -> usize {
        match self {
            Direction::Forward => (index + 1) % len,
            Direction::Backward => (index + len - 1) % len,
        }
    }
}

/// Guess under construction: one optional color per slot, plus a cursor.
///
/// A color occupies at most one slot. Setting a color that is already
/// placed elsewhere moves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GuessBuffer {
    slots: [Option<ColorIndex>; CODE_LENGTH],
    cursor: usize,
}

impl GuessBuffer {
    /// Creates an empty buffer with the cursor on the first slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer holding the exact slots of a scored guess.
    #[instrument]
    pub fn with_exact_slots(guess: &Code, score: &Score) -> Self {
        let mut buffer = Self::new();
        for (slot, (color, mark)) in buffer
            .slots
            .iter_mut()
            .zip(guess.colors().iter().zip(score.marks()))
        {
            if *mark == Mark::Exact {
                *slot = Some(*color);
            }
        }
        buffer
    }

    /// Returns the slots in order.
    pub fn slots(&self) -> &[Option<ColorIndex>; CODE_LENGTH] {
        &self.slots
    }

    /// Returns the color in a slot, `None` if empty or out of range.
    pub fn get(&self, pos: usize) -> Option<ColorIndex> {
        self.slots.get(pos).copied().flatten()
    }

    /// Returns the cursor slot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether every slot holds a color.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Whether every slot is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Converts a complete buffer into a code.
    pub fn to_code(&self) -> Option<Code> {
        let mut colors = [ColorIndex::new(0); CODE_LENGTH];
        for (out, slot) in colors.iter_mut().zip(self.slots) {
            *out = slot?;
        }
        Some(Code::new(colors))
    }

    /// Places a color in a slot, clearing any other slot holding it.
    ///
    /// Returns `false` if the slot is out of range.
    #[instrument(skip(self))]
    pub fn set(&mut self, pos: usize, color: ColorIndex) -> bool {
        if pos >= CODE_LENGTH {
            return false;
        }
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if i != pos && *slot == Some(color) {
                trace!(from = i, to = pos, "Moving color");
                *slot = None;
            }
        }
        self.slots[pos] = Some(color);
        true
    }

    /// Empties a slot. Returns `false` if the slot is out of range.
    #[instrument(skip(self))]
    pub fn clear(&mut self, pos: usize) -> bool {
        match self.slots.get_mut(pos) {
            Some(slot) => {
                *slot = None;
                true
            }
            None => false,
        }
    }

    /// Colors a slot may cycle through: empty first, then every color not
    /// used in another slot, in index order.
    pub fn candidates(&self, pos: usize, num_colors: u8) -> Vec<Option<ColorIndex>> {
        let used_elsewhere = self
            .slots
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != pos)
            .filter_map(|(_, slot)| *slot)
            .collect::<Vec<_>>();

        std::iter::once(None)
            .chain(
                ColorIndex::all(num_colors)
                    .filter(|c| !used_elsewhere.contains(c))
                    .map(Some),
            )
            .collect()
    }

    /// Advances a slot to the next candidate color in `direction`.
    ///
    /// Returns `false` if the slot is out of range.
    #[instrument(skip(self))]
    pub fn cycle(&mut self, pos: usize, direction: Direction, num_colors: u8) -> bool {
        if pos >= CODE_LENGTH {
            return false;
        }
        let candidates = self.candidates(pos, num_colors);
        let current = candidates
            .iter()
            .position(|c| *c == self.slots[pos])
            .unwrap_or(0);
        self.slots[pos] = candidates[direction.step(current, candidates.len())];
        true
    }

    /// Moves the cursor one slot, wrapping at the ends.
    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor = direction.step(self.cursor, CODE_LENGTH);
    }

    /// Puts the cursor on a slot. Returns `false` if the slot is out of range.
    pub fn focus(&mut self, pos: usize) -> bool {
        if pos >= CODE_LENGTH {
            return false;
        }
        self.cursor = pos;
        true
    }

    /// Whether no color appears in two slots.
    pub fn has_distinct_colors(&self) -> bool {
        let filled = self.slots.iter().flatten().collect::<Vec<_>>();
        filled
            .iter()
            .enumerate()
            .all(|(i, color)| !filled[i + 1..].contains(color))
    }
}
