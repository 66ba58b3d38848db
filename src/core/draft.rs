//! In-progress guess buffer
//!
//! The draft is the row of 5 cells the player is typing into. Each cell holds
//! at most one lowercase letter. Typing a letter fills the focused cell and
//! advances focus; backspace clears the focused cell if it has a letter,
//! otherwise it retreats to the previous cell and clears that one.
//!
//! The draft is only ever cleared by an accepted guess or a session reset,
//! never by a rejected one, so the player can correct a typo in place.

use super::word::{WORD_LEN, Word, WordError};

/// Mutable 5-cell guess entry buffer with a focus position
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GuessDraft {
    cells: [Option<char>; WORD_LEN],
    focus: usize,
}

impl GuessDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell contents, in order
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[Option<char>; WORD_LEN] {
        &self.cells
    }

    /// Index of the focused cell (0-4; stays at 4 once the row is full)
    #[inline]
    #[must_use]
    pub const fn focus(&self) -> usize {
        self.focus
    }

    /// Check whether all 5 cells are filled
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Check whether no cell is filled
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Type a letter into the focused cell
    ///
    /// Only ASCII letters are accepted (uppercase is lowered); anything else
    /// is ignored. On success focus advances to the next cell.
    pub fn type_letter(&mut self, ch: char) {
        if !ch.is_ascii_alphabetic() {
            return;
        }

        let ch = ch.to_ascii_lowercase();

        // Find the cell to fill: the focused one if empty, otherwise nothing
        // (a full row ignores further letters).
        if self.cells[self.focus].is_none() {
            self.cells[self.focus] = Some(ch);
            if self.focus < WORD_LEN - 1 {
                self.focus += 1;
            }
        }
    }

    /// Erase a letter
    ///
    /// Clears the focused cell if it holds a letter; otherwise moves focus to
    /// the previous cell and clears that one. Backspace on an empty first
    /// cell does nothing.
    pub fn backspace(&mut self) {
        if self.cells[self.focus].is_some() {
            self.cells[self.focus] = None;
        } else if self.focus > 0 {
            self.focus -= 1;
            self.cells[self.focus] = None;
        }
    }

    /// Reset all cells to empty and focus to the first cell
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Convert a complete draft into a `Word`
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` with the filled-cell count if any
    /// cell is still empty.
    pub fn to_word(&self) -> Result<Word, WordError> {
        let filled = self.cells.iter().filter(|c| c.is_some()).count();
        if filled != WORD_LEN {
            return Err(WordError::InvalidLength(filled));
        }

        let text: String = self.cells.iter().filter_map(|&c| c).collect();
        Word::new(text)
    }
}
