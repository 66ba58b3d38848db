//! Per-letter guess feedback
//!
//! The server scores every guess and returns one outcome tag per letter:
//! - `green`: letter in the correct position
//! - `yellow`: letter present but in the wrong position
//! - `gray`: letter not in the word
//!
//! The tag vocabulary is fixed by the server contract; anything else fails
//! deserialization rather than being silently mapped.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::word::WORD_LEN;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterOutcome {
    /// Correct letter, correct position
    Green,
    /// Correct letter, wrong position
    Yellow,
    /// Letter not in the word
    Gray,
}

impl LetterOutcome {
    /// Emoji square for this outcome
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Gray => '⬜',
        }
    }
}

/// Server feedback for a whole guess: one outcome per letter, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Evaluation([LetterOutcome; WORD_LEN]);

impl Evaluation {
    /// All greens (winning guess)
    pub const WIN: Self = Self([LetterOutcome::Green; WORD_LEN]);

    #[must_use]
    pub const fn new(outcomes: [LetterOutcome; WORD_LEN]) -> Self {
        Self(outcomes)
    }

    /// Per-position outcomes, in guess order
    #[inline]
    #[must_use]
    pub const fn outcomes(&self) -> &[LetterOutcome; WORD_LEN] {
        &self.0
    }

    /// Check if every letter came back green
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&o| o == LetterOutcome::Green)
    }

    /// Count the number of green squares
    #[must_use]
    pub fn count_greens(&self) -> usize {
        self.0.iter().filter(|&&o| o == LetterOutcome::Green).count()
    }

    /// Count the number of yellow squares
    #[must_use]
    pub fn count_yellows(&self) -> usize {
        self.0
            .iter()
            .filter(|&&o| o == LetterOutcome::Yellow)
            .count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|o| o.emoji()).collect()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}
