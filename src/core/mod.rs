//! Core domain types for the Wordle client
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure and directly testable.

mod draft;
mod outcome;
mod word;

pub use draft::GuessDraft;
pub use outcome::{Evaluation, LetterOutcome};
pub use word::{WORD_LEN, Word, WordError};
