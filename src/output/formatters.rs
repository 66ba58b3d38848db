//! Formatting utilities for terminal output

use colored::{ColoredString, Colorize};

use crate::core::{Evaluation, LetterOutcome, Word};

/// Format a scored guess as a row of colored letter tiles
#[must_use]
pub fn colored_row(word: &Word, evaluation: &Evaluation) -> String {
    word.letters()
        .zip(evaluation.outcomes().iter())
        .map(|(letter, outcome)| colored_tile(letter, *outcome).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a single letter tile with its outcome color
#[must_use]
pub fn colored_tile(letter: char, outcome: LetterOutcome) -> ColoredString {
    let tile = format!(" {} ", letter.to_ascii_uppercase());
    match outcome {
        LetterOutcome::Green => tile.black().on_green(),
        LetterOutcome::Yellow => tile.black().on_yellow(),
        LetterOutcome::Gray => tile.white().on_bright_black(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn colored_row_has_all_letters_in_order() {
        let word = Word::new("crane").unwrap();
        let row = colored_row(&word, &Evaluation::WIN);

        for letter in ["C", "R", "A", "N", "E"] {
            assert!(row.contains(letter));
        }
    }

    #[test]
    fn colored_tile_uppercases_letter() {
        let tile = colored_tile('c', LetterOutcome::Green);
        assert!(tile.to_string().contains('C'));
    }
}
