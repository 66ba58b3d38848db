//! Display functions for game state

use colored::Colorize;

use super::formatters::colored_row;
use crate::api::StatusResponse;
use crate::core::Word;
use crate::session::{GuessRecord, Session};

/// Print the guess history as a board of colored rows
pub fn print_board(history: &[GuessRecord]) {
    for (i, record) in history.iter().enumerate() {
        println!(
            "  {} {}  {}",
            format!("{}.", i + 1).bright_black(),
            colored_row(&record.word, &record.evaluation),
            record.evaluation.to_emoji()
        );
    }
}

/// Print the end-of-game banner for a finished session
pub fn print_game_over(session: &Session) {
    println!("\n{}", "═".repeat(40).bright_cyan());
    if session.win() {
        let turns = session.history().len();
        println!(
            "{}",
            format!(
                " 🎉 You won in {} {}!",
                turns,
                if turns == 1 { "guess" } else { "guesses" }
            )
            .bright_green()
            .bold()
        );
    } else {
        println!("{}", " ❌ Game over! Out of attempts.".red().bold());
    }
    println!("{}", "═".repeat(40).bright_cyan());
}

/// Print a one-shot status snapshot from the server
pub fn print_status(game_id: &str, status: &StatusResponse) {
    println!("\nGame {game_id}");
    println!("{}", "─".repeat(40).cyan());

    if status.guesses.is_empty() {
        println!("  (no guesses yet)");
    } else {
        for (i, scored) in status.guesses.iter().enumerate() {
            // Status rows come back as plain strings; re-validate for display
            match Word::new(&scored.guess) {
                Ok(word) => println!(
                    "  {} {}  {}",
                    format!("{}.", i + 1).bright_black(),
                    colored_row(&word, &scored.result),
                    scored.result.to_emoji()
                ),
                Err(_) => println!("  {}. {}", i + 1, scored.guess),
            }
        }
    }

    println!("\n  Attempts left: {}", status.attempts_left);
    if status.over {
        let verdict = if status.win {
            "won".green().bold()
        } else {
            "over".red().bold()
        };
        println!("  Game is {verdict}");
    } else {
        println!("  Game is {}", "in progress".yellow());
    }
}
