//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI, for terminals where the alternate
//! screen is unwanted (pipes, dumb terminals, accessibility tools).

use std::io::{self, Write};

use colored::Colorize;

use crate::api::GameApi;
use crate::core::WORD_LEN;
use crate::output::formatters::colored_row;
use crate::output::{print_board, print_game_over};
use crate::session::{GuessRecord, SessionController, SubmitError};

/// Run the simple interactive game loop
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input. Server and
/// validation failures are printed and the loop continues; they never abort
/// the game.
pub fn run_simple<A: GameApi>(api: A) -> anyhow::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Terminal Client                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the 5-letter word. The server scores every guess:");
    println!("  🟩 letter in the right spot");
    println!("  🟨 letter in the word, wrong spot");
    println!("  ⬜ letter not in the word\n");
    println!("Commands: 'quit' to exit, 'new' to start over\n");

    let mut controller = SessionController::new(api);

    // First start; offer retries since nothing works without a game
    while let Err(err) = controller.start() {
        println!("{}", format!("❌ Could not start a game: {err}").red());
        if !ask_yes_no("Try again? (yes/no)")? {
            return Ok(());
        }
    }

    loop {
        if controller.session().is_over() {
            print_board(controller.session().history());
            print_game_over(controller.session());

            if !ask_yes_no("\nPlay again? (yes/no)")? {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            if let Err(err) = controller.start() {
                // Old session stays finished; loop shows the banner again
                println!("{}", format!("❌ Could not start a game: {err}").red());
            } else {
                println!("\n🔄 New game started!\n");
            }
            continue;
        }

        println!("────────────────────────────────────────────");
        println!(
            "Attempts left: {}",
            controller
                .session()
                .attempts_left()
                .to_string()
                .bright_yellow()
                .bold()
        );
        print_board(controller.session().history());

        let input = get_user_input("Enter guess")?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                if let Err(err) = controller.start() {
                    println!("{}", format!("❌ Could not start a game: {err}").red());
                } else {
                    println!("\n🔄 New game started!\n");
                }
            }
            guess => match enter_line(&mut controller, guess) {
                Ok(record) => {
                    println!(
                        "\n  {}  {}\n",
                        colored_row(&record.word, &record.evaluation),
                        record.evaluation.to_emoji()
                    );
                }
                Err(err) => {
                    // Each line is retyped in full, so stale drafts
                    // (controller keeps them for cell editing) go away
                    controller.discard_draft();
                    println!("{}", format!("❌ {err}").red());
                }
            },
        }
    }
}

/// Type one line into the draft and submit it
///
/// The whole line must be exactly 5 characters before the draft is touched;
/// anything longer (or shorter) is a local validation error, never a
/// truncated submission. The draft's own allow-list still rejects lines of
/// the right length that contain non-letters.
fn enter_line<A: GameApi>(
    controller: &mut SessionController<A>,
    line: &str,
) -> Result<GuessRecord, SubmitError> {
    if line.chars().count() != WORD_LEN {
        return Err(SubmitError::Incomplete);
    }

    controller.discard_draft();
    for ch in line.chars() {
        controller.type_letter(ch);
    }

    controller.submit().map(Clone::clone)
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> io::Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}

fn ask_yes_no(prompt: &str) -> io::Result<bool> {
    Ok(matches!(
        get_user_input(prompt)?.to_lowercase().as_str(),
        "yes" | "y"
    ))
}
