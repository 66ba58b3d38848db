//! TUI application state and logic

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

use crate::api::GameApi;
use crate::session::{MAX_ATTEMPTS, SessionController};

/// What the keyboard currently controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Typing letters into the draft row
    Guessing,
    /// Game finished; only "play again" and "quit" are live
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; MAX_ATTEMPTS as usize + 1],
}

/// Application state
pub struct App<A: GameApi> {
    pub controller: SessionController<A>,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl<A: GameApi> App<A> {
    #[must_use]
    pub fn new(controller: SessionController<A>) -> Self {
        Self {
            controller,
            input_mode: InputMode::Guessing,
            messages: vec![
                Message {
                    text: "Welcome! Type a 5-letter word and press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "The server scores each guess: 🟩 🟨 ⬜".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Start a game (first start and "play again" alike)
    ///
    /// On failure the previous session is untouched, so the input mode is
    /// left as-is: a finished board stays on screen with its prompt.
    pub fn start_game(&mut self) {
        match self.controller.start() {
            Ok(()) => {
                self.input_mode = InputMode::Guessing;
                self.messages.clear();
                self.add_message("New game started. Good luck!", MessageStyle::Info);
            }
            Err(err) => {
                self.add_message(&format!("Could not start a game: {err}"), MessageStyle::Error);
                self.add_message("Press 'r' to retry.", MessageStyle::Info);
            }
        }
    }

    /// Submit the drafted guess and react to the server's verdict
    pub fn submit_guess(&mut self) {
        match self.controller.submit() {
            Ok(record) => {
                let emoji = record.evaluation.to_emoji();
                let greens = record.evaluation.count_greens();
                let yellows = record.evaluation.count_yellows();
                let guess_count = self.controller.session().history().len();

                if self.controller.session().is_over() {
                    self.stats.total_games += 1;
                    self.input_mode = InputMode::GameOver;

                    if self.controller.session().win() {
                        self.stats.games_won += 1;
                        if guess_count < self.stats.guess_distribution.len() {
                            self.stats.guess_distribution[guess_count] += 1;
                        }

                        let celebration = match guess_count {
                            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            3 => "✨ SPLENDID! Three guesses! ✨",
                            4 => "👏 GREAT JOB! Four guesses! 👏",
                            5 => "🎉 NICE WORK! Five guesses! 🎉",
                            _ => "😅 PHEW! Got it in six! 😅",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                    } else {
                        self.add_message("Out of attempts. Game over!", MessageStyle::Error);
                    }
                    self.add_message(
                        "Press 'n' for a new game or 'q' to quit.",
                        MessageStyle::Info,
                    );
                } else {
                    self.add_message(
                        &format!(
                            "{emoji}  {greens} green, {yellows} yellow, {} attempts left",
                            self.controller.session().attempts_left()
                        ),
                        MessageStyle::Info,
                    );
                }
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui<A: GameApi>(app: App<A>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, A: GameApi>(
    terminal: &mut Terminal<B>,
    mut app: App<A>,
) -> Result<()> {
    // First start happens inside the TUI so a failure is visible on screen
    app.start_game();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n' | 'r') => {
                        app.start_game();
                    }
                    _ => {
                        // Board is frozen; ignore everything else
                    }
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    // 'r' retries a failed start; once a game is running it
                    // is an ordinary letter and goes into the draft
                    KeyCode::Char('r') if app.controller.session().game_id().is_none() => {
                        app.start_game();
                    }
                    KeyCode::Char(c) => {
                        app.controller.type_letter(c);
                    }
                    KeyCode::Backspace => {
                        app.controller.backspace();
                    }
                    KeyCode::Enter => {
                        app.submit_guess();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GameError;
    use crate::api::types::{GuessResponse, StartResponse, StatusResponse};
    use crate::core::{Evaluation, LetterOutcome, Word};
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Minimal scripted server for app-level behavior
    #[derive(Default)]
    struct ScriptedApi {
        starts: RefCell<VecDeque<Result<StartResponse, GameError>>>,
        guesses: RefCell<VecDeque<GuessResponse>>,
    }

    impl GameApi for ScriptedApi {
        fn start_game(&self) -> Result<StartResponse, GameError> {
            self.starts
                .borrow_mut()
                .pop_front()
                .expect("unexpected start_game call")
        }

        fn submit_guess(&self, _game_id: &str, _guess: &Word) -> Result<GuessResponse, GameError> {
            Ok(self
                .guesses
                .borrow_mut()
                .pop_front()
                .expect("unexpected submit_guess call"))
        }

        fn fetch_status(&self, _game_id: &str) -> Result<StatusResponse, GameError> {
            unreachable!("status is not part of the play flow")
        }
    }

    fn app_with(api: ScriptedApi) -> App<ScriptedApi> {
        App::new(SessionController::new(api))
    }

    #[test]
    fn winning_guess_enters_game_over_mode_and_updates_stats() {
        let api = ScriptedApi::default();
        api.starts.borrow_mut().push_back(Ok(StartResponse {
            game_id: "abc123".to_string(),
        }));
        api.guesses.borrow_mut().push_back(GuessResponse {
            result: Evaluation::WIN,
            win: true,
            attempts_left: 5,
        });

        let mut app = app_with(api);
        app.start_game();
        for ch in "crane".chars() {
            app.controller.type_letter(ch);
        }
        app.submit_guess();

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
    }

    #[test]
    fn accepted_guess_message_summarizes_the_scoring() {
        let api = ScriptedApi::default();
        api.starts.borrow_mut().push_back(Ok(StartResponse {
            game_id: "abc123".to_string(),
        }));
        api.guesses.borrow_mut().push_back(GuessResponse {
            result: Evaluation::new([
                LetterOutcome::Green,
                LetterOutcome::Yellow,
                LetterOutcome::Gray,
                LetterOutcome::Gray,
                LetterOutcome::Gray,
            ]),
            win: false,
            attempts_left: 5,
        });

        let mut app = app_with(api);
        app.start_game();
        for ch in "crane".chars() {
            app.controller.type_letter(ch);
        }
        app.submit_guess();

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("1 green, 1 yellow") && m.text.contains("5 attempts left"))
        );
    }

    #[test]
    fn failed_start_reports_error_and_keeps_mode() {
        let api = ScriptedApi::default();
        api.starts
            .borrow_mut()
            .push_back(Err(GameError::Rejected("no server".to_string())));

        let mut app = app_with(api);
        app.start_game();

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text.contains("Could not start a game"))
        );
        assert_eq!(app.controller.session().game_id(), None);
    }

    #[test]
    fn incomplete_guess_surfaces_validation_message() {
        let api = ScriptedApi::default();
        api.starts.borrow_mut().push_back(Ok(StartResponse {
            game_id: "abc123".to_string(),
        }));

        let mut app = app_with(api);
        app.start_game();
        app.controller.type_letter('c');
        app.submit_guess();

        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "Guess must be 5 letters.")
        );
        assert_eq!(app.input_mode, InputMode::Guessing);
    }
}
