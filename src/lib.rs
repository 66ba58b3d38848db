//! Wordle Client
//!
//! Terminal client for a remote Wordle game server. The server owns the
//! secret word and scores every guess; this crate is the thin client: three
//! REST calls and a session state machine driving a TUI (or plain CLI).
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_client::api::{DEFAULT_SERVER_URL, GameApi, GameClient};
//! use wordle_client::core::Word;
//!
//! let client = GameClient::new(DEFAULT_SERVER_URL).unwrap();
//! let game = client.start_game().unwrap();
//!
//! let guess = Word::new("crane").unwrap();
//! let scored = client.submit_guess(&game.game_id, &guess).unwrap();
//! println!("{} ({} attempts left)", scored.result, scored.attempts_left);
//! ```

// Core domain types
pub mod core;

// Game server API
pub mod api;

// Session state machine
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
