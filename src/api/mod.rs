//! Game server API
//!
//! The server owns all game logic; this module is the client side of its
//! three REST operations. `GameApi` is the seam the session controller works
//! against, so game flow can be tested without a live server.

mod client;
mod error;
pub mod types;

pub use client::GameClient;
pub use error::GameError;
pub use types::{GuessResponse, StartResponse, StatusResponse};

use crate::core::Word;

/// Default game server, matching the deployed backend
pub const DEFAULT_SERVER_URL: &str = "https://wordle-clone-tgqi.onrender.com";

/// The three operations the game server exposes
pub trait GameApi {
    /// Create a new game session on the server
    ///
    /// # Errors
    /// Returns `GameError` if the transport fails or the server answers with
    /// a non-success status.
    fn start_game(&self) -> Result<StartResponse, GameError>;

    /// Submit a guess for scoring
    ///
    /// # Errors
    /// Returns `GameError::Rejected` with the server's message when the guess
    /// is refused (invalid word, unknown game, no attempts left), or
    /// `GameError::Network`/`UnexpectedStatus` on transport problems.
    fn submit_guess(&self, game_id: &str, guess: &Word) -> Result<GuessResponse, GameError>;

    /// Read the current session state without submitting anything
    ///
    /// # Errors
    /// Returns `GameError` if the transport fails or the game is unknown.
    fn fetch_status(&self, game_id: &str) -> Result<StatusResponse, GameError>;
}
