//! HTTP client for the game server
//!
//! Thin wrapper over three REST calls. Each call is fire-once: no retries,
//! no caching, no auth. A failed call leaves nothing behind; the caller
//! decides whether to re-invoke.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use tracing::debug;

use super::error::GameError;
use super::types::{ErrorBody, GuessRequest, GuessResponse, StartResponse, StatusResponse};
use super::GameApi;
use crate::core::Word;

/// Per-request timeout; the server answers in well under this or not at all
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Blocking HTTP client for the game server REST API
#[derive(Debug, Clone)]
pub struct GameClient {
    http: Client,
    base_url: String,
}

impl GameClient {
    /// Create a client against the given server base URL
    ///
    /// # Errors
    /// Returns `GameError::Network` if the underlying HTTP client cannot be
    /// constructed (e.g. no TLS backend available).
    pub fn new(base_url: impl Into<String>) -> Result<Self, GameError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let base_url = base_url.into();

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The server base URL this client talks to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Turn a non-success response into the right error class
    ///
    /// 4xx responses carry a JSON `{ "detail": ... }` body whose message is
    /// surfaced verbatim; anything else becomes `UnexpectedStatus`.
    fn handle_failure(response: Response) -> GameError {
        let status = response.status();

        if status.is_client_error()
            && let Ok(body) = response.json::<ErrorBody>()
        {
            return GameError::Rejected(body.detail);
        }

        GameError::UnexpectedStatus(status)
    }
}

impl GameApi for GameClient {
    fn start_game(&self) -> Result<StartResponse, GameError> {
        let url = format!("{}/start", self.base_url);
        debug!(%url, "starting new game");

        let response = self.http.post(&url).send()?;
        if !response.status().is_success() {
            return Err(Self::handle_failure(response));
        }

        let start: StartResponse = response.json()?;
        debug!(game_id = %start.game_id, "game started");
        Ok(start)
    }

    fn submit_guess(&self, game_id: &str, guess: &Word) -> Result<GuessResponse, GameError> {
        let url = format!("{}/guess", self.base_url);
        debug!(%url, %guess, "submitting guess");

        let body = GuessRequest {
            game_id: game_id.to_string(),
            guess: guess.text().to_string(),
        };

        let response = self.http.post(&url).json(&body).send()?;
        if !response.status().is_success() {
            return Err(Self::handle_failure(response));
        }

        let scored: GuessResponse = response.json()?;
        debug!(
            attempts_left = scored.attempts_left,
            win = scored.win,
            "guess scored"
        );
        Ok(scored)
    }

    fn fetch_status(&self, game_id: &str) -> Result<StatusResponse, GameError> {
        let url = format!("{}/status/{game_id}", self.base_url);
        debug!(%url, "fetching game status");

        let response = self.http.get(&url).send()?;
        if !response.status().is_success() {
            return Err(Self::handle_failure(response));
        }

        Ok(response.json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_normalized() {
        let client = GameClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");

        let client = GameClient::new("http://localhost:8000").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
