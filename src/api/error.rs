//! Game API error taxonomy
//!
//! Three failure classes reach the caller:
//! - `Network`: the transport failed (connect, timeout, body read)
//! - `Rejected`: the server answered with a 4xx and a reason the player
//!   should see verbatim (invalid word, unknown game, no attempts left)
//! - `UnexpectedStatus`: any other non-success status with no usable body

use thiserror::Error;

/// Error returned by the game API client
#[derive(Debug, Error)]
pub enum GameError {
    /// Transport-level failure or undecodable response body
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server refused the request and said why
    #[error("{0}")]
    Rejected(String),

    /// Non-success HTTP status without a parseable error body
    #[error("server returned unexpected status {0}")]
    UnexpectedStatus(reqwest::StatusCode),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_message_shown_verbatim() {
        let err = GameError::Rejected("Game not found".to_string());
        assert_eq!(err.to_string(), "Game not found");
    }

    #[test]
    fn unexpected_status_mentions_code() {
        let err = GameError::UnexpectedStatus(reqwest::StatusCode::BAD_GATEWAY);
        assert!(err.to_string().contains("502"));
    }
}
