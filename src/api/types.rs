//! Wire types for the game server's REST API
//!
//! Shapes follow the server contract:
//! - `POST /start` → `{ "game_id": "..." }`
//! - `POST /guess` `{ "game_id": "...", "guess": "crane" }`
//!   → `{ "result": [tag; 5], "win": bool, "attempts_left": int }`
//! - `GET /status/{game_id}`
//!   → `{ "guesses": [...], "attempts_left": int, "finished": bool }`

use serde::{Deserialize, Serialize};

use crate::core::Evaluation;

/// Response to `POST /start`
#[derive(Debug, Clone, Deserialize)]
pub struct StartResponse {
    pub game_id: String,
}

/// Request body for `POST /guess`
#[derive(Debug, Clone, Serialize)]
pub struct GuessRequest {
    pub game_id: String,
    pub guess: String,
}

/// Response to `POST /guess`
#[derive(Debug, Clone, Deserialize)]
pub struct GuessResponse {
    pub result: Evaluation,
    pub win: bool,
    pub attempts_left: u8,
}

/// One scored guess as reported by `GET /status/{game_id}`
#[derive(Debug, Clone, Deserialize)]
pub struct ScoredGuess {
    pub guess: String,
    pub result: Evaluation,
}

/// Response to `GET /status/{game_id}`
///
/// The server spells the terminal flag `finished` and omits `win`; both are
/// tolerated so the shape stays symmetric with `GuessResponse`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub guesses: Vec<ScoredGuess>,
    pub attempts_left: u8,
    #[serde(default)]
    pub win: bool,
    #[serde(alias = "finished")]
    pub over: bool,
}

/// Error body the server attaches to 4xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterOutcome;

    #[test]
    fn start_response_parses() {
        let body = r#"{"game_id": "7f3b2a10-9c55-4d9e-b1de-1f2a3b4c5d6e"}"#;
        let parsed: StartResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.game_id, "7f3b2a10-9c55-4d9e-b1de-1f2a3b4c5d6e");
    }

    #[test]
    fn guess_request_serializes_server_field_names() {
        let req = GuessRequest {
            game_id: "abc123".to_string(),
            guess: "crane".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["game_id"], "abc123");
        assert_eq!(json["guess"], "crane");
    }

    #[test]
    fn guess_response_parses() {
        let body = r#"{
            "result": ["gray", "yellow", "green", "gray", "gray"],
            "win": false,
            "attempts_left": 5
        }"#;
        let parsed: GuessResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.attempts_left, 5);
        assert!(!parsed.win);
        assert_eq!(
            parsed.result.outcomes()[2],
            LetterOutcome::Green
        );
    }

    #[test]
    fn status_response_parses_server_spelling() {
        // The server says "finished" and has no "win" field
        let body = r#"{
            "guesses": [
                {"guess": "crane", "result": ["gray", "gray", "green", "gray", "green"]}
            ],
            "attempts_left": 5,
            "finished": false
        }"#;
        let parsed: StatusResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.guesses.len(), 1);
        assert_eq!(parsed.guesses[0].guess, "crane");
        assert_eq!(parsed.attempts_left, 5);
        assert!(!parsed.win);
        assert!(!parsed.over);
    }

    #[test]
    fn status_response_parses_symmetric_spelling() {
        let body = r#"{"attempts_left": 0, "win": true, "over": true}"#;
        let parsed: StatusResponse = serde_json::from_str(body).unwrap();
        assert!(parsed.guesses.is_empty());
        assert!(parsed.win);
        assert!(parsed.over);
    }

    #[test]
    fn error_body_parses() {
        let body = r#"{"detail": "Game not found"}"#;
        let parsed: ErrorBody = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.detail, "Game not found");
    }
}
