//! Session state controller
//!
//! Drives the `Uninitialized -> Active -> Complete` lifecycle from user
//! actions and server responses. The controller owns the one `Session` value
//! and the guess draft; every transition goes through here, so the UI layers
//! (TUI and plain CLI) only read state and forward input.
//!
//! Transition rules:
//! - `start` replaces the session wholesale on success and leaves it fully
//!   intact on failure (covers both first start and "try again").
//! - `submit` validates the draft locally before any network call; an
//!   incomplete draft never leaves the process. Rejections of any kind
//!   preserve the draft so the player can correct it.
//! - The session completes the instant a response reports a win or a zero
//!   attempts counter; a complete session refuses further submissions.

use thiserror::Error;

use super::state::{GuessRecord, Phase, Session};
use crate::api::{GameApi, GameError};
use crate::core::GuessDraft;

/// Why a guess submission was refused
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The draft has fewer than 5 filled cells; no request was issued
    #[error("Guess must be 5 letters.")]
    Incomplete,

    /// The game has not started or is already over
    #[error("The game is over. Start a new one to keep playing.")]
    NotActive,

    /// The server or transport refused the guess
    #[error("{0}")]
    Api(#[from] GameError),
}

/// Owns the session and draft, applies every state transition
#[derive(Debug)]
pub struct SessionController<A: GameApi> {
    api: A,
    session: Session,
    draft: GuessDraft,
}

impl<A: GameApi> SessionController<A> {
    #[must_use]
    pub fn new(api: A) -> Self {
        Self {
            api,
            session: Session::uninitialized(),
            draft: GuessDraft::new(),
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn draft(&self) -> &GuessDraft {
        &self.draft
    }

    /// Start a new game, replacing any previous session wholesale
    ///
    /// Serves both the initial start and "try again". On failure the current
    /// session (and draft) are left exactly as they were, so a finished game
    /// stays finished and an active one stays playable.
    ///
    /// # Errors
    /// Returns `GameError` if the server cannot be reached or refuses to
    /// create a game.
    pub fn start(&mut self) -> Result<(), GameError> {
        let started = self.api.start_game()?;

        self.session = Session::active(started.game_id);
        self.draft.clear();
        Ok(())
    }

    /// Type a letter into the draft; ignored unless a game is active
    pub fn type_letter(&mut self, ch: char) {
        if self.session.phase() == Phase::Active {
            self.draft.type_letter(ch);
        }
    }

    /// Erase a letter from the draft; ignored unless a game is active
    pub fn backspace(&mut self) {
        if self.session.phase() == Phase::Active {
            self.draft.backspace();
        }
    }

    /// Throw away the in-progress draft without submitting it
    pub fn discard_draft(&mut self) {
        self.draft.clear();
    }

    /// Submit the drafted guess for scoring
    ///
    /// On acceptance the scored guess is appended to the history, the
    /// server's attempts counter and win flag are adopted, and the draft is
    /// cleared. On any refusal the draft is preserved.
    ///
    /// # Errors
    /// - `SubmitError::NotActive` if no game is running
    /// - `SubmitError::Incomplete` if the draft has empty cells (checked
    ///   locally; no network call is made)
    /// - `SubmitError::Api` if the server or transport refuses the guess
    pub fn submit(&mut self) -> Result<&GuessRecord, SubmitError> {
        if self.session.phase() != Phase::Active {
            return Err(SubmitError::NotActive);
        }

        let word = self.draft.to_word().map_err(|_| SubmitError::Incomplete)?;

        let Some(game_id) = self.session.game_id() else {
            return Err(SubmitError::NotActive);
        };

        let scored = self.api.submit_guess(game_id, &word)?;

        self.session
            .record_guess(word, scored.result, scored.attempts_left, scored.win);
        self.draft.clear();

        let record = self
            .session
            .history()
            .last()
            .expect("guess was just recorded");
        Ok(record)
    }
}
