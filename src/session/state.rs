//! Session state
//!
//! One `Session` value holds everything about a play-through: the server's
//! game id, the scored guess history, the attempts counter, and the win flag.
//! It is created whole and replaced whole ("try again" builds a new value);
//! no field is ever reset in isolation.
//!
//! The attempts counter is never computed here. Its initial value is the
//! game's constant and every later value is adopted from a server response,
//! so client and server can never drift apart.

use crate::core::{Evaluation, Word};

/// Attempts a fresh game starts with, per the server's rules
pub const MAX_ATTEMPTS: u8 = 6;

/// Lifecycle phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No game exists yet (before the first successful start)
    Uninitialized,
    /// A game is running and accepts guesses
    Active,
    /// The game ended (won or out of attempts); only "try again" remains
    Complete,
}

/// One submitted guess with the server's scoring, append-only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub evaluation: Evaluation,
}

/// Complete state of one play-through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    phase: Phase,
    game_id: Option<String>,
    history: Vec<GuessRecord>,
    attempts_left: u8,
    win: bool,
}

impl Session {
    /// A session before any game has been started
    #[must_use]
    pub const fn uninitialized() -> Self {
        Self {
            phase: Phase::Uninitialized,
            game_id: None,
            history: Vec::new(),
            attempts_left: MAX_ATTEMPTS,
            win: false,
        }
    }

    /// A fresh active session for a newly started game
    ///
    /// This is the only way to enter `Active`: a whole new value with empty
    /// history and the default attempts count.
    #[must_use]
    pub fn active(game_id: String) -> Self {
        Self {
            phase: Phase::Active,
            game_id: Some(game_id),
            history: Vec::new(),
            attempts_left: MAX_ATTEMPTS,
            win: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn game_id(&self) -> Option<&str> {
        self.game_id.as_deref()
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn attempts_left(&self) -> u8 {
        self.attempts_left
    }

    #[inline]
    #[must_use]
    pub const fn win(&self) -> bool {
        self.win
    }

    /// Whether the game has ended
    ///
    /// Holds exactly when the last accepted guess won or exhausted the
    /// attempts, and stays true until a new session replaces this one.
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.phase, Phase::Complete)
    }

    /// Record an accepted guess and its server scoring
    ///
    /// Adopts the server's attempts counter and win flag, appends to the
    /// history, and completes the session the instant the response says the
    /// game is decided. Must only be called while `Active`; the controller
    /// guards every submission behind that check.
    pub fn record_guess(
        &mut self,
        word: Word,
        evaluation: Evaluation,
        attempts_left: u8,
        win: bool,
    ) {
        debug_assert!(matches!(self.phase, Phase::Active));
        debug_assert!(attempts_left <= self.attempts_left, "attempts never increase");

        self.history.push(GuessRecord { word, evaluation });
        self.attempts_left = attempts_left;
        self.win = win;

        if win || attempts_left == 0 {
            self.phase = Phase::Complete;
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::uninitialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Evaluation, LetterOutcome};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn losing_eval() -> Evaluation {
        Evaluation::new([LetterOutcome::Gray; 5])
    }

    #[test]
    fn uninitialized_session_defaults() {
        let session = Session::uninitialized();
        assert_eq!(session.phase(), Phase::Uninitialized);
        assert_eq!(session.game_id(), None);
        assert!(session.history().is_empty());
        assert_eq!(session.attempts_left(), MAX_ATTEMPTS);
        assert!(!session.win());
        assert!(!session.is_over());
    }

    #[test]
    fn active_session_has_game_id_and_defaults() {
        let session = Session::active("abc123".to_string());
        assert_eq!(session.phase(), Phase::Active);
        assert_eq!(session.game_id(), Some("abc123"));
        assert!(session.history().is_empty());
        assert_eq!(session.attempts_left(), MAX_ATTEMPTS);
    }

    #[test]
    fn recorded_guess_adopts_server_counter() {
        let mut session = Session::active("abc123".to_string());
        session.record_guess(word("crane"), losing_eval(), 5, false);

        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].word.text(), "crane");
        assert_eq!(session.attempts_left(), 5);
        assert!(!session.is_over());
    }

    #[test]
    fn win_completes_regardless_of_attempts_left() {
        let mut session = Session::active("abc123".to_string());
        session.record_guess(word("crane"), Evaluation::WIN, 4, true);

        assert_eq!(session.phase(), Phase::Complete);
        assert!(session.win());
        assert!(session.is_over());
        assert_eq!(session.attempts_left(), 4);
    }

    #[test]
    fn exhausted_attempts_complete_without_win() {
        let mut session = Session::active("abc123".to_string());
        session.record_guess(word("crane"), losing_eval(), 0, false);

        assert_eq!(session.phase(), Phase::Complete);
        assert!(!session.win());
        assert!(session.is_over());
    }

    #[test]
    fn over_holds_exactly_when_won_or_out_of_attempts() {
        let mut session = Session::active("abc123".to_string());

        for expected_left in (1..=5).rev() {
            session.record_guess(word("crane"), losing_eval(), expected_left, false);
            assert!(!session.is_over());
            assert_eq!(session.is_over(), session.win() || session.attempts_left() == 0);
        }

        session.record_guess(word("crane"), losing_eval(), 0, false);
        assert!(session.is_over());
        assert_eq!(session.is_over(), session.win() || session.attempts_left() == 0);
    }

    #[test]
    fn replacement_resets_everything() {
        let mut session = Session::active("old-game".to_string());
        session.record_guess(word("crane"), Evaluation::WIN, 4, true);
        assert!(session.is_over());

        // "Try again" builds a whole new value, never a field-by-field reset
        session = Session::active("new-game".to_string());
        assert_eq!(session.game_id(), Some("new-game"));
        assert!(session.history().is_empty());
        assert_eq!(session.attempts_left(), MAX_ATTEMPTS);
        assert!(!session.win());
        assert!(!session.is_over());
    }
}
