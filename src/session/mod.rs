//! Game session state machine
//!
//! `Session` is the value, `SessionController` applies the transitions.

mod controller;
mod state;

pub use controller::{SessionController, SubmitError};
pub use state::{GuessRecord, MAX_ATTEMPTS, Phase, Session};
