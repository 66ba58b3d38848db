//! Terminal output formatting
//!
//! Display utilities for the plain-CLI mode and the status command.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_over, print_status};
