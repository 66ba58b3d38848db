//! One-shot status poll
//!
//! Exercises the read-only `/status` endpoint for an existing game id. Not
//! part of the play flow; useful for checking on a game from another shell.

use crate::api::{GameApi, GameError};
use crate::output::print_status;

/// Fetch and print the server's view of a game
///
/// # Errors
/// Returns `GameError` if the transport fails or the game id is unknown.
pub fn run_status<A: GameApi>(api: &A, game_id: &str) -> Result<(), GameError> {
    let status = api.fetch_status(game_id)?;
    print_status(game_id, &status);
    Ok(())
}
