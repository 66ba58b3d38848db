//! Wordle Client - CLI
//!
//! Terminal client for a remote Wordle game server, with TUI and plain CLI
//! modes plus a one-shot status poll.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wordle_client::{
    api::{DEFAULT_SERVER_URL, GameClient},
    commands::{run_simple, run_status},
    interactive::{App, run_tui},
    session::SessionController,
};

#[derive(Parser)]
#[command(
    name = "wordle_client",
    about = "Play Wordle against a remote game server from your terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game server base URL
    #[arg(short = 's', long, global = true, default_value = DEFAULT_SERVER_URL)]
    server: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Show the server's view of an existing game
    Status {
        /// The game id to look up
        game_id: String,
    },
}

fn main() -> Result<()> {
    // Silent unless RUST_LOG is set, so the TUI stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = GameClient::new(&cli.server)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let app = App::new(SessionController::new(client));
            run_tui(app)
        }
        Commands::Simple => run_simple(client),
        Commands::Status { game_id } => {
            run_status(&client, &game_id)?;
            Ok(())
        }
    }
}
