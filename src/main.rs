//! Wordle Daily - CLI
//!
//! Daily Wordle in the terminal, with optional server sync for rankings,
//! streaks, and cross-device resume.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_daily::commands::{run_login, run_logout, run_play, run_simple, run_stats};
use wordle_daily::config::ClientConfig;

#[derive(Parser)]
#[command(
    name = "wordle_daily",
    about = "Daily Wordle in the terminal, online or offline",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game server URL (overrides the configured server)
    #[arg(short = 's', long, global = true)]
    server: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Skip the server and play today's offline word
        #[arg(long)]
        offline: bool,
    },

    /// Simple CLI mode (plays a local game without the TUI)
    Simple {
        /// Play a random practice word instead of today's word
        #[arg(short, long)]
        random: bool,
    },

    /// Log in to the game server (creates the account on first login)
    Login {
        /// Username to log in as
        username: String,
    },

    /// Forget cached credentials
    Logout,

    /// Show lifetime statistics from the server
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = ClientConfig::load();
    if let Some(server) = cli.server {
        config.api_url = server;
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { offline: false });

    match command {
        Commands::Play { offline } => run_play(&config, offline),
        Commands::Simple { random } => run_simple(random).map_err(|e| anyhow::anyhow!(e)),
        Commands::Login { username } => run_login(&username, &mut config),
        Commands::Logout => run_logout(&mut config),
        Commands::Stats => run_stats(&config),
    }
}
