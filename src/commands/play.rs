//! The `play` command: the full TUI daily game

use crate::config::ClientConfig;
use crate::dictionary::Dictionary;
use crate::interactive::{App, GameSetup, run_tui};
use anyhow::Result;

/// Launch the TUI, online when credentials exist and `offline` is not forced
///
/// # Errors
/// Returns an error on terminal setup failure or an inconsistent resumed
/// snapshot.
pub fn run_play(config: &ClientConfig, offline: bool) -> Result<()> {
    let dictionary = Dictionary::embedded();

    let setup = if offline {
        GameSetup::offline(&dictionary, config)
    } else {
        GameSetup::connect(&dictionary, config)
    };

    let app = App::new(dictionary, setup)?;
    run_tui(app)
}
