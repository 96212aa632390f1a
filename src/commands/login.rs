//! The `login` and `logout` commands

use crate::api::ApiClient;
use crate::config::ClientConfig;
use anyhow::{Context, Result};
use colored::Colorize;

/// Log in to the game server and cache the session token
///
/// The server creates the account on first login, so this doubles as
/// registration.
///
/// # Errors
/// Returns an error if the server cannot be reached, rejects the login, or
/// the config file cannot be written.
pub fn run_login(username: &str, config: &mut ClientConfig) -> Result<()> {
    let mut client = ApiClient::new(&config.api_url)?;
    let response = client
        .login(username)
        .with_context(|| format!("Login failed against {}", config.api_url))?;

    config.store_login(&response.username, &response.token)?;

    println!(
        "{} Logged in as {}",
        "✓".bright_green(),
        response.username.bright_white().bold()
    );
    println!("  Server: {}", config.api_url);
    Ok(())
}

/// Forget the cached credentials
///
/// # Errors
/// Returns an error if the config file cannot be written.
pub fn run_logout(config: &mut ClientConfig) -> Result<()> {
    if !config.is_authenticated() {
        println!("Not logged in");
        return Ok(());
    }

    let username = config.username.clone();
    config.clear_login()?;

    match username {
        Some(name) => println!("{} Logged out {name}", "✓".bright_green()),
        None => println!("{} Logged out", "✓".bright_green()),
    }
    Ok(())
}
