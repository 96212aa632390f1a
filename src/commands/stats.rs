//! The `stats` command: lifetime statistics from the server

use crate::api::ApiClient;
use crate::config::ClientConfig;
use anyhow::{Context, Result, bail};
use colored::Colorize;

const BAR_WIDTH: u32 = 24;

/// Fetch and print the logged-in player's lifetime statistics
///
/// # Errors
/// Returns an error when not logged in or when the server cannot be reached.
pub fn run_stats(config: &ClientConfig) -> Result<()> {
    let Some(token) = config.token.as_deref() else {
        bail!("Not logged in - run 'login <username>' first");
    };

    let mut client = ApiClient::new(&config.api_url)?;
    client.set_token(token);

    let stats = client
        .personal_stats()
        .with_context(|| format!("Could not fetch stats from {}", config.api_url))?;

    let name = config.username.as_deref().unwrap_or("you");
    println!("\n{}", format!("Statistics for {name}").bright_white().bold());
    println!("{}", "─".repeat(40));

    println!("  Played:         {}", stats.total_games);
    println!("  Won:            {}", stats.total_wins);
    println!("  Win rate:       {:.1}%", stats.win_rate);
    println!("  Avg guesses:    {:.1}", stats.avg_attempts);
    println!(
        "  Streak:         {} (best {})",
        stats.current_streak.to_string().bright_green(),
        stats.longest_streak
    );

    if !stats.attempts_distribution.is_empty() {
        println!("\n{}", "Guess distribution".bright_white().bold());
        let max = stats
            .attempts_distribution
            .values()
            .copied()
            .max()
            .unwrap_or(1)
            .max(1);
        for attempts in 1..=6u32 {
            let count = stats
                .attempts_distribution
                .get(&attempts.to_string())
                .copied()
                .unwrap_or(0);
            let width = (count * BAR_WIDTH).div_ceil(max);
            let bar = "█".repeat(width as usize);
            println!("  {attempts}: {} {count}", bar.bright_green());
        }
    }

    println!();
    Ok(())
}
