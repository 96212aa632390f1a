//! Simple interactive CLI mode
//!
//! Plays a full game in the plain terminal, without the TUI. The session
//! runs against an in-memory store, so this doubles as a practice mode.

use crate::dictionary::Dictionary;
use crate::output::{colored_row, share_grid};
use crate::session::{DailyGameSession, DailyWord, SessionError, TurnOutcome};
use crate::store::MemoryStore;
use chrono::{Local, NaiveDate};
use colored::Colorize;
use std::io::{self, Write};
use std::time::Instant;

/// Run the simple CLI game
///
/// With `random` set, a practice word is drawn instead of today's word.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or the
/// session cannot be started.
pub fn run_simple(random: bool) -> Result<(), String> {
    let dictionary = Dictionary::embedded();
    let today = Local::now().date_naive();

    let answer = if random {
        dictionary
            .random_answer()
            .cloned()
            .ok_or("No answer words available")?
    } else {
        dictionary.word_for_date(today).clone()
    };

    // NaiveDate::default() is the Unix epoch, matching the daily rotation.
    let word = DailyWord {
        id: (today - NaiveDate::default()).num_days().unsigned_abs(),
        date: today,
        answer,
    };

    let store = MemoryStore::new();
    let mut session =
        DailyGameSession::start(&store, &dictionary, 1, word).map_err(|e| e.to_string())?;

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Wordle - Terminal Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the 5-letter word in 6 tries.");
    println!("Commands: 'quit' to exit\n");

    let started = Instant::now();

    loop {
        // Drop any letters left over from a rejected row.
        while session.remove_letter() {}

        let turn = session.board().current_row() + 1;
        let input = get_user_input(&format!("Guess {turn}/6"))?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "" => continue,
            _ => {}
        }

        session.set_elapsed(started.elapsed().as_secs());
        for ch in input.chars() {
            session.add_letter(ch);
        }

        match session.submit_guess() {
            Ok(TurnOutcome::Continue { verdicts, save: _ }) => {
                // The save outcome is advisory; practice play ignores it.
                if let Some(guess) = session.board().guesses().last() {
                    println!("\n  {}\n", colored_row(guess, &verdicts));
                }
            }
            Ok(TurnOutcome::Finished(summary)) => {
                if let (Some(last), Some(verdicts)) =
                    (summary.guesses.last(), session.board().verdicts().last())
                {
                    println!("\n  {}\n", colored_row(last, verdicts));
                }

                if summary.won {
                    let praise = match summary.attempts {
                        1 => "Genius!",
                        2 => "Magnificent!",
                        3 => "Impressive!",
                        4 => "Splendid!",
                        5 => "Great!",
                        _ => "Phew!",
                    };
                    println!("{}", praise.bright_green().bold());
                    println!(
                        "Solved in {} of 6, {}:{:02}",
                        summary.attempts,
                        summary.elapsed_seconds / 60,
                        summary.elapsed_seconds % 60
                    );
                } else {
                    println!("{}", "Out of guesses!".bright_red().bold());
                    println!("The word was {}", summary.target.text().bright_white().bold());
                }

                println!("\n{}\n", share_grid(summary.won, session.board().verdicts()));
                return Ok(());
            }
            Err(SessionError::NotInWordList(word)) => {
                println!("  {} is not in the word list\n", word.bright_yellow());
            }
            Err(SessionError::Board(_)) => {
                println!("  {}\n", "Not enough letters".bright_yellow());
            }
            Err(other) => return Err(other.to_string()),
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
