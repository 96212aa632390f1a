//! Terminal output formatting for the plain CLI mode

use crate::core::{Verdict, Word};
use colored::Colorize;

/// Render one submitted guess as a colored tile row
#[must_use]
pub fn colored_row(guess: &Word, verdicts: &[Verdict; 5]) -> String {
    let mut row = String::new();
    for i in 0..5 {
        let tile = format!(" {} ", guess.letter_at(i) as char);
        let painted = match verdicts[i] {
            Verdict::Correct => tile.white().bold().on_green(),
            Verdict::Present => tile.black().bold().on_yellow(),
            Verdict::Absent => tile.white().on_bright_black(),
        };
        row.push_str(&painted.to_string());
        if i < 4 {
            row.push(' ');
        }
    }
    row
}

/// Convert one verdict row to emoji squares
#[must_use]
pub fn verdicts_to_emoji(verdicts: &[Verdict; 5]) -> String {
    verdicts
        .iter()
        .map(|v| match v {
            Verdict::Correct => '🟩',
            Verdict::Present => '🟨',
            Verdict::Absent => '⬛',
        })
        .collect()
}

/// The shareable spoiler-free result grid
#[must_use]
pub fn share_grid(won: bool, verdict_rows: &[[Verdict; 5]]) -> String {
    let score = if won {
        verdict_rows.len().to_string()
    } else {
        "X".to_string()
    };
    let mut grid = format!("Wordle {score}/6\n");
    for row in verdict_rows {
        grid.push('\n');
        grid.push_str(&verdicts_to_emoji(row));
    }
    grid
}
