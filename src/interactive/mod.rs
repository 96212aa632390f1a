//! Interactive TUI for the daily game

mod app;
mod rendering;

pub use app::{App, FinishedView, GameSetup, Message, MessageStyle, run_tui};
