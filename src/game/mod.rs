//! Gameplay state, independent of any presentation concern
//!
//! The board and keyboard here are pure data: the TUI renders them, but they
//! are constructible and testable with no terminal at all.

mod board;
mod keyboard;

pub use board::{Board, BoardError, GameStatus, SubmitOutcome};
pub use keyboard::{KeyState, KeyboardState};
