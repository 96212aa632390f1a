//! Wordle Daily
//!
//! A daily Wordle game for the terminal: a TUI client that syncs with a game
//! server (rankings, streaks, cross-device resume) and works fully offline.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_daily::core::{Word, evaluate};
//!
//! let guess = Word::new("crane").unwrap();
//! let target = Word::new("slate").unwrap();
//!
//! let verdicts = evaluate(&guess, &target);
//! println!("First letter: {:?}", verdicts[0]);
//! ```

// Core domain types
pub mod core;

// Board and keyboard state machines
pub mod game;

// Word lists and daily selection
pub mod dictionary;

// Progress snapshot reconciliation
pub mod progress;

// Daily streak bookkeeping
pub mod streak;

// Token-based identity
pub mod auth;

// Result and progress persistence
pub mod store;

// Game orchestration over a store
pub mod session;

// Game server REST client
pub mod api;

// Client configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
