//! Core domain types for the daily game
//!
//! This module contains the fundamental domain types with zero external
//! dependencies. All types here are pure, testable, and have clear
//! mathematical properties.

mod verdict;
mod word;

pub use verdict::{Verdict, evaluate};
pub use word::{Word, WordError};
