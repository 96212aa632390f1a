//! Persistence abstractions for game state
//!
//! `GameStore` captures the shapes the game core needs from storage: result
//! lookup and insertion (with a uniqueness guarantee per (user, word) pair),
//! advisory progress snapshots, the solved-before count used for ranking,
//! and the streak record. `MemoryStore` implements it for offline play and
//! tests.

mod memory;

pub use memory::MemoryStore;

use crate::core::Word;
use crate::progress::{ProgressSnapshot, ProgressUpdate, Reconciled};
use crate::streak::Streak;
use chrono::{DateTime, Utc};
use std::fmt;

/// Stable user identifier
pub type UserId = u64;
/// Identifier of a scheduled daily word
pub type WordId = u64;

/// A finalized game, immutable once written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub word_id: WordId,
    pub attempts: u8,
    pub solved: bool,
    pub time_seconds: Option<u64>,
    pub guess_history: Vec<Word>,
    pub completed_at: DateTime<Utc>,
}

/// Error type for storage operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A result already exists for this (user, word) pair
    Duplicate,
    /// The backing store could not be reached or answered abnormally
    Unavailable(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate => write!(f, "A result already exists for this game"),
            Self::Unavailable(reason) => write!(f, "Store unavailable: {reason}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// The persistence collaborator for daily games
pub trait GameStore {
    /// Load the finalized result for a (user, word) pair, if any
    ///
    /// # Errors
    /// Returns `StoreError::Unavailable` if the store cannot answer.
    fn find_result(&self, user: UserId, word_id: WordId)
    -> Result<Option<GameRecord>, StoreError>;

    /// Write a finalized result exactly once
    ///
    /// # Errors
    /// Returns `StoreError::Duplicate` if a result already exists for the
    /// pair; the stored record is never overwritten.
    fn insert_result(&self, user: UserId, record: GameRecord) -> Result<(), StoreError>;

    /// All finalized results for a user, newest first
    ///
    /// # Errors
    /// Returns `StoreError::Unavailable` if the store cannot answer.
    fn results_for_user(&self, user: UserId) -> Result<Vec<GameRecord>, StoreError>;

    /// Count solved results for a word completed strictly before `before`
    ///
    /// # Errors
    /// Returns `StoreError::Unavailable` if the store cannot answer.
    fn count_solved_before(
        &self,
        word_id: WordId,
        before: DateTime<Utc>,
    ) -> Result<u32, StoreError>;

    /// Load the advisory progress snapshot for a (user, word) pair
    ///
    /// # Errors
    /// Returns `StoreError::Unavailable` if the store cannot answer.
    fn load_progress(
        &self,
        user: UserId,
        word_id: WordId,
    ) -> Result<Option<ProgressSnapshot>, StoreError>;

    /// Reconcile and persist a progress save
    ///
    /// The append-only and monotonic-time rules are applied against the
    /// stored snapshot; a `Reconciled::Rejected` outcome leaves storage
    /// untouched.
    ///
    /// # Errors
    /// Returns `StoreError::Unavailable` if the store cannot answer.
    fn save_progress(
        &self,
        user: UserId,
        word_id: WordId,
        update: ProgressUpdate,
    ) -> Result<Reconciled, StoreError>;

    /// Drop the snapshot once the matching result is finalized
    ///
    /// # Errors
    /// Returns `StoreError::Unavailable` if the store cannot answer.
    fn delete_progress(&self, user: UserId, word_id: WordId) -> Result<(), StoreError>;

    /// Load a user's streak record
    ///
    /// # Errors
    /// Returns `StoreError::Unavailable` if the store cannot answer.
    fn load_streak(&self, user: UserId) -> Result<Option<Streak>, StoreError>;

    /// Persist a user's streak record
    ///
    /// # Errors
    /// Returns `StoreError::Unavailable` if the store cannot answer.
    fn save_streak(&self, user: UserId, streak: &Streak) -> Result<(), StoreError>;
}
