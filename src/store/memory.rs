//! In-memory game store
//!
//! Backs offline play and tests. The (user, word) uniqueness constraint is
//! enforced the same way a database unique index would be: the second insert
//! for a pair fails with `Duplicate` and the first record stands.

use super::{GameRecord, GameStore, StoreError, UserId, WordId};
use crate::progress::{ProgressSnapshot, ProgressUpdate, Reconciled, reconcile};
use crate::streak::Streak;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Debug, Default)]
struct Inner {
    results: HashMap<(UserId, WordId), GameRecord>,
    progress: HashMap<(UserId, WordId), ProgressSnapshot>,
    streaks: HashMap<UserId, Streak>,
}

/// Map-backed store with database-like uniqueness semantics
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Unavailable("store lock poisoned".to_string()))
    }
}

impl GameStore for MemoryStore {
    fn find_result(
        &self,
        user: UserId,
        word_id: WordId,
    ) -> Result<Option<GameRecord>, StoreError> {
        Ok(self.lock()?.results.get(&(user, word_id)).cloned())
    }

    fn insert_result(&self, user: UserId, record: GameRecord) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        let key = (user, record.word_id);
        if inner.results.contains_key(&key) {
            return Err(StoreError::Duplicate);
        }
        inner.results.insert(key, record);
        Ok(())
    }

    fn results_for_user(&self, user: UserId) -> Result<Vec<GameRecord>, StoreError> {
        let inner = self.lock()?;
        let mut records: Vec<GameRecord> = inner
            .results
            .iter()
            .filter(|((u, _), _)| *u == user)
            .map(|(_, record)| record.clone())
            .collect();
        records.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        Ok(records)
    }

    fn count_solved_before(
        &self,
        word_id: WordId,
        before: DateTime<Utc>,
    ) -> Result<u32, StoreError> {
        let inner = self.lock()?;
        let count = inner
            .results
            .values()
            .filter(|r| r.word_id == word_id && r.solved && r.completed_at < before)
            .count();
        Ok(count as u32)
    }

    fn load_progress(
        &self,
        user: UserId,
        word_id: WordId,
    ) -> Result<Option<ProgressSnapshot>, StoreError> {
        Ok(self.lock()?.progress.get(&(user, word_id)).cloned())
    }

    fn save_progress(
        &self,
        user: UserId,
        word_id: WordId,
        update: ProgressUpdate,
    ) -> Result<Reconciled, StoreError> {
        let mut inner = self.lock()?;
        let key = (user, word_id);
        let result_exists = inner.results.contains_key(&key);
        let outcome = reconcile(result_exists, inner.progress.get(&key), update);
        if let Reconciled::Accepted(ref snapshot) = outcome {
            inner.progress.insert(key, snapshot.clone());
        }
        Ok(outcome)
    }

    fn delete_progress(&self, user: UserId, word_id: WordId) -> Result<(), StoreError> {
        self.lock()?.progress.remove(&(user, word_id));
        Ok(())
    }

    fn load_streak(&self, user: UserId) -> Result<Option<Streak>, StoreError> {
        Ok(self.lock()?.streaks.get(&user).cloned())
    }

    fn save_streak(&self, user: UserId, streak: &Streak) -> Result<(), StoreError> {
        self.lock()?.streaks.insert(user, streak.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::progress::RejectReason;
    use chrono::TimeZone;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(*s).unwrap()).collect()
    }

    fn record(word_id: WordId, solved: bool, at_secs: i64) -> GameRecord {
        GameRecord {
            word_id,
            attempts: 3,
            solved,
            time_seconds: Some(42),
            guess_history: words(&["CRANE", "SLATE", "BRICK"]),
            completed_at: Utc.timestamp_opt(at_secs, 0).unwrap(),
        }
    }

    #[test]
    fn second_insert_for_same_pair_fails() {
        let store = MemoryStore::new();
        store.insert_result(1, record(10, true, 100)).unwrap();

        let err = store.insert_result(1, record(10, false, 200)).unwrap_err();
        assert_eq!(err, StoreError::Duplicate);

        // The first record stands untouched.
        let stored = store.find_result(1, 10).unwrap().unwrap();
        assert!(stored.solved);
        assert_eq!(stored.completed_at, Utc.timestamp_opt(100, 0).unwrap());
    }

    #[test]
    fn same_word_different_users_is_fine() {
        let store = MemoryStore::new();
        store.insert_result(1, record(10, true, 100)).unwrap();
        store.insert_result(2, record(10, true, 110)).unwrap();
        assert!(store.find_result(2, 10).unwrap().is_some());
    }

    #[test]
    fn count_solved_before_ignores_losses_and_later_solves() {
        let store = MemoryStore::new();
        store.insert_result(1, record(10, true, 100)).unwrap();
        store.insert_result(2, record(10, false, 110)).unwrap();
        store.insert_result(3, record(10, true, 120)).unwrap();
        store.insert_result(4, record(99, true, 50)).unwrap(); // Different word

        let cutoff = Utc.timestamp_opt(120, 0).unwrap();
        assert_eq!(store.count_solved_before(10, cutoff).unwrap(), 1);
    }

    #[test]
    fn save_progress_applies_reconciliation() {
        let store = MemoryStore::new();
        let first = ProgressUpdate {
            guesses: words(&["CRANE"]),
            elapsed_seconds: 30,
        };
        assert!(matches!(
            store.save_progress(1, 10, first).unwrap(),
            Reconciled::Accepted(_)
        ));

        // Truncation is rejected and the stored snapshot survives.
        let truncated = ProgressUpdate {
            guesses: vec![],
            elapsed_seconds: 40,
        };
        assert_eq!(
            store.save_progress(1, 10, truncated).unwrap(),
            Reconciled::Rejected(RejectReason::HistoryModified)
        );
        let snapshot = store.load_progress(1, 10).unwrap().unwrap();
        assert_eq!(snapshot.guesses, words(&["CRANE"]));
        assert_eq!(snapshot.elapsed_seconds, 30);
    }

    #[test]
    fn save_progress_rejected_once_result_exists() {
        let store = MemoryStore::new();
        store.insert_result(1, record(10, true, 100)).unwrap();
        let update = ProgressUpdate {
            guesses: words(&["CRANE"]),
            elapsed_seconds: 5,
        };
        assert_eq!(
            store.save_progress(1, 10, update).unwrap(),
            Reconciled::Rejected(RejectReason::AlreadyCompleted)
        );
    }

    #[test]
    fn delete_progress_removes_snapshot() {
        let store = MemoryStore::new();
        let update = ProgressUpdate {
            guesses: words(&["CRANE"]),
            elapsed_seconds: 30,
        };
        store.save_progress(1, 10, update).unwrap();
        store.delete_progress(1, 10).unwrap();
        assert!(store.load_progress(1, 10).unwrap().is_none());
    }

    #[test]
    fn results_for_user_sorted_newest_first() {
        let store = MemoryStore::new();
        store.insert_result(1, record(10, true, 100)).unwrap();
        store.insert_result(1, record(11, true, 300)).unwrap();
        store.insert_result(1, record(12, false, 200)).unwrap();
        store.insert_result(2, record(10, true, 400)).unwrap();

        let history = store.results_for_user(1).unwrap();
        let ids: Vec<WordId> = history.iter().map(|r| r.word_id).collect();
        assert_eq!(ids, vec![11, 12, 10]);
    }

    #[test]
    fn streak_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.load_streak(1).unwrap().is_none());

        let streak = Streak::first_game(true, chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        store.save_streak(1, &streak).unwrap();
        assert_eq!(store.load_streak(1).unwrap(), Some(streak));
    }
}
