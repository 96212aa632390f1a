//! Append-only progress reconciliation
//!
//! Clients auto-save partial games after every guess so a crash or a second
//! device can resume. The snapshot is advisory, but it is also the only
//! defense against a modified client rewriting history to claim a shorter or
//! faster game: guesses may only be appended to what was stored, and elapsed
//! time only moves forward.

use crate::core::Word;
use std::fmt;

/// Server-held partial game state for one (user, word) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub guesses: Vec<Word>,
    pub elapsed_seconds: u64,
}

/// An incoming save-progress request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub guesses: Vec<Word>,
    pub elapsed_seconds: u64,
}

/// Why a save-progress request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// A final result already exists for this game; progress is irrelevant
    AlreadyCompleted,
    /// The incoming guess list rewrites or truncates stored history
    HistoryModified,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyCompleted => write!(f, "Game already completed"),
            Self::HistoryModified => write!(f, "Cannot modify previous guesses"),
        }
    }
}

/// Outcome of reconciling an incoming save against stored state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciled {
    /// The snapshot to persist in place of the stored one
    Accepted(ProgressSnapshot),
    Rejected(RejectReason),
}

/// Validate an incoming save against the stored snapshot
///
/// Rules, in order:
/// 1. A finalized result for this game rejects everything (`AlreadyCompleted`).
/// 2. No stored snapshot: accept the incoming state as-is.
/// 3. The incoming guesses must start with the stored guesses, in order;
///    anything else (truncation, edits) is `HistoryModified`.
/// 4. Elapsed time is kept at the maximum seen. A stale save with a smaller
///    time is still accepted, it just cannot wind the clock back.
#[must_use]
pub fn reconcile(
    result_exists: bool,
    stored: Option<&ProgressSnapshot>,
    incoming: ProgressUpdate,
) -> Reconciled {
    if result_exists {
        return Reconciled::Rejected(RejectReason::AlreadyCompleted);
    }

    let Some(stored) = stored else {
        return Reconciled::Accepted(ProgressSnapshot {
            guesses: incoming.guesses,
            elapsed_seconds: incoming.elapsed_seconds,
        });
    };

    if incoming.guesses.len() < stored.guesses.len()
        || incoming.guesses[..stored.guesses.len()] != stored.guesses[..]
    {
        return Reconciled::Rejected(RejectReason::HistoryModified);
    }

    Reconciled::Accepted(ProgressSnapshot {
        guesses: incoming.guesses,
        elapsed_seconds: stored.elapsed_seconds.max(incoming.elapsed_seconds),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| Word::new(*s).unwrap()).collect()
    }

    fn stored(guesses: &[&str], elapsed: u64) -> ProgressSnapshot {
        ProgressSnapshot {
            guesses: words(guesses),
            elapsed_seconds: elapsed,
        }
    }

    fn incoming(guesses: &[&str], elapsed: u64) -> ProgressUpdate {
        ProgressUpdate {
            guesses: words(guesses),
            elapsed_seconds: elapsed,
        }
    }

    #[test]
    fn first_save_accepted_unconditionally() {
        let result = reconcile(false, None, incoming(&["CRANE"], 12));
        assert_eq!(result, Reconciled::Accepted(stored(&["CRANE"], 12)));
    }

    #[test]
    fn completed_game_rejects_all_saves() {
        let result = reconcile(true, None, incoming(&["CRANE"], 12));
        assert_eq!(
            result,
            Reconciled::Rejected(RejectReason::AlreadyCompleted)
        );

        let prior = stored(&["CRANE"], 10);
        let result = reconcile(true, Some(&prior), incoming(&["CRANE", "SLATE"], 20));
        assert_eq!(
            result,
            Reconciled::Rejected(RejectReason::AlreadyCompleted)
        );
    }

    #[test]
    fn append_accepted() {
        let prior = stored(&["CRANE"], 30);
        let result = reconcile(false, Some(&prior), incoming(&["CRANE", "SLATE"], 45));
        assert_eq!(result, Reconciled::Accepted(stored(&["CRANE", "SLATE"], 45)));
    }

    #[test]
    fn truncation_rejected() {
        let prior = stored(&["CRANE", "SLATE"], 40);
        let result = reconcile(false, Some(&prior), incoming(&["CRANE"], 50));
        assert_eq!(
            result,
            Reconciled::Rejected(RejectReason::HistoryModified)
        );
    }

    #[test]
    fn rewritten_prefix_rejected() {
        let prior = stored(&["CRANE", "SLATE"], 40);
        let result = reconcile(
            false,
            Some(&prior),
            incoming(&["CRANE", "BRICK", "SLUMP"], 50),
        );
        assert_eq!(
            result,
            Reconciled::Rejected(RejectReason::HistoryModified)
        );
    }

    #[test]
    fn stale_elapsed_accepted_but_clamped_to_max() {
        let prior = stored(&["CRANE"], 30);
        let result = reconcile(false, Some(&prior), incoming(&["CRANE"], 20));
        // Accepted, but the stored time never regresses.
        assert_eq!(result, Reconciled::Accepted(stored(&["CRANE"], 30)));
    }

    #[test]
    fn identical_resave_is_idempotent() {
        let prior = stored(&["CRANE", "SLATE"], 40);
        let result = reconcile(
            false,
            Some(&prior),
            incoming(&["CRANE", "SLATE"], 40),
        );
        assert_eq!(result, Reconciled::Accepted(prior));
    }

    #[test]
    fn elapsed_moves_forward() {
        let prior = stored(&["CRANE"], 30);
        let result = reconcile(false, Some(&prior), incoming(&["CRANE"], 90));
        assert_eq!(result, Reconciled::Accepted(stored(&["CRANE"], 90)));
    }
}
