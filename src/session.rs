//! One user's game for one daily word
//!
//! The session ties the board, the dictionary, the progress reconciler, and
//! the streak rules together over a `GameStore`. Resuming replays the saved
//! guesses through the board, so the in-memory state is indistinguishable
//! from an uninterrupted session. Finalization relies on the store's
//! uniqueness constraint as the race guard: whichever submit lands second
//! sees `Duplicate` and must treat the game as already played.

use crate::core::{Verdict, Word};
use crate::dictionary::Dictionary;
use crate::game::{Board, BoardError, KeyboardState, SubmitOutcome};
use crate::progress::{ProgressUpdate, Reconciled};
use crate::store::{GameRecord, GameStore, StoreError, UserId, WordId};
use crate::streak::Streak;
use chrono::{NaiveDate, Utc};
use std::fmt;

/// A scheduled answer: the secret word plus its external identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyWord {
    pub id: WordId,
    pub date: NaiveDate,
    pub answer: Word,
}

/// Error type for session operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A finalized result already exists; display it instead of a board
    AlreadyPlayed(GameRecord),
    /// Lost the race to write the final result; treat as `AlreadyPlayed`
    Duplicate,
    /// The submitted row is not in the dictionary
    NotInWordList(String),
    /// A board contract violation (incomplete row, terminal state)
    Board(BoardError),
    /// The store failed on a non-advisory operation
    Store(StoreError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyPlayed(_) => write!(f, "Already played today"),
            Self::Duplicate => write!(f, "Result was already recorded"),
            Self::NotInWordList(word) => write!(f, "'{word}' is not in the word list"),
            Self::Board(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<BoardError> for SessionError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}

impl From<StoreError> for SessionError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate => Self::Duplicate,
            other => Self::Store(other),
        }
    }
}

/// Everything the presentation layer needs after a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub won: bool,
    pub attempts: u8,
    pub elapsed_seconds: u64,
    pub target: Word,
    pub guesses: Vec<Word>,
    /// 1-based position among solvers of this word by completion time; 0 for a loss
    pub rank: u32,
    pub streak: Streak,
}

/// Result of submitting one guess through the session
#[derive(Debug)]
pub enum TurnOutcome {
    /// The game goes on; `save` reports how the auto-save fared and is the
    /// caller's to ignore
    Continue {
        verdicts: [Verdict; 5],
        save: Result<Reconciled, StoreError>,
    },
    /// The game ended and the result is durably recorded
    Finished(GameSummary),
}

/// Orchestrates one (user, daily word) pairing
#[derive(Debug)]
pub struct DailyGameSession<'a, S: GameStore> {
    store: &'a S,
    dictionary: &'a Dictionary,
    user: UserId,
    word: DailyWord,
    board: Board,
    keyboard: KeyboardState,
    elapsed_seconds: u64,
}

impl<'a, S: GameStore> DailyGameSession<'a, S> {
    /// Start (or resume) the user's game for a daily word
    ///
    /// If a finalized result exists the session refuses to start and hands
    /// the stored record back. Otherwise any saved snapshot is replayed
    /// through the board and keyboard.
    ///
    /// # Errors
    /// `AlreadyPlayed` with the existing record, `Store` on persistence
    /// failure, or `Board` if a stored snapshot is internally inconsistent.
    pub fn start(
        store: &'a S,
        dictionary: &'a Dictionary,
        user: UserId,
        word: DailyWord,
    ) -> Result<Self, SessionError> {
        if let Some(record) = store.find_result(user, word.id)? {
            return Err(SessionError::AlreadyPlayed(record));
        }

        let mut board = Board::new(word.answer.clone());
        let mut keyboard = KeyboardState::new();
        let mut elapsed_seconds = 0;

        if let Some(snapshot) = store.load_progress(user, word.id)? {
            board.replay(&snapshot.guesses)?;
            for (guess, verdicts) in board.guesses().iter().zip(board.verdicts()) {
                keyboard.apply(guess, verdicts);
            }
            elapsed_seconds = snapshot.elapsed_seconds;
        }

        Ok(Self {
            store,
            dictionary,
            user,
            word,
            board,
            keyboard,
            elapsed_seconds,
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub fn word(&self) -> &DailyWord {
        &self.word
    }

    #[must_use]
    pub const fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Update the elapsed clock from the timer owner
    pub const fn set_elapsed(&mut self, seconds: u64) {
        self.elapsed_seconds = seconds;
    }

    /// Type a letter into the current row
    pub fn add_letter(&mut self, ch: char) -> bool {
        self.board.add_letter(ch)
    }

    /// Erase the last typed letter
    pub fn remove_letter(&mut self) -> bool {
        self.board.remove_letter()
    }

    /// Submit the current row
    ///
    /// The row is validated against the dictionary before the board sees it;
    /// an unknown word leaves all state untouched. A non-terminal guess
    /// triggers an advisory auto-save whose outcome is returned, not acted
    /// on. A terminal guess finalizes the game: result written exactly once,
    /// snapshot deleted, rank computed, streak advanced.
    ///
    /// # Errors
    /// `NotInWordList`, `Board` for contract violations, `Duplicate` if a
    /// concurrent session finalized first, `Store` on persistence failure.
    pub fn submit_guess(&mut self) -> Result<TurnOutcome, SessionError> {
        if !self.board.is_row_complete() {
            return Err(SessionError::Board(BoardError::RowIncomplete));
        }
        let row = self.board.current_guess();
        let word = Word::new(&row).map_err(|_| SessionError::NotInWordList(row.clone()))?;
        if !self.dictionary.contains(&word) {
            return Err(SessionError::NotInWordList(row));
        }

        let SubmitOutcome { won, verdicts } = self.board.submit_guess()?;
        self.keyboard.apply(&word, &verdicts);

        if self.board.status().is_terminal() {
            return Ok(TurnOutcome::Finished(self.finalize(won)?));
        }

        let save = self.store.save_progress(
            self.user,
            self.word.id,
            ProgressUpdate {
                guesses: self.board.guesses().to_vec(),
                elapsed_seconds: self.elapsed_seconds,
            },
        );
        Ok(TurnOutcome::Continue { verdicts, save })
    }

    fn finalize(&mut self, won: bool) -> Result<GameSummary, SessionError> {
        let completed_at = Utc::now();
        let guesses = self.board.guesses().to_vec();
        let attempts = guesses.len() as u8;

        let record = GameRecord {
            word_id: self.word.id,
            attempts,
            solved: won,
            time_seconds: Some(self.elapsed_seconds),
            guess_history: guesses.clone(),
            completed_at,
        };

        // The unique (user, word) constraint is the authoritative guard: a
        // concurrent finalize surfaces here as Duplicate and nothing below
        // this line runs twice for one game.
        self.store.insert_result(self.user, record)?;
        self.store.delete_progress(self.user, self.word.id)?;

        let rank = if won {
            self.store.count_solved_before(self.word.id, completed_at)? + 1
        } else {
            0
        };

        let streak = Streak::advance(self.store.load_streak(self.user)?, won, self.word.date);
        self.store.save_streak(self.user, &streak)?;

        Ok(GameSummary {
            won,
            attempts,
            elapsed_seconds: self.elapsed_seconds,
            target: self.word.answer.clone(),
            guesses,
            rank,
            streak,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameStatus;
    use crate::store::MemoryStore;
    use chrono::TimeZone;

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn dict() -> Dictionary {
        Dictionary::from_lists(
            vec![w("crane"), w("slate")],
            vec![
                w("crane"),
                w("slate"),
                w("brick"),
                w("slump"),
                w("audio"),
                w("motif"),
            ],
        )
    }

    fn daily(id: WordId, answer: &str) -> DailyWord {
        DailyWord {
            id,
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            answer: w(answer),
        }
    }

    fn type_and_submit<S: GameStore>(
        session: &mut DailyGameSession<'_, S>,
        guess: &str,
    ) -> Result<TurnOutcome, SessionError> {
        for ch in guess.chars() {
            session.add_letter(ch);
        }
        session.submit_guess()
    }

    #[test]
    fn fresh_start_has_empty_board() {
        let store = MemoryStore::new();
        let dict = dict();
        let session = DailyGameSession::start(&store, &dict, 1, daily(10, "crane")).unwrap();
        assert!(session.board().guesses().is_empty());
        assert_eq!(session.elapsed_seconds(), 0);
    }

    #[test]
    fn unknown_word_rejected_before_board() {
        let store = MemoryStore::new();
        let dict = dict();
        let mut session = DailyGameSession::start(&store, &dict, 1, daily(10, "crane")).unwrap();

        let err = type_and_submit(&mut session, "zzzzz").unwrap_err();
        assert!(matches!(err, SessionError::NotInWordList(_)));
        // Board untouched: row not submitted, letters still typed.
        assert_eq!(session.board().current_row(), 0);
        assert_eq!(session.board().current_col(), 5);
    }

    #[test]
    fn incomplete_row_rejected() {
        let store = MemoryStore::new();
        let dict = dict();
        let mut session = DailyGameSession::start(&store, &dict, 1, daily(10, "crane")).unwrap();
        session.add_letter('s');
        assert_eq!(
            session.submit_guess().unwrap_err(),
            SessionError::Board(BoardError::RowIncomplete)
        );
    }

    #[test]
    fn non_terminal_guess_saves_progress() {
        let store = MemoryStore::new();
        let dict = dict();
        let mut session = DailyGameSession::start(&store, &dict, 1, daily(10, "crane")).unwrap();
        session.set_elapsed(25);

        let outcome = type_and_submit(&mut session, "slate").unwrap();
        let TurnOutcome::Continue { save, .. } = outcome else {
            panic!("expected Continue");
        };
        assert!(matches!(save, Ok(Reconciled::Accepted(_))));

        let snapshot = store.load_progress(1, 10).unwrap().unwrap();
        assert_eq!(snapshot.guesses, vec![w("slate")]);
        assert_eq!(snapshot.elapsed_seconds, 25);
    }

    #[test]
    fn win_finalizes_and_cleans_up() {
        let store = MemoryStore::new();
        let dict = dict();
        let mut session = DailyGameSession::start(&store, &dict, 1, daily(10, "crane")).unwrap();
        session.set_elapsed(40);
        type_and_submit(&mut session, "slate").unwrap();

        let outcome = type_and_submit(&mut session, "crane").unwrap();
        let TurnOutcome::Finished(summary) = outcome else {
            panic!("expected Finished");
        };

        assert!(summary.won);
        assert_eq!(summary.attempts, 2);
        assert_eq!(summary.rank, 1);
        assert_eq!(summary.streak.current, 1);
        assert_eq!(summary.guesses, vec![w("slate"), w("crane")]);

        let record = store.find_result(1, 10).unwrap().unwrap();
        assert!(record.solved);
        assert_eq!(record.attempts, 2);
        assert!(store.load_progress(1, 10).unwrap().is_none());
    }

    #[test]
    fn six_misses_finalize_as_loss_without_rank() {
        let store = MemoryStore::new();
        let dict = dict();
        let mut session = DailyGameSession::start(&store, &dict, 1, daily(10, "motif")).unwrap();

        for _ in 0..5 {
            assert!(matches!(
                type_and_submit(&mut session, "slump").unwrap(),
                TurnOutcome::Continue { .. }
            ));
        }
        let TurnOutcome::Finished(summary) = type_and_submit(&mut session, "slump").unwrap()
        else {
            panic!("expected Finished");
        };

        assert!(!summary.won);
        assert_eq!(summary.attempts, 6);
        assert_eq!(summary.rank, 0);
        assert_eq!(summary.streak.current, 0);
        assert_eq!(session.board().status(), GameStatus::Lost);
    }

    #[test]
    fn start_refuses_completed_game() {
        let store = MemoryStore::new();
        let dict = dict();
        {
            let mut session =
                DailyGameSession::start(&store, &dict, 1, daily(10, "crane")).unwrap();
            type_and_submit(&mut session, "crane").unwrap();
        }

        let err = DailyGameSession::start(&store, &dict, 1, daily(10, "crane")).unwrap_err();
        let SessionError::AlreadyPlayed(record) = err else {
            panic!("expected AlreadyPlayed");
        };
        assert!(record.solved);
    }

    #[test]
    fn resume_replays_snapshot_to_identical_state() {
        let store = MemoryStore::new();
        let dict = dict();

        // Play two guesses, then drop the session mid-game.
        let mut first = DailyGameSession::start(&store, &dict, 1, daily(10, "crane")).unwrap();
        first.set_elapsed(33);
        type_and_submit(&mut first, "slate").unwrap();
        type_and_submit(&mut first, "brick").unwrap();
        let live_verdicts = first.board().verdicts().to_vec();
        let live_kb_e = first.keyboard().state(b'E');
        drop(first);

        let resumed = DailyGameSession::start(&store, &dict, 1, daily(10, "crane")).unwrap();
        assert_eq!(resumed.board().guesses(), &[w("slate"), w("brick")]);
        assert_eq!(resumed.board().verdicts(), live_verdicts.as_slice());
        assert_eq!(resumed.board().current_row(), 2);
        assert_eq!(resumed.keyboard().state(b'E'), live_kb_e);
        assert_eq!(resumed.elapsed_seconds(), 33);
    }

    #[test]
    fn losing_the_finalize_race_surfaces_duplicate() {
        let store = MemoryStore::new();
        let dict = dict();
        let mut session = DailyGameSession::start(&store, &dict, 1, daily(10, "crane")).unwrap();

        // Another device finalizes the same game first.
        store
            .insert_result(
                1,
                GameRecord {
                    word_id: 10,
                    attempts: 4,
                    solved: true,
                    time_seconds: Some(90),
                    guess_history: vec![w("crane")],
                    completed_at: Utc::now(),
                },
            )
            .unwrap();

        let err = type_and_submit(&mut session, "crane").unwrap_err();
        assert_eq!(err, SessionError::Duplicate);
    }

    #[test]
    fn ranks_are_strictly_ordered_and_gap_free() {
        let store = MemoryStore::new();
        let dict = dict();

        // Seed earlier completions: two solved, one lost.
        for (user, solved, at) in [(2, true, 100), (3, false, 150), (4, true, 200)] {
            store
                .insert_result(
                    user,
                    GameRecord {
                        word_id: 10,
                        attempts: 3,
                        solved,
                        time_seconds: Some(60),
                        guess_history: vec![w("slate")],
                        completed_at: Utc.timestamp_opt(at, 0).unwrap(),
                    },
                )
                .unwrap();
        }

        let mut session = DailyGameSession::start(&store, &dict, 1, daily(10, "crane")).unwrap();
        let TurnOutcome::Finished(summary) = type_and_submit(&mut session, "crane").unwrap()
        else {
            panic!("expected Finished");
        };

        // Two earlier solves count; the earlier loss does not.
        assert_eq!(summary.rank, 3);
    }

    #[test]
    fn resolved_identity_drives_the_session() {
        use crate::auth::{Identity, TokenResolver, TokenTable};

        let mut tokens = TokenTable::new();
        tokens.issue(
            "tok",
            Identity {
                user_id: 9,
                username: "ada".to_string(),
            },
        );
        let who = tokens.resolve("tok").unwrap();

        let store = MemoryStore::new();
        let dict = dict();
        let mut session =
            DailyGameSession::start(&store, &dict, who.user_id, daily(10, "crane")).unwrap();
        type_and_submit(&mut session, "crane").unwrap();

        assert!(store.find_result(9, 10).unwrap().unwrap().solved);
    }

    #[test]
    fn streak_extends_across_consecutive_days() {
        let store = MemoryStore::new();
        let dict = dict();

        let day1 = daily(10, "crane");
        let mut day2 = daily(11, "slate");
        day2.date = day1.date.succ_opt().unwrap();

        let mut session = DailyGameSession::start(&store, &dict, 1, day1).unwrap();
        type_and_submit(&mut session, "crane").unwrap();

        let mut session = DailyGameSession::start(&store, &dict, 1, day2).unwrap();
        let TurnOutcome::Finished(summary) = type_and_submit(&mut session, "slate").unwrap()
        else {
            panic!("expected Finished");
        };
        assert_eq!(summary.streak.current, 2);
        assert_eq!(summary.streak.longest, 2);
        assert_eq!(summary.streak.total_games, 2);
    }
}
