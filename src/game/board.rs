//! The 6x5 board state machine
//!
//! Tracks the letter grid, the cursor, and the accumulated guess/verdict
//! history for a single game. The machine is `InProgress` until a guess
//! matches the target (`Won`) or six guesses miss (`Lost`); both terminal
//! states absorb, and a rejected operation never mutates state.

use crate::core::{Verdict, Word, evaluate};
use std::fmt;

/// Lifecycle of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Check whether no further guesses are accepted
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Error type for board contract violations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The current row has fewer than 5 letters
    RowIncomplete,
    /// The game already reached a terminal state
    GameOver,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowIncomplete => write!(f, "Not enough letters"),
            Self::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Result of a successful guess submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub won: bool,
    pub verdicts: [Verdict; 5],
}

/// The 6-row, 5-column game board
#[derive(Debug, Clone)]
pub struct Board {
    target: Word,
    cells: [[u8; 5]; 6],
    current_row: usize,
    current_col: usize,
    guesses: Vec<Word>,
    verdicts: Vec<[Verdict; 5]>,
    status: GameStatus,
}

impl Board {
    /// Create a fresh board for the given target word
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            cells: [[0; 5]; 6],
            current_row: 0,
            current_col: 0,
            guesses: Vec::with_capacity(6),
            verdicts: Vec::with_capacity(6),
            status: GameStatus::InProgress,
        }
    }

    /// The secret answer for this board
    #[inline]
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[inline]
    #[must_use]
    pub const fn current_col(&self) -> usize {
        self.current_col
    }

    /// Submitted guesses, oldest first
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Verdict rows parallel to `guesses()`
    #[inline]
    #[must_use]
    pub fn verdicts(&self) -> &[[Verdict; 5]] {
        &self.verdicts
    }

    /// Letter at a grid cell, if one has been typed there
    #[must_use]
    pub fn letter(&self, row: usize, col: usize) -> Option<u8> {
        let ch = self.cells[row][col];
        (ch != 0).then_some(ch)
    }

    /// Type a letter into the current row
    ///
    /// Returns `false` (and changes nothing) if the row is full or the game
    /// is over. Non-alphabetic input is rejected the same way.
    pub fn add_letter(&mut self, ch: char) -> bool {
        if self.status.is_terminal() || self.current_row >= 6 || self.current_col >= 5 {
            return false;
        }
        if !ch.is_ascii_alphabetic() {
            return false;
        }

        self.cells[self.current_row][self.current_col] = ch.to_ascii_uppercase() as u8;
        self.current_col += 1;
        true
    }

    /// Erase the most recently typed letter in the current row
    ///
    /// Returns `false` if the row is empty.
    pub fn remove_letter(&mut self) -> bool {
        if self.status.is_terminal() || self.current_col == 0 {
            return false;
        }

        self.current_col -= 1;
        self.cells[self.current_row][self.current_col] = 0;
        true
    }

    /// Whether the current row holds all 5 letters
    #[inline]
    #[must_use]
    pub const fn is_row_complete(&self) -> bool {
        self.current_col == 5
    }

    /// The letters typed so far in the current row
    #[must_use]
    pub fn current_guess(&self) -> String {
        self.cells[self.current_row][..self.current_col]
            .iter()
            .map(|&b| b as char)
            .collect()
    }

    /// Submit the current row as a guess
    ///
    /// Evaluates the row against the target, appends it to history, advances
    /// the cursor to the next row, and transitions to `Won` or `Lost` when
    /// terminal.
    ///
    /// # Errors
    /// Returns `BoardError::GameOver` after a terminal state and
    /// `BoardError::RowIncomplete` for a partial row. Neither mutates state.
    pub fn submit_guess(&mut self) -> Result<SubmitOutcome, BoardError> {
        if self.status.is_terminal() {
            return Err(BoardError::GameOver);
        }
        if !self.is_row_complete() {
            return Err(BoardError::RowIncomplete);
        }

        let guess = Word::new(self.current_guess()).map_err(|_| BoardError::RowIncomplete)?;
        let verdicts = evaluate(&guess, &self.target);
        let won = Verdict::all_correct(&verdicts);

        self.guesses.push(guess);
        self.verdicts.push(verdicts);
        self.current_row += 1;
        self.current_col = 0;

        if won {
            self.status = GameStatus::Won;
        } else if self.current_row == 6 {
            self.status = GameStatus::Lost;
        }

        Ok(SubmitOutcome { won, verdicts })
    }

    /// Replay a previously saved guess sequence onto a fresh board
    ///
    /// Each word is typed letter by letter and submitted, so the resulting
    /// board (and any keyboard fed from its verdicts) is identical to an
    /// uninterrupted session that made the same guesses.
    ///
    /// # Errors
    /// Returns `BoardError::GameOver` if the sequence runs past a terminal
    /// state (more than 6 guesses, or guesses after a win).
    pub fn replay(&mut self, guesses: &[Word]) -> Result<(), BoardError> {
        for word in guesses {
            if self.status.is_terminal() {
                return Err(BoardError::GameOver);
            }
            for &b in word.chars() {
                self.add_letter(b as char);
            }
            self.submit_guess()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(target: &str) -> Board {
        Board::new(Word::new(target).unwrap())
    }

    fn type_word(b: &mut Board, word: &str) {
        for ch in word.chars() {
            assert!(b.add_letter(ch));
        }
    }

    #[test]
    fn add_letter_advances_cursor() {
        let mut b = board("crane");
        assert!(b.add_letter('s'));
        assert_eq!(b.current_col(), 1);
        assert_eq!(b.letter(0, 0), Some(b'S'));
    }

    #[test]
    fn add_letter_rejects_full_row() {
        let mut b = board("crane");
        type_word(&mut b, "slate");
        assert!(!b.add_letter('x'));
        assert_eq!(b.current_col(), 5);
    }

    #[test]
    fn add_letter_rejects_non_alpha() {
        let mut b = board("crane");
        assert!(!b.add_letter('3'));
        assert!(!b.add_letter(' '));
        assert_eq!(b.current_col(), 0);
    }

    #[test]
    fn remove_letter_at_row_start_is_noop() {
        let mut b = board("crane");
        assert!(!b.remove_letter());
        assert_eq!(b.current_col(), 0);
    }

    #[test]
    fn remove_letter_clears_cell() {
        let mut b = board("crane");
        b.add_letter('s');
        b.add_letter('l');
        assert!(b.remove_letter());
        assert_eq!(b.current_col(), 1);
        assert_eq!(b.letter(0, 1), None);
    }

    #[test]
    fn submit_incomplete_row_rejected_without_mutation() {
        let mut b = board("crane");
        type_word(&mut b, "sla");
        let err = b.submit_guess().unwrap_err();
        assert_eq!(err, BoardError::RowIncomplete);
        assert_eq!(b.current_row(), 0);
        assert_eq!(b.current_col(), 3);
        assert!(b.guesses().is_empty());
    }

    #[test]
    fn submit_advances_row_and_resets_col() {
        let mut b = board("crane");
        type_word(&mut b, "slate");
        let outcome = b.submit_guess().unwrap();
        assert!(!outcome.won);
        assert_eq!(b.current_row(), 1);
        assert_eq!(b.current_col(), 0);
        assert_eq!(b.guesses().len(), 1);
        assert_eq!(b.verdicts().len(), 1);
        assert_eq!(b.status(), GameStatus::InProgress);
    }

    #[test]
    fn winning_guess_transitions_to_won() {
        let mut b = board("crane");
        type_word(&mut b, "crane");
        let outcome = b.submit_guess().unwrap();
        assert!(outcome.won);
        assert_eq!(outcome.verdicts, [Verdict::Correct; 5]);
        assert_eq!(b.status(), GameStatus::Won);
    }

    #[test]
    fn six_misses_transition_to_lost() {
        let mut b = board("crane");
        for _ in 0..6 {
            type_word(&mut b, "slump");
            assert!(!b.submit_guess().unwrap().won);
        }
        assert_eq!(b.status(), GameStatus::Lost);
        assert_eq!(b.current_row(), 6);
    }

    #[test]
    fn seventh_guess_rejected_without_mutation() {
        let mut b = board("crane");
        for _ in 0..6 {
            type_word(&mut b, "slump");
            b.submit_guess().unwrap();
        }
        assert!(!b.add_letter('x'));
        assert_eq!(b.submit_guess().unwrap_err(), BoardError::GameOver);
        assert_eq!(b.guesses().len(), 6);
        assert_eq!(b.status(), GameStatus::Lost);
    }

    #[test]
    fn no_input_accepted_after_win() {
        let mut b = board("crane");
        type_word(&mut b, "crane");
        b.submit_guess().unwrap();
        assert!(!b.add_letter('a'));
        assert!(!b.remove_letter());
        assert_eq!(b.submit_guess().unwrap_err(), BoardError::GameOver);
    }

    #[test]
    fn guess_count_matches_current_row() {
        let mut b = board("crane");
        for n in 1..=3 {
            type_word(&mut b, "slump");
            b.submit_guess().unwrap();
            assert_eq!(b.guesses().len(), n);
            assert_eq!(b.current_row(), n);
        }
    }

    #[test]
    fn replay_reproduces_uninterrupted_state() {
        let guesses: Vec<Word> = ["SLATE", "BRICK"]
            .iter()
            .map(|s| Word::new(*s).unwrap())
            .collect();

        let mut live = board("crane");
        for g in &guesses {
            type_word(&mut live, g.text());
            live.submit_guess().unwrap();
        }

        let mut resumed = board("crane");
        resumed.replay(&guesses).unwrap();

        assert_eq!(resumed.guesses(), live.guesses());
        assert_eq!(resumed.verdicts(), live.verdicts());
        assert_eq!(resumed.current_row(), live.current_row());
        assert_eq!(resumed.status(), live.status());
    }

    #[test]
    fn replay_past_terminal_fails() {
        let guesses: Vec<Word> = ["CRANE", "SLATE"]
            .iter()
            .map(|s| Word::new(*s).unwrap())
            .collect();
        let mut b = board("crane");
        assert_eq!(b.replay(&guesses).unwrap_err(), BoardError::GameOver);
    }
}
