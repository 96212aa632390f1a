//! Word dictionary and daily-answer selection
//!
//! The dictionary is an explicitly constructed lookup service: build it once
//! at startup (from the embedded lists or a file) and pass it to whatever
//! needs word validation. Tests inject small fake dictionaries the same way.

use crate::core::Word;
use chrono::NaiveDate;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

mod embedded {
    // Include generated word lists from build script
    include!(concat!(env!("OUT_DIR"), "/answers.rs"));
    include!(concat!(env!("OUT_DIR"), "/allowed.rs"));
}

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

/// Validated word lists: the guessable set plus the curated answer rotation
///
/// Answers are always guessable, whether or not the allowed list repeats them.
#[derive(Debug, Clone)]
pub struct Dictionary {
    allowed: FxHashSet<Word>,
    answers: Vec<Word>,
}

impl Dictionary {
    /// Build the dictionary from the lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_lists(words_from_slice(ANSWERS), words_from_slice(ALLOWED))
    }

    /// Build a dictionary from explicit word lists
    #[must_use]
    pub fn from_lists(answers: Vec<Word>, allowed: Vec<Word>) -> Self {
        let mut set: FxHashSet<Word> = allowed.into_iter().collect();
        for answer in &answers {
            set.insert(answer.clone());
        }
        Self {
            allowed: set,
            answers,
        }
    }

    /// Load an answers file, using the embedded allowed list for validation
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read.
    pub fn from_answers_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let content = fs::read_to_string(path)?;
        let answers = content
            .lines()
            .filter_map(|line| {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Word::new(trimmed).ok()
                }
            })
            .collect();
        Ok(Self::from_lists(answers, words_from_slice(ALLOWED)))
    }

    /// Whether a word may be played as a guess
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.allowed.contains(word)
    }

    /// The curated answer rotation
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// The offline answer for a calendar date
    ///
    /// Indexes the answer rotation by days since the Unix epoch, so offline
    /// players on the same date see the same word.
    ///
    /// # Panics
    /// Panics if the answer list is empty.
    #[must_use]
    pub fn word_for_date(&self, date: NaiveDate) -> &Word {
        assert!(!self.answers.is_empty(), "answer list must not be empty");
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).expect("valid epoch date");
        let days = (date - epoch).num_days();
        let index = days.rem_euclid(self.answers.len() as i64) as usize;
        &self.answers[index]
    }

    /// A random answer, for practice games outside the daily rotation
    #[must_use]
    pub fn random_answer(&self) -> Option<&Word> {
        use rand::prelude::IndexedRandom;
        self.answers.choose(&mut rand::rng())
    }
}

/// Convert an embedded string slice to a Word vector, skipping invalid entries
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn small_dict() -> Dictionary {
        Dictionary::from_lists(
            vec![w("crane"), w("slate"), w("audio")],
            vec![w("crane"), w("slate"), w("audio"), w("speed"), w("erase")],
        )
    }

    #[test]
    fn embedded_lists_are_valid() {
        for &word in &ANSWERS[..20] {
            assert_eq!(word.len(), 5, "Answer '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Answer '{word}' contains non-lowercase chars"
            );
        }
        assert_eq!(ANSWERS.len(), ANSWERS_COUNT);
        assert_eq!(ALLOWED.len(), ALLOWED_COUNT);
    }

    #[test]
    fn answers_have_no_repeated_letters() {
        // The daily rotation is curated to distinct-letter words.
        for &word in ANSWERS {
            let mut seen = [false; 26];
            for b in word.bytes() {
                let idx = (b - b'a') as usize;
                assert!(!seen[idx], "Answer '{word}' repeats a letter");
                seen[idx] = true;
            }
        }
    }

    #[test]
    fn embedded_answers_are_guessable() {
        let dict = Dictionary::embedded();
        for answer in dict.answers() {
            assert!(dict.contains(answer), "Answer '{answer}' not guessable");
        }
    }

    #[test]
    fn contains_checks_allowed_set() {
        let dict = small_dict();
        assert!(dict.contains(&w("speed")));
        assert!(dict.contains(&w("crane")));
        assert!(!dict.contains(&w("zzzzz")));
    }

    #[test]
    fn word_for_date_is_deterministic() {
        let dict = small_dict();
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(dict.word_for_date(date), dict.word_for_date(date));
    }

    #[test]
    fn word_for_date_rotates_daily() {
        let dict = small_dict();
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let next = date.succ_opt().unwrap();
        assert_ne!(dict.word_for_date(date), dict.word_for_date(next));
    }

    #[test]
    fn word_for_date_handles_pre_epoch_dates() {
        let dict = small_dict();
        let date = NaiveDate::from_ymd_opt(1969, 12, 25).unwrap();
        // Must not panic; index wraps with rem_euclid.
        let _ = dict.word_for_date(date);
    }

    #[test]
    fn random_answer_comes_from_rotation() {
        let dict = small_dict();
        let word = dict.random_answer().unwrap();
        assert!(dict.answers().contains(word));
    }

    #[test]
    fn answers_file_roundtrip() {
        let dir = std::env::temp_dir().join("wordle_daily_dict_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("answers.txt");
        fs::write(&path, "crane\nslate\n\nnot-a-word\n").unwrap();

        let dict = Dictionary::from_answers_file(&path).unwrap();
        assert_eq!(dict.answers().len(), 2);
        assert!(dict.contains(&w("crane")));
    }
}
