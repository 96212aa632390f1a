//! Per-letter keyboard state
//!
//! Tracks the best verdict seen so far for each letter A-Z, so the on-screen
//! keyboard can hint which letters are ruled out, misplaced, or locked in.
//! Upgrades are monotonic: `Unused < Absent < Present < Correct`, and a
//! letter never moves back down.

use crate::core::{Verdict, Word};

/// Best-so-far knowledge about a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum KeyState {
    Unused,
    Absent,
    Present,
    Correct,
}

impl From<Verdict> for KeyState {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Correct => Self::Correct,
            Verdict::Present => Self::Present,
            Verdict::Absent => Self::Absent,
        }
    }
}

/// The 26-letter state map behind the virtual keyboard
#[derive(Debug, Clone)]
pub struct KeyboardState {
    states: [KeyState; 26],
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            states: [KeyState::Unused; 26],
        }
    }

    /// State of a letter, given as an ASCII byte (either case)
    #[must_use]
    pub fn state(&self, letter: u8) -> KeyState {
        let upper = letter.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            self.states[(upper - b'A') as usize]
        } else {
            KeyState::Unused
        }
    }

    /// Apply one guess's verdicts, upgrading letters but never downgrading
    pub fn apply(&mut self, guess: &Word, verdicts: &[Verdict; 5]) {
        for i in 0..5 {
            let idx = (guess.letter_at(i) - b'A') as usize;
            let incoming = KeyState::from(verdicts[i]);
            if incoming > self.states[idx] {
                self.states[idx] = incoming;
            }
        }
    }
}
