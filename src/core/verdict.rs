//! Guess evaluation against a target word
//!
//! Each guessed letter receives a verdict: `Correct` (right letter, right
//! position), `Present` (letter in the word, wrong position), or `Absent`.
//! Duplicate letters are handled by consume-tracking: a target letter can
//! satisfy at most one guess position.

use super::Word;

/// Per-letter feedback for a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Letter is in the target at this exact position
    Correct,
    /// Letter is in the target, but at a different position
    Present,
    /// Letter does not appear in the target (or all occurrences are spoken for)
    Absent,
}

impl Verdict {
    /// Check if a verdict row is a win (all `Correct`)
    #[must_use]
    pub fn all_correct(verdicts: &[Verdict; 5]) -> bool {
        verdicts.iter().all(|v| *v == Verdict::Correct)
    }
}

/// Evaluate `guess` against `target`, producing one verdict per position
///
/// This implements Wordle's exact feedback rules, including proper handling
/// of duplicate letters.
///
/// # Algorithm
/// 1. First pass: mark exact matches `Correct` and consume the target position
/// 2. Second pass: for each remaining position, scan target positions
///    left-to-right; the first unconsumed position holding the same letter is
///    consumed and the guess position marked `Present`
/// 3. Everything else stays `Absent`
///
/// The consume-tracking is what prevents a repeated guess letter from
/// double-counting a single occurrence in the target (e.g. SPEED against
/// ERASE scores each E at most once per E actually in ERASE).
///
/// # Examples
/// ```
/// use wordle_daily::core::{Word, Verdict, evaluate};
///
/// let guess = Word::new("crane").unwrap();
/// let target = Word::new("slate").unwrap();
/// let verdicts = evaluate(&guess, &target);
///
/// // C(absent) R(absent) A(correct) N(absent) E(correct)
/// assert_eq!(verdicts[2], Verdict::Correct);
/// assert_eq!(verdicts[4], Verdict::Correct);
/// ```
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> [Verdict; 5] {
    let mut verdicts = [Verdict::Absent; 5];
    let mut consumed = [false; 5];

    // First pass: exact matches
    for i in 0..5 {
        if guess.letter_at(i) == target.letter_at(i) {
            verdicts[i] = Verdict::Correct;
            consumed[i] = true;
        }
    }

    // Second pass: misplaced matches from the unconsumed pool
    for i in 0..5 {
        if verdicts[i] == Verdict::Correct {
            continue;
        }
        for j in 0..5 {
            if !consumed[j] && guess.letter_at(i) == target.letter_at(j) {
                verdicts[i] = Verdict::Present;
                consumed[j] = true;
                break;
            }
        }
    }

    verdicts
}
