//! Daily streak tracking
//!
//! One record per user, advanced exactly once per completed game. The
//! at-most-one-result-per-day guarantee upstream is what makes a single
//! advance per calendar day safe to assume.

use chrono::NaiveDate;

/// A user's streak record and lifetime counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Streak {
    pub current: u32,
    pub longest: u32,
    pub last_played: Option<NaiveDate>,
    pub total_games: u32,
    pub total_wins: u32,
}

impl Streak {
    /// Record for a user's first ever completed game
    #[must_use]
    pub fn first_game(solved: bool, today: NaiveDate) -> Self {
        let start = u32::from(solved);
        Self {
            current: start,
            longest: start,
            last_played: Some(today),
            total_games: 1,
            total_wins: u32::from(solved),
        }
    }

    /// Advance the record for a completed game on `today`
    ///
    /// A solve continues the streak only if the previous play was exactly
    /// yesterday; a gap restarts it at 1; a loss resets it to 0. The longest
    /// streak and lifetime counters are maintained either way, and
    /// `last_played` always becomes `today`.
    pub fn record_game(&mut self, solved: bool, today: NaiveDate) {
        self.total_games += 1;

        if solved {
            self.total_wins += 1;

            let yesterday = today.pred_opt();
            match (self.last_played, yesterday) {
                (Some(last), Some(yesterday)) if last == yesterday => self.current += 1,
                (Some(last), Some(yesterday)) if last < yesterday => self.current = 1,
                (None, _) => self.current = 1,
                _ => {}
            }

            if self.current > self.longest {
                self.longest = self.current;
            }
        } else {
            self.current = 0;
        }

        self.last_played = Some(today);
    }

    /// Advance an optional stored record, creating one for a first game
    #[must_use]
    pub fn advance(existing: Option<Self>, solved: bool, today: NaiveDate) -> Self {
        match existing {
            Some(mut streak) => {
                streak.record_game(solved, today);
                streak
            }
            None => Self::first_game(solved, today),
        }
    }

    /// Win percentage over all completed games
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            f64::from(self.total_wins) * 100.0 / f64::from(self.total_games)
        }
    }
}
