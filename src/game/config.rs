//! Game rules and presentation constants

use chrono::NaiveDate;

/// Turns allowed before the game is lost
pub const MAX_GUESSES: usize = 10;

/// Link printed at the foot of every share summary
pub const SHARE_LINK: &str = "https://jegomei.github.io/Cuardle/";

/// Configuration for a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub max_guesses: usize,
    /// Calendar date of challenge #1
    pub epoch: NaiveDate,
    pub share_link: String,
}

impl GameConfig {
    /// Score recorded for a board that was never solved
    #[must_use]
    pub const fn failed_score(&self) -> usize {
        self.max_guesses + 1
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: MAX_GUESSES,
            epoch: NaiveDate::from_ymd_opt(2025, 1, 1).expect("static epoch is a valid date"),
            share_link: SHARE_LINK.to_string(),
        }
    }
}
