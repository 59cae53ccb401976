//! Picking today's puzzle and starting a session for it

use crate::game::{GameConfig, GameSession};
use crate::storage::{StateStore, restore_session};
use crate::wordlists::{Dictionary, Targets, WordPool, day_index};
use chrono::NaiveDate;
use rand::Rng;

/// The puzzle being played
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    /// Challenge number shown to the player (1-based)
    pub number: i64,
    pub date: NaiveDate,
    pub targets: Targets,
    /// Practice puzzles are picked at random and never saved
    pub practice: bool,
}

impl Challenge {
    /// The puzzle for `date`
    #[must_use]
    pub fn daily(pool: &WordPool, config: &GameConfig, date: NaiveDate) -> Self {
        let number = day_index(date, config.epoch);
        Self {
            number,
            date,
            targets: pool.targets_for_day(number),
            practice: false,
        }
    }

    /// A uniformly random puzzle from the pool
    #[must_use]
    pub fn practice(pool: &WordPool, date: NaiveDate) -> Self {
        let number = rand::rng().random_range(1..=pool.len()) as i64;
        Self {
            number,
            date,
            targets: pool.targets_for_day(number),
            practice: true,
        }
    }

    /// Whether progress on this puzzle belongs in the saved record
    ///
    /// Only today's daily puzzle is saved. Practice puzzles and other days are
    /// played in memory so they never touch today's record.
    #[must_use]
    pub fn persists(&self, today: NaiveDate) -> bool {
        !self.practice && self.date == today
    }

    /// Create a session for this puzzle, replaying saved progress if it persists
    ///
    /// Unreadable saved state is logged and ignored.
    pub fn start<'a, S: StateStore + ?Sized>(
        &self,
        dictionary: &'a Dictionary,
        config: GameConfig,
        store: &mut S,
        today: NaiveDate,
    ) -> GameSession<'a> {
        let mut session = GameSession::new(self.targets.clone(), dictionary, config);
        if self.persists(today)
            && let Err(e) = restore_session(&mut session, store, self.date)
        {
            tracing::warn!(error = %e, "could not restore saved progress");
        }
        session
    }
}
