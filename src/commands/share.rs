//! Share summary for the saved game

use super::challenge::Challenge;
use crate::game::GameConfig;
use crate::storage::StateStore;
use crate::wordlists::Dictionary;
use chrono::NaiveDate;
use thiserror::Error;

/// Why there is nothing to share
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    #[error("practice games are never saved, so there is nothing to share")]
    Practice,
    #[error("only today's game ({today}) is saved; nothing to share for {date}")]
    OtherDay { date: NaiveDate, today: NaiveDate },
}

/// Share text for the progress saved in `store`
///
/// A game still in progress yields a partial summary.
///
/// # Errors
///
/// Returns `ShareError` when the challenge is one whose progress is never saved.
pub fn saved_summary<S: StateStore + ?Sized>(
    challenge: &Challenge,
    dictionary: &Dictionary,
    config: GameConfig,
    store: &mut S,
    today: NaiveDate,
) -> Result<String, ShareError> {
    if challenge.practice {
        return Err(ShareError::Practice);
    }
    if !challenge.persists(today) {
        return Err(ShareError::OtherDay {
            date: challenge.date,
            today,
        });
    }

    let session = challenge.start(dictionary, config, store, today);
    if !session.is_over() {
        tracing::warn!(
            turn = session.current_turn(),
            "game still in progress; summary is partial"
        );
    }
    Ok(session.share_summary(challenge.number))
}
