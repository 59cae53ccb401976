//! Pool verification
//!
//! Checks every puzzle in the pool against the dictionary so that no day
//! ships a target the player is not allowed to type.

use crate::wordlists::{Dictionary, WordPool};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fmt;

/// What is wrong with one target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemKind {
    NotInDictionary,
    RepeatedInPuzzle,
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInDictionary => write!(f, "not in dictionary"),
            Self::RepeatedInPuzzle => write!(f, "appears twice in the same puzzle"),
        }
    }
}

/// One offending target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolProblem {
    /// Challenge number of the puzzle (1-based pool position)
    pub challenge: usize,
    pub word: String,
    pub kind: ProblemKind,
}

/// Result of checking a whole pool
#[derive(Debug, Clone, Default)]
pub struct VerifyReport {
    pub checked: usize,
    pub problems: Vec<PoolProblem>,
}

impl VerifyReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.problems.is_empty()
    }
}

/// Check every puzzle in parallel
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
#[must_use]
pub fn verify_pool(pool: &WordPool, dictionary: &Dictionary) -> VerifyReport {
    let pb = ProgressBar::new(pool.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut problems: Vec<PoolProblem> = pool
        .entries()
        .par_iter()
        .enumerate()
        .flat_map_iter(|(i, targets)| {
            let challenge = i + 1;
            let mut found = Vec::new();
            for (b, target) in targets.iter().enumerate() {
                if !dictionary.is_valid(target.text()) {
                    found.push(PoolProblem {
                        challenge,
                        word: target.text().to_string(),
                        kind: ProblemKind::NotInDictionary,
                    });
                }
                if targets[..b].contains(target) {
                    found.push(PoolProblem {
                        challenge,
                        word: target.text().to_string(),
                        kind: ProblemKind::RepeatedInPuzzle,
                    });
                }
            }
            pb.inc(1);
            found
        })
        .collect();

    pb.finish_and_clear();
    problems.sort_by_key(|p| p.challenge);

    tracing::info!(
        checked = pool.len(),
        problems = problems.len(),
        "pool verified"
    );

    VerifyReport {
        checked: pool.len(),
        problems,
    }
}
