//! Shareable plain-text summary of a session

use super::session::{GameSession, TurnRow};
use crate::core::{NUM_BOARDS, WORD_LENGTH};

/// Boards shown side by side on each line
const BOARDS_PER_LINE: usize = 2;

impl GameSession<'_> {
    /// Score for each board: the solving turn, or `max_guesses + 1` if unsolved
    #[must_use]
    pub fn board_scores(&self) -> [usize; NUM_BOARDS] {
        let failed = self.config().failed_score();
        self.boards()
            .each_ref()
            .map(|b| b.solved_at().unwrap_or(failed))
    }

    /// Sum of all board scores; lower is better
    #[must_use]
    pub fn total_score(&self) -> usize {
        self.board_scores().iter().sum()
    }

    /// Compact spoiler-free summary for sharing
    ///
    /// ```text
    /// Cuordle #12
    /// Total: 21
    ///
    /// 3 5
    /// 2 11
    ///
    /// □▪□□□ □□■□□
    /// ...
    ///
    /// Reto #12 · https://...
    /// ```
    #[must_use]
    pub fn share_summary(&self, challenge: i64) -> String {
        let history = self.history();
        let mut lines = vec![
            format!("Cuordle #{challenge}"),
            format!("Total: {}", self.total_score()),
            String::new(),
        ];

        for pair in self.board_scores().chunks(BOARDS_PER_LINE) {
            let scores: Vec<String> = pair.iter().map(ToString::to_string).collect();
            lines.push(scores.join(" "));
        }

        for first in (0..NUM_BOARDS).step_by(BOARDS_PER_LINE) {
            lines.push(String::new());
            lines.extend(history.iter().map(|row| grid_line(row, first)));
        }

        lines.push(String::new());
        lines.push(format!("Reto #{challenge} · {}", self.config().share_link));
        lines.join("\n")
    }
}

fn grid_line(row: &TurnRow, first: usize) -> String {
    row[first..(first + BOARDS_PER_LINE).min(NUM_BOARDS)]
        .iter()
        .map(|cell| match cell {
            Some(feedback) => feedback.to_glyphs(),
            None => " ".repeat(WORD_LENGTH),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
