//! Accepted-guess dictionary

use rustc_hash::FxHashSet;

/// Case-insensitive membership set of accepted guesses
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// An empty dictionary
    ///
    /// This is what a failed dictionary load degrades to: every guess is rejected.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a dictionary from any list of words
    ///
    /// Entries are trimmed and lowercased; blank entries are ignored.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Parse a newline-delimited word list
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Check whether `word` is an accepted guess, ignoring case and surrounding whitespace
    #[must_use]
    pub fn is_valid(&self, word: &str) -> bool {
        self.words.contains(&normalize(word))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}
