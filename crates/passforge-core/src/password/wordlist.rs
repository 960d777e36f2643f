//! Word list loading for passphrase generation.
//!
//! The list is read once from a plain-text resource (one word per line) and
//! never mutated afterwards. A missing or empty resource leaves the list empty,
//! which disables passphrase generation for the life of the process.

use std::fs;
use std::path::Path;

/// Ordered, immutable list of candidate passphrase words.
///
/// Every entry is non-empty and trimmed. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Box<[String]>,
}

impl WordList {
    /// Load a word list from the file at `path`.
    ///
    /// Never fails: an unreadable file degrades to an empty list and a
    /// warning is logged.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => {
                let list = Self::parse(&text);
                if list.is_empty() {
                    tracing::warn!(
                        path = %path.display(),
                        "word list contains no words; passphrase generation disabled"
                    );
                } else {
                    tracing::info!(path = %path.display(), words = list.len(), "word list loaded");
                }
                list
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    "failed to read word list: {e}; passphrase generation disabled"
                );
                Self::default()
            }
        }
    }

    /// Parse word list text: one word per line, surrounding whitespace
    /// stripped, blank lines dropped.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Build a list from already-split words, applying the same trimming and
    /// blank filtering as [`WordList::parse`].
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .filter_map(|w| {
                let w = w.as_ref().trim();
                (!w.is_empty()).then(|| w.to_owned())
            })
            .collect();
        Self {
            words: words.into_boxed_slice(),
        }
    }

    /// Number of words, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// `true` when the list holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words in load order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Whether `word` is an entry of the list.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}
