//! Process-wide state assembled once at startup.

use std::path::Path;

use passforge_core::{Settings, WordList};

use crate::preferences;

/// Settings restored from disk plus the word list, loaded once per run.
///
/// Read-only after construction; a missing word list stays missing.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub settings: Settings,
    pub words: WordList,
}

impl AppState {
    #[must_use]
    pub const fn new(settings: Settings, words: WordList) -> Self {
        Self { settings, words }
    }

    /// Restore settings from `settings_dir` and read the word list at
    /// `wordlist`, if one was given.
    #[must_use]
    pub fn load(settings_dir: &Path, wordlist: Option<&Path>) -> Self {
        let settings = preferences::load_settings(settings_dir);
        let words = wordlist.map_or_else(
            || {
                tracing::debug!("no word list configured; passphrase generation disabled");
                WordList::default()
            },
            WordList::load,
        );
        Self::new(settings, words)
    }
}
