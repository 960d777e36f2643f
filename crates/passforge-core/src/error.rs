//! Error types for `passforge-core`.

use thiserror::Error;

/// Errors produced by password and passphrase generation.
///
/// Every variant is reachable only by violating a documented precondition;
/// in-range input never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The category set was empty, so the character pool has no members.
    #[error("no character categories selected")]
    NoCategoriesSelected,

    /// A password of zero characters was requested.
    #[error("password length must be at least 1")]
    InvalidLength,

    /// The word list holds no entries; passphrase generation is disabled.
    #[error("word list is empty")]
    EmptyWordList,

    /// A passphrase of zero words was requested.
    #[error("word count must be at least 1")]
    InvalidWordCount,
}
