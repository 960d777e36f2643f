//! Generator settings: the flat record the front end persists and restores.
//!
//! The core never reads or writes the record itself. It only defines its
//! shape, its defaults, and the range checks the front end applies before
//! calling the generators.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::password::charset::CategorySet;
use crate::password::{
    DEFAULT_PASSWORD_LENGTH, DEFAULT_WORD_COUNT, MAX_PASSWORD_LENGTH, MAX_WORD_COUNT,
    MIN_PASSWORD_LENGTH, MIN_WORD_COUNT,
};

/// Range and selection failures reported to the user before generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Password length must be between 8 and 128 characters (got {0}).")]
    PasswordLengthOutOfRange(usize),

    #[error("Please select at least one character type (e.g., lowercase, numbers).")]
    NoCharacterTypes,

    #[error("Number of passphrase words must be between 3 and 10 (got {0}).")]
    WordCountOutOfRange(usize),
}

/// Persisted generator settings.
///
/// Keys are `snake_case` and match the stored key-value record. Numeric
/// fields accept either a number or a numeric string, booleans accept a bool
/// or `"true"`/`"false"`/`"1"`/`"0"`, and missing keys take their defaults.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_password_length", deserialize_with = "lenient_usize")]
    pub password_length: usize,

    #[serde(default = "default_true", deserialize_with = "lenient_bool")]
    pub use_uppercase: bool,

    #[serde(default = "default_true", deserialize_with = "lenient_bool")]
    pub use_lowercase: bool,

    #[serde(default = "default_true", deserialize_with = "lenient_bool")]
    pub use_digits: bool,

    /// Off by default for compatibility with sites that reject punctuation.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub use_symbols: bool,

    #[serde(default = "default_word_count", deserialize_with = "lenient_usize")]
    pub num_passphrase_words: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            password_length: default_password_length(),
            use_uppercase: true,
            use_lowercase: true,
            use_digits: true,
            use_symbols: false,
            num_passphrase_words: default_word_count(),
        }
    }
}

const fn default_password_length() -> usize {
    DEFAULT_PASSWORD_LENGTH
}
const fn default_word_count() -> usize {
    DEFAULT_WORD_COUNT
}
const fn default_true() -> bool {
    true
}

impl Settings {
    /// The enabled character categories.
    #[must_use]
    pub const fn categories(&self) -> CategorySet {
        CategorySet {
            uppercase: self.use_uppercase,
            lowercase: self.use_lowercase,
            digits: self.use_digits,
            symbols: self.use_symbols,
        }
    }

    /// Store `categories` into the four `use_*` flags.
    pub fn set_categories(&mut self, categories: CategorySet) {
        self.use_uppercase = categories.uppercase;
        self.use_lowercase = categories.lowercase;
        self.use_digits = categories.digits;
        self.use_symbols = categories.symbols;
    }

    /// Check the password options the way the front end does before generating.
    ///
    /// # Errors
    ///
    /// - [`SettingsError::PasswordLengthOutOfRange`] if the length is outside 8..=128
    /// - [`SettingsError::NoCharacterTypes`] if every category is disabled
    pub const fn validate_password(&self) -> Result<(), SettingsError> {
        if self.password_length < MIN_PASSWORD_LENGTH
            || self.password_length > MAX_PASSWORD_LENGTH
        {
            return Err(SettingsError::PasswordLengthOutOfRange(self.password_length));
        }
        if self.categories().is_empty() {
            return Err(SettingsError::NoCharacterTypes);
        }
        Ok(())
    }

    /// Check the passphrase options.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::WordCountOutOfRange`] if the word count is outside 3..=10.
    pub const fn validate_passphrase(&self) -> Result<(), SettingsError> {
        if self.num_passphrase_words < MIN_WORD_COUNT || self.num_passphrase_words > MAX_WORD_COUNT
        {
            return Err(SettingsError::WordCountOutOfRange(
                self.num_passphrase_words,
            ));
        }
        Ok(())
    }
}

// ── Lenient field parsing ──────────────────────────────────────────

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolOrString {
    Bool(bool),
    Text(String),
}

fn lenient_usize<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => usize::try_from(n).map_err(de::Error::custom),
        NumberOrString::Text(s) => s
            .trim()
            .parse()
            .map_err(|e| de::Error::custom(format!("invalid number '{s}': {e}"))),
    }
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(de::Error::custom(format!("invalid boolean '{s}'"))),
        },
    }
}
