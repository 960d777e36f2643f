//! `passforge-core`: password and passphrase generation engine.
//!
//! Pure logic: no UI state, no settings storage, no network. The only I/O is
//! the one-time word list read in [`password::wordlist::WordList::load`].

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod password;

pub mod strength;

pub mod settings;

pub use error::GenerationError;
pub use password::charset::{build_pool, CategorySet, CharacterCategory};
pub use password::wordlist::WordList;
pub use password::{
    generate_passphrase, generate_passphrase_with, generate_password, generate_password_with,
    PASSPHRASE_DELIMITER,
};
pub use settings::{Settings, SettingsError};
pub use strength::{classify_passphrase_strength, classify_password_strength, StrengthRating};
