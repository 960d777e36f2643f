//! Cryptographic password and passphrase generation.
//!
//! Provides two generation modes:
//! - [`generate_password`]: character-based, drawn from the enabled [`charset`] categories
//! - [`generate_passphrase`]: word-based, drawn from a loaded [`wordlist::WordList`]
//!
//! Both use `OsRng` (OS-level CSPRNG) by default. The `_with` variants take
//! any `Rng + CryptoRng` so callers can inject their own source.

pub mod charset;
pub mod wordlist;

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};
use zeroize::Zeroizing;

use crate::error::GenerationError;
use charset::{build_pool, CategorySet};
use wordlist::WordList;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum password length the front end accepts.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length the front end accepts.
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// Default password length.
pub const DEFAULT_PASSWORD_LENGTH: usize = 16;

/// Minimum passphrase word count the front end accepts.
pub const MIN_WORD_COUNT: usize = 3;

/// Maximum passphrase word count the front end accepts.
pub const MAX_WORD_COUNT: usize = 10;

/// Default passphrase word count.
pub const DEFAULT_WORD_COUNT: usize = 5;

/// Separator placed between passphrase words.
pub const PASSPHRASE_DELIMITER: &str = "-";

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Generate a random password of `length` characters from the enabled categories.
///
/// See [`generate_password_with`].
///
/// # Errors
///
/// - [`GenerationError::NoCategoriesSelected`] if `categories` is empty
/// - [`GenerationError::InvalidLength`] if `length` is zero
pub fn generate_password(
    length: usize,
    categories: &CategorySet,
) -> Result<String, GenerationError> {
    generate_password_with(&mut OsRng, length, categories)
}

/// Generate a random password using the supplied CSPRNG.
///
/// Each of the `length` characters is an independent uniform draw from the
/// pool built by [`build_pool`]. Draws are emitted in order, unshuffled, so a
/// password is not guaranteed to contain every enabled category.
///
/// Lengths outside [`MIN_PASSWORD_LENGTH`]..=[`MAX_PASSWORD_LENGTH`] are not
/// rejected here; range checks belong to the caller.
///
/// # Errors
///
/// - [`GenerationError::NoCategoriesSelected`] if `categories` is empty
/// - [`GenerationError::InvalidLength`] if `length` is zero
pub fn generate_password_with<R>(
    rng: &mut R,
    length: usize,
    categories: &CategorySet,
) -> Result<String, GenerationError>
where
    R: Rng + CryptoRng,
{
    let pool = build_pool(categories);
    if pool.is_empty() {
        return Err(GenerationError::NoCategoriesSelected);
    }
    if length == 0 {
        return Err(GenerationError::InvalidLength);
    }

    let mut chars: Zeroizing<Vec<u8>> = Zeroizing::new(Vec::with_capacity(length));
    for _ in 0..length {
        chars.push(pool[rng.gen_range(0..pool.len())]);
    }

    // Pool bytes are ASCII, so each maps to exactly one char.
    Ok(chars.iter().copied().map(char::from).collect())
}

/// Generate a passphrase of `word_count` words drawn from `words`.
///
/// See [`generate_passphrase_with`].
///
/// # Errors
///
/// - [`GenerationError::EmptyWordList`] if `words` is empty
/// - [`GenerationError::InvalidWordCount`] if `word_count` is zero
pub fn generate_passphrase(word_count: usize, words: &WordList) -> Result<String, GenerationError> {
    generate_passphrase_with(&mut OsRng, word_count, words)
}

/// Generate a passphrase using the supplied CSPRNG.
///
/// Words are drawn uniformly and independently, with replacement, so the same
/// word may appear more than once. They are joined with
/// [`PASSPHRASE_DELIMITER`] in draw order.
///
/// # Errors
///
/// - [`GenerationError::EmptyWordList`] if `words` is empty
/// - [`GenerationError::InvalidWordCount`] if `word_count` is zero
pub fn generate_passphrase_with<R>(
    rng: &mut R,
    word_count: usize,
    words: &WordList,
) -> Result<String, GenerationError>
where
    R: Rng + CryptoRng,
{
    if words.is_empty() {
        return Err(GenerationError::EmptyWordList);
    }
    if word_count == 0 {
        return Err(GenerationError::InvalidWordCount);
    }

    let entries = words.words();
    let drawn: Vec<&str> = (0..word_count)
        .map(|_| entries[rng.gen_range(0..entries.len())].as_str())
        .collect();

    Ok(drawn.join(PASSPHRASE_DELIMITER))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
