//! Character categories and pool construction.

use serde::{Deserialize, Serialize};

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// One of the four disjoint ASCII character sets a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterCategory {
    /// `A-Z`
    Uppercase,
    /// `a-z`
    Lowercase,
    /// `0-9`
    Digit,
    /// The 32 ASCII punctuation characters.
    Symbol,
}

impl CharacterCategory {
    /// All categories in pool order.
    pub const ALL: [Self; 4] = [Self::Uppercase, Self::Lowercase, Self::Digit, Self::Symbol];

    /// The fixed character set backing this category.
    #[must_use]
    pub const fn charset(self) -> &'static [u8] {
        match self {
            Self::Uppercase => UPPERCASE,
            Self::Lowercase => LOWERCASE,
            Self::Digit => DIGITS,
            Self::Symbol => SYMBOLS,
        }
    }

    /// The category `c` belongs to, or `None` for characters outside every set
    /// (space, control characters, non-ASCII).
    #[must_use]
    pub const fn of(c: char) -> Option<Self> {
        if c.is_ascii_uppercase() {
            Some(Self::Uppercase)
        } else if c.is_ascii_lowercase() {
            Some(Self::Lowercase)
        } else if c.is_ascii_digit() {
            Some(Self::Digit)
        } else if c.is_ascii_punctuation() {
            Some(Self::Symbol)
        } else {
            None
        }
    }
}

/// A set of enabled [`CharacterCategory`] values.
///
/// The default value is the empty set.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySet {
    /// Include uppercase letters (A-Z).
    pub uppercase: bool,
    /// Include lowercase letters (a-z).
    pub lowercase: bool,
    /// Include digits (0-9).
    pub digits: bool,
    /// Include symbols (!"#$%...).
    pub symbols: bool,
}

impl CategorySet {
    /// The set with no categories enabled.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
        }
    }

    /// The set with every category enabled.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }

    /// Whether `category` is enabled.
    #[must_use]
    pub const fn contains(&self, category: CharacterCategory) -> bool {
        match category {
            CharacterCategory::Uppercase => self.uppercase,
            CharacterCategory::Lowercase => self.lowercase,
            CharacterCategory::Digit => self.digits,
            CharacterCategory::Symbol => self.symbols,
        }
    }

    /// Enable or disable `category`.
    pub fn set(&mut self, category: CharacterCategory, enabled: bool) {
        match category {
            CharacterCategory::Uppercase => self.uppercase = enabled,
            CharacterCategory::Lowercase => self.lowercase = enabled,
            CharacterCategory::Digit => self.digits = enabled,
            CharacterCategory::Symbol => self.symbols = enabled,
        }
    }

    /// Builder form of [`CategorySet::set`] with `enabled = true`.
    #[must_use]
    pub fn with(mut self, category: CharacterCategory) -> Self {
        self.set(category, true);
        self
    }

    /// `true` when no category is enabled.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.uppercase || self.lowercase || self.digits || self.symbols)
    }

    /// Enabled categories, always in the order Uppercase, Lowercase, Digit, Symbol.
    pub fn iter(&self) -> impl Iterator<Item = CharacterCategory> + '_ {
        CharacterCategory::ALL
            .into_iter()
            .filter(move |c| self.contains(*c))
    }
}

impl FromIterator<CharacterCategory> for CategorySet {
    fn from_iter<I: IntoIterator<Item = CharacterCategory>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

/// Concatenate the character sets of every enabled category.
///
/// The order is stable (Uppercase, Lowercase, Digit, Symbol). An empty set
/// yields an empty pool; deciding what that means is left to the caller.
#[must_use]
pub fn build_pool(categories: &CategorySet) -> Vec<u8> {
    let capacity = categories.iter().map(|c| c.charset().len()).sum();
    let mut pool = Vec::with_capacity(capacity);
    for category in categories.iter() {
        pool.extend_from_slice(category.charset());
    }
    pool
}
