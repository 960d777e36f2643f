//! Rule-based strength classification for passwords and passphrases.
//!
//! Both classifiers are pure: no randomness, no word list, no state. They are
//! display heuristics, not entropy estimates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::password::charset::{CategorySet, CharacterCategory};

// ---------------------------------------------------------------------------
// Rating
// ---------------------------------------------------------------------------

/// Qualitative strength rating shown next to a generated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthRating {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
    /// Nothing to rate (empty password, zero words).
    Unknown,
}

impl StrengthRating {
    /// Every rating, weakest first, `Unknown` last.
    pub const ALL: [Self; 6] = [
        Self::VeryWeak,
        Self::Weak,
        Self::Medium,
        Self::Strong,
        Self::VeryStrong,
        Self::Unknown,
    ];

    /// Stable machine-readable label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VeryWeak => "very_weak",
            Self::Weak => "weak",
            Self::Medium => "medium",
            Self::Strong => "strong",
            Self::VeryStrong => "very_strong",
            Self::Unknown => "unknown",
        }
    }

    /// Ordinal severity tier, 0 for the weakest. `Unknown` has no tier.
    #[must_use]
    pub const fn severity_tier(self) -> Option<u8> {
        match self {
            Self::VeryWeak => Some(0),
            Self::Weak => Some(1),
            Self::Medium => Some(2),
            Self::Strong => Some(3),
            Self::VeryStrong => Some(4),
            Self::Unknown => None,
        }
    }

    /// Display color for the label, as a hex RGB string.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::VeryWeak => "#d32f2f",
            Self::Weak => "#f57c00",
            Self::Medium => "#fbc02d",
            Self::Strong => "#388e3c",
            Self::VeryStrong => "#1b5e20",
            Self::Unknown => "#757575",
        }
    }
}

impl fmt::Display for StrengthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
            Self::Unknown => "Unknown",
        })
    }
}

// ---------------------------------------------------------------------------
// Password strength
// ---------------------------------------------------------------------------

/// Rate a password by its length and the number of character categories it uses.
///
/// Length is counted in characters. The length score is 0 below 8, 1 for
/// 8–11, 2 for 12–15 and 3 from 16 up. Each category present adds to the
/// diversity score, except that a single category only counts once the
/// password reaches 8 characters. The sum maps to a rating: ≤1 very weak,
/// 2 weak, 3 medium, 4 strong, ≥5 very strong.
#[must_use]
pub fn classify_password_strength(password: &str) -> StrengthRating {
    let length = password.chars().count();
    if length == 0 {
        return StrengthRating::Unknown;
    }

    let present: CategorySet = password.chars().filter_map(CharacterCategory::of).collect();
    let score = length_score(length).saturating_add(diversity_score(present.iter().count(), length));

    match score {
        0..=1 => StrengthRating::VeryWeak,
        2 => StrengthRating::Weak,
        3 => StrengthRating::Medium,
        4 => StrengthRating::Strong,
        _ => StrengthRating::VeryStrong,
    }
}

const fn length_score(length: usize) -> u8 {
    match length {
        0..=7 => 0,
        8..=11 => 1,
        12..=15 => 2,
        _ => 3,
    }
}

// A lone category scores only at length >= 8; keep this coupling as is, it
// decides several boundary ratings.
const fn diversity_score(categories: usize, length: usize) -> u8 {
    match categories {
        1 if length >= 8 => 1,
        2 => 2,
        3 => 3,
        4 => 4,
        _ => 0,
    }
}

// ---------------------------------------------------------------------------
// Passphrase strength
// ---------------------------------------------------------------------------

/// Rate a passphrase by its word count alone.
///
/// Word list size is not considered.
#[must_use]
pub const fn classify_passphrase_strength(word_count: usize) -> StrengthRating {
    match word_count {
        0 => StrengthRating::Unknown,
        1..=2 => StrengthRating::Weak,
        3 => StrengthRating::Medium,
        4 => StrengthRating::Strong,
        _ => StrengthRating::VeryStrong,
    }
}
