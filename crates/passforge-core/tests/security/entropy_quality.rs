//! Entropy quality of generated passwords.
//!
//! A uniform draw from a pool of `k` symbols carries `log2(k)` bits per
//! character. For long samples the measured Shannon entropy approaches that
//! bound:
//!
//! | Pool               | Size | Bound (bits/char) | Threshold |
//! |--------------------|------|-------------------|-----------|
//! | all categories     | 94   | 6.555             | 6.5       |
//! | digits only        | 10   | 3.322             | 3.3       |
//!
//! Thresholds sit just below the bound so degenerate output (repeated
//! characters, a stuck generator) fails while natural variance passes.

use std::collections::HashSet;

use passforge_core::password::charset::{CategorySet, CharacterCategory};
use passforge_core::password::generate_password;

/// Shannon entropy of a byte slice (bits per byte).
#[allow(clippy::cast_precision_loss)]
fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let mut freq = [0u64; 256];
    for &b in data {
        freq[b as usize] = freq[b as usize].saturating_add(1);
    }
    let len = data.len() as f64;
    freq.iter()
        .filter(|&&f| f > 0)
        .map(|&f| {
            let p = f as f64 / len;
            -p * p.log2()
        })
        .sum()
}

#[test]
fn full_pool_entropy() {
    let pw = generate_password(65_536, &CategorySet::all()).unwrap();
    let entropy = shannon_entropy(pw.as_bytes());
    assert!(
        entropy > 6.5,
        "full-pool entropy too low: {entropy:.4} (expected > 6.5)"
    );
}

#[test]
fn digit_pool_entropy() {
    let categories = CategorySet::empty().with(CharacterCategory::Digit);
    let pw = generate_password(16_384, &categories).unwrap();
    let entropy = shannon_entropy(pw.as_bytes());
    assert!(
        entropy > 3.3,
        "digit-pool entropy too low: {entropy:.4} (expected > 3.3)"
    );
    assert!(entropy <= 10f64.log2() + 1e-9);
}

/// Two consecutive max-length passwords must differ.
///
/// Collision probability for 128 draws from 94 symbols is about 2^-839.
#[test]
fn consecutive_passwords_are_distinct() {
    let a = generate_password(128, &CategorySet::all()).unwrap();
    let b = generate_password(128, &CategorySet::all()).unwrap();
    assert_ne!(a, b, "two consecutive passwords were identical");
}

#[test]
fn many_short_passwords_do_not_repeat() {
    let seen: HashSet<String> = (0..1000)
        .map(|_| generate_password(16, &CategorySet::all()).unwrap())
        .collect();
    assert_eq!(seen.len(), 1000);
}
