//! Uniformity tests for password and passphrase draws.
//!
//! Uses a seeded `ChaCha20Rng` so the outcome is reproducible, plus one
//! `OsRng` run with a loose band as a smoke test of the production source.

use std::collections::HashMap;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use passforge_core::password::charset::{build_pool, CategorySet, CharacterCategory};
use passforge_core::password::wordlist::WordList;
use passforge_core::password::{
    generate_passphrase_with, generate_password, generate_password_with,
};

const DRAWS_PER_SYMBOL: usize = 2000;

/// Pearson chi-square statistic of `counts` against a uniform expectation.
#[allow(clippy::cast_precision_loss)]
fn chi_square(counts: &HashMap<u8, usize>, categories: usize, total: usize) -> f64 {
    let expected = total as f64 / categories as f64;
    counts
        .values()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

fn count_bytes(data: &str) -> HashMap<u8, usize> {
    let mut counts = HashMap::new();
    for b in data.bytes() {
        *counts.entry(b).or_insert(0) += 1;
    }
    counts
}

/// Full pool (94 chars), 188,000 draws.
///
/// df = 93; the 0.9999 quantile of chi-square(93) is about 150, so a correct
/// uniform sampler essentially never exceeds 160.
#[test]
fn full_pool_frequencies_are_uniform() {
    let pool = build_pool(&CategorySet::all());
    let total = pool.len() * DRAWS_PER_SYMBOL;
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
    let pw = generate_password_with(&mut rng, total, &CategorySet::all()).unwrap();

    let counts = count_bytes(&pw);
    assert_eq!(counts.len(), pool.len(), "some pool members never drawn");
    let stat = chi_square(&counts, pool.len(), total);
    assert!(stat < 160.0, "chi-square {stat:.1} too high for df=93");
}

/// Each symbol's count stays within ±20% of its expectation.
#[test]
fn per_character_counts_within_band() {
    let categories = CategorySet::empty()
        .with(CharacterCategory::Digit)
        .with(CharacterCategory::Symbol);
    let pool = build_pool(&categories);
    let total = pool.len() * DRAWS_PER_SYMBOL;
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let pw = generate_password_with(&mut rng, total, &categories).unwrap();

    let counts = count_bytes(&pw);
    let low = DRAWS_PER_SYMBOL * 8 / 10;
    let high = DRAWS_PER_SYMBOL * 12 / 10;
    for &b in &pool {
        let n = counts.get(&b).copied().unwrap_or(0);
        assert!(
            (low..=high).contains(&n),
            "{:?} drawn {n} times, expected {low}..={high}",
            char::from(b)
        );
    }
    assert!(counts.keys().all(|b| pool.contains(b)));
}

/// Same band check against the production `OsRng`, with a wider tolerance.
#[test]
fn os_rng_counts_within_wide_band() {
    let categories = CategorySet::empty().with(CharacterCategory::Lowercase);
    let total = 26 * DRAWS_PER_SYMBOL;
    let pw = generate_password(total, &categories).unwrap();

    let counts = count_bytes(&pw);
    assert_eq!(counts.len(), 26);
    let low = DRAWS_PER_SYMBOL * 7 / 10;
    let high = DRAWS_PER_SYMBOL * 13 / 10;
    for (b, n) in counts {
        assert!(b.is_ascii_lowercase());
        assert!(
            (low..=high).contains(&n),
            "{:?} drawn {n} times, expected {low}..={high}",
            char::from(b)
        );
    }
}

/// Word draws are uniform over list positions, duplicates included.
#[test]
fn passphrase_words_are_uniform() {
    let words = WordList::parse("alpha\nbravo\ncharlie\ndelta\necho\n");
    let word_count = 5 * DRAWS_PER_SYMBOL;
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let pp = generate_passphrase_with(&mut rng, word_count, &words).unwrap();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in pp.split('-') {
        *counts.entry(token).or_insert(0) += 1;
    }
    assert_eq!(counts.len(), 5);
    for (word, n) in counts {
        assert!(words.contains(word));
        assert!(
            (1600..=2400).contains(&n),
            "'{word}' drawn {n} times, expected about {DRAWS_PER_SYMBOL}"
        );
    }
}

/// A word listed twice is drawn about twice as often.
#[test]
fn duplicate_words_weight_the_draw() {
    let words = WordList::parse("same\nsame\nother\n");
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    let pp = generate_passphrase_with(&mut rng, 6000, &words).unwrap();

    let same = pp.split('-').filter(|w| *w == "same").count();
    assert!((3600..=4400).contains(&same), "'same' drawn {same} times");
}
