//! Built-in semantic types.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::entry::GeneratorEntry;
use crate::registry::Registry;

/// Largest integer exactly representable as an IEEE-754 double.
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

const TOKEN_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const TOKEN_LEN: usize = 11;

/// Default registry: `integer`, `decimal`, `boolean`, `username`, `title`
/// and `paragraph`.
///
/// Randomized examples are drawn once from a ChaCha stream seeded with
/// `seed`, so the same seed always yields the same pools.
pub fn base_data_types(seed: u64) -> Registry {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let lorem = "lorem ipsum ".repeat(100);

    Registry::builder()
        .entry(
            "integer",
            GeneratorEntry::new([rng.random_range(-100_i64..=100)])
                .with_edge([MAX_SAFE_INTEGER, MAX_SAFE_INTEGER]),
        )
        .entry(
            "decimal",
            GeneratorEntry::new([rng.random::<f64>() * 200.0 - 100.0])
                // smallest positive subnormal
                .with_edge([f64::MAX, f64::from_bits(1)]),
        )
        .entry("boolean", GeneratorEntry::new([true, false]))
        .entry(
            "username",
            GeneratorEntry::new(["student1", "staff1", "admin1"])
                .with_invalid([random_token(&mut rng)]),
        )
        .entry(
            "title",
            GeneratorEntry::new(["An Example Title"])
                .with_edge([lorem.clone(), random_token(&mut rng)]),
        )
        .entry(
            "paragraph",
            GeneratorEntry::new([lorem]).with_edge([random_token(&mut rng), String::new()]),
        )
        .build()
}

fn random_token(rng: &mut impl Rng) -> String {
    (0..TOKEN_LEN)
        .map(|_| {
            let idx = rng.random_range(0..TOKEN_ALPHABET.len());
            char::from(TOKEN_ALPHABET[idx])
        })
        .collect()
}
