//! Shared helpers for apiwire-core integration tests

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic generator so failures reproduce
pub fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_0f_c0dec)
}

/// Random bytes of a random length up to `max_len`
pub fn random_bytes(rng: &mut StdRng, max_len: usize) -> Vec<u8> {
    let len = rng.gen_range(0..=max_len);
    (0..len).map(|_| rng.gen()).collect()
}

/// Checks the canonical QUANTITY shape `0x(0|[1-9a-f][0-9a-f]*)`
pub fn is_canonical_quantity(s: &str) -> bool {
    let Some(digits) = s.strip_prefix("0x") else {
        return false;
    };
    let lower_hex = |c: char| c.is_ascii_digit() || ('a'..='f').contains(&c);
    match digits.as_bytes() {
        [] => false,
        [b'0'] => true,
        [b'0', ..] => false,
        _ => digits.chars().all(lower_hex),
    }
}

/// Checks the canonical DATA shape `0x([0-9a-f]{2})*`
pub fn is_canonical_data(s: &str) -> bool {
    let Some(digits) = s.strip_prefix("0x") else {
        return false;
    };
    digits.len() % 2 == 0
        && digits
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}
