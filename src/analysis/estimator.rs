// src/analysis/estimator.rs
use crate::models::Stats;

/// Assumed offline attacker throughput.
pub const GUESSES_PER_SECOND: f64 = 1e12;

/// Credit given when any character outside `[a-zA-Z0-9]` shows up.
pub const SYMBOL_POOL_SIZE: u32 = 32;

/// Reconstruct an alphabet size from the classes that appear in the password.
///
/// Only the content matters here, not the pool the password was drawn from.
pub fn alphabet_size(password: &str) -> u32 {
    let mut pool = 0;

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        pool += 26;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        pool += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        pool += 10;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        pool += SYMBOL_POOL_SIZE;
    }

    pool
}

pub fn calculate(password: &str) -> Stats {
    let pool = alphabet_size(password);
    let length = password.chars().count();

    // log2(pool^length), with the empty cases pinned to zero
    let entropy_bits = if pool == 0 || length == 0 {
        0.0
    } else {
        length as f64 * f64::from(pool).log2()
    };

    // 2^bits overflows past ~1024 bits; saturate so the value stays a finite real
    let crack_time_seconds = if entropy_bits == 0.0 {
        0.0
    } else {
        (entropy_bits.exp2() / GUESSES_PER_SECOND).min(f64::MAX)
    };

    Stats {
        entropy_bits,
        crack_time_seconds,
    }
}
