//! Positional exponential hash for string keys.
//!
//! For a key of `len` characters, the index is
//!
//! ```text
//! acc = 0
//! for (idx, code) in key:          // code = Unicode scalar value
//!     acc = (acc + (idx + len) ^ code) mod capacity
//! ```
//!
//! with `^` denoting exponentiation and the reduction applied after every
//! character, not once at the end. The per-step modulo bounds intermediate
//! growth on arbitrarily long keys, and it changes the result: indices here
//! are NOT what a single trailing modulo over the unbounded sum would give.
//! Both sides of a migration must use this exact schedule or their bucket
//! assignments diverge.
//!
//! Weighting the base by position (`idx + len`) scatters keys that are
//! permutations or prefixes of one another. No adversarial-resistance claim
//! is made; uniformity is the only property the table needs.

/// Maps `key` to a bucket index in `[0, capacity)`.
///
/// Deterministic for a given `(key, capacity)` pair. A zero-length key runs
/// zero rounds and lands in bucket 0. `capacity` must be at least 1; the
/// table constructor guarantees this.
pub fn bucket_index(key: &str, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    let len = key.chars().count();
    let m = capacity as u64;

    let mut acc = 0u64;
    for (idx, ch) in key.chars().enumerate() {
        let base = ((idx + len) as u64) % m;
        acc = (acc + mod_pow(base, ch as u64, m)) % m;
    }
    acc as usize
}

/// `base ^ exp mod modulus` by square-and-multiply.
///
/// Congruent to the unbounded exponential term, so reducing each term before
/// summing matches a bignum evaluation of the same schedule bit for bit.
fn mod_pow(base: u64, mut exp: u64, modulus: u64) -> u64 {
    let m = modulus as u128;
    let mut result = 1u128 % m;
    let mut base = base as u128 % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    result as u64
}
