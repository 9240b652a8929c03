//! XXH3-128 hash primitive for membership filters.
//!
//! XXH3 is a fast, high-quality non-cryptographic hash developed by Yann
//! Collet and used across the storage ecosystem (Zstd, RocksDB, Redis).
//! Its 128-bit variant produces exactly the digest width the position
//! kernel needs, with throughput far above the byte-at-a-time default on
//! medium and large keys.
//!
//! # Quality
//!
//! - **SMHasher**: passes all tests with zero failures
//! - **Avalanche**: single-bit changes affect ~50% of output bits
//! - **Distribution**: uniform across the full 128-bit space
//!
//! # When to Use
//!
//! Prefer [`Xxh3Hasher`] over the default whenever keys regularly exceed
//! a few dozen bytes or hash throughput shows up in profiles. Digests
//! differ from the default hasher's, so a filter must be constructed and
//! queried with the same primitive throughout its lifetime.
//!
//! # Implementation Note
//!
//! This module wraps the `xxhash-rust` crate, which selects optimized
//! SIMD paths at runtime.
//!
//! # Examples
//!
//! ```
//! use filtercraft::hash::{FilterHasher, Xxh3Hasher};
//!
//! let hasher = Xxh3Hasher::new();
//! let (lower, upper) = hasher.digest128(b"fast");
//! assert_ne!((lower, upper), (0, 0));
//! ```

#![allow(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use crate::hash::hasher::FilterHasher;
use xxhash_rust::xxh3::xxh3_128_with_seed;

/// XXH3-128 hash primitive (requires the `xxhash` feature).
///
/// # Examples
///
/// ```
/// use filtercraft::filters::ClassicBloomFilter;
/// use filtercraft::hash::Xxh3Hasher;
/// use filtercraft::prelude::*;
///
/// let mut filter = ClassicBloomFilter::with_hasher(1000, 0.01, Xxh3Hasher::new()).unwrap();
/// filter.add(b"hello");
/// assert!(filter.test(b"hello"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Xxh3Hasher {
    seed: u64,
}

impl Xxh3Hasher {
    /// Create a hasher with the default (zero) seed.
    #[must_use]
    pub fn new() -> Self {
        Self { seed: 0 }
    }

    /// Create a hasher with an explicit seed.
    ///
    /// XXH3 supports native seeding; different seeds produce fully
    /// independent hash functions.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl FilterHasher for Xxh3Hasher {
    #[inline]
    fn digest128(&self, bytes: &[u8]) -> (u64, u64) {
        let digest = xxh3_128_with_seed(bytes, self.seed);
        (digest as u64, (digest >> 64) as u64)
    }

    #[inline]
    fn name(&self) -> &'static str {
        "Xxh3Hasher"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let hasher = Xxh3Hasher::new();
        assert_eq!(hasher.digest128(b"test"), hasher.digest128(b"test"));
    }

    #[test]
    fn test_different_inputs_differ() {
        let hasher = Xxh3Hasher::new();
        assert_ne!(hasher.digest128(b"input1"), hasher.digest128(b"input2"));
    }

    #[test]
    fn test_seeds_produce_independent_functions() {
        let hasher1 = Xxh3Hasher::with_seed(1);
        let hasher2 = Xxh3Hasher::with_seed(2);
        assert_ne!(hasher1.digest128(b"test"), hasher2.digest128(b"test"));
    }

    #[test]
    fn test_differs_from_default_hasher() {
        use crate::hash::hasher::Fnv128Hasher;

        let xxh = Xxh3Hasher::new();
        let fnv = Fnv128Hasher::new();
        assert_ne!(xxh.digest128(b"key"), fnv.digest128(b"key"));
    }

    #[test]
    fn test_name() {
        assert_eq!(Xxh3Hasher::new().name(), "Xxh3Hasher");
    }

    #[test]
    fn test_large_input() {
        let hasher = Xxh3Hasher::new();
        let large = vec![7u8; 65_536];
        let (lower, upper) = hasher.digest128(&large);
        assert_ne!((lower, upper), (0, 0));
    }
}
