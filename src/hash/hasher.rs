//! Hash primitive trait and the default deterministic implementation.
//!
//! The filters consume a single-function hash capability: arbitrary bytes
//! in, one 128-bit digest out, delivered as its lower and upper 64-bit
//! halves. Everything else — expanding two base values into k positions —
//! lives in the [`kernel`](crate::hash::kernel) module.
//!
//! # Design Philosophy
//!
//! 1. **Byte-Oriented**: hash `&[u8]`, not generic `T: Hash`, so callers
//!    control serialization and digests are stable across processes
//! 2. **Minimal Interface**: one digest method; position derivation is a
//!    separate concern
//! 3. **Pluggable**: any implementation of the trait is accepted at filter
//!    construction; swapping it changes collision statistics, never
//!    correctness
//!
//! # Examples
//!
//! ```
//! use filtercraft::hash::{FilterHasher, Fnv128Hasher};
//!
//! let hasher = Fnv128Hasher::new();
//! let (lower, upper) = hasher.digest128(b"hello world");
//! assert_ne!(lower, upper);
//! ```

#![allow(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Hash primitive for membership filters.
///
/// Implementations digest arbitrary bytes into at least 128 bits of
/// output, returned as the digest's lower and upper 64-bit halves. The
/// two halves serve as the base values for double hashing, so they must
/// be statistically independent.
///
/// # Requirements
///
/// - **Determinism**: identical input always yields the identical digest,
///   across calls, runs, and processes
/// - **Distribution**: output spread uniformly across the 128-bit space
/// - **Speed**: this is not a security boundary; a fast non-cryptographic
///   digest is the expected choice
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; hashers hold only configuration
/// (such as a seed), never per-call state.
pub trait FilterHasher: Send + Sync {
    /// Digest `bytes` and return the (lower, upper) 64-bit halves.
    ///
    /// # Examples
    ///
    /// ```
    /// use filtercraft::hash::{FilterHasher, Fnv128Hasher};
    ///
    /// let hasher = Fnv128Hasher::new();
    /// let a = hasher.digest128(b"data");
    /// let b = hasher.digest128(b"data");
    /// assert_eq!(a, b); // Deterministic
    /// ```
    fn digest128(&self, bytes: &[u8]) -> (u64, u64);

    /// Human-readable name for debugging.
    fn name(&self) -> &'static str;
}

/// FNV-1a offset basis for the 128-bit variant.
const FNV128_OFFSET_BASIS: u128 = 0x6c62_272e_07bb_0142_62b8_2175_6295_c58d;

/// FNV-1a prime for the 128-bit variant: 2^88 + 2^8 + 0x3b.
const FNV128_PRIME: u128 = 0x0000_0000_0100_0000_0000_0000_0000_013b;

/// Default hasher: deterministic FNV-1a over a 128-bit state.
///
/// FNV-1a is byte-at-a-time and unspectacular on large inputs, but it is
/// dependency-free, deterministic across runs, and well-distributed enough
/// for filter keys, which are typically short. For higher throughput on
/// large keys enable the `xxhash` feature and use
/// [`Xxh3Hasher`](crate::hash::Xxh3Hasher).
///
/// # Examples
///
/// ```
/// use filtercraft::hash::{FilterHasher, Fnv128Hasher};
///
/// let hasher1 = Fnv128Hasher::with_seed(1);
/// let hasher2 = Fnv128Hasher::with_seed(2);
///
/// // Different seeds give independent hash functions
/// assert_ne!(hasher1.digest128(b"key"), hasher2.digest128(b"key"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Fnv128Hasher {
    seed: u64,
}

impl Fnv128Hasher {
    /// Create a hasher with the default (zero) seed.
    #[must_use]
    pub fn new() -> Self {
        Self { seed: 0 }
    }

    /// Create a hasher with an explicit seed.
    ///
    /// Different seeds produce independent hash functions, useful for
    /// building families of filters over the same key space.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl FilterHasher for Fnv128Hasher {
    #[inline]
    fn digest128(&self, bytes: &[u8]) -> (u64, u64) {
        let mut state = FNV128_OFFSET_BASIS;

        // Fold the seed in first so seeded hashers diverge from byte one
        if self.seed != 0 {
            for &byte in &self.seed.to_le_bytes() {
                state ^= u128::from(byte);
                state = state.wrapping_mul(FNV128_PRIME);
            }
        }

        for &byte in bytes {
            state ^= u128::from(byte);
            state = state.wrapping_mul(FNV128_PRIME);
        }

        (state as u64, (state >> 64) as u64)
    }

    #[inline]
    fn name(&self) -> &'static str {
        "Fnv128Hasher"
    }
}
