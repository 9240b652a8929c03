//! FilterCraft: probabilistic set-membership filters for Rust.
//!
//! FilterCraft answers the question "has this key possibly been seen
//! before?" in a fraction of the memory an exact set would need, at the
//! cost of a bounded, tunable false-positive rate and with a hard
//! guarantee of **zero false negatives**. Filters like these sit in front
//! of caches, storage engines, and search indices to skip expensive
//! lookups for keys that are provably absent.
//!
//! # Quick Start
//!
//! ```
//! use filtercraft::prelude::*;
//!
//! // A filter for 10,000 items at a 1% false positive rate
//! let mut filter = ClassicBloomFilter::new(10_000, 0.01).unwrap();
//!
//! filter.add(b"hello").add(b"world");
//!
//! assert!(filter.test(b"hello"));    // possibly present
//! assert!(!filter.test(b"goodbye")); // definitely absent
//! ```
//!
//! # Removal Support
//!
//! Classic Bloom filters cannot delete: clearing a bit might erase
//! evidence of another key. [`DeletableBloomFilter`] adds a collision-
//! region bitmap that records where insertions ever overlapped, and
//! clears a bit on removal only when its region is provably clean:
//!
//! ```
//! use filtercraft::prelude::*;
//!
//! let mut filter = DeletableBloomFilter::new(10_000, 100, 0.01).unwrap();
//!
//! filter.add(b"session:42");
//! assert!(filter.test_and_remove(b"session:42"));
//! assert!(!filter.test(b"session:42"));
//! ```
//!
//! # Choosing a Filter
//!
//! | Filter | Removal | Extra Space | Best For |
//! |--------|---------|-------------|----------|
//! | [`ClassicBloomFilter`] | No | — | Append-only key sets |
//! | [`DeletableBloomFilter`] | Yes | `r` collision bits | Sets with turnover |
//!
//! # Byte-Oriented API
//!
//! Membership operations take `&[u8]`. The crate makes no encoding
//! assumptions: callers decide how values become bytes, which keeps
//! digests stable across processes and languages.
//!
//! # Pluggable Hashing
//!
//! Filters accept any [`hash::FilterHasher`] at construction. The default
//! is a dependency-free deterministic FNV-1a/128; enable the `xxhash`
//! feature for an XXH3-128 primitive on hot paths. Swapping the primitive
//! changes collision statistics, never correctness.
//!
//! # Concurrency Model
//!
//! Filters have single-threaded semantics: mutating calls take
//! `&mut self` and there is no internal synchronization. `test` may run
//! concurrently with other `test` calls; callers mixing readers and
//! writers wrap the filter in their own lock. Every operation is a
//! bounded synchronous computation (O(k) membership operations, O(m)
//! `fill_ratio`/`reset`) with no I/O and no blocking.
//!
//! # Feature Flags
//!
//! | Feature  | Enables                      |
//! |----------|------------------------------|
//! | (default)| [`hash::Fnv128Hasher`]       |
//! | `xxhash` | [`hash::Xxh3Hasher`] (XXH3)  |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::len_zero)]
#![allow(clippy::bool_assert_comparison)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(html_root_url = "https://docs.rs/filtercraft/0.1.0")]

/// Core data structures and traits
pub mod core;

/// Error types and result aliases
pub mod error;

/// Filter implementations (variants)
pub mod filters;

/// Hash primitives and the position kernel
pub mod hash;

/// Fluent builders for all filter types
pub mod builder;

// Re-export commonly used types at the crate root
pub use error::{FilterCraftError, Result};

// Re-export core traits
pub use crate::core::filter::{MembershipFilter, RemovableFilter};

// Re-export filter types at the crate root
pub use filters::{ClassicBloomFilter, DeletableBloomFilter};

// Re-export builders at the crate root
pub use builder::{ClassicFilterBuilder, DeletableFilterBuilder};

// Re-export the hash capability trait
pub use hash::FilterHasher;

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use filtercraft::prelude::*;
///
/// let mut filter = ClassicBloomFilter::new(1000, 0.01).unwrap();
/// filter.add(b"hello");
/// assert!(filter.test(b"hello"));
/// ```
pub mod prelude {
    pub use crate::builder::{ClassicFilterBuilder, DeletableFilterBuilder};
    pub use crate::core::filter::{MembershipFilter, RemovableFilter};
    pub use crate::error::{FilterCraftError, Result};
    pub use crate::filters::{ClassicBloomFilter, DeletableBloomFilter};
    pub use crate::hash::FilterHasher;

    #[cfg(feature = "xxhash")]
    pub use crate::hash::Xxh3Hasher;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut filter = ClassicBloomFilter::new(100, 0.01).unwrap();
        filter.add(b"test");
        assert!(filter.test(b"test"));
    }

    #[test]
    fn test_trait_usage() {
        fn exercise<F: MembershipFilter>(filter: &mut F) {
            filter.test_and_add(b"item");
            assert!(filter.test(b"item"));
        }

        let mut filter = ClassicBloomFilter::new(100, 0.01).unwrap();
        exercise(&mut filter);
    }

    #[test]
    fn test_builder_from_root() {
        let filter = ClassicFilterBuilder::new()
            .expected_items(1000)
            .false_positive_rate(0.01)
            .build()
            .unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_removal_from_root() {
        let mut filter = DeletableBloomFilter::new(1000, 10, 0.01).unwrap();
        filter.add(b"ephemeral");
        assert!(filter.test_and_remove(b"ephemeral"));
        assert!(!filter.test(b"ephemeral"));
    }

    #[test]
    fn test_error_from_root() {
        let err = ClassicBloomFilter::new(0, 0.01).unwrap_err();
        assert!(matches!(err, FilterCraftError::InvalidItemCount { .. }));
    }
}
