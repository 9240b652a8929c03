//! Classic Bloom filter implementation.
//!
//! The classic filter is the original space/time trade-off from Bloom's
//! 1970 paper: a bitmap of `m` bits, `k` hash positions per item, and
//! two operations — add and test. Elements cannot be removed; for that,
//! see [`DeletableBloomFilter`](crate::filters::DeletableBloomFilter).
//!
//! # Properties
//!
//! - **False positives**: possible, bounded by the configured rate
//! - **False negatives**: never occur (guaranteed)
//! - **Space**: ~9.6 bits per element for a 1% false positive rate
//! - **Time**: O(k) for `test`, `add`, and `test_and_add`
//!
//! # State Machine
//!
//! ```text
//! Empty ──add──▶ Populated ──reset──▶ Empty
//! ```
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use filtercraft::prelude::*;
//!
//! let mut filter = ClassicBloomFilter::new(10_000, 0.01).unwrap();
//!
//! filter.add(b"hello").add(b"world");
//!
//! assert!(filter.test(b"hello"));
//! assert!(filter.test(b"world"));
//! assert!(!filter.test(b"goodbye"));
//! ```
//!
//! ## Single-Pass Test-and-Add
//!
//! ```
//! use filtercraft::prelude::*;
//!
//! let mut seen = ClassicBloomFilter::new(1000, 0.01).unwrap();
//!
//! // Deduplicate a stream, hashing each item once
//! assert!(!seen.test_and_add(b"event-1"));
//! assert!(seen.test_and_add(b"event-1"));
//! ```
//!
//! # References
//!
//! - Bloom, B. H. (1970). "Space/time trade-offs in hash coding with allowable errors"
//! - Kirsch, A., & Mitzenmacher, M. (2006). "Less Hashing, Same Performance: Building a Better Bloom Filter"

#![allow(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use crate::core::filter::MembershipFilter;
use crate::core::params::{optimal_k, optimal_m};
use crate::error::Result;
use crate::filters::membership::MembershipMap;
use crate::hash::{DefaultHasher, FilterHasher};

/// Classic Bloom filter over byte sequences.
///
/// # Type Parameters
///
/// * `H` - Hash primitive (defaults to [`DefaultHasher`])
///
/// # Sizing
///
/// Construction derives `m` and `k` from the expected item count and the
/// target false positive rate via the optimizer. There is no enforced
/// capacity ceiling: inserting more than the expected count degrades the
/// false positive rate rather than failing.
///
/// # Thread Safety
///
/// Single-threaded semantics; mutating calls take `&mut self` and there
/// is no internal synchronization. Wrap in a lock for shared use.
#[derive(Debug, Clone)]
pub struct ClassicBloomFilter<H = DefaultHasher> {
    /// Shared membership bitmap + hashing state.
    map: MembershipMap<H>,

    /// Number of items added.
    count: usize,

    /// Expected item count the filter was sized for.
    expected_items: usize,

    /// Target false positive rate the filter was sized for.
    target_fp_rate: f64,
}

impl ClassicBloomFilter<DefaultHasher> {
    /// Create a filter sized for `expected_items` insertions at the target
    /// false positive rate, using the default hash primitive.
    ///
    /// # Arguments
    ///
    /// * `expected_items` - Expected number of insertions (must be > 0)
    /// * `fp_rate` - Target false positive rate (must be in (0, 1))
    ///
    /// # Errors
    ///
    /// Returns a configuration error for `expected_items == 0` or
    /// `fp_rate` outside (0, 1). The filter is never partially
    /// constructed.
    ///
    /// # Examples
    ///
    /// ```
    /// use filtercraft::filters::ClassicBloomFilter;
    ///
    /// let filter = ClassicBloomFilter::new(10_000, 0.01).unwrap();
    /// assert!(ClassicBloomFilter::new(0, 0.01).is_err());
    /// ```
    pub fn new(expected_items: usize, fp_rate: f64) -> Result<Self> {
        Self::with_hasher(expected_items, fp_rate, DefaultHasher::new())
    }
}

impl<H: FilterHasher> ClassicBloomFilter<H> {
    /// Create a filter with an explicit hash primitive.
    ///
    /// Swapping the primitive changes the position sequence (and therefore
    /// which keys collide) but not the algorithm's correctness. A filter
    /// must be queried with the same primitive it was built with.
    ///
    /// # Errors
    ///
    /// Same conditions as [`new`](ClassicBloomFilter::new).
    ///
    /// # Examples
    ///
    /// ```
    /// use filtercraft::filters::ClassicBloomFilter;
    /// use filtercraft::hash::Fnv128Hasher;
    /// use filtercraft::MembershipFilter;
    ///
    /// let filter =
    ///     ClassicBloomFilter::with_hasher(1000, 0.01, Fnv128Hasher::with_seed(7)).unwrap();
    /// assert_eq!(filter.count(), 0);
    /// ```
    pub fn with_hasher(expected_items: usize, fp_rate: f64, hasher: H) -> Result<Self> {
        let m = optimal_m(expected_items, fp_rate)?;
        let k = optimal_k(fp_rate)?;

        Ok(Self {
            map: MembershipMap::new(m, k, hasher)?,
            count: 0,
            expected_items,
            target_fp_rate: fp_rate,
        })
    }

    /// Get the expected item count the filter was sized for.
    #[must_use]
    #[inline]
    pub fn expected_items(&self) -> usize {
        self.expected_items
    }

    /// Get the target false positive rate the filter was sized for.
    #[must_use]
    #[inline]
    pub fn target_fp_rate(&self) -> f64 {
        self.target_fp_rate
    }

    /// Get the name of the configured hash primitive.
    #[must_use]
    pub fn hasher_name(&self) -> &'static str {
        self.map.hasher.name()
    }

    /// Get total memory usage of the membership bitmap in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.map.bits.memory_usage()
    }
}

impl<H: FilterHasher> MembershipFilter for ClassicBloomFilter<H> {
    #[inline]
    fn test(&self, data: &[u8]) -> bool {
        self.map.test(data)
    }

    fn add(&mut self, data: &[u8]) -> &mut Self {
        self.map.set_all(data);
        self.count += 1;
        self
    }

    fn test_and_add(&mut self, data: &[u8]) -> bool {
        // One position pass: record prior membership while setting bits
        let mut member = true;
        for index in self.map.positions(data) {
            if !self.map.bits.get_bit(index) {
                member = false;
                self.map.bits.set_bit(index);
            }
        }
        self.count += 1;
        member
    }

    fn reset(&mut self) -> &mut Self {
        self.map.reset();
        self.count = 0;
        self
    }

    #[inline]
    fn count(&self) -> usize {
        self.count
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.map.m
    }

    #[inline]
    fn hash_count(&self) -> usize {
        self.map.k
    }

    fn fill_ratio(&self) -> f64 {
        self.map.fill_ratio()
    }

    fn estimated_fill_ratio(&self) -> f64 {
        self.map.estimated_fill_ratio(self.count)
    }
}
