//! Deletable Bloom filter implementation.
//!
//! Extends the classic filter with safe removal, following the deletable
//! Bloom filter design of Rothenberg et al.: the membership bitmap is
//! partitioned into fixed-size *collision regions*, and a second bitmap
//! of one flag per region records whether any two insertions have ever
//! set a bit in that region. A membership bit may be cleared during
//! removal **only if** its region is collision-free, the condition under
//! which clearing it cannot erase evidence of another item.
//!
//! The check is conservative: regions are coarser than individual bits,
//! so a removal may refuse to clear a bit that happens to be safe. That
//! trades some reclamation for the hard guarantee that a removal never
//! introduces a false negative.
//!
//! # Trade-offs
//!
//! | Aspect          | Classic filter | Deletable filter           |
//! |-----------------|----------------|----------------------------|
//! | Add / Test      | O(k)           | O(k)                       |
//! | Remove          | Not supported  | O(k)                       |
//! | Extra space     | —              | `r` bits (collision map)   |
//! | False negatives | Never          | Never, even across removals|
//!
//! # Examples
//!
//! ## Insert and Remove
//!
//! ```
//! use filtercraft::prelude::*;
//!
//! let mut filter = DeletableBloomFilter::new(1000, 10, 0.01).unwrap();
//!
//! filter.add(b"session:alice");
//! assert!(filter.test(b"session:alice"));
//!
//! assert!(filter.test_and_remove(b"session:alice"));
//! assert!(!filter.test(b"session:alice"));
//! ```
//!
//! ## Removing a Never-Added Item
//!
//! ```
//! use filtercraft::prelude::*;
//!
//! let mut filter = DeletableBloomFilter::new(1000, 10, 0.01).unwrap();
//! filter.add(b"present");
//!
//! // No-op: nothing is mutated and count is unchanged
//! assert!(!filter.test_and_remove(b"absent"));
//! assert_eq!(filter.count(), 1);
//! ```
//!
//! # References
//!
//! - Rothenberg, C. E., Macapuna, C., Verdi, F., & Magalhães, M. (2010).
//!   "The Deletable Bloom filter: A new member of the Bloom family"

#![allow(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

use crate::core::filter::{MembershipFilter, RemovableFilter};
use crate::core::params::{optimal_k, optimal_m};
use crate::core::Buckets;
use crate::error::{FilterCraftError, Result};
use crate::filters::membership::MembershipMap;
use crate::hash::{DefaultHasher, FilterHasher};

/// Deletable Bloom filter over byte sequences.
///
/// # Type Parameters
///
/// * `H` - Hash primitive (defaults to [`DefaultHasher`])
///
/// # Region Geometry
///
/// Construction derives `m` from `(expected_items, fp_rate)` as the
/// classic filter does, then partitions the remaining bits into `regions`
/// collision regions of `region_size = (m - regions) / regions` bits
/// each. The usable capacity is rounded *down* to `region_size × regions`
/// so every position's owning region index lands in `[0, regions)`.
///
/// More regions mean finer collision tracking (more bits reclaimable on
/// removal) at the cost of `regions` extra bits of storage.
///
/// # Removal Semantics
///
/// [`test_and_remove`](Self::test_and_remove) on a probable member clears
/// only the bits whose regions are collision-free and decrements the item
/// counter. An item whose positions all fall in collided regions is still
/// reported removed (`true`, counter decremented) while its bits remain
/// set; this is the documented conservative trade-off of the algorithm. The
/// filter therefore never produces a false negative for any item that was
/// not removed.
#[derive(Debug, Clone)]
pub struct DeletableBloomFilter<H = DefaultHasher> {
    /// Shared membership bitmap + hashing state (capacity bits).
    map: MembershipMap<H>,

    /// One collision flag per region.
    collisions: Buckets,

    /// Membership bits per collision region.
    region_size: usize,

    /// Number of collision regions.
    regions: usize,

    /// Net number of items (adds minus successful removes).
    count: usize,

    /// Expected item count the filter was sized for.
    expected_items: usize,

    /// Target false positive rate the filter was sized for.
    target_fp_rate: f64,
}

impl DeletableBloomFilter<DefaultHasher> {
    /// Create a filter sized for `expected_items` insertions at the target
    /// false positive rate, with `regions` collision regions, using the
    /// default hash primitive.
    ///
    /// # Arguments
    ///
    /// * `expected_items` - Expected number of insertions (must be > 0)
    /// * `regions` - Number of collision regions (must leave each region
    ///   at least one bit wide)
    /// * `fp_rate` - Target false positive rate (must be in (0, 1))
    ///
    /// # Errors
    ///
    /// Returns a configuration error for `expected_items == 0`, `fp_rate`
    /// outside (0, 1), or a `regions` value that cannot partition the
    /// derived bitmap. The filter is never partially constructed.
    ///
    /// # Examples
    ///
    /// ```
    /// use filtercraft::filters::DeletableBloomFilter;
    ///
    /// let filter = DeletableBloomFilter::new(1000, 10, 0.01).unwrap();
    /// assert_eq!(filter.region_count(), 10);
    ///
    /// // Far more regions than bits cannot work
    /// assert!(DeletableBloomFilter::new(1, 1_000_000, 0.01).is_err());
    /// ```
    pub fn new(expected_items: usize, regions: usize, fp_rate: f64) -> Result<Self> {
        Self::with_hasher(expected_items, regions, fp_rate, DefaultHasher::new())
    }
}

impl<H: FilterHasher> DeletableBloomFilter<H> {
    /// Create a filter with an explicit hash primitive.
    ///
    /// # Errors
    ///
    /// Same conditions as [`new`](DeletableBloomFilter::new).
    pub fn with_hasher(
        expected_items: usize,
        regions: usize,
        fp_rate: f64,
        hasher: H,
    ) -> Result<Self> {
        let m = optimal_m(expected_items, fp_rate)?;
        let k = optimal_k(fp_rate)?;

        if regions == 0 || regions >= m {
            return Err(FilterCraftError::invalid_region_count(regions, m));
        }

        let region_size = (m - regions) / regions;
        if region_size == 0 {
            return Err(FilterCraftError::invalid_region_count(regions, m));
        }

        // Round capacity down to a whole number of regions so every
        // position's region index is in [0, regions)
        let capacity = region_size * regions;

        Ok(Self {
            map: MembershipMap::new(capacity, k, hasher)?,
            collisions: Buckets::new(regions, 1)?,
            region_size,
            regions,
            count: 0,
            expected_items,
            target_fp_rate: fp_rate,
        })
    }

    /// Get the number of collision regions (r).
    #[must_use]
    #[inline]
    pub fn region_count(&self) -> usize {
        self.regions
    }

    /// Get the number of membership bits per collision region.
    #[must_use]
    #[inline]
    pub fn region_size(&self) -> usize {
        self.region_size
    }

    /// Get the number of regions currently flagged as collided.
    ///
    /// Grows monotonically between resets; collided regions never become
    /// deletable again.
    #[must_use]
    pub fn collided_regions(&self) -> usize {
        self.collisions.count_ones()
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

    /// Get total memory usage of both bitmaps in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.map.bits.memory_usage() + self.collisions.memory_usage()
    }

    /// Set a position, flagging its region when the bit was already set
    /// by an earlier insertion. Returns whether the bit was set before.
    #[inline]
    fn set_tracking_collision(&mut self, index: usize) -> bool {
        if self.map.bits.get_bit(index) {
            self.collisions.set_bit(index / self.region_size);
            true
        } else {
            self.map.bits.set_bit(index);
            false
        }
    }
}

impl<H: FilterHasher> MembershipFilter for DeletableBloomFilter<H> {
    #[inline]
    fn test(&self, data: &[u8]) -> bool {
        self.map.test(data)
    }

    fn add(&mut self, data: &[u8]) -> &mut Self {
        for index in self.map.positions(data) {
            self.set_tracking_collision(index);
        }
        self.count += 1;
        self
    }

    fn test_and_add(&mut self, data: &[u8]) -> bool {
        // One position pass: prior membership falls out of the collision
        // bookkeeping (member iff every bit was already set)
        let mut member = true;
        for index in self.map.positions(data) {
            if !self.set_tracking_collision(index) {
                member = false;
            }
        }
        self.count += 1;
        member
    }

    fn reset(&mut self) -> &mut Self {
        self.map.reset();
        self.collisions.reset();
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

impl<H: FilterHasher> RemovableFilter for DeletableBloomFilter<H> {
    fn test_and_remove(&mut self, data: &[u8]) -> bool {
        // Membership is decided before any mutation; a definite miss
        // leaves the filter untouched
        if !self.map.test(data) {
            return false;
        }

        for index in self.map.positions(data) {
            if !self.collisions.get_bit(index / self.region_size) {
                self.map.bits.clear_bit(index);
            }
        }

        // Removing a collided item repeatedly must not wrap the counter
        self.count = self.count.saturating_sub(1);
        true
    }
}
