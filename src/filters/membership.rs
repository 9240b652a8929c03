//! Shared membership-map core.
//!
//! Both filter variants are, at bottom, the same machine: a 1-bit
//! [`Buckets`] bitmap addressed through the hash kernel. Rather than
//! duplicating that machinery, this module factors it into one internal
//! `MembershipMap` that the classic filter uses directly and the deletable
//! filter composes alongside its collision bitmap.

use crate::core::Buckets;
use crate::error::Result;
use crate::hash::kernel::{positions, Positions};
use crate::hash::FilterHasher;

/// Internal membership bitmap plus the hashing state that addresses it.
///
/// Owns the bit storage exclusively; two maps never alias a buffer. All
/// mutation is in place through `&mut self`.
#[derive(Debug, Clone)]
pub(crate) struct MembershipMap<H> {
    /// 1-bit membership bitmap of `m` positions.
    pub(crate) bits: Buckets,

    /// Number of usable bit positions.
    pub(crate) m: usize,

    /// Number of hash positions derived per item.
    pub(crate) k: usize,

    /// Pluggable hash primitive.
    pub(crate) hasher: H,
}

impl<H: FilterHasher> MembershipMap<H> {
    /// Create a map with `m` zeroed membership bits and `k` positions per
    /// item.
    pub(crate) fn new(m: usize, k: usize, hasher: H) -> Result<Self> {
        let bits = Buckets::new(m, 1)?;
        Ok(Self { bits, m, k, hasher })
    }

    /// Derive the `k` positions for `data`.
    ///
    /// Digests once and expands via double hashing; recomputed per call,
    /// never cached.
    #[inline]
    pub(crate) fn positions(&self, data: &[u8]) -> Positions {
        let (lower, upper) = self.hasher.digest128(data);
        positions(lower, upper, self.k, self.m)
    }

    /// Test whether every position of `data` is set.
    ///
    /// Short-circuits on the first unset bit.
    #[inline]
    pub(crate) fn test(&self, data: &[u8]) -> bool {
        self.positions(data).all(|index| self.bits.get_bit(index))
    }

    /// Set every position of `data`.
    #[inline]
    pub(crate) fn set_all(&mut self, data: &[u8]) {
        for index in self.positions(data) {
            self.bits.set_bit(index);
        }
    }

    /// Exact fraction of set bits; O(m) scan.
    pub(crate) fn fill_ratio(&self) -> f64 {
        self.bits.count_ones() as f64 / self.m as f64
    }

    /// Analytic fill estimate `1 - e^(-count·k/m)` for `count` insertions.
    pub(crate) fn estimated_fill_ratio(&self, count: usize) -> f64 {
        1.0 - (-((count * self.k) as f64) / self.m as f64).exp()
    }

    /// Zero-fill the bitmap in place.
    pub(crate) fn reset(&mut self) {
        self.bits.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::Fnv128Hasher;

    fn map(m: usize, k: usize) -> MembershipMap<Fnv128Hasher> {
        MembershipMap::new(m, k, Fnv128Hasher::new()).unwrap()
    }

    #[test]
    fn test_new_map_is_empty() {
        let map = map(1000, 7);
        assert_eq!(map.bits.count_ones(), 0);
        assert!(!map.test(b"anything"));
    }

    #[test]
    fn test_set_all_then_test() {
        let mut map = map(1000, 7);
        map.set_all(b"item");
        assert!(map.test(b"item"));
        assert!(!map.test(b"other"));
    }

    #[test]
    fn test_positions_recomputed_identically() {
        let map = map(1000, 7);
        let a: Vec<usize> = map.positions(b"key").collect();
        let b: Vec<usize> = map.positions(b"key").collect();
        assert_eq!(a, b);
        assert_eq!(a.len(), 7);
    }

    #[test]
    fn test_set_all_touches_at_most_k_bits() {
        let mut map = map(100_000, 7);
        map.set_all(b"one item");
        // At most k bits (fewer when positions repeat)
        assert!(map.bits.count_ones() <= 7);
        assert!(map.bits.count_ones() >= 1);
    }

    #[test]
    fn test_fill_ratio_empty_and_after_insert() {
        let mut map = map(1000, 7);
        assert_eq!(map.fill_ratio(), 0.0);

        map.set_all(b"item");
        assert!(map.fill_ratio() > 0.0);
        assert!(map.fill_ratio() <= 7.0 / 1000.0);
    }

    #[test]
    fn test_estimated_fill_ratio_tracks_count() {
        let map = map(1000, 7);
        assert_eq!(map.estimated_fill_ratio(0), 0.0);

        let low = map.estimated_fill_ratio(10);
        let high = map.estimated_fill_ratio(100);
        assert!(low > 0.0);
        assert!(high > low);
        assert!(high < 1.0);
    }

    #[test]
    fn test_reset_clears_bits() {
        let mut map = map(1000, 7);
        map.set_all(b"item");
        map.reset();
        assert_eq!(map.bits.count_ones(), 0);
        assert!(!map.test(b"item"));
    }

    #[test]
    fn test_clone_independence() {
        let mut original = map(1000, 7);
        original.set_all(b"item");

        let copy = original.clone();
        original.reset();

        assert!(copy.test(b"item"));
        assert!(!original.test(b"item"));
    }
}
