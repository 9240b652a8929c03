//! Packed fixed-width counter array.
//!
//! This module provides the storage layer that every filter variant builds
//! on: a flat array of `count` buckets, each `bucket_bits` wide, packed
//! into 64-bit words. With a bit-width of 1 it is the membership bitmap of
//! the classic and deletable filters; wider buckets support counting
//! schemes without changing the packing logic.
//!
//! # Memory Layout
//!
//! Buckets are packed contiguously in little-endian bit order. A bucket may
//! straddle a word boundary when the bit-width does not divide 64:
//!
//! ```text
//! bucket_bits = 3
//! Word 0: [b0][b1][b2]...[b20][b21 low 1 bit]
//! Word 1: [b21 high 2 bits][b22]...
//! ```
//!
//! # Mutability
//!
//! All mutation requires `&mut self`. The filters built on this type have
//! single-threaded semantics; callers needing concurrent access impose
//! external mutual exclusion. There is no internal synchronization.
//!
//! # Performance Characteristics
//!
//! - Space: `⌈count × bucket_bits / 64⌉ × 8` bytes
//! - `get` / `set`: O(1), at most two word accesses
//! - `count_ones`: O(words), uses the CPU POPCNT instruction
//! - `reset`: O(words), zero-fills with no reallocation
//!
//! # Examples
//!
//! ```
//! use filtercraft::core::Buckets;
//!
//! let mut buckets = Buckets::new(100, 4).unwrap();
//! buckets.set(42, 9).unwrap();
//! assert_eq!(buckets.get(42), 9);
//! assert_eq!(buckets.get(43), 0);
//!
//! // Values wider than the bucket are rejected, never truncated
//! assert!(buckets.set(42, 16).is_err());
//! ```

use crate::error::{FilterCraftError, Result};

/// Number of bits per storage word.
const WORD_BITS: usize = 64;

/// Packed array of fixed-width counters.
///
/// A `Buckets` of bit-width 1 is a plain bitmap; wider buckets hold
/// saturating counters in the domain `[0, 2^bucket_bits - 1]`.
///
/// # Index Discipline
///
/// Accessing a bucket at `index >= count()` is a programming error and
/// panics, matching standard-library indexing behavior. Filter code derives
/// indices with modulo arithmetic, so a panic here indicates a bug in the
/// caller, not a recoverable condition.
///
/// # Value Discipline
///
/// [`set`](Self::set) rejects values outside the bucket's domain with
/// [`FilterCraftError::ValueOutOfRange`]. Truncation is never performed.
#[derive(Debug, Clone)]
pub struct Buckets {
    /// Word-packed backing storage.
    words: Box<[u64]>,

    /// Number of buckets.
    count: usize,

    /// Bits per bucket (1..=64).
    bucket_bits: u8,

    /// Largest value a bucket can hold: `2^bucket_bits - 1`.
    max_value: u64,
}

impl Buckets {
    /// Create a new packed array with `count` zeroed buckets of
    /// `bucket_bits` bits each.
    ///
    /// # Arguments
    ///
    /// * `count` - Number of buckets (must be > 0)
    /// * `bucket_bits` - Bits per bucket (must be in 1..=64)
    ///
    /// # Errors
    ///
    /// Returns [`FilterCraftError::InvalidParameters`] if `count` is 0 or
    /// `bucket_bits` is outside `1..=64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use filtercraft::core::Buckets;
    ///
    /// let bitmap = Buckets::new(1000, 1).unwrap();
    /// assert_eq!(bitmap.count(), 1000);
    /// assert_eq!(bitmap.max_value(), 1);
    /// ```
    pub fn new(count: usize, bucket_bits: u8) -> Result<Self> {
        if count == 0 {
            return Err(FilterCraftError::invalid_parameters(
                "bucket count must be greater than 0",
            ));
        }

        if bucket_bits == 0 || bucket_bits as usize > WORD_BITS {
            return Err(FilterCraftError::invalid_parameters(format!(
                "bucket bit-width must be in 1..=64, got {}",
                bucket_bits
            )));
        }

        let total_bits = count
            .checked_mul(bucket_bits as usize)
            .ok_or_else(|| FilterCraftError::invalid_parameters("bucket array size overflows"))?;
        let num_words = (total_bits + WORD_BITS - 1) / WORD_BITS;

        let max_value = if bucket_bits as usize == WORD_BITS {
            u64::MAX
        } else {
            (1u64 << bucket_bits) - 1
        };

        Ok(Self {
            words: vec![0u64; num_words].into_boxed_slice(),
            count,
            bucket_bits,
            max_value,
        })
    }

    /// Get the number of buckets.
    #[must_use]
    #[inline]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Get the bit-width of each bucket.
    #[must_use]
    #[inline]
    pub const fn bucket_bits(&self) -> u8 {
        self.bucket_bits
    }

    /// Get the largest value a bucket can hold.
    #[must_use]
    #[inline]
    pub const fn max_value(&self) -> u64 {
        self.max_value
    }

    #[inline]
    fn check_index(&self, index: usize) {
        assert!(
            index < self.count,
            "Buckets index out of bounds: index={} count={}",
            index,
            self.count
        );
    }

    /// Get the value stored in the bucket at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= count()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use filtercraft::core::Buckets;
    ///
    /// let mut buckets = Buckets::new(10, 8).unwrap();
    /// buckets.set(3, 200).unwrap();
    /// assert_eq!(buckets.get(3), 200);
    /// ```
    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> u64 {
        self.check_index(index);

        let bit = index * self.bucket_bits as usize;
        let word = bit / WORD_BITS;
        let offset = bit % WORD_BITS;
        let width = self.bucket_bits as usize;

        if offset + width <= WORD_BITS {
            (self.words[word] >> offset) & self.max_value
        } else {
            // Bucket straddles two words.
            let low = self.words[word] >> offset;
            let high = self.words[word + 1] << (WORD_BITS - offset);
            (low | high) & self.max_value
        }
    }

    /// Overwrite the bucket at `index` with `value`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterCraftError::ValueOutOfRange`] if `value` exceeds
    /// [`max_value`](Self::max_value). The bucket is not modified on error.
    ///
    /// # Panics
    ///
    /// Panics if `index >= count()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use filtercraft::core::Buckets;
    ///
    /// let mut buckets = Buckets::new(10, 4).unwrap();
    /// buckets.set(0, 15).unwrap();
    /// assert!(buckets.set(0, 16).is_err());
    /// assert_eq!(buckets.get(0), 15);
    /// ```
    pub fn set(&mut self, index: usize, value: u64) -> Result<&mut Self> {
        if value > self.max_value {
            return Err(FilterCraftError::value_out_of_range(value, self.max_value));
        }

        self.write(index, value);
        Ok(self)
    }

    /// Increment the bucket at `index`, saturating at `max_value()`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= count()`.
    pub fn increment(&mut self, index: usize) -> &mut Self {
        let value = self.get(index);
        if value < self.max_value {
            self.write(index, value + 1);
        }
        self
    }

    /// Decrement the bucket at `index`, saturating at zero.
    ///
    /// # Panics
    ///
    /// Panics if `index >= count()`.
    pub fn decrement(&mut self, index: usize) -> &mut Self {
        let value = self.get(index);
        if value > 0 {
            self.write(index, value - 1);
        }
        self
    }

    /// Write a pre-validated value. Callers guarantee `value <= max_value`.
    #[inline]
    fn write(&mut self, index: usize, value: u64) {
        self.check_index(index);
        debug_assert!(value <= self.max_value);

        let bit = index * self.bucket_bits as usize;
        let word = bit / WORD_BITS;
        let offset = bit % WORD_BITS;
        let width = self.bucket_bits as usize;

        if offset + width <= WORD_BITS {
            self.words[word] &= !(self.max_value << offset);
            self.words[word] |= value << offset;
        } else {
            let low_bits = WORD_BITS - offset;
            self.words[word] &= !(self.max_value << offset);
            self.words[word] |= value << offset;
            self.words[word + 1] &= !(self.max_value >> low_bits);
            self.words[word + 1] |= value >> low_bits;
        }
    }

    /// Test whether the bit at `index` is set. Bit-width-1 fast path.
    ///
    /// # Panics
    ///
    /// Panics if `index >= count()`.
    #[must_use]
    #[inline]
    pub fn get_bit(&self, index: usize) -> bool {
        debug_assert_eq!(self.bucket_bits, 1, "get_bit requires 1-bit buckets");
        self.check_index(index);
        (self.words[index / WORD_BITS] >> (index % WORD_BITS)) & 1 != 0
    }

    /// Set the bit at `index` to 1. Bit-width-1 fast path; idempotent.
    ///
    /// # Panics
    ///
    /// Panics if `index >= count()`.
    #[inline]
    pub fn set_bit(&mut self, index: usize) -> &mut Self {
        debug_assert_eq!(self.bucket_bits, 1, "set_bit requires 1-bit buckets");
        self.check_index(index);
        self.words[index / WORD_BITS] |= 1u64 << (index % WORD_BITS);
        self
    }

    /// Clear the bit at `index` to 0. Bit-width-1 fast path.
    ///
    /// # Panics
    ///
    /// Panics if `index >= count()`.
    #[inline]
    pub fn clear_bit(&mut self, index: usize) -> &mut Self {
        debug_assert_eq!(self.bucket_bits, 1, "clear_bit requires 1-bit buckets");
        self.check_index(index);
        self.words[index / WORD_BITS] &= !(1u64 << (index % WORD_BITS));
        self
    }

    /// Zero-fill every bucket in place.
    ///
    /// O(words) over the backing buffer; no per-bucket iteration and no
    /// reallocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use filtercraft::core::Buckets;
    ///
    /// let mut buckets = Buckets::new(100, 1).unwrap();
    /// buckets.set_bit(10).set_bit(20);
    /// assert_eq!(buckets.count_ones(), 2);
    ///
    /// buckets.reset();
    /// assert_eq!(buckets.count_ones(), 0);
    /// ```
    pub fn reset(&mut self) -> &mut Self {
        self.words.fill(0);
        self
    }

    /// Count the number of bits set to 1 across the backing storage.
    ///
    /// For 1-bit buckets this is exactly the number of set buckets; it is
    /// the basis of the filters' exact fill-ratio scan.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.words
            .iter()
            .map(|word| word.count_ones() as usize)
            .sum()
    }

    /// Get total memory usage in bytes, including the struct itself.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.words.len() * std::mem::size_of::<u64>() + std::mem::size_of::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let buckets = Buckets::new(100, 1).unwrap();
        assert_eq!(buckets.count(), 100);
        assert_eq!(buckets.bucket_bits(), 1);
        assert_eq!(buckets.max_value(), 1);
        assert_eq!(buckets.count_ones(), 0);
    }

    #[test]
    fn test_new_zero_count_error() {
        assert!(Buckets::new(0, 1).is_err());
    }

    #[test]
    fn test_new_invalid_bit_width() {
        assert!(Buckets::new(100, 0).is_err());
        assert!(Buckets::new(100, 65).is_err());
        assert!(Buckets::new(100, 64).is_ok());
    }

    #[test]
    fn test_word_allocation() {
        // 100 one-bit buckets fit in ⌈100/64⌉ = 2 words
        let buckets = Buckets::new(100, 1).unwrap();
        assert!(buckets.memory_usage() >= 16);

        // 100 four-bit buckets need ⌈400/64⌉ = 7 words
        let buckets = Buckets::new(100, 4).unwrap();
        assert!(buckets.memory_usage() >= 56);
    }

    #[test]
    fn test_set_get_roundtrip() {
        for bits in [1u8, 2, 3, 4, 8, 16, 32] {
            let mut buckets = Buckets::new(50, bits).unwrap();
            let max = buckets.max_value();

            buckets.set(0, max).unwrap();
            buckets.set(25, max / 2).unwrap();
            buckets.set(49, 1).unwrap();

            assert_eq!(buckets.get(0), max, "bits={}", bits);
            assert_eq!(buckets.get(25), max / 2, "bits={}", bits);
            assert_eq!(buckets.get(49), 1, "bits={}", bits);
            assert_eq!(buckets.get(1), 0, "bits={}", bits);
        }
    }

    #[test]
    fn test_straddling_word_boundary() {
        // 3-bit buckets: bucket 21 occupies bits 63..66, straddling words 0 and 1
        let mut buckets = Buckets::new(64, 3).unwrap();
        buckets.set(21, 0b101).unwrap();

        assert_eq!(buckets.get(21), 0b101);
        assert_eq!(buckets.get(20), 0);
        assert_eq!(buckets.get(22), 0);

        // Overwrite in place across the boundary
        buckets.set(21, 0b010).unwrap();
        assert_eq!(buckets.get(21), 0b010);
    }

    #[test]
    fn test_set_neighbors_unaffected() {
        let mut buckets = Buckets::new(100, 4).unwrap();
        for i in 0..100 {
            buckets.set(i, (i % 16) as u64).unwrap();
        }
        for i in 0..100 {
            assert_eq!(buckets.get(i), (i % 16) as u64);
        }
    }

    #[test]
    fn test_set_rejects_oversized_value() {
        let mut buckets = Buckets::new(10, 4).unwrap();
        let result = buckets.set(0, 16);
        assert_eq!(
            result.unwrap_err(),
            FilterCraftError::value_out_of_range(16, 15)
        );
        // Rejection leaves the bucket untouched
        assert_eq!(buckets.get(0), 0);
    }

    #[test]
    fn test_full_width_buckets() {
        let mut buckets = Buckets::new(4, 64).unwrap();
        buckets.set(2, u64::MAX).unwrap();
        assert_eq!(buckets.get(2), u64::MAX);
        assert_eq!(buckets.get(1), 0);
        assert_eq!(buckets.get(3), 0);
    }

    #[test]
    fn test_increment_saturates() {
        let mut buckets = Buckets::new(10, 2).unwrap();
        for _ in 0..10 {
            buckets.increment(5);
        }
        assert_eq!(buckets.get(5), 3); // 2-bit max
    }

    #[test]
    fn test_decrement_saturates() {
        let mut buckets = Buckets::new(10, 2).unwrap();
        buckets.decrement(5);
        assert_eq!(buckets.get(5), 0);

        buckets.increment(5).increment(5);
        buckets.decrement(5);
        assert_eq!(buckets.get(5), 1);
    }

    #[test]
    fn test_bit_fast_paths() {
        let mut bitmap = Buckets::new(128, 1).unwrap();
        assert!(!bitmap.get_bit(0));

        bitmap.set_bit(0).set_bit(63).set_bit(64).set_bit(127);
        assert!(bitmap.get_bit(0));
        assert!(bitmap.get_bit(63));
        assert!(bitmap.get_bit(64));
        assert!(bitmap.get_bit(127));
        assert!(!bitmap.get_bit(32));
        assert_eq!(bitmap.count_ones(), 4);

        bitmap.clear_bit(63);
        assert!(!bitmap.get_bit(63));
        assert_eq!(bitmap.count_ones(), 3);
    }

    #[test]
    fn test_set_bit_idempotent() {
        let mut bitmap = Buckets::new(64, 1).unwrap();
        bitmap.set_bit(10).set_bit(10).set_bit(10);
        assert_eq!(bitmap.count_ones(), 1);
    }

    #[test]
    fn test_reset() {
        let mut buckets = Buckets::new(100, 4).unwrap();
        buckets.set(10, 7).unwrap();
        buckets.set(90, 15).unwrap();

        buckets.reset();
        assert_eq!(buckets.count_ones(), 0);
        assert_eq!(buckets.get(10), 0);
        assert_eq!(buckets.get(90), 0);

        // Storage stays usable after reset
        buckets.set(10, 3).unwrap();
        assert_eq!(buckets.get(10), 3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds() {
        let buckets = Buckets::new(64, 1).unwrap();
        let _ = buckets.get(64);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_out_of_bounds() {
        let mut buckets = Buckets::new(64, 1).unwrap();
        let _ = buckets.set(100, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_bit_out_of_bounds() {
        let mut bitmap = Buckets::new(64, 1).unwrap();
        bitmap.set_bit(64);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Buckets::new(64, 1).unwrap();
        original.set_bit(10);

        let mut copy = original.clone();
        assert!(copy.get_bit(10));

        copy.set_bit(20);
        assert!(!original.get_bit(20));
    }

    #[test]
    fn test_count_ones_dense() {
        let mut bitmap = Buckets::new(1000, 1).unwrap();
        for i in 0..250 {
            bitmap.set_bit(i * 4);
        }
        assert_eq!(bitmap.count_ones(), 250);
    }
}
