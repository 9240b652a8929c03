//! Builder for classic Bloom filters.
//!
//! # Examples
//!
//! ## Minimal Configuration
//!
//! ```
//! use filtercraft::builder::ClassicFilterBuilder;
//!
//! let filter = ClassicFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Custom Hash Primitive
//!
//! ```
//! use filtercraft::builder::ClassicFilterBuilder;
//! use filtercraft::hash::Fnv128Hasher;
//!
//! let filter = ClassicFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .hasher(Fnv128Hasher::with_seed(42))
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Error Handling
//!
//! ```
//! use filtercraft::builder::ClassicFilterBuilder;
//!
//! // Missing fp_rate: surfaces as an error, not a panic
//! let result = ClassicFilterBuilder::new()
//!     .expected_items(10_000)
//!     .build();
//! assert!(result.is_err());
//! ```

use super::validation;
use crate::error::Result;
use crate::filters::ClassicBloomFilter;
use crate::hash::{DefaultHasher, FilterHasher};

/// Fluent builder for [`ClassicBloomFilter`].
///
/// Required parameters: [`expected_items`](Self::expected_items) and
/// [`false_positive_rate`](Self::false_positive_rate). The hash primitive
/// defaults to [`DefaultHasher`].
#[derive(Debug, Clone)]
pub struct ClassicFilterBuilder<H = DefaultHasher> {
    expected_items: Option<usize>,
    fp_rate: Option<f64>,
    hasher: H,
}

impl ClassicFilterBuilder<DefaultHasher> {
    /// Create a new builder with no parameters set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            expected_items: None,
            fp_rate: None,
            hasher: DefaultHasher::new(),
        }
    }
}

impl Default for ClassicFilterBuilder<DefaultHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: FilterHasher> ClassicFilterBuilder<H> {
    /// Set the expected number of insertions (required).
    #[must_use]
    pub fn expected_items(mut self, items: usize) -> Self {
        self.expected_items = Some(items);
        self
    }

    /// Set the target false positive rate (required).
    #[must_use]
    pub fn false_positive_rate(mut self, fp_rate: f64) -> Self {
        self.fp_rate = Some(fp_rate);
        self
    }

    /// Swap in a different hash primitive (optional).
    #[must_use]
    pub fn hasher<H2: FilterHasher>(self, hasher: H2) -> ClassicFilterBuilder<H2> {
        ClassicFilterBuilder {
            expected_items: self.expected_items,
            fp_rate: self.fp_rate,
            hasher,
        }
    }

    /// Validate all parameters and construct the filter.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a required parameter is missing,
    /// `expected_items == 0`, or `fp_rate` is outside (0, 1).
    pub fn build(self) -> Result<ClassicBloomFilter<H>> {
        let expected_items = validation::require(self.expected_items, "expected_items")?;
        let fp_rate = validation::require(self.fp_rate, "false_positive_rate")?;

        validation::validate_items(expected_items)?;
        validation::validate_fp_rate(fp_rate)?;

        ClassicBloomFilter::with_hasher(expected_items, fp_rate, self.hasher)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_build_minimal() {
        let filter = ClassicFilterBuilder::new()
            .expected_items(1000)
            .false_positive_rate(0.01)
            .build()
            .unwrap();

        assert_eq!(filter.expected_items(), 1000);
        assert_eq!(filter.target_fp_rate(), 0.01);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_build_matches_direct_constructor() {
        let built = ClassicFilterBuilder::new()
            .expected_items(1000)
            .false_positive_rate(0.01)
            .build()
            .unwrap();
        let direct = ClassicBloomFilter::new(1000, 0.01).unwrap();

        assert_eq!(built.capacity(), direct.capacity());
        assert_eq!(built.hash_count(), direct.hash_count());
    }

    #[test]
    fn test_build_missing_items() {
        let result = ClassicFilterBuilder::new().false_positive_rate(0.01).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_build_missing_fp_rate() {
        let result = ClassicFilterBuilder::new().expected_items(1000).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_build_invalid_values() {
        assert!(ClassicFilterBuilder::new()
            .expected_items(0)
            .false_positive_rate(0.01)
            .build()
            .is_err());

        assert!(ClassicFilterBuilder::new()
            .expected_items(1000)
            .false_positive_rate(1.5)
            .build()
            .is_err());
    }

    #[test]
    fn test_build_with_custom_hasher() {
        use crate::hash::Fnv128Hasher;

        let mut filter = ClassicFilterBuilder::new()
            .expected_items(1000)
            .false_positive_rate(0.01)
            .hasher(Fnv128Hasher::with_seed(7))
            .build()
            .unwrap();

        filter.add(b"item");
        assert!(filter.test(b"item"));
    }

    #[test]
    fn test_builder_order_independent() {
        let a = ClassicFilterBuilder::new()
            .expected_items(500)
            .false_positive_rate(0.02)
            .build()
            .unwrap();
        let b = ClassicFilterBuilder::new()
            .false_positive_rate(0.02)
            .expected_items(500)
            .build()
            .unwrap();

        assert_eq!(a.capacity(), b.capacity());
        assert_eq!(a.hash_count(), b.hash_count());
    }
}
