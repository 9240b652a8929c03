//! Builder for deletable Bloom filters.
//!
//! # Examples
//!
//! ## Minimal Configuration
//!
//! ```
//! use filtercraft::builder::DeletableFilterBuilder;
//!
//! let filter = DeletableFilterBuilder::new()
//!     .expected_items(10_000)
//!     .regions(100)
//!     .false_positive_rate(0.01)
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Error Handling
//!
//! ```
//! use filtercraft::builder::DeletableFilterBuilder;
//!
//! // Region count that cannot partition the bitmap
//! let result = DeletableFilterBuilder::new()
//!     .expected_items(1)
//!     .regions(1_000_000)
//!     .false_positive_rate(0.01)
//!     .build();
//! assert!(result.is_err());
//! ```

use super::validation;
use crate::error::Result;
use crate::filters::DeletableBloomFilter;
use crate::hash::{DefaultHasher, FilterHasher};

/// Fluent builder for [`DeletableBloomFilter`].
///
/// Required parameters: [`expected_items`](Self::expected_items),
/// [`regions`](Self::regions), and
/// [`false_positive_rate`](Self::false_positive_rate). The hash primitive
/// defaults to [`DefaultHasher`].
#[derive(Debug, Clone)]
pub struct DeletableFilterBuilder<H = DefaultHasher> {
    expected_items: Option<usize>,
    regions: Option<usize>,
    fp_rate: Option<f64>,
    hasher: H,
}

impl DeletableFilterBuilder<DefaultHasher> {
    /// Create a new builder with no parameters set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            expected_items: None,
            regions: None,
            fp_rate: None,
            hasher: DefaultHasher::new(),
        }
    }
}

impl Default for DeletableFilterBuilder<DefaultHasher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: FilterHasher> DeletableFilterBuilder<H> {
    /// Set the expected number of insertions (required).
    #[must_use]
    pub fn expected_items(mut self, items: usize) -> Self {
        self.expected_items = Some(items);
        self
    }

    /// Set the number of collision regions (required).
    ///
    /// More regions track collisions at finer granularity, reclaiming
    /// more bits on removal, at the cost of one extra stored bit each.
    #[must_use]
    pub fn regions(mut self, regions: usize) -> Self {
        self.regions = Some(regions);
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
    pub fn hasher<H2: FilterHasher>(self, hasher: H2) -> DeletableFilterBuilder<H2> {
        DeletableFilterBuilder {
            expected_items: self.expected_items,
            regions: self.regions,
            fp_rate: self.fp_rate,
            hasher,
        }
    }

    /// Validate all parameters and construct the filter.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a required parameter is missing,
    /// `expected_items == 0`, `fp_rate` is outside (0, 1), or the region
    /// count cannot partition the derived bitmap.
    pub fn build(self) -> Result<DeletableBloomFilter<H>> {
        let expected_items = validation::require(self.expected_items, "expected_items")?;
        let regions = validation::require(self.regions, "regions")?;
        let fp_rate = validation::require(self.fp_rate, "false_positive_rate")?;

        validation::validate_items(expected_items)?;
        validation::validate_fp_rate(fp_rate)?;

        DeletableBloomFilter::with_hasher(expected_items, regions, fp_rate, self.hasher)
    }
}
