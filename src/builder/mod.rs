//! Builder pattern for filter construction.
//!
//! Builders collect construction parameters fluently and validate them all
//! at `build()`, producing the same filters as the direct constructors.
//! They are the recommended entry point when parameters arrive from
//! configuration rather than literals, because a missing parameter
//! surfaces as a structured error instead of a distant panic.
//!
//! # Examples
//!
//! ## Classic Filter
//!
//! ```
//! use filtercraft::builder::ClassicFilterBuilder;
//!
//! let filter = ClassicFilterBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.01)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(filter.expected_items(), 10_000);
//! ```
//!
//! ## Deletable Filter
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
//!
//! assert_eq!(filter.region_count(), 100);
//! ```
//!
//! # Builder Comparison
//!
//! | Builder | Required Parameters | Optional |
//! |---------|---------------------|----------|
//! | [`ClassicFilterBuilder`] | items, fp_rate | hasher |
//! | [`DeletableFilterBuilder`] | items, regions, fp_rate | hasher |

#![allow(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod classic;
pub mod deletable;

pub use classic::ClassicFilterBuilder;
pub use deletable::DeletableFilterBuilder;

/// Shared parameter validation for builders.
///
/// The filter constructors validate again; validating here lets builders
/// report the first bad parameter before any sizing work happens.
pub(crate) mod validation {
    use crate::error::{FilterCraftError, Result};

    /// Validate an expected item count.
    pub(crate) fn validate_items(items: usize) -> Result<()> {
        if items == 0 {
            return Err(FilterCraftError::invalid_item_count(items));
        }
        Ok(())
    }

    /// Validate a false positive rate.
    pub(crate) fn validate_fp_rate(fp_rate: f64) -> Result<()> {
        if fp_rate <= 0.0 || fp_rate >= 1.0 {
            return Err(FilterCraftError::fp_rate_out_of_bounds(fp_rate));
        }
        Ok(())
    }

    /// Require a parameter that has no default.
    pub(crate) fn require<T>(value: Option<T>, name: &str) -> Result<T> {
        value.ok_or_else(|| {
            FilterCraftError::invalid_parameters(format!("{} is required but was not set", name))
        })
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_validate_items() {
            assert!(validate_items(1).is_ok());
            assert!(validate_items(0).is_err());
        }

        #[test]
        fn test_validate_fp_rate() {
            assert!(validate_fp_rate(0.01).is_ok());
            assert!(validate_fp_rate(0.0).is_err());
            assert!(validate_fp_rate(1.0).is_err());
            assert!(validate_fp_rate(-1.0).is_err());
        }

        #[test]
        fn test_require() {
            assert_eq!(require(Some(5), "x").unwrap(), 5);
            assert!(require::<usize>(None, "x").is_err());
        }
    }
}
