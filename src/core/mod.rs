//! Core types, traits, and utilities for FilterCraft.
//!
//! This module contains the building blocks shared by every filter
//! variant:
//!
//! - **Traits**: [`MembershipFilter`], [`RemovableFilter`]
//! - **Storage**: [`Buckets`] (packed fixed-width counter array)
//! - **Utilities**: optimal parameter calculation
//!
//! # Module Organization
//!
//! ```text
//! core/
//! ├── filter.rs   - Trait definitions
//! ├── buckets.rs  - Packed counter array
//! ├── params.rs   - Parameter calculations
//! └── mod.rs      - This file (public API)
//! ```
//!
//! # Examples
//!
//! ## Using Parameter Calculations
//!
//! ```
//! use filtercraft::core::params::{optimal_m, optimal_k};
//!
//! // Optimal parameters for 10K items with 1% FP rate
//! let m = optimal_m(10_000, 0.01).unwrap();
//! let k = optimal_k(0.01).unwrap();
//!
//! println!("Need {} bits and {} hash positions", m, k);
//! ```
//!
//! ## Using Buckets Directly
//!
//! ```
//! use filtercraft::core::Buckets;
//!
//! let mut bitmap = Buckets::new(1000, 1).unwrap();
//! bitmap.set_bit(42);
//! bitmap.set_bit(999);
//!
//! assert!(bitmap.get_bit(42));
//! assert!(!bitmap.get_bit(43));
//! assert_eq!(bitmap.count_ones(), 2);
//! ```

#![allow(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod buckets;
pub mod filter;
pub mod params;

pub use buckets::Buckets;
pub use filter::{MembershipFilter, RemovableFilter};
pub use params::{expected_fp_rate, optimal_k, optimal_m};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_reexports() {
        let bitmap = Buckets::new(100, 1).unwrap();
        assert_eq!(bitmap.count(), 100);

        let m = optimal_m(1000, 0.01).unwrap();
        assert!(m > 9500 && m < 9600);
    }

    #[test]
    fn test_integration_params_and_buckets() {
        let n = 1000;
        let fp_rate = 0.01;

        let m = optimal_m(n, fp_rate).unwrap();
        let k = optimal_k(fp_rate).unwrap();

        // A bitmap sized from the optimizer is directly constructible
        let bitmap = Buckets::new(m, 1).unwrap();
        assert_eq!(bitmap.count(), m);
        assert!(k >= 5 && k <= 10);
    }

    #[test]
    fn test_fill_fraction_of_sized_bitmap() {
        let mut bitmap = Buckets::new(1000, 1).unwrap();
        for i in 0..250 {
            bitmap.set_bit(i);
        }

        let fraction = bitmap.count_ones() as f64 / bitmap.count() as f64;
        assert!((fraction - 0.25).abs() < 0.01);
    }

    #[test]
    fn test_expected_fp_rate_consistency() {
        let n = 5000;
        let target = 0.005;

        let m = optimal_m(n, target).unwrap();
        let k = optimal_k(target).unwrap();
        let actual = expected_fp_rate(m, n, k).unwrap();

        let error = (actual - target).abs() / target;
        assert!(
            error < 0.3,
            "FP rate error {:.1}% too large. Target: {}, Actual: {}",
            error * 100.0,
            target,
            actual
        );
    }
}
