//! Optimal parameter calculation for membership filters.
//!
//! Implements the closed-form sizing formulas from Bloom's 1970 analysis:
//! given an expected item count and a target false positive rate, derive
//! the bit-array size and hash-function count that meet the target with
//! minimal memory.
//!
//! # Mathematical Background
//!
//! Given:
//! - `n`: Expected number of elements
//! - `ε`: Target false positive rate
//!
//! Optimal parameters:
//! - `m = ⌈-n × ln(ε) / (ln 2)²⌉` (bits in filter)
//! - `k = ⌈log₂(1/ε)⌉` (number of hash positions per item)
//!
//! Expected false positive rate after `n` insertions:
//! - `p = (1 - e^(-kn/m))^k`
//!
//! All rounding is by ceiling so a filter is never under-provisioned for
//! its target rate.
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/Time Trade-offs in Hash Coding with Allowable Errors"
//! - Kirsch & Mitzenmacher (2006). "Less Hashing, Same Performance: Building a Better Bloom Filter"

#![allow(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::error::{FilterCraftError, Result};
use std::f64::consts::LN_2;

/// Mathematical constant: (ln 2)² ≈ 0.4804530139182014
///
/// Used in the optimal bit count calculation to avoid repeated computation.
const LN2_SQUARED: f64 = LN_2 * LN_2;

/// Calculate the optimal number of membership bits.
///
/// Implements the formula: `m = ⌈-n × ln(ε) / (ln 2)²⌉`
///
/// This is the minimum bit-array size satisfying the target false positive
/// rate for `n` expected insertions.
///
/// # Arguments
///
/// * `n` - Expected number of elements to insert (must be > 0)
/// * `fp_rate` - Target false positive rate (must be in range (0, 1))
///
/// # Errors
///
/// - [`FilterCraftError::InvalidItemCount`] if `n == 0`
/// - [`FilterCraftError::FalsePositiveRateOutOfBounds`] if `fp_rate` not in (0, 1)
/// - [`FilterCraftError::InvalidParameters`] if the result exceeds `usize`
///
/// # Examples
///
/// ```
/// use filtercraft::core::params::optimal_m;
///
/// // For 1000 items with 1% false positive rate
/// let m = optimal_m(1000, 0.01).unwrap();
/// assert!(m >= 9585 && m <= 9586); // ≈9586 bits (1.2 KB)
/// ```
pub fn optimal_m(n: usize, fp_rate: f64) -> Result<usize> {
    if n == 0 {
        return Err(FilterCraftError::invalid_item_count(n));
    }

    if fp_rate <= 0.0 || fp_rate >= 1.0 {
        return Err(FilterCraftError::fp_rate_out_of_bounds(fp_rate));
    }

    let m = -(n as f64) * fp_rate.ln() / LN2_SQUARED;

    if m > usize::MAX as f64 {
        return Err(FilterCraftError::invalid_parameters(format!(
            "calculated filter size {:.0} exceeds addressable memory",
            m
        )));
    }

    // Ceiling so the target rate is met, never undershot
    Ok(m.ceil() as usize)
}

/// Calculate the optimal number of hash positions per item.
///
/// Implements the formula: `k = ⌈log₂(1/ε)⌉`
///
/// For a filter sized by [`optimal_m`], this hash count minimizes the
/// false positive rate.
///
/// # Arguments
///
/// * `fp_rate` - Target false positive rate (must be in range (0, 1))
///
/// # Errors
///
/// - [`FilterCraftError::FalsePositiveRateOutOfBounds`] if `fp_rate` not in (0, 1)
///
/// # Examples
///
/// ```
/// use filtercraft::core::params::optimal_k;
///
/// assert_eq!(optimal_k(0.01).unwrap(), 7);   // log₂(100) ≈ 6.64
/// assert_eq!(optimal_k(0.001).unwrap(), 10); // log₂(1000) ≈ 9.97
/// ```
pub fn optimal_k(fp_rate: f64) -> Result<usize> {
    if fp_rate <= 0.0 || fp_rate >= 1.0 {
        return Err(FilterCraftError::fp_rate_out_of_bounds(fp_rate));
    }

    let k = (1.0 / fp_rate).log2().ceil() as usize;
    Ok(k.max(1))
}

/// Calculate the expected false positive rate for given parameters.
///
/// Implements the formula: `p = (1 - e^(-kn/m))^k`
///
/// This is the theoretical false positive probability after inserting `n`
/// elements into a filter of `m` bits using `k` hash positions, assuming
/// uniformly distributed independent hashes. Provided for calibration and
/// testing; empirical rates typically fall within 10-20% of this estimate.
///
/// # Errors
///
/// - [`FilterCraftError::InvalidParameters`] if `m == 0` or `k == 0`
///
/// # Examples
///
/// ```
/// use filtercraft::core::params::{expected_fp_rate, optimal_m, optimal_k};
///
/// let m = optimal_m(1000, 0.01).unwrap();
/// let k = optimal_k(0.01).unwrap();
/// let fp = expected_fp_rate(m, 1000, k).unwrap();
/// assert!((fp - 0.01).abs() < 0.005);
/// ```
pub fn expected_fp_rate(m: usize, n: usize, k: usize) -> Result<f64> {
    if m == 0 {
        return Err(FilterCraftError::invalid_parameters(
            "filter size must be greater than 0",
        ));
    }

    if k == 0 {
        return Err(FilterCraftError::invalid_parameters(
            "hash count must be greater than 0",
        ));
    }

    // Empty filter produces no false positives
    if n == 0 {
        return Ok(0.0);
    }

    let exponent = -((k * n) as f64) / m as f64;
    let prob_bit_one = 1.0 - exponent.exp();
    let fp_rate = prob_bit_one.powf(k as f64);

    // Clamp to [0, 1] to absorb floating-point rounding
    Ok(fp_rate.clamp(0.0, 1.0))
}
