//! Hash primitives and the position kernel for membership filters.
//!
//! # Module Structure
//!
//! ```text
//! hash/
//! ├── hasher.rs  - FilterHasher trait and Fnv128Hasher default
//! ├── kernel.rs  - Double-hashed position derivation
//! ├── xxhash.rs  - Xxh3Hasher (optional, feature = "xxhash")
//! └── mod.rs     - This file (public API)
//! ```
//!
//! # Pipeline
//!
//! ```text
//! bytes ──FilterHasher::digest128──▶ (lower, upper) ──kernel::positions──▶ k indices
//! ```
//!
//! The hasher digests input bytes into one 128-bit value split into 64-bit
//! halves; the kernel expands the halves into `k` bit positions via double
//! hashing. Swapping the hasher changes the position sequence but never
//! the algorithm's correctness.
//!
//! # Choosing a Hash Primitive
//!
//! | Hasher          | Speed      | Availability        | Use Case             |
//! |-----------------|------------|---------------------|----------------------|
//! | [`Fnv128Hasher`]| Adequate   | Always (default)    | Short keys, no deps  |
//! | [`Xxh3Hasher`]  | Very fast  | feature = `xxhash`  | Large keys, hot paths|
//!
//! # Examples
//!
//! ```
//! use filtercraft::hash::{FilterHasher, Fnv128Hasher};
//! use filtercraft::hash::kernel::positions;
//!
//! let hasher = Fnv128Hasher::new();
//! let (lower, upper) = hasher.digest128(b"item");
//!
//! // 7 positions for a 1000-bit filter
//! let indices: Vec<usize> = positions(lower, upper, 7, 1000).collect();
//! assert_eq!(indices.len(), 7);
//! ```

#![allow(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod hasher;
pub mod kernel;

#[cfg(feature = "xxhash")]
#[cfg_attr(docsrs, doc(cfg(feature = "xxhash")))]
pub mod xxhash;

pub use hasher::{FilterHasher, Fnv128Hasher};
pub use kernel::{positions, Positions};

#[cfg(feature = "xxhash")]
pub use xxhash::Xxh3Hasher;

/// Type alias for the default hash primitive used by filters.
///
/// Provides a stable name independent of the concrete implementation
/// (currently [`Fnv128Hasher`]).
pub type DefaultHasher = Fnv128Hasher;
