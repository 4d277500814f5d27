//! Concrete set kernels.
//!
//! This module provides the two conforming realizations of the
//! [`Set`](crate::contract::Set) contract that ship with the crate:
//!
//! - [`HashedSet`]: hash-backed kernel, the trusted reference realization
//! - [`SortedSet`]: ordered-vector kernel with inline small-state storage
//!
//! The two are deliberately backed by unrelated storage strategies so that
//! pairing them in the differential harness exercises genuinely independent
//! code paths. Neither is privileged: the harness accepts any
//! `(subject, reference)` pairing of conforming types.
//!
//! # Examples
//!
//! ## `HashedSet`
//!
//! ```rust
//! use setkit::contract::Set;
//! use setkit::kernel::HashedSet;
//!
//! let mut set = HashedSet::new();
//! set.add("one".to_string());
//! set.add("two".to_string());
//!
//! assert!(set.contains(&"one".to_string()));
//! assert_eq!(set.size(), 2);
//! ```
//!
//! ## `SortedSet`
//!
//! ```rust
//! use setkit::contract::Set;
//! use setkit::kernel::SortedSet;
//!
//! let mut set = SortedSet::new();
//! for element in [30, 10, 20] {
//!     set.add(element);
//! }
//!
//! assert!(set.contains(&20));
//! assert_eq!(set.remove(&10), 10);
//! assert_eq!(set.size(), 2);
//! ```

// =============================================================================
// Hash Builder Type Alias
// =============================================================================

/// Hasher state used by [`HashedSet`].
///
/// When the `fxhash` feature is enabled, this is `rustc_hash::FxBuildHasher`,
/// a fast non-cryptographic hasher.
///
/// When the `fxhash` feature is disabled (default), this is the standard
/// library's `RandomState`.
#[cfg(feature = "fxhash")]
pub(crate) type HashBuilder = rustc_hash::FxBuildHasher;

#[cfg(not(feature = "fxhash"))]
pub(crate) type HashBuilder = std::collections::hash_map::RandomState;

mod hashed;
mod sorted;

pub use hashed::HashedSet;
pub use hashed::HashedSetIntoIterator;
pub use hashed::HashedSetIterator;
pub use sorted::SortedSet;
pub use sorted::SortedSetIntoIterator;
pub use sorted::SortedSetIterator;
