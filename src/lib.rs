//! # setkit
//!
//! A set abstract data type with interchangeable kernels and a differential
//! conformance harness.
//!
//! ## Overview
//!
//! This library separates *what a set is* from *how a set is stored*, and
//! ships the machinery to prove that any storage strategy honors the
//! contract. It includes:
//!
//! - **Contract**: the [`Set`](contract::Set) trait, covering membership,
//!   checked insertion and removal, and an arbitrary-choice removal, with
//!   explicit pre/postconditions
//! - **Kernels**: two conforming realizations, [`HashedSet`](kernel::HashedSet)
//!   (hash-backed, the trusted reference) and [`SortedSet`](kernel::SortedSet)
//!   (ordered-vector-backed with inline small-state storage)
//! - **Harness**: a differential test fixture that drives a subject kernel
//!   and a reference kernel through identical operation sequences and
//!   asserts behavioral equivalence after every step, including the
//!   nondeterministic `remove_any`
//! - **Conformance suite**: the [`conformance_suite!`] macro, which
//!   instantiates the full scenario catalog for any `(subject, reference)`
//!   pairing without source changes
//!
//! ## Feature Flags
//!
//! - `fxhash`: back [`HashedSet`](kernel::HashedSet) with the `rustc-hash`
//!   hasher instead of the standard library's default
//!
//! ## Example
//!
//! ```rust
//! use setkit::prelude::*;
//!
//! let mut set = SortedSet::new();
//! set.add("carbon".to_string());
//! set.add("helium".to_string());
//!
//! assert!(set.contains(&"carbon".to_string()));
//! assert_eq!(set.size(), 2);
//!
//! let removed = set.remove(&"carbon".to_string());
//! assert_eq!(removed, "carbon");
//! assert_eq!(set.size(), 1);
//! ```
//!
//! Validating a kernel against the reference:
//!
//! ```rust
//! use setkit::harness::check_equivalent;
//! use setkit::kernel::{HashedSet, SortedSet};
//! use setkit::prelude::*;
//!
//! let mut subject: SortedSet<i32> = SortedSet::new();
//! let mut reference: HashedSet<i32> = HashedSet::new();
//! for element in [3, 1, 2] {
//!     subject.add(element);
//!     reference.add(element);
//! }
//!
//! assert!(check_equivalent(subject, reference).is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use setkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::contract::Set;
    pub use crate::harness::{assert_equivalent, from_distinct, SetPair};
    pub use crate::kernel::{HashedSet, SortedSet};
}

pub mod contract;
pub mod harness;
pub mod kernel;
