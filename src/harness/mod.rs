//! The differential conformance harness.
//!
//! This module validates any [`Set`](crate::contract::Set) implementation
//! against a trusted reference implementation. Two independently
//! constructed sets, one *subject* and one *reference*, are driven through
//! identical operation sequences and compared for behavioral equivalence
//! after each step, including the nondeterministic `remove_any`.
//!
//! # Pieces
//!
//! - [`from_distinct`] / [`SetPair`]: build a subject and a reference from
//!   one sequence of distinct literals, asserting distinctness eagerly
//! - [`check_equivalent`] / [`check_equivalent_in_place`] /
//!   [`assert_equivalent`]: structural equivalence (same cardinality,
//!   mutual containment) computed strictly over the five contract
//!   operations, so no iteration capability is ever required of a kernel
//! - Scenario checkers ([`check_add`], [`check_remove`],
//!   [`check_remove_any`], [`check_contains`], [`check_size`],
//!   [`check_constructor`]): one focused mutation or query per scenario,
//!   with the expected state constructed independently rather than derived
//!   from the reference
//! - [`replay`] over [`Operation`] scripts: arbitrary valid sequences with
//!   equivalence re-checked after every step
//! - [`conformance_suite!`](crate::conformance_suite): the full scenario
//!   catalog, stamped out per `(subject, reference)` pairing
//!
//! # Failure Taxonomy
//!
//! Malformed scenario input (a repeated construction literal, an operation
//! issued against the wrong state) is a defect in the harness driver and
//! panics immediately at construction. A *divergence* between subject and
//! reference after a valid operation is the actual test signal, reported as
//! a [`Divergence`] (or [`ScriptDivergence`] with a step index) and fatal
//! to its scenario. Nothing is retried, and no state crosses scenarios.
//!
//! # Examples
//!
//! ```rust
//! use setkit::harness::{check_remove_any, replay, Operation};
//! use setkit::kernel::{HashedSet, SortedSet};
//!
//! // One focused scenario: remove_any from {"1", "2", "3"}.
//! check_remove_any::<SortedSet<String>, HashedSet<String>, _>(vec![
//!     "1".to_string(),
//!     "2".to_string(),
//!     "3".to_string(),
//! ]);
//!
//! // An operation script, equivalence checked after every step.
//! let outcome = replay::<SortedSet<i32>, HashedSet<i32>, _>(vec![
//!     Operation::Add(10),
//!     Operation::Add(20),
//!     Operation::RemoveAny,
//!     Operation::Size,
//! ]);
//! assert!(outcome.is_ok());
//! ```

mod equivalence;
mod error;
mod fixture;
mod replay;
mod suite;

pub use equivalence::assert_equivalent;
pub use equivalence::check_equivalent;
pub use equivalence::check_equivalent_in_place;
pub use error::Divergence;
pub use error::ScriptDivergence;
pub use fixture::SetPair;
pub use fixture::check_add;
pub use fixture::check_constructor;
pub use fixture::check_contains;
pub use fixture::check_remove;
pub use fixture::check_remove_any;
pub use fixture::check_size;
pub use fixture::from_distinct;
pub use replay::Operation;
pub use replay::replay;
