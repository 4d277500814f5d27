//! The differential test fixture.
//!
//! A fixture run is always the same three movements: build a subject and a
//! reference from one literal sequence, apply a single focused mutation to
//! the subject, and compare against an *independently constructed* expected
//! reference. Building the expectation directly, rather than mutating the
//! reference in parallel, cross-checks both the operation's effect and its
//! return value.
//!
//! Every scenario is stateless across runs: the pair is owned by one
//! scenario, discarded at its end, and a failed assertion stops that
//! scenario immediately without touching any other.

use std::fmt;

use super::equivalence::{assert_equivalent, check_equivalent_in_place};
use crate::contract::Set;

/// Panic message for a construction sequence containing a repeated element.
const DISTINCT_SEQUENCE_PANIC_MESSAGE: &str =
    "violation of: every element in the sequence is unique";

// =============================================================================
// Construction Helpers
// =============================================================================

/// Builds a set by sequential `add` over a sequence of distinct elements.
///
/// The distinctness precondition is asserted eagerly before each `add`: a
/// repeated element is a defect in the scenario, and surfacing it at
/// construction time keeps it from masquerading as a kernel failure later.
///
/// # Panics
///
/// Panics if the sequence repeats an element.
///
/// # Examples
///
/// ```rust
/// use setkit::harness::from_distinct;
/// use setkit::kernel::SortedSet;
/// use setkit::prelude::*;
///
/// let set: SortedSet<i32> = from_distinct([3, 1, 2]);
/// assert_eq!(set.size(), 3);
/// ```
pub fn from_distinct<S, T, I>(elements: I) -> S
where
    S: Set<T>,
    I: IntoIterator<Item = T>,
{
    let mut set = S::default();
    for element in elements {
        assert!(
            !set.contains(&element),
            "{DISTINCT_SEQUENCE_PANIC_MESSAGE}"
        );
        set.add(element);
    }
    set
}

// =============================================================================
// SetPair
// =============================================================================

/// A subject/reference pair built from the same literal sequence.
///
/// The two sets are constructed independently (same elements, separate
/// `add` sequences) and are logically equal at every checkpoint even
/// though their internal representations may share nothing. A pair belongs
/// to exactly one scenario and is dropped when the scenario ends.
///
/// # Examples
///
/// ```rust
/// use setkit::harness::SetPair;
/// use setkit::kernel::{HashedSet, SortedSet};
/// use setkit::prelude::*;
///
/// let mut pair: SetPair<SortedSet<i32>, HashedSet<i32>> =
///     SetPair::from_distinct([1, 2, 3]);
///
/// pair.subject.add(4);
/// pair.reference.add(4);
/// pair.assert_equivalent();
/// ```
#[derive(Debug, Clone)]
pub struct SetPair<S, R> {
    /// The kernel under test.
    pub subject: S,
    /// The trusted oracle.
    pub reference: R,
}

impl<S, R> SetPair<S, R> {
    /// Builds both sides of the pair from one sequence of distinct elements.
    ///
    /// # Panics
    ///
    /// Panics if the sequence repeats an element.
    pub fn from_distinct<T, I>(elements: I) -> Self
    where
        S: Set<T>,
        R: Set<T>,
        T: Clone,
        I: IntoIterator<Item = T>,
    {
        let elements: Vec<T> = elements.into_iter().collect();
        let subject = from_distinct(elements.iter().cloned());
        let reference = from_distinct(elements);
        Self { subject, reference }
    }

    /// Asserts that the two sides currently have identical membership,
    /// consuming the pair.
    ///
    /// # Panics
    ///
    /// Panics with the rendered divergence if the two sets differ.
    pub fn assert_equivalent<T>(self)
    where
        S: Set<T>,
        R: Set<T>,
        T: fmt::Debug,
    {
        assert_equivalent(self.subject, self.reference);
    }
}

// =============================================================================
// Scenario Checkers
// =============================================================================

/// Scenario: construct from a distinct sequence, no mutation.
///
/// Checks that the subject reports the sequence's length as its size and is
/// equivalent to a reference built from the same sequence.
///
/// # Panics
///
/// Panics if the subject's size disagrees with the sequence length or the
/// pair diverges.
pub fn check_constructor<S, R, T>(initial: Vec<T>)
where
    S: Set<T>,
    R: Set<T>,
    T: Clone + fmt::Debug,
{
    let expected_size = initial.len();
    let pair: SetPair<S, R> = SetPair::from_distinct(initial);

    assert_eq!(pair.subject.size(), expected_size, "constructed size");
    assert_eq!(pair.subject.size(), expected_size, "size is a pure query");
    pair.assert_equivalent();
}

/// Scenario: construct from `initial`, then `add(element)` to the subject.
///
/// The expectation is built directly from `initial` plus `element`, never by
/// mutating the reference.
///
/// # Panics
///
/// Panics if `element` already occurs in `initial`, or the mutated subject
/// diverges from the expectation.
pub fn check_add<S, R, T>(initial: Vec<T>, element: T)
where
    S: Set<T>,
    R: Set<T>,
    T: Clone + Eq + fmt::Debug,
{
    let mut subject: S = from_distinct(initial.iter().cloned());

    subject.add(element.clone());

    assert!(subject.contains(&element), "add postcondition: membership");
    let expected: R = from_distinct(initial.into_iter().chain(std::iter::once(element)));
    assert_equivalent(subject, expected);
}

/// Scenario: construct from `initial`, then `remove(&target)` from the
/// subject.
///
/// Checks the returned element against the requested one and the remaining
/// membership against an expectation constructed directly as `initial`
/// minus `target`.
///
/// # Panics
///
/// Panics if `target` does not occur in `initial`, the removal returns the
/// wrong element, or the mutated subject diverges from the expectation.
pub fn check_remove<S, R, T>(initial: Vec<T>, target: &T)
where
    S: Set<T>,
    R: Set<T>,
    T: Clone + Eq + fmt::Debug,
{
    let mut subject: S = from_distinct(initial.iter().cloned());

    let removed = subject.remove(target);

    assert_eq!(&removed, target, "remove returned the requested element");
    assert!(
        !subject.contains(target),
        "remove postcondition: no longer a member"
    );
    let expected: R = from_distinct(initial.into_iter().filter(|element| element != target));
    assert_equivalent(subject, expected);
}

/// Scenario: construct from `initial`, then `remove_any()` on the subject.
///
/// The choice of element is deliberately unconstrained: the checks are that
/// the returned value was a member, is no longer one, the size dropped by
/// exactly one, and the remainder is exactly `initial` minus the returned
/// element.
///
/// # Panics
///
/// Panics if `initial` is empty or any of the invariant checks fail.
pub fn check_remove_any<S, R, T>(initial: Vec<T>)
where
    S: Set<T>,
    R: Set<T>,
    T: Clone + Eq + fmt::Debug,
{
    let mut subject: S = from_distinct(initial.iter().cloned());
    let size_before = subject.size();

    let removed = subject.remove_any();

    assert!(
        initial.contains(&removed),
        "remove_any returned a previous member"
    );
    assert!(
        !subject.contains(&removed),
        "remove_any postcondition: no longer a member"
    );
    assert_eq!(
        subject.size(),
        size_before - 1,
        "remove_any shrank the set by exactly one"
    );
    let expected: R = from_distinct(initial.into_iter().filter(|element| element != &removed));
    assert_equivalent(subject, expected);
}

/// Scenario: construct from `initial`, then query `contains(&probe)` on
/// both sides.
///
/// The query runs twice on the subject to check idempotence, both answers
/// are compared against `expected`, and the untouched pair is then checked
/// for equivalence to confirm the query mutated nothing observable.
///
/// # Panics
///
/// Panics if any answer disagrees with `expected`, the repeated query
/// changes its answer, or the pair diverges afterwards.
pub fn check_contains<S, R, T>(initial: Vec<T>, probe: &T, expected: bool)
where
    S: Set<T>,
    R: Set<T>,
    T: Clone + fmt::Debug,
{
    let mut pair: SetPair<S, R> = SetPair::from_distinct(initial);

    let first = pair.subject.contains(probe);
    let second = pair.subject.contains(probe);

    assert_eq!(first, second, "contains is a pure query");
    assert_eq!(first, expected, "subject membership answer");
    assert_eq!(pair.reference.contains(probe), expected, "reference membership answer");
    check_equivalent_in_place(&mut pair.subject, &pair.reference)
        .unwrap_or_else(|divergence| panic!("sets diverged after a query: {divergence}"));
}

/// Scenario: construct from `initial`, then query `size()` on both sides.
///
/// # Panics
///
/// Panics if either side disagrees with the sequence length, the repeated
/// query changes its answer, or the pair diverges afterwards.
pub fn check_size<S, R, T>(initial: Vec<T>)
where
    S: Set<T>,
    R: Set<T>,
    T: Clone + fmt::Debug,
{
    let expected = initial.len();
    let pair: SetPair<S, R> = SetPair::from_distinct(initial);

    assert_eq!(pair.subject.size(), expected, "subject cardinality");
    assert_eq!(pair.subject.size(), expected, "size is a pure query");
    assert_eq!(pair.reference.size(), expected, "reference cardinality");
    pair.assert_equivalent();
}
