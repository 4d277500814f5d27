//! Structural equivalence over the contract capability set.
//!
//! Two sets are equivalent iff they contain exactly the same elements,
//! irrespective of internal order or representation: same cardinality and
//! mutual containment. The checks here are deliberately computed using
//! nothing beyond the five contract operations (no iteration, no `Eq`
//! between the two container types), so any pair of conforming kernels can
//! be compared, whatever their internals.
//!
//! The drain works because both collections are duplicate-free: equal
//! cardinality plus one-sided containment already implies mutual
//! containment, so draining the subject and probing each drained element
//! against the reference decides equivalence completely.

use std::fmt;

use super::error::Divergence;
use crate::contract::Set;

/// Checks that `subject` and `reference` have identical membership,
/// restoring the subject's membership before returning.
///
/// The subject is drained with `remove_any`, each drained element is probed
/// against the reference, and the drained elements are then added back. On
/// success the subject's membership is exactly what it was; on failure the
/// scenario is dead anyway and the offending element travels inside the
/// divergence instead of being restored.
///
/// # Errors
///
/// Returns [`Divergence::Cardinality`] if the sets disagree on size, or
/// [`Divergence::Membership`] naming an element the subject holds and the
/// reference lacks.
///
/// # Examples
///
/// ```rust
/// use setkit::harness::check_equivalent_in_place;
/// use setkit::kernel::{HashedSet, SortedSet};
/// use setkit::prelude::*;
///
/// let mut subject: SortedSet<i32> = [1, 2, 3].into_iter().collect();
/// let reference: HashedSet<i32> = [3, 2, 1].into_iter().collect();
///
/// assert!(check_equivalent_in_place(&mut subject, &reference).is_ok());
/// assert_eq!(subject.size(), 3); // membership restored
/// ```
pub fn check_equivalent_in_place<S, R, T>(
    subject: &mut S,
    reference: &R,
) -> Result<(), Divergence<T>>
where
    S: Set<T>,
    R: Set<T>,
{
    if subject.size() != reference.size() {
        return Err(Divergence::Cardinality {
            subject: subject.size(),
            reference: reference.size(),
        });
    }

    let mut drained = Vec::with_capacity(subject.size());
    while !subject.is_empty() {
        drained.push(subject.remove_any());
    }

    let stray = drained
        .iter()
        .position(|element| !reference.contains(element));

    match stray {
        Some(position) => {
            let element = drained.swap_remove(position);
            for element in drained {
                subject.add(element);
            }
            Err(Divergence::Membership { element })
        }
        None => {
            for element in drained {
                subject.add(element);
            }
            Ok(())
        }
    }
}

/// Checks that `subject` and `reference` have identical membership,
/// consuming both.
///
/// This is the scenario-final form of [`check_equivalent_in_place`]: the
/// pair is owned by the scenario and discarded either way.
///
/// # Errors
///
/// Returns the same divergences as [`check_equivalent_in_place`].
///
/// # Examples
///
/// ```rust
/// use setkit::harness::check_equivalent;
/// use setkit::harness::Divergence;
/// use setkit::kernel::{HashedSet, SortedSet};
///
/// let subject: SortedSet<i32> = [1, 2].into_iter().collect();
/// let reference: HashedSet<i32> = [1].into_iter().collect();
///
/// assert_eq!(
///     check_equivalent(subject, reference),
///     Err(Divergence::Cardinality { subject: 2, reference: 1 })
/// );
/// ```
pub fn check_equivalent<S, R, T>(mut subject: S, reference: R) -> Result<(), Divergence<T>>
where
    S: Set<T>,
    R: Set<T>,
{
    check_equivalent_in_place(&mut subject, &reference)
}

/// Asserts that `subject` and `reference` have identical membership.
///
/// # Panics
///
/// Panics with the rendered divergence if the two sets differ.
///
/// # Examples
///
/// ```rust
/// use setkit::harness::assert_equivalent;
/// use setkit::kernel::{HashedSet, SortedSet};
///
/// let subject: SortedSet<&str> = ["a", "b"].into_iter().collect();
/// let reference: HashedSet<&str> = ["b", "a"].into_iter().collect();
///
/// assert_equivalent(subject, reference);
/// ```
pub fn assert_equivalent<S, R, T>(subject: S, reference: R)
where
    S: Set<T>,
    R: Set<T>,
    T: fmt::Debug,
{
    if let Err(divergence) = check_equivalent(subject, reference) {
        panic!("sets diverged: {divergence}");
    }
}
