//! Differential conformance suites.
//!
//! Each `conformance_suite!` invocation stamps out the full scenario
//! catalog for one `(subject, reference)` pairing. The cross pairings are
//! the interesting ones (two unrelated storage strategies validated
//! against each other in both directions) and the self pairings pin down
//! that each kernel at least agrees with itself.

use setkit::conformance_suite;
use setkit::contract::Set;
use setkit::harness::{SetPair, from_distinct};
use setkit::kernel::{HashedSet, SortedSet};

conformance_suite!(
    sorted_subject_against_hashed_reference,
    subject = SortedSet<String>,
    reference = HashedSet<String>,
);

conformance_suite!(
    hashed_subject_against_sorted_reference,
    subject = HashedSet<String>,
    reference = SortedSet<String>,
);

conformance_suite!(
    hashed_kernel_against_itself,
    subject = HashedSet<String>,
    reference = HashedSet<String>,
);

conformance_suite!(
    sorted_kernel_against_itself,
    subject = SortedSet<String>,
    reference = SortedSet<String>,
);

// =============================================================================
// Fixture precondition enforcement
// =============================================================================

#[test]
#[should_panic(expected = "violation of: every element in the sequence is unique")]
fn from_distinct_rejects_repeated_literal() {
    let _: HashedSet<String> = from_distinct(["1".to_string(), "1".to_string()]);
}

#[test]
#[should_panic(expected = "violation of: every element in the sequence is unique")]
fn set_pair_rejects_repeated_literal() {
    let _: SetPair<SortedSet<i32>, HashedSet<i32>> = SetPair::from_distinct([1, 2, 1]);
}

#[test]
fn from_distinct_accepts_empty_sequence() {
    let set: SortedSet<i32> = from_distinct([]);
    assert!(set.is_empty());
}

#[test]
fn set_pair_builds_both_sides_from_one_sequence() {
    let pair: SetPair<SortedSet<i32>, HashedSet<i32>> = SetPair::from_distinct([1, 2, 3]);

    assert_eq!(pair.subject.size(), 3);
    assert_eq!(pair.reference.size(), 3);
    pair.assert_equivalent();
}
