//! The conformance suite macro.
//!
//! [`conformance_suite!`](crate::conformance_suite) stamps out the full
//! scenario catalog for one `(subject, reference)` pairing. Validating a new
//! kernel takes one invocation and zero harness changes; validating it
//! against several oracles takes one invocation per pairing.

/// Instantiates the set conformance scenario catalog for a
/// `(subject, reference)` type pairing.
///
/// Expands to a module containing one `#[test]` per scenario: construction
/// from empty and populated sequences, checked `add` and `remove`,
/// `remove_any` with its nondeterminism-tolerant checks, membership and
/// cardinality queries with purity re-checks, and a mixed-script replay.
/// Scenarios drive `String` elements, mirroring the catalog's literal
/// sequences.
///
/// Both type arguments must conform to [`Set<String>`](crate::contract::Set);
/// the reference type is the trusted oracle for the pairing.
///
/// # Examples
///
/// ```rust
/// use setkit::conformance_suite;
/// use setkit::kernel::{HashedSet, SortedSet};
///
/// conformance_suite!(
///     sorted_against_hashed,
///     subject = SortedSet<String>,
///     reference = HashedSet<String>,
/// );
/// # fn main() {}
/// ```
#[macro_export]
macro_rules! conformance_suite {
    ($module:ident, subject = $subject:ty, reference = $reference:ty $(,)?) => {
        mod $module {
            use super::*;
            use $crate::harness::{
                check_add, check_constructor, check_contains, check_remove, check_remove_any,
                check_size, replay, Operation,
            };

            fn elements(literals: &[&str]) -> Vec<String> {
                literals.iter().map(|literal| (*literal).to_string()).collect()
            }

            #[test]
            fn constructor_builds_empty_set() {
                check_constructor::<$subject, $reference, _>(elements(&[]));
            }

            #[test]
            fn constructor_builds_populated_set() {
                check_constructor::<$subject, $reference, _>(elements(&["1", "2", "3"]));
            }

            #[test]
            fn add_to_empty_set() {
                check_add::<$subject, $reference, _>(elements(&[]), "1".to_string());
            }

            #[test]
            fn add_to_populated_set() {
                check_add::<$subject, $reference, _>(
                    elements(&["1", "2", "3"]),
                    "4".to_string(),
                );
            }

            #[test]
            fn remove_sole_member() {
                check_remove::<$subject, $reference, _>(elements(&["1"]), &"1".to_string());
            }

            #[test]
            fn remove_from_populated_set() {
                check_remove::<$subject, $reference, _>(
                    elements(&["1", "2", "3"]),
                    &"1".to_string(),
                );
            }

            #[test]
            fn remove_any_sole_member() {
                check_remove_any::<$subject, $reference, _>(elements(&["1"]));
            }

            #[test]
            fn remove_any_from_populated_set() {
                check_remove_any::<$subject, $reference, _>(elements(&["1", "2", "3"]));
            }

            #[test]
            fn contains_reports_present_member() {
                check_contains::<$subject, $reference, _>(
                    elements(&["1", "2", "3"]),
                    &"1".to_string(),
                    true,
                );
            }

            #[test]
            fn contains_reports_absent_element() {
                check_contains::<$subject, $reference, _>(
                    elements(&["1", "2", "3"]),
                    &"4".to_string(),
                    false,
                );
            }

            #[test]
            fn contains_on_empty_set() {
                check_contains::<$subject, $reference, _>(
                    elements(&[]),
                    &"1".to_string(),
                    false,
                );
            }

            #[test]
            fn size_of_empty_set() {
                check_size::<$subject, $reference, _>(elements(&[]));
            }

            #[test]
            fn size_of_populated_set() {
                check_size::<$subject, $reference, _>(elements(&["1", "2", "3"]));
            }

            #[test]
            fn replay_mixed_script() {
                let script = vec![
                    Operation::Add("1".to_string()),
                    Operation::Add("2".to_string()),
                    Operation::Add("3".to_string()),
                    Operation::Contains("2".to_string()),
                    Operation::Remove("1".to_string()),
                    Operation::Size,
                    Operation::RemoveAny,
                    Operation::Add("4".to_string()),
                    Operation::Contains("1".to_string()),
                    Operation::RemoveAny,
                    Operation::RemoveAny,
                    Operation::Size,
                ];

                let outcome = replay::<$subject, $reference, _>(script);
                assert!(outcome.is_ok(), "replay diverged: {:?}", outcome);
            }
        }
    };
}
