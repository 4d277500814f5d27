//! Property-based tests for the set contract.
//!
//! These laws hold for every conforming kernel, so each one is written
//! once as a generic checker and instantiated per kernel (and, for the
//! replay law, per kernel pairing).

use std::collections::BTreeSet;

use proptest::prelude::*;
use setkit::contract::Set;
use setkit::harness::{Operation, assert_equivalent, from_distinct, replay};
use setkit::kernel::{HashedSet, SortedSet};

// =============================================================================
// Generic law checkers
// =============================================================================

/// A set built by sequential `add` over distinct elements holds exactly
/// those elements, regardless of add order.
fn construction_matches_membership<S: Set<i32>>(elements: &[i32]) {
    let set: S = from_distinct(elements.iter().copied());

    assert_eq!(set.size(), elements.len());
    for element in elements {
        assert!(set.contains(element));
    }
}

fn add_then_contains<S: Set<i32>>(elements: &[i32], fresh: i32) {
    let mut set: S = from_distinct(elements.iter().copied());

    set.add(fresh);

    assert!(set.contains(&fresh));
    assert_eq!(set.size(), elements.len() + 1);
}

fn remove_then_not_contains<S: Set<i32>>(elements: &[i32], target: i32) {
    let mut set: S = from_distinct(elements.iter().copied());

    let removed = set.remove(&target);

    assert_eq!(removed, target);
    assert!(!set.contains(&target));
    assert_eq!(set.size(), elements.len() - 1);
}

/// `remove_any` yields a previous member and leaves exactly the original
/// membership minus the returned element.
fn remove_any_shrinks_by_one<S: Set<i32>>(elements: &[i32]) {
    let mut set: S = from_distinct(elements.iter().copied());

    let removed = set.remove_any();

    assert!(elements.contains(&removed));
    assert!(!set.contains(&removed));
    assert_eq!(set.size(), elements.len() - 1);
    for element in elements {
        if element != &removed {
            assert!(set.contains(element));
        }
    }
}

fn queries_are_idempotent<S: Set<i32>>(elements: &[i32], probe: i32) {
    let set: S = from_distinct(elements.iter().copied());

    let first_answer = set.contains(&probe);
    let second_answer = set.contains(&probe);
    let first_size = set.size();
    let second_size = set.size();

    assert_eq!(first_answer, second_answer);
    assert_eq!(first_size, second_size);
    assert_eq!(first_answer, elements.contains(&probe));
    assert_eq!(first_size, elements.len());
}

// =============================================================================
// Script synthesis for the replay law
// =============================================================================

/// Turns an arbitrary plan into a script that satisfies every operation
/// precondition.
///
/// Membership is tracked exactly until the first `RemoveAny`; after that
/// only the cardinality stays exact, so targeted removals are disabled and
/// additions are restricted to values the script never used (which are
/// therefore absent no matter which members `remove_any` took).
fn script_from_plan(plan: &[(u8, i16)]) -> Vec<Operation<i32>> {
    let mut script = Vec::with_capacity(plan.len());
    let mut present: BTreeSet<i32> = BTreeSet::new();
    let mut ever_added: BTreeSet<i32> = BTreeSet::new();
    let mut cardinality = 0_usize;
    let mut any_removed = false;

    for &(kind, raw) in plan {
        let value = i32::from(raw);
        match kind % 5 {
            0 => {
                let valid = if any_removed {
                    !ever_added.contains(&value)
                } else {
                    !present.contains(&value)
                };
                if valid {
                    present.insert(value);
                    ever_added.insert(value);
                    cardinality += 1;
                    script.push(Operation::Add(value));
                }
            }
            1 => {
                if !any_removed && !present.is_empty() {
                    let offset = value.unsigned_abs() as usize % present.len();
                    let target = *present.iter().nth(offset).unwrap();
                    present.remove(&target);
                    cardinality -= 1;
                    script.push(Operation::Remove(target));
                }
            }
            2 => {
                if cardinality > 0 {
                    any_removed = true;
                    cardinality -= 1;
                    script.push(Operation::RemoveAny);
                }
            }
            3 => script.push(Operation::Contains(value)),
            _ => script.push(Operation::Size),
        }
    }

    script
}

// =============================================================================
// Construction Law
// =============================================================================

proptest! {
    #[test]
    fn prop_construction_matches_membership(
        elements in prop::collection::hash_set(any::<i32>(), 0..50)
    ) {
        let elements: Vec<i32> = elements.into_iter().collect();
        construction_matches_membership::<SortedSet<i32>>(&elements);
        construction_matches_membership::<HashedSet<i32>>(&elements);
    }
}

// =============================================================================
// Order-Independence Law
// =============================================================================

proptest! {
    #[test]
    fn prop_add_order_is_irrelevant(
        ordered in prop::collection::btree_set(any::<i32>(), 0..40),
        seed in any::<u64>()
    ) {
        let forward: Vec<i32> = ordered.into_iter().collect();
        let mut shuffled = forward.clone();
        // Deterministic Fisher-Yates driven by the generated seed.
        let mut state = seed | 1;
        for index in (1..shuffled.len()).rev() {
            state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            let swap_with = (state >> 33) as usize % (index + 1);
            shuffled.swap(index, swap_with);
        }

        let built_forward: SortedSet<i32> = from_distinct(forward.iter().copied());
        let built_shuffled: SortedSet<i32> = from_distinct(shuffled.iter().copied());
        assert_equivalent(built_forward, built_shuffled);

        let built_forward: HashedSet<i32> = from_distinct(forward.iter().copied());
        let built_shuffled: HashedSet<i32> = from_distinct(shuffled);
        assert_equivalent(built_forward, built_shuffled);
    }
}

// =============================================================================
// Add-Contains Law
// =============================================================================

proptest! {
    #[test]
    fn prop_add_then_contains(
        elements in prop::collection::hash_set(any::<i32>(), 0..50),
        fresh in any::<i32>()
    ) {
        prop_assume!(!elements.contains(&fresh));
        let elements: Vec<i32> = elements.into_iter().collect();

        add_then_contains::<SortedSet<i32>>(&elements, fresh);
        add_then_contains::<HashedSet<i32>>(&elements, fresh);
    }
}

// =============================================================================
// Remove-Contains Law
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_then_not_contains(
        elements in prop::collection::hash_set(any::<i32>(), 1..50),
        selector in any::<prop::sample::Index>()
    ) {
        let elements: Vec<i32> = elements.into_iter().collect();
        let target = elements[selector.index(elements.len())];

        remove_then_not_contains::<SortedSet<i32>>(&elements, target);
        remove_then_not_contains::<HashedSet<i32>>(&elements, target);
    }
}

// =============================================================================
// Remove-Any Law
// =============================================================================

proptest! {
    #[test]
    fn prop_remove_any_shrinks_by_exactly_one(
        elements in prop::collection::hash_set(any::<i32>(), 1..50)
    ) {
        let elements: Vec<i32> = elements.into_iter().collect();

        remove_any_shrinks_by_one::<SortedSet<i32>>(&elements);
        remove_any_shrinks_by_one::<HashedSet<i32>>(&elements);
    }
}

// =============================================================================
// Query Idempotence Law
// =============================================================================

proptest! {
    #[test]
    fn prop_queries_are_idempotent(
        elements in prop::collection::hash_set(any::<i32>(), 0..50),
        probe in any::<i32>()
    ) {
        let elements: Vec<i32> = elements.into_iter().collect();

        queries_are_idempotent::<SortedSet<i32>>(&elements, probe);
        queries_are_idempotent::<HashedSet<i32>>(&elements, probe);
    }
}

// =============================================================================
// Replay Closure Law
// =============================================================================

proptest! {
    #[test]
    fn prop_replay_any_valid_script_converges(
        plan in prop::collection::vec((any::<u8>(), any::<i16>()), 0..80)
    ) {
        let script = script_from_plan(&plan);

        prop_assert!(replay::<SortedSet<i32>, HashedSet<i32>, _>(script.clone()).is_ok());
        prop_assert!(replay::<HashedSet<i32>, SortedSet<i32>, _>(script).is_ok());
    }
}
