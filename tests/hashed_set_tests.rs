//! Unit tests for HashedSet.
//!
//! The same behavior holds under the default hasher and the `fxhash`
//! feature; nothing here depends on hash order.

use rstest::rstest;
use setkit::contract::Set;
use setkit::kernel::HashedSet;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_set() {
    let set: HashedSet<i32> = HashedSet::new();
    assert!(set.is_empty());
    assert_eq!(set.size(), 0);
}

#[rstest]
fn test_default_creates_empty_set() {
    let set: HashedSet<i32> = HashedSet::default();
    assert!(set.is_empty());
}

// =============================================================================
// Add and contains
// =============================================================================

#[rstest]
fn test_add_single_element() {
    let mut set = HashedSet::new();
    set.add(42);

    assert_eq!(set.size(), 1);
    assert!(set.contains(&42));
}

#[rstest]
fn test_add_multiple_elements() {
    let mut set = HashedSet::new();
    set.add(1);
    set.add(2);
    set.add(3);

    assert_eq!(set.size(), 3);
    assert!(set.contains(&1));
    assert!(set.contains(&2));
    assert!(set.contains(&3));
    assert!(!set.contains(&4));
}

#[rstest]
#[should_panic(expected = "violation of: element is not already a member")]
fn test_add_duplicate_panics() {
    let mut set = HashedSet::new();
    set.add("once".to_string());
    set.add("once".to_string());
}

// =============================================================================
// Remove
// =============================================================================

#[rstest]
fn test_remove_returns_the_stored_element() {
    let mut set = HashedSet::new();
    set.add("a".to_string());
    set.add("b".to_string());

    let removed = set.remove(&"a".to_string());

    assert_eq!(removed, "a");
    assert_eq!(set.size(), 1);
    assert!(!set.contains(&"a".to_string()));
}

#[rstest]
#[should_panic(expected = "violation of: element is a member")]
fn test_remove_absent_element_panics() {
    let mut set = HashedSet::new();
    set.add(1);
    set.remove(&2);
}

#[rstest]
fn test_remove_all_elements_leaves_empty_set() {
    let mut set = HashedSet::new();
    set.add(42);

    set.remove(&42);

    assert!(set.is_empty());
}

// =============================================================================
// Remove any
// =============================================================================

#[rstest]
fn test_remove_any_returns_a_member_and_shrinks() {
    let mut set = HashedSet::new();
    for element in 1..=5 {
        set.add(element);
    }

    let removed = set.remove_any();

    assert!((1..=5).contains(&removed));
    assert!(!set.contains(&removed));
    assert_eq!(set.size(), 4);
}

#[rstest]
fn test_remove_any_drains_to_empty() {
    let mut set = HashedSet::new();
    for element in 1..=10 {
        set.add(element);
    }

    let mut drained = Vec::new();
    while !set.is_empty() {
        drained.push(set.remove_any());
    }

    drained.sort_unstable();
    assert_eq!(drained, (1..=10).collect::<Vec<i32>>());
}

#[rstest]
#[should_panic(expected = "violation of: the set is not empty")]
fn test_remove_any_on_empty_set_panics() {
    let mut set: HashedSet<i32> = HashedSet::new();
    set.remove_any();
}

// =============================================================================
// Scale
// =============================================================================

#[rstest]
fn test_large_scale_add_and_probe() {
    const COUNT: i32 = 10_000;

    let mut set = HashedSet::new();
    for element in 0..COUNT {
        set.add(element);
    }

    assert_eq!(set.size(), COUNT as usize);
    for element in 0..COUNT {
        assert!(set.contains(&element), "failed to find {element}");
    }
    for element in COUNT..(COUNT + 100) {
        assert!(!set.contains(&element), "{element} should not be a member");
    }
}

// =============================================================================
// Equality
// =============================================================================

#[rstest]
fn test_equality_ignores_insertion_order() {
    let mut forward = HashedSet::new();
    let mut backward = HashedSet::new();
    for element in 1..=5 {
        forward.add(element);
    }
    for element in (1..=5).rev() {
        backward.add(element);
    }

    assert_eq!(forward, backward);
}

#[rstest]
fn test_equality_detects_differing_membership() {
    let left: HashedSet<i32> = [1, 2, 3].into_iter().collect();
    let right: HashedSet<i32> = [1, 2, 4].into_iter().collect();

    assert_ne!(left, right);
}

#[rstest]
fn test_clone_is_independent() {
    let mut original = HashedSet::new();
    original.add(1);
    original.add(2);

    let mut cloned = original.clone();
    cloned.remove(&1);

    assert!(original.contains(&1));
    assert_eq!(original.size(), 2);
    assert_eq!(cloned.size(), 1);
}

// =============================================================================
// Standard trait integration
// =============================================================================

#[rstest]
fn test_from_iterator_collapses_duplicates() {
    let set: HashedSet<i32> = [1, 2, 2, 3, 1].into_iter().collect();

    assert_eq!(set.size(), 3);
}

#[rstest]
fn test_extend_skips_present_elements() {
    let mut set: HashedSet<i32> = [1, 2].into_iter().collect();
    set.extend([2, 3, 4]);

    assert_eq!(set.size(), 4);
}

#[rstest]
fn test_into_iterator_yields_all_members() {
    let set: HashedSet<i32> = [3, 1, 2].into_iter().collect();

    let mut elements: Vec<i32> = set.into_iter().collect();
    elements.sort_unstable();
    assert_eq!(elements, vec![1, 2, 3]);
}

#[rstest]
fn test_debug_formatting_of_empty_set() {
    let set: HashedSet<i32> = HashedSet::new();
    assert_eq!(format!("{set:?}"), "{}");
}

#[rstest]
fn test_display_formatting_of_singleton() {
    let mut set = HashedSet::new();
    set.add(7);
    assert_eq!(format!("{set}"), "{7}");
}
