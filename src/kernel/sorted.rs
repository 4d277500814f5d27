//! Ordered-vector set kernel with inline small-state storage.
//!
//! This module provides [`SortedSet`], a mutable set that keeps small
//! collections inline and promotes to a sorted vector as they grow.
//!
//! # Overview
//!
//! `SortedSet` stores unique elements in one of two representations:
//! - Inline storage (`SmallVec`) for small collections (up to 8 elements),
//!   kept in insertion order and scanned linearly
//! - A strictly sorted `Vec` beyond 8 elements, probed by binary search
//!
//! Growth past the threshold promotes to the sorted representation;
//! shrinking back to the threshold demotes to inline storage. Both
//! transitions preserve membership exactly, and nothing about the contract
//! exposes which representation is active.
//!
//! # Time Complexity
//!
//! | Operation    | Small (n <= 8) | Large (n > 8) |
//! |--------------|----------------|---------------|
//! | `add`        | O(n)           | O(n)          |
//! | `remove`     | O(n)           | O(n)          |
//! | `remove_any` | O(1)           | O(1)          |
//! | `contains`   | O(n)           | O(log n)      |
//! | `size`       | O(1)           | O(1)          |
//!
//! # Examples
//!
//! ```rust
//! use setkit::contract::Set;
//! use setkit::kernel::SortedSet;
//!
//! let mut set = SortedSet::new();
//! for element in [5, 3, 8] {
//!     set.add(element);
//! }
//!
//! assert_eq!(set.size(), 3);
//! assert!(set.contains(&3));
//! assert_eq!(set.remove(&5), 5);
//! assert!(!set.contains(&5));
//! ```

use std::fmt;
use std::mem;

use smallvec::SmallVec;

use crate::contract::{
    ABSENT_MEMBER_PANIC_MESSAGE, DUPLICATE_MEMBER_PANIC_MESSAGE, EMPTY_SET_PANIC_MESSAGE, Set,
};

/// The threshold for transitioning between inline and sorted storage.
/// Collections with more than this many elements use a sorted `Vec`.
const SMALL_THRESHOLD: usize = 8;

// =============================================================================
// Storage Representation
// =============================================================================

/// Backing storage for [`SortedSet`].
///
/// `Small` holds elements inline in insertion order; `Large` holds them in a
/// strictly sorted `Vec`. The strict-sortedness of `Large` is an invariant
/// every mutation maintains.
#[derive(Clone)]
enum Storage<T> {
    Small(SmallVec<[T; SMALL_THRESHOLD]>),
    Large(Vec<T>),
}

impl<T> Storage<T> {
    fn as_slice(&self) -> &[T] {
        match self {
            Self::Small(items) => items,
            Self::Large(items) => items,
        }
    }

    fn len(&self) -> usize {
        match self {
            Self::Small(items) => items.len(),
            Self::Large(items) => items.len(),
        }
    }
}

// =============================================================================
// SortedSet Definition
// =============================================================================

/// A mutable ordered-vector set conforming to the [`Set`] contract.
///
/// `SortedSet` is the crate's default subject kernel: its storage strategy
/// (inline small state, sorted vector large state, representation
/// transitions on growth and shrink) shares nothing with [`HashedSet`],
/// which is exactly what makes the pairing worth testing differentially.
///
/// [`HashedSet`]: crate::kernel::HashedSet
///
/// # Examples
///
/// ```rust
/// use setkit::contract::Set;
/// use setkit::kernel::SortedSet;
///
/// let mut set = SortedSet::new();
/// set.add(42);
/// assert!(set.contains(&42));
/// assert!(!set.contains(&0));
/// ```
#[derive(Clone)]
pub struct SortedSet<T> {
    storage: Storage<T>,
}

impl<T> SortedSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::contract::Set;
    /// use setkit::kernel::SortedSet;
    ///
    /// let set: SortedSet<i32> = SortedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Storage::Small(SmallVec::new()),
        }
    }

    /// Returns an iterator over the elements of the set.
    ///
    /// Iteration order is arbitrary and must not be relied upon; it differs
    /// between the inline and sorted representations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::contract::Set;
    /// use setkit::kernel::SortedSet;
    ///
    /// let mut set = SortedSet::new();
    /// set.add(2);
    /// set.add(1);
    ///
    /// let mut elements: Vec<i32> = set.iter().copied().collect();
    /// elements.sort_unstable();
    /// assert_eq!(elements, vec![1, 2]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> SortedSetIterator<'_, T> {
        SortedSetIterator {
            inner: self.storage.as_slice().iter(),
        }
    }
}

impl<T: Ord> SortedSet<T> {
    /// Promotes inline storage to the sorted representation once it exceeds
    /// the threshold.
    fn promote_if_needed(&mut self) {
        if let Storage::Small(items) = &mut self.storage {
            if items.len() > SMALL_THRESHOLD {
                let mut promoted = mem::take(items).into_vec();
                promoted.sort_unstable();
                self.storage = Storage::Large(promoted);
            }
        }
    }

    /// Demotes sorted storage back to the inline representation once it
    /// shrinks to the threshold.
    fn demote_if_needed(&mut self) {
        if let Storage::Large(items) = &mut self.storage {
            if items.len() <= SMALL_THRESHOLD {
                let demoted = SmallVec::from_vec(mem::take(items));
                self.storage = Storage::Small(demoted);
            }
        }
    }
}

// =============================================================================
// Set Contract Implementation
// =============================================================================

impl<T: Ord> Set<T> for SortedSet<T> {
    fn add(&mut self, element: T) {
        match &mut self.storage {
            Storage::Small(items) => {
                assert!(
                    !items.contains(&element),
                    "{DUPLICATE_MEMBER_PANIC_MESSAGE}"
                );
                items.push(element);
            }
            Storage::Large(items) => match items.binary_search(&element) {
                Ok(_) => panic!("{DUPLICATE_MEMBER_PANIC_MESSAGE}"),
                Err(position) => items.insert(position, element),
            },
        }
        self.promote_if_needed();
    }

    fn remove(&mut self, element: &T) -> T {
        let removed = match &mut self.storage {
            Storage::Small(items) => {
                let position = items
                    .iter()
                    .position(|item| item == element)
                    .expect(ABSENT_MEMBER_PANIC_MESSAGE);
                items.remove(position)
            }
            Storage::Large(items) => match items.binary_search(element) {
                Ok(position) => items.remove(position),
                Err(_) => panic!("{ABSENT_MEMBER_PANIC_MESSAGE}"),
            },
        };
        self.demote_if_needed();
        removed
    }

    fn remove_any(&mut self) -> T {
        let removed = match &mut self.storage {
            Storage::Small(items) => items.pop().expect(EMPTY_SET_PANIC_MESSAGE),
            Storage::Large(items) => items.pop().expect(EMPTY_SET_PANIC_MESSAGE),
        };
        self.demote_if_needed();
        removed
    }

    fn contains(&self, element: &T) -> bool {
        match &self.storage {
            Storage::Small(items) => items.contains(element),
            Storage::Large(items) => items.binary_search(element).is_ok(),
        }
    }

    fn size(&self) -> usize {
        self.storage.len()
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// An iterator over the elements of a [`SortedSet`].
pub struct SortedSetIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for SortedSetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SortedSetIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over the elements of a [`SortedSet`].
pub struct SortedSetIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for SortedSetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for SortedSetIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for SortedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for SortedSet<T> {
    /// Builds a set from an iterator, silently collapsing duplicates.
    ///
    /// Bulk construction is not the checked `add` path: feeding the same
    /// element twice keeps the first occurrence rather than panicking.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for SortedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            if !self.contains(&element) {
                self.add(element);
            }
        }
    }
}

impl<T> IntoIterator for SortedSet<T> {
    type Item = T;
    type IntoIter = SortedSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        let items = match self.storage {
            Storage::Small(items) => items.into_vec(),
            Storage::Large(items) => items,
        };
        SortedSetIntoIterator {
            inner: items.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SortedSet<T> {
    type Item = &'a T;
    type IntoIter = SortedSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> PartialEq for SortedSet<T> {
    /// Membership equality, independent of the active representation and of
    /// insertion order.
    fn eq(&self, other: &Self) -> bool {
        if self.storage.len() != other.storage.len() {
            return false;
        }

        self.iter().all(|element| other.contains(element))
    }
}

impl<T: Ord> Eq for SortedSet<T> {}

impl<T: fmt::Debug> fmt::Debug for SortedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SortedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self.iter() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Contract Pinning
// =============================================================================

static_assertions::assert_impl_all!(SortedSet<i32>: Set<i32>, Default, Clone, PartialEq, Eq);
static_assertions::assert_impl_all!(SortedSet<String>: Set<String>, Default, Clone, PartialEq, Eq);
