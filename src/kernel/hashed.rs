//! Hash-backed set kernel.
//!
//! This module provides [`HashedSet`], a mutable hash set that serves as the
//! trusted reference realization of the [`Set`] contract.
//!
//! # Overview
//!
//! `HashedSet` is a thin wrapper around `HashMap<T, ()>`. Storing unit
//! values rather than wrapping `HashSet` directly keeps `remove_entry`
//! available, which hands back the *stored* key, so the contract's
//! identity-preserving `remove` falls out for free.
//!
//! - O(1) expected `contains`
//! - O(1) expected `add`
//! - O(1) expected `remove`
//! - O(1) `size` and `is_empty`
//!
//! With the `fxhash` feature enabled the map is keyed by the `rustc-hash`
//! hasher; behavior is identical under either hasher, only hashing speed
//! differs.
//!
//! # Examples
//!
//! ```rust
//! use setkit::contract::Set;
//! use setkit::kernel::HashedSet;
//!
//! let mut set = HashedSet::new();
//! set.add(1);
//! set.add(2);
//! set.add(3);
//!
//! assert!(set.contains(&1));
//! assert!(!set.contains(&4));
//!
//! let removed = set.remove(&2);
//! assert_eq!(removed, 2);
//! assert_eq!(set.size(), 2);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use super::HashBuilder;
use crate::contract::{
    ABSENT_MEMBER_PANIC_MESSAGE, DUPLICATE_MEMBER_PANIC_MESSAGE, EMPTY_SET_PANIC_MESSAGE, Set,
};

// =============================================================================
// HashedSet Definition
// =============================================================================

/// A mutable hash set conforming to the [`Set`] contract.
///
/// `HashedSet` is the crate's trusted reference kernel: the differential
/// harness defaults to it as the oracle that subjects are compared against,
/// though nothing prevents pairing it as the subject instead.
///
/// # Time Complexity
///
/// | Operation    | Complexity      |
/// |--------------|-----------------|
/// | `new`        | O(1)            |
/// | `contains`   | O(1) expected   |
/// | `add`        | O(1) expected   |
/// | `remove`     | O(1) expected   |
/// | `remove_any` | O(capacity / n) |
/// | `size`       | O(1)            |
///
/// # Examples
///
/// ```rust
/// use setkit::contract::Set;
/// use setkit::kernel::HashedSet;
///
/// let mut set = HashedSet::new();
/// set.add(42);
/// assert!(set.contains(&42));
/// assert!(!set.contains(&0));
/// ```
#[derive(Clone)]
pub struct HashedSet<T> {
    inner: HashMap<T, (), HashBuilder>,
}

impl<T> HashedSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::contract::Set;
    /// use setkit::kernel::HashedSet;
    ///
    /// let set: HashedSet<i32> = HashedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: HashMap::default(),
        }
    }

    /// Returns an iterator over the elements of the set.
    ///
    /// Iteration order is arbitrary and must not be relied upon.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::contract::Set;
    /// use setkit::kernel::HashedSet;
    ///
    /// let mut set = HashedSet::new();
    /// set.add(1);
    /// set.add(2);
    ///
    /// let mut elements: Vec<i32> = set.iter().copied().collect();
    /// elements.sort_unstable();
    /// assert_eq!(elements, vec![1, 2]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> HashedSetIterator<'_, T> {
        HashedSetIterator {
            inner: self.inner.keys(),
        }
    }
}

// =============================================================================
// Set Contract Implementation
// =============================================================================

impl<T: Clone + Hash + Eq> Set<T> for HashedSet<T> {
    fn add(&mut self, element: T) {
        let previous = self.inner.insert(element, ());
        assert!(previous.is_none(), "{DUPLICATE_MEMBER_PANIC_MESSAGE}");
    }

    fn remove(&mut self, element: &T) -> T {
        let (stored, ()) = self
            .inner
            .remove_entry(element)
            .expect(ABSENT_MEMBER_PANIC_MESSAGE);
        stored
    }

    fn remove_any(&mut self) -> T {
        // Whichever member the map yields first; the clone is only a probe,
        // the stored element is what gets returned.
        let probe = self
            .inner
            .keys()
            .next()
            .cloned()
            .expect(EMPTY_SET_PANIC_MESSAGE);
        let (stored, ()) = self
            .inner
            .remove_entry(&probe)
            .expect("probe was sampled from the map");
        stored
    }

    fn contains(&self, element: &T) -> bool {
        self.inner.contains_key(element)
    }

    fn size(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// An iterator over the elements of a [`HashedSet`].
pub struct HashedSetIterator<'a, T> {
    inner: std::collections::hash_map::Keys<'a, T, ()>,
}

impl<'a, T> Iterator for HashedSetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for HashedSetIterator<'_, T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over the elements of a [`HashedSet`].
pub struct HashedSetIntoIterator<T> {
    inner: std::collections::hash_map::IntoKeys<T, ()>,
}

impl<T> Iterator for HashedSetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for HashedSetIntoIterator<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for HashedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> FromIterator<T> for HashedSet<T> {
    /// Builds a set from an iterator, silently collapsing duplicates.
    ///
    /// Bulk construction is not the checked `add` path: feeding the same
    /// element twice keeps the first occurrence rather than panicking.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut inner: HashMap<T, (), HashBuilder> = HashMap::default();
        for element in iter {
            inner.entry(element).or_insert(());
        }
        Self { inner }
    }
}

impl<T: Hash + Eq> Extend<T> for HashedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.inner.entry(element).or_insert(());
        }
    }
}

impl<T> IntoIterator for HashedSet<T> {
    type Item = T;
    type IntoIter = HashedSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        HashedSetIntoIterator {
            inner: self.inner.into_keys(),
        }
    }
}

impl<'a, T> IntoIterator for &'a HashedSet<T> {
    type Item = &'a T;
    type IntoIter = HashedSetIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq> PartialEq for HashedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.inner.len() != other.inner.len() {
            return false;
        }

        self.iter().all(|element| other.inner.contains_key(element))
    }
}

impl<T: Hash + Eq> Eq for HashedSet<T> {}

impl<T: fmt::Debug> fmt::Debug for HashedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for HashedSet<T> {
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

static_assertions::assert_impl_all!(HashedSet<i32>: Set<i32>, Default, Clone, PartialEq, Eq);
static_assertions::assert_impl_all!(HashedSet<String>: Set<String>, Default, Clone, PartialEq, Eq);
