//! The [`Set`] trait, the contract every kernel satisfies.

// =============================================================================
// Precondition Panic Messages
// =============================================================================

/// Panic message for `add` called with an element that is already a member.
pub(crate) const DUPLICATE_MEMBER_PANIC_MESSAGE: &str =
    "violation of: element is not already a member of the set";

/// Panic message for `remove` called with an element that is not a member.
pub(crate) const ABSENT_MEMBER_PANIC_MESSAGE: &str =
    "violation of: element is a member of the set";

/// Panic message for `remove_any` called on an empty set.
pub(crate) const EMPTY_SET_PANIC_MESSAGE: &str = "violation of: the set is not empty";

// =============================================================================
// Set Contract
// =============================================================================

/// An unordered collection of unique elements.
///
/// `Set<T>` models a mathematical set: membership only, with no ordering
/// and no multiplicity. The contract consists of five operations plus a
/// constructor, expressed as a [`Default`] supertrait bound so that generic
/// code can conjure an empty instance of any kernel.
///
/// Implementations are free to choose any storage strategy and any time
/// complexity; nothing in this crate depends on `remove` or `remove_any`
/// running in better than linear time.
///
/// # Preconditions
///
/// `add`, `remove`, and `remove_any` each carry a precondition. A call that
/// violates one is a contract violation by the caller, and conforming
/// implementations panic immediately with a message naming the violated
/// precondition. See the per-method documentation.
///
/// # Examples
///
/// Generic code written against the contract works with every kernel:
///
/// ```rust
/// use setkit::contract::Set;
/// use setkit::kernel::{HashedSet, SortedSet};
///
/// fn drain_count<T, S: Set<T>>(mut set: S) -> usize {
///     let mut drained = 0;
///     while !set.is_empty() {
///         set.remove_any();
///         drained += 1;
///     }
///     drained
/// }
///
/// let mut hashed: HashedSet<i32> = HashedSet::new();
/// let mut sorted: SortedSet<i32> = SortedSet::new();
/// for element in [10, 20, 30] {
///     hashed.add(element);
///     sorted.add(element);
/// }
///
/// assert_eq!(drain_count(hashed), 3);
/// assert_eq!(drain_count(sorted), 3);
/// ```
pub trait Set<T>: Default {
    /// Adds `element` to the set.
    ///
    /// Increases the cardinality by exactly one.
    ///
    /// # Panics
    ///
    /// Panics if `element` is already a member (precondition: the element
    /// is not already a member).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::contract::Set;
    /// use setkit::kernel::SortedSet;
    ///
    /// let mut set = SortedSet::new();
    /// set.add(7);
    /// assert!(set.contains(&7));
    /// ```
    fn add(&mut self, element: T);

    /// Removes `element` from the set and returns the stored value.
    ///
    /// The *stored* element is returned, not the probe: for element types
    /// where equality is coarser than identity, the value handed back is the
    /// one the set was holding. Decreases the cardinality by exactly one.
    ///
    /// # Panics
    ///
    /// Panics if `element` is not a member (precondition: the element is a
    /// member).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::contract::Set;
    /// use setkit::kernel::SortedSet;
    ///
    /// let mut set = SortedSet::new();
    /// set.add("a".to_string());
    /// assert_eq!(set.remove(&"a".to_string()), "a");
    /// assert!(set.is_empty());
    /// ```
    fn remove(&mut self, element: &T) -> T;

    /// Removes and returns an arbitrarily chosen member.
    ///
    /// Which member is chosen is implementation-defined and callers must
    /// not assume any particular element, only that the returned value was
    /// a member before the call and is not one after it. Decreases the
    /// cardinality by exactly one.
    ///
    /// # Panics
    ///
    /// Panics if the set is empty (precondition: the set is not empty).
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
    /// let removed = set.remove_any();
    /// assert!(!set.contains(&removed));
    /// assert_eq!(set.size(), 1);
    /// ```
    fn remove_any(&mut self) -> T;

    /// Returns `true` if `element` is a member.
    ///
    /// Pure query: never mutates the set, and consecutive calls return the
    /// same answer.
    #[must_use]
    fn contains(&self, element: &T) -> bool;

    /// Returns the current cardinality.
    ///
    /// Pure query: never mutates the set, and consecutive calls return the
    /// same answer.
    #[must_use]
    fn size(&self) -> usize;

    /// Returns `true` if the set contains no elements.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
