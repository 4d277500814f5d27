//! Divergence types for the differential harness.
//!
//! This module provides the error values the harness reports when a subject
//! and a reference stop agreeing. Every checking function returns
//! `Result<(), Divergence<T>>`; the asserting wrappers panic with the
//! rendered divergence so a failed scenario reads like a sentence.

use std::fmt;

// =============================================================================
// Divergence
// =============================================================================

/// A single observed disagreement between a subject set and a reference set.
///
/// A divergence is always fatal to the scenario that produced it: the
/// harness never retries, and the subject/reference pair is discarded. The
/// variants cover the four observable surfaces of the contract:
/// cardinality, membership, removal return values, and membership queries.
///
/// # Examples
///
/// ```rust
/// use setkit::harness::Divergence;
///
/// let divergence: Divergence<String> = Divergence::Cardinality { subject: 3, reference: 2 };
/// assert_eq!(
///     format!("{divergence}"),
///     "subject holds 3 elements where the reference holds 2"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Divergence<T> {
    /// The two sets report different cardinalities.
    Cardinality {
        /// Cardinality reported by the subject.
        subject: usize,
        /// Cardinality reported by the reference.
        reference: usize,
    },
    /// The subject holds an element the reference lacks.
    Membership {
        /// The element found in the subject but not in the reference.
        element: T,
    },
    /// A removal handed back a different element than the reference did.
    Removal {
        /// The element the reference returned.
        expected: T,
        /// The element the subject returned.
        actual: T,
    },
    /// A membership query answered differently on the two sets.
    Query {
        /// The probed element.
        element: T,
        /// The subject's answer.
        subject: bool,
        /// The reference's answer.
        reference: bool,
    },
}

impl<T: fmt::Debug> fmt::Display for Divergence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cardinality { subject, reference } => write!(
                formatter,
                "subject holds {subject} elements where the reference holds {reference}"
            ),
            Self::Membership { element } => write!(
                formatter,
                "subject holds {element:?} which the reference lacks"
            ),
            Self::Removal { expected, actual } => write!(
                formatter,
                "removal returned {actual:?} where the reference returned {expected:?}"
            ),
            Self::Query {
                element,
                subject,
                reference,
            } => write!(
                formatter,
                "contains({element:?}) answered {subject} on the subject and {reference} on the reference"
            ),
        }
    }
}

impl<T: fmt::Debug> std::error::Error for Divergence<T> {}

// =============================================================================
// ScriptDivergence
// =============================================================================

/// A [`Divergence`] located at a specific step of a replayed script.
///
/// Produced by [`replay`](crate::harness::replay); the step index is
/// zero-based and counts operations in the script, so the failing operation
/// can be read straight off the script that was fed in.
///
/// # Examples
///
/// ```rust
/// use setkit::harness::{Divergence, ScriptDivergence};
///
/// let divergence: ScriptDivergence<String> = ScriptDivergence {
///     step: 4,
///     divergence: Divergence::Cardinality { subject: 1, reference: 0 },
/// };
/// assert_eq!(
///     format!("{divergence}"),
///     "step 4: subject holds 1 elements where the reference holds 0"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptDivergence<T> {
    /// Zero-based index of the operation that exposed the divergence.
    pub step: usize,
    /// The divergence itself.
    pub divergence: Divergence<T>,
}

impl<T: fmt::Debug> fmt::Display for ScriptDivergence<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "step {}: {}", self.step, self.divergence)
    }
}

impl<T: fmt::Debug> std::error::Error for ScriptDivergence<T> {}
