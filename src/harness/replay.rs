//! Script replay: identical operation sequences over a subject/reference
//! pair.
//!
//! Where the fixture in [`fixture`](super::fixture) checks one focused
//! mutation per scenario, replay drives both sets through an arbitrary
//! sequence of operations and asserts behavioral equivalence after *every*
//! step. Nondeterminism is resolved the standard model-based way: the
//! subject chooses which element `remove_any` yields, and the driver then
//! removes that same element from the reference, so the two stay aligned
//! without constraining the subject's choice.
//!
//! # Script Validity
//!
//! A script must satisfy each operation's precondition at the point it
//! executes. Because `remove_any`'s choice is unknowable in advance, a
//! valid script must not, after a `remove_any`, target a specific element
//! whose continued membership depends on that choice: `Remove` an element
//! that might have been taken, or `Add` one that might still be present.
//! `Contains` and `Size` are always safe, as is adding an element the
//! script never used before. An invalid script is a defect in the driver
//! and panics immediately; it is never attributed to the subject.

use super::equivalence::check_equivalent_in_place;
use super::error::{Divergence, ScriptDivergence};
use crate::contract::Set;

/// Panic message for a script operation issued against the wrong state.
const SCRIPT_PRECONDITION_PANIC_MESSAGE: &str =
    "violation of: the script satisfies every operation precondition";

// =============================================================================
// Operation
// =============================================================================

/// One step of a replayed script, covering the five contract operations.
///
/// # Examples
///
/// ```rust
/// use setkit::harness::{replay, Operation};
/// use setkit::kernel::{HashedSet, SortedSet};
///
/// let script = vec![
///     Operation::Add(1),
///     Operation::Add(2),
///     Operation::Contains(2),
///     Operation::Remove(1),
///     Operation::RemoveAny,
///     Operation::Size,
/// ];
///
/// let outcome = replay::<SortedSet<i32>, HashedSet<i32>, i32>(script);
/// assert!(outcome.is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation<T> {
    /// Add an element that is not currently a member.
    Add(T),
    /// Remove a specific element that is currently a member.
    Remove(T),
    /// Remove an arbitrarily chosen member; the set must be non-empty.
    RemoveAny,
    /// Query membership of an element; always valid.
    Contains(T),
    /// Query cardinality; always valid.
    Size,
}

// =============================================================================
// Replay
// =============================================================================

/// Replays `script` against a freshly constructed subject/reference pair.
///
/// Both sets start empty. Each operation is applied to both sides, return
/// values are cross-checked, and full membership equivalence is re-checked
/// after the step. The first divergence stops the replay.
///
/// # Errors
///
/// Returns a [`ScriptDivergence`] locating the first step at which the
/// subject and reference disagreed.
///
/// # Panics
///
/// Panics if the script violates an operation precondition. That is a
/// defect in the script, not in the subject.
pub fn replay<S, R, T>(script: Vec<Operation<T>>) -> Result<(), ScriptDivergence<T>>
where
    S: Set<T>,
    R: Set<T>,
    T: Clone + Eq,
{
    let mut subject = S::default();
    let mut reference = R::default();

    for (step, operation) in script.into_iter().enumerate() {
        apply(step, operation, &mut subject, &mut reference)?;
        check_equivalent_in_place(&mut subject, &reference)
            .map_err(|divergence| ScriptDivergence { step, divergence })?;
    }

    Ok(())
}

/// Applies one operation to both sides, cross-checking observable results.
fn apply<S, R, T>(
    step: usize,
    operation: Operation<T>,
    subject: &mut S,
    reference: &mut R,
) -> Result<(), ScriptDivergence<T>>
where
    S: Set<T>,
    R: Set<T>,
    T: Clone + Eq,
{
    match operation {
        Operation::Add(element) => {
            assert!(
                !reference.contains(&element),
                "{SCRIPT_PRECONDITION_PANIC_MESSAGE}"
            );
            subject.add(element.clone());
            reference.add(element);
        }
        Operation::Remove(element) => {
            assert!(
                reference.contains(&element),
                "{SCRIPT_PRECONDITION_PANIC_MESSAGE}"
            );
            let actual = subject.remove(&element);
            let expected = reference.remove(&element);
            if actual != expected {
                return Err(ScriptDivergence {
                    step,
                    divergence: Divergence::Removal { expected, actual },
                });
            }
        }
        Operation::RemoveAny => {
            assert!(!reference.is_empty(), "{SCRIPT_PRECONDITION_PANIC_MESSAGE}");
            let removed = subject.remove_any();
            if !reference.contains(&removed) {
                return Err(ScriptDivergence {
                    step,
                    divergence: Divergence::Membership { element: removed },
                });
            }
            reference.remove(&removed);
        }
        Operation::Contains(element) => {
            let subject_answer = subject.contains(&element);
            let reference_answer = reference.contains(&element);
            if subject_answer != reference_answer {
                return Err(ScriptDivergence {
                    step,
                    divergence: Divergence::Query {
                        element,
                        subject: subject_answer,
                        reference: reference_answer,
                    },
                });
            }
        }
        Operation::Size => {
            if subject.size() != reference.size() {
                return Err(ScriptDivergence {
                    step,
                    divergence: Divergence::Cardinality {
                        subject: subject.size(),
                        reference: reference.size(),
                    },
                });
            }
        }
    }

    Ok(())
}
