//! Injectable equality relations used by the matching engine.
//!
//! The engine never compares values directly: every containment check takes a
//! strategy implementing [`Equivalence`], so the same reconciliation
//! algorithms work for intrinsic equality, case-insensitive comparison,
//! structural XML equality, or anything else a caller injects.

/// An injectable equality relation between two values.
///
/// Implementations must be stateless and side-effect-free so that concurrent
/// assertions can share a single instance, and the relation must be reflexive
/// and symmetric. Transitivity is not enforced, but a non-transitive relation
/// makes the engine's choice of which duplicate gets matched unspecified;
/// `missing`/`unexpected` contents may then vary between equivalent inputs.
pub trait Equivalence<T> {
    /// Whether `a` and `b` are considered equal under this relation.
    ///
    /// Must be total: values of incomparable shapes are simply not equal.
    fn equal(&self, a: &T, b: &T) -> bool;

    /// Number of occurrences of `value` in `seq` under this relation.
    fn count_occurrences(&self, seq: &[T], value: &T) -> usize {
        seq.iter().filter(|element| self.equal(*element, value)).count()
    }

    /// Index of the first element of `seq` at or after `from` that is equal
    /// to `value`, or `None` if no such element exists.
    fn index_of_first_match(&self, seq: &[T], value: &T, from: usize) -> Option<usize> {
        (from..seq.len()).find(|&index| self.equal(&seq[index], value))
    }
}

/// Intrinsic value equality (`==`).
///
/// # Example
///
/// ```rust
/// use xassert::{DefaultEquivalence, Equivalence};
///
/// let strategy = DefaultEquivalence;
/// assert!(strategy.equal(&1, &1));
/// assert_eq!(strategy.count_occurrences(&[1, 2, 1], &1), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultEquivalence;

impl<T: PartialEq> Equivalence<T> for DefaultEquivalence {
    fn equal(&self, a: &T, b: &T) -> bool {
        a == b
    }
}
