//! Multiset reconciliation and order-sensitive diffing between two sequences.
//!
//! All checks are pure functions over `(actual, expected, strategy)` and
//! report their outcome as a [`MatchResult`]; a mismatch is a result, never a
//! panic or an error. Duplicates are significant throughout: each occurrence
//! of an expected element must be matched by a *distinct* occurrence in the
//! actual sequence.

use crate::equivalence::Equivalence;

/// First index at which two equal-multiset sequences differ in position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divergence<T> {
    /// Smallest index where the sequences disagree.
    pub index: usize,
    /// Element found in the actual sequence at that index.
    pub actual: T,
    /// Element expected at that index.
    pub expected: T,
}

/// Outcome of a containment check.
///
/// The sequences match under the requested mode exactly when `missing` and
/// `unexpected` are empty and no `divergence` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<T> {
    /// Expected occurrences with no distinct match in the actual sequence.
    pub missing: Vec<T>,
    /// Actual occurrences not required by the expected sequence.
    pub unexpected: Vec<T>,
    /// Set only by [`contains_exactly`], and only when the multisets agree
    /// but the arrangement differs.
    pub divergence: Option<Divergence<T>>,
}

impl<T> MatchResult<T> {
    /// Whether the check passed.
    pub fn is_match(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty() && self.divergence.is_none()
    }

    fn matched() -> Self {
        MatchResult {
            missing: Vec::new(),
            unexpected: Vec::new(),
            divergence: None,
        }
    }
}

/// Occurrence-based subset check: every element of `expected` must have a
/// distinct matching occurrence in `actual` under `strategy`.
///
/// Elements of `actual` not required by `expected` are irrelevant; only
/// `missing` is ever populated.
pub fn contains_all<T, S>(actual: &[T], expected: &[T], strategy: &S) -> MatchResult<T>
where
    T: Clone,
    S: Equivalence<T>,
{
    let (missing, _) = reconcile(actual, expected, strategy);
    MatchResult {
        missing,
        unexpected: Vec::new(),
        divergence: None,
    }
}

/// Symmetric multiset check: the sequences must reconcile occurrence-for-
/// occurrence in both directions, order ignored.
///
/// Leftover expected occurrences go to `missing`, leftover actual occurrences
/// to `unexpected`. An element appearing twice in `actual` but once in
/// `expected` yields one `unexpected` entry.
pub fn contains_only<T, S>(actual: &[T], expected: &[T], strategy: &S) -> MatchResult<T>
where
    T: Clone,
    S: Equivalence<T>,
{
    let (missing, consumed) = reconcile(actual, expected, strategy);
    let unexpected = actual
        .iter()
        .zip(&consumed)
        .filter(|(_, &taken)| !taken)
        .map(|(element, _)| element.clone())
        .collect();
    MatchResult {
        missing,
        unexpected,
        divergence: None,
    }
}

/// Same elements in the same order, duplicates and count included.
///
/// Runs in two phases. Phase one is the symmetric reconciliation of
/// [`contains_only`]; any leftover fails immediately as a *set* mismatch,
/// with no divergence reported. Phase two, reached only when the multisets
/// agree, walks both sequences index-by-index and reports the first index
/// where they disagree as an *order* mismatch. The two failure shapes are
/// deliberately distinct: "wrong elements" and "right elements, wrong
/// arrangement" call for different fixes.
pub fn contains_exactly<T, S>(actual: &[T], expected: &[T], strategy: &S) -> MatchResult<T>
where
    T: Clone,
    S: Equivalence<T>,
{
    let sets = contains_only(actual, expected, strategy);
    if !sets.is_match() {
        return sets;
    }
    // Equal multisets, so equal lengths; the walk covers both sequences.
    for (index, (a, e)) in actual.iter().zip(expected).enumerate() {
        if !strategy.equal(a, e) {
            return MatchResult {
                missing: Vec::new(),
                unexpected: Vec::new(),
                divergence: Some(Divergence {
                    index,
                    actual: a.clone(),
                    expected: e.clone(),
                }),
            };
        }
    }
    MatchResult::matched()
}

/// Greedily consume one distinct occurrence of `actual` per expected element.
///
/// Returns the unmatched expected elements and the consumption flags over
/// `actual`.
fn reconcile<T, S>(actual: &[T], expected: &[T], strategy: &S) -> (Vec<T>, Vec<bool>)
where
    T: Clone,
    S: Equivalence<T>,
{
    let mut consumed = vec![false; actual.len()];
    let mut missing = Vec::new();
    for element in expected {
        let slot = (0..actual.len())
            .find(|&index| !consumed[index] && strategy.equal(&actual[index], element));
        match slot {
            Some(index) => consumed[index] = true,
            None => missing.push(element.clone()),
        }
    }
    (missing, consumed)
}
