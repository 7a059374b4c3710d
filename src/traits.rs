//! Core trait definitions for memoizable recurrences.
//!
//! To run a recurrence through [`DpEngine`](crate::engine::DpEngine),
//! implement [`Recurrence`] for a problem struct that borrows its instance
//! (e.g. one or two sequences).
//!
//! The trait encodes exactly what the engine needs:
//! - A root subproblem: the key the top-level call evaluates.
//! - Base cases: keys whose value is known without recursion.
//! - Table coordinates: where a non-base key is stored in the memo table.
//! - Size: a measure that strictly shrinks along every recursive edge.
//! - One-step expansion: the recurrence itself, written against a callback
//!   that resolves sub-keys.
//!
//! The engine decides whether the callback recurses directly (naive) or
//! consults the memo table first (memoized). Implementations never see the
//! table and never build sub-sequences; subproblems are index bounds only.

use std::fmt::Debug;

/// Score produced by every recurrence in this crate.
///
/// Both scores (common-subsequence length, pair count) are non-negative.
pub type Score = u32;

/// A top-down recurrence over copyable subproblem keys.
///
/// A `Recurrence` corresponds to a *fixed* instance: in practice a struct
/// holding borrowed input sequences.
///
/// Semantics:
/// - `root()` is the subproblem answering the whole instance.
/// - `base_value(k)` is `Some(v)` exactly when `k` is a base case.
/// - For every non-base `k`, `cell(k)` lies within `table_shape()`, and
///   distinct non-base keys map to distinct cells.
/// - `expand(k, sub)` computes the value of `k` from values of sub-keys,
///   every one of which has `size(sub_key) < size(k)`.
pub trait Recurrence {
    /// Subproblem identifier, e.g. a prefix pair or an interval.
    type Key: Copy + Debug;

    /// The key evaluated by a top-level call.
    fn root(&self) -> Self::Key;

    /// Value of `key` if it is a base case, `None` otherwise.
    fn base_value(&self, key: Self::Key) -> Option<Score>;

    /// `(rows, cols)` of the memo table needed for this instance.
    fn table_shape(&self) -> (usize, usize);

    /// Table coordinates of a non-base key.
    ///
    /// Only called when `base_value(key)` is `None`.
    fn cell(&self, key: Self::Key) -> (usize, usize);

    /// Problem-size measure used to check termination in debug builds.
    fn size(&self, key: Self::Key) -> usize;

    /// Evaluate one step of the recurrence for a non-base `key`.
    ///
    /// `sub` resolves the value of any smaller subproblem. It may be called
    /// any number of times, in any order.
    fn expand(&self, key: Self::Key, sub: &mut dyn FnMut(Self::Key) -> Score) -> Score;
}
