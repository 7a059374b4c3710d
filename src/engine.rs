//! Generic top-down DP engine.
//!
//! This module evaluates a [`Recurrence`] in two ways:
//! 1. [`DpEngine::run_naive`]: plain recursion, exponential in general.
//!    Kept as the reference the memoized path must agree with.
//! 2. [`DpEngine::run`]: the same recursion, but every non-base subproblem
//!    is looked up in a call-scoped [`ScoreTable`] before it is expanded and
//!    stored exactly once after.
//!
//! The engine is completely generic over implementations of [`Recurrence`].
//! Neither path keeps state between runs.

use crate::table::ScoreTable;
use crate::traits::{Recurrence, Score};

/// Top-down DP engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use nucleo_dp::{DpEngine, problems::lcs::LcsProblem};
///
/// let problem = LcsProblem::new(b"ATCTGAT", b"TGCATA");
/// let engine = DpEngine::new(problem);
/// assert_eq!(engine.run(), 4);
/// assert_eq!(engine.run_naive(), 4);
/// ```
pub struct DpEngine<P: Recurrence> {
    problem: P,
}

/// Counters collected by a memoized run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Non-base subproblems requested, including table hits.
    pub calls: u64,
    /// Requests answered from the table without expanding.
    pub hits: u64,
    /// Table cells written; each cell is written at most once.
    pub cells_filled: usize,
    /// Total cells allocated for the run.
    pub table_cells: usize,
}

impl<P: Recurrence> DpEngine<P> {
    pub fn new(problem: P) -> Self {
        Self { problem }
    }

    /// Expose immutable reference to the underlying problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Consume the engine and hand back the problem.
    pub fn into_problem(self) -> P {
        self.problem
    }

    /// Evaluate the root by plain recursion.
    ///
    /// Exponential time for both bundled problems; intended for short
    /// inputs and as a cross-check. Recursion depth is bounded by
    /// `size(root)`.
    pub fn run_naive(&self) -> Score {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("dp_run_naive");
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        self.solve_naive(self.problem.root())
    }

    /// Evaluate the root with memoization. Polynomial in the table size.
    pub fn run(&self) -> Score {
        self.run_with_stats().0
    }

    /// Memoized evaluation that also reports table usage.
    pub fn run_with_stats(&self) -> (Score, MemoStats) {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("dp_run");
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (rows, cols) = self.problem.table_shape();
        let mut table = ScoreTable::new(rows, cols);
        let mut stats = MemoStats {
            table_cells: table.len(),
            ..MemoStats::default()
        };

        let score = self.solve_memo(self.problem.root(), &mut table, &mut stats);
        stats.cells_filled = table.filled();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            score,
            calls = stats.calls,
            hits = stats.hits,
            cells_filled = stats.cells_filled,
            table_cells = stats.table_cells,
            "memo table released"
        );

        (score, stats)
    }

    fn solve_naive(&self, key: P::Key) -> Score {
        if let Some(v) = self.problem.base_value(key) {
            return v;
        }
        let size = self.problem.size(key);
        self.problem.expand(key, &mut |sub| {
            debug_assert!(
                self.problem.size(sub) < size,
                "subproblem {sub:?} does not shrink {key:?}"
            );
            self.solve_naive(sub)
        })
    }

    fn solve_memo(&self, key: P::Key, table: &mut ScoreTable, stats: &mut MemoStats) -> Score {
        if let Some(v) = self.problem.base_value(key) {
            return v;
        }
        stats.calls += 1;
        let (row, col) = self.problem.cell(key);
        if let Some(v) = table.get(row, col) {
            stats.hits += 1;
            return v;
        }

        let size = self.problem.size(key);
        let value = self.problem.expand(key, &mut |sub| {
            debug_assert!(
                self.problem.size(sub) < size,
                "subproblem {sub:?} does not shrink {key:?}"
            );
            self.solve_memo(sub, table, stats)
        });
        table.insert(row, col, value);
        value
    }
}
