//! Write-once score table used by the memoized engine.
//!
//! A `ScoreTable` is a dense `rows x cols` grid of optional scores. A cell is
//! either absent (`None`, not yet computed) or holds the final value for its
//! subproblem. Tables are allocated per top-level run and dropped on return.

use crate::traits::Score;

/// Dense row-major table of optional scores.
#[derive(Debug, Clone)]
pub struct ScoreTable {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Score>>,
}

impl ScoreTable {
    /// Allocate an empty table with every cell absent.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// `(rows, cols)` of the table.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of cells, filled or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the table has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Stored value at `(row, col)`, if computed.
    ///
    /// # Panics
    /// Panics if `(row, col)` is outside the table.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Score> {
        self.cells[self.index(row, col)]
    }

    /// Store the value for `(row, col)`.
    ///
    /// Each cell is written at most once; writing a filled cell is a
    /// recurrence bug and trips a debug assertion.
    ///
    /// # Panics
    /// Panics if `(row, col)` is outside the table.
    #[inline]
    pub fn insert(&mut self, row: usize, col: usize, value: Score) {
        let idx = self.index(row, col);
        debug_assert!(
            self.cells[idx].is_none(),
            "cell ({row}, {col}) written twice"
        );
        self.cells[idx] = Some(value);
    }

    /// Number of cells that hold a value.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} table",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}
