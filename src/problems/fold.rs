//! Maximum base pairing of a single RNA strand without pseudo-knots.
//!
//! Subproblems are half-open intervals `[start, end)` of the strand. Writing
//! `i = start` and `j = end - 1` for the inclusive bounds:
//!
//! ```text
//! f(i, j) = 0                                   if the interval holds <= 1 base
//! f(i, j) = max( f(i+1, j),                     i left unpaired
//!                f(i, j-1),                     j left unpaired
//!                f(i+1, j-1) + 1                if can_pair(seq[i], seq[j])
//!                f(i, k) + f(k+1, j)            for i <= k, k+1 < j )
//! ```
//!
//! The last line is the bifurcation: the strand splits into two independent
//! pieces, so pairs on one side can never cross pairs on the other. A two-base
//! interval has no split point; a three-base interval has exactly one.
//!
//! Non-base intervals live in a `len x len` table at `(i, j)`; only the upper
//! triangle is ever used. Memoized evaluation is O(n³) time, O(n²) space.

use crate::pairing::can_pair;
use crate::traits::{Recurrence, Score};

/// Half-open interval `[start, end)` of strand positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    pub start: usize,
    pub end: usize,
}

impl Interval {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of bases covered; zero for empty or inverted bounds.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// RNA folding instance over an upper-case strand.
#[derive(Clone)]
pub struct FoldProblem<'a> {
    pub seq: &'a [u8],
}

impl<'a> FoldProblem<'a> {
    /// `seq` must already be upper-case; see
    /// [`normalize_rna`](crate::alphabet::normalize_rna).
    pub fn new(seq: &'a [u8]) -> Self {
        Self { seq }
    }

    fn n(&self) -> usize {
        self.seq.len()
    }

    /// Bottom-up fill by increasing interval length.
    ///
    /// Independent of the recursive formulation; used to cross-check it.
    pub fn tabulate(&self) -> Score {
        let n = self.n();
        let mut m = vec![0 as Score; n * n];
        for len in 2..=n {
            for i in 0..=n - len {
                let v = self.fill_value(&m, i, i + len);
                m[i * n + i + len - 1] = v;
            }
        }
        self.read(&m, Interval::new(0, n))
    }

    /// Bottom-up fill computing each diagonal in parallel.
    ///
    /// Intervals of one length only read shorter intervals, so every cell of
    /// a diagonal is independent and written by exactly one task.
    #[cfg(feature = "parallel")]
    pub fn tabulate_par(&self) -> Score {
        use rayon::prelude::*;

        let n = self.n();
        let mut m = vec![0 as Score; n * n];
        for len in 2..=n {
            let diagonal: Vec<Score> = (0..=n - len)
                .into_par_iter()
                .map(|i| self.fill_value(&m, i, i + len))
                .collect();
            for (i, v) in diagonal.into_iter().enumerate() {
                m[i * n + i + len - 1] = v;
            }
        }
        self.read(&m, Interval::new(0, n))
    }

    /// Value of a filled (or base-case) interval in a bottom-up table.
    #[inline]
    fn read(&self, m: &[Score], iv: Interval) -> Score {
        if iv.len() <= 1 {
            0
        } else {
            m[iv.start * self.n() + iv.end - 1]
        }
    }

    /// Recurrence step over a bottom-up table where all shorter intervals
    /// are already final.
    fn fill_value(&self, m: &[Score], start: usize, end: usize) -> Score {
        self.expand(Interval::new(start, end), &mut |iv| self.read(m, iv))
    }
}

impl<'a> Recurrence for FoldProblem<'a> {
    type Key = Interval;

    fn root(&self) -> Self::Key {
        Interval::new(0, self.n())
    }

    fn base_value(&self, key: Self::Key) -> Option<Score> {
        // A lone base has nothing to pair or split with.
        (key.len() <= 1).then_some(0)
    }

    fn table_shape(&self) -> (usize, usize) {
        (self.n(), self.n())
    }

    fn cell(&self, key: Self::Key) -> (usize, usize) {
        (key.start, key.end - 1)
    }

    fn size(&self, key: Self::Key) -> usize {
        key.len()
    }

    fn expand(&self, key: Self::Key, sub: &mut dyn FnMut(Self::Key) -> Score) -> Score {
        let Interval { start, end } = key;
        let (i, j) = (start, end - 1);

        let skip_first = sub(Interval::new(i + 1, end));
        let skip_last = sub(Interval::new(i, j));
        let mut best = skip_first.max(skip_last);

        if can_pair(self.seq[i], self.seq[j]) {
            best = best.max(sub(Interval::new(i + 1, j)) + 1);
        }

        // Split between mid-1 and mid, i.e. k = mid - 1 with k + 1 < j.
        for mid in i + 1..j {
            best = best.max(sub(Interval::new(i, mid)) + sub(Interval::new(mid, end)));
        }
        best
    }
}
