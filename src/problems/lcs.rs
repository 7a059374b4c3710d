//! Longest Common Subsequence (LCS) between two DNA strands.
//!
//! The LCS length is used as a global-alignment similarity score: every
//! matched base scores one, gaps and mismatches score nothing.
//!
//! Subproblems are prefix pairs. The key `(i, j)` stands for the prefixes
//! `s[..i]` and `t[..j]`, i.e. the last compared positions are `i - 1` and
//! `j - 1`. Either prefix being empty is the base case. Otherwise:
//!
//! ```text
//! f(i, j) = max( f(i-1, j),
//!                f(i, j-1),
//!                f(i-1, j-1) + 1   if s[i-1] == t[j-1] )
//! ```
//!
//! Non-base keys live in a `s.len() x t.len()` table at `(i-1, j-1)`.

use crate::traits::{Recurrence, Score};

#[derive(Clone)]
pub struct LcsProblem<'a> {
    pub s: &'a [u8],
    pub t: &'a [u8],
}

impl<'a> LcsProblem<'a> {
    pub fn new(s: &'a [u8], t: &'a [u8]) -> Self {
        Self { s, t }
    }

    fn n(&self) -> usize {
        self.s.len()
    }

    fn m(&self) -> usize {
        self.t.len()
    }

    /// Bottom-up LCS length keeping two DP rows, O(m) space.
    ///
    /// Independent of the recursive formulation; used to cross-check it.
    pub fn tabulate(&self) -> Score {
        let m = self.m();
        let mut row = vec![0 as Score; m + 1];
        for &ch in self.s {
            let mut next = vec![0 as Score; m + 1];
            for j in 1..=m {
                let up = row[j];
                let left = next[j - 1];
                let diag = row[j - 1] + Score::from(self.t[j - 1] == ch);
                next[j] = up.max(left).max(diag);
            }
            row = next;
        }
        row[m]
    }
}

impl<'a> Recurrence for LcsProblem<'a> {
    /// Prefix lengths `(i, j)`.
    type Key = (usize, usize);

    fn root(&self) -> Self::Key {
        (self.n(), self.m())
    }

    fn base_value(&self, (i, j): Self::Key) -> Option<Score> {
        // An empty prefix has no common subsequence.
        (i == 0 || j == 0).then_some(0)
    }

    fn table_shape(&self) -> (usize, usize) {
        (self.n(), self.m())
    }

    fn cell(&self, (i, j): Self::Key) -> (usize, usize) {
        (i - 1, j - 1)
    }

    fn size(&self, (i, j): Self::Key) -> usize {
        i + j
    }

    fn expand(&self, (i, j): Self::Key, sub: &mut dyn FnMut(Self::Key) -> Score) -> Score {
        let drop_s = sub((i - 1, j));
        let drop_t = sub((i, j - 1));
        let mut best = drop_s.max(drop_t);
        if self.s[i - 1] == self.t[j - 1] {
            best = best.max(sub((i - 1, j - 1)) + 1);
        }
        best
    }
}
