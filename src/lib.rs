//! Memoized sequence-comparison scores for DNA and RNA.
//!
//! This crate computes two classic molecular-biology scores, each as a naive
//! exponential recursion and as a memoized dynamic program that must agree
//! with it on every input:
//!
//! - **DNA alignment**: the length of the longest common subsequence of two
//!   strands, used as a global-alignment similarity score. Memoized in
//!   O(n·m).
//! - **RNA folding**: the maximum number of non-crossing Watson-Crick pairs
//!   a strand can form without pseudo-knots. Memoized in O(n³).
//!
//! ## Core idea
//! 1. Write the recurrence once, over index-pair or interval keys, by
//!    implementing [`Recurrence`].
//! 2. Let [`DpEngine`] evaluate it either by plain recursion or against a
//!    call-scoped write-once [`ScoreTable`].
//!
//! No sub-sequences are ever built; subproblems are index bounds into the
//! original input.
//!
//! ## Quick start
//! ```
//! assert_eq!(nucleo_dp::lcs_length(b"ATCTGAT", b"TGCATA").unwrap(), 4);
//! assert_eq!(nucleo_dp::max_pairings(b"AAUUGCGC").unwrap(), 4);
//! assert!(nucleo_dp::can_pair(b'G', b'C'));
//! assert!(!nucleo_dp::can_pair(b'G', b'U'));
//! ```
//!
//! The crate-level functions validate strictly: DNA must be drawn from
//! `{A,C,G,T}` and RNA from `{A,C,G,U}` (either case). Use
//! [`Scorer::builder`] for a permissive policy or a naive-input length limit.
//!
//! ## Limits
//! Recursion depth grows linearly with input length (n+m for alignment, n for
//! folding), so very long inputs can exhaust the thread stack. The naive
//! variants are only practical on short inputs: roughly 25 total bases for
//! alignment and 15 for folding.

pub mod alphabet;
pub mod builder;
pub mod engine;
pub mod error;
pub mod pairing;
pub mod problems;
pub mod scorer;
pub mod table;
pub mod traits;

pub use crate::alphabet::{Alphabet, AlphabetPolicy, SequenceRole};
pub use crate::builder::ScorerBuilder;
pub use crate::engine::{DpEngine, MemoStats};
pub use crate::error::{Result, ScoreError};
pub use crate::pairing::can_pair;
pub use crate::scorer::Scorer;
pub use crate::table::ScoreTable;
pub use crate::traits::{Recurrence, Score};

/// LCS length of two DNA strands by plain recursion. Exponential time.
pub fn lcs_length_naive(seq1: &[u8], seq2: &[u8]) -> Result<Score> {
    Scorer::default().lcs_length_naive(seq1, seq2)
}

/// LCS length of two DNA strands, memoized. O(n·m) time and space.
pub fn lcs_length(seq1: &[u8], seq2: &[u8]) -> Result<Score> {
    Scorer::default().lcs_length(seq1, seq2)
}

/// Maximum non-crossing pair count by plain recursion. Exponential time.
pub fn max_pairings_naive(seq: &[u8]) -> Result<Score> {
    Scorer::default().max_pairings_naive(seq)
}

/// Maximum non-crossing pair count, memoized. O(n³) time, O(n²) space.
pub fn max_pairings(seq: &[u8]) -> Result<Score> {
    Scorer::default().max_pairings(seq)
}
