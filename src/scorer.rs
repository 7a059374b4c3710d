//! Validated entry points for the four scoring operations.
//!
//! A [`Scorer`] validates its inputs according to its [`AlphabetPolicy`],
//! optionally refuses oversized naive runs, and then hands the sequences to
//! a fresh [`DpEngine`]. It holds configuration only; every call allocates
//! and drops its own memo table.

use crate::alphabet::{check_sequence, normalize_rna, Alphabet, AlphabetPolicy, SequenceRole};
use crate::builder::ScorerBuilder;
use crate::engine::DpEngine;
use crate::error::{Result, ScoreError};
use crate::problems::{fold::FoldProblem, lcs::LcsProblem};
use crate::traits::Score;

#[derive(Debug, Clone, Default)]
pub struct Scorer {
    policy: AlphabetPolicy,
    naive_limit: Option<usize>,
}

impl Scorer {
    pub fn builder() -> ScorerBuilder {
        ScorerBuilder::new()
    }

    pub(crate) fn from_parts(policy: AlphabetPolicy, naive_limit: Option<usize>) -> Self {
        Self {
            policy,
            naive_limit,
        }
    }

    pub fn policy(&self) -> AlphabetPolicy {
        self.policy
    }

    pub fn naive_limit(&self) -> Option<usize> {
        self.naive_limit
    }

    /// LCS length of two DNA strands by plain recursion (exponential).
    pub fn lcs_length_naive(&self, seq1: &[u8], seq2: &[u8]) -> Result<Score> {
        self.check_dna(seq1, seq2)?;
        self.check_naive_len(seq1.len() + seq2.len())?;
        Ok(DpEngine::new(LcsProblem::new(seq1, seq2)).run_naive())
    }

    /// LCS length of two DNA strands, memoized, O(n·m).
    pub fn lcs_length(&self, seq1: &[u8], seq2: &[u8]) -> Result<Score> {
        self.check_dna(seq1, seq2)?;
        Ok(DpEngine::new(LcsProblem::new(seq1, seq2)).run())
    }

    /// Maximum non-crossing pair count by plain recursion (exponential).
    pub fn max_pairings_naive(&self, seq: &[u8]) -> Result<Score> {
        self.check_rna(seq)?;
        self.check_naive_len(seq.len())?;
        let seq = normalize_rna(seq);
        Ok(DpEngine::new(FoldProblem::new(&seq)).run_naive())
    }

    /// Maximum non-crossing pair count, memoized, O(n³).
    pub fn max_pairings(&self, seq: &[u8]) -> Result<Score> {
        self.check_rna(seq)?;
        let seq = normalize_rna(seq);
        Ok(DpEngine::new(FoldProblem::new(&seq)).run())
    }

    /// Maximum pair count filled bottom-up one diagonal at a time on the
    /// rayon pool. Same result as [`Scorer::max_pairings`].
    #[cfg(feature = "parallel")]
    pub fn max_pairings_par(&self, seq: &[u8]) -> Result<Score> {
        self.check_rna(seq)?;
        let seq = normalize_rna(seq);
        Ok(FoldProblem::new(&seq).tabulate_par())
    }

    fn check_dna(&self, seq1: &[u8], seq2: &[u8]) -> Result<()> {
        check_sequence(seq1, Alphabet::Dna, SequenceRole::First, self.policy)
            .and_then(|()| check_sequence(seq2, Alphabet::Dna, SequenceRole::Second, self.policy))
            .map_err(log_rejection)
    }

    fn check_rna(&self, seq: &[u8]) -> Result<()> {
        check_sequence(seq, Alphabet::Rna, SequenceRole::Strand, self.policy).map_err(log_rejection)
    }

    fn check_naive_len(&self, len: usize) -> Result<()> {
        match self.naive_limit {
            Some(limit) if len > limit => {
                Err(log_rejection(ScoreError::NaiveLimitExceeded { len, limit }))
            }
            _ => Ok(()),
        }
    }
}

#[inline]
fn log_rejection(err: ScoreError) -> ScoreError {
    #[cfg(feature = "tracing")]
    tracing::debug!(error = %err, "input rejected");
    err
}
