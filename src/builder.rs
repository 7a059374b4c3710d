use crate::alphabet::AlphabetPolicy;
use crate::error::{Result, ScoreError};
use crate::scorer::Scorer;

/// Configures a [`Scorer`].
///
/// ```
/// use nucleo_dp::{AlphabetPolicy, Scorer};
///
/// let scorer = Scorer::builder()
///     .policy(AlphabetPolicy::Permissive)
///     .naive_limit(24)
///     .build()
///     .unwrap();
/// assert_eq!(scorer.lcs_length(b"ACNT", b"ACNT").unwrap(), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScorerBuilder {
    policy: AlphabetPolicy,
    naive_limit: Option<usize>,
}

impl ScorerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn policy(mut self, policy: AlphabetPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Refuse naive runs whose input length exceeds `limit`.
    ///
    /// For alignment the length is the sum of both strands.
    pub fn naive_limit(mut self, limit: usize) -> Self {
        self.naive_limit = Some(limit);
        self
    }

    pub fn build(self) -> Result<Scorer> {
        if self.naive_limit == Some(0) {
            return Err(ScoreError::InvalidArgument(
                "naive_limit must be positive".into(),
            ));
        }
        Ok(Scorer::from_parts(self.policy, self.naive_limit))
    }
}
