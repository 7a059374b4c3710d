//! Nucleotide alphabets and input validation.
//!
//! DNA input is checked but left untouched: the aligner compares bytes
//! exactly, so `a` and `A` do not match. RNA input is upper-cased once
//! before folding so the pairing rule only ever sees `A`, `C`, `G`, `U`.

use std::borrow::Cow;
use std::fmt;

use crate::error::{Result, ScoreError};

/// The two fixed nucleotide alphabets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// `{A, C, G, T}`
    Dna,
    /// `{A, C, G, U}`
    Rna,
}

impl Alphabet {
    /// Upper-case symbols of the alphabet.
    pub fn symbols(self) -> &'static [u8; 4] {
        match self {
            Alphabet::Dna => b"ACGT",
            Alphabet::Rna => b"ACGU",
        }
    }

    /// Case-insensitive membership test.
    #[inline]
    pub fn contains(self, symbol: u8) -> bool {
        self.symbols().contains(&symbol.to_ascii_uppercase())
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Alphabet::Dna => "DNA",
            Alphabet::Rna => "RNA",
        })
    }
}

/// Which argument a sequence came from, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceRole {
    /// First DNA strand.
    First,
    /// Second DNA strand.
    Second,
    /// The RNA strand being folded.
    Strand,
}

impl fmt::Display for SequenceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SequenceRole::First => "seq1",
            SequenceRole::Second => "seq2",
            SequenceRole::Strand => "rna",
        })
    }
}

/// How symbols outside the alphabet are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AlphabetPolicy {
    /// Reject the input before any recursion with
    /// [`ScoreError::InvalidAlphabet`].
    #[default]
    Strict,
    /// Accept any byte. Foreign bytes only match an identical byte in DNA
    /// and never pair in RNA.
    Permissive,
}

/// Check `seq` against `alphabet` under `policy`.
///
/// Reports the first offending symbol and its position.
pub fn check_sequence(
    seq: &[u8],
    alphabet: Alphabet,
    role: SequenceRole,
    policy: AlphabetPolicy,
) -> Result<()> {
    if policy == AlphabetPolicy::Permissive {
        return Ok(());
    }
    match seq.iter().position(|&b| !alphabet.contains(b)) {
        None => Ok(()),
        Some(position) => Err(ScoreError::InvalidAlphabet {
            alphabet,
            role,
            position,
            symbol: seq[position] as char,
        }),
    }
}

/// Upper-case an RNA strand, borrowing when it already is.
pub fn normalize_rna(seq: &[u8]) -> Cow<'_, [u8]> {
    if seq.iter().any(u8::is_ascii_lowercase) {
        Cow::Owned(seq.to_ascii_uppercase())
    } else {
        Cow::Borrowed(seq)
    }
}
