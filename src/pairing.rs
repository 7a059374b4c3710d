//! Base-pairing rule used by the RNA folder.

/// Canonical Watson-Crick pairs, both orientations.
pub const WATSON_CRICK_PAIRS: [(u8, u8); 4] = [(b'A', b'U'), (b'U', b'A'), (b'G', b'C'), (b'C', b'G')];

/// Return true if bases `b1` and `b2` can pair (A-U, G-C in either order).
///
/// Wobble pairs such as G-U are rejected. Bases are expected upper-case, as
/// produced by [`normalize_rna`](crate::alphabet::normalize_rna); any other
/// byte never pairs.
#[inline]
pub fn can_pair(b1: u8, b2: u8) -> bool {
    matches!(
        (b1, b2),
        (b'A', b'U') | (b'U', b'A') | (b'G', b'C') | (b'C', b'G')
    )
}
