//! Similarity scoring between strands.
//!
//! Similarity is the share of positions at which two strands carry the same
//! base. It is a plain position-wise comparison: no alignment and no
//! composition matching.

use crate::base::Nucleotide;

/// Count positions where `a` and `b` hold the same base.
///
/// Only the overlapping prefix is compared when the lengths differ.
#[inline]
pub fn count_matches(a: &[Nucleotide], b: &[Nucleotide]) -> usize {
    a.iter().zip(b).filter(|(x, y)| x == y).count()
}
