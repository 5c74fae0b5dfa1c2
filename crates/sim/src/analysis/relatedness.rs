//! Most-related pair search.
//!
//! Compares every unordered pair of specimens exactly once, so a population
//! of `n` specimens costs `n(n-1)/2` comparisons.

use crate::analysis::ComparisonReport;
use crate::errors::InvalidArgument;
use crate::genome::Specimen;

/// The two specimens of a population sharing the most DNA.
///
/// Borrows the specimens from the searched slice rather than copying them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelatedPair<'a> {
    pub first: &'a Specimen,
    pub second: &'a Specimen,
    /// Similarity percentage between `first` and `second`.
    pub similarity: f64,
}

impl<'a> RelatedPair<'a> {
    /// Both specimens, in search order.
    pub fn specimens(&self) -> (&'a Specimen, &'a Specimen) {
        (self.first, self.second)
    }

    /// Comparison report for the pair.
    pub fn report(&self) -> ComparisonReport {
        ComparisonReport {
            first_id: self.first.id(),
            second_id: self.second.id(),
            percent: self.similarity,
        }
    }
}

/// Find the pair of specimens with the highest DNA similarity.
///
/// Pairs are visited outer index first, then inner index. Only a strictly
/// greater similarity replaces the current best, so ties resolve to the
/// first pair visited.
///
/// # Errors
///
/// Returns [`InvalidArgument::TooFewSpecimens`] when fewer than two
/// specimens are given.
pub fn find_most_related(specimens: &[Specimen]) -> Result<RelatedPair<'_>, InvalidArgument> {
    if specimens.len() < 2 {
        return Err(InvalidArgument::TooFewSpecimens(specimens.len()));
    }

    let mut best = RelatedPair {
        first: &specimens[0],
        second: &specimens[1],
        similarity: specimens[0].compare_dna(&specimens[1]),
    };

    for (i, first) in specimens.iter().enumerate() {
        for second in &specimens[i + 1..] {
            let similarity = first.compare_dna(second);
            if similarity > best.similarity {
                best = RelatedPair {
                    first,
                    second,
                    similarity,
                };
            }
        }
    }

    Ok(best)
}
