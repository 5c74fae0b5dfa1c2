use super::Nucleotide;
use crate::analysis::similarity::count_matches;
use crate::errors::InvalidArgument;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of bases in every specimen strand.
pub const STRAND_LENGTH: usize = 15;

/// A single DNA strand of exactly [`STRAND_LENGTH`] bases.
///
/// The length is part of the type, so any `Strand` that exists is valid:
/// constructors from slices, vectors and text check the length and alphabet
/// and fail with [`InvalidArgument`] otherwise. Position order is significant;
/// comparison and complementation work base by base.
///
/// Serialized as its textual form (e.g. `"ACGTACGTACGTACG"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Strand([Nucleotide; STRAND_LENGTH]);

#[allow(clippy::len_without_is_empty)]
impl Strand {
    /// Create a `Strand` from a fixed-size array of bases.
    pub const fn new(bases: [Nucleotide; STRAND_LENGTH]) -> Self {
        Self(bases)
    }

    /// Generate a fresh strand, drawing each base independently.
    ///
    /// ```
    /// use paequor_sim::base::{Strand, STRAND_LENGTH};
    /// use rand::SeedableRng;
    /// use rand_xoshiro::Xoshiro256PlusPlus;
    ///
    /// let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    /// let strand = Strand::random(&mut rng);
    /// assert_eq!(strand.len(), STRAND_LENGTH);
    /// ```
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(std::array::from_fn(|_| Nucleotide::random(rng)))
    }

    /// Return the length of the strand in bases (always [`STRAND_LENGTH`]).
    #[inline(always)]
    pub const fn len(&self) -> usize {
        STRAND_LENGTH
    }

    /// Return the `Nucleotide` at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<Nucleotide> {
        self.0.get(index).copied()
    }

    /// Borrow the underlying `Nucleotide` slice.
    #[inline]
    pub fn as_slice(&self) -> &[Nucleotide] {
        &self.0
    }

    /// Iterate over the bases in order.
    pub fn iter(&self) -> impl Iterator<Item = Nucleotide> + '_ {
        self.0.iter().copied()
    }

    /// Number of positions holding `base`.
    pub fn count(&self, base: Nucleotide) -> usize {
        self.0.iter().filter(|&&b| b == base).count()
    }

    /// Number of positions holding C or G.
    pub fn gc_count(&self) -> usize {
        self.0.iter().filter(|b| b.is_gc()).count()
    }

    /// Fraction of positions holding C or G, in `[0, 1]`.
    pub fn gc_content(&self) -> f64 {
        self.gc_count() as f64 / STRAND_LENGTH as f64
    }

    /// Build the complementary strand (A <-> T, C <-> G).
    ///
    /// The original is left untouched; applying this twice yields the
    /// original strand again.
    pub fn complement(&self) -> Self {
        Self(self.0.map(Nucleotide::complement))
    }

    /// Replace every occurrence of `from` with `to`, returning how many
    /// positions changed.
    pub fn replace_all(&mut self, from: Nucleotide, to: Nucleotide) -> usize {
        let mut replaced = 0;
        for slot in self.0.iter_mut().filter(|b| **b == from) {
            *slot = to;
            replaced += 1;
        }
        replaced
    }

    /// Percentage (0–100) of positions at which both strands hold the same base.
    pub fn identity(&self, other: &Strand) -> f64 {
        count_matches(&self.0, &other.0) as f64 * 100.0 / STRAND_LENGTH as f64
    }
}

impl TryFrom<&[Nucleotide]> for Strand {
    type Error = InvalidArgument;

    fn try_from(bases: &[Nucleotide]) -> Result<Self, Self::Error> {
        let array: [Nucleotide; STRAND_LENGTH] =
            bases.try_into().map_err(|_| InvalidArgument::StrandLength {
                expected: STRAND_LENGTH,
                actual: bases.len(),
            })?;
        Ok(Self(array))
    }
}

impl TryFrom<Vec<Nucleotide>> for Strand {
    type Error = InvalidArgument;

    fn try_from(bases: Vec<Nucleotide>) -> Result<Self, Self::Error> {
        Self::try_from(bases.as_slice())
    }
}

impl TryFrom<String> for Strand {
    type Error = InvalidArgument;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Strand> for String {
    fn from(strand: Strand) -> Self {
        strand.to_string()
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &nuc in &self.0 {
            write!(f, "{}", nuc.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Strand {
    type Err = InvalidArgument;

    /// Parse a textual representation (e.g. "ACGTACGTACGTACG") into a `Strand`.
    ///
    /// Case-insensitive. Characters outside A/T/C/G produce
    /// `InvalidArgument::InvalidChar`; any length other than
    /// [`STRAND_LENGTH`] produces `InvalidArgument::StrandLength`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bases = s
            .chars()
            .map(Nucleotide::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from(bases)
    }
}
