use crate::base::Strand;
use crate::evolution::{BaseSwap, BaseSwapMutation, GcContentFilter, SurvivalFilter};
use crate::errors::MutationError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Identifier of a specimen within its population.
pub type SpecimenId = u32;

/// A single *P. aequor* specimen.
///
/// `Specimen` owns its strand exclusively. The strand only changes through
/// [`Specimen::mutate`] (or [`Specimen::mutate_with`]); every other
/// operation reads it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Specimen {
    /// Identifier, unique within a population
    id: SpecimenId,
    /// The specimen's DNA
    strand: Strand,
}

impl Specimen {
    /// Create a specimen, taking ownership of `strand` as-is.
    pub fn new(id: SpecimenId, strand: Strand) -> Self {
        Self { id, strand }
    }

    /// Create a specimen with a freshly generated strand.
    pub fn random<R: Rng + ?Sized>(id: SpecimenId, rng: &mut R) -> Self {
        Self::new(id, Strand::random(rng))
    }

    #[inline]
    pub fn id(&self) -> SpecimenId {
        self.id
    }

    #[inline]
    pub fn strand(&self) -> &Strand {
        &self.strand
    }

    /// Consume the specimen and return its strand.
    pub fn into_strand(self) -> Strand {
        self.strand
    }

    /// Apply one base swap mutation with the default draw ceiling and return
    /// the mutated strand.
    ///
    /// # Errors
    /// Returns `MutationError::RetriesExhausted` if no replacement base could
    /// be drawn; the strand is then unchanged.
    pub fn mutate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Strand, MutationError> {
        self.mutate_with(&BaseSwapMutation::default(), rng)?;
        Ok(self.strand)
    }

    /// Apply one base swap mutation using `rule`, reporting what changed.
    pub fn mutate_with<R: Rng + ?Sized>(
        &mut self,
        rule: &BaseSwapMutation,
        rng: &mut R,
    ) -> Result<BaseSwap, MutationError> {
        rule.apply(&mut self.strand, rng)
    }

    /// Percentage (0–100) of positions at which both specimens carry the
    /// same base.
    ///
    /// Strands always have the same length, so the comparison is total.
    /// Printing the result is left to the caller; see
    /// [`ComparisonReport`](crate::analysis::ComparisonReport).
    #[inline]
    pub fn compare_dna(&self, other: &Specimen) -> f64 {
        self.strand.identity(&other.strand)
    }

    /// True if at least 60% of the strand is C or G.
    pub fn will_likely_survive(&self) -> bool {
        GcContentFilter::default().survives(self)
    }

    /// The complementary strand (A <-> T, C <-> G). Does not modify the specimen.
    pub fn complement_strand(&self) -> Strand {
        self.strand.complement()
    }
}
