//! Population container.
//!
//! A population holds specimens in the order they were accepted by the
//! builder. It is built once and then read (or mutated specimen by specimen).

use crate::analysis::{RelatedPair, find_most_related};
use crate::errors::InvalidArgument;
use crate::genome::{Specimen, SpecimenId};
use serde::{Deserialize, Serialize};

/// An ordered collection of specimens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Population {
    /// The specimens in acceptance order
    specimens: Vec<Specimen>,
}

impl Population {
    /// Create a population from specimens, keeping their order.
    pub fn new(specimens: Vec<Specimen>) -> Self {
        Self { specimens }
    }

    /// Get the number of specimens in the population.
    pub fn size(&self) -> usize {
        self.specimens.len()
    }

    /// Check if population is empty.
    pub fn is_empty(&self) -> bool {
        self.specimens.is_empty()
    }

    /// Get all specimens as a slice.
    pub fn specimens(&self) -> &[Specimen] {
        &self.specimens
    }

    /// Get mutable access to specimens.
    pub fn specimens_mut(&mut self) -> &mut [Specimen] {
        &mut self.specimens
    }

    /// Get a specific specimen by position.
    pub fn get(&self, index: usize) -> Option<&Specimen> {
        self.specimens.get(index)
    }

    /// Look up a specimen by its id.
    pub fn by_id(&self, id: SpecimenId) -> Option<&Specimen> {
        self.specimens.iter().find(|s| s.id() == id)
    }

    /// Iterate over specimens in acceptance order.
    pub fn iter(&self) -> std::slice::Iter<'_, Specimen> {
        self.specimens.iter()
    }

    /// Consume the population and return its specimens.
    pub fn into_specimens(self) -> Vec<Specimen> {
        self.specimens
    }

    /// The two specimens sharing the most DNA.
    ///
    /// # Errors
    /// Fails with `InvalidArgument::TooFewSpecimens` below two specimens.
    pub fn find_most_related(&self) -> Result<RelatedPair<'_>, InvalidArgument> {
        find_most_related(&self.specimens)
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Specimen;
    type IntoIter = std::slice::Iter<'a, Specimen>;

    fn into_iter(self) -> Self::IntoIter {
        self.specimens.iter()
    }
}
