//! Specimen representation.

mod specimen;

pub use specimen::{Specimen, SpecimenId};
