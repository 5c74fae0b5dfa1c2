//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use paequor_sim::prelude::*;
//!
//! let strand: Strand = "GGGCCCGGGAAAAAA".parse().unwrap();
//! assert!(Specimen::new(1, strand).will_likely_survive());
//! ```

pub use crate::analysis::{ComparisonReport, RelatedPair, find_most_related};
pub use crate::base::{Nucleotide, STRAND_LENGTH, Strand};
pub use crate::errors;
pub use crate::evolution::{AcceptAll, BaseSwap, BaseSwapMutation, GcContentFilter, SurvivalFilter};
pub use crate::genome::{Specimen, SpecimenId};
pub use crate::simulation::{Configuration, Population, PopulationBuilder, build_population};
