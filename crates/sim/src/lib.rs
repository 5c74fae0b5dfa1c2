//! # Simulation Crate
//!
//! The `sim` crate models a population of synthetic *P. aequor* bacteria.
//! It includes modules for generating random DNA strands, building
//! populations of survivable specimens, mutating and complementing
//! strands, and finding the most closely related pair of specimens.

pub mod analysis;
pub mod base;
pub mod errors;
pub mod evolution;
pub mod genome;
pub mod prelude;
pub mod simulation;

pub use base::{Nucleotide, STRAND_LENGTH, Strand};
pub use genome::Specimen;
