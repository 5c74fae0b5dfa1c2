//! Base types for strand representation.
//!
//! This module provides the nucleotide alphabet and the fixed-length strand
//! type, together with their random generators.

mod nucleotide;
mod strand;

pub use nucleotide::Nucleotide;
pub use strand::{STRAND_LENGTH, Strand};
