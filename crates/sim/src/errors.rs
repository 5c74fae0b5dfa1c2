use thiserror::Error;

/// Error returned when attempting to convert an invalid byte/character into
/// a `Nucleotide`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid nucleotide byte: {} ('{}')", .0, char::from(*.0))]
pub struct InvalidNucleotide(pub u8);

/// An operation received input it cannot give a meaningful answer for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    /// A strand did not have exactly the required number of bases.
    #[error("Strand must contain exactly {expected} bases, got {actual}")]
    StrandLength { expected: usize, actual: usize },

    /// A character outside the A/T/C/G alphabet appeared in a strand.
    #[error("Invalid character in strand: '{0}'")]
    InvalidChar(char),

    /// Relatedness needs at least one pair of specimens.
    #[error("At least 2 specimens are required to find a related pair, got {0}")]
    TooFewSpecimens(usize),
}

impl From<InvalidNucleotide> for InvalidArgument {
    fn from(e: InvalidNucleotide) -> Self {
        Self::InvalidChar(e.0 as char)
    }
}

/// Errors that can occur during mutation operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    /// The replacement base kept matching the replaced base.
    #[error("No replacement base differing from {base} found after {attempts} draws")]
    RetriesExhausted { base: char, attempts: usize },

    /// A ceiling of zero draws can never pick a replacement.
    #[error("Mutation draw ceiling must be at least 1")]
    ZeroDrawCeiling,
}

/// Errors that can occur while building a population.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    /// The candidate ceiling was reached before the population was full.
    #[error("Only {accepted} of {target} specimens survived after {attempts} candidates")]
    AttemptsExhausted {
        accepted: usize,
        target: usize,
        attempts: usize,
    },

    /// An invalid parameter value was provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Errors raised while loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}
