//! Builder for survivable populations.
//!
//! Candidates are generated one at a time and kept only if they pass the
//! survival filter. Ids are handed out to survivors only, so a finished
//! population of size `n` carries ids `1..=n` in acceptance order.

pub use crate::errors::BuilderError;
use crate::errors::ConfigError;
use crate::evolution::{GcContentFilter, SurvivalFilter};
use crate::genome::{Specimen, SpecimenId};
use crate::simulation::Population;
use crate::simulation::configs::{DEFAULT_MAX_ATTEMPTS, DEFAULT_TARGET_SIZE, PopulationConfig};
use rand::Rng;

/// Builder for constructing a [`Population`] with a fluent API.
///
/// # Examples
///
/// ```
/// use paequor_sim::simulation::PopulationBuilder;
/// use rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256PlusPlus;
///
/// let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
/// let population = PopulationBuilder::new()
///     .target_size(10)
///     .build(&mut rng)
///     .unwrap();
///
/// assert_eq!(population.size(), 10);
/// assert!(population.iter().all(|s| s.will_likely_survive()));
/// ```
#[derive(Debug, Clone)]
pub struct PopulationBuilder<F = GcContentFilter> {
    target_size: usize,
    max_attempts: usize,
    filter: F,
}

impl Default for PopulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PopulationBuilder {
    /// Create a builder with the default size, attempt ceiling and GC filter.
    pub fn new() -> Self {
        Self {
            target_size: DEFAULT_TARGET_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            filter: GcContentFilter::default(),
        }
    }

    /// Create a builder from the population section of a configuration.
    pub fn from_config(config: &PopulationConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            target_size: config.target_size,
            max_attempts: config.max_attempts,
            filter: GcContentFilter::new(config.survival_threshold)?,
        })
    }
}

impl<F: SurvivalFilter> PopulationBuilder<F> {
    /// Set the number of specimens to collect.
    pub fn target_size(mut self, size: usize) -> Self {
        self.target_size = size;
        self
    }

    /// Set the ceiling on generated candidates.
    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Replace the survival filter.
    pub fn filter<G: SurvivalFilter>(self, filter: G) -> PopulationBuilder<G> {
        PopulationBuilder {
            target_size: self.target_size,
            max_attempts: self.max_attempts,
            filter,
        }
    }

    /// Build the population.
    ///
    /// # Errors
    /// - `BuilderError::InvalidParameter` if the attempt ceiling is zero while
    ///   specimens are still needed, or the target exceeds the id range.
    /// - `BuilderError::AttemptsExhausted` if the ceiling is reached first.
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Population, BuilderError> {
        self.build_with(rng, |_, _| {})
    }

    /// Build the population, calling `on_accept` with each survivor and the
    /// number of candidates generated so far.
    pub fn build_with<R, C>(&self, rng: &mut R, mut on_accept: C) -> Result<Population, BuilderError>
    where
        R: Rng + ?Sized,
        C: FnMut(&Specimen, usize),
    {
        if self.target_size > 0 && self.max_attempts == 0 {
            return Err(BuilderError::InvalidParameter(
                "max_attempts must be at least 1".into(),
            ));
        }
        if SpecimenId::try_from(self.target_size).is_err() {
            return Err(BuilderError::InvalidParameter(format!(
                "target size {} exceeds the specimen id range",
                self.target_size
            )));
        }

        let mut specimens = Vec::with_capacity(self.target_size);
        let mut attempts = 0;

        while specimens.len() < self.target_size {
            if attempts == self.max_attempts {
                return Err(BuilderError::AttemptsExhausted {
                    accepted: specimens.len(),
                    target: self.target_size,
                    attempts,
                });
            }
            attempts += 1;

            // Ids only advance on acceptance; the range check above keeps the cast lossless.
            let next_id = (specimens.len() + 1) as SpecimenId;
            let candidate = Specimen::random(next_id, rng);
            if self.filter.survives(&candidate) {
                on_accept(&candidate, attempts);
                specimens.push(candidate);
            }
        }

        Ok(Population::new(specimens))
    }
}

/// Build a population of `target_size` specimens with the default GC filter.
pub fn build_population<R: Rng + ?Sized>(
    target_size: usize,
    rng: &mut R,
) -> Result<Population, BuilderError> {
    PopulationBuilder::new().target_size(target_size).build(rng)
}
