//! Simulation configuration.
//!
//! Every field has a serde default, so a configuration file only needs the
//! values it wants to change:
//!
//! ```
//! use paequor_sim::simulation::Configuration;
//!
//! let config = Configuration::from_json_str(r#"{ "population": { "target_size": 10 } }"#).unwrap();
//! assert_eq!(config.population.target_size, 10);
//! assert_eq!(config.population.survival_threshold, 0.6);
//! ```

use crate::errors::ConfigError;
use crate::evolution::mutation::DEFAULT_MAX_DRAWS;
use crate::evolution::selection::DEFAULT_SURVIVAL_THRESHOLD;
use crate::evolution::{BaseSwapMutation, GcContentFilter};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default number of specimens in a population.
pub const DEFAULT_TARGET_SIZE: usize = 30;

/// Default ceiling on candidate specimens generated while filling a population.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1_000_000;

/// The master configuration struct.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    pub population: PopulationConfig,
    pub mutation: MutationConfig,
    /// Optional RNG seed for reproducibility
    pub seed: Option<u64>,
}

/// Parameters for building a population.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    /// Number of survivable specimens to collect
    pub target_size: usize,
    /// Ceiling on generated candidates before giving up
    pub max_attempts: usize,
    /// Minimum GC fraction for a candidate to survive
    pub survival_threshold: f64,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            target_size: DEFAULT_TARGET_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            survival_threshold: DEFAULT_SURVIVAL_THRESHOLD,
        }
    }
}

/// Parameters for the base swap mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutationConfig {
    /// Ceiling on draws for a replacement base
    pub max_draws: usize,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            max_draws: DEFAULT_MAX_DRAWS,
        }
    }
}

impl Configuration {
    /// Parse a configuration from JSON text and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a configuration from a JSON file and validate it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population.max_attempts == 0 {
            return Err(ConfigError::Validation(
                "population.max_attempts must be at least 1".into(),
            ));
        }
        if self.mutation.max_draws == 0 {
            return Err(ConfigError::Validation(
                "mutation.max_draws must be at least 1".into(),
            ));
        }
        self.survival_filter()?;
        Ok(())
    }

    /// Survival filter described by this configuration.
    pub fn survival_filter(&self) -> Result<GcContentFilter, ConfigError> {
        GcContentFilter::new(self.population.survival_threshold)
    }

    /// Mutation rule described by this configuration.
    pub fn mutation_rule(&self) -> Result<BaseSwapMutation, ConfigError> {
        BaseSwapMutation::new(self.mutation.max_draws)
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Configuration::default();
        assert_eq!(config.population.target_size, 30);
        assert_eq!(config.population.max_attempts, 1_000_000);
        assert_eq!(config.population.survival_threshold, 0.6);
        assert_eq!(config.mutation.max_draws, 64);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = Configuration::from_json_str("{}").unwrap();
        assert_eq!(config, Configuration::default());
    }

    #[test]
    fn test_partial_json() {
        let config = Configuration::from_json_str(
            r#"{ "seed": 7, "mutation": { "max_draws": 3 } }"#,
        )
        .unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.mutation.max_draws, 3);
        assert_eq!(config.population.target_size, 30);
        assert_eq!(config.mutation_rule().unwrap().max_draws(), 3);
    }

    #[test]
    fn test_json_roundtrip() {
        let mut config = Configuration::default();
        config.population.target_size = 12;
        config.seed = Some(99);
        let json = config.to_json().unwrap();
        assert_eq!(Configuration::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_validation_failures() {
        let err = Configuration::from_json_str(r#"{ "population": { "max_attempts": 0 } }"#);
        assert!(matches!(err, Err(ConfigError::Validation(_))));

        let err = Configuration::from_json_str(r#"{ "mutation": { "max_draws": 0 } }"#);
        assert!(matches!(err, Err(ConfigError::Validation(_))));

        let err =
            Configuration::from_json_str(r#"{ "population": { "survival_threshold": 1.2 } }"#);
        assert!(matches!(err, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_parse_error() {
        let err = Configuration::from_json_str("{ not json");
        assert!(matches!(err, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "population": {{ "target_size": 5 }} }}"#).unwrap();

        let config = Configuration::from_json_file(file.path()).unwrap();
        assert_eq!(config.population.target_size, 5);
    }

    #[test]
    fn test_missing_file() {
        let err = Configuration::from_json_file("/nonexistent/paequor.json");
        assert!(matches!(err, Err(ConfigError::Io(_))));
    }
}
