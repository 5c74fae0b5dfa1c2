use anyhow::{Context, Result};
use paequor_sim::simulation::Configuration;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use std::path::Path;

/// Create the command's random source.
///
/// A given seed makes every run reproducible; otherwise the generator is
/// seeded from the thread RNG.
pub fn make_rng(seed: Option<u64>) -> Xoshiro256PlusPlus {
    match seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_seed(rand::rng().random()),
    }
}

/// Load the configuration file if one was given, otherwise the defaults.
///
/// The result is not validated yet; callers apply their flag overrides first.
pub fn load_config(path: Option<&Path>) -> Result<Configuration> {
    match path {
        Some(path) => Configuration::from_json_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(Configuration::default()),
    }
}
