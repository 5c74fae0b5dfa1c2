//! Shared default values for command line arguments.
//! Values come from the simulation crate so the CLI and configuration files
//! agree.

use paequor_sim::evolution::selection::DEFAULT_SURVIVAL_THRESHOLD;
use paequor_sim::simulation::configs::DEFAULT_TARGET_SIZE;

pub const DEMO_POPULATION_SIZE: usize = DEFAULT_TARGET_SIZE;
pub const SURVIVAL_THRESHOLD: f64 = DEFAULT_SURVIVAL_THRESHOLD;

pub const MUTATION_ROUNDS: usize = 1;
