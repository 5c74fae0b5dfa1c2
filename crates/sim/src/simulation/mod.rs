//! Population construction and configuration.
//!
//! - `Configuration`: serde-backed settings (population size, attempt
//!   ceilings, survival threshold, seed).
//! - `PopulationBuilder`: fluent builder that fills a population with
//!   survivable specimens.
//! - `Population`: ordered container of the accepted specimens.

pub mod builder;
pub mod configs;
pub mod population;

pub use builder::{PopulationBuilder, build_population};
pub use configs::{Configuration, MutationConfig, PopulationConfig};
pub use population::Population;
