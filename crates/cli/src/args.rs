use clap::{Args, ValueEnum};
use paequor_sim::base::Strand;
use std::path::PathBuf;

use crate::defaults;

#[derive(Args, Debug)]
pub struct PopulateArgs {
    /// Number of survivable specimens to collect
    #[arg(short = 'n', long)]
    pub size: Option<usize>,

    /// Ceiling on generated candidates before giving up
    #[arg(long)]
    pub max_attempts: Option<usize>,

    /// Minimum GC fraction for a specimen to survive
    #[arg(long)]
    pub threshold: Option<f64>,

    /// JSON configuration file (command line flags take precedence)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    Pretty,
    /// Machine-readable JSON
    Json,
}

#[derive(Args, Debug)]
pub struct MutateArgs {
    /// Strand to mutate (a fresh one is generated if omitted)
    pub strand: Option<Strand>,

    /// Number of successive mutations to apply
    #[arg(short = 'n', long, default_value_t = defaults::MUTATION_ROUNDS)]
    pub times: usize,

    /// Ceiling on draws for the replacement base
    #[arg(long)]
    pub max_draws: Option<usize>,

    /// JSON configuration file (command line flags take precedence)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
