mod args;
mod commands;
pub mod defaults;
mod printing;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use paequor_sim::base::Strand;

use args::{MutateArgs, PopulateArgs};
use commands::{compare, complement, demo, mutate, populate, survive};

/// Paequor: a P. aequor specimen simulator
///
/// Generates random 15-base DNA strands for the bacterium P. aequor, keeps the
/// specimens likely to survive (GC-rich strands), and analyses how closely
/// they are related.
#[derive(Parser, Debug)]
#[command(name = "paequor")]
#[command(author, version, about = "Generates and analyses P. aequor specimens", long_about = None)]
struct Cli {
    /// Random seed for reproducible output
    ///
    /// If not specified, a fresh seed is drawn from the operating system.
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a population of 30 survivable specimens, report the most related
    /// pair and show the complement of a fresh specimen.
    Demo,

    /// Build a population of survivable specimens.
    ///
    /// Lists every specimen and reports the pair sharing the most DNA.
    Populate(Box<PopulateArgs>),

    /// Print the complementary strand (A↔T, C↔G).
    Complement {
        /// Strand to complement (a fresh one is generated if omitted)
        strand: Option<Strand>,
    },

    /// Apply the base swap mutation to a strand.
    ///
    /// The draw ceiling comes from `--max-draws`, then the configuration
    /// file, then the built-in default.
    Mutate(MutateArgs),

    /// Report how much DNA two strands have in common.
    Compare {
        /// First strand
        first: Strand,
        /// Second strand
        second: Strand,
    },

    /// Check whether a strand is likely to survive (GC content ≥ threshold).
    Survive {
        /// Strand to check
        strand: Strand,

        /// Minimum GC fraction
        #[arg(long, default_value_t = defaults::SURVIVAL_THRESHOLD)]
        threshold: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo => {
            demo::run_demo(cli.seed)?;
        }
        Commands::Populate(args) => {
            populate::populate(&args, cli.seed)?;
        }
        Commands::Complement { strand } => {
            complement::show_complement(strand, cli.seed);
        }
        Commands::Mutate(args) => {
            mutate::mutate_strand(&args, cli.seed)?;
        }
        Commands::Compare { first, second } => {
            compare::compare_strands(first, second);
        }
        Commands::Survive { strand, threshold } => {
            survive::check_survival(strand, threshold)?;
        }
    }

    Ok(())
}
