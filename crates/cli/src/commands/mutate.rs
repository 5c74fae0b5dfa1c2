use anyhow::{Context, Result};
use paequor_sim::genome::Specimen;
use paequor_sim::simulation::Configuration;

use crate::args::MutateArgs;
use crate::printing::print_swap;
use crate::utils::{load_config, make_rng};

/// Merge the configuration file (if any) with command line overrides.
fn resolve_config(args: &MutateArgs, seed: Option<u64>) -> Result<Configuration> {
    let mut config = load_config(args.config.as_deref())?;

    if let Some(max_draws) = args.max_draws {
        config.mutation.max_draws = max_draws;
    }
    if seed.is_some() {
        config.seed = seed;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

pub fn mutate_strand(args: &MutateArgs, seed: Option<u64>) -> Result<()> {
    let config = resolve_config(args, seed)?;
    let rule = config.mutation_rule().context("Invalid mutation parameters")?;
    let mut rng = make_rng(config.seed);

    let mut specimen = match args.strand {
        Some(strand) => Specimen::new(1, strand),
        None => Specimen::random(1, &mut rng),
    };

    println!("🧪 Base Swap Mutation");
    println!("  Max Draws: {}", rule.max_draws());
    println!("  Original: {}", specimen.strand());
    for round in 1..=args.times {
        let swap = specimen
            .mutate_with(&rule, &mut rng)
            .with_context(|| format!("Mutation {round} failed"))?;
        print_swap(round, &swap, specimen.strand());
    }
    println!("  Result:   {}", specimen.strand());

    Ok(())
}
