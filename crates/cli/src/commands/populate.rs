use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use paequor_sim::analysis::ComparisonReport;
use paequor_sim::simulation::{Configuration, Population, PopulationBuilder};
use serde::Serialize;

use crate::args::{OutputFormat, PopulateArgs};
use crate::printing::{print_parameters, print_population, print_related_pair};
use crate::utils::{load_config, make_rng};

/// JSON document emitted by `populate --format json`.
#[derive(Serialize)]
struct PopulationSummary<'a> {
    seed: Option<u64>,
    population: &'a Population,
    most_related: Option<ComparisonReport>,
}

/// Merge the configuration file (if any) with command line overrides.
fn resolve_config(args: &PopulateArgs, seed: Option<u64>) -> Result<Configuration> {
    let mut config = load_config(args.config.as_deref())?;

    if let Some(size) = args.size {
        config.population.target_size = size;
    }
    if let Some(max_attempts) = args.max_attempts {
        config.population.max_attempts = max_attempts;
    }
    if let Some(threshold) = args.threshold {
        config.population.survival_threshold = threshold;
    }
    if seed.is_some() {
        config.seed = seed;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

pub fn populate(args: &PopulateArgs, seed: Option<u64>) -> Result<()> {
    let config = resolve_config(args, seed)?;
    let pretty = args.format == OutputFormat::Pretty;

    if pretty {
        println!("🧬 P. aequor - Building Population");
        println!("============================================");
        print_parameters(&config);
    }

    let builder = PopulationBuilder::from_config(&config.population)?;
    let mut rng = make_rng(config.seed);

    let pb = if args.progress {
        let pb = ProgressBar::new(config.population.target_size as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let population = builder
        .build_with(&mut rng, |_, attempts| {
            if let Some(pb) = &pb {
                pb.inc(1);
                pb.set_message(format!("{attempts} candidates"));
            }
        })
        .context("Failed to build population")?;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    // A single specimen has nobody to be related to.
    let pair = population.find_most_related().ok();

    match args.format {
        OutputFormat::Pretty => {
            print_population(&population);
            match &pair {
                Some(pair) => print_related_pair(pair),
                None => println!("⚠️  Fewer than 2 specimens, no related pair to report"),
            }
        }
        OutputFormat::Json => {
            let summary = PopulationSummary {
                seed: config.seed,
                population: &population,
                most_related: pair.map(|p| p.report()),
            };
            let json = serde_json::to_string_pretty(&summary)
                .context("Failed to serialize population")?;
            println!("{json}");
        }
    }

    Ok(())
}
