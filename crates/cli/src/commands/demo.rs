use anyhow::{Context, Result};
use paequor_sim::genome::Specimen;
use paequor_sim::simulation::build_population;

use crate::defaults;
use crate::printing::{print_complement, print_population, print_related_pair};
use crate::utils::make_rng;

pub fn run_demo(seed: Option<u64>) -> Result<()> {
    println!("🧬 P. aequor - Specimen Demo");
    println!("============================================\n");

    let mut rng = make_rng(seed);

    let population = build_population(defaults::DEMO_POPULATION_SIZE, &mut rng)
        .context("Failed to build population")?;
    print_population(&population);

    let pair = population
        .find_most_related()
        .context("Failed to find related specimens")?;
    print_related_pair(&pair);

    let fresh = Specimen::random(1, &mut rng);
    println!("\n🔁 Complement of a fresh specimen");
    print_complement(fresh.strand());

    Ok(())
}
