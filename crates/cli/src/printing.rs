use paequor_sim::analysis::RelatedPair;
use paequor_sim::base::Strand;
use paequor_sim::evolution::BaseSwap;
use paequor_sim::simulation::{Configuration, Population};

pub fn print_parameters(config: &Configuration) {
    let population = &config.population;
    println!("\n📋 Population Configuration");
    println!("  • Target Size: {} [-n, --size]", population.target_size);
    println!(
        "  • Survival Threshold: {:.0}% GC [--threshold]",
        population.survival_threshold * 100.0
    );
    println!(
        "  • Max Candidates: {} [--max-attempts]",
        population.max_attempts
    );
    if let Some(seed) = config.seed {
        println!("  • Random Seed: {seed} [--seed]");
    } else {
        println!("  • Random Seed: Random [--seed]");
    }
    println!();
}

pub fn print_population(population: &Population) {
    println!("🧫 Survivable Specimens ({})", population.size());
    println!("{}", "=".repeat(50));
    for specimen in population {
        let strand = specimen.strand();
        println!(
            "  #{:<4} {}  GC {:>5.1}%",
            specimen.id(),
            strand,
            strand.gc_content() * 100.0
        );
    }
    println!();
}

pub fn print_related_pair(pair: &RelatedPair<'_>) {
    println!("🔗 Most Related Pair");
    println!("  #{:<4} {}", pair.first.id(), pair.first.strand());
    println!("  #{:<4} {}", pair.second.id(), pair.second.strand());
    println!("{}", pair.report());
}

pub fn print_complement(strand: &Strand) {
    println!("  Strand:     {strand}");
    println!("  Complement: {}", strand.complement());
}

pub fn print_swap(round: usize, swap: &BaseSwap, strand: &Strand) {
    if swap.is_noop() {
        println!(
            "  {round:>3}. {} → {}: no {} present  {strand}",
            swap.from, swap.to, swap.from
        );
    } else {
        println!(
            "  {round:>3}. {} → {}: {} replaced  {strand}",
            swap.from, swap.to, swap.replaced
        );
    }
}
