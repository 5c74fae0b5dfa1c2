use anyhow::{Context, Result};
use paequor_sim::base::Strand;
use paequor_sim::evolution::{GcContentFilter, SurvivalFilter};
use paequor_sim::genome::Specimen;

pub fn check_survival(strand: Strand, threshold: f64) -> Result<()> {
    let filter = GcContentFilter::new(threshold).context("Invalid survival threshold")?;
    let specimen = Specimen::new(1, strand);

    println!("  Strand:     {strand}");
    println!(
        "  GC content: {}/{} ({:.1}%)",
        strand.gc_count(),
        strand.len(),
        strand.gc_content() * 100.0
    );
    if filter.survives(&specimen) {
        println!("✓ Likely to survive");
    } else {
        println!("✗ Unlikely to survive");
    }

    Ok(())
}
