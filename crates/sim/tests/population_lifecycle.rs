//! Integration tests covering a population from construction to analysis.

use paequor_sim::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

#[test]
fn test_default_population_lifecycle() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(2024);
    let population = build_population(30, &mut rng).unwrap();

    assert_eq!(population.size(), 30);
    for (i, specimen) in population.iter().enumerate() {
        assert_eq!(specimen.id() as usize, i + 1);
        assert_eq!(specimen.strand().len(), STRAND_LENGTH);
        assert!(specimen.strand().gc_count() >= 9);
    }

    let pair = population.find_most_related().unwrap();
    assert_ne!(pair.first.id(), pair.second.id());
    assert!(pair.first.id() < pair.second.id());

    // No other pair beats the reported one.
    let specimens = population.specimens();
    for (i, a) in specimens.iter().enumerate() {
        for b in &specimens[i + 1..] {
            assert!(a.compare_dna(b) <= pair.similarity);
        }
    }

    let report = pair.report().to_string();
    assert!(report.starts_with(&format!(
        "Specimen {} and {} have ",
        pair.first.id(),
        pair.second.id()
    )));
    assert!(report.ends_with("% DNA in common."));
}

#[test]
fn test_mutating_population_members() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(8);
    let mut population = PopulationBuilder::new()
        .target_size(10)
        .build(&mut rng)
        .unwrap();
    let rule = BaseSwapMutation::default();

    for specimen in population.specimens_mut() {
        let swap = specimen.mutate_with(&rule, &mut rng).unwrap();
        assert_eq!(specimen.strand().count(swap.from), 0);
    }

    // Ids survive mutation.
    let ids: Vec<_> = population.iter().map(Specimen::id).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<_>>());
}

#[test]
fn test_configuration_drives_builder() {
    let config = Configuration::from_json_str(
        r#"{ "population": { "target_size": 6, "survival_threshold": 0.7 }, "seed": 3 }"#,
    )
    .unwrap();

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(config.seed.unwrap());
    let population = PopulationBuilder::from_config(&config.population)
        .unwrap()
        .build(&mut rng)
        .unwrap();

    assert_eq!(population.size(), 6);
    assert!(population.iter().all(|s| s.strand().gc_content() >= 0.7));
}

#[test]
fn test_complement_of_population_member() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(99);
    let population = build_population(3, &mut rng).unwrap();

    for specimen in &population {
        let complement = specimen.complement_strand();
        // GC content is preserved by complementation
        assert_eq!(complement.gc_count(), specimen.strand().gc_count());
        assert_eq!(specimen.compare_dna(&Specimen::new(0, complement)), 0.0);
    }
}
