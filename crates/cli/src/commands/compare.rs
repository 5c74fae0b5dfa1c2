use paequor_sim::analysis::ComparisonReport;
use paequor_sim::base::Strand;
use paequor_sim::genome::Specimen;

pub fn compare_strands(first: Strand, second: Strand) {
    let first = Specimen::new(1, first);
    let second = Specimen::new(2, second);
    println!("{}", ComparisonReport::new(&first, &second));
}
