use paequor_sim::base::Strand;

use crate::printing::print_complement;
use crate::utils::make_rng;

pub fn show_complement(strand: Option<Strand>, seed: Option<u64>) {
    let strand = strand.unwrap_or_else(|| Strand::random(&mut make_rng(seed)));
    println!("🔁 Complementary Strand");
    print_complement(&strand);
}
