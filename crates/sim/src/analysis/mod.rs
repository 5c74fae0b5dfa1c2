//! Analysis of specimens and populations.
//!
//! - [`similarity`]: position-wise identity scoring between strands
//! - [`relatedness`]: all-pairs search for the most similar specimens
//! - [`report`]: human-readable comparison messages

pub mod relatedness;
pub mod report;
pub mod similarity;

pub use relatedness::{RelatedPair, find_most_related};
pub use report::ComparisonReport;
pub use similarity::count_matches;
