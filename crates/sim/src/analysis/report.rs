//! Human-readable comparison messages.

use crate::genome::{Specimen, SpecimenId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of comparing two specimens, ready to be shown to a user.
///
/// Scoring stays in [`Specimen::compare_dna`]; this type only carries the
/// result so callers decide where (and whether) it is printed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub first_id: SpecimenId,
    pub second_id: SpecimenId,
    pub percent: f64,
}

impl ComparisonReport {
    /// Score `first` against `second` and capture the result.
    pub fn new(first: &Specimen, second: &Specimen) -> Self {
        Self {
            first_id: first.id(),
            second_id: second.id(),
            percent: first.compare_dna(second),
        }
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Specimen {} and {} have {:.2}% DNA in common.",
            self.first_id, self.second_id, self.percent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specimen(id: u32, s: &str) -> Specimen {
        Specimen::new(id, s.parse().unwrap())
    }

    #[test]
    fn test_report_message_format() {
        let a = specimen(1, "AAAAAAAAAAAAAAA");
        let b = specimen(2, "AAAAAAAAAATTTTT");
        let report = ComparisonReport::new(&a, &b);
        assert_eq!(
            report.to_string(),
            "Specimen 1 and 2 have 66.67% DNA in common."
        );
    }

    #[test]
    fn test_report_whole_numbers_keep_two_decimals() {
        let a = specimen(4, "GGGGGGGGGGGGGGG");
        let report = ComparisonReport::new(&a, &a.clone());
        assert_eq!(
            report.to_string(),
            "Specimen 4 and 4 have 100.00% DNA in common."
        );

        let b = specimen(9, "CCCCCCCCCCCCCCC");
        let report = ComparisonReport::new(&a, &b);
        assert_eq!(report.percent, 0.0);
        assert_eq!(
            report.to_string(),
            "Specimen 4 and 9 have 0.00% DNA in common."
        );
    }
}
