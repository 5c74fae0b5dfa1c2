//! Survival filters for candidate specimens.
//!
//! A population only admits specimens that are likely to survive. The
//! default heuristic is GC content: C and G pair through three hydrogen
//! bonds, so GC-rich strands are treated as more stable. Filters are
//! pluggable so the builder can be driven with other rules (or none).

use crate::errors::ConfigError;
use crate::genome::Specimen;
use serde::{Deserialize, Serialize};

/// Minimum GC fraction a specimen needs to be considered survivable.
pub const DEFAULT_SURVIVAL_THRESHOLD: f64 = 0.6;

/// Decides whether a candidate specimen is admitted into a population.
pub trait SurvivalFilter {
    /// Return `true` if `specimen` should be kept.
    fn survives(&self, specimen: &Specimen) -> bool;
}

impl<F: SurvivalFilter + ?Sized> SurvivalFilter for &F {
    fn survives(&self, specimen: &Specimen) -> bool {
        (**self).survives(specimen)
    }
}

/// Keeps specimens whose GC content is at least `threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GcContentFilter {
    threshold: f64,
}

impl Default for GcContentFilter {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SURVIVAL_THRESHOLD,
        }
    }
}

impl GcContentFilter {
    /// Create a filter with a custom GC threshold.
    ///
    /// # Errors
    /// Returns `ConfigError::Validation` unless `threshold` is within `[0, 1]`.
    pub fn new(threshold: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(ConfigError::Validation(format!(
                "survival threshold must be between 0.0 and 1.0, got {threshold}"
            )));
        }
        Ok(Self { threshold })
    }

    /// The GC fraction a specimen must reach.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl SurvivalFilter for GcContentFilter {
    #[inline]
    fn survives(&self, specimen: &Specimen) -> bool {
        specimen.strand().gc_content() >= self.threshold
    }
}

/// Admits every specimen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AcceptAll;

impl SurvivalFilter for AcceptAll {
    #[inline]
    fn survives(&self, _specimen: &Specimen) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specimen(s: &str) -> Specimen {
        Specimen::new(1, s.parse().unwrap())
    }

    #[test]
    fn test_gc_filter_boundary() {
        let filter = GcContentFilter::default();
        // 9 of 15 = 0.6 exactly
        assert!(filter.survives(&specimen("GGGCCCGGGAAAAAA")));
        // 8 of 15
        assert!(!filter.survives(&specimen("GGGCCCGGAAAAAAA")));
        // 10 of 15
        assert!(filter.survives(&specimen("GGGCCCGGGCAAAAA")));
    }

    #[test]
    fn test_gc_filter_extremes() {
        let filter = GcContentFilter::default();
        assert!(filter.survives(&specimen("GCGCGCGCGCGCGCG")));
        assert!(!filter.survives(&specimen("ATATATATATATATA")));
    }

    #[test]
    fn test_gc_filter_custom_threshold() {
        let lenient = GcContentFilter::new(0.0).unwrap();
        assert!(lenient.survives(&specimen("ATATATATATATATA")));

        let strict = GcContentFilter::new(1.0).unwrap();
        assert!(!strict.survives(&specimen("GCGCGCGCGCGCGCA")));
        assert!(strict.survives(&specimen("GCGCGCGCGCGCGCG")));
    }

    #[test]
    fn test_gc_filter_rejects_out_of_range() {
        assert!(GcContentFilter::new(-0.1).is_err());
        assert!(GcContentFilter::new(1.5).is_err());
        assert!(GcContentFilter::new(f64::NAN).is_err());
    }

    #[test]
    fn test_accept_all() {
        assert!(AcceptAll.survives(&specimen("ATATATATATATATA")));
    }

    #[test]
    fn test_filter_by_reference() {
        let filter = GcContentFilter::default();
        let by_ref: &dyn SurvivalFilter = &filter;
        assert!(by_ref.survives(&specimen("GGGGGGGGGGGGGGG")));
    }
}
