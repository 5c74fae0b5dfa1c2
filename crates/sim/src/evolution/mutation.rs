//! Whole-strand base swap mutation.
//!
//! A mutation picks one base of the alphabet and rewrites every occurrence of
//! it in the strand as a different, randomly chosen base. The picked base is
//! drawn without looking at the strand, so the mutation is a no-op whenever
//! that base does not occur. When it does occur, it disappears from the
//! strand entirely.

use crate::base::{Nucleotide, Strand};
pub use crate::errors::MutationError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Default ceiling on draws for the replacement base.
///
/// Each draw succeeds with probability 3/4, so running out is practically
/// impossible with a fair random source.
pub const DEFAULT_MAX_DRAWS: usize = 64;

/// Record of one applied mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseSwap {
    /// Base that was replaced.
    pub from: Nucleotide,
    /// Base it was replaced with; never equal to `from`.
    pub to: Nucleotide,
    /// Number of positions rewritten.
    pub replaced: usize,
}

impl BaseSwap {
    /// True if the strand was left unchanged.
    pub fn is_noop(&self) -> bool {
        self.replaced == 0
    }
}

/// Base swap mutation rule with a bounded rejection loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseSwapMutation {
    max_draws: usize,
}

impl Default for BaseSwapMutation {
    fn default() -> Self {
        Self {
            max_draws: DEFAULT_MAX_DRAWS,
        }
    }
}

impl BaseSwapMutation {
    /// Create a rule that gives up after `max_draws` attempts at drawing a
    /// replacement base different from the replaced one.
    ///
    /// # Errors
    /// Returns `MutationError::ZeroDrawCeiling` if `max_draws` is zero.
    pub fn new(max_draws: usize) -> Result<Self, MutationError> {
        if max_draws == 0 {
            return Err(MutationError::ZeroDrawCeiling);
        }
        Ok(Self { max_draws })
    }

    /// Ceiling on replacement draws.
    #[inline]
    pub fn max_draws(&self) -> usize {
        self.max_draws
    }

    /// Draw a base uniformly, re-drawing while it equals `avoid`.
    ///
    /// # Errors
    /// Returns `MutationError::RetriesExhausted` after `max_draws` rejected draws.
    pub fn draw_replacement<R: Rng + ?Sized>(
        &self,
        avoid: Nucleotide,
        rng: &mut R,
    ) -> Result<Nucleotide, MutationError> {
        for _ in 0..self.max_draws {
            let candidate = Nucleotide::random(rng);
            if candidate != avoid {
                return Ok(candidate);
            }
        }
        Err(MutationError::RetriesExhausted {
            base: avoid.to_char(),
            attempts: self.max_draws,
        })
    }

    /// Mutate `strand` in place.
    ///
    /// Picks the replaced base uniformly from the alphabet, draws a different
    /// replacement, and rewrites every occurrence. On error the strand is
    /// left unchanged.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        strand: &mut Strand,
        rng: &mut R,
    ) -> Result<BaseSwap, MutationError> {
        let from = Nucleotide::random(rng);
        let to = self.draw_replacement(from, rng)?;
        let replaced = strand.replace_all(from, to);
        Ok(BaseSwap { from, to, replaced })
    }
}
