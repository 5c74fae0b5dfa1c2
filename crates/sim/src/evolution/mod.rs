//! Evolution module providing mutation and survival selection.
//!
//! - **Mutation**: whole-strand base swaps with a bounded rejection loop
//! - **Selection**: survival filters applied while building a population

pub mod mutation;
pub mod selection;

pub use mutation::{BaseSwap, BaseSwapMutation};
pub use selection::{AcceptAll, GcContentFilter, SurvivalFilter};
