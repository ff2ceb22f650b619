//! `hs-distribution`: empirical activity distributions and their sampler.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`table`]       | `DistributionEntry`, `DistributionTable`, `DistributionTableBuilder` |
//! | [`sample`]      | Inverse-CDF sampling of frequency, start time and duration |
//! | [`adjust`]      | `GenerationAdjustment`, `StartTimeAdjustment`, `Adjustments` |
//! | [`adults`]      | `AdultDistributions` (joint-episode adult counts)          |
//! | [`resolver`]    | Distribution-id offset tables for persons and households   |
//! | [`error`]       | `DistributionError`, `DistributionResult<T>`               |
//!
//! # Sharing model
//!
//! A `DistributionTable` is built once, then only read.  It holds no interior
//! mutability, so `&DistributionTable` is shared freely across the parallel
//! household workers.  Sampling never caches adjusted cumulative sums: each
//! call recomputes them for the geography it was asked about.
//!
//! # Infeasible draws
//!
//! Sampling returns `Ok(None)` when a draw is impossible (a zero row, an empty
//! window, a zero start or duration).  Callers retry within their attempt
//! budget.  `Err` is reserved for malformed requests such as an unknown id.

pub mod adjust;
pub mod adults;
pub mod error;
pub mod resolver;
pub mod sample;
pub mod table;

#[cfg(test)]
mod tests;

pub use adjust::{Adjustments, GenerationAdjustment, StartTimeAdjustment, StartTimeProfile};
pub use adults::AdultDistributions;
pub use error::{DistributionError, DistributionResult};
pub use resolver::{adult_distribution, fixed_adult_count, household_distribution, person_distribution};
pub use table::{DistributionEntry, DistributionTable, DistributionTableBuilder};
