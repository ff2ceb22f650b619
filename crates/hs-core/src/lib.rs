//! `hs-core`: foundational types for the `hhsched` household activity
//! scheduler.
//!
//! This crate is a dependency of every other `hs-*` crate.  It intentionally
//! has no `hs-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `HouseholdId`, `PersonId`, `ZoneId`, `DistrictId`, `DistributionId` |
//! | [`time`]        | `Time` (whole minutes, exact arithmetic)              |
//! | [`activity`]    | `Activity` enum and its classification helpers        |
//! | [`config`]      | `SchedulerConfig`, `WorkRules`, `SchoolRules`         |
//! | [`rng`]         | `HouseholdRng` (per household and iteration)          |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod activity;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use activity::Activity;
pub use config::{SchedulerConfig, SchoolRules, WorkRules};
pub use error::{CoreError, CoreResult};
pub use ids::{DistributionId, DistrictId, HouseholdId, PersonId, ZoneId};
pub use rng::HouseholdRng;
pub use time::Time;
