//! `hs-scheduler`: household schedule synthesis for hhsched.
//!
//! # Household pipeline
//!
//! ```text
//! for each household, for iteration in 0..household_iterations:
//!   ① Generate  work → school → joint other → joint market
//!               → individual other → market, each into its own
//!               project schedule (no travel, no locations)
//!   ② Merge     per person: work kinds → joint/other/market → work-based
//!               business, through the person schedule with travel
//!               padding and location choice
//!   ③ Chains    walk each merged day into home-based trip chains
//!   ④ Link      identical chains of different members become joint tours
//! ```
//!
//! Every (household, iteration) pair draws from its own RNG stream, seeded
//! from the run seed, the household id and the iteration.  Sampling
//! failures and rejected insertions are never errors: they are retried up
//! to `scheduling_attempts` times, then abandoned and tallied in
//! [`SchedulerStats`].
//!
//! # Modules
//!
//! | Module          | Contents                                               |
//! |-----------------|--------------------------------------------------------|
//! | [`builder`]     | [`SchedulerBuilder`], table/config agreement checks    |
//! | [`runner`]      | [`Scheduler`], sequential and parallel run loops       |
//! | [`context`]     | [`SchedulerContext`]: read-only inputs                 |
//! | [`day`]         | [`HouseholdSchedule`] and [`PersonDay`] results        |
//! | [`chains`]      | [`build_chains`]                                       |
//! | [`joint_trips`] | [`link_joint_trips`]                                   |
//! | [`observer`]    | [`RunObserver`], [`NoopObserver`]                      |
//! | [`stats`]       | [`SchedulerStats`], [`StatsSnapshot`]                  |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                      |
//! |------------|-------------------------------------------------------------|
//! | `parallel` | Schedules households on Rayon's thread pool.                |
//! | `serde`    | Derives `Serialize`/`Deserialize` on [`StatsSnapshot`].     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hs_core::{SchedulerConfig, Time};
//! use hs_distribution::DistributionTableBuilder;
//! use hs_schedule::{ConstantTravelTime, UniformZones};
//! use hs_scheduler::{NoopObserver, SchedulerBuilder};
//!
//! let config = SchedulerConfig::default();
//! let table = DistributionTableBuilder::new(&config).build()?;
//! let travel = ConstantTravelTime { intrazonal: Time(5), interzonal: Time(20) };
//! let scheduler = SchedulerBuilder::new(config, table, travel, UniformZones::new(zones)).build()?;
//! let stats = scheduler.run(&population, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod chains;
pub mod context;
pub mod day;
pub mod error;
pub mod joint_trips;
pub mod observer;
pub mod runner;
pub mod stats;

mod generate;
mod merge;
mod pass;
mod projects;
mod timetable;


pub use builder::SchedulerBuilder;
pub use chains::build_chains;
pub use context::SchedulerContext;
pub use day::{HouseholdSchedule, PersonDay};
pub use error::{SchedulerError, SchedulerResult};
pub use joint_trips::link_joint_trips;
pub use observer::{NoopObserver, RunObserver};
pub use runner::Scheduler;
pub use stats::{SchedulerStats, StatsSnapshot};
