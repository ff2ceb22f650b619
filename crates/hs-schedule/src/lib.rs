//! `hs-schedule`: episodes, conflict resolution and schedules.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`episode`]   | `Episode`                                                  |
//! | [`conflict`]  | `ConflictType`, `ConflictReport`, `classify`               |
//! | `fit`         | Three-episode fitting (crate-internal)                     |
//! | [`schedule`]  | `Schedule`, `DayBounds`, `InsertOutcome`, `Rejection`      |
//! | [`project`]   | `ProjectKind`, `ProjectSchedule`                           |
//! | [`person`]    | `PersonSchedule`                                           |
//! | [`padding`]   | `Padding` trait, `NoPadding`, `TravelPadding`              |
//! | [`travel`]    | `TravelTime` trait, `ConstantTravelTime`, `TravelMatrix`   |
//! | [`location`]  | `LocationChoice` trait, `HomeLocation`, `UniformZones`     |
//! | [`trip`]      | `Trip`, `TripChain`                                        |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                       |
//!
//! # Insertion model (summary)
//!
//! ```text
//! classify(candidate)        -> NoConflict | CompleteOverlap | Split | Anterior | Posterior
//! CompleteOverlap            -> rejected
//! Split                      -> primary work cut around the candidate (work project only)
//! otherwise                  -> fit(prior, candidate, post) inside [early, late]
//! after every commit         -> check_integrity()  (Err = resolver defect)
//! ```
//!
//! Project schedules fit without padding.  Person schedules reserve travel
//! time between consecutive episodes and from home to the first one.

pub mod conflict;
pub mod episode;
pub mod error;
mod fit;
pub mod location;
pub mod padding;
pub mod person;
pub mod project;
pub mod schedule;
pub mod travel;
pub mod trip;

#[cfg(test)]
mod tests;

pub use conflict::{ConflictReport, ConflictType, classify};
pub use episode::Episode;
pub use error::{ScheduleError, ScheduleResult};
pub use location::{HomeLocation, LocationChoice, UniformZones};
pub use padding::{NoPadding, Padding, TravelPadding};
pub use person::PersonSchedule;
pub use project::{ProjectKind, ProjectSchedule};
pub use schedule::{DayBounds, InsertOutcome, Rejection, Schedule, is_legal_split};
pub use travel::{ConstantTravelTime, TravelMatrix, TravelTime};
pub use trip::{Trip, TripChain};
