//! `hs-household`: the read-only household and person inputs of the
//! scheduler.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`person`]      | `Person`, `Gender`, `EmploymentStatus`, `Occupation`, `StudentStatus`, `Workplace` |
//! | [`household`]   | `Household`, adult/child composition                      |
//! | [`status`]      | `PersonStatus`, `HouseholdStatus` (work/school day shape) |
//! | [`builder`]     | `HouseholdBuilder`, `PersonBuilder` (fluent construction) |
//! | [`population`]  | `Population` (owning store of households)                 |
//! | [`error`]       | `HouseholdError`, `HouseholdResult<T>`                    |
//!
//! Loading households from survey files is the application's job; this crate
//! only defines the shape the scheduler reads.

pub mod builder;
pub mod error;
pub mod household;
pub mod person;
pub mod population;
pub mod status;

#[cfg(test)]
mod tests;

pub use builder::{HouseholdBuilder, PersonBuilder};
pub use error::{HouseholdError, HouseholdResult};
pub use household::{ADULT_AGE, Household};
pub use person::{EmploymentStatus, Gender, Occupation, Person, StudentStatus, Workplace};
pub use population::Population;
pub use status::{HouseholdStatus, PersonStatus};
