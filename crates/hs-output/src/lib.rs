//! `hs-output`: schedule output writers for hhsched.
//!
//! Three backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                                          |
//! |-----------|---------|--------------------------------------------------------|
//! | *(none)*  | CSV     | `trips.csv`, `episodes.csv`, `run_summary.csv`         |
//! | `sqlite`  | SQLite  | `output.db`                                            |
//! | `parquet` | Parquet | `trips.parquet`, `episodes.parquet`, `run_summary.parquet` |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`ScheduleOutputObserver`], which implements `hs_scheduler::RunObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hs_output::{CsvWriter, ScheduleOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = ScheduleOutputObserver::new(writer);
//! scheduler.run(&population, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ScheduleOutputObserver;
pub use row::{EpisodeRow, RunSummaryRow, TripRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;
