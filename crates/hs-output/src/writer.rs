//! The `OutputWriter` trait implemented by all backend writers.

use crate::{EpisodeRow, OutputResult, RunSummaryRow, TripRow};

/// Trait implemented by the CSV, SQLite and Parquet writers.
///
/// When driven by [`ScheduleOutputObserver`][crate::ScheduleOutputObserver]
/// errors are stored and retrieved with
/// [`take_error`][crate::ScheduleOutputObserver::take_error].
pub trait OutputWriter {
    /// Write the trips of one household iteration.
    fn write_trips(&mut self, rows: &[TripRow]) -> OutputResult<()>;

    /// Write the episodes of one household iteration.
    fn write_episodes(&mut self, rows: &[EpisodeRow]) -> OutputResult<()>;

    /// Write the run's final tallies.
    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
