//! `ScheduleOutputObserver<W>`: bridges `RunObserver` to an `OutputWriter`.

use hs_scheduler::{HouseholdSchedule, RunObserver, StatsSnapshot};
use tracing::debug;

use crate::row::{EpisodeRow, RunSummaryRow, TripRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`RunObserver`] that writes every household's episodes and trips, and
/// the final run tallies, to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `RunObserver` methods
/// have no return value.  After `scheduler.run()` returns, check for errors
/// with [`take_error`][Self::take_error].
///
/// The writer is finished in `on_run_end`.  A run that stops on a household
/// error never reaches that hook; call [`into_writer`][Self::into_writer] and
/// `finish` yourself in that case.
pub struct ScheduleOutputObserver<W: OutputWriter> {
    writer:     W,
    households: u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ScheduleOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, households: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `scheduler.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Household iterations written so far.
    pub fn households_written(&self) -> u64 {
        self.households
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> RunObserver for ScheduleOutputObserver<W> {
    fn on_household(&mut self, schedule: &HouseholdSchedule) {
        let episodes = EpisodeRow::from_schedule(schedule);
        if !episodes.is_empty() {
            let result = self.writer.write_episodes(&episodes);
            self.store_err(result);
        }

        let trips = TripRow::from_schedule(schedule);
        if !trips.is_empty() {
            let result = self.writer.write_trips(&trips);
            self.store_err(result);
        }
        self.households += 1;
    }

    fn on_run_end(&mut self, stats: &StatsSnapshot) {
        let result = self.writer.write_summary(&RunSummaryRow::from(stats));
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
        debug!(households = self.households, "output finished");
    }
}
