//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `trips.csv`
//! - `episodes.csv`
//! - `run_summary.csv`
//!
//! Optional columns are written as empty fields; booleans as `0`/`1`.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EpisodeRow, OutputResult, RunSummaryRow, TripRow};

pub const TRIP_HEADER: [&str; 12] = [
    "household", "iteration", "person", "chain", "trip", "purpose",
    "origin", "destination", "start", "duration", "joint_tour", "representative",
];

pub const EPISODE_HEADER: [&str; 8] =
    ["household", "iteration", "person", "activity", "start", "end", "zone", "joint"];

pub const SUMMARY_HEADER: [&str; 7] = [
    "households_scheduled", "households_failed", "episodes_generated",
    "occurrences_abandoned", "infeasible_samples", "episodes_skipped", "skipped_weight",
];

fn optional(v: Option<u32>) -> String {
    v.map(|v| v.to_string()).unwrap_or_default()
}

/// Writes schedule output to three CSV files.
pub struct CsvWriter {
    trips:    Writer<File>,
    episodes: Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trips = Writer::from_path(dir.join("trips.csv"))?;
        trips.write_record(TRIP_HEADER)?;

        let mut episodes = Writer::from_path(dir.join("episodes.csv"))?;
        episodes.write_record(EPISODE_HEADER)?;

        let mut summary = Writer::from_path(dir.join("run_summary.csv"))?;
        summary.write_record(SUMMARY_HEADER)?;

        Ok(Self { trips, episodes, summary, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_trips(&mut self, rows: &[TripRow]) -> OutputResult<()> {
        for row in rows {
            self.trips.write_record(&[
                row.household.to_string(),
                row.iteration.to_string(),
                row.person.to_string(),
                row.chain.to_string(),
                row.trip.to_string(),
                row.purpose.as_str().to_string(),
                row.origin.to_string(),
                row.destination.to_string(),
                row.start.to_string(),
                row.duration.to_string(),
                optional(row.joint_tour),
                (row.representative as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_episodes(&mut self, rows: &[EpisodeRow]) -> OutputResult<()> {
        for row in rows {
            self.episodes.write_record(&[
                row.household.to_string(),
                row.iteration.to_string(),
                row.person.to_string(),
                row.activity.as_str().to_string(),
                row.start.to_string(),
                row.end.to_string(),
                optional(row.zone),
                (row.joint as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.households_scheduled.to_string(),
            row.households_failed.to_string(),
            row.episodes_generated.to_string(),
            row.occurrences_abandoned.to_string(),
            row.infeasible_samples.to_string(),
            row.episodes_skipped.to_string(),
            row.skipped_weight.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trips.flush()?;
        self.episodes.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
