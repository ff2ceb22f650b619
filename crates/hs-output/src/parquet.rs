//! Parquet output backend (feature `parquet`).
//!
//! Creates three files in the configured output directory:
//! - `trips.parquet`
//! - `episodes.parquet`
//! - `run_summary.parquet`

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{
    BooleanBuilder, Float64Builder, Int32Builder, StringBuilder, UInt32Builder, UInt64Builder,
};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{EpisodeRow, OutputResult, RunSummaryRow, TripRow};

fn trip_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("household",      DataType::UInt32,  false),
        Field::new("iteration",      DataType::UInt32,  false),
        Field::new("person",         DataType::UInt32,  false),
        Field::new("chain",          DataType::UInt32,  false),
        Field::new("trip",           DataType::UInt32,  false),
        Field::new("purpose",        DataType::Utf8,    false),
        Field::new("origin",         DataType::UInt32,  false),
        Field::new("destination",    DataType::UInt32,  false),
        Field::new("start",          DataType::Int32,   false),
        Field::new("duration",       DataType::Int32,   false),
        Field::new("joint_tour",     DataType::UInt32,  true),
        Field::new("representative", DataType::Boolean, false),
    ]))
}

fn episode_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("household", DataType::UInt32,  false),
        Field::new("iteration", DataType::UInt32,  false),
        Field::new("person",    DataType::UInt32,  false),
        Field::new("activity",  DataType::Utf8,    false),
        Field::new("start",     DataType::Int32,   false),
        Field::new("end",       DataType::Int32,   false),
        Field::new("zone",      DataType::UInt32,  true),
        Field::new("joint",     DataType::Boolean, false),
    ]))
}

fn summary_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("households_scheduled",  DataType::UInt64,  false),
        Field::new("households_failed",     DataType::UInt64,  false),
        Field::new("episodes_generated",    DataType::UInt64,  false),
        Field::new("occurrences_abandoned", DataType::UInt64,  false),
        Field::new("infeasible_samples",    DataType::UInt64,  false),
        Field::new("episodes_skipped",      DataType::UInt64,  false),
        Field::new("skipped_weight",        DataType::Float64, false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

fn open(dir: &Path, name: &str, schema: &Arc<Schema>) -> OutputResult<ArrowWriter<File>> {
    let file = File::create(dir.join(name))?;
    Ok(ArrowWriter::try_new(file, Arc::clone(schema), Some(snappy_props()))?)
}

/// Writes schedule output to three Parquet files.
///
/// `finish()` **must** be called to write the Parquet file footers; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    trips:          Option<ArrowWriter<File>>,
    episodes:       Option<ArrowWriter<File>>,
    summary:        Option<ArrowWriter<File>>,
    trip_schema:    Arc<Schema>,
    episode_schema: Arc<Schema>,
    summary_schema: Arc<Schema>,
}

impl ParquetWriter {
    /// Create the three Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let trip_schema = trip_schema();
        let episode_schema = episode_schema();
        let summary_schema = summary_schema();

        Ok(Self {
            trips: Some(open(dir, "trips.parquet", &trip_schema)?),
            episodes: Some(open(dir, "episodes.parquet", &episode_schema)?),
            summary: Some(open(dir, "run_summary.parquet", &summary_schema)?),
            trip_schema,
            episode_schema,
            summary_schema,
        })
    }
}

impl OutputWriter for ParquetWriter {
    fn write_trips(&mut self, rows: &[TripRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.trips.as_mut() else {
            return Ok(());
        };

        let mut households      = UInt32Builder::new();
        let mut iterations      = UInt32Builder::new();
        let mut persons         = UInt32Builder::new();
        let mut chains          = UInt32Builder::new();
        let mut trips           = UInt32Builder::new();
        let mut purposes        = StringBuilder::new();
        let mut origins         = UInt32Builder::new();
        let mut destinations    = UInt32Builder::new();
        let mut starts          = Int32Builder::new();
        let mut durations       = Int32Builder::new();
        let mut joint_tours     = UInt32Builder::new();
        let mut representatives = BooleanBuilder::new();

        for row in rows {
            households.append_value(row.household);
            iterations.append_value(row.iteration);
            persons.append_value(row.person);
            chains.append_value(row.chain);
            trips.append_value(row.trip);
            purposes.append_value(row.purpose.as_str());
            origins.append_value(row.origin);
            destinations.append_value(row.destination);
            starts.append_value(row.start);
            durations.append_value(row.duration);
            joint_tours.append_option(row.joint_tour);
            representatives.append_value(row.representative);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.trip_schema),
            vec![
                Arc::new(households.finish()),
                Arc::new(iterations.finish()),
                Arc::new(persons.finish()),
                Arc::new(chains.finish()),
                Arc::new(trips.finish()),
                Arc::new(purposes.finish()),
                Arc::new(origins.finish()),
                Arc::new(destinations.finish()),
                Arc::new(starts.finish()),
                Arc::new(durations.finish()),
                Arc::new(joint_tours.finish()),
                Arc::new(representatives.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_episodes(&mut self, rows: &[EpisodeRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.episodes.as_mut() else {
            return Ok(());
        };

        let mut households = UInt32Builder::new();
        let mut iterations = UInt32Builder::new();
        let mut persons    = UInt32Builder::new();
        let mut activities = StringBuilder::new();
        let mut starts     = Int32Builder::new();
        let mut ends       = Int32Builder::new();
        let mut zones      = UInt32Builder::new();
        let mut joints     = BooleanBuilder::new();

        for row in rows {
            households.append_value(row.household);
            iterations.append_value(row.iteration);
            persons.append_value(row.person);
            activities.append_value(row.activity.as_str());
            starts.append_value(row.start);
            ends.append_value(row.end);
            zones.append_option(row.zone);
            joints.append_value(row.joint);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.episode_schema),
            vec![
                Arc::new(households.finish()),
                Arc::new(iterations.finish()),
                Arc::new(persons.finish()),
                Arc::new(activities.finish()),
                Arc::new(starts.finish()),
                Arc::new(ends.finish()),
                Arc::new(zones.finish()),
                Arc::new(joints.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        let Some(writer) = self.summary.as_mut() else {
            return Ok(());
        };

        let mut scheduled  = UInt64Builder::new();
        let mut failed     = UInt64Builder::new();
        let mut generated  = UInt64Builder::new();
        let mut abandoned  = UInt64Builder::new();
        let mut infeasible = UInt64Builder::new();
        let mut skipped    = UInt64Builder::new();
        let mut weight     = Float64Builder::new();

        scheduled.append_value(row.households_scheduled);
        failed.append_value(row.households_failed);
        generated.append_value(row.episodes_generated);
        abandoned.append_value(row.occurrences_abandoned);
        infeasible.append_value(row.infeasible_samples);
        skipped.append_value(row.episodes_skipped);
        weight.append_value(row.skipped_weight);

        let batch = RecordBatch::try_new(
            Arc::clone(&self.summary_schema),
            vec![
                Arc::new(scheduled.finish()),
                Arc::new(failed.finish()),
                Arc::new(generated.finish()),
                Arc::new(abandoned.finish()),
                Arc::new(infeasible.finish()),
                Arc::new(skipped.finish()),
                Arc::new(weight.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if let Some(w) = self.trips.take() {
            w.close()?;
        }
        if let Some(w) = self.episodes.take() {
            w.close()?;
        }
        if let Some(w) = self.summary.take() {
            w.close()?;
        }
        Ok(())
    }
}
