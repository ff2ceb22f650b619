//! Integration tests for hs-output.

use hs_core::{Activity, DistributionId, HouseholdId, PersonId, SchedulerConfig, Time, ZoneId};
use hs_distribution::{DistributionEntry, DistributionTableBuilder};
use hs_household::{EmploymentStatus, HouseholdBuilder, Occupation, PersonBuilder, Population, Workplace};
use hs_schedule::{ConstantTravelTime, UniformZones};
use hs_scheduler::{HouseholdSchedule, Scheduler, SchedulerBuilder};
use tempfile::TempDir;

use crate::row::{EpisodeRow, RunSummaryRow, TripRow};

// ── Helpers ───────────────────────────────────────────────────────────────────

const HOME: ZoneId = ZoneId(1);
const WORK: ZoneId = ZoneId(2);
const PRIMARY_WORK: u16 = 16;

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn config() -> SchedulerConfig {
    SchedulerConfig { household_iterations: 1, ..SchedulerConfig::default() }
}

/// A scheduler in which the only activity anyone does is 08:00-16:00 work.
fn scheduler() -> Scheduler<ConstantTravelTime, UniformZones> {
    let cfg = config();
    let mut never = DistributionEntry::zeros(96, 11);
    never.set_frequency(0, 1.0);

    let mut work = DistributionEntry::zeros(96, 11);
    work.set_frequency(1, 1.0);
    work.set_start_weight(16, 1, 1.0);
    for b in 0..96 {
        work.set_duration_weight(b, 32, 1.0);
    }

    let mut builder = DistributionTableBuilder::new(&cfg);
    for id in 0..cfg.number_of_distributions {
        let entry = if id == PRIMARY_WORK { work.clone() } else { never.clone() };
        builder = builder.entry(DistributionId(id), entry);
    }
    let travel = ConstantTravelTime { intrazonal: Time::ZERO, interzonal: Time::minutes(20) };
    SchedulerBuilder::new(cfg, builder.build().unwrap(), travel, UniformZones::new(vec![WORK]))
        .build()
        .unwrap()
}

fn population() -> Population {
    let worker = PersonBuilder::new(PersonId(0), 40)
        .employment(EmploymentStatus::FullTime, Occupation::Office)
        .workplace(Workplace::Zone(WORK))
        .build();
    let retiree = PersonBuilder::new(PersonId(1), 70).build();
    Population::new(vec![
        HouseholdBuilder::new(HouseholdId(1), HOME).persons(vec![worker, retiree]).build().unwrap(),
    ])
    .unwrap()
}

fn worker_day() -> HouseholdSchedule {
    let population = population();
    scheduler().schedule_household(&population.households()[0], 0).unwrap()
}

fn trip_row(person: u32, trip: u32, joint_tour: Option<u32>) -> TripRow {
    TripRow {
        household: 1,
        iteration: 0,
        person,
        chain: 0,
        trip,
        purpose: Activity::JointOther,
        origin: 1,
        destination: 2,
        start: 600,
        duration: 20,
        joint_tour,
        representative: person == 0,
    }
}

fn episode_row(zone: Option<u32>) -> EpisodeRow {
    EpisodeRow {
        household: 1,
        iteration: 0,
        person: 0,
        activity: Activity::PrimaryWork,
        start: 480,
        end: 960,
        zone,
        joint: false,
    }
}

fn summary_row() -> RunSummaryRow {
    RunSummaryRow {
        households_scheduled:  4,
        households_failed:     1,
        episodes_generated:    12,
        occurrences_abandoned: 2,
        infeasible_samples:    7,
        episodes_skipped:      1,
        skipped_weight:        2.5,
    }
}

// ── Rows ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod row_tests {
    use super::*;

    #[test]
    fn episodes_are_flattened_in_member_order() {
        let rows = EpisodeRow::from_schedule(&worker_day());
        assert_eq!(rows, vec![EpisodeRow {
            household: 1,
            iteration: 0,
            person:    0,
            activity:  Activity::PrimaryWork,
            start:     480,
            end:       960,
            zone:      Some(2),
            joint:     false,
        }]);
    }

    #[test]
    fn trips_carry_chain_and_trip_indices() {
        let rows = TripRow::from_schedule(&worker_day());
        let summary: Vec<_> = rows
            .iter()
            .map(|r| (r.person, r.chain, r.trip, r.purpose, r.origin, r.destination, r.start))
            .collect();
        assert_eq!(summary, vec![
            (0, 0, 0, Activity::PrimaryWork, 1, 2, 460),
            (0, 0, 1, Activity::Home, 2, 1, 960),
        ]);
        assert!(rows.iter().all(|r| r.joint_tour.is_none() && !r.representative));
    }

    #[test]
    fn summary_copies_every_tally() {
        let stats = hs_scheduler::StatsSnapshot {
            households_scheduled:  3,
            households_failed:     1,
            episodes_generated:    9,
            occurrences_abandoned: 2,
            infeasible_samples:    5,
            episodes_skipped:      1,
            skipped_weight:        1.5,
        };
        let row = RunSummaryRow::from(&stats);
        assert_eq!(row.households_scheduled, 3);
        assert_eq!(row.infeasible_samples, 5);
        assert_eq!(row.skipped_weight, 1.5);
    }
}

// ── CSV ───────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use super::*;
    use crate::csv::CsvWriter;
    use crate::observer::ScheduleOutputObserver;
    use crate::writer::OutputWriter;

    fn read(dir: &TempDir, name: &str) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(dir.path().join(name)).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("trips.csv").exists());
        assert!(dir.path().join("episodes.csv").exists());
        assert!(dir.path().join("run_summary.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("episodes.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["household", "iteration", "person", "activity", "start", "end", "zone", "joint"]);

        let mut rdr = csv::Reader::from_path(dir.path().join("trips.csv")).unwrap();
        assert_eq!(rdr.headers().unwrap().len(), 12);
    }

    #[test]
    fn csv_missing_joint_tour_is_an_empty_field() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_trips(&[trip_row(0, 0, Some(3)), trip_row(1, 0, None)]).unwrap();
        w.finish().unwrap();

        let rows = read(&dir, "trips.csv");
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][5], "joint_other");
        assert_eq!(&rows[0][10], "3");
        assert_eq!(&rows[0][11], "1");
        assert_eq!(&rows[1][10], "");
        assert_eq!(&rows[1][11], "0");
    }

    #[test]
    fn csv_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_summary(&summary_row()).unwrap();
        w.finish().unwrap();

        let rows = read(&dir, "run_summary.csv");
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "4");
        assert_eq!(&rows[0][6], "2.5");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_batch_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_trips(&[]).unwrap();
        w.write_episodes(&[]).unwrap();
    }

    #[test]
    fn integration_csv() {
        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = ScheduleOutputObserver::new(writer);
        let stats = scheduler().run(&population(), &mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");
        assert_eq!(obs.households_written(), 1);

        assert_eq!(read(&dir, "episodes.csv").len(), 1);
        assert_eq!(read(&dir, "trips.csv").len(), 2);

        let summary = read(&dir, "run_summary.csv");
        assert_eq!(summary.len(), 1);
        assert_eq!(&summary[0][0], stats.households_scheduled.to_string());
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use super::*;
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn open(dir: &TempDir) -> rusqlite::Connection {
        rusqlite::Connection::open(dir.path().join("output.db")).unwrap()
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_trip_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_trips(&[trip_row(0, 0, Some(0)), trip_row(0, 1, Some(0)), trip_row(1, 0, Some(0))]).unwrap();
        w.finish().unwrap();

        let count: i64 = open(&dir).query_row("SELECT COUNT(*) FROM trips", [], |r| r.get(0)).unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn sqlite_unlocated_episode_stores_null() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_episodes(&[episode_row(None)]).unwrap();
        w.finish().unwrap();

        let (activity, zone): (String, Option<i64>) = open(&dir)
            .query_row("SELECT activity, zone FROM episodes", [], |r| Ok((r.get(0)?, r.get(1)?)))
            .unwrap();
        assert_eq!(activity, "primary_work");
        assert_eq!(zone, None);
    }

    #[test]
    fn sqlite_summary() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        w.write_summary(&summary_row()).unwrap();
        w.finish().unwrap();

        let (scheduled, weight): (i64, f64) = open(&dir)
            .query_row(
                "SELECT households_scheduled, skipped_weight FROM run_summary",
                [],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .unwrap();
        assert_eq!(scheduled, 4);
        assert_eq!(weight, 2.5);
    }
}

// ── Parquet tests ─────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "parquet"))]
mod parquet_tests {
    use arrow::datatypes::DataType;
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

    use super::*;
    use crate::parquet::ParquetWriter;
    use crate::writer::OutputWriter;

    #[test]
    fn parquet_files_created() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert!(dir.path().join("trips.parquet").exists());
        assert!(dir.path().join("episodes.parquet").exists());
        assert!(dir.path().join("run_summary.parquet").exists());
    }

    #[test]
    fn parquet_episode_round_trip() {
        let dir = tmp();
        let mut w = ParquetWriter::new(dir.path()).unwrap();
        w.write_episodes(&[episode_row(Some(2)), episode_row(None)]).unwrap();
        w.finish().unwrap();

        let file = std::fs::File::open(dir.path().join("episodes.parquet")).unwrap();
        let builder = ParquetRecordBatchReaderBuilder::try_new(file).unwrap();
        let schema = builder.schema().clone();
        let batches: Vec<_> = builder.build().unwrap().map(|b| b.unwrap()).collect();
        let total_rows: usize = batches.iter().map(|b| b.num_rows()).sum();
        assert_eq!(total_rows, 2);

        let zone = schema.field_with_name("zone").unwrap();
        assert!(zone.is_nullable());
        assert_eq!(*schema.field_with_name("activity").unwrap().data_type(), DataType::Utf8);
        assert_eq!(batches[0].column(6).null_count(), 1);
    }

    #[test]
    fn parquet_finish_required() {
        let dir = tmp();
        {
            let mut w = ParquetWriter::new(dir.path()).unwrap();
            w.write_trips(&[trip_row(0, 0, None)]).unwrap();
            // Dropped without finish(): no footer.
        }

        let file = std::fs::File::open(dir.path().join("trips.parquet")).unwrap();
        assert!(ParquetRecordBatchReaderBuilder::try_new(file).is_err());
    }
}
