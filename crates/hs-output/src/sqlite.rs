//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `trips`, `episodes` and `run_summary`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{EpisodeRow, OutputResult, RunSummaryRow, TripRow};

/// Writes schedule output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS trips (
                 household      INTEGER NOT NULL,
                 iteration      INTEGER NOT NULL,
                 person         INTEGER NOT NULL,
                 chain          INTEGER NOT NULL,
                 trip           INTEGER NOT NULL,
                 purpose        TEXT    NOT NULL,
                 origin         INTEGER NOT NULL,
                 destination    INTEGER NOT NULL,
                 start          INTEGER NOT NULL,
                 duration       INTEGER NOT NULL,
                 joint_tour     INTEGER,
                 representative INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS episodes (
                 household INTEGER NOT NULL,
                 iteration INTEGER NOT NULL,
                 person    INTEGER NOT NULL,
                 activity  TEXT    NOT NULL,
                 start     INTEGER NOT NULL,
                 end       INTEGER NOT NULL,
                 zone      INTEGER,
                 joint     INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS run_summary (
                 households_scheduled  INTEGER NOT NULL,
                 households_failed     INTEGER NOT NULL,
                 episodes_generated    INTEGER NOT NULL,
                 occurrences_abandoned INTEGER NOT NULL,
                 infeasible_samples    INTEGER NOT NULL,
                 episodes_skipped      INTEGER NOT NULL,
                 skipped_weight        REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_trips(&mut self, rows: &[TripRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO trips \
                 (household, iteration, person, chain, trip, purpose, origin, \
                  destination, start, duration, joint_tour, representative) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.household,
                    row.iteration,
                    row.person,
                    row.chain,
                    row.trip,
                    row.purpose.as_str(),
                    row.origin,
                    row.destination,
                    row.start,
                    row.duration,
                    row.joint_tour,
                    row.representative as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_episodes(&mut self, rows: &[EpisodeRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO episodes \
                 (household, iteration, person, activity, start, end, zone, joint) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.household,
                    row.iteration,
                    row.person,
                    row.activity.as_str(),
                    row.start,
                    row.end,
                    row.zone,
                    row.joint as i64,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO run_summary \
             (households_scheduled, households_failed, episodes_generated, \
              occurrences_abandoned, infeasible_samples, episodes_skipped, skipped_weight) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            rusqlite::params![
                row.households_scheduled,
                row.households_failed,
                row.episodes_generated,
                row.occurrences_abandoned,
                row.infeasible_samples,
                row.episodes_skipped,
                row.skipped_weight,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
