//! SQLite output backend (feature `sqlite`).
//!
//! Appends to a single `vsc_log.db` file in the configured output directory
//! with two tables: `hour_log` and `day_log`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{DayRow, HourRow, OutputResult};

pub const DB_FILE: &str = "vsc_log.db";

/// Writes simulation records to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) the database in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join(DB_FILE))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS hour_log (
                 agent_starts           INTEGER NOT NULL,
                 agents_working         INTEGER NOT NULL,
                 hour                   INTEGER NOT NULL,
                 interactions_estimated INTEGER NOT NULL,
                 interactions_handled   INTEGER NOT NULL,
                 asr_minutes            REAL    NOT NULL,
                 timestamp              TEXT    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS day_log (
                 agent_starts           INTEGER NOT NULL,
                 interactions_estimated INTEGER NOT NULL,
                 interactions_handled   INTEGER NOT NULL,
                 handle_time_minutes    REAL    NOT NULL,
                 asr_minutes            REAL    NOT NULL,
                 utilization            REAL    NOT NULL,
                 unfinished             INTEGER NOT NULL,
                 timestamp              TEXT    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_hour(&mut self, row: &HourRow) -> OutputResult<()> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO hour_log \
             (agent_starts, agents_working, hour, interactions_estimated, \
              interactions_handled, asr_minutes, timestamp) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        )?;
        stmt.execute(rusqlite::params![
            row.agent_starts,
            row.agents_working,
            row.hour,
            row.interactions_estimated as i64,
            row.interactions_handled as i64,
            row.asr_minutes,
            row.timestamp.to_rfc3339(),
        ])?;
        Ok(())
    }

    fn write_day(&mut self, row: &DayRow) -> OutputResult<()> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO day_log \
             (agent_starts, interactions_estimated, interactions_handled, \
              handle_time_minutes, asr_minutes, utilization, unfinished, timestamp) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )?;
        stmt.execute(rusqlite::params![
            row.agent_starts,
            row.interactions_estimated as i64,
            row.interactions_handled as i64,
            row.handle_time_minutes,
            row.asr_minutes,
            row.utilization,
            row.unfinished as i64,
            row.timestamp.to_rfc3339(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
