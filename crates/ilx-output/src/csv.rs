//! CSV event-log backend.
//!
//! Creates one file, `events.csv`, with a `tick,kind,message` header row.

use std::fs::File;
use std::path::Path;

use ::csv::Writer;

use ilx_core::Tick;
use ilx_sim::{EventKind, Logger};

use crate::{EventRow, OutputResult};

/// A [`Logger`] that appends every event to a CSV file.
///
/// Write errors are stored internally (first one wins) because `log` has no
/// return value; check [`take_error`][Self::take_error] after the run.
pub struct CsvEventLog {
    writer: Writer<File>,
    last_error: Option<crate::OutputError>,
    finished: bool,
}

impl CsvEventLog {
    /// Open (or create) `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        let mut writer = Writer::from_path(path)?;
        writer.write_record(["tick", "kind", "message"])?;
        Ok(Self {
            writer,
            last_error: None,
            finished: false,
        })
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<crate::OutputError> {
        self.last_error.take()
    }

    /// Flush the underlying file.  Idempotent — safe to call more than once.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }

    fn write_row(&mut self, row: &EventRow) -> OutputResult<()> {
        self.writer.write_record([
            row.tick.to_string(),
            row.kind.clone(),
            row.message.clone(),
        ])?;
        Ok(())
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

impl Logger for CsvEventLog {
    fn log(&mut self, now: Tick, kind: EventKind, message: &str) {
        let row = EventRow {
            tick: now.0,
            kind: kind.to_string(),
            message: message.to_string(),
        };
        let result = self.write_row(&row);
        self.store_err(result);
    }
}
