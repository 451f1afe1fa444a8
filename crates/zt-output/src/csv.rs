//! CSV output backend.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::Writer;

use crate::writer::CensusWriter;
use crate::{CensusRow, OutputError, OutputResult};

const HEADER: [&str; 5] = ["turn", "humans", "zombies", "converted", "forfeited"];

/// Writes census rows as CSV to any `io::Write`.
pub struct CsvWriter<W: io::Write> {
    inner:    Writer<W>,
    finished: bool,
}

impl<W: io::Write> CsvWriter<W> {
    /// Wrap `sink` and write the header row.
    pub fn new(sink: W) -> OutputResult<Self> {
        let mut inner = Writer::from_writer(sink);
        inner.write_record(HEADER)?;
        Ok(Self { inner, finished: false })
    }

    /// Flush and hand back the underlying sink.
    pub fn into_inner(self) -> OutputResult<W> {
        self.inner.into_inner().map_err(|e| OutputError::Io(e.into_error()))
    }
}

impl CsvWriter<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn from_path(path: &Path) -> OutputResult<Self> {
        let mut inner = Writer::from_path(path)?;
        inner.write_record(HEADER)?;
        Ok(Self { inner, finished: false })
    }
}

impl<W: io::Write> CensusWriter for CsvWriter<W> {
    fn write_census(&mut self, row: &CensusRow) -> OutputResult<()> {
        self.inner.write_record(&[
            row.turn.to_string(),
            row.humans.to_string(),
            row.zombies.to_string(),
            row.converted.to_string(),
            row.forfeited.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}
