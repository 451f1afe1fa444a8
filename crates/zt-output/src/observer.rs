//! `CensusObserver<W>` — bridges `SimObserver` to a `CensusWriter`.

use zt_sim::{Census, RunSummary, SimObserver};

use crate::row::CensusRow;
use crate::writer::CensusWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes one [`CensusRow`] per turn to any
/// [`CensusWriter`] backend.
///
/// Observer hooks cannot fail, so the first writer error is held back and
/// later writes still run.  Check [`take_error`][Self::take_error] once the
/// run returns.
pub struct CensusObserver<W: CensusWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: CensusWriter> CensusObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// The first write error of the run, if any.  Cleared by the call.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to recover an in-memory buffer).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result
            && self.last_error.is_none()
        {
            self.last_error = Some(e);
        }
    }
}

impl<W: CensusWriter> SimObserver for CensusObserver<W> {
    fn on_turn_end(&mut self, census: &Census) {
        let result = self.writer.write_census(&CensusRow::from(census));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _summary: &RunSummary) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
