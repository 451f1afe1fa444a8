//! The `CensusWriter` trait implemented by report backends.

use crate::{CensusRow, OutputResult};

/// Sink for per-turn census rows.
///
/// Errors are stored by the observer and retrieved with
/// [`CensusObserver::take_error`][crate::CensusObserver::take_error].
pub trait CensusWriter {
    /// Append one row.
    fn write_census(&mut self, row: &CensusRow) -> OutputResult<()>;

    /// Flush buffered rows.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
