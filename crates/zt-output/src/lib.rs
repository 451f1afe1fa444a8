//! `zt-output` — run reports for the rust_zt outbreak simulator.
//!
//! One row per turn, written through any [`CensusWriter`] and driven by
//! [`CensusObserver`], which implements `zt_sim::SimObserver`.  The CSV
//! backend writes:
//!
//! ```text
//! turn,humans,zombies,converted,forfeited
//! 1,99,6,1,3
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use zt_output::{CensusObserver, CsvWriter};
//!
//! let writer = CsvWriter::from_path(Path::new("census.csv"))?;
//! let mut obs = CensusObserver::new(writer);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::CensusObserver;
pub use row::CensusRow;
pub use writer::CensusWriter;
