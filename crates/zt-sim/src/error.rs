use thiserror::Error;
use zt_core::CoreError;
use zt_grid::GridError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    /// Only non-recoverable grid errors reach the caller; a blocked or
    /// off-board pace is forfeited inside the turn loop.
    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("zombie seeding stalled: placed {placed} of {requested} after {attempts} failed attempts")]
    SeedingStalled {
        placed:    usize,
        requested: usize,
        attempts:  u32,
    },
}

pub type SimResult<T> = Result<T, SimError>;
