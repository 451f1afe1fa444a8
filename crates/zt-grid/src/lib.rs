//! `zt-grid` — the authoritative placement state of a board.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`store`]    | `GridStore` — cells, registry, `place`, `find`, `count`        |
//! | [`movement`] | `propose` / `move_agent` / `revert` and conversion resolution  |
//! | [`outcome`]  | `MoveOutcome`, `Conversion`                                    |
//! | [`audit`]    | `check_invariants` — registry/cell consistency check           |
//! | [`error`]    | `GridError`, `GridResult<T>`                                   |
//!
//! # Invariants
//!
//! Between any two public calls:
//!
//! 1. Every registered agent sits in exactly one cell, the one matching its
//!    `position`, and appears exactly once in the registry.  No cell holds
//!    an id the registry does not know.
//! 2. No cell holds a Human and a Zombie together.  Mixed occupancy exists
//!    only inside the call that resolves it into all-Zombie.
//! 3. The board's width and height never change.
//!
//! A failing call leaves the board untouched.

pub mod audit;
pub mod error;
pub mod movement;
pub mod outcome;
pub mod store;


pub use error::{GridError, GridResult};
pub use outcome::{Conversion, MoveOutcome};
pub use store::GridStore;
