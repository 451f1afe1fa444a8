//! `zt-agent` — the agent model: who agents are and how they decide to move.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`species`] | `Species` — compatibility table; `Paces` — per-species step size |
//! | [`agent`]   | `Agent` — id, species, current and previous position            |
//! | [`world`]   | `WorldView<'a>` — read-only registry view, nearest-human search  |
//! | [`policy`]  | `MovementPolicy` trait, `SpeciesPolicy`, `ForcedDirection`       |
//!
//! # Design notes
//!
//! Species behaviour is a tagged enum plus a small dispatch table rather than
//! a trait-object hierarchy: `match` on [`Species`] is exhaustive, so adding
//! a variant is a compile error everywhere a rule is missing.
//!
//! Movement decisions are the one pluggable seam.  The simulation driver is
//! generic over [`MovementPolicy`]; [`SpeciesPolicy`] is the real rule set
//! and [`ForcedDirection`] pins every decision for scripted scenarios.

pub mod agent;
pub mod policy;
pub mod species;
pub mod world;

#[cfg(test)]
mod tests;

pub use agent::Agent;
pub use policy::{ForcedDirection, MovementPolicy, SpeciesPolicy};
pub use species::{Paces, Species};
pub use world::WorldView;
