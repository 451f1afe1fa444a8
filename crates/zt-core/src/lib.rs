//! `zt-core` — foundational types for the `rust_zt` outbreak simulator.
//!
//! This crate is a dependency of every other `zt-*` crate.  It has no `zt-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`geo`]         | `Position`, `GridBounds`                              |
//! | [`direction`]   | `Direction` — the 8 compass steps                     |
//! | [`time`]        | `Turn`                                                |
//! | [`config`]      | `OutbreakConfig`                                      |
//! | [`rng`]         | `SimRng` (seedable, threaded through the whole run)   |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod direction;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::OutbreakConfig;
pub use direction::Direction;
pub use error::{CoreError, CoreResult};
pub use geo::{GridBounds, Position};
pub use ids::AgentId;
pub use rng::SimRng;
pub use time::Turn;
