//! `ot-core` — foundational types for the `abm_ot` workspace.
//!
//! This crate is a dependency of every other `ot-*` crate.  It has no `ot-*`
//! dependencies and only small external ones (`ndarray`, `rand`,
//! `thiserror`, `tracing`, plus optional `serde` and `rustc-hash`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `SlotId`                                   |
//! | [`geo`]         | `GridPoint`, squared distance                         |
//! | [`location`]    | `LocationTable`, `SiteTables`, `Route`                |
//! | [`matrix`]      | `Matrix` (`Array2<f64>`), `from_rows`, `l1_distance`  |
//! | [`cost`]        | `ground_cost`, `transport_cost`                       |
//! | [`unique`]      | `make_unique` (duplicate-free location sets)          |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `serde`   | Adds `Serialize`/`Deserialize` to all public data types. |
//! | `fx-hash` | FxHash instead of SipHash for coordinate lookups.        |

pub mod cost;
pub mod error;
pub mod geo;
pub mod ids;
pub mod location;
pub mod matrix;
pub mod unique;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cost::{ground_cost, transport_cost};
pub use error::{CoreError, CoreResult};
pub use geo::GridPoint;
pub use ids::{AgentId, SlotId};
pub use location::{LocationTable, Route, SiteTables};
pub use matrix::Matrix;
pub use unique::make_unique;
