//! `ot-flow` — reconstruct a transport plan from agent visit events.
//!
//! # Pipeline
//!
//! ```text
//! events ──group_by_agent──▶ per-agent tracks (first-appearance order)
//!        ──segment─────────▶ excursions (source-group, target-group)
//!        ──deposit─────────▶ weighted trips into a sources × targets matrix
//!        ──normalize───────▶ flow matrix summing to 1 (or all zero)
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`event`]    | `VisitEvent`, `AgentTrack`, `group_by_agent`          |
//! | [`segment`]  | `Excursion`, `segment`                                |
//! | [`observer`] | `TripObserver`, `NoopObserver`, `TripLog`, `Trip`     |
//! | [`builder`]  | `FlowConfig`, `FlowBuilder`, `build_flow_matrix`      |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Segments agents on Rayon's thread pool.                |
//! | `fx-hash`  | FxHash for agent grouping and coordinate lookups.      |
//! | `serde`    | Serde derives on `FlowConfig`, `VisitEvent`, `Trip`.   |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ot_core::LocationTable;
//! use ot_flow::{FlowConfig, build_flow_matrix};
//!
//! let flow = build_flow_matrix(&events, &sources, &targets, FlowConfig::default());
//! assert!(flow.iter().all(|&v| v == 0.0) || (flow.sum() - 1.0).abs() < 1e-9);
//! ```

pub mod builder;
pub mod event;
pub mod observer;
pub mod segment;


pub use builder::{FlowBuilder, FlowConfig, build_flow_matrix};
pub use event::{AgentTrack, VisitEvent, group_by_agent};
pub use observer::{NoopObserver, Trip, TripLog, TripObserver};
pub use segment::{Excursion, segment};
