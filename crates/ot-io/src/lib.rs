//! `ot-io` — file adapters between the simulation scripts and the core.
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`loader`] | `load_events_csv`/`_reader`, `load_locations_csv`/`_reader`|
//! | [`matrix`] | `write_matrix_csv`/`_writer`, `read_matrix_csv`/`_reader`  |
//! | [`error`]  | `IoError`, `IoResult<T>`                                   |
//!
//! # Usage
//!
//! ```rust,ignore
//! use ot_io::{load_events_csv, load_locations_csv, write_matrix_csv};
//!
//! let sources = load_locations_csv(Path::new("sources.csv"))?;
//! let targets = load_locations_csv(Path::new("targets.csv"))?;
//! let events  = load_events_csv(Path::new("collections.csv"))?;
//! let flow = ot_flow::build_flow_matrix(&events, &sources, &targets, Default::default());
//! write_matrix_csv(Path::new("flow.csv"), &flow)?;
//! ```

pub mod error;
pub mod loader;
pub mod matrix;


pub use error::{IoError, IoResult};
pub use loader::{load_events_csv, load_events_reader, load_locations_csv, load_locations_reader};
pub use matrix::{read_matrix_csv, read_matrix_reader, write_matrix_csv, write_matrix_writer};
