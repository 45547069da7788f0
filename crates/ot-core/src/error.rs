//! Workspace base error type.
//!
//! The core never errors on data-quality problems (unmatched coordinates,
//! empty histories, zero lines).  `CoreError` is reserved for caller misuse:
//! inputs whose shapes disagree, ragged row data, oversized tables, or
//! invalid configuration.

use thiserror::Error;

/// Errors produced by `ot-core` and re-used by the other `ot-*` crates.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("{what}: expected a {}x{} matrix, got {}x{}", .expected.0, .expected.1, .got.0, .got.1)]
    ShapeMismatch {
        what:     &'static str,
        expected: (usize, usize),
        got:      (usize, usize),
    },

    #[error("row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        row:      usize,
        expected: usize,
        got:      usize,
    },

    #[error("location table has {len} entries; slot ids are u32")]
    TooManySlots { len: usize },

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Layout(#[from] ndarray::ShapeError),
}

/// Shorthand result type for all `ot-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
