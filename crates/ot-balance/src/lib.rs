//! `ot-balance` — coerce a non-negative matrix toward uniform marginals.
//!
//! The OT baseline solves with uniform marginals: every row of an
//! `r x c` plan sums to `1/r` and every column to `1/c`.  This crate pushes
//! an arbitrary non-negative matrix (a reconstructed flow matrix, a cost
//! matrix) toward that form by alternating row and column rescaling.
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`zero`]    | `fix_zero_lines`, `fix_zero_lines_in_place`, `ZeroLines`|
//! | [`balance`] | `BalanceConfig`, `Balancer`, `Balanced`, `balance`      |
//!
//! Balancing is an approximation procedure: after the default 1000
//! iterations, row and column sums are typically within `0.01` of their
//! targets, not exactly equal.

pub mod balance;
pub mod zero;

#[cfg(test)]
mod tests;

pub use balance::{BalanceConfig, BalanceReport, Balanced, Balancer, balance, marginal_residuals};
pub use zero::{ZeroLines, fix_zero_lines, fix_zero_lines_in_place};
