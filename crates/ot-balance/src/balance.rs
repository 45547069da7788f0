//! Iterative row/column balancing (Sinkhorn-Knopp with uniform marginals).
//!
//! Each iteration rescales every row to sum `1/rows`, then every column to
//! sum `1/cols`.  The column pass perturbs the row sums, so after any finite
//! number of iterations only the column marginals are exact; the row
//! residual shrinks geometrically for matrices with positive support.
//!
//! Zero lines are repaired with [`fix_zero_lines_in_place`] first, so no
//! line sum is zero when the loop starts.

use ndarray::Axis;
use ot_core::{CoreError, CoreResult, Matrix};
use tracing::{debug, warn};

use crate::zero::{ZeroLines, fix_zero_lines_in_place};

/// Residual below which an untoleranced run reports `converged`.
pub const ACCEPT_RESIDUAL: f64 = 0.01;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BalanceConfig {
    /// Upper bound on row+column passes (default: 1000).
    pub iterations: usize,
    /// Stop early once both residuals are below this.  `None` always runs
    /// the full `iterations`.
    pub tolerance:  Option<f64>,
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self { iterations: 1000, tolerance: None }
    }
}

impl BalanceConfig {
    pub fn validate(&self) -> CoreResult<()> {
        match self.tolerance {
            Some(t) if !(t.is_finite() && t > 0.0) => {
                Err(CoreError::Config(format!("balance tolerance must be finite and positive, got {t}")))
            }
            _ => Ok(()),
        }
    }
}

/// Outcome of one balancing run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BalanceReport {
    /// Passes actually performed.
    pub iterations:   usize,
    /// max |row_sum - 1/rows| after the final pass.
    pub row_residual: f64,
    /// max |col_sum - 1/cols| after the final pass.
    pub col_residual: f64,
    /// `max(row_residual, col_residual)` is below the configured tolerance,
    /// or below [`ACCEPT_RESIDUAL`] when none was set.
    pub converged:    bool,
    /// Lines seeded by the zero-line repair.
    pub zero_lines:   ZeroLines,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Balanced {
    pub matrix: Matrix,
    pub report: BalanceReport,
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Balancer {
    config: BalanceConfig,
}

impl Balancer {
    pub fn new(config: BalanceConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Balance a copy of `m`.  The output always has `m`'s shape.
    pub fn balance(&self, m: &Matrix) -> Balanced {
        let mut out = m.clone();
        let report = self.balance_in_place(&mut out);
        Balanced { matrix: out, report }
    }

    pub fn balance_in_place(&self, m: &mut Matrix) -> BalanceReport {
        if m.is_empty() {
            return BalanceReport {
                iterations:   0,
                row_residual: 0.0,
                col_residual: 0.0,
                converged:    true,
                zero_lines:   ZeroLines::default(),
            };
        }

        let zero_lines = fix_zero_lines_in_place(m);
        let (rows, cols) = m.dim();
        let row_target = 1.0 / rows as f64;
        let col_target = 1.0 / cols as f64;

        let mut done = 0;
        for _ in 0..self.config.iterations {
            for mut row in m.rows_mut() {
                let s = row.sum();
                if s != 0.0 {
                    row.mapv_inplace(|v| v * (row_target / s));
                }
            }
            for mut col in m.columns_mut() {
                let s = col.sum();
                if s != 0.0 {
                    col.mapv_inplace(|v| v * (col_target / s));
                }
            }
            done += 1;

            if let Some(tol) = self.config.tolerance {
                let (rr, cr) = marginal_residuals(m);
                if rr.max(cr) < tol {
                    break;
                }
            }
        }

        let (row_residual, col_residual) = marginal_residuals(m);
        let limit = self.config.tolerance.unwrap_or(ACCEPT_RESIDUAL);
        let converged = row_residual.max(col_residual) < limit;

        if self.config.tolerance.is_some() && !converged {
            warn!(iterations = done, row_residual, col_residual, "balancing did not reach tolerance");
        }
        debug!(
            rows,
            cols,
            iterations = done,
            row_residual,
            col_residual,
            zero_rows = zero_lines.rows.len(),
            zero_cols = zero_lines.cols.len(),
            "matrix balanced"
        );

        BalanceReport { iterations: done, row_residual, col_residual, converged, zero_lines }
    }
}

/// `(max |row_sum - 1/rows|, max |col_sum - 1/cols|)`; `(0, 0)` when empty.
pub fn marginal_residuals(m: &Matrix) -> (f64, f64) {
    if m.is_empty() {
        return (0.0, 0.0);
    }
    let row_target = 1.0 / m.nrows() as f64;
    let col_target = 1.0 / m.ncols() as f64;
    let worst = |axis: Axis, target: f64| m.sum_axis(axis).fold(0.0, |acc: f64, &s| acc.max((s - target).abs()));
    (worst(Axis(1), row_target), worst(Axis(0), col_target))
}

/// Balance with the default 1000-iteration configuration.
pub fn balance(m: &Matrix) -> Matrix {
    Balancer::default().balance(m).matrix
}
