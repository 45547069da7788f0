//! Unit tests for ot-balance.

use ndarray::{Axis, array};
use ot_core::Matrix;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn assert_uniform_marginals(m: &Matrix, tol: f64) {
    let (rows, cols) = m.dim();
    for (i, s) in m.sum_axis(Axis(1)).iter().enumerate() {
        assert!((s - 1.0 / rows as f64).abs() < tol, "row {i} sum = {s}");
    }
    for (j, s) in m.sum_axis(Axis(0)).iter().enumerate() {
        assert!((s - 1.0 / cols as f64).abs() < tol, "col {j} sum = {s}");
    }
}

// ── Zero-line repair ──────────────────────────────────────────────────────────

#[cfg(test)]
mod zero_lines {
    use super::*;
    use crate::{ZeroLines, fix_zero_lines, fix_zero_lines_in_place};

    #[test]
    fn zero_row_filled_with_inverse_width() {
        let input = array![[1.0, 2.0, 3.0, 4.0], [0.0, 0.0, 0.0, 0.0], [4.0, 3.0, 2.0, 1.0]];
        let got = fix_zero_lines(&input);
        assert_eq!(got.row(1), array![0.25, 0.25, 0.25, 0.25]);
        assert_eq!(got.row(0), input.row(0));
        assert_eq!(got.row(2), input.row(2));
    }

    #[test]
    fn input_is_not_mutated() {
        let input = array![[0.0, 0.0], [1.0, 1.0]];
        let _ = fix_zero_lines(&input);
        assert_eq!(input.row(0), array![0.0, 0.0]);
    }

    #[test]
    fn zero_column_filled_with_inverse_height() {
        let mut got = array![[1.0, 0.0, 2.0], [3.0, 0.0, 4.0]];
        let fixed = fix_zero_lines_in_place(&mut got);
        assert_eq!(fixed, ZeroLines { rows: vec![], cols: vec![1] });
        assert_eq!(got, array![[1.0, 0.5, 2.0], [3.0, 0.5, 4.0]]);
    }

    #[test]
    fn row_pass_runs_before_column_pass() {
        // Column 1 is zero in the input but no longer once row 1 is seeded.
        let mut got = array![[2.0, 0.0], [0.0, 0.0]];
        let fixed = fix_zero_lines_in_place(&mut got);
        assert_eq!(fixed, ZeroLines { rows: vec![1], cols: vec![] });
        assert_eq!(got, array![[2.0, 0.0], [0.5, 0.5]]);
    }

    #[test]
    fn all_zero_matrix_becomes_uniform_rows() {
        let mut got = Matrix::zeros((2, 3));
        let fixed = fix_zero_lines_in_place(&mut got);
        assert_eq!(fixed.rows, vec![0, 1]);
        assert!(fixed.cols.is_empty());
        assert!(got.iter().all(|&v| v == 1.0 / 3.0));
    }

    #[test]
    fn nothing_to_fix() {
        let mut got = array![[1.0, 0.0], [0.0, 1.0]];
        assert!(fix_zero_lines_in_place(&mut got).is_empty());
        assert_eq!(got, array![[1.0, 0.0], [0.0, 1.0]]);
    }

    #[test]
    fn empty_matrix_untouched() {
        let mut got = Matrix::zeros((0, 4));
        assert!(fix_zero_lines_in_place(&mut got).is_empty());
        assert_eq!(got.dim(), (0, 4));
    }
}

// ── Balancing ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod balancing {
    use ot_core::CoreError;
    use ot_core::matrix::l1_distance;

    use super::*;
    use crate::{BalanceConfig, Balancer, balance, marginal_residuals};

    #[test]
    fn positive_square_matrix_converges() {
        let got = balance(&array![
            [4.0, 1.0, 2.0, 3.0],
            [1.0, 2.0, 3.0, 4.0],
            [3.0, 4.0, 1.0, 2.0],
            [2.0, 3.0, 4.0, 1.0],
        ]);
        assert_uniform_marginals(&got, 0.01);
    }

    #[test]
    fn rectangular_matrix_converges() {
        let got = balance(&array![[4.0, 1.0, 2.0], [1.0, 2.0, 3.0]]);
        assert_eq!(got.dim(), (2, 3));
        assert_uniform_marginals(&got, 0.01);
    }

    #[test]
    fn sparse_matrix_without_zero_lines_converges() {
        let got = balance(&array![[0.2, 0.0, 0.1], [0.0, 0.6, 0.0], [0.1, 0.0, 0.0]]);
        assert_uniform_marginals(&got, 0.01);
        assert!(got.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn flow_matrix_with_zero_row() {
        let got = balance(&array![[0.5, 0.5], [0.0, 0.0]]);
        for &v in &got {
            assert!((v - 0.25).abs() < 1e-12, "got {v}");
        }
    }

    #[test]
    fn already_balanced_is_fixed_point() {
        let input = Matrix::from_elem((2, 4), 1.0 / 8.0);
        assert_eq!(marginal_residuals(&input), (0.0, 0.0));
        let got = balance(&input);
        assert!(l1_distance(&got, &input).unwrap() < 1e-12);
    }

    #[test]
    fn report_counts_iterations_and_zero_lines() {
        let out = Balancer::default().balance(&array![[1.0, 0.0], [0.0, 0.0]]);
        assert_eq!(out.report.iterations, 1000);
        assert_eq!(out.report.zero_lines.rows, vec![1]);
        assert!(out.report.converged);
        assert!(out.report.row_residual < 0.01);
        assert!(out.report.col_residual < 1e-12);
    }

    #[test]
    fn tolerance_stops_early() {
        let balancer = Balancer::new(BalanceConfig { iterations: 1000, tolerance: Some(1e-9) }).unwrap();
        let out = balancer.balance(&array![[1.0, 2.0], [3.0, 4.0]]);
        assert!(out.report.converged);
        assert!(out.report.iterations < 1000);
        assert_uniform_marginals(&out.matrix, 1e-9);
    }

    #[test]
    fn zero_iterations_only_repairs() {
        let balancer = Balancer::new(BalanceConfig { iterations: 0, tolerance: None }).unwrap();
        let out = balancer.balance(&array![[2.0, 2.0], [0.0, 0.0]]);
        assert_eq!(out.report.iterations, 0);
        assert_eq!(out.matrix, array![[2.0, 2.0], [0.5, 0.5]]);
    }

    #[test]
    fn invalid_tolerance_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = Balancer::new(BalanceConfig { iterations: 10, tolerance: Some(bad) }).unwrap_err();
            assert!(matches!(err, CoreError::Config(_)));
        }
    }

    #[test]
    fn empty_matrix_keeps_shape() {
        let out = Balancer::default().balance(&Matrix::zeros((3, 0)));
        assert_eq!(out.matrix.dim(), (3, 0));
        assert_eq!(out.report.iterations, 0);
    }

    #[test]
    fn default_config() {
        let cfg = BalanceConfig::default();
        assert_eq!(cfg.iterations, 1000);
        assert_eq!(cfg.tolerance, None);
    }
}
