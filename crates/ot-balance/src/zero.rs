//! Zero-line repair.
//!
//! A row or column that sums to zero cannot be rescaled to a positive target
//! by multiplication.  Before balancing, each such line is overwritten with
//! `1 / len`, where `len` is the number of entries in the line.
//!
//! Rows are repaired first, then columns, in a single pass each.  Column
//! sums are taken *after* the row pass, so a column only counts as zero if
//! it is still zero once zero rows have been filled.  Lines that were
//! non-zero are never modified.

use ndarray::Axis;
use ot_core::Matrix;

/// Indices of the lines that were overwritten.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZeroLines {
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
}

impl ZeroLines {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }
}

/// Copy of `m` with every all-zero line seeded uniformly.
pub fn fix_zero_lines(m: &Matrix) -> Matrix {
    let mut out = m.clone();
    fix_zero_lines_in_place(&mut out);
    out
}

/// In-place variant of [`fix_zero_lines`] for a caller-owned matrix.
pub fn fix_zero_lines_in_place(m: &mut Matrix) -> ZeroLines {
    let mut fixed = ZeroLines::default();
    if m.is_empty() {
        return fixed;
    }

    let (rows, cols) = m.dim();

    for (r, mut row) in m.rows_mut().into_iter().enumerate() {
        if row.sum() == 0.0 {
            row.fill(1.0 / cols as f64);
            fixed.rows.push(r);
        }
    }

    let col_sums = m.sum_axis(Axis(0));
    for (c, mut col) in m.columns_mut().into_iter().enumerate() {
        if col_sums[c] == 0.0 {
            col.fill(1.0 / rows as f64);
            fixed.cols.push(c);
        }
    }

    fixed
}
