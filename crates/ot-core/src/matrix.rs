//! Dense plan and cost matrices.
//!
//! Every plan in the workspace is an `ndarray::Array2<f64>`: rows are
//! source slots, columns are target slots.  Sums, line updates and indexing
//! come straight from `ndarray`; this module only adds the checked
//! construction and the few whole-matrix operations shared by several
//! crates.

use ndarray::{Array2, Zip};

use crate::{CoreError, CoreResult};

/// A `sources x targets` matrix of `f64`.
pub type Matrix = Array2<f64>;

/// Build from nested rows.  Every row must have the length of the first.
pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> CoreResult<Matrix> {
    let cols = rows.first().map_or(0, |r| r.as_ref().len());
    let mut data = Vec::with_capacity(rows.len() * cols);
    for (i, row) in rows.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != cols {
            return Err(CoreError::RaggedRows { row: i, expected: cols, got: row.len() });
        }
        data.extend_from_slice(row);
    }
    Ok(Array2::from_shape_vec((rows.len(), cols), data)?)
}

/// Fail with [`CoreError::ShapeMismatch`] unless `m` has `expected` shape.
pub fn ensure_shape(m: &Matrix, expected: (usize, usize), what: &'static str) -> CoreResult<()> {
    if m.dim() == expected {
        Ok(())
    } else {
        Err(CoreError::ShapeMismatch { what, expected, got: m.dim() })
    }
}

/// Divide every entry by the grand total so the matrix sums to 1.
///
/// A zero total leaves the matrix untouched and returns `false`.
pub fn normalize_total(m: &mut Matrix) -> bool {
    let total = m.sum();
    if total == 0.0 {
        return false;
    }
    m.mapv_inplace(|v| v / total);
    true
}

/// Sum of absolute element-wise differences.
pub fn l1_distance(a: &Matrix, b: &Matrix) -> CoreResult<f64> {
    ensure_shape(b, a.dim(), "l1 distance operand")?;
    Ok(Zip::from(a).and(b).fold(0.0, |acc, &x, &y| acc + (x - y).abs()))
}
