//! Ground costs and the transport objective.
//!
//! The OT baseline scores plans against the squared-Euclidean distance
//! between every source and every target location.  The same cost, paired
//! with [`transport_cost`], scores a reconstructed flow matrix so both
//! plans can be compared on one scale.

use ndarray::{Array2, Zip};

use crate::matrix::ensure_shape;
use crate::{CoreResult, LocationTable, Matrix};

/// `|sources| x |targets|` matrix of squared Euclidean distances.
pub fn ground_cost(source: &LocationTable, target: &LocationTable) -> Matrix {
    let (s, t) = (source.points(), target.points());
    Array2::from_shape_fn((s.len(), t.len()), |(i, j)| s[i].distance_sq(t[j]))
}

/// `Σ cost[i][j] · plan[i][j]`.
///
/// # Errors
/// [`CoreError::ShapeMismatch`][crate::CoreError::ShapeMismatch] if the two
/// matrices do not have the same shape.
pub fn transport_cost(cost: &Matrix, plan: &Matrix) -> CoreResult<f64> {
    ensure_shape(plan, cost.dim(), "transport plan")?;
    Ok(Zip::from(cost).and(plan).fold(0.0, |acc, &c, &p| acc + c * p))
}
