//! Least-squares fallback for inconsistent systems.

use tracing::debug;

use super::elimination::{reduce, Classification, Reduction};
use super::matrix::Matrix;
use crate::error::{EqsysError, Result};

/// Reduce the normal equations `AᵗA x = Aᵗb` of an augmented matrix.
///
/// `original` must be the matrix as built, before any elimination. The
/// normal system is square in the number of unknowns and may itself be
/// rank-deficient, in which case the reduction carries free columns.
pub fn least_squares(original: &Matrix) -> Result<Reduction> {
    let normal = original.normal_equations();
    debug!(
        size = normal.row_count(),
        "solving normal equations for least-squares approximation"
    );

    let reduction = reduce(normal);
    if reduction.classify() == Classification::Inconsistent {
        return Err(EqsysError::unsolvable("normal equations are inconsistent"));
    }
    Ok(reduction)
}
