//! Gauss-Jordan elimination.

use num_traits::Zero;
use tracing::{debug, trace};

use super::matrix::{scale_row, subtract_scaled, Matrix};

/// Shape of a reduced system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// A pivot in every variable column
    Unique,
    /// Consistent, but these variable columns have no pivot
    Underdetermined { free: Vec<usize> },
    /// Some row reads `0 = c` with `c != 0`
    Inconsistent,
}

/// A matrix in reduced row-echelon form with its pivot columns.
#[derive(Debug, Clone)]
pub struct Reduction {
    matrix: Matrix,
    /// Pivot column of row `i`, for the first `rank` rows
    pivots: Vec<usize>,
}

impl Reduction {
    #[cfg(test)]
    pub(crate) fn from_parts(matrix: Matrix, pivots: Vec<usize>) -> Self {
        Self { matrix, pivots }
    }

    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Pivot columns in row order.
    pub fn pivot_columns(&self) -> &[usize] {
        &self.pivots
    }

    pub fn rank(&self) -> usize {
        self.pivots.len()
    }

    /// Variable columns with no pivot.
    pub fn free_columns(&self) -> Vec<usize> {
        (0..self.matrix.variable_count())
            .filter(|col| !self.pivots.contains(col))
            .collect()
    }

    /// Classify the reduced system.
    pub fn classify(&self) -> Classification {
        let contradiction = (0..self.matrix.row_count())
            .any(|row| self.matrix.is_zero_row(row) && !self.matrix.augmented(row).is_zero());
        if contradiction {
            return Classification::Inconsistent;
        }

        let free = self.free_columns();
        if free.is_empty() {
            Classification::Unique
        } else {
            Classification::Underdetermined { free }
        }
    }
}

/// Reduce a matrix to reduced row-echelon form.
///
/// Columns are visited left to right. For each one the first row at or
/// below the current pivot row with a non-zero entry is swapped up, scaled
/// to a leading 1, and subtracted from every other row. A column with no
/// candidate is left without a pivot and the pivot row stays where it is.
pub fn reduce(mut matrix: Matrix) -> Reduction {
    let rows = matrix.row_count();
    let mut pivots = Vec::new();

    for col in 0..matrix.variable_count() {
        let pivot_row = pivots.len();
        if pivot_row == rows {
            break;
        }

        let Some(found) = (pivot_row..rows).find(|&r| !matrix.get(r, col).is_zero()) else {
            trace!(column = col, "no pivot");
            continue;
        };
        if found != pivot_row {
            trace!(from = found, to = pivot_row, "swapping rows");
            matrix.swap_rows(found, pivot_row);
        }

        let inverse = matrix.get(pivot_row, col).recip();
        let pivot = scale_row(matrix.row(pivot_row), &inverse);
        for r in 0..rows {
            if r == pivot_row || matrix.get(r, col).is_zero() {
                continue;
            }
            let factor = matrix.get(r, col).clone();
            let reduced = subtract_scaled(matrix.row(r), &pivot, &factor);
            matrix.set_row(r, reduced);
        }
        matrix.set_row(pivot_row, pivot);

        trace!(row = pivot_row, column = col, "pivot");
        pivots.push(col);
    }

    debug!(
        rows,
        columns = matrix.variable_count(),
        rank = pivots.len(),
        "reduced matrix"
    );
    Reduction { matrix, pivots }
}
