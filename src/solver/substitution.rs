//! Back-substitution over a reduced matrix.

use num_traits::Zero;

use super::elimination::Reduction;
use crate::value::SymbolicValue;

/// Derive a symbolic value for every column of a consistent reduction.
///
/// Columns without a pivot are free and equal themselves. Pivot rows are
/// walked from the bottom up, so every column to the right of a pivot
/// already has its value when the pivot row is expressed through it.
pub fn back_substitute(reduction: &Reduction, names: &[String]) -> Vec<SymbolicValue> {
    let matrix = reduction.matrix();
    let mut values: Vec<SymbolicValue> = names.iter().map(SymbolicValue::free).collect();

    for (row, &col) in reduction.pivot_columns().iter().enumerate().rev() {
        let pivot = matrix.get(row, col);
        let mut value = SymbolicValue::resolved(&names[col], matrix.augmented(row) / pivot);

        for (later, entry) in matrix.row(row)[..names.len()].iter().enumerate().skip(col + 1) {
            if entry.is_zero() {
                continue;
            }
            value = value + values[later].scaled(&-(entry / pivot));
        }
        values[col] = value;
    }

    values
}
