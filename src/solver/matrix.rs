//! Augmented coefficient matrix.

use num_traits::Zero;

use crate::number::Rational;

/// Augmented matrix `[A | b]`.
///
/// Rows are equations; the first `variables` columns hold coefficients and
/// the last column holds the constants. The shape never changes after
/// construction: rows are only replaced wholesale or swapped.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: Vec<Vec<Rational>>,
    variables: usize,
}

impl Matrix {
    /// Create a zero matrix with `rows` equations over `variables` unknowns.
    pub fn zeros(rows: usize, variables: usize) -> Self {
        Self {
            rows: vec![vec![Rational::zero(); variables + 1]; rows],
            variables,
        }
    }

    /// Build from full augmented rows. Every row must hold `variables + 1` entries.
    pub fn from_rows(rows: Vec<Vec<Rational>>, variables: usize) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == variables + 1));
        Self { rows, variables }
    }

    /// Number of rows (equations).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of coefficient columns (unknowns).
    pub fn variable_count(&self) -> usize {
        self.variables
    }

    /// Index of the augmented column.
    pub fn augmented_column(&self) -> usize {
        self.variables
    }

    /// Get element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> &Rational {
        &self.rows[row][col]
    }

    /// Set element at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: Rational) {
        self.rows[row][col] = value;
    }

    /// Borrow a whole row, augmented entry included.
    pub fn row(&self, index: usize) -> &[Rational] {
        &self.rows[index]
    }

    /// Replace a whole row.
    pub fn set_row(&mut self, index: usize, row: Vec<Rational>) {
        debug_assert_eq!(row.len(), self.variables + 1);
        self.rows[index] = row;
    }

    /// Exchange two rows.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }

    /// The constant of a row.
    pub fn augmented(&self, row: usize) -> &Rational {
        &self.rows[row][self.augmented_column()]
    }

    /// Whether every coefficient of a row is zero (the constant is ignored).
    pub fn is_zero_row(&self, row: usize) -> bool {
        self.rows[row][..self.augmented_column()]
            .iter()
            .all(Zero::is_zero)
    }

    /// Coefficient block `A` transposed, times the full matrix: `[AᵗA | Aᵗb]`.
    pub fn normal_equations(&self) -> Matrix {
        let n = self.variables;
        let mut normal = Matrix::zeros(n, n);
        for i in 0..n {
            for j in 0..=n {
                let mut sum = Rational::zero();
                for row in &self.rows {
                    if !row[i].is_zero() {
                        sum += &row[i] * &row[j];
                    }
                }
                normal.set(i, j, sum);
            }
        }
        normal
    }
}

/// `row * factor`, as a new row.
pub fn scale_row(row: &[Rational], factor: &Rational) -> Vec<Rational> {
    row.iter().map(|x| x * factor).collect()
}

/// `row - factor * pivot`, as a new row.
pub fn subtract_scaled(row: &[Rational], pivot: &[Rational], factor: &Rational) -> Vec<Rational> {
    row.iter()
        .zip(pivot)
        .map(|(x, p)| x - factor * p)
        .collect()
}
