//! System assembly.

use std::collections::BTreeSet;

use tracing::debug;

use super::equation::Equation;
use super::validate::{validate_sequences, validate_system};
use crate::dsl::SystemInput;
use crate::error::Result;
use crate::solver::Matrix;

/// A validated system of linear equations ready for solving.
#[derive(Debug, Clone, PartialEq)]
pub struct System {
    /// Equations in input order
    equations: Vec<Equation>,
    /// Sorted union of every variable name (matrix columns)
    variables: Vec<String>,
}

impl System {
    /// Normalize input of any shape into a system.
    pub fn from_input(input: SystemInput) -> Result<Self> {
        let equations = match input {
            SystemInput::Text(lines) => lines
                .iter()
                .enumerate()
                .map(|(i, line)| Equation::parse(line, i + 1))
                .collect::<Result<Vec<_>>>()?,
            SystemInput::Maps(maps) => maps.iter().map(Equation::from_map).collect(),
            SystemInput::Sequences(rows) => {
                validate_sequences(&rows)?;
                rows.iter()
                    .map(|row| Equation::from_sequence(row))
                    .collect::<Result<Vec<_>>>()?
            }
        };
        Self::from_equations(equations)
    }

    /// Collect the variable columns of already-normalized equations.
    pub fn from_equations(equations: Vec<Equation>) -> Result<Self> {
        let variables: Vec<String> = equations
            .iter()
            .flat_map(Equation::variables)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();

        let system = Self {
            equations,
            variables,
        };
        validate_system(&system)?;

        debug!(
            equations = system.equations.len(),
            variables = system.variables.len(),
            "built equation system"
        );
        Ok(system)
    }

    pub fn equations(&self) -> &[Equation] {
        &self.equations
    }

    /// Variable names in column order.
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    /// Build the `equations × (variables + 1)` augmented matrix.
    ///
    /// Variables an equation does not mention get a zero coefficient.
    pub fn augmented_matrix(&self) -> Matrix {
        let n = self.variables.len();
        let mut matrix = Matrix::zeros(self.equations.len(), n);
        for (i, equation) in self.equations.iter().enumerate() {
            for (j, name) in self.variables.iter().enumerate() {
                matrix.set(i, j, equation.coefficient(name));
            }
            matrix.set(i, n, equation.value().clone());
        }
        matrix
    }
}
