//! Normalized equations.

use std::collections::BTreeMap;

use num_traits::Zero;

use crate::dsl::{self, EquationAst, Symbol};
use crate::error::{EqsysError, Result};
use crate::number::Rational;

/// Maximum number of unknowns positional input can name (`a` to `z`).
pub const MAX_ANONYMOUS_VARIABLES: usize = 26;

/// One equation in the form `Σ coefficient · variable = value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    coefficients: BTreeMap<String, Rational>,
    /// Augmented (right-hand side) value
    value: Rational,
}

impl Equation {
    /// Parse equation text. `index` is the 1-based position in the system.
    pub fn parse(text: &str, index: usize) -> Result<Self> {
        dsl::parse_equation(text, index).map(Self::from_sides)
    }

    /// Move everything to the left: coefficients of `lhs - rhs`, value `rhs - lhs`.
    pub fn from_sides(ast: EquationAst) -> Self {
        let mut coefficients = ast.lhs.coefficients().clone();
        for (name, coefficient) in ast.rhs.coefficients() {
            *coefficients
                .entry(name.clone())
                .or_insert_with(Rational::zero) -= coefficient;
        }
        let value = ast.rhs.constant() - ast.lhs.constant();
        Self {
            coefficients,
            value,
        }
    }

    /// Build from a coefficient map; the constant entry is the right-hand side.
    pub fn from_map(map: &BTreeMap<Symbol, Rational>) -> Self {
        let mut coefficients = BTreeMap::new();
        let mut value = Rational::zero();
        for (symbol, number) in map {
            match symbol {
                Symbol::Constant => value = number.clone(),
                Symbol::Variable(name) => {
                    coefficients.insert(name.clone(), number.clone());
                }
            }
        }
        Self {
            coefficients,
            value,
        }
    }

    /// Build from positional coefficients for `a, b, c, ...`; the last entry is the value.
    pub fn from_sequence(row: &[Rational]) -> Result<Self> {
        let (value, coefficients) = row
            .split_last()
            .ok_or_else(|| EqsysError::dimension("empty coefficient sequence"))?;
        if coefficients.len() > MAX_ANONYMOUS_VARIABLES {
            return Err(EqsysError::dimension(format!(
                "positional input supports at most {} unknowns, got {}",
                MAX_ANONYMOUS_VARIABLES,
                coefficients.len()
            )));
        }

        Ok(Self {
            coefficients: coefficients
                .iter()
                .enumerate()
                .map(|(i, c)| (anonymous_name(i), c.clone()))
                .collect(),
            value: value.clone(),
        })
    }

    /// Coefficient of `name`, zero if absent.
    pub fn coefficient(&self, name: &str) -> Rational {
        self.coefficients
            .get(name)
            .cloned()
            .unwrap_or_else(Rational::zero)
    }

    pub fn coefficients(&self) -> &BTreeMap<String, Rational> {
        &self.coefficients
    }

    pub fn value(&self) -> &Rational {
        &self.value
    }

    /// Every variable the equation mentions.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.coefficients.keys().map(String::as_str)
    }

    /// Left side minus right side under `assignment`.
    ///
    /// Returns `None` if the assignment misses a variable of this equation.
    pub fn residual(&self, assignment: &BTreeMap<String, Rational>) -> Option<Rational> {
        let mut total = -self.value.clone();
        for (name, coefficient) in &self.coefficients {
            total += coefficient * assignment.get(name)?;
        }
        Some(total)
    }
}

/// Name of the `index`-th positional unknown.
fn anonymous_name(index: usize) -> String {
    char::from(b'a' + index as u8).to_string()
}
