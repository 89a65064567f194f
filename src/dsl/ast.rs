//! Syntax-level types for equation input.

use std::collections::BTreeMap;

use num_traits::Zero;

use crate::number::Rational;

/// Key of a linear combination: the constant slot or a named unknown.
///
/// `Constant` orders before every variable, which keeps constants first
/// when a combination is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    /// The standalone constant term
    Constant,
    /// A named unknown
    Variable(String),
}

impl Symbol {
    /// Create a variable symbol.
    pub fn variable(name: impl Into<String>) -> Self {
        Symbol::Variable(name.into())
    }

    /// The variable name, if this is not the constant slot.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Symbol::Constant => None,
            Symbol::Variable(name) => Some(name),
        }
    }
}

/// Linear combination parsed from one side of an equation.
///
/// Repeated mentions of a variable accumulate into one coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearForm {
    coefficients: BTreeMap<String, Rational>,
    constant: Rational,
}

impl Default for LinearForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearForm {
    /// Create an empty form (the number zero).
    pub fn new() -> Self {
        Self {
            coefficients: BTreeMap::new(),
            constant: Rational::zero(),
        }
    }

    /// Add `coefficient * name` to the form.
    pub fn add_term(&mut self, name: &str, coefficient: Rational) {
        *self
            .coefficients
            .entry(name.to_string())
            .or_insert_with(Rational::zero) += coefficient;
    }

    /// Add a standalone number to the form.
    pub fn add_constant(&mut self, value: Rational) {
        self.constant += value;
    }

    /// Coefficient of `name`, zero if it never appeared.
    pub fn coefficient(&self, name: &str) -> Rational {
        self.coefficients
            .get(name)
            .cloned()
            .unwrap_or_else(Rational::zero)
    }

    /// All variable coefficients, sorted by name.
    pub fn coefficients(&self) -> &BTreeMap<String, Rational> {
        &self.coefficients
    }

    /// The standalone constant.
    pub fn constant(&self) -> &Rational {
        &self.constant
    }

    /// Names of every variable mentioned, even if its coefficient cancelled out.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.coefficients.keys().map(String::as_str)
    }
}

/// Both sides of a parsed `lhs = rhs` equation.
#[derive(Debug, Clone, PartialEq)]
pub struct EquationAst {
    pub lhs: LinearForm,
    pub rhs: LinearForm,
}

/// A whole system in one of the three accepted input shapes.
///
/// Every equation of a system shares the same shape.
#[derive(Debug, Clone, PartialEq)]
pub enum SystemInput {
    /// Free-form equation strings such as `4x - 5y + 3z - y = 9`
    Text(Vec<String>),
    /// Coefficient maps; the [`Symbol::Constant`] entry is the right-hand side
    Maps(Vec<BTreeMap<Symbol, Rational>>),
    /// Positional coefficients for `a, b, c, ...` followed by the right-hand side
    Sequences(Vec<Vec<Rational>>),
}

impl SystemInput {
    /// Build text input from any list of strings.
    pub fn text<I, S>(equations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SystemInput::Text(equations.into_iter().map(Into::into).collect())
    }

    /// Build text input from a multi-line block, one equation per line.
    ///
    /// Blank lines and surrounding whitespace are discarded.
    pub fn from_text(block: &str) -> Self {
        SystemInput::Text(
            block
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Build mapping input.
    pub fn maps(equations: Vec<BTreeMap<Symbol, Rational>>) -> Self {
        SystemInput::Maps(equations)
    }

    /// Build positional input.
    pub fn sequences(equations: Vec<Vec<Rational>>) -> Self {
        SystemInput::Sequences(equations)
    }

    /// Number of equations.
    pub fn len(&self) -> usize {
        match self {
            SystemInput::Text(rows) => rows.len(),
            SystemInput::Maps(rows) => rows.len(),
            SystemInput::Sequences(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
