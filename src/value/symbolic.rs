//! Symbolic variable values.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Add;

use num_traits::{One, Zero};

use super::render::{render, Notation};
use crate::dsl::Symbol;
use crate::number::{round_to, Rational};

/// The value of one unknown: `constant + Σ coefficient · free_variable`.
///
/// A resolved unknown holds only the constant entry. A free unknown holds
/// itself with coefficient 1 and nothing else. Zero coefficients are pruned,
/// except that a value never becomes empty: it falls back to a zero constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolicValue {
    name: String,
    terms: BTreeMap<Symbol, Rational>,
}

impl SymbolicValue {
    /// A value fixed to `value`.
    pub fn resolved(name: impl Into<String>, value: Rational) -> Self {
        Self::from_terms(name, [(Symbol::Constant, value)].into_iter().collect())
    }

    /// An unconstrained unknown, equal to itself.
    pub fn free(name: impl Into<String>) -> Self {
        let name = name.into();
        let terms = [(Symbol::Variable(name.clone()), Rational::one())]
            .into_iter()
            .collect();
        Self::from_terms(name, terms)
    }

    /// Build from raw terms, pruning zero coefficients.
    pub fn from_terms(name: impl Into<String>, terms: BTreeMap<Symbol, Rational>) -> Self {
        let mut value = Self {
            name: name.into(),
            terms,
        };
        value.prune();
        value
    }

    fn prune(&mut self) {
        self.terms.retain(|_, coefficient| !coefficient.is_zero());
        if self.terms.is_empty() {
            self.terms.insert(Symbol::Constant, Rational::zero());
        }
    }

    /// Name of the unknown this value belongs to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All non-zero terms, constant first and then free variables by name.
    pub fn terms(&self) -> &BTreeMap<Symbol, Rational> {
        &self.terms
    }

    /// The constant part.
    pub fn constant(&self) -> Rational {
        self.terms
            .get(&Symbol::Constant)
            .cloned()
            .unwrap_or_else(Rational::zero)
    }

    /// Coefficient of the free variable `name`.
    pub fn coefficient(&self, name: &str) -> Rational {
        self.terms
            .get(&Symbol::variable(name))
            .cloned()
            .unwrap_or_else(Rational::zero)
    }

    /// Names of the free variables this value depends on.
    pub fn free_variables(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().filter_map(Symbol::as_variable)
    }

    /// Whether the value is a plain number.
    pub fn is_resolved(&self) -> bool {
        self.free_variables().next().is_none()
    }

    /// Whether the unknown is unconstrained (equal only to itself).
    pub fn is_free(&self) -> bool {
        self.terms.len() == 1 && self.coefficient(&self.name).is_one()
    }

    /// Multiply every term by `factor`, keeping the name.
    pub fn scaled(&self, factor: &Rational) -> Self {
        let terms = self
            .terms
            .iter()
            .map(|(symbol, coefficient)| (symbol.clone(), coefficient * factor))
            .collect();
        Self::from_terms(self.name.clone(), terms)
    }

    /// Round every coefficient to `precision` decimal digits.
    ///
    /// Terms that round to zero disappear.
    pub fn rounded(&self, precision: usize) -> Self {
        let terms = self
            .terms
            .iter()
            .map(|(symbol, coefficient)| (symbol.clone(), round_to(coefficient, precision)))
            .collect();
        Self::from_terms(self.name.clone(), terms)
    }

    /// Evaluate with concrete values for the free variables.
    ///
    /// Returns `None` if a free variable is missing from `assignment`.
    pub fn evaluate(&self, assignment: &BTreeMap<String, Rational>) -> Option<Rational> {
        let mut total = Rational::zero();
        for (symbol, coefficient) in &self.terms {
            match symbol {
                Symbol::Constant => total += coefficient,
                Symbol::Variable(name) => total += coefficient * assignment.get(name)?,
            }
        }
        Some(total)
    }

    /// Render in the given notation, e.g. `y = 1/2 + z`.
    pub fn render(&self, notation: Notation) -> String {
        render(self, notation)
    }

    /// HTML-safe rendering.
    pub fn to_markup(&self, notation: Notation) -> String {
        super::render::to_markup(&self.render(notation))
    }
}

impl Add for SymbolicValue {
    type Output = SymbolicValue;

    /// Sum like terms. The result keeps the left operand's name.
    fn add(mut self, rhs: SymbolicValue) -> SymbolicValue {
        for (symbol, coefficient) in rhs.terms {
            *self.terms.entry(symbol).or_insert_with(Rational::zero) += coefficient;
        }
        self.prune();
        self
    }
}

impl fmt::Display for SymbolicValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Notation::Rational))
    }
}
