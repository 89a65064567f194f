//! Solved system result set.

use std::collections::BTreeMap;
use std::fmt;

use super::render::{to_markup, Notation};
use super::SymbolicValue;
use crate::number::Rational;

/// The solution of a system: one value per unknown, ordered by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    values: Vec<SymbolicValue>,
    approximate: bool,
}

impl Solution {
    pub(crate) fn new(values: Vec<SymbolicValue>, approximate: bool) -> Self {
        Self {
            values,
            approximate,
        }
    }

    /// Values for every unknown, sorted by name.
    pub fn values(&self) -> &[SymbolicValue] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolicValue> {
        self.values.iter()
    }

    /// Look up an unknown by name.
    pub fn get(&self, name: &str) -> Option<&SymbolicValue> {
        self.values.iter().find(|value| value.name() == name)
    }

    /// Whether this is a least-squares approximation rather than an exact solution.
    pub fn is_approximation(&self) -> bool {
        self.approximate
    }

    /// Whether every unknown has a single numeric value.
    pub fn is_unique(&self) -> bool {
        self.values.iter().all(SymbolicValue::is_resolved)
    }

    /// Names of the unconstrained unknowns.
    pub fn free_variables(&self) -> Vec<&str> {
        self.values
            .iter()
            .filter(|value| value.is_free())
            .map(SymbolicValue::name)
            .collect()
    }

    /// Name to value mapping, if the solution is unique.
    pub fn assignment(&self) -> Option<BTreeMap<String, Rational>> {
        if !self.is_unique() {
            return None;
        }
        Some(
            self.values
                .iter()
                .map(|value| (value.name().to_string(), value.constant()))
                .collect(),
        )
    }

    /// Render as `a = 4, b = -3`.
    ///
    /// Free unknowns are left out since they equal themselves, unless every
    /// unknown is free.
    pub fn render(&self, notation: Notation) -> String {
        let shown: Vec<&SymbolicValue> = if self.values.iter().all(SymbolicValue::is_free) {
            self.values.iter().collect()
        } else {
            self.values.iter().filter(|value| !value.is_free()).collect()
        };
        shown
            .iter()
            .map(|value| value.render(notation))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// HTML-safe rendering of [`Solution::render`].
    pub fn to_markup(&self, notation: Notation) -> String {
        to_markup(&self.render(notation))
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Notation::Rational))
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = &'a SymbolicValue;
    type IntoIter = std::slice::Iter<'a, SymbolicValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
