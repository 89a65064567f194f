//! Solver results.
//!
//! Every unknown of a solved system gets a [`SymbolicValue`]: a constant
//! plus a linear combination of free unknowns. The whole set is returned as
//! a [`Solution`], which also records whether it is exact or a least-squares
//! approximation.

mod render;
mod solution;
mod symbolic;

pub use render::{render_expression, to_markup, Notation};
pub use solution::Solution;
pub use symbolic::SymbolicValue;
