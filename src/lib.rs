//! # Eqsys Core
//!
//! A parser and exact solver for systems of first-degree equations.
//!
//! This library provides:
//! - A parser for free-form equation text with nested parentheses, implicit
//!   and explicit multiplication, fractions and decimal literals
//! - Structured input as coefficient maps or positional sequences
//! - Gauss-Jordan elimination over exact rationals
//! - Symbolic solutions for underdetermined systems
//! - Least-squares approximation for inconsistent systems
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`dsl`] - Tokenizer and parser for equation text
//! - [`system`] - Equation normalization and system assembly
//! - [`solver`] - Matrix reduction, back-substitution and least squares
//! - [`value`] - Symbolic values, result sets and rendering
//! - [`number`] - Rational numbers and their textual forms
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! printf '4x - 5y + 3z - y = 9\n3x - 3y + 8z = 22 + 2y\n5x - 5 + 4y - 7z = 20\n' | eqsys
//! ```
//!
//! ### Library
//!
//! ```
//! use eqsys_core::{solve, SystemInput};
//!
//! let solution = solve(SystemInput::text(["a = 1 - b", "4 + a = 2a"])).unwrap();
//! assert_eq!(solution.to_string(), "a = 4, b = -3");
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmEquationSystem } from 'eqsys_core';
//!
//! const system = new WasmEquationSystem("x + y = 10\nx - y = 2");
//! console.log(system.solution());
//! ```

pub mod dsl;
pub mod error;
pub mod number;
pub mod solver;
pub mod system;
pub mod value;

// Re-export main types for convenience
pub use dsl::{Symbol, SystemInput};
pub use error::{EqsysError, Result};
pub use number::Rational;
pub use solver::{RankPolicy, Solver, SolverConfig};
pub use system::System;
pub use value::{Notation, Solution, SymbolicValue};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmEquationSystem;

/// Build and solve a system with the default configuration.
pub fn solve(input: SystemInput) -> Result<Solution> {
    solve_with(input, &SolverConfig::default())
}

/// Build and solve a system with a custom configuration.
pub fn solve_with(input: SystemInput, config: &SolverConfig) -> Result<Solution> {
    let system = System::from_input(input)?;
    Solver::new(config.clone()).solve(&system)
}

/// Solve a block of equations, one per line, ignoring blank lines.
pub fn solve_text(block: &str) -> Result<Solution> {
    solve(SystemInput::from_text(block))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use approx::assert_relative_eq;
    use num_traits::ToPrimitive;

    use super::*;
    use crate::number::{int, ratio};
    use crate::system::Equation;

    fn solve_lines(equations: &[&str]) -> Solution {
        solve(SystemInput::text(equations.iter().copied())).unwrap()
    }

    /// Substitute a unique solution into every equation.
    fn assert_satisfies(equations: &[&str], solution: &Solution) {
        let assignment = solution.assignment().expect("unique solution");
        for (i, text) in equations.iter().enumerate() {
            let equation = Equation::parse(text, i + 1).unwrap();
            assert_eq!(equation.residual(&assignment), Some(int(0)), "{text}");
        }
    }

    #[test]
    fn test_simple_system() {
        let equations = ["a = 1 - b", "4 + a = 2a"];
        let solution = solve_lines(&equations);
        assert_eq!(solution.to_string(), "a = 4, b = -3");
        assert_satisfies(&equations, &solution);
    }

    #[test]
    fn test_advanced_system() {
        let equations = [
            "4x - 5y + 3z - y = 9",
            "3x - 3y + 8z = 22 + 2y",
            "5x - 5 + 4y - 7z = 20",
        ];
        let solution = solve_lines(&equations);
        assert_eq!(solution.to_string(), "x = 6, y = 4, z = 3");
        assert_satisfies(&equations, &solution);
    }

    #[test]
    fn test_shown_example() {
        let solution = solve_lines(&[
            "4x - 5y + (3z - y) = 4 * 4.5/2",
            "2 * 1.5x - 3y + 8z = 22 + 2y",
            "5x - 2(5/2 - 2y + 3.5z) = 20",
        ]);
        assert_eq!(solution.to_string(), "x = 6, y = 4, z = 3");
    }

    #[test]
    fn test_underdetermined_system() {
        let solution = solve_lines(&["x - y + z = 1", "x + y - z = 2"]);
        assert_eq!(solution.to_string(), "x = 3/2, y = 1/2 + z");
        assert_eq!(solution.get("x").unwrap().constant(), ratio(3, 2));
        assert_eq!(solution.get("y").unwrap().coefficient("z"), int(1));
        assert!(solution.get("z").unwrap().is_free());
        assert!(!solution.is_approximation());
    }

    #[test]
    fn test_inconsistent_system_is_approximated() {
        let solution = solve_lines(&["2x + 2y - 2z = 5", "7x + 7y + z = 10", "5x + 5y - z =  5"]);
        assert!(solution.is_approximation());
        assert_eq!(solution.to_string(), "x = 155/116 - y, z = -45/116");

        let z = solution.get("z").unwrap().constant();
        assert_relative_eq!(z.to_f64().unwrap(), -0.387_931, epsilon = 1e-6);
    }

    #[test]
    fn test_overdetermined_fit() {
        let solution = solve_text("0 = c\n0 = a + b + c\n-1 = 4a + 2b + c\n4 = 9a + 3b + c\n8 = 16a + 4b + c")
            .unwrap();
        assert!(solution.is_approximation());
        assert_eq!(solution.to_string(), "a = 1, b = -2, c = 1/5");
        assert_eq!(
            solution.to_markup(Notation::Rational),
            "<var>a</var> = 1, <var>b</var> = &minus;2, <var>c</var> = \
             <span class=\"fraction\"><span class=\"numerator\">1</span>\
             <span class=\"divider\">/</span><span class=\"denominator\">5</span></span>"
        );
    }

    #[test]
    fn test_comma_decimal() {
        assert_eq!(solve_lines(&["1.5x = 3,5"]).to_string(), "x = 7/3");
    }

    #[test]
    fn test_advanced_multiplication() {
        assert_eq!(solve_lines(&["2 * 4 = 0 + 3(7*x - 2)"]).to_string(), "x = 2/3");
        assert_eq!(solve_lines(&["2 * x = 4"]).to_string(), "x = 2");
    }

    #[test]
    fn test_hash_input() {
        let row = |x: i64, y: i64, z: i64, c: i64| -> BTreeMap<Symbol, Rational> {
            [
                (Symbol::variable("x"), int(x)),
                (Symbol::variable("y"), int(y)),
                (Symbol::variable("z"), int(z)),
                (Symbol::Constant, int(c)),
            ]
            .into_iter()
            .collect()
        };
        let solution = solve(SystemInput::maps(vec![
            row(4, -6, 3, 9),
            row(3, -5, 8, 22),
            row(5, 4, -7, 25),
        ]))
        .unwrap();
        assert_eq!(solution.to_string(), "x = 6, y = 4, z = 3");
    }

    #[test]
    fn test_array_input() {
        let rows: Vec<Vec<Rational>> = [[1, 2, 1, 2], [3, 8, 1, 12], [0, 4, 1, 2]]
            .iter()
            .map(|row| row.iter().map(|&x| int(x)).collect())
            .collect();
        let solution = solve(SystemInput::sequences(rows)).unwrap();
        assert_eq!(solution.to_string(), "a = 2, b = 1, c = -2");
    }

    #[test]
    fn test_other_names_and_parens() {
        assert_eq!(
            solve_lines(&["u + v + w = 9", "u + 2v + 4w = 15", "u + 3v + 9w = 23"]).to_string(),
            "u = 5, v = 3, w = 1"
        );
        assert_eq!(
            solve_lines(&["x + y = 10", "(x + 2 - (5 + y)) = 5 - (2x - x)"]).to_string(),
            "x = 6, y = 4"
        );
    }

    #[test]
    fn test_unordered_rows() {
        assert_eq!(
            solve_lines(&["x + 2y + z = 2", "5z = -10", "2y - 2z = 6"]).to_string(),
            "x = 2, y = 1, z = -2"
        );
    }

    #[test]
    fn test_homogeneous_system() {
        let solution = solve_lines(&[
            "-3a + b + c + d = 0",
            "a - 3b + c + d = 0",
            "a + b - 3c + d = 0",
            "a + b + c - 3d = 0",
        ]);
        assert_eq!(solution.to_string(), "a = d, b = d, c = d");
        assert_eq!(solution.free_variables(), vec!["d"]);
    }

    #[test]
    fn test_fractional_input_and_decimal_output() {
        let solution = solve_lines(&["b = 1/2a + 3/4", "a = 7/5"]);
        assert_eq!(solution.to_string(), "a = 7/5, b = 29/20");
        assert_eq!(solution.render(Notation::decimal()), "a = 1.4, b = 1.45");

        let solution = solve_lines(&["b = 0.5a + 3/4", "a = 7/5"]);
        assert_eq!(solution.to_string(), "a = 7/5, b = 29/20");
    }

    #[test]
    fn test_long_variable_names() {
        assert_eq!(
            solve_lines(&["var1 + var2 = 45var2", "5 - (7var2 + 3) = 23"]).to_string(),
            "var1 = -132, var2 = -3"
        );
    }

    #[test]
    fn test_decimal_values_with_free_variable() {
        assert_eq!(solve_lines(&["1/2s + 4.5t = 1.5/3.0"]).to_string(), "s = 1 - 9t");
    }

    #[test]
    fn test_blank_lines_ignored() {
        let solution = solve_text("\na=1-b\n\n4 + a     = 2a\n   \n").unwrap();
        assert_eq!(solution.to_string(), "a = 4, b = -3");
    }

    #[test]
    fn test_whitespace_inside_numbers_is_dropped() {
        assert_eq!(solve_text("x = 3 / 4").unwrap().to_string(), "x = 3/4");
        assert_eq!(solve_text("1 2x = 24").unwrap().to_string(), "x = 2");
        assert_eq!(solve_text("x = 1 .5").unwrap().to_string(), "x = 3/2");
        assert_eq!(solve_text("var 1 = 2").unwrap().to_string(), "var1 = 2");
    }

    #[test]
    fn test_errors_surface_kind() {
        assert!(solve_text("x + 1").unwrap_err().is_syntax());
        assert!(solve_text("(x + 1 = 2").unwrap_err().is_syntax());
        assert!(solve_text("x & y = 2").unwrap_err().is_syntax());
        assert!(solve_text("\n\n").unwrap_err().is_dimension());

        let config = SolverConfig::new().with_least_squares(false);
        let err = solve_with(SystemInput::text(["x = 1", "x = 2"]), &config).unwrap_err();
        assert!(err.is_unsolvable());
    }

    #[test]
    fn test_solving_is_deterministic() {
        let equations = ["2x + 2y - 2z = 5", "7x + 7y + z = 10", "5x + 5y - z = 5"];
        assert_eq!(solve_lines(&equations), solve_lines(&equations));
    }

    #[test]
    fn test_reordering_equations_keeps_solution() {
        let forward = solve_lines(&["x + 2y + z = 2", "5z = -10", "2y - 2z = 6"]);
        let backward = solve_lines(&["2y - 2z = 6", "5z = -10", "x + 2y + z = 2"]);
        assert_eq!(forward, backward);

        let forward = solve_lines(&["x - y + z = 1", "x + y - z = 2"]);
        let backward = solve_lines(&["x + y - z = 2", "x - y + z = 1"]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_free_variable_consistency() {
        let general = solve_lines(&["x - y + z = 1", "x + y - z = 2"]);
        let assignment: BTreeMap<String, Rational> =
            [("z".to_string(), int(5))].into_iter().collect();

        let pinned = solve_lines(&["x - y + z = 1", "x + y - z = 2", "z = 5"]);
        for value in general.values() {
            let expected = value.evaluate(&assignment).unwrap();
            assert_eq!(pinned.get(value.name()).unwrap().constant(), expected);
        }
    }
}
