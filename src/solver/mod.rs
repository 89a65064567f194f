//! Exact linear system solver.
//!
//! This module provides the numerical engine. All arithmetic is exact.
//!
//! ## Pipeline
//!
//! The augmented matrix `[A | b]` is brought to reduced row-echelon form by
//! Gauss-Jordan elimination with row exchange, then classified:
//!
//! - **Unique**: every unknown has a pivot; back-substitution yields numbers.
//! - **Underdetermined**: some columns have no pivot. Those unknowns are
//!   free and the others are expressed through them.
//! - **Inconsistent**: a row reads `0 = c` with `c != 0`. The normal
//!   equations `AᵗA x = Aᵗb` of the original matrix are solved instead and
//!   the result is marked as a least-squares approximation.

mod elimination;
mod engine;
mod least_squares;
mod matrix;
mod substitution;

pub use elimination::{reduce, Classification, Reduction};
pub use engine::{RankPolicy, Solver, SolverConfig};
pub use least_squares::least_squares;
pub use matrix::Matrix;
pub use substitution::back_substitute;
