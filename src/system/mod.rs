//! Normalized equation systems.
//!
//! This module turns parsed or structured input into [`Equation`]s and
//! collects them into a [`System`] whose columns are the sorted union of
//! every variable name, ready to become an augmented matrix.

mod builder;
mod equation;
mod validate;

pub use builder::System;
pub use equation::{Equation, MAX_ANONYMOUS_VARIABLES};
pub use validate::{validate_sequences, validate_system};
