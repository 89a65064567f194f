//! System validation.

use crate::error::{EqsysError, Result};
use crate::number::Rational;

use super::System;

/// Validate a system before solving.
///
/// Checks:
/// - There is at least one equation
/// - At least one unknown appears somewhere
pub fn validate_system(system: &System) -> Result<()> {
    if system.equations().is_empty() {
        return Err(EqsysError::dimension("system has no equations"));
    }

    if system.variables().is_empty() {
        return Err(EqsysError::dimension("system has no unknowns"));
    }

    Ok(())
}

/// Check that positional rows all have the same length.
pub fn validate_sequences(rows: &[Vec<Rational>]) -> Result<()> {
    let Some(first) = rows.first() else {
        return Err(EqsysError::dimension("system has no equations"));
    };

    if let Some((index, row)) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != first.len())
    {
        return Err(EqsysError::dimension(format!(
            "equation {} has {} entries, expected {}",
            index + 1,
            row.len(),
            first.len()
        )));
    }

    Ok(())
}
