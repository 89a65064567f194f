//! Main solver interface.

use tracing::{debug, info};

use super::elimination::{reduce, Classification};
use super::least_squares::least_squares;
use super::substitution::back_substitute;
use crate::error::{EqsysError, Result};
use crate::system::System;
use crate::value::Solution;

/// How rank-deficient systems are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankPolicy {
    /// Express dependent unknowns through free ones.
    #[default]
    Parametrize,
    /// Refuse any system without a unique (exact or least-squares) solution.
    Strict,
}

/// Configuration for the solver.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Handling of rank deficiency.
    pub policy: RankPolicy,
    /// Approximate inconsistent systems through the normal equations.
    pub least_squares: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            policy: RankPolicy::Parametrize,
            least_squares: true,
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rank-deficiency policy.
    pub fn with_policy(mut self, policy: RankPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enable or disable the least-squares fallback.
    ///
    /// When disabled, an inconsistent system fails with
    /// [`EqsysError::UnsolvableError`].
    pub fn with_least_squares(mut self, enabled: bool) -> Self {
        self.least_squares = enabled;
        self
    }
}

/// Solves systems of linear equations.
///
/// The solver owns no state beyond its configuration; every call builds and
/// consumes its own matrix.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// Create a solver with the given configuration.
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve a system.
    ///
    /// The augmented matrix is reduced and classified. Consistent systems are
    /// back-substituted directly; inconsistent ones go through the normal
    /// equations and the result is flagged as an approximation.
    pub fn solve(&self, system: &System) -> Result<Solution> {
        let original = system.augmented_matrix();
        let direct = reduce(original.clone());

        let (reduction, approximate) = match direct.classify() {
            Classification::Inconsistent if !self.config.least_squares => {
                return Err(EqsysError::unsolvable("system is inconsistent"));
            }
            Classification::Inconsistent => {
                info!("system is inconsistent, falling back to least squares");
                (least_squares(&original)?, true)
            }
            _ => (direct, false),
        };

        if let Classification::Underdetermined { free } = reduction.classify() {
            let names: Vec<&str> = free
                .iter()
                .map(|&col| system.variables()[col].as_str())
                .collect();
            debug!(free = ?names, approximate, "rank-deficient system");
            if self.config.policy == RankPolicy::Strict {
                return Err(EqsysError::unsolvable(format!(
                    "no unique solution; free unknowns: {}",
                    names.join(", ")
                )));
            }
        }

        let values = back_substitute(&reduction, system.variables());
        Ok(Solution::new(values, approximate))
    }
}
