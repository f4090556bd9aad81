//! Error types shared by both optimizers.
//!
//! Configuration problems are reported when an optimizer is built, before
//! any evaluation happens. Numerical problems are reported from `run` as
//! soon as the objective yields a non-finite value.

use thiserror::Error;

/// Errors produced while configuring or running an optimizer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimError {
    /// The problem dimensionality is zero.
    #[error("invalid dimensionality: nvar = {nvar} (must be >= 1)")]
    InvalidDimension {
        /// The rejected dimensionality
        nvar: usize,
    },

    /// The bounds are empty, inverted, or not finite.
    #[error("invalid bounds: [{lower}, {upper}] (need finite lower < upper)")]
    InvalidBounds {
        /// Lower bound
        lower: f64,
        /// Upper bound
        upper: f64,
    },

    /// The population is too small for the algorithm's sampling scheme.
    #[error("population size ({size}) must be >= {minimum}")]
    PopulationTooSmall {
        /// The rejected population size
        size: usize,
        /// Smallest size the algorithm accepts
        minimum: usize,
    },

    /// A scalar parameter lies outside its valid range.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// The rejected value
        value: f64,
        /// What the parameter must satisfy
        reason: &'static str,
    },

    /// The objective returned NaN or an infinite value.
    #[error("objective returned non-finite value {value} at evaluation {evaluations}")]
    NonFiniteFitness {
        /// The value returned by the objective
        value: f64,
        /// Evaluation counter at the time of failure (1-based)
        evaluations: usize,
    },
}

/// A specialized `Result` type for optimizer operations.
pub type Result<T> = std::result::Result<T, OptimError>;

impl OptimError {
    /// Returns `true` for errors raised while validating a configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            OptimError::InvalidDimension { .. }
                | OptimError::InvalidBounds { .. }
                | OptimError::PopulationTooSmall { .. }
                | OptimError::InvalidParameter { .. }
        )
    }

    /// Returns `true` when the objective itself misbehaved.
    pub fn is_numerical_error(&self) -> bool {
        matches!(self, OptimError::NonFiniteFitness { .. })
    }
}

/// Checks that `value` lies in the closed unit interval.
pub(crate) fn check_probability(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(OptimError::InvalidParameter {
            name,
            value,
            reason: "must be in [0, 1]",
        })
    }
}

/// Checks that a distribution index is finite and non-negative.
pub(crate) fn check_distribution_index(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(OptimError::InvalidParameter {
            name,
            value,
            reason: "must be finite and >= 0",
        })
    }
}

/// Checks that the evaluation budget is non-zero.
pub(crate) fn check_budget(max_evaluations: usize) -> Result<()> {
    if max_evaluations == 0 {
        Err(OptimError::InvalidParameter {
            name: "max_evaluations",
            value: 0.0,
            reason: "must be >= 1",
        })
    } else {
        Ok(())
    }
}
