//! DE configuration.

use crate::error::{check_budget, check_probability, OptimError, Result};

/// Smallest population accepted by DE/best/1/bin.
pub const MIN_POPULATION: usize = 4;

/// Configuration for DE/best/1/bin.
///
/// ```
/// use u_realopt::de::DeConfig;
///
/// let config = DeConfig::default()
///     .with_population_size(30)
///     .with_scale_factor(0.7)
///     .with_crossover_rate(0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeConfig {
    /// Evaluation budget. Checked after every trial evaluation.
    pub max_evaluations: usize,

    /// Number of candidates; at least [`MIN_POPULATION`].
    pub population_size: usize,

    /// Scale factor F applied to the difference vector, in `(0, 2]`.
    pub scale_factor: f64,

    /// Binomial crossover rate CR, in `[0, 1]`.
    pub crossover_rate: f64,
}

impl Default for DeConfig {
    fn default() -> Self {
        Self {
            max_evaluations: 10_000,
            population_size: 20,
            scale_factor: 0.5,
            crossover_rate: 0.9,
        }
    }
}

impl DeConfig {
    /// Sets the evaluation budget.
    pub fn with_max_evaluations(mut self, n: usize) -> Self {
        self.max_evaluations = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the scale factor F.
    pub fn with_scale_factor(mut self, f: f64) -> Self {
        self.scale_factor = f;
        self
    }

    /// Sets the crossover rate CR.
    pub fn with_crossover_rate(mut self, cr: f64) -> Self {
        self.crossover_rate = cr;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        check_budget(self.max_evaluations)?;
        if self.population_size < MIN_POPULATION {
            return Err(OptimError::PopulationTooSmall {
                size: self.population_size,
                minimum: MIN_POPULATION,
            });
        }
        if !(self.scale_factor > 0.0 && self.scale_factor <= 2.0) {
            return Err(OptimError::InvalidParameter {
                name: "scale_factor",
                value: self.scale_factor,
                reason: "must be in (0, 2]",
            });
        }
        check_probability("crossover_rate", self.crossover_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DeConfig::default();
        assert_eq!(config.max_evaluations, 10_000);
        assert_eq!(config.population_size, 20);
        assert!((config.scale_factor - 0.5).abs() < 1e-12);
        assert!((config.crossover_rate - 0.9).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimum_population() {
        assert!(DeConfig::default().with_population_size(4).validate().is_ok());
        let err = DeConfig::default()
            .with_population_size(3)
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            OptimError::PopulationTooSmall {
                size: 3,
                minimum: 4
            }
        );
    }

    #[test]
    fn test_scale_factor_range() {
        assert!(DeConfig::default().with_scale_factor(0.0).validate().is_err());
        assert!(DeConfig::default().with_scale_factor(2.0).validate().is_ok());
        assert!(DeConfig::default().with_scale_factor(2.5).validate().is_err());
        assert!(DeConfig::default()
            .with_scale_factor(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_crossover_rate_range() {
        assert!(DeConfig::default().with_crossover_rate(0.0).validate().is_ok());
        assert!(DeConfig::default().with_crossover_rate(1.01).validate().is_err());
    }

    #[test]
    fn test_zero_budget_rejected() {
        assert!(DeConfig::default()
            .with_max_evaluations(0)
            .validate()
            .unwrap_err()
            .is_config_error());
    }
}
