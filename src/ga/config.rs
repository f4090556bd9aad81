//! GA configuration.
//!
//! [`GaConfig`] holds the parameters that control the generational loop.
//! The population size is not configurable: it is derived from the problem
//! dimensionality by [`population_size`].

use crate::error::{check_budget, check_distribution_index, check_probability, OptimError, Result};

/// Population size used for an `nvar`-dimensional problem:
/// `max(20, 4·⌈nvar/2⌉)`.
///
/// ```
/// use u_realopt::ga::population_size;
///
/// assert_eq!(population_size(5), 20);
/// assert_eq!(population_size(11), 24);
/// ```
pub fn population_size(nvar: usize) -> usize {
    (4 * nvar.div_ceil(2)).max(20)
}

/// Configuration for the real-coded Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_realopt::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.max_evaluations, 10_000);
/// assert_eq!(config.elitism, 2);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_realopt::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_max_evaluations(2_000)
///     .with_crossover_probability(0.8)
///     .with_elitism(1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Evaluation budget. Checked between generations, so the last
    /// generation may overshoot it.
    pub max_evaluations: usize,

    /// Probability that SBX is applied to a parent pair (0.0–1.0).
    pub crossover_probability: f64,

    /// SBX distribution index η_c. Larger values keep children closer to
    /// their parents.
    pub crossover_eta: f64,

    /// Polynomial mutation distribution index η_m.
    pub mutation_eta: f64,

    /// Number of best candidates copied unchanged into each generation.
    ///
    /// Must be at least 1 and below the population size.
    pub elitism: usize,

    /// Per-gene mutation probability. `None` means `1/nvar`.
    pub mutation_probability: Option<f64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            max_evaluations: 10_000,
            crossover_probability: 0.9,
            crossover_eta: 20.0,
            mutation_eta: 20.0,
            elitism: 2,
            mutation_probability: None,
        }
    }
}

impl GaConfig {
    /// Sets the evaluation budget.
    pub fn with_max_evaluations(mut self, n: usize) -> Self {
        self.max_evaluations = n;
        self
    }

    /// Sets the SBX application probability.
    pub fn with_crossover_probability(mut self, p: f64) -> Self {
        self.crossover_probability = p;
        self
    }

    /// Sets the SBX distribution index.
    pub fn with_crossover_eta(mut self, eta: f64) -> Self {
        self.crossover_eta = eta;
        self
    }

    /// Sets the polynomial mutation distribution index.
    pub fn with_mutation_eta(mut self, eta: f64) -> Self {
        self.mutation_eta = eta;
        self
    }

    /// Sets the elite count.
    pub fn with_elitism(mut self, k: usize) -> Self {
        self.elitism = k;
        self
    }

    /// Overrides the per-gene mutation probability.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = Some(p);
        self
    }

    /// Per-gene mutation probability for an `nvar`-dimensional problem.
    pub fn effective_mutation_probability(&self, nvar: usize) -> f64 {
        self.mutation_probability
            .unwrap_or_else(|| 1.0 / nvar.max(1) as f64)
    }

    /// Validates the configuration for an `nvar`-dimensional problem.
    pub fn validate(&self, nvar: usize) -> Result<()> {
        if nvar == 0 {
            return Err(OptimError::InvalidDimension { nvar });
        }
        check_budget(self.max_evaluations)?;
        check_probability("crossover_probability", self.crossover_probability)?;
        check_distribution_index("crossover_eta", self.crossover_eta)?;
        check_distribution_index("mutation_eta", self.mutation_eta)?;
        if let Some(p) = self.mutation_probability {
            check_probability("mutation_probability", p)?;
        }
        if self.elitism == 0 {
            return Err(OptimError::InvalidParameter {
                name: "elitism",
                value: 0.0,
                reason: "at least one elite keeps the history non-increasing",
            });
        }
        if self.elitism >= population_size(nvar) {
            return Err(OptimError::InvalidParameter {
                name: "elitism",
                value: self.elitism as f64,
                reason: "elites would fill the entire population",
            });
        }
        Ok(())
    }
}
