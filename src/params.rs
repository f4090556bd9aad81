//! The externally supplied parameter set and the algorithm selector.
//!
//! An orchestrator typically loads one [`ParameterSet`] (with the `serde`
//! feature, from any serde format) and runs both algorithms with it.
//! [`Algorithm::build`] turns the pair into a boxed [`Optimizer`].

use crate::bounds::Bounds;
use crate::de::{DeConfig, DifferentialEvolution};
use crate::error::Result;
use crate::ga::{GaConfig, GeneticOptimizer};
use crate::optimizer::Optimizer;
use rand::rngs::StdRng;

/// Parameters shared by a GA/DE comparison.
///
/// GA-only and DE-only fields are ignored by the other algorithm.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParameterSet {
    /// Evaluation budget for one run.
    pub max_evaluations: usize,
    /// GA: SBX application probability.
    pub crossover_probability: f64,
    /// GA: SBX distribution index.
    pub crossover_eta: f64,
    /// GA: polynomial mutation distribution index.
    pub mutation_eta: f64,
    /// GA: elite count.
    pub elitism: usize,
    /// DE: population size.
    pub population_size: usize,
    /// DE: scale factor F.
    pub scale_factor: f64,
    /// DE: crossover rate CR.
    pub crossover_rate: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        let ga = GaConfig::default();
        let de = DeConfig::default();
        Self {
            max_evaluations: ga.max_evaluations,
            crossover_probability: ga.crossover_probability,
            crossover_eta: ga.crossover_eta,
            mutation_eta: ga.mutation_eta,
            elitism: ga.elitism,
            population_size: de.population_size,
            scale_factor: de.scale_factor,
            crossover_rate: de.crossover_rate,
        }
    }
}

impl ParameterSet {
    /// The GA view of these parameters.
    pub fn ga_config(&self) -> GaConfig {
        GaConfig::default()
            .with_max_evaluations(self.max_evaluations)
            .with_crossover_probability(self.crossover_probability)
            .with_crossover_eta(self.crossover_eta)
            .with_mutation_eta(self.mutation_eta)
            .with_elitism(self.elitism)
    }

    /// The DE view of these parameters.
    pub fn de_config(&self) -> DeConfig {
        DeConfig::default()
            .with_max_evaluations(self.max_evaluations)
            .with_population_size(self.population_size)
            .with_scale_factor(self.scale_factor)
            .with_crossover_rate(self.crossover_rate)
    }
}

/// Which optimizer to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// [`GeneticOptimizer`]
    Genetic,
    /// [`DifferentialEvolution`]
    DifferentialEvolution,
}

impl Algorithm {
    /// Both algorithms, GA first.
    pub const ALL: [Algorithm; 2] = [Algorithm::Genetic, Algorithm::DifferentialEvolution];

    /// Builds the optimizer for an `nvar`-dimensional problem.
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use u_realopt::{Algorithm, Benchmark, Optimizer, ParameterSet};
    ///
    /// let params = ParameterSet {
    ///     max_evaluations: 1_000,
    ///     ..ParameterSet::default()
    /// };
    /// let bench = Benchmark::Quadratic;
    /// for algo in Algorithm::ALL {
    ///     let mut opt = algo
    ///         .build(2, bench.bounds(), &params, StdRng::seed_from_u64(1))
    ///         .unwrap();
    ///     let result = opt.run(bench.objective().as_ref()).unwrap();
    ///     assert!(result.evaluations >= 1_000);
    /// }
    /// ```
    pub fn build(
        &self,
        nvar: usize,
        bounds: Bounds,
        params: &ParameterSet,
        rng: StdRng,
    ) -> Result<Box<dyn Optimizer>> {
        Ok(match self {
            Algorithm::Genetic => {
                Box::new(GeneticOptimizer::new(nvar, bounds, params.ga_config(), rng)?)
            }
            Algorithm::DifferentialEvolution => Box::new(DifferentialEvolution::new(
                nvar,
                bounds,
                params.de_config(),
                rng,
            )?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::Benchmark;
    use rand::SeedableRng;

    #[test]
    fn test_default_matches_engine_defaults() {
        let params = ParameterSet::default();
        assert_eq!(params.ga_config(), GaConfig::default());
        assert_eq!(params.de_config(), DeConfig::default());
    }

    #[test]
    fn test_conversions_carry_fields() {
        let params = ParameterSet {
            max_evaluations: 5000,
            crossover_probability: 0.8,
            crossover_eta: 10.0,
            mutation_eta: 40.0,
            elitism: 1,
            population_size: 12,
            scale_factor: 0.7,
            crossover_rate: 0.3,
        };

        let ga = params.ga_config();
        assert_eq!(ga.max_evaluations, 5000);
        assert_eq!(ga.elitism, 1);
        assert!((ga.crossover_probability - 0.8).abs() < 1e-12);
        assert!((ga.crossover_eta - 10.0).abs() < 1e-12);
        assert!((ga.mutation_eta - 40.0).abs() < 1e-12);
        assert!(ga.mutation_probability.is_none());

        let de = params.de_config();
        assert_eq!(de.max_evaluations, 5000);
        assert_eq!(de.population_size, 12);
        assert!((de.scale_factor - 0.7).abs() < 1e-12);
        assert!((de.crossover_rate - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_build_trait_objects() {
        let params = ParameterSet {
            max_evaluations: 5000,
            ..ParameterSet::default()
        };
        let bench = Benchmark::PenalizedRastrigin;
        let objective = bench.objective();

        let mut names = Vec::new();
        for algo in Algorithm::ALL {
            let mut opt = algo
                .build(3, bench.bounds(), &params, StdRng::seed_from_u64(42))
                .unwrap();
            let result = opt.run(objective.as_ref()).unwrap();
            names.push(opt.name());

            assert!(result.best_fitness.is_finite());
            assert!(bench.bounds().contains(&result.best));
            assert_eq!(objective.evaluate(&result.best), result.best_fitness);
        }
        assert_eq!(names, vec!["ga", "de"]);
    }

    #[test]
    fn test_build_reports_config_errors() {
        let params = ParameterSet {
            population_size: 2,
            ..ParameterSet::default()
        };
        let bounds = Benchmark::Quadratic.bounds();
        assert!(Algorithm::Genetic
            .build(2, bounds, &params, StdRng::seed_from_u64(0))
            .is_ok());
        assert!(Algorithm::DifferentialEvolution
            .build(2, bounds, &params, StdRng::seed_from_u64(0))
            .err()
            .unwrap()
            .is_config_error());
    }
}
