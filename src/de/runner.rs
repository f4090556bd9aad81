//! DE/best/1/bin execution loop.

use super::config::DeConfig;
use super::operators::{best1_mutant, binomial_crossover, distinct_pair};
use crate::bounds::Bounds;
use crate::error::{OptimError, Result};
use crate::objective::Objective;
use crate::optimizer::{OptimResult, Optimizer};
use crate::population::{Evaluator, Population};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Differential Evolution, DE/best/1/bin with greedy replacement.
///
/// Every generation reads from the generation-start population and writes
/// into a separate next-generation buffer, so the best vector used as the
/// mutation base stays fixed for the whole generation.
///
/// ```
/// use u_realopt::de::{DeConfig, DifferentialEvolution};
/// use u_realopt::{Bounds, Optimizer, Quadratic};
///
/// let bounds = Bounds::new(-10.0, 10.0).unwrap();
/// let config = DeConfig::default().with_max_evaluations(3_000);
/// let mut de = DifferentialEvolution::with_seed(2, bounds, config, 42).unwrap();
/// let (best, fitness, history) = de.run(&Quadratic).unwrap().into_parts();
/// assert_eq!(best.len(), 2);
/// assert!(fitness <= history[0]);
/// ```
#[derive(Debug, Clone)]
pub struct DifferentialEvolution<R = StdRng> {
    nvar: usize,
    bounds: Bounds,
    config: DeConfig,
    rng: R,
}

impl DifferentialEvolution<StdRng> {
    /// Builds an optimizer driven by a [`StdRng`] seeded with `seed`.
    pub fn with_seed(nvar: usize, bounds: Bounds, config: DeConfig, seed: u64) -> Result<Self> {
        Self::new(nvar, bounds, config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DifferentialEvolution<R> {
    /// Builds an optimizer for an `nvar`-dimensional problem.
    ///
    /// # Errors
    /// [`OptimError::InvalidDimension`] for `nvar == 0`, otherwise any error
    /// from [`DeConfig::validate`].
    pub fn new(nvar: usize, bounds: Bounds, config: DeConfig, rng: R) -> Result<Self> {
        if nvar == 0 {
            return Err(OptimError::InvalidDimension { nvar });
        }
        config.validate()?;
        Ok(Self {
            nvar,
            bounds,
            config,
            rng,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &DeConfig {
        &self.config
    }

    /// Runs DE, calling `on_generation(generation, population)` after
    /// initialization (generation 0) and after every generation.
    pub fn run_observed<F>(
        &mut self,
        objective: &dyn Objective,
        mut on_generation: F,
    ) -> Result<OptimResult>
    where
        F: FnMut(usize, &Population),
    {
        let n_pop = self.config.population_size;
        let mut evaluator = Evaluator::new(objective, self.config.max_evaluations);

        debug!(
            "de: nvar={} n_pop={} F={} CR={} budget={}",
            self.nvar,
            n_pop,
            self.config.scale_factor,
            self.config.crossover_rate,
            self.config.max_evaluations
        );

        let mut population = Population::random(n_pop, self.nvar, &self.bounds, &mut self.rng);
        population.evaluate_all(&mut evaluator)?;

        let mut history = vec![population.best_fitness()];
        on_generation(0, &population);

        let mut generations = 0usize;
        while !evaluator.exhausted() {
            population = self.next_generation(&population, &mut evaluator)?;
            generations += 1;

            let best = population.best_fitness();
            history.push(best);
            trace!(
                "de: generation {} best={:e} evaluations={}",
                generations,
                best,
                evaluator.evaluations()
            );
            on_generation(generations, &population);
        }

        let (best, best_fitness) = population.into_best();
        debug!(
            "de: finished after {} generations, {} evaluations, best={:e}",
            generations,
            evaluator.evaluations(),
            best_fitness
        );

        Ok(OptimResult {
            best,
            best_fitness,
            history,
            evaluations: evaluator.evaluations(),
            generations,
        })
    }

    /// One DE generation. Stops early, carrying the remaining candidates
    /// forward unchanged, as soon as the budget is reached.
    fn next_generation(
        &mut self,
        current: &Population,
        evaluator: &mut Evaluator<'_>,
    ) -> Result<Population> {
        let n_pop = current.len();
        let best = current.candidate(current.best_index());

        let mut candidates = current.candidates().to_vec();
        let mut fitness = current.fitness().to_vec();

        for i in 0..n_pop {
            let (r1, r2) = distinct_pair(i, n_pop, &mut self.rng);
            let mutant = best1_mutant(
                best,
                current.candidate(r1),
                current.candidate(r2),
                self.config.scale_factor,
            );

            let (mut trial, _) = binomial_crossover(
                current.candidate(i),
                &mutant,
                self.config.crossover_rate,
                &mut self.rng,
            );
            self.bounds.clip(&mut trial);

            let trial_fitness = evaluator.evaluate(&trial)?;
            if trial_fitness <= current.fitness()[i] {
                candidates[i] = trial;
                fitness[i] = trial_fitness;
            }

            if evaluator.exhausted() {
                break;
            }
        }

        Ok(Population::from_parts(candidates, fitness))
    }
}

impl<R: Rng> Optimizer for DifferentialEvolution<R> {
    fn name(&self) -> &'static str {
        "de"
    }

    fn run(&mut self, objective: &dyn Objective) -> Result<OptimResult> {
        self.run_observed(objective, |_, _| {})
    }
}
