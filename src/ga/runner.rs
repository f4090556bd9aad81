//! GA generational loop execution.
//!
//! [`GeneticOptimizer`] orchestrates the complete evolutionary process:
//! initialization → evaluation → elitism → tournament → SBX → mutation →
//! evaluation → repeat, until the evaluation budget is spent.

use super::config::{population_size, GaConfig};
use super::operators::{polynomial_mutation, sbx_crossover};
use super::selection::tournament_pool;
use crate::bounds::Bounds;
use crate::error::Result;
use crate::objective::Objective;
use crate::optimizer::{OptimResult, Optimizer};
use crate::population::{Evaluator, Population};
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Real-coded Genetic Algorithm.
///
/// # Usage
///
/// ```
/// use u_realopt::ga::{GaConfig, GeneticOptimizer};
/// use u_realopt::{Bounds, Optimizer, Quadratic};
///
/// let bounds = Bounds::new(-10.0, 10.0).unwrap();
/// let config = GaConfig::default().with_max_evaluations(2_000);
/// let mut ga = GeneticOptimizer::with_seed(3, bounds, config, 42).unwrap();
/// let result = ga.run(&Quadratic).unwrap();
/// assert!(result.best_fitness < result.history[0]);
/// ```
#[derive(Debug, Clone)]
pub struct GeneticOptimizer<R = StdRng> {
    nvar: usize,
    bounds: Bounds,
    config: GaConfig,
    rng: R,
}

impl GeneticOptimizer<StdRng> {
    /// Builds an optimizer driven by a [`StdRng`] seeded with `seed`.
    pub fn with_seed(nvar: usize, bounds: Bounds, config: GaConfig, seed: u64) -> Result<Self> {
        Self::new(nvar, bounds, config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GeneticOptimizer<R> {
    /// Builds an optimizer for an `nvar`-dimensional problem.
    ///
    /// # Errors
    /// Any configuration error reported by [`GaConfig::validate`].
    pub fn new(nvar: usize, bounds: Bounds, config: GaConfig, rng: R) -> Result<Self> {
        config.validate(nvar)?;
        Ok(Self {
            nvar,
            bounds,
            config,
            rng,
        })
    }

    /// Number of candidates per generation.
    pub fn population_size(&self) -> usize {
        population_size(self.nvar)
    }

    /// The active configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Runs the GA, calling `on_generation(generation, population)` after
    /// initialization (generation 0) and after every generation.
    pub fn run_observed<F>(
        &mut self,
        objective: &dyn Objective,
        mut on_generation: F,
    ) -> Result<OptimResult>
    where
        F: FnMut(usize, &Population),
    {
        let n_pop = self.population_size();
        let mut evaluator = Evaluator::new(objective, self.config.max_evaluations);

        debug!(
            "ga: nvar={} n_pop={} elitism={} budget={}",
            self.nvar, n_pop, self.config.elitism, self.config.max_evaluations
        );

        // 1. Initialize and evaluate
        let mut population = Population::random(n_pop, self.nvar, &self.bounds, &mut self.rng);
        population.evaluate_all(&mut evaluator)?;

        let mut history = vec![population.best_fitness()];
        on_generation(0, &population);

        // 2. Generational loop; the budget is checked between generations
        let mut generations = 0usize;
        while !evaluator.exhausted() {
            population = self.next_generation(&population, &mut evaluator)?;
            generations += 1;

            let best = population.best_fitness();
            history.push(best);
            trace!(
                "ga: generation {} best={:e} evaluations={}",
                generations,
                best,
                evaluator.evaluations()
            );
            on_generation(generations, &population);
        }

        let (best, best_fitness) = population.into_best();
        debug!(
            "ga: finished after {} generations, {} evaluations, best={:e}",
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

    /// Builds and evaluates the generation following `current`.
    ///
    /// Elites keep their fitness; only the `n_pop - elitism` offspring are
    /// evaluated and charged to the budget.
    fn next_generation(
        &mut self,
        current: &Population,
        evaluator: &mut Evaluator<'_>,
    ) -> Result<Population> {
        let n_pop = current.len();
        let elitism = self.config.elitism;
        let needed = n_pop - elitism;
        let mutation_probability = self.config.effective_mutation_probability(self.nvar);

        let mut candidates = Vec::with_capacity(n_pop);
        let mut fitness = Vec::with_capacity(n_pop);

        // Elite preservation
        for &i in current.ranked_indices().iter().take(elitism) {
            candidates.push(current.candidate(i).to_vec());
            fitness.push(current.fitness()[i]);
        }

        // Mating pool
        let pool = tournament_pool(current.fitness(), n_pop, &mut self.rng);

        // Offspring
        let mut offspring: Vec<Vec<f64>> = Vec::with_capacity(needed + 1);
        while offspring.len() < needed {
            let p1 = pool[self.rng.random_range(0..pool.len())];
            let p2 = pool[self.rng.random_range(0..pool.len())];

            let (c1, c2) = sbx_crossover(
                current.candidate(p1),
                current.candidate(p2),
                &self.bounds,
                self.config.crossover_probability,
                self.config.crossover_eta,
                &mut self.rng,
            );

            for child in [c1, c2] {
                offspring.push(polynomial_mutation(
                    &child,
                    &self.bounds,
                    mutation_probability,
                    self.config.mutation_eta,
                    &mut self.rng,
                ));
            }
        }
        offspring.truncate(needed);

        for child in offspring {
            fitness.push(evaluator.evaluate(&child)?);
            candidates.push(child);
        }

        Ok(Population::from_parts(candidates, fitness))
    }
}

impl<R: Rng> Optimizer for GeneticOptimizer<R> {
    fn name(&self) -> &'static str {
        "ga"
    }

    fn run(&mut self, objective: &dyn Objective) -> Result<OptimResult> {
        self.run_observed(objective, |_, _| {})
    }
}

// ============================================================================
// Tests
// ============================================================================
