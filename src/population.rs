//! Population storage and evaluation-budget bookkeeping.
//!
//! A [`Population`] holds candidates and an index-aligned fitness vector.
//! Every objective call goes through an [`Evaluator`], which counts it
//! against the run's budget and rejects non-finite fitness values.

use crate::bounds::Bounds;
use crate::error::{OptimError, Result};
use crate::objective::Objective;
use rand::Rng;
use std::cmp::Ordering;

/// Counts objective calls against a fixed budget.
pub struct Evaluator<'a> {
    objective: &'a dyn Objective,
    evaluations: usize,
    budget: usize,
}

impl<'a> Evaluator<'a> {
    /// Wraps `objective` with a budget of `budget` evaluations.
    pub fn new(objective: &'a dyn Objective, budget: usize) -> Self {
        Self {
            objective,
            evaluations: 0,
            budget,
        }
    }

    /// Evaluates `x`, consuming one unit of budget.
    ///
    /// # Errors
    /// [`OptimError::NonFiniteFitness`] if the objective returns NaN or ±∞.
    pub fn evaluate(&mut self, x: &[f64]) -> Result<f64> {
        self.evaluations += 1;
        let value = self.objective.evaluate(x);
        if value.is_finite() {
            Ok(value)
        } else {
            Err(OptimError::NonFiniteFitness {
                value,
                evaluations: self.evaluations,
            })
        }
    }

    /// Number of evaluations performed so far.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// The configured budget.
    pub fn budget(&self) -> usize {
        self.budget
    }

    /// `true` once the counter has reached the budget.
    pub fn exhausted(&self) -> bool {
        self.evaluations >= self.budget
    }
}

/// Candidates and their fitness values, index-aligned.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    candidates: Vec<Vec<f64>>,
    fitness: Vec<f64>,
}

impl Population {
    /// Draws `size` candidates uniformly inside `bounds`.
    ///
    /// Fitness values start at `+∞` until [`evaluate_all`](Self::evaluate_all)
    /// runs.
    pub fn random<R: Rng>(size: usize, nvar: usize, bounds: &Bounds, rng: &mut R) -> Self {
        let candidates = (0..size).map(|_| bounds.sample(nvar, rng)).collect();
        Self {
            candidates,
            fitness: vec![f64::INFINITY; size],
        }
    }

    /// Builds a population from already-evaluated parts. Only the runners
    /// call this, always with index-aligned vectors.
    ///
    /// # Panics
    /// Panics if the two vectors differ in length.
    pub(crate) fn from_parts(candidates: Vec<Vec<f64>>, fitness: Vec<f64>) -> Self {
        assert_eq!(
            candidates.len(),
            fitness.len(),
            "candidates and fitness must be index-aligned"
        );
        Self {
            candidates,
            fitness,
        }
    }

    /// Evaluates every candidate, one budget unit each.
    pub fn evaluate_all(&mut self, evaluator: &mut Evaluator<'_>) -> Result<()> {
        for (x, f) in self.candidates.iter().zip(self.fitness.iter_mut()) {
            *f = evaluator.evaluate(x)?;
        }
        Ok(())
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// `true` if there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// All candidates.
    pub fn candidates(&self) -> &[Vec<f64>] {
        &self.candidates
    }

    /// All fitness values, aligned with [`candidates`](Self::candidates).
    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    /// Candidate at `i`.
    pub fn candidate(&self, i: usize) -> &[f64] {
        &self.candidates[i]
    }

    /// Index of the lowest fitness (first one on ties).
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn best_index(&self) -> usize {
        self.fitness
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(Ordering::Equal))
            .map(|(i, _)| i)
            .expect("population must not be empty")
    }

    /// Lowest fitness in the population.
    pub fn best_fitness(&self) -> f64 {
        self.fitness[self.best_index()]
    }

    /// Indices sorted by ascending fitness (stable on ties).
    pub fn ranked_indices(&self) -> Vec<usize> {
        let mut idx: Vec<usize> = (0..self.len()).collect();
        idx.sort_by(|&a, &b| {
            self.fitness[a]
                .partial_cmp(&self.fitness[b])
                .unwrap_or(Ordering::Equal)
        });
        idx
    }

    /// Consumes the population, returning the best candidate and its fitness.
    pub fn into_best(mut self) -> (Vec<f64>, f64) {
        let i = self.best_index();
        let fitness = self.fitness[i];
        (self.candidates.swap_remove(i), fitness)
    }
}
