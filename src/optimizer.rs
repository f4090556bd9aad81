//! The contract shared by both optimizers.

use crate::error::Result;
use crate::objective::Objective;

/// Outcome of one optimizer run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimResult {
    /// Best candidate of the final population.
    pub best: Vec<f64>,

    /// Fitness of [`best`](Self::best).
    pub best_fitness: f64,

    /// Population minimum after initialization and after every generation.
    ///
    /// Non-increasing for both optimizers (the GA requires `elitism >= 1`).
    pub history: Vec<f64>,

    /// Evaluations charged against the budget.
    pub evaluations: usize,

    /// Generations executed after initialization.
    pub generations: usize,
}

impl OptimResult {
    /// Splits the result into `(best vector, best fitness, history)`.
    pub fn into_parts(self) -> (Vec<f64>, f64, Vec<f64>) {
        (self.best, self.best_fitness, self.history)
    }
}

/// A configured optimizer that can minimize an [`Objective`].
///
/// Each call to [`run`](Optimizer::run) starts from a fresh random
/// population drawn from the optimizer's own generator; consecutive runs
/// continue that generator's stream.
pub trait Optimizer {
    /// Short algorithm name, for logs and reports.
    fn name(&self) -> &'static str;

    /// Minimizes `objective` until the evaluation budget is spent.
    ///
    /// # Errors
    /// Returns [`OptimError::NonFiniteFitness`](crate::OptimError::NonFiniteFitness)
    /// as soon as the objective yields NaN or ±∞.
    fn run(&mut self, objective: &dyn Objective) -> Result<OptimResult>;
}
