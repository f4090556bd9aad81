//! Bounded real-valued minimization with two population-based optimizers.
//!
//! - **Genetic Algorithm (GA)**: binary tournament selection, Simulated
//!   Binary Crossover, polynomial mutation and elitism; the population size
//!   is derived from the dimensionality.
//! - **Differential Evolution (DE)**: DE/best/1/bin with greedy replacement
//!   and an explicit population size.
//!
//! Both minimize any [`Objective`] over a box `[xmin, xmax]ⁿ` until an
//! evaluation budget is spent, and return an [`OptimResult`] with the best
//! vector, its fitness and the per-generation convergence history.
//!
//! # Example
//!
//! ```
//! use u_realopt::de::{DeConfig, DifferentialEvolution};
//! use u_realopt::{Benchmark, Optimizer};
//!
//! let bench = Benchmark::Quadratic;
//! let config = DeConfig::default().with_max_evaluations(2_000);
//! let mut de = DifferentialEvolution::with_seed(2, bench.bounds(), config, 7).unwrap();
//! let result = de.run(bench.objective().as_ref()).unwrap();
//! assert!(result.best_fitness < 1.0);
//! ```
//!
//! # Randomness
//!
//! Each optimizer owns the generator it was built with. Seed it explicitly
//! for reproducible runs; repeated `run` calls continue the same stream.
//!
//! # Logging
//!
//! Run boundaries are logged at `debug` level and every generation at
//! `trace` level through the [`log`] facade.

pub mod bounds;
pub mod de;
pub mod error;
pub mod ga;
pub mod objective;
pub mod optimizer;
pub mod params;
pub mod population;

pub use bounds::Bounds;
pub use error::{OptimError, Result};
pub use objective::{Benchmark, Objective, PenalizedRastrigin, Quadratic};
pub use optimizer::{OptimResult, Optimizer};
pub use params::{Algorithm, ParameterSet};
pub use population::{Evaluator, Population};
