//! Real-coded Genetic Algorithm.
//!
//! A generational GA for bounded continuous minimization: binary tournament
//! selection, Simulated Binary Crossover, polynomial mutation, and elitism.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (budget, operator rates, elitism)
//! - [`GeneticOptimizer`]: Executes the generational loop
//!
//! # Submodules
//!
//! - [`operators`]: SBX crossover and polynomial mutation on `&[f64]`
//! - [`selection`]: binary tournament and mating pool construction
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Deb & Agrawal (1995), "Simulated Binary Crossover for Continuous Search Space"
//! - Deb (2001), *Multi-Objective Optimization Using Evolutionary Algorithms*

mod config;
pub mod operators;
mod runner;
pub mod selection;

pub use config::{population_size, GaConfig};
pub use runner::GeneticOptimizer;
