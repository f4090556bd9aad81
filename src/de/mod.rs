//! Differential Evolution, DE/best/1/bin.
//!
//! The mutation base is the best candidate of the generation-start
//! population, perturbed by one scaled difference vector; binomial crossover
//! always takes at least one gene from the mutant; replacement is greedy
//! and favors the trial on ties.
//!
//! # Key Types
//!
//! - [`DeConfig`]: Population size, F, CR and budget
//! - [`DifferentialEvolution`]: Executes the generational loop
//!
//! # References
//!
//! - Storn & Price (1997), "Differential Evolution – A Simple and Efficient
//!   Heuristic for Global Optimization over Continuous Spaces"

mod config;
pub mod operators;
mod runner;

pub use config::{DeConfig, MIN_POPULATION};
pub use runner::DifferentialEvolution;
