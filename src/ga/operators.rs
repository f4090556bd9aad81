//! Real-coded variation operators.
//!
//! Both operators work on `&[f64]` vectors and keep every component inside
//! the supplied [`Bounds`].
//!
//! - [`sbx_crossover`]: Simulated Binary Crossover, bounded variant
//! - [`polynomial_mutation`]: bounded polynomial mutation
//!
//! # References
//!
//! - Deb & Agrawal (1995), "Simulated Binary Crossover for Continuous Search Space"
//! - Deb & Goyal (1996), "A Combined Genetic Adaptive Search (GeneAS) for
//!   Engineering Design"

use crate::bounds::Bounds;
use rand::Rng;

/// Genes closer than this are treated as equal and skipped by SBX.
pub const SBX_EPSILON: f64 = 1e-14;

// ============================================================================
// Crossover
// ============================================================================

/// Simulated Binary Crossover (SBX) with bound-aware spread factors.
///
/// With probability `1 - probability` the parents are returned unchanged.
/// The pair is recombined when a uniform draw `u` satisfies `u < probability`
/// (strict), so `0.0` never recombines and `1.0` always does.
/// Otherwise every gene pair is recombined with probability 0.5, provided
/// the two parent values differ by more than [`SBX_EPSILON`]. Both children
/// of a gene share one uniform draw. Children are clipped to `bounds`.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn sbx_crossover<R: Rng>(
    parent1: &[f64],
    parent2: &[f64],
    bounds: &Bounds,
    probability: f64,
    eta: f64,
    rng: &mut R,
) -> (Vec<f64>, Vec<f64>) {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );

    let mut child1 = parent1.to_vec();
    let mut child2 = parent2.to_vec();

    if rng.random::<f64>() >= probability {
        return (child1, child2);
    }

    let (lo, hi) = (bounds.lower(), bounds.upper());
    for i in 0..parent1.len() {
        let swap_gene = rng.random::<f64>() < 0.5;
        if !swap_gene || (parent1[i] - parent2[i]).abs() <= SBX_EPSILON {
            continue;
        }

        let y1 = parent1[i].min(parent2[i]);
        let y2 = parent1[i].max(parent2[i]);
        let delta = y2 - y1;
        let u = rng.random::<f64>();

        let beta_lower = 1.0 + 2.0 * (y1 - lo) / delta;
        child1[i] = 0.5 * (y1 + y2 - spread_factor(beta_lower, u, eta) * delta);

        let beta_upper = 1.0 + 2.0 * (hi - y2) / delta;
        child2[i] = 0.5 * (y1 + y2 + spread_factor(beta_upper, u, eta) * delta);
    }

    bounds.clip(&mut child1);
    bounds.clip(&mut child2);
    (child1, child2)
}

/// SBX spread factor βq for one side of a gene pair.
fn spread_factor(beta: f64, u: f64, eta: f64) -> f64 {
    let exponent = 1.0 / (eta + 1.0);
    let alpha = 2.0 - beta.powf(-(eta + 1.0));
    if u <= 1.0 / alpha {
        (u * alpha).powf(exponent)
    } else {
        (1.0 / (2.0 - u * alpha)).powf(exponent)
    }
}

// ============================================================================
// Mutation
// ============================================================================

/// Bounded polynomial mutation.
///
/// Each gene mutates independently with `probability`, when a uniform draw
/// `u` satisfies `u < probability` (strict); `0.0` leaves the vector
/// untouched. Small perturbations
/// are far more likely than large ones; `eta` controls how strongly. The
/// result is clipped to `bounds` after all genes are processed.
pub fn polynomial_mutation<R: Rng>(
    individual: &[f64],
    bounds: &Bounds,
    probability: f64,
    eta: f64,
    rng: &mut R,
) -> Vec<f64> {
    let (lo, hi) = (bounds.lower(), bounds.upper());
    let width = bounds.width();
    let exponent = 1.0 / (eta + 1.0);

    let mut mutant = individual.to_vec();
    for gene in mutant.iter_mut() {
        if rng.random::<f64>() >= probability {
            continue;
        }

        let y = *gene;
        let delta1 = (y - lo) / width;
        let delta2 = (hi - y) / width;
        let u = rng.random::<f64>();

        let delta_q = if u <= 0.5 {
            let val = 2.0 * u + (1.0 - 2.0 * u) * (1.0 - delta1).powf(eta + 1.0);
            val.powf(exponent) - 1.0
        } else {
            let val = 2.0 * (1.0 - u) + 2.0 * (u - 0.5) * (1.0 - delta2).powf(eta + 1.0);
            1.0 - val.powf(exponent)
        };

        *gene = y + delta_q * width;
    }

    bounds.clip(&mut mutant);
    mutant
}

// ============================================================================
// Tests
// ============================================================================
