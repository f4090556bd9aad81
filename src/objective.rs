//! Objective functions.
//!
//! Both optimizers minimize anything implementing [`Objective`]. Two
//! benchmark objectives ship with the crate:
//!
//! - [`Quadratic`]: `f(x) = Σ xᵢ²`, usually searched over `[-10, 10]ⁿ`.
//! - [`PenalizedRastrigin`]: Rastrigin with a soft penalty for the
//!   constraints `sin(2πxᵢ) + 0.5 ≤ 0` and `cos(2πxᵢ) + 0.5 = 0`, usually
//!   searched over `[-5.12, 5.12]ⁿ`.
//!
//! Closures `Fn(&[f64]) -> f64` are objectives too.

use crate::bounds::Bounds;
use std::f64::consts::PI;

/// A scalar function to minimize.
///
/// Implementations should be deterministic and free of side effects;
/// convergence bookkeeping assumes the same input always yields the same
/// fitness.
pub trait Objective {
    /// Returns the fitness of `x` (lower is better).
    fn evaluate(&self, x: &[f64]) -> f64;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    fn evaluate(&self, x: &[f64]) -> f64 {
        self(x)
    }
}

/// `f(x) = Σ xᵢ²`. Global minimum 0 at the origin.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Quadratic;

impl Objective for Quadratic {
    fn evaluate(&self, x: &[f64]) -> f64 {
        x.iter().map(|v| v * v).sum()
    }
}

/// Default multiplier applied to the summed constraint violation.
pub const DEFAULT_PENALTY_SCALE: f64 = 1e9;

/// Rastrigin with a static penalty for two per-component constraints.
///
/// ```text
/// base(x)      = 10·n + Σ (xᵢ² − 10·cos(2πxᵢ))
/// g(xᵢ)        = sin(2πxᵢ) + 0.5 ≤ 0
/// h(xᵢ)        = cos(2πxᵢ) + 0.5 = 0
/// violation(x) = Σ max(0, g)² + Σ h²
/// f(x)         = base(x) + scale · violation(x)
/// ```
///
/// Feasible components are `xᵢ = k − 1/3` for integer `k`. With the default
/// scale any noticeable violation outweighs the whole base term, so
/// infeasible points rank behind feasible ones without being rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenalizedRastrigin {
    /// Multiplier applied to [`violation`](Self::violation).
    pub penalty_scale: f64,
}

impl Default for PenalizedRastrigin {
    fn default() -> Self {
        Self {
            penalty_scale: DEFAULT_PENALTY_SCALE,
        }
    }
}

impl PenalizedRastrigin {
    /// Unpenalized Rastrigin value.
    pub fn base_value(&self, x: &[f64]) -> f64 {
        let n = x.len() as f64;
        10.0 * n
            + x.iter()
                .map(|&v| v * v - 10.0 * (2.0 * PI * v).cos())
                .sum::<f64>()
    }

    /// Summed squared constraint violation (zero when feasible).
    pub fn violation(&self, x: &[f64]) -> f64 {
        x.iter()
            .map(|&v| {
                let g = (2.0 * PI * v).sin() + 0.5;
                let h = (2.0 * PI * v).cos() + 0.5;
                g.max(0.0).powi(2) + h * h
            })
            .sum()
    }

    /// Scaled violation added on top of the base value.
    pub fn penalty(&self, x: &[f64]) -> f64 {
        self.penalty_scale * self.violation(x)
    }
}

impl Objective for PenalizedRastrigin {
    fn evaluate(&self, x: &[f64]) -> f64 {
        self.base_value(x) + self.penalty(x)
    }
}

/// The shipped benchmark objectives, paired with their usual domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Benchmark {
    /// [`Quadratic`] over `[-10, 10]`.
    Quadratic,
    /// [`PenalizedRastrigin`] over `[-5.12, 5.12]`.
    PenalizedRastrigin,
}

impl Benchmark {
    /// Display name.
    pub fn name(&self) -> &'static str {
        match self {
            Benchmark::Quadratic => "quadratic",
            Benchmark::PenalizedRastrigin => "penalized_rastrigin",
        }
    }

    /// The benchmark's conventional search domain.
    pub fn bounds(&self) -> Bounds {
        let (lower, upper) = match self {
            Benchmark::Quadratic => (-10.0, 10.0),
            Benchmark::PenalizedRastrigin => (-5.12, 5.12),
        };
        Bounds::new(lower, upper).expect("benchmark domains are valid intervals")
    }

    /// The objective itself, with default settings.
    pub fn objective(&self) -> Box<dyn Objective> {
        match self {
            Benchmark::Quadratic => Box::new(Quadratic),
            Benchmark::PenalizedRastrigin => Box::new(PenalizedRastrigin::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quadratic_minimum_at_origin() {
        assert_eq!(Quadratic.evaluate(&[0.0, 0.0]), 0.0);
        assert!((Quadratic.evaluate(&[1.0, -2.0, 3.0]) - 14.0).abs() < 1e-12);
        assert!(Quadratic.evaluate(&[1e-3, 0.0]) > 0.0);
    }

    #[test]
    fn test_rastrigin_base_value_at_origin() {
        let f = PenalizedRastrigin::default();
        assert!(f.base_value(&[0.0, 0.0, 0.0]).abs() < 1e-12);
    }

    #[test]
    fn test_origin_is_infeasible() {
        // cos(0) + 0.5 = 1.5 and sin(0) + 0.5 = 0.5 per component
        let f = PenalizedRastrigin::default();
        let v = f.violation(&[0.0]);
        assert!((v - (0.25 + 2.25)).abs() < 1e-12);
        assert!(f.evaluate(&[0.0]) > 1e9);
    }

    #[test]
    fn test_feasible_point_has_no_penalty() {
        let f = PenalizedRastrigin::default();
        let x = [-1.0 / 3.0, 2.0 / 3.0, -4.0 / 3.0];
        assert!(f.violation(&x) < 1e-20);
        assert!((f.evaluate(&x) - f.base_value(&x)).abs() < 1e-6);
    }

    #[test]
    fn test_equality_alone_is_not_enough() {
        // x = 1/3 satisfies h = 0 but sin(2π/3) + 0.5 > 0
        let f = PenalizedRastrigin::default();
        assert!(f.violation(&[1.0 / 3.0]) > 1.0);
    }

    #[test]
    fn test_penalty_scale() {
        let f = PenalizedRastrigin { penalty_scale: 2.0 };
        let x = [0.1, -0.7];
        assert!((f.penalty(&x) - 2.0 * f.violation(&x)).abs() < 1e-12);
    }

    #[test]
    fn test_closure_objective() {
        let shifted = |x: &[f64]| x.iter().map(|v| (v - 1.0).powi(2)).sum::<f64>();
        assert_eq!(shifted.evaluate(&[1.0, 1.0]), 0.0);
    }

    #[test]
    fn test_benchmark_table() {
        assert_eq!(Benchmark::Quadratic.bounds(), Bounds::new(-10.0, 10.0).unwrap());
        assert_eq!(
            Benchmark::PenalizedRastrigin.bounds(),
            Bounds::new(-5.12, 5.12).unwrap()
        );
        let f = Benchmark::Quadratic.objective();
        assert_eq!(f.evaluate(&[3.0, 4.0]), 25.0);
        assert_eq!(Benchmark::PenalizedRastrigin.name(), "penalized_rastrigin");
    }
}
