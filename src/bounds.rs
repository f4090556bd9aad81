//! Box constraints applied uniformly to every decision variable.

use crate::error::{OptimError, Result};
use rand::Rng;

/// A validated `[lower, upper]` interval shared by all dimensions.
///
/// # Examples
///
/// ```
/// use u_realopt::Bounds;
///
/// let bounds = Bounds::new(-10.0, 10.0).unwrap();
/// let mut x = vec![-12.0, 3.0, 15.0];
/// bounds.clip(&mut x);
/// assert_eq!(x, vec![-10.0, 3.0, 10.0]);
///
/// assert!(Bounds::new(1.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    lower: f64,
    upper: f64,
}

impl Bounds {
    /// Creates bounds, rejecting non-finite, empty, or inverted intervals.
    pub fn new(lower: f64, upper: f64) -> Result<Self> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(OptimError::InvalidBounds { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Lower bound.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// `upper - lower`, always positive.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Clamps every component of `x` into the interval.
    pub fn clip(&self, x: &mut [f64]) {
        for v in x.iter_mut() {
            *v = v.clamp(self.lower, self.upper);
        }
    }

    /// Returns `true` if every component of `x` lies inside the interval.
    pub fn contains(&self, x: &[f64]) -> bool {
        x.iter().all(|&v| v >= self.lower && v <= self.upper)
    }

    /// Draws a vector of `nvar` components uniformly from the interval.
    pub fn sample<R: Rng>(&self, nvar: usize, rng: &mut R) -> Vec<f64> {
        (0..nvar)
            .map(|_| rng.random_range(self.lower..=self.upper))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rejects_bad_intervals() {
        assert!(Bounds::new(0.0, 0.0).is_err());
        assert!(Bounds::new(1.0, -1.0).is_err());
        assert!(Bounds::new(f64::NAN, 1.0).is_err());
        assert!(Bounds::new(0.0, f64::INFINITY).is_err());
        assert!(Bounds::new(-5.12, 5.12).is_ok());
    }

    #[test]
    fn test_clip_and_contains() {
        let b = Bounds::new(-5.12, 5.12).unwrap();
        let mut x = vec![-6.0, 0.5, 5.2];
        assert!(!b.contains(&x));
        b.clip(&mut x);
        assert_eq!(x, vec![-5.12, 0.5, 5.12]);
        assert!(b.contains(&x));
    }

    #[test]
    fn test_sample_within_bounds() {
        let b = Bounds::new(-10.0, 10.0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let x = b.sample(7, &mut rng);
            assert_eq!(x.len(), 7);
            assert!(b.contains(&x));
        }
    }

    #[test]
    fn test_width() {
        let b = Bounds::new(-10.0, 10.0).unwrap();
        assert!((b.width() - 20.0).abs() < 1e-12);
    }
}
