//! DE/best/1/bin building blocks.

use rand::seq::index;
use rand::Rng;

/// Samples two distinct indices from `0..pool_size`, both different from
/// `exclude`.
///
/// # Panics
/// Panics if `pool_size < 3` or `exclude >= pool_size`.
pub fn distinct_pair<R: Rng>(exclude: usize, pool_size: usize, rng: &mut R) -> (usize, usize) {
    assert!(pool_size >= 3, "need at least three candidates");
    assert!(exclude < pool_size, "excluded index out of range");

    // Sample from the pool with `exclude` removed, then shift past it
    let pair = index::sample(rng, pool_size - 1, 2);
    let shift = |k: usize| if k >= exclude { k + 1 } else { k };
    (shift(pair.index(0)), shift(pair.index(1)))
}

/// Mutant vector `best + f · (r1 - r2)`.
pub fn best1_mutant(best: &[f64], r1: &[f64], r2: &[f64], f: f64) -> Vec<f64> {
    best.iter()
        .zip(r1.iter().zip(r2))
        .map(|(&b, (&a, &c))| b + f * (a - c))
        .collect()
}

/// Binomial crossover between `target` and `mutant`.
///
/// Gene `j` comes from the mutant when `u ≤ cr` or when `j` is the forced
/// index drawn uniformly from `0..len`; otherwise it is copied from the
/// target. Returns the trial vector and the forced index.
pub fn binomial_crossover<R: Rng>(
    target: &[f64],
    mutant: &[f64],
    cr: f64,
    rng: &mut R,
) -> (Vec<f64>, usize) {
    let n = target.len();
    let forced = rng.random_range(0..n);
    let trial = (0..n)
        .map(|j| {
            if rng.random::<f64>() <= cr || j == forced {
                mutant[j]
            } else {
                target[j]
            }
        })
        .collect();
    (trial, forced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_distinct_pair_minimum_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        for exclude in 0..4 {
            for _ in 0..200 {
                let (a, b) = distinct_pair(exclude, 4, &mut rng);
                assert!(a < 4 && b < 4);
                assert_ne!(a, b);
                assert_ne!(a, exclude);
                assert_ne!(b, exclude);
            }
        }
    }

    #[test]
    fn test_distinct_pair_covers_pool() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [0u32; 6];
        for _ in 0..3000 {
            let (a, b) = distinct_pair(2, 6, &mut rng);
            seen[a] += 1;
            seen[b] += 1;
        }
        assert_eq!(seen[2], 0);
        for (i, &c) in seen.iter().enumerate() {
            if i != 2 {
                assert!(c > 900, "index {i} under-sampled: {seen:?}");
            }
        }
    }

    #[test]
    fn test_best1_mutant() {
        let v = best1_mutant(&[1.0, 1.0], &[3.0, 0.0], &[1.0, 2.0], 0.5);
        assert_eq!(v, vec![2.0, 0.0]);
    }

    #[test]
    fn test_crossover_rate_zero_takes_only_forced_gene() {
        let mut rng = StdRng::seed_from_u64(42);
        let target = vec![0.0; 6];
        let mutant = vec![1.0; 6];
        for _ in 0..200 {
            let (trial, forced) = binomial_crossover(&target, &mutant, 0.0, &mut rng);
            assert_eq!(trial[forced], 1.0);
            assert_eq!(trial.iter().filter(|&&v| v == 1.0).count(), 1);
        }
    }

    #[test]
    fn test_crossover_rate_one_takes_mutant() {
        let mut rng = StdRng::seed_from_u64(42);
        let target = vec![0.0; 6];
        let mutant = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let (trial, _) = binomial_crossover(&target, &mutant, 1.0, &mut rng);
        assert_eq!(trial, mutant);
    }

    proptest! {
        #[test]
        fn prop_trial_differs_at_forced_gene(
            target in prop::collection::vec(-10.0f64..10.0, 1..10),
            cr in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mutant: Vec<f64> = target.iter().map(|v| v + 1.0).collect();
            let (trial, forced) = binomial_crossover(&target, &mutant, cr, &mut rng);
            prop_assert_eq!(trial.len(), target.len());
            prop_assert!(trial[forced] != target[forced]);
        }
    }
}
