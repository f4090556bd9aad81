//! Binary tournament selection.
//!
//! Assumes **minimization** (lower fitness = better).
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::seq::index;
use rand::Rng;

/// Picks two distinct indices uniformly and returns the fitter one.
///
/// On an exact fitness tie the second sampled index wins.
///
/// # Panics
/// Panics if `fitness` has fewer than two entries.
pub fn binary_tournament<R: Rng>(fitness: &[f64], rng: &mut R) -> usize {
    assert!(
        fitness.len() >= 2,
        "binary tournament needs at least two candidates"
    );

    let pair = index::sample(rng, fitness.len(), 2);
    let (a, b) = (pair.index(0), pair.index(1));
    if fitness[a] < fitness[b] {
        a
    } else {
        b
    }
}

/// Runs `slots` independent binary tournaments and returns the winners.
///
/// The result is the mating pool parents are later drawn from, with
/// replacement.
pub fn tournament_pool<R: Rng>(fitness: &[f64], slots: usize, rng: &mut R) -> Vec<usize> {
    (0..slots).map(|_| binary_tournament(fitness, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_worst_never_wins() {
        let fitness = [10.0, 5.0, 1.0, 8.0];
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..5000 {
            assert_ne!(binary_tournament(&fitness, &mut rng), 0);
        }
    }

    #[test]
    fn test_best_selected_most_often() {
        let fitness = [10.0, 5.0, 1.0, 8.0];
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[binary_tournament(&fitness, &mut rng)] += 1;
        }
        // Best wins every pair it appears in: P = 1/2
        assert!(
            counts[2] > 4500,
            "expected best to win about half the time, got {counts:?}"
        );
        assert!(counts[2] > counts[1] && counts[1] > counts[3]);
    }

    #[test]
    fn test_two_candidates_always_picks_better() {
        let fitness = [3.0, -1.0];
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(binary_tournament(&fitness, &mut rng), 1);
        }
    }

    #[test]
    fn test_equal_fitness_roughly_uniform() {
        let fitness = [5.0; 4];
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[binary_tournament(&fitness, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_pool_size() {
        let fitness = [4.0, 3.0, 2.0, 1.0, 0.0];
        let mut rng = StdRng::seed_from_u64(9);
        let pool = tournament_pool(&fitness, 20, &mut rng);
        assert_eq!(pool.len(), 20);
        assert!(pool.iter().all(|&i| i >= 1));
    }

    #[test]
    #[should_panic(expected = "at least two candidates")]
    fn test_single_candidate_panics() {
        let mut rng = StdRng::seed_from_u64(42);
        binary_tournament(&[1.0], &mut rng);
    }
}
