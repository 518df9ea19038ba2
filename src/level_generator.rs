use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Default cap on structural height.
pub const DEFAULT_MAX_LEVEL: usize = 5;

/// Default continuation probability for the coin toss.
pub const DEFAULT_PROBABILITY: f64 = 0.5;

/// Assigns a level to each newly inserted node.
///
/// The distribution of produced levels is what keeps the skip list
/// balanced: each level must be reachable from the one below it, and
/// higher levels must be increasingly sparse.
pub trait LevelGenerator {
    /// Highest level this generator may return.
    fn max_level(&self) -> usize;

    /// Draw a level in `[0, self.max_level()]`.
    fn random(&mut self) -> usize;
}

/// A level generator producing a geometric distribution truncated at
/// `max_level`.
///
/// Starting at level 0, the generator repeatedly tosses a biased coin:
/// with probability `p` the candidate level grows by one, otherwise it
/// stops. The probability of a node reaching level `n` is therefore
/// `p^n`, so the expected number of links per node stays constant and
/// search cost stays `O(log n)`.
///
/// The generator owns its RNG. Seed it explicitly with
/// [`GeometricLevelGenerator::with_seed`] when a reproducible sequence
/// is needed (e.g. in tests); otherwise [`GeometricLevelGenerator::new`]
/// seeds from OS entropy.
#[derive(Debug, Clone)]
pub struct GeometricLevelGenerator {
    max_level: usize,
    p: f64,
    rng: SmallRng,
}

impl GeometricLevelGenerator {
    /// Create a generator capped at `max_level` with continuation
    /// probability `p`, seeded from OS entropy.
    ///
    /// # Panics
    ///
    /// Panics if `p` is not in the open interval `(0, 1)`.
    pub fn new(max_level: usize, p: f64) -> Self {
        Self::from_rng(max_level, p, SmallRng::from_os_rng())
    }

    /// Create a generator with a deterministic RNG seeded from `seed`.
    ///
    /// Two generators built with the same arguments produce the same
    /// level sequence.
    ///
    /// # Panics
    ///
    /// Panics if `p` is not in the open interval `(0, 1)`.
    pub fn with_seed(max_level: usize, p: f64, seed: u64) -> Self {
        Self::from_rng(max_level, p, SmallRng::seed_from_u64(seed))
    }

    fn from_rng(max_level: usize, p: f64, rng: SmallRng) -> Self {
        assert!(
            p > 0.0 && p < 1.0,
            "continuation probability must be in (0, 1), got {p}"
        );
        GeometricLevelGenerator { max_level, p, rng }
    }
}

impl Default for GeometricLevelGenerator {
    fn default() -> Self {
        GeometricLevelGenerator::new(DEFAULT_MAX_LEVEL, DEFAULT_PROBABILITY)
    }
}

impl LevelGenerator for GeometricLevelGenerator {
    fn max_level(&self) -> usize {
        self.max_level
    }

    fn random(&mut self) -> usize {
        let mut level = 0;
        while level < self.max_level && self.rng.random::<f64>() < self.p {
            level += 1;
        }
        level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_within_bounds() {
        let mut generator = GeometricLevelGenerator::with_seed(5, 0.5, 42);

        for _ in 0..10_000 {
            let level = generator.random();
            assert!(level <= 5);
        }
    }

    #[test]
    fn zero_max_level_always_returns_zero() {
        let mut generator = GeometricLevelGenerator::with_seed(0, 0.5, 42);

        for _ in 0..100 {
            assert_eq!(generator.random(), 0);
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = GeometricLevelGenerator::with_seed(16, 0.5, 12345);
        let mut b = GeometricLevelGenerator::with_seed(16, 0.5, 12345);

        for _ in 0..1_000 {
            assert_eq!(a.random(), b.random());
        }
    }

    #[test]
    fn geometric_distribution() {
        let mut generator = GeometricLevelGenerator::with_seed(16, 0.5, 7);

        let iterations = 100_000;
        let mut level_counts = [0u32; 17];

        for _ in 0..iterations {
            level_counts[generator.random()] += 1;
        }

        // With p=0.5 each level should hold roughly half the nodes of
        // the level below it. Check with a loose tolerance and skip
        // levels too sparse to be statistically meaningful.
        for i in 1..=16 {
            if level_counts[i] < 100 {
                continue;
            }

            let ratio = level_counts[i - 1] as f64 / level_counts[i] as f64;
            assert!(
                ratio > 1.0 && ratio < 3.0,
                "expected ratio near 2.0 at level {}, got {}",
                i,
                ratio
            );
        }
    }

    #[test]
    #[should_panic(expected = "continuation probability")]
    fn rejects_probability_of_zero() {
        GeometricLevelGenerator::with_seed(5, 0.0, 0);
    }

    #[test]
    #[should_panic(expected = "continuation probability")]
    fn rejects_probability_of_one() {
        GeometricLevelGenerator::with_seed(5, 1.0, 0);
    }
}
