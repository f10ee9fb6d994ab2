use std::collections::HashSet;

use noughts_engine::GameSeed;
use rand::Rng;

/// The game seeds every candidate of one generation is scored on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSet {
    seeds: Vec<GameSeed>,
}

impl SeedSet {
    /// Draws `count` distinct seeds.
    ///
    /// # Panics
    ///
    /// Panics if `count` exceeds the number of distinct 32-bit seeds.
    pub fn random<R>(rng: &mut R, count: usize) -> Self
    where
        R: Rng + ?Sized,
    {
        assert!(
            u64::try_from(count).is_ok_and(|c| c <= 1 << 32),
            "cannot draw {count} distinct 32-bit seeds"
        );
        let mut seen = HashSet::with_capacity(count);
        let mut seeds = Vec::with_capacity(count);
        while seeds.len() < count {
            let seed: GameSeed = rng.random();
            if seen.insert(seed) {
                seeds.push(seed);
            }
        }
        Self { seeds }
    }

    /// Wraps an explicit seed list, kept in the given order.
    #[must_use]
    pub fn from_seeds(seeds: Vec<GameSeed>) -> Self {
        Self { seeds }
    }

    #[must_use]
    pub fn seeds(&self) -> &[GameSeed] {
        &self.seeds
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_random_seeds_are_distinct() {
        let mut rng = Pcg32::seed_from_u64(0);
        let set = SeedSet::random(&mut rng, 1000);
        assert_eq!(set.len(), 1000);
        let unique: HashSet<_> = set.seeds().iter().collect();
        assert_eq!(unique.len(), 1000);
    }

    #[test]
    fn test_random_is_deterministic() {
        let a = SeedSet::random(&mut Pcg32::seed_from_u64(1), 20);
        let b = SeedSet::random(&mut Pcg32::seed_from_u64(1), 20);
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_seeds_keeps_order() {
        let set = SeedSet::from_seeds(vec![GameSeed::new(3), GameSeed::new(1)]);
        assert_eq!(set.seeds(), &[GameSeed::new(3), GameSeed::new(1)]);
        assert!(!set.is_empty());
    }
}
