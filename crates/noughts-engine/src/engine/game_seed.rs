use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Seed for a game's deterministic random source.
///
/// Two games started from the same seed draw the same random numbers, so
/// the same sequence of player moves produces the same opponent replies.
///
/// # Example
///
/// ```
/// use noughts_engine::GameSeed;
/// use rand::Rng as _;
///
/// let seed: GameSeed = rand::rng().random();
/// let mut a = seed.rng();
/// let mut b = seed.rng();
/// assert_eq!(a.random::<u64>(), b.random::<u64>());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
    derive_more::FromStr,
)]
#[serde(transparent)]
pub struct GameSeed(u32);

impl GameSeed {
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Creates the random source for a game started from this seed.
    #[must_use]
    pub fn rng(self) -> Pcg32 {
        Pcg32::seed_from_u64(u64::from(self.0))
    }
}

/// Allows drawing seeds with `rng.random()`.
impl Distribution<GameSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> GameSeed {
        GameSeed(rng.random())
    }
}
