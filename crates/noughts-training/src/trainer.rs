//! The (1+λ) generation loop.

use noughts_engine::Side;
use noughts_network::Network;
use noughts_stats::descriptive::DescriptiveStats;
use rand::SeedableRng as _;
use rand_pcg::Pcg32;

use crate::{
    CandidateScore, SeedSet, TrainingEntry, TrainingRecord, score_candidates, select_winner,
};

/// Summary of one completed generation.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Generation number, starting at 1.
    pub generation: usize,
    /// Number of candidates scored, the parent included.
    pub pool_size: usize,
    /// Pool index of the winner; 0 means the parent was kept.
    pub selected_index: usize,
    /// The entry appended to the training record.
    pub entry: TrainingEntry,
    /// Average scores across the whole pool.
    pub fitness_stats: DescriptiveStats,
    /// Raw score of every candidate, in pool order.
    pub scores: Vec<CandidateScore>,
}

/// Owns the network being trained and its history.
///
/// The current network is only replaced between generations.
#[derive(Debug, Clone)]
pub struct Trainer {
    current: Network,
    side: Side,
    generation: usize,
    record: TrainingRecord,
    rng: Pcg32,
}

impl Trainer {
    /// Creates a trainer seeded from the thread-local generator.
    #[must_use]
    pub fn new(network: Network) -> Self {
        Self::with_rng(network, Pcg32::from_rng(&mut rand::rng()))
    }

    /// Creates a trainer whose mutations and game seeds are reproducible.
    #[must_use]
    pub fn with_seed(network: Network, seed: u64) -> Self {
        Self::with_rng(network, Pcg32::seed_from_u64(seed))
    }

    fn with_rng(network: Network, rng: Pcg32) -> Self {
        Self {
            current: network,
            side: Side::X,
            generation: 0,
            record: TrainingRecord::new(),
            rng,
        }
    }

    #[must_use]
    pub fn current(&self) -> &Network {
        &self.current
    }

    #[must_use]
    pub fn into_network(self) -> Network {
        self.current
    }

    /// Side the network plays in training games.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    pub fn set_side(&mut self, side: Side) {
        self.side = side;
    }

    /// Number of completed generations.
    #[must_use]
    pub fn generation(&self) -> usize {
        self.generation
    }

    #[must_use]
    pub fn record(&self) -> &TrainingRecord {
        &self.record
    }

    /// Runs one generation.
    ///
    /// Scores the current network and `num_mutants` independent mutants of
    /// it on `num_games` fresh seeds against each opponent, then keeps the
    /// first best-scoring candidate.
    ///
    /// # Panics
    ///
    /// Panics if `num_games` is zero.
    pub fn run_generation(&mut self, num_games: usize, num_mutants: usize) -> GenerationReport {
        assert!(num_games > 0, "a generation needs at least one game");

        let mut mutants: Vec<Network> = (0..num_mutants)
            .map(|_| self.current.mutate(&mut self.rng))
            .collect();
        let seeds = SeedSet::random(&mut self.rng, num_games);

        let scores = {
            let pool: Vec<&Network> = std::iter::once(&self.current).chain(&mutants).collect();
            score_candidates(&pool, self.side, &seeds)
        };
        let averages: Vec<f64> = scores.iter().map(CandidateScore::average).collect();

        let selected_index = select_winner(&averages);
        if selected_index > 0 {
            self.current = mutants.swap_remove(selected_index - 1);
        }

        let entry = TrainingEntry {
            fitness: averages[selected_index],
            mutability: self.current.mutability(),
        };
        self.record.push(entry);
        self.generation += 1;

        let fitness_stats =
            DescriptiveStats::new(averages.iter().copied()).expect("pool contains the parent");
        GenerationReport {
            generation: self.generation,
            pool_size: averages.len(),
            selected_index,
            entry,
            fitness_stats,
            scores,
        }
    }
}
