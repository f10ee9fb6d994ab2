//! Playing seeded games and scoring candidate networks.

use std::thread;

use noughts_engine::{Board, GameOutcome, GameSeed, Opponent, SeededGame, Side};
use noughts_network::Network;

use crate::SeedSet;

/// Plays one game of `network` (as `side`) against `opponent`.
///
/// The game's random source comes from `seed`. When the network plays O the
/// opponent opens. Returns the finished board.
#[must_use]
pub fn play_game(network: &Network, opponent: Opponent, side: Side, seed: GameSeed) -> Board {
    let mut game = SeededGame::with_seed(seed);
    if side == Side::O {
        game.play_opponent(opponent);
    }
    while !game.board().is_terminal() {
        let Some(pos) = network.choose_move(game.board()) else {
            break;
        };
        game.play_at(pos);
        game.play_opponent(opponent);
    }
    game.into_board()
}

/// Accumulated result of a candidate's games.
///
/// Each win adds 1, each loss subtracts 1 and draws add nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CandidateScore {
    total: i32,
    games: u32,
}

impl CandidateScore {
    pub fn record(&mut self, outcome: GameOutcome, side: Side) {
        self.total += outcome.score_for(side);
        self.games += 1;
    }

    #[must_use]
    pub fn total(&self) -> i32 {
        self.total
    }

    #[must_use]
    pub fn games(&self) -> u32 {
        self.games
    }

    /// Returns the mean score per game, in `[-1, 1]`.
    ///
    /// # Panics
    ///
    /// Panics if no game has been recorded.
    #[must_use]
    pub fn average(&self) -> f64 {
        assert!(self.games > 0, "no games recorded");
        f64::from(self.total) / f64::from(self.games)
    }
}

/// Scores `network` on every seed against every opponent.
///
/// Random-opponent games are played first, then smart-opponent games, each
/// in seed order.
#[must_use]
pub fn score_candidate(network: &Network, side: Side, seeds: &SeedSet) -> CandidateScore {
    let mut score = CandidateScore::default();
    for opponent in Opponent::ALL {
        for &seed in seeds.seeds() {
            let board = play_game(network, opponent, side, seed);
            score.record(board.outcome(), side);
        }
    }
    score
}

/// Scores every candidate in parallel, one thread per candidate.
///
/// The result is in candidate order.
#[must_use]
pub fn score_candidates(
    candidates: &[&Network],
    side: Side,
    seeds: &SeedSet,
) -> Vec<CandidateScore> {
    let mut scores = vec![CandidateScore::default(); candidates.len()];
    thread::scope(|s| {
        for (network, score) in candidates.iter().zip(&mut scores) {
            s.spawn(move || {
                *score = score_candidate(network, side, seeds);
            });
        }
    });
    scores
}

/// Returns the index of the first maximum.
///
/// A later candidate replaces the current best only if it is strictly
/// better, so exact ties go to the lowest index.
///
/// # Panics
///
/// Panics if `averages` is empty.
#[must_use]
pub fn select_winner(averages: &[f64]) -> usize {
    assert!(!averages.is_empty(), "no candidates to select from");
    let mut best = 0;
    for (i, &average) in averages.iter().enumerate().skip(1) {
        if average > averages[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use noughts_engine::{Cell, Position};
    use noughts_network::NetworkConfig;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn random_network(seed: u64) -> Network {
        Network::new(&NetworkConfig::default(), &mut Pcg32::seed_from_u64(seed)).unwrap()
    }

    fn seeds(count: u32) -> SeedSet {
        SeedSet::from_seeds((0..count).map(GameSeed::new).collect())
    }

    #[test]
    fn test_play_game_finishes() {
        let network = random_network(0);
        for side in [Side::X, Side::O] {
            for opponent in Opponent::ALL {
                for seed in 0..20 {
                    let board = play_game(&network, opponent, side, GameSeed::new(seed));
                    assert!(board.is_terminal());
                }
            }
        }
    }

    #[test]
    fn test_play_game_is_deterministic() {
        let network = random_network(1);
        for side in [Side::X, Side::O] {
            let a = play_game(&network, Opponent::Random, side, GameSeed::new(9));
            let b = play_game(&network, Opponent::Random, side, GameSeed::new(9));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_playing_o_lets_opponent_open() {
        // all outputs tie, so the network always picks (0, 0) when it is free
        let network = Network::filled(&NetworkConfig::default(), 0.0, 0.0).unwrap();
        let board = play_game(&network, Opponent::Smart, Side::X, GameSeed::new(0));
        assert_eq!(board.cell(Position::new(0, 0)), Side::X.mark());

        let mut opened_elsewhere = false;
        for seed in 0..20 {
            let board = play_game(&network, Opponent::Smart, Side::O, GameSeed::new(seed));
            let corner = board.cell(Position::new(0, 0));
            assert_ne!(corner, Cell::Empty);
            opened_elsewhere |= corner == Side::O.mark();
        }
        assert!(opened_elsewhere);
    }

    #[test]
    fn test_score_candidate_counts_both_opponents() {
        let network = random_network(2);
        let score = score_candidate(&network, Side::X, &seeds(5));
        assert_eq!(score.games(), 10);
        assert!(score.total().abs() <= 10);
        assert!((-1.0..=1.0).contains(&score.average()));
    }

    #[test]
    fn test_score_candidates_matches_sequential() {
        let networks: Vec<Network> = (0..4).map(random_network).collect();
        let refs: Vec<&Network> = networks.iter().collect();
        let seeds = seeds(8);
        let parallel = score_candidates(&refs, Side::O, &seeds);
        let sequential: Vec<CandidateScore> = networks
            .iter()
            .map(|n| score_candidate(n, Side::O, &seeds))
            .collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_candidate_score_average() {
        let mut score = CandidateScore::default();
        score.record(GameOutcome::XWins, Side::X);
        score.record(GameOutcome::XWins, Side::X);
        score.record(GameOutcome::OWins, Side::X);
        score.record(GameOutcome::Draw, Side::X);
        assert_eq!(score.total(), 1);
        assert_eq!(score.average(), 0.25);
    }

    #[test]
    fn test_select_winner_first_maximum() {
        assert_eq!(select_winner(&[0.1]), 0);
        assert_eq!(select_winner(&[0.2, 0.2, 0.2]), 0);
        assert_eq!(select_winner(&[0.1, 0.5, 0.5, 0.3]), 1);
        assert_eq!(select_winner(&[-1.0, -0.5, 0.9]), 2);
    }

    #[test]
    #[should_panic(expected = "no candidates")]
    fn test_select_winner_empty() {
        let _ = select_winner(&[]);
    }
}
