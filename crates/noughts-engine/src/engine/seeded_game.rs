use rand_pcg::Pcg32;

use crate::core::{Board, Position};

use super::{game_seed::GameSeed, opponent::Opponent};

/// A fresh board paired with a random source seeded for this game only.
///
/// Opponent moves draw from the game's own random source, so two games
/// started from the same seed answer the same player moves identically.
#[derive(Debug, Clone)]
pub struct SeededGame {
    seed: GameSeed,
    board: Board,
    rng: Pcg32,
}

impl SeededGame {
    #[must_use]
    pub fn with_seed(seed: GameSeed) -> Self {
        Self {
            seed,
            board: Board::new(),
            rng: seed.rng(),
        }
    }

    #[must_use]
    pub fn seed(&self) -> GameSeed {
        self.seed
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays the side to move at `pos`. Returns whether the move was accepted.
    pub fn play_at(&mut self, pos: Position) -> bool {
        self.board.apply_move(pos)
    }

    /// Lets `opponent` move for the side to move.
    pub fn play_opponent(&mut self, opponent: Opponent) -> Option<Position> {
        opponent.play(&mut self.board, &mut self.rng)
    }

    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }
}
