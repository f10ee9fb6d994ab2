use rand::{Rng, seq::IndexedRandom as _};

use crate::core::{Board, Position};

/// Scripted move policy used as a fitness oracle.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    derive_more::Display,
    derive_more::FromStr,
)]
pub enum Opponent {
    /// Plays a uniformly random empty cell.
    #[display("random")]
    Random,
    /// Takes a win if possible, else blocks, else plays randomly.
    #[default]
    #[display("smart")]
    Smart,
}

impl Opponent {
    /// Every opponent, in the order training evaluates them.
    pub const ALL: [Opponent; 2] = [Opponent::Random, Opponent::Smart];

    /// Chooses a move for the side to move, without applying it.
    ///
    /// Returns `None` if the game is over or no cell is empty.
    pub fn choose_move<R>(self, board: &Board, rng: &mut R) -> Option<Position>
    where
        R: Rng + ?Sized,
    {
        match self {
            Opponent::Random => random_move(board, rng),
            Opponent::Smart => smart_move(board, rng),
        }
    }

    /// Chooses a move and applies it to `board`.
    pub fn play<R>(self, board: &mut Board, rng: &mut R) -> Option<Position>
    where
        R: Rng + ?Sized,
    {
        let pos = self.choose_move(board, rng)?;
        board.apply_move(pos);
        Some(pos)
    }
}

/// Picks one of the empty cells (row-major order) uniformly at random.
pub fn random_move<R>(board: &Board, rng: &mut R) -> Option<Position>
where
    R: Rng + ?Sized,
{
    if board.is_terminal() {
        return None;
    }
    board.empty_cells().choose(rng).copied()
}

/// Wins if possible, otherwise blocks the opponent's win, otherwise plays
/// [`random_move`].
///
/// `rng` is only consumed by the random fallback.
pub fn smart_move<R>(board: &Board, rng: &mut R) -> Option<Position>
where
    R: Rng + ?Sized,
{
    if board.is_terminal() {
        return None;
    }
    let mover = board.turn();
    board
        .find_winning_cell(mover)
        .or_else(|| board.find_winning_cell(mover.opponent()))
        .or_else(|| random_move(board, rng))
}
