use super::cell::Side;

/// A board or position that no legal game can reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    #[display("position ({row}, {col}) is off the board")]
    PositionOutOfRange { row: usize, col: usize },
    #[display("x has {x} marks and o has {o}; x must have as many as o or one more")]
    MarkCount { x: usize, o: usize },
    #[display("both sides have a line")]
    BothSidesWin,
    #[display("{winner} has a line but a move was made after it")]
    MoveAfterWin { winner: Side },
}
