use serde::{Deserialize, Serialize};

/// One of the two players.
///
/// X always moves first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::FromStr,
)]
pub enum Side {
    #[default]
    #[display("x")]
    X,
    #[display("o")]
    O,
}

impl Side {
    /// Returns the other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// Returns the mark this side places on the board.
    #[must_use]
    pub const fn mark(self) -> Cell {
        match self {
            Side::X => Cell::X,
            Side::O => Cell::O,
        }
    }
}

/// State of a single board cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::IsVariant,
)]
pub enum Cell {
    X,
    O,
    #[default]
    Empty,
}

impl Cell {
    /// Returns the side owning this cell, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Cell::X => Some(Side::X),
            Cell::O => Some(Side::O),
            Cell::Empty => None,
        }
    }

    /// Network input encoding: X → +1, O → −1, empty → 0.
    #[must_use]
    pub const fn input_value(self) -> f64 {
        match self {
            Cell::X => 1.0,
            Cell::O => -1.0,
            Cell::Empty => 0.0,
        }
    }

    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Cell::X => 'X',
            Cell::O => 'O',
            Cell::Empty => '.',
        }
    }
}
