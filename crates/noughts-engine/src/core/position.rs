use std::fmt;

use serde::{Deserialize, Serialize};

use super::{BOARD_SIZE, CELL_COUNT, error::BoardError};

/// A cell coordinate on the board.
///
/// `row` and `col` are both in `0..3`.
///
/// Network inputs and outputs address cells column-major (`col * 3 + row`);
/// use [`Position::input_index`] and [`Position::from_input_index`] to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: u8,
    col: u8,
}

#[derive(Deserialize)]
struct RawPosition {
    row: usize,
    col: usize,
}

impl TryFrom<RawPosition> for Position {
    type Error = BoardError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Self::try_new(raw.row, raw.col)
    }
}

impl Position {
    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Like [`Self::new`], but reports an out-of-range coordinate as an error.
    pub fn try_new(row: usize, col: usize) -> Result<Self, BoardError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self::new(row, col))
        } else {
            Err(BoardError::PositionOutOfRange { row, col })
        }
    }

    /// Creates a position from a row-major index (`row * 3 + col`).
    #[must_use]
    pub const fn from_row_major(index: usize) -> Self {
        Self::new(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    /// Creates a position from a network input/output index (`col * 3 + row`).
    #[must_use]
    pub const fn from_input_index(index: usize) -> Self {
        assert!(index < CELL_COUNT);
        Self::new(index % BOARD_SIZE, index / BOARD_SIZE)
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Returns the network input/output index of this cell (`col * 3 + row`).
    #[must_use]
    pub const fn input_index(self) -> usize {
        self.col() * BOARD_SIZE + self.row()
    }

    /// Iterates over all positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CELL_COUNT).map(Self::from_row_major)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_index_is_column_major() {
        assert_eq!(Position::new(0, 0).input_index(), 0);
        assert_eq!(Position::new(1, 0).input_index(), 1);
        assert_eq!(Position::new(0, 1).input_index(), 3);
        assert_eq!(Position::new(2, 1).input_index(), 5);
        assert_eq!(Position::new(2, 2).input_index(), 8);
    }

    #[test]
    fn test_input_index_inverse() {
        for index in 0..CELL_COUNT {
            assert_eq!(Position::from_input_index(index).input_index(), index);
        }
    }

    #[test]
    fn test_all_is_row_major() {
        let all: Vec<_> = Position::all().collect();
        assert_eq!(all.len(), CELL_COUNT);
        assert_eq!(all[1], Position::new(0, 1));
        assert_eq!(all[3], Position::new(1, 0));
    }

    #[test]
    fn test_try_new() {
        assert_eq!(Position::try_new(2, 1), Ok(Position::new(2, 1)));
        assert_eq!(
            Position::try_new(0, 3),
            Err(BoardError::PositionOutOfRange { row: 0, col: 3 })
        );
    }

    #[test]
    fn test_deserialize_checks_range() {
        let pos: Position = serde_json::from_str(r#"{"row":2,"col":0}"#).unwrap();
        assert_eq!(pos, Position::new(2, 0));
        let err = serde_json::from_str::<Position>(r#"{"row":7,"col":0}"#).unwrap_err();
        assert!(err.to_string().contains("position (7, 0) is off the board"));
        assert_eq!(serde_json::to_string(&pos).unwrap(), r#"{"row":2,"col":0}"#);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn test_out_of_range_panics() {
        let _ = Position::new(3, 0);
    }
}
