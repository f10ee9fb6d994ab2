//! Board-level data structures: cells, sides, positions and the board itself.

pub use self::{board::*, cell::*, error::*, position::*};

pub(crate) mod board;
pub(crate) mod cell;
pub(crate) mod error;
pub(crate) mod position;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board, which is also the network input/output width.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;
