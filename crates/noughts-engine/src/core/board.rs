use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use super::{
    BOARD_SIZE, CELL_COUNT,
    cell::{Cell, Side},
    error::BoardError,
    position::Position,
};

/// Classification of a board.
///
/// Derived from the cells after every accepted move, never set directly.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum GameOutcome {
    #[display("in progress")]
    InProgress,
    #[display("x wins")]
    XWins,
    #[display("o wins")]
    OWins,
    #[display("draw")]
    Draw,
}

impl GameOutcome {
    /// Returns `true` if no further moves are accepted.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns the winning side, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            GameOutcome::XWins => Some(Side::X),
            GameOutcome::OWins => Some(Side::O),
            GameOutcome::InProgress | GameOutcome::Draw => None,
        }
    }

    /// Scores the outcome from `side`'s point of view.
    ///
    /// Returns `+1` for a win, `-1` for a loss and `0` for a draw or an
    /// unfinished game.
    #[must_use]
    pub fn score_for(self, side: Side) -> i32 {
        match self.winner() {
            Some(winner) if winner == side => 1,
            Some(_) => -1,
            None => 0,
        }
    }
}

const fn row_line(row: usize) -> [Position; BOARD_SIZE] {
    [
        Position::new(row, 0),
        Position::new(row, 1),
        Position::new(row, 2),
    ]
}

const fn col_line(col: usize) -> [Position; BOARD_SIZE] {
    [
        Position::new(0, col),
        Position::new(1, col),
        Position::new(2, col),
    ]
}

/// The 8 winning lines in scan order.
///
/// Row and column sharing an index are paired (row 0, column 0, row 1, ...),
/// followed by the forward diagonal and the back diagonal. This order decides
/// which cell [`Board::find_winning_cell`] returns when several qualify, so it
/// must not change.
pub const SCAN_LINES: [[Position; BOARD_SIZE]; 8] = [
    row_line(0),
    col_line(0),
    row_line(1),
    col_line(1),
    row_line(2),
    col_line(2),
    [
        Position::new(0, 0),
        Position::new(1, 1),
        Position::new(2, 2),
    ],
    [
        Position::new(0, 2),
        Position::new(1, 1),
        Position::new(2, 0),
    ],
];

/// Tic-tac-toe game state machine.
///
/// The board owns the 3×3 cells, whose turn it is and the derived
/// [`GameOutcome`]. Cells change only through [`Board::apply_move`], and once
/// the outcome is terminal the board never changes again.
///
/// # Example
///
/// ```
/// use noughts_engine::{Board, GameOutcome, Position, Side};
///
/// let mut board = Board::new();
/// assert_eq!(board.turn(), Side::X);
///
/// assert!(board.apply_move(Position::new(1, 1)));
/// assert_eq!(board.turn(), Side::O);
///
/// // occupied cells are rejected without changing anything
/// assert!(!board.apply_move(Position::new(1, 1)));
/// assert_eq!(board.outcome(), GameOutcome::InProgress);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardCells")]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    turn: Side,
    outcome: GameOutcome,
}

/// Serialized turn and outcome are ignored and derived from the cells.
#[derive(Deserialize)]
struct BoardCells {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl TryFrom<BoardCells> for Board {
    type Error = BoardError;

    fn try_from(raw: BoardCells) -> Result<Self, Self::Error> {
        Self::from_cells(raw.cells)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board with X to move.
    pub const INITIAL: Self = Self {
        cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        turn: Side::X,
        outcome: GameOutcome::InProgress,
    };

    #[must_use]
    pub const fn new() -> Self {
        Self::INITIAL
    }

    /// Rebuilds a board from its cells, deriving the turn and the outcome.
    ///
    /// Fails if the cells cannot arise from alternating moves that stop at
    /// the first completed line.
    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, BoardError> {
        let count = |mark: Cell| cells.as_flattened().iter().filter(|c| **c == mark).count();
        let (x, o) = (count(Cell::X), count(Cell::O));
        if x != o && x != o + 1 {
            return Err(BoardError::MarkCount { x, o });
        }
        let turn = if x == o { Side::X } else { Side::O };
        let mut board = Self {
            cells,
            turn,
            outcome: GameOutcome::InProgress,
        };
        match (board.has_line(Side::X), board.has_line(Side::O)) {
            (true, true) => return Err(BoardError::BothSidesWin),
            // the winner must have made the last move
            (true, false) if turn == Side::X => {
                return Err(BoardError::MoveAfterWin { winner: Side::X });
            }
            (false, true) if turn == Side::O => {
                return Err(BoardError::MoveAfterWin { winner: Side::O });
            }
            _ => {}
        }
        board.outcome = board.compute_outcome();
        Ok(board)
    }

    /// Returns the side to move next.
    #[must_use]
    pub const fn turn(&self) -> Side {
        self.turn
    }

    #[must_use]
    pub const fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    #[must_use]
    pub const fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Returns the cells as rows, for rendering.
    #[must_use]
    pub const fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::all().map(|pos| (pos, self.cell(pos)))
    }

    /// Returns the empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> ArrayVec<Position, CELL_COUNT> {
        self.cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Returns the number of marks placed so far.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.cells().filter(|(_, cell)| !cell.is_empty()).count()
    }

    /// Places the mover's mark at `pos`.
    ///
    /// Does nothing if the game is over or the cell is occupied. Otherwise the
    /// turn flips and the outcome is recomputed.
    ///
    /// Returns whether the move was accepted.
    pub fn apply_move(&mut self, pos: Position) -> bool {
        if self.is_terminal() || !self.cell(pos).is_empty() {
            return false;
        }
        self.cells[pos.row()][pos.col()] = self.turn.mark();
        self.turn = self.turn.opponent();
        self.outcome = self.compute_outcome();
        true
    }

    /// Returns `true` if `side` owns all three cells of any line.
    #[must_use]
    pub fn has_line(&self, side: Side) -> bool {
        let mark = side.mark();
        SCAN_LINES
            .iter()
            .any(|line| line.iter().all(|pos| self.cell(*pos) == mark))
    }

    fn compute_outcome(&self) -> GameOutcome {
        if self.has_line(Side::X) {
            GameOutcome::XWins
        } else if self.has_line(Side::O) {
            GameOutcome::OWins
        } else if self.cells().all(|(_, cell)| !cell.is_empty()) {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    /// Finds a cell that completes a line for `side`.
    ///
    /// A line qualifies if it has exactly one empty cell and no cell owned by
    /// the other side. Lines are scanned in [`SCAN_LINES`] order and the first
    /// qualifying empty cell is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use noughts_engine::{Board, Position, Side};
    ///
    /// let mut board = Board::new();
    /// board.apply_move(Position::new(0, 0)); // X
    /// board.apply_move(Position::new(1, 0)); // O
    /// board.apply_move(Position::new(0, 1)); // X
    ///
    /// assert_eq!(board.find_winning_cell(Side::X), Some(Position::new(0, 2)));
    /// ```
    #[must_use]
    pub fn find_winning_cell(&self, side: Side) -> Option<Position> {
        let mark = side.mark();
        SCAN_LINES.iter().find_map(|line| {
            let mut empty = None;
            for &pos in line {
                match self.cell(pos) {
                    Cell::Empty => {
                        if empty.replace(pos).is_some() {
                            return None;
                        }
                    }
                    cell if cell == mark => {}
                    _ => return None,
                }
            }
            empty
        })
    }

    /// Encodes the board as a network input vector.
    ///
    /// X is `+1`, O is `-1` and an empty cell is `0`. Entry `i` holds the cell
    /// at [`Position::from_input_index(i)`](Position::from_input_index).
    #[must_use]
    pub fn input_vector(&self) -> [f64; CELL_COUNT] {
        let mut inputs = [0.0; CELL_COUNT];
        for (pos, cell) in self.cells() {
            inputs[pos.input_index()] = cell.input_value();
        }
        inputs
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let [a, b, c] = row.map(Cell::to_char);
            writeln!(f, "{a} {b} {c}")?;
        }
        match self.outcome {
            GameOutcome::InProgress => write!(f, "{} turn", self.turn),
            outcome => write!(f, "{outcome}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[(usize, usize)]) -> Board {
        let mut board = Board::new();
        for &(row, col) in moves {
            assert!(
                board.apply_move(Position::new(row, col)),
                "move ({row}, {col}) rejected on\n{board}"
            );
        }
        board
    }

    fn assert_consistent(board: &Board) {
        let x = board.has_line(Side::X);
        let o = board.has_line(Side::O);
        assert!(!(x && o), "both sides have a line:\n{board}");
        if board.outcome() == GameOutcome::Draw {
            assert_eq!(board.move_count(), CELL_COUNT);
            assert!(!x && !o);
        }
    }

    #[test]
    fn test_initial_board() {
        let board = Board::new();
        assert_eq!(board.turn(), Side::X);
        assert_eq!(board.outcome(), GameOutcome::InProgress);
        assert_eq!(board.empty_cells().len(), CELL_COUNT);
        assert!(board.cells().all(|(_, cell)| cell.is_empty()));
    }

    #[test]
    fn test_turn_flips_after_move() {
        let board = play(&[(0, 0)]);
        assert_eq!(board.cell(Position::new(0, 0)), Cell::X);
        assert_eq!(board.turn(), Side::O);
        let board = play(&[(0, 0), (2, 2)]);
        assert_eq!(board.cell(Position::new(2, 2)), Cell::O);
        assert_eq!(board.turn(), Side::X);
    }

    #[test]
    fn test_diagonal_win() {
        // X . . / O X . / O . X
        let board = play(&[(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)]);
        assert_eq!(board.outcome(), GameOutcome::XWins);
        assert_consistent(&board);
    }

    #[test]
    fn test_back_diagonal_win_for_o() {
        let board = play(&[(0, 0), (0, 2), (0, 1), (1, 1), (2, 2), (2, 0)]);
        assert_eq!(board.outcome(), GameOutcome::OWins);
        assert_consistent(&board);
    }

    #[test]
    fn test_column_win() {
        let board = play(&[(0, 1), (0, 0), (1, 1), (1, 0), (2, 1)]);
        assert_eq!(board.outcome(), GameOutcome::XWins);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X / X O O / O X X
        let board = play(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ]);
        assert_eq!(board.outcome(), GameOutcome::Draw);
        assert!(board.empty_cells().is_empty());
        assert_consistent(&board);
    }

    #[test]
    fn test_occupied_cell_is_noop() {
        let mut board = play(&[(1, 1), (0, 0)]);
        let before = board.clone();
        assert!(!board.apply_move(Position::new(1, 1)));
        assert!(!board.apply_move(Position::new(0, 0)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_terminal_board_is_frozen() {
        let mut board = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(board.outcome(), GameOutcome::XWins);
        let before = board.clone();
        for pos in Position::all() {
            assert!(!board.apply_move(pos));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_find_winning_cell_in_row() {
        // X X . / O O . / . . .
        let board = play(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(board.find_winning_cell(Side::X), Some(Position::new(0, 2)));
        assert_eq!(board.find_winning_cell(Side::O), Some(Position::new(1, 2)));
    }

    #[test]
    fn test_find_winning_cell_ignores_blocked_lines() {
        // X X O / . . . / . . .
        let board = play(&[(0, 0), (0, 2), (0, 1)]);
        assert_eq!(board.find_winning_cell(Side::X), None);
        assert_eq!(board.find_winning_cell(Side::O), None);
    }

    #[test]
    fn test_find_winning_cell_in_column() {
        // X O . / . . . / X O .
        let board = play(&[(0, 0), (0, 1), (2, 0), (2, 1)]);
        assert_eq!(board.find_winning_cell(Side::X), Some(Position::new(1, 0)));
        assert_eq!(board.find_winning_cell(Side::O), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_find_winning_cell_scans_row_before_column() {
        // X X . / X . O / . . O
        // row 0 and column 0 both qualify for X
        let board = play(&[(0, 0), (2, 2), (0, 1), (1, 2), (1, 0)]);
        assert_eq!(board.find_winning_cell(Side::X), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_find_winning_cell_diagonals_last() {
        // X O . / O X . / . . .
        let board = play(&[(0, 0), (0, 1), (1, 1), (1, 0)]);
        assert_eq!(board.find_winning_cell(Side::X), Some(Position::new(2, 2)));
    }

    #[test]
    fn test_input_vector_is_column_major() {
        let board = play(&[(0, 1), (1, 0)]);
        let inputs = board.input_vector();
        // X at (0, 1) -> index 3, O at (1, 0) -> index 1
        assert_eq!(inputs[3], 1.0);
        assert_eq!(inputs[1], -1.0);
        assert_eq!(inputs.iter().filter(|v| **v == 0.0).count(), 7);
    }

    #[test]
    fn test_outcome_score_for() {
        assert_eq!(GameOutcome::XWins.score_for(Side::X), 1);
        assert_eq!(GameOutcome::XWins.score_for(Side::O), -1);
        assert_eq!(GameOutcome::OWins.score_for(Side::O), 1);
        assert_eq!(GameOutcome::Draw.score_for(Side::X), 0);
        assert_eq!(GameOutcome::InProgress.score_for(Side::O), 0);
    }

    #[test]
    fn test_display() {
        let board = play(&[(0, 0), (1, 1)]);
        assert_eq!(board.to_string(), "X . .\n. O .\n. . .\nx turn");
        let board = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(board.to_string().ends_with("x wins"));
    }

    #[test]
    fn test_deserialize_derives_outcome() {
        let json = r#"{
            "cells": [["X", "X", "X"], ["O", "O", "Empty"], ["Empty", "Empty", "Empty"]],
            "turn": "O",
            "outcome": "InProgress"
        }"#;
        let mut board: Board = serde_json::from_str(json).unwrap();
        assert_eq!(board.outcome(), GameOutcome::XWins);
        assert!(!board.apply_move(Position::new(1, 2)));
        assert_eq!(board.move_count(), 5);
    }

    #[test]
    fn test_from_cells_derives_turn() {
        let board = play(&[(0, 0), (1, 1), (2, 2)]);
        let rebuilt = Board::from_cells(*board.rows()).unwrap();
        assert_eq!(rebuilt, board);
        assert_eq!(rebuilt.turn(), Side::O);
        assert_eq!(Board::from_cells(*Board::new().rows()), Ok(Board::new()));
    }

    #[test]
    fn test_from_cells_rejects_unreachable_boards() {
        use Cell::{Empty as E, O, X};
        assert_eq!(
            Board::from_cells([[X, X, E], [E, E, E], [E, E, E]]),
            Err(BoardError::MarkCount { x: 2, o: 0 })
        );
        assert_eq!(
            Board::from_cells([[X, X, X], [O, O, O], [X, E, E]]),
            Err(BoardError::BothSidesWin)
        );
        assert_eq!(
            Board::from_cells([[X, X, X], [O, O, E], [O, E, E]]),
            Err(BoardError::MoveAfterWin { winner: Side::X })
        );
        assert_eq!(
            Board::from_cells([[O, O, O], [X, X, E], [X, X, E]]),
            Err(BoardError::MoveAfterWin { winner: Side::O })
        );
        let o_wins = Board::from_cells([[O, O, O], [X, X, E], [X, E, E]]).unwrap();
        assert_eq!(o_wins.outcome(), GameOutcome::OWins);
    }

    #[test]
    fn test_serde_roundtrip_keeps_outcome() {
        let board = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        let json = serde_json::to_string(&board).unwrap();
        let decoded: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, board);
    }
}
