//! Game board state and terminal-condition detection.

use crate::common::{GameError, Outcome, Side};
use crate::config::{BOARD_CELLS, WIN_PATTERNS};
use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// A single cell: empty, or marked by one side.
pub type Cell = Option<Side>;

/// A 3x3 board addressed by index 0..8 in row-major order. Cheap to copy,
/// so search code can work on a scratch duplicate without touching the
/// caller's board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Restore a board from raw cells, e.g. a saved position.
    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Board { cells }
    }

    /// Immutable view of all cells.
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Indices of all empty cells, ascending.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Place `side`'s mark at `index`. Fails with `InvalidMove` when the
    /// index is out of range or the cell is occupied; the board is left
    /// unchanged on failure.
    pub fn apply(&mut self, index: usize, side: Side) -> Result<(), GameError> {
        if index >= BOARD_CELLS || self.cells[index].is_some() {
            return Err(GameError::InvalidMove);
        }
        self.cells[index] = Some(side);
        Ok(())
    }

    /// Unchecked placement for search code that has already verified the
    /// cell is empty. Must be paired with `clear` on every branch.
    pub(crate) fn place(&mut self, index: usize, side: Side) {
        self.cells[index] = Some(side);
    }

    /// Revert a hypothetical placement made by `place`.
    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = None;
    }

    /// The side occupying a full win pattern, if any. A board where both
    /// sides hold a pattern is unreachable under legal play and yields
    /// whichever pattern matches first.
    pub fn winner(&self) -> Option<Side> {
        for pattern in WIN_PATTERNS {
            if let Some(side) = self.cells[pattern[0]] {
                if self.cells[pattern[1]] == Some(side) && self.cells[pattern[2]] == Some(side) {
                    return Some(side);
                }
            }
        }
        None
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// True when the board is full and nobody has won.
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// True when the game has concluded by win or draw.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_draw()
    }

    /// Classify the board.
    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(Side::Human) => Outcome::HumanWins,
            Some(Side::Opponent) => Outcome::OpponentWins,
            None if self.is_full() => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                match self.cells[row * 3 + col] {
                    Some(side) => write!(f, " {}", side)?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
