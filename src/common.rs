//! Common types for tic-tac-toe: sides, outcomes and game errors.

use core::fmt;

/// One of the two players. The human always plays `X`, the computer
/// opponent always plays `O`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Human,
    Opponent,
}

impl Side {
    /// The side that moves after this one.
    pub fn other(self) -> Side {
        match self {
            Side::Human => Side::Opponent,
            Side::Opponent => Side::Human,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => write!(f, "X"),
            Side::Opponent => write!(f, "O"),
        }
    }
}

/// Terminal classification of a board, recomputed on demand and never
/// stored independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    InProgress,
    HumanWins,
    OpponentWins,
    Draw,
}

/// Errors surfaced by board and engine operations. All are local,
/// synchronous and recoverable by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Move targets an occupied cell or an index outside 0..=8.
    InvalidMove,
    /// Engine invoked on a board with no empty cells or a decided game.
    NoLegalMove,
    /// Difficulty string not recognized.
    InvalidDifficulty,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidMove => write!(f, "Move targets an occupied cell or is out of range"),
            GameError::NoLegalMove => write!(f, "No legal move available on this board"),
            GameError::InvalidDifficulty => write!(f, "Difficulty not recognized"),
        }
    }
}
