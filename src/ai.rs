// Move selection for the computer opponent: exhaustive minimax over the
// remaining game tree, wrapped by the three difficulty policies.

use crate::board::Board;
use crate::common::{GameError, Side};
use crate::config::BOARD_CELLS;
use core::str::FromStr;
use rand::Rng;

/// Difficulty tier requested by the caller. May change between moves
/// without resetting the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(GameError::InvalidDifficulty),
        }
    }
}

/// Select the opponent's next move. Fails with `NoLegalMove` on a terminal
/// board. The returned index is always legal and `board` compares equal
/// before and after the call; the search only ever mutates its own copy.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<usize, GameError> {
    if board.is_terminal() {
        return Err(GameError::NoLegalMove);
    }
    match difficulty {
        Difficulty::Easy => random_move(board, rng),
        // Fresh coin flip on every call; the choice is not memoized.
        Difficulty::Medium => {
            if rng.random_bool(0.5) {
                random_move(board, rng)
            } else {
                best_move(board)
            }
        }
        Difficulty::Hard => best_move(board),
    }
}

/// Uniform random choice among the legal moves.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<usize, GameError> {
    let moves = board.legal_moves();
    if moves.is_empty() {
        return Err(GameError::NoLegalMove);
    }
    Ok(moves[rng.random_range(0..moves.len())])
}

/// Optimal move for the opponent under exhaustive adversarial search.
/// Wins whenever a forced win exists and never walks into a forced loss.
/// Ties break to the first candidate in ascending index order, so the
/// result is deterministic.
pub fn best_move(board: &Board) -> Result<usize, GameError> {
    let mut scratch = *board;
    let mut best: Option<(usize, i32)> = None;

    for index in 0..BOARD_CELLS {
        if scratch.cells()[index].is_some() {
            continue;
        }
        scratch.place(index, Side::Opponent);
        let score = minimax(&mut scratch, 0, false);
        scratch.clear(index);

        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }

    best.map(|(index, _)| index).ok_or(GameError::NoLegalMove)
}

/// Minimax over the full remaining tree. The opponent maximizes, the human
/// minimizes. Faster wins score higher (`10 - depth`), slower losses score
/// less badly (`depth - 10`), a full board with no winner scores 0. Every
/// hypothetical placement is reverted before returning, on all branches.
fn minimax(board: &mut Board, depth: i32, maximizing: bool) -> i32 {
    match board.winner() {
        Some(Side::Opponent) => return 10 - depth,
        Some(Side::Human) => return depth - 10,
        None => {}
    }
    if board.is_full() {
        return 0;
    }

    if maximizing {
        let mut best = i32::MIN;
        for index in 0..BOARD_CELLS {
            if board.cells()[index].is_none() {
                board.place(index, Side::Opponent);
                best = best.max(minimax(board, depth + 1, false));
                board.clear(index);
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for index in 0..BOARD_CELLS {
            if board.cells()[index].is_none() {
                board.place(index, Side::Human);
                best = best.min(minimax(board, depth + 1, true));
                board.clear(index);
            }
        }
        best
    }
}
