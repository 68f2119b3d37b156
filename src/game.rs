use crate::ai::{self, Difficulty};
use crate::board::Board;
use crate::common::{GameError, Outcome, Side};
use rand::Rng;

/// One human-vs-opponent match. Owns the board and threads it through
/// every call; no game state lives outside this value.
pub struct Game {
    board: Board,
}

impl Game {
    /// Start a match with an empty board. The human moves first.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
        }
    }

    /// Immutable view of the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Classify the current position.
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Apply the human's move and report the resulting outcome. Fails with
    /// `NoLegalMove` once the game has concluded and with `InvalidMove`
    /// for occupied or out-of-range cells.
    pub fn human_move(&mut self, index: usize) -> Result<Outcome, GameError> {
        if self.board.is_terminal() {
            return Err(GameError::NoLegalMove);
        }
        self.board.apply(index, Side::Human)?;
        Ok(self.board.outcome())
    }

    /// Choose and apply the opponent's move at the requested difficulty,
    /// reporting the cell played and the resulting outcome.
    pub fn opponent_move<R: Rng + ?Sized>(
        &mut self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<(usize, Outcome), GameError> {
        let index = ai::choose_move(&self.board, difficulty, rng)?;
        self.board.apply(index, Side::Opponent)?;
        Ok((index, self.board.outcome()))
    }

    /// Discard the board and start over.
    pub fn reset(&mut self) {
        self.board = Board::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
