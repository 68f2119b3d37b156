use crate::ai::{self, Difficulty};
use crate::board::Board;
use crate::common::GameError;
use crate::player::Player;
use rand::rngs::SmallRng;

/// Computer player backed by the decision engine.
pub struct AiPlayer {
    difficulty: Difficulty,
}

impl AiPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Switch tiers between moves; the board is unaffected.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }
}

impl Player for AiPlayer {
    fn next_move(&mut self, rng: &mut SmallRng, board: &Board) -> Result<usize, GameError> {
        ai::choose_move(board, self.difficulty, rng)
    }
}
