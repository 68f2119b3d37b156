use crate::board::Board;
use crate::common::GameError;
use rand::rngs::SmallRng;

/// Interface implemented by different player types.
pub trait Player {
    /// Choose the next cell to mark given the current board.
    fn next_move(&mut self, rng: &mut SmallRng, board: &Board) -> Result<usize, GameError>;
}
