use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use tictactoe::{Board, GameError, Side};

/// Play up to `plies` random legal moves, alternating sides, stopping at a
/// terminal position. Reproduces any reachable board shape.
fn random_board(seed: u64, plies: usize) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new();
    let mut side = Side::Human;
    for _ in 0..plies {
        if board.is_terminal() {
            break;
        }
        let moves = board.legal_moves();
        let index = moves[rng.random_range(0..moves.len())];
        board.apply(index, side).unwrap();
        side = side.other();
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn terminal_iff_winner_or_draw(seed in any::<u64>(), plies in 0..9usize) {
        let board = random_board(seed, plies);
        prop_assert_eq!(board.is_terminal(), board.winner().is_some() || board.is_draw());
    }

    #[test]
    fn queries_do_not_mutate(seed in any::<u64>(), plies in 0..9usize) {
        let board = random_board(seed, plies);
        let before = board;
        let _ = board.winner();
        let _ = board.is_draw();
        let _ = board.is_terminal();
        let _ = board.legal_moves();
        let _ = board.outcome();
        prop_assert_eq!(board, before);
    }

    #[test]
    fn apply_on_occupied_cell_fails_cleanly(seed in any::<u64>(), plies in 1..9usize, pick in any::<u64>()) {
        let board = random_board(seed, plies);
        let occupied: Vec<usize> = (0..9).filter(|&i| board.cells()[i].is_some()).collect();
        prop_assume!(!occupied.is_empty());
        let index = occupied[(pick % occupied.len() as u64) as usize];
        let mut copy = board;
        prop_assert_eq!(copy.apply(index, Side::Opponent).unwrap_err(), GameError::InvalidMove);
        prop_assert_eq!(copy, board);
    }

    #[test]
    fn legal_moves_are_exactly_the_empty_cells(seed in any::<u64>(), plies in 0..9usize) {
        let board = random_board(seed, plies);
        let moves = board.legal_moves();
        for i in 0..9 {
            prop_assert_eq!(moves.contains(&i), board.cells()[i].is_none());
        }
    }

    #[test]
    fn draw_implies_full_board(seed in any::<u64>()) {
        let board = random_board(seed, 9);
        if board.is_draw() {
            prop_assert!(board.legal_moves().is_empty());
            prop_assert!(board.winner().is_none());
        }
    }
}
