#![cfg(feature = "std")]

use std::io::{self, Write};

use crate::board::Board;
use crate::common::GameError;
use crate::player::Player;
use rand::rngs::SmallRng;

/// Interactive player reading cell indices from stdin.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        CliPlayer::new()
    }
}

fn parse_index(input: &str) -> Option<usize> {
    input.trim().parse().ok().filter(|&i| i < 9)
}

/// Render the board alongside a reference grid of cell indices.
pub fn print_board(board: &Board) {
    println!();
    for row in 0..3 {
        print!(" ");
        for col in 0..3 {
            let index = row * 3 + col;
            match board.cells()[index] {
                Some(side) => print!(" {}", side),
                None => print!(" ."),
            }
            if col < 2 {
                print!(" |");
            }
        }
        print!("      ");
        for col in 0..3 {
            print!(" {}", row * 3 + col);
            if col < 2 {
                print!(" |");
            }
        }
        println!();
        if row < 2 {
            println!(" ---+---+---     ---+---+---");
        }
    }
    println!();
}

impl Player for CliPlayer {
    fn next_move(&mut self, _rng: &mut SmallRng, board: &Board) -> Result<usize, GameError> {
        loop {
            print!("Your move (0-8): ");
            let _ = io::stdout().flush();
            let mut buf = String::new();
            if io::stdin().read_line(&mut buf).is_err() || buf.is_empty() {
                // stdin closed; nothing sensible to play
                return Err(GameError::NoLegalMove);
            }
            match parse_index(&buf) {
                Some(index) if board.cells()[index].is_none() => return Ok(index),
                Some(index) => println!("Cell {} is already taken.", index),
                None => println!("Enter a cell index between 0 and 8."),
            }
        }
    }
}
