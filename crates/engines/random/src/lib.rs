//! Random Move Chess Player
//!
//! Picks uniformly at random from all legal moves. Useful for:
//! - Exercising the rules core in automated games
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation

use chess_core::{Board, Color, Move, Player};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[cfg(test)]
mod lib_tests;

/// A player that makes random legal moves.
pub struct RandomPlayer {
    color: Color,
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new(color: Color) -> Self {
        RandomPlayer {
            color,
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic variant for reproducible games and tests.
    pub fn with_seed(color: Color, seed: u64) -> Self {
        RandomPlayer {
            color,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Player for RandomPlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn choose_move(&mut self, board: &mut Board) -> Option<Move> {
        board.legal_moves(self.color).choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "Random"
    }
}
