//! Minimax Chess Engine
//!
//! Negamax search with alpha-beta pruning over the rules core. Evaluation is
//! pluggable through the [`Heuristic`] trait and the playing strength is set
//! by search depth plus a [`Policy`] that decides which of the scored moves
//! is actually played, from deliberately awful to best-first.

mod eval;
mod search;

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use chess_core::{Board, Color, Move, Player};

pub use eval::{CombinationHeuristic, Heuristic, MaterialHeuristic, PositionalHeuristic};
pub use search::ScoredMove;

pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

/// Depth used once few pieces remain and the tree narrows.
pub const ENDGAME_SEARCH_DEPTH: u8 = 6;

/// Depth for the strongest configuration.
pub const EXTREME_SEARCH_DEPTH: u8 = 10;

/// How a move is picked from the scored, descending-sorted candidates.
/// Applied at every search node, not just the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Highest value.
    Best,
    /// Lowest value.
    Worst,
    /// Coin-flip walk down the top half of the list; a forced mate is
    /// always taken.
    Suboptimal,
}

/// A negamax player. Keeps a private memo of move orderings per position,
/// carried across moves and deepening passes within a game.
pub struct MinimaxPlayer {
    color: Color,
    depth: u8,
    policy: Policy,
    heuristic: Box<dyn Heuristic>,
    memo: HashMap<String, Vec<ScoredMove>>,
    rng: StdRng,
}

impl MinimaxPlayer {
    pub fn new(color: Color) -> Self {
        Self::with_depth(color, DEFAULT_SEARCH_DEPTH)
    }

    pub fn with_depth(color: Color, depth: u8) -> Self {
        Self::with_policy(color, depth, Policy::Best)
    }

    pub fn with_policy(color: Color, depth: u8, policy: Policy) -> Self {
        MinimaxPlayer {
            color,
            depth,
            policy,
            heuristic: Box::new(CombinationHeuristic::default()),
            memo: HashMap::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Replaces the default combination heuristic.
    pub fn with_heuristic(mut self, heuristic: Box<dyn Heuristic>) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Fixes the policy's random source, for reproducible games.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl Player for MinimaxPlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn choose_move(&mut self, board: &mut Board) -> Option<Move> {
        if board.legal_moves(self.color).is_empty() {
            return None;
        }
        if self.depth < ENDGAME_SEARCH_DEPTH && board.few_pieces_left() {
            self.depth = ENDGAME_SEARCH_DEPTH;
        }
        // Iterative deepening: shallow passes seed the memo with move
        // orderings that speed up the deeper ones. The deepest pass decides.
        let mut chosen = None;
        for depth in 1..=self.depth {
            let scored =
                self.negamax(board, self.color, depth, f64::NEG_INFINITY, f64::INFINITY);
            chosen = Some(scored.mv);
        }
        chosen
    }

    fn name(&self) -> &str {
        match self.policy {
            Policy::Worst => "Minimax (Easy)",
            Policy::Suboptimal => "Minimax (Medium)",
            Policy::Best => {
                if self.depth >= EXTREME_SEARCH_DEPTH {
                    "Minimax (Extreme)"
                } else {
                    "Minimax (Hard)"
                }
            }
        }
    }

    fn new_game(&mut self) {
        self.memo.clear();
    }
}

/// One-shot convenience: best move for `color` at the given depth with the
/// default heuristic.
pub fn choose_move(board: &mut Board, color: Color, depth: u8) -> Option<Move> {
    MinimaxPlayer::with_depth(color, depth).choose_move(board)
}
