//! Negamax search with alpha-beta pruning and per-position move ordering.

use std::cmp::Ordering;

use chess_core::{Board, Color, Move};
use rand::Rng;

use crate::{MinimaxPlayer, Policy};

/// A move with the heuristic value search assigned to it.
#[derive(Clone, Copy, Debug)]
pub struct ScoredMove {
    pub mv: Move,
    pub value: f64,
}

impl ScoredMove {
    /// Descending by value, with start/end squares breaking ties so distinct
    /// moves with equal scores keep distinct positions in the ordering.
    fn cmp_desc(&self, other: &ScoredMove) -> Ordering {
        other
            .value
            .total_cmp(&self.value)
            .then_with(|| self.mv.from.cmp(&other.mv.from))
            .then_with(|| self.mv.to.cmp(&other.mv.to))
    }
}

impl MinimaxPlayer {
    /// Scores every candidate move for `color` on the current board and
    /// returns the one the selection policy picks.
    ///
    /// At depth 0 the move that produced this position is scored with the
    /// heuristic from `color`'s perspective. Deeper nodes iterate candidates
    /// in the memoized ordering for this position when one exists, which
    /// makes the alpha-beta cutoffs of repeat visits and deepening passes
    /// much more effective. A beta cutoff stops scoring early; the truncated
    /// list is memoized like any other.
    pub(crate) fn negamax(
        &mut self,
        board: &mut Board,
        color: Color,
        depth: u8,
        mut alpha: f64,
        beta: f64,
    ) -> ScoredMove {
        if depth == 0 {
            let mv = *board
                .last_move()
                .expect("scoring a position with no move applied");
            let value = self.heuristic.value(board, color);
            return ScoredMove { mv, value };
        }
        let key = board.state_string();
        // Memo keys identify placements, not histories. Twin pieces may
        // carry different arena ids than when the list was stored, so only
        // the square ordering is reused and each move is rebuilt against
        // the current board.
        let candidates: Vec<Move> = match self.memo.get(&key) {
            Some(scored) => scored
                .iter()
                .map(|s| {
                    let mut mv = Move::new(board, s.mv.from, s.mv.to);
                    mv.rook = s.mv.rook;
                    mv
                })
                .collect(),
            None => board.legal_moves(color),
        };
        let mut scored = Vec::with_capacity(candidates.len());
        for mv in candidates {
            board.do_move(mv);
            let value = if board.in_checkmate(color) {
                f64::NEG_INFINITY
            } else if board.in_checkmate(color.other()) {
                f64::INFINITY
            } else if board.in_stalemate() {
                0.0
            } else {
                -self.negamax(board, color.other(), depth - 1, -beta, -alpha).value
            };
            board.undo_last_move();
            scored.push(ScoredMove { mv, value });
            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }
        scored.sort_by(|a, b| a.cmp_desc(b));
        let chosen = self.select(&scored);
        self.memo.insert(key, scored);
        chosen
    }

    /// Applies the selection policy to a descending-sorted candidate list.
    fn select(&mut self, scored: &[ScoredMove]) -> ScoredMove {
        assert!(!scored.is_empty(), "selecting from an empty candidate list");
        match self.policy {
            Policy::Best => scored[0],
            Policy::Worst => scored[scored.len() - 1],
            Policy::Suboptimal => {
                // A forced win is never passed up.
                if scored[0].value == f64::INFINITY {
                    return scored[0];
                }
                let mut skip = 0;
                while skip < scored.len() / 2 && self.rng.gen_bool(0.5) {
                    skip += 1;
                }
                scored[skip]
            }
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
