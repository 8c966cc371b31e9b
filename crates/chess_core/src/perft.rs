//! Perft: counts the leaf nodes of the legal move tree to a fixed depth.
//! The standard correctness oracle for move generation.

use crate::board::Board;
use crate::types::Color;

pub fn perft(board: &mut Board, color: Color, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = board.legal_moves(color);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0;
    for mv in moves {
        board.do_move(mv);
        nodes += perft(board, color.other(), depth - 1);
        board.undo_last_move();
    }
    nodes
}
