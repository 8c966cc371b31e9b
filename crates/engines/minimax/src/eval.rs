//! Board evaluation heuristics.
//!
//! All heuristics score a board for one color as that color's own standing
//! minus the opponent's, so the result is positive when the position favors
//! the given color. The board is borrowed mutably because mobility and check
//! terms run move generation on it; it is left untouched.

use chess_core::{Board, Color, PieceKind};

pub trait Heuristic {
    fn value(&self, board: &mut Board, color: Color) -> f64;
}

/// Piece counts and material values.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaterialHeuristic;

impl Heuristic for MaterialHeuristic {
    fn value(&self, board: &mut Board, color: Color) -> f64 {
        side_material(board, color) - side_material(board, color.other())
    }
}

fn side_material(board: &Board, color: Color) -> f64 {
    // Point total matters more than piece count.
    let count = board.count_pieces(color) as f64 * 0.05;
    let points: i32 = board.pieces_of(color).map(|(_, p)| p.kind.value()).sum();
    count + points as f64 * 1.5
}

/// Piece placement, mobility, and check pressure.
#[derive(Clone, Copy, Debug, Default)]
pub struct PositionalHeuristic;

impl Heuristic for PositionalHeuristic {
    fn value(&self, board: &mut Board, color: Color) -> f64 {
        side_position(board, color) - side_position(board, color.other())
    }
}

fn side_position(board: &mut Board, color: Color) -> f64 {
    let endgame = in_endgame(board);
    let mobility = board.legal_moves(color).len() as f64 * 0.02;
    // Tables carry centipawn-scale numbers, hence the extra 0.01 factor.
    let placement: f64 = board
        .pieces_of(color)
        .filter_map(|(_, p)| p.square.map(|sq| table_value(p.kind, color, sq, endgame)))
        .sum::<f64>()
        * 0.011;
    // Small bonus only; larger ones trade pieces away for checks.
    let check = if board.in_check(color.other()) {
        if endgame { 6.0 } else { 3.0 }
    } else {
        0.0
    };
    mobility + placement + check
}

/// Both sides below ten points of material, kings excluded.
fn in_endgame(board: &Board) -> bool {
    let total = |color: Color| -> i32 {
        board.pieces_of(color).map(|(_, p)| p.kind.value()).sum()
    };
    total(Color::White) < 210 && total(Color::Black) < 210
}

fn table_value(kind: PieceKind, color: Color, square: u8, endgame: bool) -> f64 {
    let mut row = (square / 8) as usize;
    let col = (square % 8) as usize;
    // Tables are oriented for White (row 0 is rank 8); Black mirrors them.
    if color == Color::Black {
        row = 7 - row;
    }
    let table = match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => {
            if endgame {
                &KING_ENDGAME_TABLE
            } else {
                &KING_TABLE
            }
        }
    };
    table[row][col]
}

/// Material and positional terms combined; the default for search.
#[derive(Clone, Copy, Debug, Default)]
pub struct CombinationHeuristic {
    material: MaterialHeuristic,
    positional: PositionalHeuristic,
}

impl Heuristic for CombinationHeuristic {
    fn value(&self, board: &mut Board, color: Color) -> f64 {
        self.material.value(board, color) + self.positional.value(board, color)
    }
}

// Piece-square tables adapted from
// https://www.chessprogramming.org/Simplified_Evaluation_Function

#[rustfmt::skip]
const PAWN_TABLE: [[f64; 8]; 8] = [
    [100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0, 100.0],
    [ 50.0,  50.0,  50.0,  50.0,  50.0,  50.0,  50.0,  50.0],
    [ 10.0,  10.0,  20.0,  30.0,  30.0,  20.0,  10.0,  10.0],
    [  5.0,   5.0,  10.0,  25.0,  25.0,  10.0,   5.0,   5.0],
    [  0.0,   0.0,   0.0,  20.0,  20.0,   0.0,   0.0,   0.0],
    [  5.0,  -5.0, -10.0,   0.0,   0.0, -10.0,  -5.0,   5.0],
    [  5.0,  10.0,  10.0, -20.0, -20.0,  10.0,  10.0,   5.0],
    [  0.0,   0.0,   0.0,   0.0,   0.0,   0.0,   0.0,   0.0],
];

#[rustfmt::skip]
const KNIGHT_TABLE: [[f64; 8]; 8] = [
    [-50.0, -40.0, -30.0, -30.0, -30.0, -30.0, -40.0, -50.0],
    [-40.0, -20.0,   0.0,   0.0,   0.0,   0.0, -20.0, -40.0],
    [-30.0,   0.0,  10.0,  15.0,  15.0,  10.0,   0.0, -30.0],
    [-30.0,   5.0,  15.0,  20.0,  20.0,  15.0,   5.0, -30.0],
    [-30.0,   0.0,  15.0,  20.0,  20.0,  15.0,   0.0, -30.0],
    [-30.0,   5.0,  10.0,  15.0,  15.0,  10.0,   5.0, -30.0],
    [-40.0, -20.0,   0.0,   5.0,   5.0,   0.0, -20.0, -40.0],
    [-50.0, -40.0, -30.0, -30.0, -30.0, -30.0, -40.0, -50.0],
];

#[rustfmt::skip]
const BISHOP_TABLE: [[f64; 8]; 8] = [
    [-20.0, -10.0, -10.0, -10.0, -10.0, -10.0, -10.0, -20.0],
    [-10.0,   0.0,   0.0,   0.0,   0.0,   0.0,   0.0, -10.0],
    [-10.0,   0.0,   5.0,  10.0,  10.0,   5.0,   0.0, -10.0],
    [-10.0,   5.0,   5.0,  10.0,  10.0,   5.0,   5.0, -10.0],
    [-10.0,   0.0,  10.0,  10.0,  10.0,  10.0,   0.0, -10.0],
    [-10.0,  10.0,  10.0,  10.0,  10.0,  10.0,  10.0, -10.0],
    [-10.0,   5.0,   0.0,   0.0,   0.0,   0.0,   5.0, -10.0],
    [-20.0, -10.0, -10.0, -10.0, -10.0, -10.0, -10.0, -20.0],
];

#[rustfmt::skip]
const ROOK_TABLE: [[f64; 8]; 8] = [
    [  0.0,   0.0,   0.0,   0.0,   0.0,   0.0,   0.0,   0.0],
    [  5.0,  10.0,  10.0,  10.0,  10.0,  10.0,  10.0,   5.0],
    [ -5.0,   0.0,   0.0,   0.0,   0.0,   0.0,   0.0,  -5.0],
    [ -5.0,   0.0,   0.0,   0.0,   0.0,   0.0,   0.0,  -5.0],
    [ -5.0,   0.0,   0.0,   0.0,   0.0,   0.0,   0.0,  -5.0],
    [ -5.0,   0.0,   0.0,   0.0,   0.0,   0.0,   0.0,  -5.0],
    [ -5.0,   0.0,   0.0,   0.0,   0.0,   0.0,   0.0,  -5.0],
    [  0.0,   0.0,   0.0,   5.0,   5.0,   0.0,   0.0,   0.0],
];

#[rustfmt::skip]
const QUEEN_TABLE: [[f64; 8]; 8] = [
    [-20.0, -10.0, -10.0,  -5.0,  -5.0, -10.0, -10.0, -20.0],
    [-10.0,   0.0,   0.0,   0.0,   0.0,   0.0,   0.0, -10.0],
    [-10.0,   0.0,   5.0,   5.0,   5.0,   5.0,   0.0, -10.0],
    [ -5.0,   0.0,   5.0,   5.0,   5.0,   5.0,   0.0,  -5.0],
    [  0.0,   0.0,   5.0,   5.0,   5.0,   5.0,   0.0,  -5.0],
    [-10.0,   5.0,   5.0,   5.0,   5.0,   5.0,   0.0, -10.0],
    [-10.0,   0.0,   5.0,   0.0,   0.0,   0.0,   0.0, -10.0],
    [-20.0, -10.0, -10.0,  -5.0,  -5.0, -10.0, -10.0, -20.0],
];

#[rustfmt::skip]
const KING_TABLE: [[f64; 8]; 8] = [
    [-30.0, -40.0, -40.0, -50.0, -50.0, -40.0, -40.0, -30.0],
    [-30.0, -40.0, -40.0, -50.0, -50.0, -40.0, -40.0, -30.0],
    [-30.0, -40.0, -40.0, -50.0, -50.0, -40.0, -40.0, -30.0],
    [-30.0, -40.0, -40.0, -50.0, -50.0, -40.0, -40.0, -30.0],
    [-20.0, -30.0, -30.0, -40.0, -40.0, -30.0, -30.0, -20.0],
    [-10.0, -20.0, -20.0, -20.0, -20.0, -20.0, -20.0, -10.0],
    [ 20.0,  20.0,   0.0,   0.0,   0.0,   0.0,  20.0,  20.0],
    [ 20.0,  30.0,  10.0,   0.0,   0.0,  10.0,  30.0,  20.0],
];

#[rustfmt::skip]
const KING_ENDGAME_TABLE: [[f64; 8]; 8] = [
    [-50.0, -40.0, -30.0, -20.0, -20.0, -30.0, -40.0, -50.0],
    [-30.0, -20.0, -10.0,   0.0,   0.0, -10.0, -20.0, -30.0],
    [-30.0, -10.0,  20.0,  30.0,  30.0,  20.0, -10.0, -30.0],
    [-30.0, -10.0,  30.0,  40.0,  40.0,  30.0, -10.0, -30.0],
    [-30.0, -10.0,  30.0,  40.0,  40.0,  30.0, -10.0, -30.0],
    [-30.0, -10.0,  20.0,  30.0,  30.0,  20.0, -10.0, -30.0],
    [-30.0, -30.0,   0.0,   0.0,   0.0,   0.0, -30.0, -30.0],
    [-50.0, -30.0, -30.0, -30.0, -30.0, -30.0, -30.0, -50.0],
];

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
