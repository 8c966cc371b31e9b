//! Move generation.
//!
//! Each piece kind has its own generator; `possible_moves` dispatches over the
//! board and optionally filters the result down to legal moves. Generators for
//! pawns, knights and sliders read the board immutably; the king generator
//! needs `&mut Board` because castling probes a crossing square by applying a
//! provisional move.

use crate::board::Board;
use crate::types::*;

const ORTHO: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAG: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const KNIGHT: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Every move `color` can make. With `only_legal` the moves that would leave
/// the mover's own king in check are filtered out by applying and undoing each
/// candidate; without it the raw movement shapes are returned, which is what
/// check detection itself runs on.
pub fn possible_moves(board: &mut Board, color: Color, only_legal: bool) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for from in 0..64u8 {
        let piece = match board.piece_id_at(from) {
            Some(id) => *board.piece(id),
            None => continue,
        };
        if piece.color != color {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => gen_pawn(board, from, &piece, &mut out),
            PieceKind::Knight => gen_knight(board, from, color, &mut out),
            PieceKind::Bishop => gen_rays(board, from, color, &DIAG, 7, &mut out),
            PieceKind::Rook => gen_rays(board, from, color, &ORTHO, 7, &mut out),
            PieceKind::Queen => {
                gen_rays(board, from, color, &ORTHO, 7, &mut out);
                gen_rays(board, from, color, &DIAG, 7, &mut out);
            }
            PieceKind::King => gen_king(board, from, &piece, only_legal, &mut out),
        }
    }
    if only_legal {
        out.retain(|&mv| {
            board.do_move(mv);
            let legal = !board.in_check(color);
            board.undo_last_move();
            legal
        });
    }
    out
}

fn gen_pawn(board: &Board, from: u8, piece: &Piece, out: &mut Vec<Move>) {
    let row = row_of(from);
    let col = col_of(from);
    let fwd = piece.color.forward();
    if let Some(one) = sq(row + fwd, col) {
        if board.piece_id_at(one).is_none() {
            out.push(Move::new(board, from, one));
            if !piece.moved {
                if let Some(two) = sq(row + 2 * fwd, col) {
                    if board.piece_id_at(two).is_none() {
                        out.push(Move::new(board, from, two));
                    }
                }
            }
        }
    }
    for dc in [-1, 1] {
        if let Some(to) = sq(row + fwd, col + dc) {
            if let Some(target) = board.piece_id_at(to) {
                if board.piece(target).color != piece.color {
                    out.push(Move::new(board, from, to));
                }
            }
        }
    }
}

fn gen_knight(board: &Board, from: u8, color: Color, out: &mut Vec<Move>) {
    let row = row_of(from);
    let col = col_of(from);
    for &(dr, dc) in KNIGHT.iter() {
        if let Some(to) = sq(row + dr, col + dc) {
            match board.piece_id_at(to) {
                Some(target) if board.piece(target).color == color => {}
                _ => out.push(Move::new(board, from, to)),
            }
        }
    }
}

/// Walks each direction up to `max_depth` steps, stopping at the first
/// occupant (capturing it if hostile).
fn gen_rays(
    board: &Board,
    from: u8,
    color: Color,
    dirs: &[(i8, i8)],
    max_depth: i8,
    out: &mut Vec<Move>,
) {
    let row = row_of(from);
    let col = col_of(from);
    for &(dr, dc) in dirs {
        for step in 1..=max_depth {
            let to = match sq(row + dr * step, col + dc * step) {
                Some(to) => to,
                None => break,
            };
            match board.piece_id_at(to) {
                None => out.push(Move::new(board, from, to)),
                Some(target) => {
                    if board.piece(target).color != color {
                        out.push(Move::new(board, from, to));
                    }
                    break;
                }
            }
        }
    }
}

fn gen_king(board: &mut Board, from: u8, piece: &Piece, only_legal: bool, out: &mut Vec<Move>) {
    gen_rays(board, from, piece.color, &ORTHO, 1, out);
    gen_rays(board, from, piece.color, &DIAG, 1, out);
    // Castling is only considered for an unmoved king, and a king in check may
    // not castle. The check test recurses into move generation, so it is only
    // run on the legality-filtered path.
    if !piece.moved && (!only_legal || !board.in_check(piece.color)) {
        gen_castle(board, from, piece.color, 1, out); // kingside, toward col 7
        gen_castle(board, from, piece.color, -1, out); // queenside, toward col 0
    }
}

fn gen_castle(board: &mut Board, from: u8, color: Color, dc: i8, out: &mut Vec<Move>) {
    let row = row_of(from);
    let col = col_of(from);
    if !castle_path_clear(board, from, color, dc) {
        return;
    }
    let corner = if dc > 0 { 7 } else { 0 };
    let to = sq(row, col + 2 * dc).expect("castling king ends on the board");
    let rook_from = sq(row, corner).expect("castling corner is on the board");
    let rook_to = sq(row, col + dc).expect("castling rook ends on the board");
    out.push(Move::castle(board, from, to, rook_from, rook_to));
}

/// Walks from the king toward the corner. Every square strictly between them
/// must be empty, the corner must hold an unmoved rook, and the first square
/// the king crosses must not be attacked. That square is probed by applying a
/// provisional one-square king move and undoing it; the landing square is
/// covered by the ordinary legality filter.
fn castle_path_clear(board: &mut Board, from: u8, color: Color, dc: i8) -> bool {
    let row = row_of(from);
    let mut col = col_of(from) + dc;
    let mut first = true;
    loop {
        let square = match sq(row, col) {
            Some(square) => square,
            None => return false,
        };
        match board.piece_id_at(square) {
            None => {
                if first {
                    let probe = Move::new(board, from, square);
                    board.do_move(probe);
                    let attacked = board.in_check(color);
                    board.undo_last_move();
                    if attacked {
                        return false;
                    }
                    first = false;
                }
                if col == 0 || col == 7 {
                    // Empty corner, no rook to castle with.
                    return false;
                }
            }
            Some(id) => {
                let p = *board.piece(id);
                return p.kind == PieceKind::Rook && !p.moved;
            }
        }
        col += dc;
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
