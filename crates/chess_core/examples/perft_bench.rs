//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p chess_core -- [depth]
//!
//! Examples:
//!   # Default: depth 4 from the starting position
//!   cargo flamegraph --example perft_bench -p chess_core
//!
//!   # Custom depth
//!   cargo flamegraph --example perft_bench -p chess_core -- 5

use chess_core::{coord_to_sq, perft, Board, Color, PieceKind};
use std::env;
use std::time::Instant;

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    run_position("Starting position", Board::new(), depth);
    run_position("Rook endgame", rook_endgame(), depth);
    run_position("Open middlegame", open_middlegame(), depth);
}

fn run_position(name: &str, mut board: Board, depth: u8) {
    println!("{name} at depth {depth}");

    // Warm-up run at lower depth
    if depth > 2 {
        let _ = perft(&mut board, Color::White, depth - 2);
    }

    let start = Instant::now();
    let nodes = perft(&mut board, Color::White, depth);
    let elapsed = start.elapsed();

    let nps = if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };
    println!("  Nodes: {nodes}");
    println!("  Time:  {elapsed:.3?} ({:.2} Mn/s)", nps / 1_000_000.0);
    println!();
}

fn piece(board: &mut Board, kind: PieceKind, color: Color, coord: &str) {
    board.add_piece(kind, color, coord_to_sq(coord).unwrap());
}

fn rook_endgame() -> Board {
    let mut board = Board::empty();
    piece(&mut board, PieceKind::King, Color::White, "g1");
    piece(&mut board, PieceKind::Rook, Color::White, "a5");
    piece(&mut board, PieceKind::Pawn, Color::White, "e2");
    piece(&mut board, PieceKind::Pawn, Color::White, "g2");
    piece(&mut board, PieceKind::King, Color::Black, "h4");
    piece(&mut board, PieceKind::Rook, Color::Black, "h5");
    piece(&mut board, PieceKind::Pawn, Color::Black, "c7");
    piece(&mut board, PieceKind::Pawn, Color::Black, "d6");
    piece(&mut board, PieceKind::Pawn, Color::Black, "f4");
    board
}

fn open_middlegame() -> Board {
    let mut board = Board::empty();
    piece(&mut board, PieceKind::King, Color::White, "g1");
    piece(&mut board, PieceKind::Queen, Color::White, "e2");
    piece(&mut board, PieceKind::Rook, Color::White, "a1");
    piece(&mut board, PieceKind::Rook, Color::White, "f1");
    piece(&mut board, PieceKind::Bishop, Color::White, "c4");
    piece(&mut board, PieceKind::Knight, Color::White, "f3");
    for coord in ["a2", "b2", "c2", "d3", "f2", "g2", "h2"] {
        piece(&mut board, PieceKind::Pawn, Color::White, coord);
    }
    piece(&mut board, PieceKind::King, Color::Black, "g8");
    piece(&mut board, PieceKind::Queen, Color::Black, "e7");
    piece(&mut board, PieceKind::Rook, Color::Black, "a8");
    piece(&mut board, PieceKind::Rook, Color::Black, "f8");
    piece(&mut board, PieceKind::Bishop, Color::Black, "c5");
    piece(&mut board, PieceKind::Knight, Color::Black, "f6");
    for coord in ["a7", "b7", "c7", "d6", "f7", "g7", "h7"] {
        piece(&mut board, PieceKind::Pawn, Color::Black, coord);
    }
    board
}
