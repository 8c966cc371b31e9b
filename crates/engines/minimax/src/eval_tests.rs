use super::*;
use chess_core::{coord_to_sq, Board};

fn s(coord: &str) -> u8 {
    coord_to_sq(coord).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn material_is_zero_and_symmetric_at_the_start() {
    let mut board = Board::new();
    let h = MaterialHeuristic;
    assert_eq!(h.value(&mut board, Color::White), 0.0);
    assert_eq!(h.value(&mut board, Color::Black), 0.0);
}

#[test]
fn material_counts_points_and_pieces() {
    let mut board = Board::empty();
    board.add_piece(PieceKind::King, Color::White, s("e1"));
    board.add_piece(PieceKind::Queen, Color::White, s("d1"));
    board.add_piece(PieceKind::King, Color::Black, s("e8"));
    let h = MaterialHeuristic;
    // White: 2 pieces, 209 points; Black: 1 piece, 200 points.
    let expected = (2.0 * 0.05 + 209.0 * 1.5) - (0.05 + 200.0 * 1.5);
    assert!(close(h.value(&mut board, Color::White), expected));
    assert!(close(h.value(&mut board, Color::Black), -expected));
}

#[test]
fn positional_prefers_a_centralized_knight() {
    let mut centered = Board::empty();
    centered.add_piece(PieceKind::King, Color::White, s("e1"));
    centered.add_piece(PieceKind::King, Color::Black, s("e8"));
    centered.add_piece(PieceKind::Knight, Color::White, s("d4"));

    let mut cornered = Board::empty();
    cornered.add_piece(PieceKind::King, Color::White, s("e1"));
    cornered.add_piece(PieceKind::King, Color::Black, s("e8"));
    cornered.add_piece(PieceKind::Knight, Color::White, s("a1"));

    let h = PositionalHeuristic;
    let centered_value = h.value(&mut centered, Color::White);
    let cornered_value = h.value(&mut cornered, Color::White);
    // Table gap of 70 points plus six extra knight moves.
    let expected_gap = 70.0 * 0.011 + 6.0 * 0.02;
    assert!(close(centered_value - cornered_value, expected_gap));
}

#[test]
fn positional_tables_mirror_for_black() {
    let mut white_side = Board::empty();
    white_side.add_piece(PieceKind::King, Color::White, s("e1"));
    white_side.add_piece(PieceKind::King, Color::Black, s("e8"));
    white_side.add_piece(PieceKind::Knight, Color::White, s("d4"));

    let mut black_side = Board::empty();
    black_side.add_piece(PieceKind::King, Color::White, s("e1"));
    black_side.add_piece(PieceKind::King, Color::Black, s("e8"));
    black_side.add_piece(PieceKind::Knight, Color::Black, s("d5"));

    let h = PositionalHeuristic;
    // d5 for Black is the mirror of d4 for White; everything else is
    // symmetric, so the evaluations agree exactly.
    assert_eq!(
        h.value(&mut white_side, Color::White),
        h.value(&mut black_side, Color::Black)
    );
}

#[test]
fn positional_rewards_pawn_advancement() {
    let mut advanced = Board::empty();
    advanced.add_piece(PieceKind::King, Color::White, s("e1"));
    advanced.add_piece(PieceKind::King, Color::Black, s("e8"));
    advanced.add_piece(PieceKind::Pawn, Color::White, s("e4"));

    let mut home = Board::empty();
    home.add_piece(PieceKind::King, Color::White, s("e1"));
    home.add_piece(PieceKind::King, Color::Black, s("e8"));
    home.add_piece(PieceKind::Pawn, Color::White, s("e2"));

    let h = PositionalHeuristic;
    assert!(h.value(&mut advanced, Color::White) > h.value(&mut home, Color::White));
}

/// Builds the checking and non-checking variants of a rook position, with an
/// optional extra white queen to push the material total out of the endgame.
fn check_pair(midgame: bool) -> (Board, Board) {
    let build = |rook_square: &str| {
        let mut board = Board::empty();
        board.add_piece(PieceKind::King, Color::White, s("e1"));
        board.add_piece(PieceKind::King, Color::Black, s("e8"));
        board.add_piece(PieceKind::Rook, Color::White, s(rook_square));
        if midgame {
            board.add_piece(PieceKind::Queen, Color::White, s("h4"));
        }
        board
    };
    (build("e5"), build("d5"))
}

#[test]
fn check_bonus_is_three_outside_the_endgame() {
    let (mut checking, mut quiet) = check_pair(true);
    assert!(checking.in_check(Color::Black));
    assert!(!quiet.in_check(Color::Black));
    let h = PositionalHeuristic;
    let gap = h.value(&mut checking, Color::White) - h.value(&mut quiet, Color::White);
    assert!(gap > 2.0 && gap < 4.0, "gap was {gap}");
}

#[test]
fn check_bonus_doubles_in_the_endgame() {
    let (mut checking, mut quiet) = check_pair(false);
    let h = PositionalHeuristic;
    let gap = h.value(&mut checking, Color::White) - h.value(&mut quiet, Color::White);
    assert!(gap > 5.0 && gap < 7.0, "gap was {gap}");
}

#[test]
fn combination_is_the_sum_of_its_parts() {
    let mut board = Board::new();
    board.do_move(chess_core::Move::new(&board, s("e2"), s("e4")));
    let combined = CombinationHeuristic::default().value(&mut board, Color::White);
    let material = MaterialHeuristic.value(&mut board, Color::White);
    let positional = PositionalHeuristic.value(&mut board, Color::White);
    assert_eq!(combined, material + positional);
}
