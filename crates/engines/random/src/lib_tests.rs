use super::*;
use chess_core::{coord_to_sq, PieceKind};

#[test]
fn returns_a_legal_move() {
    let mut board = Board::new();
    let mut player = RandomPlayer::new(Color::White);
    let mv = player.choose_move(&mut board).unwrap();
    let legal = board.legal_moves(Color::White);
    assert!(legal.iter().any(|m| m.from == mv.from && m.to == mv.to));
}

#[test]
fn same_seed_same_game() {
    let mut first_board = Board::new();
    let mut second_board = Board::new();
    let mut first = RandomPlayer::with_seed(Color::White, 7);
    let mut second = RandomPlayer::with_seed(Color::White, 7);
    for _ in 0..5 {
        let a = first.choose_move(&mut first_board).unwrap();
        let b = second.choose_move(&mut second_board).unwrap();
        assert_eq!((a.from, a.to), (b.from, b.to));
        first_board.do_move(a);
        second_board.do_move(b);
    }
}

#[test]
fn no_move_when_checkmated() {
    let mut board = Board::new();
    for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
        let mv = Move::new(
            &board,
            coord_to_sq(from).unwrap(),
            coord_to_sq(to).unwrap(),
        );
        board.do_move(mv);
    }
    assert!(board.in_checkmate(Color::White));
    let mut player = RandomPlayer::new(Color::White);
    assert!(player.choose_move(&mut board).is_none());
}

#[test]
fn no_move_when_stalemated() {
    let mut board = Board::empty();
    board.add_piece(PieceKind::King, Color::Black, coord_to_sq("a8").unwrap());
    board.add_piece(PieceKind::Queen, Color::White, coord_to_sq("b6").unwrap());
    board.add_piece(PieceKind::King, Color::White, coord_to_sq("c7").unwrap());
    let mut player = RandomPlayer::new(Color::Black);
    assert!(player.choose_move(&mut board).is_none());
}
