use crate::movegen;
use crate::types::*;

/// An 8x8 chessboard: a flat array of occupancy slots, a piece arena, and
/// the stack of every move applied so far.
///
/// The 64 squares exist for the board's whole lifetime; only their occupancy
/// changes. Once play has begun, all mutation flows through `do_move` /
/// `undo_last_move`.
#[derive(Clone, Debug)]
pub struct Board {
    /// Occupancy by square index (row * 8 + col); row 0 is rank 8.
    squares: [Option<PieceId>; 64],
    /// Piece arena. Captured pieces keep their entry (with `square: None`)
    /// so history moves can restore them on undo.
    pieces: Vec<Piece>,
    /// Every move applied so far, newest last.
    history: Vec<Move>,
}

impl Board {
    /// A board with all pieces on their starting squares.
    pub fn new() -> Self {
        let mut board = Board::empty();
        board.setup_side(Color::White, 7, 6);
        board.setup_side(Color::Black, 0, 1);
        board
    }

    /// A board with no pieces, for tests and custom positions.
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
            pieces: Vec::with_capacity(32),
            history: Vec::new(),
        }
    }

    fn setup_side(&mut self, color: Color, back_row: u8, pawn_row: u8) {
        for col in 0..8u8 {
            self.add_piece(PieceKind::Pawn, color, pawn_row * 8 + col);
        }
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            self.add_piece(kind, color, back_row * 8 + col as u8);
        }
    }

    /// Place a new piece on an empty square. Setup-time only.
    pub fn add_piece(&mut self, kind: PieceKind, color: Color, square: u8) -> PieceId {
        assert!(
            self.squares[square as usize].is_none(),
            "square {} is already occupied",
            sq_to_coord(square)
        );
        let id = PieceId(self.pieces.len() as u16);
        self.pieces.push(Piece {
            kind,
            color,
            square: Some(square),
            moved: false,
        });
        self.squares[square as usize] = Some(id);
        id
    }

    pub fn piece_id_at(&self, square: u8) -> Option<PieceId> {
        self.squares[square as usize]
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.idx()]
    }

    /// Live pieces of one color; captured pieces are skipped.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.color == color && p.square.is_some())
            .map(|(i, p)| (PieceId(i as u16), p))
    }

    pub fn count_pieces(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// All legal moves for `color`.
    pub fn legal_moves(&mut self, color: Color) -> Vec<Move> {
        self.possible_moves(color, true)
    }

    /// All moves for `color`; with `only_legal == false` the raw
    /// movement-shape set is returned, which may leave the mover's own king
    /// in check. Check detection depends on that mode.
    pub fn possible_moves(&mut self, color: Color, only_legal: bool) -> Vec<Move> {
        movegen::possible_moves(self, color, only_legal)
    }

    /// Applies the move, auto-promoting to a queen when a pawn reaches the
    /// far rank.
    pub fn do_move(&mut self, mv: Move) {
        self.do_move_promoting(mv, PieceKind::Queen);
    }

    /// Applies the move, promoting to `promotion` if the move promotes.
    /// Interactive callers pass the piece their player picked.
    pub fn do_move_promoting(&mut self, mv: Move, promotion: PieceKind) {
        let promoting = mv.is_promotion(self);
        self.history.push(mv);
        if let Some(captured) = mv.captured {
            self.lift(captured);
        }
        self.lift(mv.piece);
        self.place(mv.piece, mv.to);
        self.pieces[mv.piece.idx()].moved = true;
        if promoting {
            let color = self.pieces[mv.piece.idx()].color;
            self.lift(mv.piece);
            let id = PieceId(self.pieces.len() as u16);
            self.pieces.push(Piece {
                kind: promotion,
                color,
                square: None,
                moved: true,
            });
            self.place(id, mv.to);
        }
        if let Some((rook_from, rook_to)) = mv.rook {
            let rook = self
                .piece_id_at(rook_from)
                .expect("castling move without a rook on its start square");
            self.lift(rook);
            self.place(rook, rook_to);
            self.pieces[rook.idx()].moved = true;
        }
    }

    /// Reverses the most recent move. Undo must mirror applies in strict
    /// LIFO order; panics if no move has been applied.
    pub fn undo_last_move(&mut self) {
        let mv = self.history.pop().expect("undo with no moves applied");
        if let Some((rook_from, rook_to)) = mv.rook {
            let rook = self
                .piece_id_at(rook_to)
                .expect("castling undo without a rook on its end square");
            self.lift(rook);
            self.place(rook, rook_from);
            self.pieces[rook.idx()].moved = false;
        }
        if mv.is_promotion(self) {
            // LIFO discipline makes the promoted piece the newest arena
            // entry, so it can be dropped outright.
            let promoted = self
                .piece_id_at(mv.to)
                .expect("promotion undo without a piece on the end square");
            debug_assert_eq!(promoted.idx() + 1, self.pieces.len());
            self.lift(promoted);
            self.pieces.pop();
        } else {
            self.lift(mv.piece);
        }
        self.place(mv.piece, mv.from);
        self.pieces[mv.piece.idx()].moved = mv.piece_had_moved;
        if let Some(captured) = mv.captured {
            self.place(captured, mv.to);
        }
    }

    /// True iff any opposing movement-shape move would capture this color's
    /// king. Generation must skip the legality filter here, or check
    /// detection and legality filtering would recurse into each other.
    pub fn in_check(&mut self, color: Color) -> bool {
        let moves = self.possible_moves(color.other(), false);
        moves.iter().any(|mv| match mv.captured {
            Some(id) => {
                let p = self.piece(id);
                p.kind == PieceKind::King && p.color == color
            }
            None => false,
        })
    }

    pub fn in_checkmate(&mut self, color: Color) -> bool {
        self.in_check(color) && self.legal_moves(color).is_empty()
    }

    /// Draw detection: bare kings on both sides, the last three move-pairs
    /// repeating, or a side with no legal moves while not in check.
    ///
    /// The repetition clause compares only the last six half-moves by their
    /// start/end squares. It is a deliberate simplification of threefold
    /// repetition and is preserved as such.
    pub fn in_stalemate(&mut self) -> bool {
        if self.count_pieces(Color::White) <= 1 && self.count_pieces(Color::Black) <= 1 {
            return true;
        }
        if self.last_three_pairs_repeat() {
            return true;
        }
        self.no_move_stalemate(Color::White) || self.no_move_stalemate(Color::Black)
    }

    fn last_three_pairs_repeat(&self) -> bool {
        let n = self.history.len();
        if n < 6 {
            return false;
        }
        let h = &self.history[n - 6..];
        // h[5] is the newest half-move.
        h[5].same_squares(&h[3])
            && h[3].same_squares(&h[1])
            && h[4].same_squares(&h[2])
            && h[2].same_squares(&h[0])
    }

    fn no_move_stalemate(&mut self, color: Color) -> bool {
        !self.in_check(color) && self.legal_moves(color).is_empty()
    }

    /// True when either side is down to fewer than four non-pawn pieces.
    /// Search deepens once this holds.
    pub fn few_pieces_left(&self) -> bool {
        let non_pawns = |color: Color| {
            self.pieces_of(color)
                .filter(|(_, p)| p.kind != PieceKind::Pawn)
                .count()
        };
        non_pawns(Color::White) < 4 || non_pawns(Color::Black) < 4
    }

    /// Compact position encoding used as a memoization key: occupancy in
    /// square order, with an `E` flag on rooks and kings that have never
    /// moved (castling rights). Histories are not encoded, so two positions
    /// with identical placement and rights compare equal.
    pub fn state_string(&self) -> String {
        let mut out = String::with_capacity(96);
        for slot in self.squares.iter() {
            match slot {
                None => out.push('-'),
                Some(id) => {
                    let p = self.piece(*id);
                    out.push(p.color.label());
                    out.push(p.kind.glyph());
                    if (p.kind == PieceKind::Rook || p.kind == PieceKind::King) && !p.moved {
                        out.push('E');
                    }
                }
            }
        }
        out
    }

    // Remove a piece from play; its arena entry stays for undo.
    fn lift(&mut self, id: PieceId) {
        if let Some(square) = self.pieces[id.idx()].square.take() {
            self.squares[square as usize] = None;
        }
    }

    fn place(&mut self, id: PieceId, square: u8) {
        self.squares[square as usize] = Some(id);
        self.pieces[id.idx()].square = Some(square);
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
