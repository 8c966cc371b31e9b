use crate::board::Board;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    /// Row delta a pawn of this color advances by. Row 0 is rank 8, so white
    /// pawns walk toward smaller rows.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
    /// One-character label used by `Board::state_string`.
    pub fn label(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value. The king's value is large enough to dominate any
    /// combination of other pieces (and feeds the endgame threshold).
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 200,
        }
    }

    /// One-character algebraic glyph.
    pub fn glyph(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// Stable index into a board's piece arena. Squares hold ids rather than
/// piece data, so captures and undo are index updates instead of reference
/// surgery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PieceId(pub(crate) u16);

impl PieceId {
    pub fn idx(self) -> usize {
        self.0 as usize
    }
}

/// An arena entry. `square == None` means the piece has been captured (or,
/// for an undone promotion, dropped entirely).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Option<u8>,
    pub moved: bool,
}

/// An immutable state transition. Everything needed to apply and exactly
/// reverse the move is snapshotted when it is constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: u8, // 0..63
    pub to: u8,
    /// The piece being moved.
    pub piece: PieceId,
    /// Occupant of `to` before the move, if any.
    pub captured: Option<PieceId>,
    /// Whether the mover had already moved, restored on undo.
    pub piece_had_moved: bool,
    /// Castling only: the paired rook's (from, to) squares. A single field
    /// for the pair, so a castle with only one rook square given cannot be
    /// constructed.
    pub rook: Option<(u8, u8)>,
}

impl Move {
    /// Snapshot a move of the piece on `from` to `to`.
    /// Panics if `from` is empty.
    pub fn new(board: &Board, from: u8, to: u8) -> Self {
        let piece = board
            .piece_id_at(from)
            .expect("no piece on the move's start square");
        Move {
            from,
            to,
            piece,
            captured: board.piece_id_at(to),
            piece_had_moved: board.piece(piece).moved,
            rook: None,
        }
    }

    /// Snapshot a castling move with its paired rook transition.
    pub fn castle(board: &Board, from: u8, to: u8, rook_from: u8, rook_to: u8) -> Self {
        let mut mv = Move::new(board, from, to);
        mv.rook = Some((rook_from, rook_to));
        mv
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub fn is_castle(&self) -> bool {
        self.rook.is_some()
    }

    /// A move promotes iff the mover is a pawn ending on a back rank. The
    /// condition is derived rather than stored; the `piece` field keeps the
    /// pawn that undo restores.
    pub fn is_promotion(&self, board: &Board) -> bool {
        board.piece(self.piece).kind == PieceKind::Pawn
            && (row_of(self.to) == 0 || row_of(self.to) == 7)
    }

    /// Repetition comparison: two moves are the same if they share start and
    /// end squares, regardless of captures or scores.
    pub fn same_squares(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to
    }
}

// Helpers
pub fn row_of(sq: u8) -> i8 {
    (sq / 8) as i8
}
pub fn col_of(sq: u8) -> i8 {
    (sq % 8) as i8
}
pub fn sq(row: i8, col: i8) -> Option<u8> {
    if (0..8).contains(&row) && (0..8).contains(&col) {
        Some((row as u8) * 8 + (col as u8))
    } else {
        None
    }
}

/// File letter + rank digit; rank 8 is row 0.
pub fn sq_to_coord(sq: u8) -> String {
    let f = (b'a' + (sq % 8)) as char;
    let r = (b'1' + (7 - sq / 8)) as char;
    format!("{f}{r}")
}

pub fn coord_to_sq(c: &str) -> Option<u8> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0];
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    let col = f - b'a';
    let row = 7 - (r - b'1');
    Some(row * 8 + col)
}
