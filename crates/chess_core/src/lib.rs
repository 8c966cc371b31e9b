//! Chess rules core: board representation, move generation and application
//! with full undo, check/checkmate/stalemate detection, and perft.
//!
//! This crate knows nothing about players or search beyond the [`Player`]
//! trait; engines live in their own crates and drive a shared `Board`.

pub mod board;
pub mod movegen;
pub mod perft;
pub mod types;

pub use board::Board;
pub use perft::perft;
pub use types::{coord_to_sq, sq_to_coord, Color, Move, Piece, PieceId, PieceKind};

// ============================================================================
// Player Trait
// ============================================================================

/// A move-choosing agent. The board is borrowed mutably because engines
/// explore by applying and undoing moves on it; implementations must leave it
/// exactly as they found it.
pub trait Player {
    /// The color this player plays.
    fn color(&self) -> Color;

    /// Pick a move for this player's color, or `None` if no legal move
    /// exists (checkmate or stalemate).
    fn choose_move(&mut self, board: &mut Board) -> Option<Move>;

    /// Display name, e.g. "Minimax (Hard)".
    fn name(&self) -> &str;

    /// Reset any per-game state (caches, counters) before a new game.
    fn new_game(&mut self) {}
}
