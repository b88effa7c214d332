//! Chess board representation and fully legal move generation.
//!
//! Uses bitboards with magic-indexed sliding attack tables. Supports the
//! complete rules: castling, en passant, promotions, pins and checks.
//!
//! # Example
//! ```
//! use chess_core::board::Board;
//!
//! let mut board = Board::new();
//! let moves = board.generate_moves();
//! assert_eq!(moves.len(), 20);
//! ```

mod attack_tables;
mod error;
mod fen;
mod make_unmake;
mod masks;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use error::{FenError, MoveParseError, SquareError};
pub use state::{Board, UnmakeInfo};
pub use types::{
    Bitboard, BitboardIter, Castling, CastlingRights, Color, Move, MoveList, MoveListIntoIter,
    Piece, Square,
};
