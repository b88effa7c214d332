//! Chess engine core.
//!
//! A bitboard position representation, precomputed attack tables with
//! magic sliding-piece lookups, a fully legal move generator, and
//! make/unmake with complete state restoration.
//!
//! Construct a [`board::Board`] from the initial position or a FEN
//! string, read its legal move list, apply a move, and inspect or
//! serialize the resulting state:
//!
//! ```
//! use chess_core::board::Board;
//!
//! let mut board = Board::new();
//! let mv = board.parse_move("e2e4").unwrap();
//! board.make_move(mv);
//! assert!(board.to_fen().starts_with("rnbqkbnr/pppppppp/8/8/4P3/8"));
//! ```

pub mod board;
