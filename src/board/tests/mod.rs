//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `fen.rs` - FEN parsing, emission and round-trips
//! - `movegen.rs` - legal move generation scenarios
//! - `make_unmake.rs` - make/unmake move correctness
//! - `perft.rs` - move generation node counts
//! - `proptest.rs` - property-based tests

mod fen;
