//! Making and unmaking moves with full state restoration.

use super::masks::{castling_for_rook_square, CASTLING_ROOK_FROM, CASTLING_ROOK_TO};
use super::state::{Board, UnmakeInfo};
use super::types::{Color, Move, Piece, Square};

/// The square of the pawn captured en passant: one rank behind the
/// capture target, relative to the mover.
fn ep_capture_square(ep_target: Square, mover: Color) -> Square {
    match mover {
        Color::White => Square::from_index(ep_target.as_index() - 8),
        Color::Black => Square::from_index(ep_target.as_index() + 8),
    }
}

impl Board {
    /// Apply a move obtained from this position's legal move list.
    ///
    /// Returns the undo record that [`Board::unmake_move`] needs to
    /// restore the position bit-for-bit. Applying a move that did not
    /// come from the current legal move list leaves the position in an
    /// unspecified state.
    pub fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        debug_assert!(!mv.is_null(), "make_move on null move");

        let us = self.side_to_move;
        let them = us.opponent();
        let piece = mv.piece();
        let from = mv.from();
        let to = mv.to();

        let previous_castling_rights = self.castling_rights;
        let previous_en_passant_target = self.en_passant_target;
        let previous_halfmove_clock = self.halfmove_clock;
        let previous_legality = self.legality;

        // Captures first, so the target square is free for the mover
        let captured_piece = if mv.is_en_passant() {
            self.remove_piece(ep_capture_square(to, us), them, Piece::Pawn);
            Some(Piece::Pawn)
        } else if mv.is_capture() {
            let captured = self.get_piece(them, to).expect("capture target empty");
            self.remove_piece(to, them, captured);
            Some(captured)
        } else {
            None
        };

        self.remove_piece(from, us, piece);
        if let Some(variant) = mv.castling_variant() {
            self.set_piece(to, us, Piece::King);
            let v = variant.index();
            self.move_piece(CASTLING_ROOK_FROM[v], CASTLING_ROOK_TO[v], us, Piece::Rook);
        } else if let Some(promo) = mv.promotion_piece() {
            self.set_piece(to, us, promo);
        } else {
            self.set_piece(to, us, piece);
        }

        // Castling rights: a king move loses both of the mover's rights,
        // a rook leaving its origin square or an enemy rook captured on
        // its origin square loses that one right.
        if piece == Piece::King {
            self.castling_rights.remove_color(us);
        } else if piece == Piece::Rook {
            if let Some(variant) = castling_for_rook_square(from) {
                if variant.color() == us {
                    self.castling_rights.remove(variant);
                }
            }
        }
        if captured_piece == Some(Piece::Rook) {
            if let Some(variant) = castling_for_rook_square(to) {
                if variant.color() == them {
                    self.castling_rights.remove(variant);
                }
            }
        }

        self.en_passant_target = if mv.is_double_pawn_push() {
            Some(Square::from_index((from.as_index() + to.as_index()) / 2))
        } else {
            None
        };

        if piece == Piece::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if us == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = them;

        UnmakeInfo {
            captured_piece,
            previous_castling_rights,
            previous_en_passant_target,
            previous_halfmove_clock,
            previous_legality,
        }
    }

    /// Reverse a move made with [`Board::make_move`].
    ///
    /// Moves and undo records form a stack: unmakes must happen in LIFO
    /// order with the record returned by the matching make.
    pub fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        let mover = self.side_to_move.opponent();
        let enemy = self.side_to_move;

        self.side_to_move = mover;
        if mover == Color::Black {
            self.fullmove_number -= 1;
        }
        self.castling_rights = info.previous_castling_rights;
        self.en_passant_target = info.previous_en_passant_target;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.legality = info.previous_legality;

        let from = mv.from();
        let to = mv.to();

        if let Some(variant) = mv.castling_variant() {
            self.remove_piece(to, mover, Piece::King);
            self.set_piece(from, mover, Piece::King);
            let v = variant.index();
            self.move_piece(CASTLING_ROOK_TO[v], CASTLING_ROOK_FROM[v], mover, Piece::Rook);
        } else {
            let placed = mv.promotion_piece().unwrap_or(mv.piece());
            self.remove_piece(to, mover, placed);
            self.set_piece(from, mover, mv.piece());

            if mv.is_en_passant() {
                self.set_piece(ep_capture_square(to, mover), enemy, Piece::Pawn);
            } else if let Some(captured) = info.captured_piece {
                self.set_piece(to, enemy, captured);
            }
        }
    }
}
