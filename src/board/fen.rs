//! FEN parsing and emission, plus long-algebraic move lookup.

use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::state::Board;
use super::types::{
    file_to_index, rank_to_index, Castling, Color, Move, Piece, Square,
};

impl Board {
    /// Parse a position from FEN notation.
    ///
    /// Expects the full six-field form: placement, side to move, castling
    /// availability, en passant target, halfmove clock, fullmove number.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() != 6 {
            return Err(FenError::FieldCount { found: parts.len() });
        }

        // Piece placement, rank 8 first
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount { found: ranks.len() });
        }
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if digit == 0 {
                        return Err(FenError::InvalidPiece { char: c });
                    }
                    file += digit as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if file >= 8 {
                        return Err(FenError::RankSum {
                            rank: rank_idx,
                            squares: file + 1,
                        });
                    }
                    board.set_piece(Square::new(7 - rank_idx, file), color, piece);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(FenError::RankSum {
                    rank: rank_idx,
                    squares: file,
                });
            }
        }

        // Side to move
        board.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        // Castling availability
        for c in parts[2].chars() {
            match c {
                'K' => board.castling_rights.set(Castling::WhiteKingSide),
                'Q' => board.castling_rights.set(Castling::WhiteQueenSide),
                'k' => board.castling_rights.set(Castling::BlackKingSide),
                'q' => board.castling_rights.set(Castling::BlackQueenSide),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        // En passant target
        board.en_passant_target = if parts[3] == "-" {
            None
        } else {
            let sq: Square = parts[3].parse().map_err(|_| FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            })?;
            // Only a rank 3 (white pushed) or rank 6 (black pushed) square
            // can ever be an en passant target.
            if sq.rank() != 2 && sq.rank() != 5 {
                return Err(FenError::InvalidEnPassant {
                    found: parts[3].to_string(),
                });
            }
            Some(sq)
        };

        // Clocks
        board.halfmove_clock = parts[4].parse().map_err(|_| FenError::InvalidClock {
            found: parts[4].to_string(),
        })?;
        board.fullmove_number = parts[5].parse().map_err(|_| FenError::InvalidClock {
            found: parts[5].to_string(),
        })?;
        if board.fullmove_number == 0 {
            return Err(FenError::InvalidClock {
                found: parts[5].to_string(),
            });
        }

        // Both kings must be on the board for legality analysis
        for color in [Color::White, Color::Black] {
            if board.pieces[color.index()][Piece::King.index()].is_empty() {
                return Err(FenError::MissingKing { color });
            }
        }

        board.refresh_legality();
        Ok(board)
    }

    /// Parse a position from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for
    /// fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Emit the position in canonical FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square::new(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        for (variant, c) in [
            (Castling::WhiteKingSide, 'K'),
            (Castling::WhiteQueenSide, 'Q'),
            (Castling::BlackKingSide, 'k'),
            (Castling::BlackQueenSide, 'q'),
        ] {
            if self.castling_rights.has(variant) {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in UCI long algebraic notation (e.g., "e2e4", "e7e8q").
    ///
    /// Resolves the move against the current legal move list; moves are
    /// never synthesised from the text. A promotion without its piece
    /// letter does not match anything and is reported as illegal.
    pub fn parse_move(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        if uci.len() < 4 || uci.len() > 5 {
            return Err(MoveParseError::InvalidLength { len: uci.len() });
        }

        let chars: Vec<char> = uci.chars().collect();

        if !('a'..='h').contains(&chars[0])
            || !('1'..='8').contains(&chars[1])
            || !('a'..='h').contains(&chars[2])
            || !('1'..='8').contains(&chars[3])
        {
            return Err(MoveParseError::InvalidSquare {
                notation: uci.to_string(),
            });
        }

        let from = Square::new(rank_to_index(chars[1]), file_to_index(chars[0]));
        let to = Square::new(rank_to_index(chars[3]), file_to_index(chars[2]));

        let promotion = if uci.len() == 5 {
            let piece = Piece::from_char(chars[4])
                .ok_or(MoveParseError::InvalidPromotion { char: chars[4] })?;
            if matches!(piece, Piece::Pawn | Piece::King) {
                return Err(MoveParseError::InvalidPromotion { char: chars[4] });
            }
            Some(piece)
        } else {
            None
        };

        let legal_moves = self.generate_moves();
        let found = match promotion {
            Some(piece) => legal_moves.find_promotion(from, to, piece),
            None => legal_moves
                .iter()
                .copied()
                .find(|mv| mv.from() == from && mv.to() == to && mv.promotion_piece().is_none()),
        };

        found.ok_or(MoveParseError::IllegalMove {
            notation: uci.to_string(),
        })
    }

    /// Parse a UCI move and make it on the board in one call.
    pub fn make_move_uci(&mut self, uci: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(uci)?;
        self.make_move(mv);
        Ok(mv)
    }
}

impl FromStr for Board {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::try_from_fen(s)
    }
}
