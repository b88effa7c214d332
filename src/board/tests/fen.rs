//! FEN parsing and emission tests.

use crate::board::{Board, Color, FenError, Piece, Square};

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn sq(notation: &str) -> Square {
    notation.parse().unwrap()
}

#[test]
fn test_parse_initial_position() {
    let board = Board::from_fen(START_FEN);
    assert_eq!(board, Board::new());
}

#[test]
fn test_parse_kiwipete_fields() {
    let board = Board::from_fen(KIWIPETE);
    assert_eq!(board.side_to_move(), Color::White);
    assert_eq!(board.piece_at(sq("e5")), Some((Color::White, Piece::Knight)));
    assert_eq!(board.piece_at(sq("a6")), Some((Color::Black, Piece::Bishop)));
    assert_eq!(board.en_passant_target(), None);
    assert_eq!(board.halfmove_clock(), 0);
    assert_eq!(board.fullmove_number(), 1);
}

#[test]
fn test_parse_en_passant_and_clocks() {
    let board =
        Board::from_fen("rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 4 3");
    assert_eq!(board.en_passant_target(), Some(sq("f6")));
    assert_eq!(board.halfmove_clock(), 4);
    assert_eq!(board.fullmove_number(), 3);
}

#[test]
fn test_round_trip_canonical_fens() {
    let fens = [
        START_FEN,
        KIWIPETE,
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        "r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 12 34",
        "4k3/8/8/8/8/8/8/4K2R w K - 0 1",
        "8/P7/8/8/8/8/8/K1k5 w - - 0 1",
    ];
    for fen in fens {
        assert_eq!(Board::from_fen(fen).to_fen(), fen);
    }
}

#[test]
fn test_emission_after_moves() {
    let mut board = Board::new();
    board.make_move_uci("e2e4").unwrap();
    assert_eq!(
        board.to_fen(),
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    );

    board.make_move_uci("c7c5").unwrap();
    assert_eq!(
        board.to_fen(),
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2"
    );

    board.make_move_uci("g1f3").unwrap();
    assert_eq!(
        board.to_fen(),
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
    );
}

#[test]
fn test_field_count_errors() {
    assert_eq!(
        Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -"),
        Err(FenError::FieldCount { found: 4 })
    );
    assert_eq!(Board::try_from_fen(""), Err(FenError::FieldCount { found: 0 }));
}

#[test]
fn test_rank_count_error() {
    assert_eq!(
        Board::try_from_fen("8/8/8/8/8/8/8 w - - 0 1"),
        Err(FenError::RankCount { found: 7 })
    );
}

#[test]
fn test_rank_sum_errors() {
    // Seven squares on the first listed rank
    assert!(matches!(
        Board::try_from_fen("rnbqkbn/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
        Err(FenError::RankSum { rank: 0, .. })
    ));
    // Nine squares
    assert!(matches!(
        Board::try_from_fen("rnbqkbnrr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
        Err(FenError::RankSum { rank: 0, .. })
    ));
}

#[test]
fn test_invalid_piece_error() {
    assert_eq!(
        Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPXPP/RNBQKBNR w KQkq - 0 1"),
        Err(FenError::InvalidPiece { char: 'X' })
    );
}

#[test]
fn test_invalid_side_error() {
    assert_eq!(
        Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1"),
        Err(FenError::InvalidSideToMove {
            found: "x".to_string()
        })
    );
}

#[test]
fn test_invalid_castling_error() {
    assert_eq!(
        Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQxq - 0 1"),
        Err(FenError::InvalidCastling { char: 'x' })
    );
}

#[test]
fn test_invalid_en_passant_errors() {
    // Bad notation
    assert!(matches!(
        Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1"),
        Err(FenError::InvalidEnPassant { .. })
    ));
    // Valid square on an impossible rank
    assert!(matches!(
        Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e4 0 1"),
        Err(FenError::InvalidEnPassant { .. })
    ));
}

#[test]
fn test_invalid_clock_errors() {
    assert!(matches!(
        Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1"),
        Err(FenError::InvalidClock { .. })
    ));
    // Fullmove number starts at 1
    assert!(matches!(
        Board::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0"),
        Err(FenError::InvalidClock { .. })
    ));
}

#[test]
fn test_missing_king_errors() {
    assert_eq!(
        Board::try_from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
        Err(FenError::MissingKing {
            color: Color::Black
        })
    );
    assert_eq!(
        Board::try_from_fen("4k3/8/8/8/8/8/8/8 w - - 0 1"),
        Err(FenError::MissingKing {
            color: Color::White
        })
    );
}

#[test]
fn test_parse_move_lookup() {
    let mut board = Board::new();
    let mv = board.parse_move("e2e4").unwrap();
    assert_eq!(mv.from(), sq("e2"));
    assert_eq!(mv.to(), sq("e4"));
    assert!(mv.is_double_pawn_push());

    assert!(board.parse_move("e2e5").is_err());
    assert!(board.parse_move("e2").is_err());
    assert!(board.parse_move("z2e4").is_err());
}

#[test]
fn test_parse_move_promotion_requires_piece() {
    let mut board = Board::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1");

    // Without the piece letter the move matches nothing
    assert!(board.parse_move("a7a8").is_err());

    let mv = board.parse_move("a7a8q").unwrap();
    assert_eq!(mv.promotion_piece(), Some(Piece::Queen));

    assert!(board.parse_move("a7a8k").is_err());
}
