use super::*;

#[test]
fn test_startpos_layout() {
    let b = Board::startpos();
    assert_eq!(b.get(4), Some(Piece::new(Color::White, PieceKind::King)));
    assert_eq!(b.get(0), Some(Piece::new(Color::White, PieceKind::Rook)));
    assert_eq!(b.get(60), Some(Piece::new(Color::Black, PieceKind::King)));
    for f in 0..8u8 {
        assert_eq!(b.get(8 + f), Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert_eq!(b.get(48 + f), Some(Piece::new(Color::Black, PieceKind::Pawn)));
    }
    // Middle of the board starts empty
    for sq in 16..48u8 {
        assert_eq!(b.get(sq), None);
    }
}

#[test]
fn test_set_and_get() {
    let mut b = Board::empty();
    let sq = coord_to_sq("d4").unwrap();
    b.set(sq, Some(Piece::new(Color::Black, PieceKind::Bishop)));
    assert_eq!(b.get(sq), Some(Piece::new(Color::Black, PieceKind::Bishop)));
    b.set(sq, None);
    assert_eq!(b.get(sq), None);
}

#[test]
fn test_king_sq() {
    let b = Board::startpos();
    assert_eq!(b.king_sq(Color::White), Some(4));
    assert_eq!(b.king_sq(Color::Black), Some(60));
    assert_eq!(Board::empty().king_sq(Color::White), None);
}

#[test]
fn test_encode_decode_round_trip() {
    let b = Board::startpos();
    let text = b.encode();
    assert_eq!(Board::decode(&text), b);
}

#[test]
fn test_decode_places_pieces() {
    let b = Board::decode(
        ".. .. .. .. bK .. .. ..\n\
         .. .. .. .. .. .. .. ..\n\
         .. .. .. .. .. .. .. ..\n\
         .. .. .. bP .. .. .. ..\n\
         .. .. .. .. wN .. .. ..\n\
         .. .. .. .. .. .. .. ..\n\
         .. .. .. .. .. .. .. ..\n\
         .. .. .. .. wK .. .. ..",
    );
    assert_eq!(
        b.get(coord_to_sq("e4").unwrap()),
        Some(Piece::new(Color::White, PieceKind::Knight))
    );
    assert_eq!(
        b.get(coord_to_sq("d5").unwrap()),
        Some(Piece::new(Color::Black, PieceKind::Pawn))
    );
    assert_eq!(b.king_sq(Color::Black), coord_to_sq("e8"));
    assert_eq!(b.king_sq(Color::White), coord_to_sq("e1"));
}

#[test]
fn test_encode_first_row_is_rank_eight() {
    let text = Board::startpos().encode();
    let first = text.lines().next().unwrap();
    assert_eq!(first, "bR bN bB bQ bK bB bN bR");
    let last = text.lines().last().unwrap();
    assert_eq!(last, "wR wN wB wQ wK wB wN wR");
}

#[test]
#[should_panic(expected = "8 rows")]
fn test_decode_rejects_short_input() {
    Board::decode(".. .. .. .. .. .. .. ..");
}
