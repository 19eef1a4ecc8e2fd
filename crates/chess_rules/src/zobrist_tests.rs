use super::*;
use crate::types::{Color, PieceKind, coord_to_sq};

#[test]
fn test_same_layout_same_key() {
    assert_eq!(board_key(&Board::startpos()), board_key(&Board::startpos()));
}

#[test]
fn test_key_changes_with_layout() {
    let mut b = Board::startpos();
    let base = board_key(&b);

    let g1 = coord_to_sq("g1").unwrap();
    let f3 = coord_to_sq("f3").unwrap();
    let knight = b.get(g1).unwrap();
    b.set(g1, None);
    b.set(f3, Some(knight));
    assert_ne!(board_key(&b), base);

    // Moving it back restores the exact key.
    b.set(f3, None);
    b.set(g1, Some(knight));
    assert_eq!(board_key(&b), base);
}

#[test]
fn test_key_distinguishes_color_and_kind() {
    let mut a = Board::empty();
    let mut b = Board::empty();
    let d4 = coord_to_sq("d4").unwrap();
    a.set(d4, Some(Piece::new(Color::White, PieceKind::Rook)));
    b.set(d4, Some(Piece::new(Color::Black, PieceKind::Rook)));
    assert_ne!(board_key(&a), board_key(&b));

    b.set(d4, Some(Piece::new(Color::White, PieceKind::Queen)));
    assert_ne!(board_key(&a), board_key(&b));
}

#[test]
fn test_empty_board_key_is_zero() {
    assert_eq!(board_key(&Board::empty()), 0);
}
