use crate::movegen::pseudo_legal_moves;
use crate::position::Position;
use crate::types::*;

/// True if any piece of `by` has `target` among its pseudo-legal
/// destinations. Castling generation is always disabled here; that one flag
/// is what breaks the cycle between attack scanning and castling legality.
pub fn is_attacked(pos: &Position, target: u8, by: Color) -> bool {
    for from in 0..64u8 {
        if let Some(pc) = pos.board.get(from)
            && pc.color == by
            && pseudo_legal_moves(pos, from, false)
                .iter()
                .any(|m| m.to == target)
        {
            return true;
        }
    }
    false
}

/// Whether `color`'s king is attacked. Every position in play has exactly one
/// king per color; a board without one is corrupt and fails loudly.
pub fn is_in_check(pos: &Position, color: Color) -> bool {
    let ksq = pos
        .board
        .king_sq(color)
        .expect("position has no king for side; state is corrupt");
    is_attacked(pos, ksq, color.other())
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;
