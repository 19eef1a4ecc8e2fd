use crate::attacks::is_in_check;
use crate::movegen::all_legal_moves;
use crate::position::Position;
use crate::types::Color;

/// Terminal classification of a game. Stalemate is intentionally absent: a
/// stalemated side simply has no legal moves while the game stays
/// `InProgress` (see DESIGN.md).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Checkmate(Color),
    Resigned(Color),
    DrawByRepetition,
}

impl GameResult {
    pub fn winner(self) -> Option<Color> {
        match self {
            GameResult::Checkmate(w) | GameResult::Resigned(w) => Some(w),
            _ => None,
        }
    }

    pub fn is_over(self) -> bool {
        self != GameResult::InProgress
    }
}

/// The side to move is in check.
pub fn is_check(pos: &Position) -> bool {
    is_in_check(pos, pos.side_to_move)
}

/// The side to move is in check and has no legal move at all.
pub fn is_checkmate(pos: &Position) -> bool {
    is_check(pos) && all_legal_moves(pos).is_empty()
}
