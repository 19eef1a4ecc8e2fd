//! Serializable position snapshots for tests and saved fixtures.
//!
//! The board text alone (`Board::encode`) is enough to rebuild piece
//! placement but not a full game state, so a fixture carries side to move,
//! castling rights and the en-passant target alongside it.

use crate::board::Board;
use crate::position::{CastlingRights, Position};
use crate::types::{Color, coord_to_sq, sq_to_coord};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Fixture {
    pub board: String,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<String>,
}

impl Fixture {
    pub fn capture(pos: &Position) -> Self {
        Fixture {
            board: pos.board.encode(),
            side_to_move: pos.side_to_move,
            castling: pos.castling,
            en_passant: pos.en_passant.map(sq_to_coord),
        }
    }

    pub fn restore(&self) -> Position {
        Position {
            board: Board::decode(&self.board),
            side_to_move: self.side_to_move,
            castling: self.castling,
            en_passant: self
                .en_passant
                .as_deref()
                .map(|c| coord_to_sq(c).expect("bad en-passant coord in fixture")),
        }
    }
}
