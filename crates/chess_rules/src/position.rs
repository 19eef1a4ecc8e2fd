use crate::board::Board;
use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        CastlingRights {
            wk: true,
            wq: true,
            bk: true,
            bq: true,
        }
    }

    pub fn none() -> Self {
        CastlingRights {
            wk: false,
            wq: false,
            bk: false,
            bq: false,
        }
    }
}

/// Everything move generation and execution need: the grid plus turn,
/// castling rights and the en-passant target. History and game result live
/// one level up, in `Game`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<u8>, // square a pawn just skipped over
}

/// Minimal inverse of one `apply_move`, enough to restore the position
/// exactly. Kept O(1) so the legality filter can apply/unapply every
/// candidate without re-cloning the board.
#[derive(Clone, Copy, Debug)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub captured_sq: Option<u8>,
    castling: CastlingRights,
    en_passant: Option<u8>,
}

impl Position {
    pub fn startpos() -> Self {
        Position {
            board: Board::startpos(),
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
        }
    }

    /// Apply a move produced by the move generator. Submitting a move whose
    /// origin is empty or whose mover is not the side to move is a logic
    /// fault upstream and fails loudly.
    pub fn apply_move(&mut self, mv: Move) -> Undo {
        let from = mv.from;
        let to = mv.to;
        let moved = self.board.get(from).expect("no piece on from-square");
        assert!(
            moved.color == self.side_to_move,
            "move submitted for the wrong side: {moved:?} at {}",
            sq_to_coord(from)
        );

        let prev_castling = self.castling;
        let prev_ep = self.en_passant;

        // Castling also relocates the rook next to the king's destination.
        if let Some((rf, rt)) = castle_rook_squares(mv, moved.color) {
            let rook = self.board.get(rf).expect("castling without rook");
            self.board.set(rf, None);
            self.board.set(rt, Some(rook));
        }

        // The en-passant victim sits behind the destination, not on it.
        let mut captured = self.board.get(to);
        let mut captured_sq = captured.map(|_| to);
        if mv.kind == MoveKind::EnPassant {
            let dir = pawn_dir(moved.color);
            let cs = sq(file_of(to), rank_of(to) - dir).expect("en-passant victim off board");
            captured = self.board.get(cs);
            captured_sq = Some(cs);
            self.board.set(cs, None);
        }

        // King or rook moves spend the corresponding rights; so does losing
        // a rook on its home square.
        self.update_rights_for_mover(moved, from);
        if let Some(cp) = captured
            && cp.kind == PieceKind::Rook
        {
            self.update_rights_for_captured_rook(cp.color, to);
        }

        // En-passant lasts exactly one reply.
        self.en_passant = None;
        if mv.kind == MoveKind::DoublePush {
            let skipped = (rank_of(from) + rank_of(to)) / 2;
            self.en_passant = sq(file_of(from), skipped);
        }

        self.board.set(from, None);
        self.board.set(to, Some(moved));

        // A chosen promotion kind is substituted here; a staged promotion
        // (kind still pending with the UI) leaves the pawn on the last rank
        // until `Game` finalizes it.
        if let MoveKind::Promotion(Some(kind)) = mv.kind {
            self.board.set(to, Some(Piece::new(moved.color, kind)));
        }

        self.side_to_move = self.side_to_move.other();

        Undo {
            captured,
            captured_sq,
            castling: prev_castling,
            en_passant: prev_ep,
        }
    }

    pub fn unapply_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;

        if let Some((rf, rt)) = castle_rook_squares(mv, self.side_to_move) {
            let rook = self.board.get(rt).expect("undoing castle without rook");
            self.board.set(rt, None);
            self.board.set(rf, Some(rook));
        }

        let mut piece = self.board.get(mv.to).expect("undoing move with empty target");
        if mv.is_promotion() {
            piece = Piece::new(piece.color, PieceKind::Pawn);
        }
        self.board.set(mv.to, None);
        self.board.set(mv.from, Some(piece));

        if let Some(cs) = undo.captured_sq {
            self.board.set(cs, undo.captured);
        }
    }

    fn update_rights_for_mover(&mut self, moved: Piece, from: u8) {
        match moved.color {
            Color::White => {
                if moved.kind == PieceKind::King {
                    self.castling.wk = false;
                    self.castling.wq = false;
                }
                if moved.kind == PieceKind::Rook {
                    if from == 0 {
                        self.castling.wq = false;
                    }
                    if from == 7 {
                        self.castling.wk = false;
                    }
                }
            }
            Color::Black => {
                if moved.kind == PieceKind::King {
                    self.castling.bk = false;
                    self.castling.bq = false;
                }
                if moved.kind == PieceKind::Rook {
                    if from == 56 {
                        self.castling.bq = false;
                    }
                    if from == 63 {
                        self.castling.bk = false;
                    }
                }
            }
        }
    }

    fn update_rights_for_captured_rook(&mut self, color: Color, on: u8) {
        match color {
            Color::White => {
                if on == 0 {
                    self.castling.wq = false;
                }
                if on == 7 {
                    self.castling.wk = false;
                }
            }
            Color::Black => {
                if on == 56 {
                    self.castling.bq = false;
                }
                if on == 63 {
                    self.castling.bk = false;
                }
            }
        }
    }
}

pub fn pawn_dir(c: Color) -> i8 {
    match c {
        Color::White => 1,
        Color::Black => -1,
    }
}

fn castle_rook_squares(mv: Move, mover: Color) -> Option<(u8, u8)> {
    let rank_base = match mover {
        Color::White => 0,
        Color::Black => 56,
    };
    match mv.kind {
        MoveKind::CastleKingside => Some((rank_base + 7, rank_base + 5)),
        MoveKind::CastleQueenside => Some((rank_base, rank_base + 3)),
        _ => None,
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
