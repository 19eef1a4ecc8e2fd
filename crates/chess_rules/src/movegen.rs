use crate::attacks::{is_attacked, is_in_check};
use crate::position::{Position, pawn_dir};
use crate::types::*;

/// Legal moves for the piece on `from`: pseudo-legal candidates filtered by
/// playing each one on a clone and rejecting any that leave the mover's own
/// king attacked. The live position is never touched.
pub fn legal_moves(pos: &Position, from: u8) -> Vec<Move> {
    let mover = match pos.board.get(from) {
        Some(p) if p.color == pos.side_to_move => p.color,
        _ => return Vec::new(),
    };

    let mut out = pseudo_legal_moves(pos, from, true);
    let mut sim = pos.clone();
    out.retain(|&mv| {
        // A staged promotion has no kind yet; the filter only cares about the
        // king, so simulate it as a queen.
        let sim_mv = match mv.kind {
            MoveKind::Promotion(None) => {
                Move::new(mv.from, mv.to, MoveKind::Promotion(Some(PieceKind::Queen)))
            }
            _ => mv,
        };
        let undo = sim.apply_move(sim_mv);
        let safe = !is_in_check(&sim, mover);
        sim.unapply_move(sim_mv, undo);
        safe
    });
    out
}

/// Every legal move for the side to move. Drives checkmate classification.
pub fn all_legal_moves(pos: &Position) -> Vec<Move> {
    let mut out = Vec::new();
    for from in 0..64u8 {
        if let Some(pc) = pos.board.get(from)
            && pc.color == pos.side_to_move
        {
            out.extend(legal_moves(pos, from));
        }
    }
    out
}

/// Pseudo-legal moves for the piece on `from`, or an empty set for an empty
/// square. Castling candidates are produced only when `check_castling` is
/// set; the check detector always asks with it off, which is what keeps
/// attack scanning and castling generation from recursing into each other.
pub fn pseudo_legal_moves(pos: &Position, from: u8, check_castling: bool) -> Vec<Move> {
    let pc = match pos.board.get(from) {
        Some(p) => p,
        None => return Vec::new(),
    };
    let mut out = Vec::new();
    match pc.kind {
        PieceKind::Pawn => gen_pawn(pos, from, pc.color, &mut out),
        PieceKind::Knight => gen_steps(pos, from, pc.color, &KNIGHT_STEPS, &mut out),
        PieceKind::Bishop => gen_slider(pos, from, pc.color, &DIAG_DIRS, &mut out),
        PieceKind::Rook => gen_slider(pos, from, pc.color, &ORTHO_DIRS, &mut out),
        PieceKind::Queen => {
            gen_slider(pos, from, pc.color, &DIAG_DIRS, &mut out);
            gen_slider(pos, from, pc.color, &ORTHO_DIRS, &mut out);
        }
        PieceKind::King => {
            gen_steps(pos, from, pc.color, &KING_STEPS, &mut out);
            if check_castling {
                gen_castle(pos, from, pc.color, &mut out);
            }
        }
    }
    out
}

const KNIGHT_STEPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const KING_STEPS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

const DIAG_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHO_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

fn push_or_capture(pos: &Position, from: u8, to: u8, c: Color, out: &mut Vec<Move>) {
    match pos.board.get(to) {
        None => out.push(Move::new(from, to, MoveKind::Quiet)),
        Some(tpc) if tpc.color != c => out.push(Move::new(from, to, MoveKind::Capture)),
        _ => {}
    }
}

fn gen_steps(pos: &Position, from: u8, c: Color, steps: &[(i8, i8)], out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    for &(df, dr) in steps {
        if let Some(to) = sq(f + df, r + dr) {
            push_or_capture(pos, from, to, c, out);
        }
    }
}

fn gen_slider(pos: &Position, from: u8, c: Color, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for &(df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match pos.board.get(to) {
                None => out.push(Move::new(from, to, MoveKind::Quiet)),
                Some(tpc) if tpc.color != c => {
                    out.push(Move::new(from, to, MoveKind::Capture));
                    break;
                }
                _ => break,
            }
            f += df;
            r += dr;
        }
    }
}

fn gen_pawn(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    let dir = pawn_dir(c);
    let start_rank: i8 = match c {
        Color::White => 1,
        Color::Black => 6,
    };
    let promo_rank: i8 = match c {
        Color::White => 7,
        Color::Black => 0,
    };

    // Forward pushes. The promotion kind is left open for the UI to choose.
    if let Some(to) = sq(f, r + dir)
        && pos.board.get(to).is_none()
    {
        if rank_of(to) == promo_rank {
            out.push(Move::new(from, to, MoveKind::Promotion(None)));
        } else {
            out.push(Move::new(from, to, MoveKind::Quiet));
            if r == start_rank
                && let Some(to2) = sq(f, r + 2 * dir)
                && pos.board.get(to2).is_none()
            {
                out.push(Move::new(from, to2, MoveKind::DoublePush));
            }
        }
    }

    // Diagonal captures and en passant.
    for df in [-1, 1] {
        let Some(to) = sq(f + df, r + dir) else {
            continue;
        };
        if let Some(tpc) = pos.board.get(to) {
            if tpc.color != c {
                if rank_of(to) == promo_rank {
                    out.push(Move::new(from, to, MoveKind::Promotion(None)));
                } else {
                    out.push(Move::new(from, to, MoveKind::Capture));
                }
            }
        } else if pos.en_passant == Some(to) {
            // Only valid while the double-pushed enemy pawn still sits on
            // the square behind the target.
            let victim = sq(file_of(to), rank_of(to) - dir).and_then(|s| pos.board.get(s));
            if victim.is_some_and(|v| v.color != c && v.kind == PieceKind::Pawn) {
                out.push(Move::new(from, to, MoveKind::EnPassant));
            }
        }
    }
}

fn gen_castle(pos: &Position, from: u8, c: Color, out: &mut Vec<Move>) {
    let (king_home, kingside_right, queenside_right) = match c {
        Color::White => (4u8, pos.castling.wk, pos.castling.wq),
        Color::Black => (60u8, pos.castling.bk, pos.castling.bq),
    };
    if from != king_home {
        return;
    }
    // No castling out of check.
    if is_in_check(pos, c) {
        return;
    }

    let base = king_home - 4; // a-file square of the back rank
    let enemy = c.other();

    // King side: f and g empty, king safe on both transit squares.
    if kingside_right
        && pos.board.get(base + 5).is_none()
        && pos.board.get(base + 6).is_none()
        && king_path_safe(pos, from, &[base + 5, base + 6], enemy)
    {
        out.push(Move::new(from, base + 6, MoveKind::CastleKingside));
    }
    // Queen side: b, c and d empty; the king crosses d and lands on c.
    if queenside_right
        && pos.board.get(base + 1).is_none()
        && pos.board.get(base + 2).is_none()
        && pos.board.get(base + 3).is_none()
        && king_path_safe(pos, from, &[base + 3, base + 2], enemy)
    {
        out.push(Move::new(from, base + 2, MoveKind::CastleQueenside));
    }
}

/// Walks the king along `path`, square by square, asking the check detector
/// at each stop. Probing on a clone with the king physically placed keeps the
/// attack scan exact (a pawn's forward push is not an attack, but its
/// capture of an occupied square is).
fn king_path_safe(pos: &Position, from: u8, path: &[u8], enemy: Color) -> bool {
    let mut probe = pos.clone();
    let king = probe.board.get(from).expect("castling without a king");
    probe.board.set(from, None);
    for &s in path {
        probe.board.set(s, Some(king));
        if is_attacked(&probe, s, enemy) {
            return false;
        }
        probe.board.set(s, None);
    }
    true
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
