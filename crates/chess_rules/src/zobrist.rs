//! Zobrist-style keys over piece placement only.
//!
//! Repetition counting keys solely on the board layout: side to move,
//! castling rights and the en-passant target are deliberately excluded, so
//! two positions with identical piece placement count as repeats even when
//! their rights differ. The key table is generated at compile time from a
//! fixed seed, so keys are stable across runs and fixtures.

use crate::board::Board;
use crate::types::Piece;

pub struct ZobristKeys {
    /// Indexed by [color][piece_kind][square]
    pieces: [[[u64; 64]; 6]; 2],
}

impl ZobristKeys {
    pub const fn new() -> Self {
        // Simple xorshift64 PRNG, fixed seed.
        const fn xorshift64(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x123456789ABCDEF0u64;
        let mut pieces = [[[0u64; 64]; 6]; 2];
        let mut color = 0;
        while color < 2 {
            let mut kind = 0;
            while kind < 6 {
                let mut sq = 0;
                while sq < 64 {
                    state = xorshift64(state);
                    pieces[color][kind][sq] = state;
                    sq += 1;
                }
                kind += 1;
            }
            color += 1;
        }

        ZobristKeys { pieces }
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: u8) -> u64 {
        self.pieces[piece.color.idx()][piece.kind.idx()][sq as usize]
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

/// Layout key of a whole board, XOR of all per-piece keys.
pub fn board_key(board: &Board) -> u64 {
    let mut key = 0u64;
    for sq in 0..64u8 {
        if let Some(pc) = board.get(sq) {
            key ^= ZOBRIST.piece_key(pc, sq);
        }
    }
    key
}

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
