//! Two-player chess rules core.
//!
//! Board state, pseudo-legal and legal move generation, check and checkmate
//! detection, threefold-repetition draws, and move application including
//! castling, en passant and promotion. Presentation is an external
//! collaborator: [`game::Game`] exposes pure data queries and receives the
//! promotion choice through an explicit resolve/cancel pair.

pub mod attacks;
pub mod board;
pub mod fixture;
pub mod game;
pub mod movegen;
pub mod position;
pub mod status;
pub mod types;
pub mod zobrist;

pub use attacks::{is_attacked, is_in_check};
pub use board::Board;
pub use fixture::Fixture;
pub use game::{Game, Phase, Status};
pub use movegen::{all_legal_moves, legal_moves, pseudo_legal_moves};
pub use position::{CastlingRights, Position, Undo};
pub use status::{GameResult, is_check, is_checkmate};
pub use types::*;
pub use zobrist::board_key;
