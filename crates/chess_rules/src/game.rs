//! Turn sequencing and selection handling for a local two-player game.
//!
//! `Game` owns the single mutable `Position`; every committed move appends an
//! immutable snapshot to the history, which drives both undo and repetition
//! counting. The presentation layer feeds square selections in and polls the
//! query methods after each call; it never mutates state directly.

use crate::movegen::legal_moves;
use crate::position::{Position, Undo};
use crate::status::{GameResult, is_check, is_checkmate};
use crate::types::*;
use crate::zobrist::board_key;

/// Where the controller currently is. Derived from the owned state rather
/// than stored, so it can never drift out of sync.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingSelection,
    PieceSelected,
    AwaitingPromotion,
    GameOver,
}

/// Snapshot of everything the UI shows in its turn label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Status {
    pub side_to_move: Color,
    pub in_check: bool,
    pub result: GameResult,
}

#[derive(Clone, Debug)]
struct HistoryEntry {
    position: Position,
    layout_key: u64,
    captured: Option<Piece>,
    moved: Option<(u8, u8)>,
}

/// A committed promotion move whose replacement kind the UI has not chosen
/// yet. The pawn already stands on the last rank; history and game-end
/// evaluation wait until the choice arrives (or the move is cancelled).
#[derive(Clone, Copy, Debug)]
struct PendingPromotion {
    mv: Move,
    undo: Undo,
    color: Color,
}

#[derive(Clone, Debug)]
pub struct Game {
    position: Position,
    history: Vec<HistoryEntry>,
    selected: Option<u8>,
    targets: Vec<Move>,
    pending: Option<PendingPromotion>,
    result: GameResult,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        let position = Position::startpos();
        let layout_key = board_key(&position.board);
        Game {
            history: vec![HistoryEntry {
                position: position.clone(),
                layout_key,
                captured: None,
                moved: None,
            }],
            position,
            selected: None,
            targets: Vec::new(),
            pending: None,
            result: GameResult::InProgress,
        }
    }

    /// Start a game from an arbitrary position (fixtures, tests). The given
    /// position becomes the root history snapshot.
    pub fn from_position(position: Position) -> Self {
        let layout_key = board_key(&position.board);
        Game {
            history: vec![HistoryEntry {
                position: position.clone(),
                layout_key,
                captured: None,
                moved: None,
            }],
            position,
            selected: None,
            targets: Vec::new(),
            pending: None,
            result: GameResult::InProgress,
        }
    }

    // ---------------------------------------------------------------------
    // Inbound operations
    // ---------------------------------------------------------------------

    /// Handle a square selection. Row 0 is White's back rank. Misclicks
    /// (empty square, opponent piece, illegal destination) are never errors:
    /// they re-select or clear the selection.
    pub fn select_square(&mut self, row: u8, col: u8) {
        if self.result.is_over() || self.pending.is_some() {
            return;
        }
        let Some(s) = sq(col as i8, row as i8) else {
            return;
        };

        if self.selected.is_some()
            && let Some(&mv) = self.targets.iter().find(|m| m.to == s)
        {
            self.commit(mv);
            return;
        }

        match self.position.board.get(s) {
            Some(pc) if pc.color == self.position.side_to_move => {
                self.selected = Some(s);
                self.targets = legal_moves(&self.position, s);
            }
            _ => self.clear_selection(),
        }
    }

    /// Finalize a staged promotion with the chosen kind. A no-op when no
    /// promotion is outstanding; choosing a pawn or king is a UI bug.
    pub fn resolve_promotion(&mut self, kind: PieceKind) {
        let Some(p) = self.pending.take() else {
            return;
        };
        assert!(
            matches!(
                kind,
                PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
            ),
            "promotion must choose knight, bishop, rook or queen"
        );
        self.position.board.set(p.mv.to, Some(Piece::new(p.color, kind)));
        self.finalize(p.mv, p.undo.captured);
    }

    /// Abandon a staged promotion: the move is rolled back as if it had
    /// never been played, not defaulted to a queen.
    pub fn cancel_promotion(&mut self) {
        if let Some(p) = self.pending.take() {
            self.position.unapply_move(p.mv, p.undo);
        }
    }

    pub fn resign(&mut self) {
        if self.result.is_over() || self.pending.is_some() {
            return;
        }
        self.result = GameResult::Resigned(self.position.side_to_move.other());
    }

    pub fn reset(&mut self) {
        *self = Game::new();
    }

    /// Restore the snapshot before the last committed move. No-op when no
    /// move has been committed or while a promotion choice is outstanding.
    pub fn undo(&mut self) {
        if self.pending.is_some() || self.history.len() <= 1 {
            return;
        }
        self.history.pop();
        self.position = self
            .history
            .last()
            .expect("history always holds the root snapshot")
            .position
            .clone();
        self.result = GameResult::InProgress;
        self.clear_selection();
    }

    // ---------------------------------------------------------------------
    // Outbound queries
    // ---------------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        if self.result.is_over() {
            Phase::GameOver
        } else if self.pending.is_some() {
            Phase::AwaitingPromotion
        } else if self.selected.is_some() {
            Phase::PieceSelected
        } else {
            Phase::AwaitingSelection
        }
    }

    pub fn status(&self) -> Status {
        Status {
            side_to_move: self.position.side_to_move,
            in_check: is_check(&self.position),
            result: self.result,
        }
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The full grid, `grid[row][col]`, row 0 = White's back rank.
    pub fn board_grid(&self) -> [[Option<Piece>; 8]; 8] {
        let mut grid = [[None; 8]; 8];
        for row in 0..8u8 {
            for col in 0..8u8 {
                grid[row as usize][col as usize] = self.position.board.get(row * 8 + col);
            }
        }
        grid
    }

    pub fn selection(&self) -> Option<(u8, u8)> {
        self.selected.map(to_row_col)
    }

    /// Destinations of the currently selected piece.
    pub fn legal_destinations(&self) -> Vec<(u8, u8)> {
        self.targets.iter().map(|m| to_row_col(m.to)).collect()
    }

    /// `Some(color)` while the core is waiting for `color`'s promotion
    /// choice. This is the request the UI reacts to with its picker.
    pub fn pending_promotion(&self) -> Option<Color> {
        self.pending.as_ref().map(|p| p.color)
    }

    /// The last committed move as (from, to) in (row, col) form.
    pub fn last_move(&self) -> Option<((u8, u8), (u8, u8))> {
        self.history
            .last()
            .and_then(|e| e.moved)
            .map(|(f, t)| (to_row_col(f), to_row_col(t)))
    }

    /// Opposing pieces `color` has captured so far, in capture order.
    pub fn captured_by(&self, color: Color) -> Vec<Piece> {
        self.history
            .iter()
            .filter_map(|e| e.captured)
            .filter(|pc| pc.color != color)
            .collect()
    }

    // ---------------------------------------------------------------------

    fn commit(&mut self, mv: Move) {
        let mover = self.position.side_to_move;
        self.clear_selection();

        let undo = self.position.apply_move(mv);
        if let MoveKind::Promotion(None) = mv.kind {
            // Board is partially applied until the UI answers; nothing else
            // may run meanwhile.
            self.pending = Some(PendingPromotion {
                mv,
                undo,
                color: mover,
            });
            return;
        }
        self.finalize(mv, undo.captured);
    }

    fn finalize(&mut self, mv: Move, captured: Option<Piece>) {
        self.history.push(HistoryEntry {
            position: self.position.clone(),
            layout_key: board_key(&self.position.board),
            captured,
            moved: Some((mv.from, mv.to)),
        });
        self.evaluate();
    }

    fn evaluate(&mut self) {
        let mover = self.position.side_to_move.other();
        if is_checkmate(&self.position) {
            self.result = GameResult::Checkmate(mover);
        } else if self.repetition_count() >= 3 {
            self.result = GameResult::DrawByRepetition;
        }
    }

    /// How often the current piece layout has occurred, counting the current
    /// occurrence. Keys ignore side to move, rights and en passant.
    fn repetition_count(&self) -> usize {
        let key = board_key(&self.position.board);
        self.history.iter().filter(|e| e.layout_key == key).count()
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.targets.clear();
    }
}

fn to_row_col(sq: u8) -> (u8, u8) {
    (sq / 8, sq % 8)
}
