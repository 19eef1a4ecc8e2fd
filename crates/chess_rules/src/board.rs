use crate::types::*;

/// Plain 8x8 piece container. Knows occupancy and bounds, nothing about
/// legality. Cloning is a flat 64-slot copy, cheap enough for the legality
/// simulation and for history snapshots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();

        // Pawns
        for f in 0..8 {
            b.squares[8 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            b.squares[48 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        }
        // Back ranks
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            b.squares[f] = Some(Piece::new(Color::White, kind));
            b.squares[56 + f] = Some(Piece::new(Color::Black, kind));
        }
        b
    }

    pub fn get(&self, sq: u8) -> Option<Piece> {
        self.squares[sq as usize]
    }

    pub fn set(&mut self, sq: u8, pc: Option<Piece>) {
        self.squares[sq as usize] = pc;
    }

    pub fn king_sq(&self, c: Color) -> Option<u8> {
        for i in 0..64 {
            if let Some(pc) = self.squares[i]
                && pc.color == c
                && pc.kind == PieceKind::King
            {
                return Some(i as u8);
            }
        }
        None
    }

    /// Encode as 8 text rows, rank 8 first: two characters per cell (color
    /// letter + kind letter) or `..` for empty, cells separated by spaces.
    pub fn encode(&self) -> String {
        let mut out = String::with_capacity(64 * 3);
        for rank in (0..8).rev() {
            for file in 0..8 {
                let idx = (rank * 8 + file) as usize;
                match self.squares[idx] {
                    Some(pc) => {
                        out.push(pc.color.letter());
                        out.push(pc.kind.letter());
                    }
                    None => out.push_str(".."),
                }
                if file < 7 {
                    out.push(' ');
                }
            }
            if rank > 0 {
                out.push('\n');
            }
        }
        out
    }

    /// Parse the `encode` format. Fixture input is trusted: malformed text is
    /// a broken test, so this asserts rather than returning errors.
    pub fn decode(text: &str) -> Self {
        let rows: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        assert!(rows.len() == 8, "board text must have 8 rows");

        let mut b = Board::empty();
        for (row_idx, row) in rows.iter().enumerate() {
            let rank = 7 - row_idx as u8; // first row is rank 8
            let cells: Vec<&str> = row.split_whitespace().collect();
            assert!(cells.len() == 8, "board row must have 8 cells: {row}");
            for (file, cell) in cells.iter().enumerate() {
                assert!(cell.len() == 2, "bad cell {cell:?}");
                if *cell == ".." {
                    continue;
                }
                let mut chars = cell.chars();
                let color = match chars.next() {
                    Some('w') => Color::White,
                    Some('b') => Color::Black,
                    other => panic!("bad color letter {other:?} in cell {cell:?}"),
                };
                let kind_ch = chars.next().unwrap();
                let kind = PieceKind::from_letter(kind_ch)
                    .unwrap_or_else(|| panic!("bad kind letter {kind_ch:?} in cell {cell:?}"));
                b.squares[(rank * 8 + file as u8) as usize] = Some(Piece::new(color, kind));
            }
        }
        b
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
