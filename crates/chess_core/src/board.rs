use crate::types::*;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 8x8 grid plus the cached king squares and the en-passant target.
///
/// All writes go through [`Board::set_piece`], which is the only place the
/// king cache is updated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
    kings: [Square; 2],
    /// Square a pawn may capture onto en passant; valid for one ply.
    pub en_passant_target: Option<Square>,
}

impl Board {
    /// A board with no pieces. Callers must place both kings before the board
    /// is used for move generation.
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            kings: [
                Square {
                    row: Color::White.home_row(),
                    col: 4,
                },
                Square {
                    row: Color::Black.home_row(),
                    col: 4,
                },
            ],
            en_passant_target: None,
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();
        for color in [Color::White, Color::Black] {
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                b.set_piece(
                    Square {
                        row: color.home_row(),
                        col: col as i8,
                    },
                    Some(Piece::new(color, kind)),
                );
                b.set_piece(
                    Square {
                        row: color.pawn_row(),
                        col: col as i8,
                    },
                    Some(Piece::new(color, PieceKind::Pawn)),
                );
            }
        }
        b
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.row as usize][sq.col as usize]
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Writes a square. Placing a king moves that color's cached king square.
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        if let Some(p) = pc
            && p.kind == PieceKind::King
        {
            self.kings[p.color.idx()] = sq;
        }
        self.grid[sq.row as usize][sq.col as usize] = pc;
    }

    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        let pc = self.piece_at(sq);
        self.set_piece(sq, None);
        pc
    }

    /// Moves whatever stands on `from` to `to`, overwriting `to`.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        let pc = self.take(from);
        self.set_piece(to, pc);
    }

    pub fn set_has_moved(&mut self, sq: Square, has_moved: bool) {
        if let Some(p) = self.grid[sq.row as usize][sq.col as usize].as_mut() {
            p.has_moved = has_moved;
        }
    }

    pub fn king_square(&self, c: Color) -> Square {
        debug_assert_eq!(
            self.piece_at(self.kings[c.idx()]).map(|p| (p.color, p.kind)),
            Some((c, PieceKind::King)),
            "king cache out of sync with board"
        );
        self.kings[c.idx()]
    }

    /// Occupied squares with their pieces, rank-major from row 0.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
