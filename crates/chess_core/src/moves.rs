use std::fmt;

use crate::types::*;

/// Castling eligibility for one color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SideRights {
    pub kingside: bool,
    pub queenside: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub white: SideRights,
    pub black: SideRights,
}

impl CastlingRights {
    pub fn all() -> Self {
        let both = SideRights {
            kingside: true,
            queenside: true,
        };
        Self {
            white: both,
            black: both,
        }
    }

    pub fn none() -> Self {
        let neither = SideRights {
            kingside: false,
            queenside: false,
        };
        Self {
            white: neither,
            black: neither,
        }
    }

    pub fn get(&self, c: Color) -> SideRights {
        match c {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    pub fn get_mut(&mut self, c: Color) -> &mut SideRights {
        match c {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Drops the right tied to a rook starting on `sq`, if any.
    pub fn clear_rook_square(&mut self, c: Color, sq: Square) {
        if sq.row != c.home_row() {
            return;
        }
        let side = self.get_mut(c);
        match sq.col {
            0 => side.queenside = false,
            7 => side.kingside = false,
            _ => {}
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

/// A single ply as produced by the move generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// The mover as it stood when the move was generated.
    pub piece: Piece,
    /// For en passant this is the pawn beside the mover, not on `to`.
    pub captured: Option<Piece>,
    pub promotion: Option<PieceKind>,
    pub is_castling: bool,
    pub is_en_passant: bool,
}

impl Move {
    pub fn new(from: Square, to: Square, piece: Piece) -> Self {
        Self {
            from,
            to,
            piece,
            captured: None,
            promotion: None,
            is_castling: false,
            is_en_passant: false,
        }
    }

    pub fn capture(from: Square, to: Square, piece: Piece, captured: Piece) -> Self {
        Self {
            captured: Some(captured),
            ..Self::new(from, to, piece)
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// Square of the pawn removed by an en-passant capture.
    pub fn en_passant_square(&self) -> Square {
        Square {
            row: self.from.row,
            col: self.to.col,
        }
    }

    /// Rook (from, to) for a castling move, decided by which way the king went.
    pub fn castling_rook(&self) -> (Square, Square) {
        let row = self.from.row;
        if self.to.col > self.from.col {
            (Square { row, col: 7 }, Square { row, col: 5 })
        } else {
            (Square { row, col: 0 }, Square { row, col: 3 })
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(p) = self.promotion {
            write!(f, "={}", p.letter())?;
        }
        Ok(())
    }
}

/// Board-global state captured when a move is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Undo {
    pub en_passant: Option<Square>,
    pub castling: CastlingRights,
    pub had_moved: bool,
}

/// An applied move plus the snapshot needed to take it back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    pub undo: Undo,
}
