use crate::{
    board::Board,
    moves::{CastlingRights, Move, MoveRecord, Undo},
    rules::{pseudo_legal_moves, square_under_attack},
    types::*,
};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
}

/// The single mutable game position that move filtering and search share.
///
/// Every [`GameState::make_move`] pushes a record; [`GameState::undo_move`]
/// pops it and restores the position exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) history: Vec<MoveRecord>,
}

impl GameState {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        Self::with_board(Board::startpos(), Color::White, CastlingRights::all())
    }

    pub(crate) fn with_board(board: Board, turn: Color, castling: CastlingRights) -> Self {
        GameState {
            board,
            turn,
            castling,
            history: Vec::with_capacity(128),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.board.en_passant_target
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    /// Applied moves, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last().map(|r| &r.mv)
    }

    pub fn pseudo_legal_moves(&self, color: Color) -> Vec<Move> {
        pseudo_legal_moves(&self.board, color)
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        square_under_attack(&self.board, self.board.king_square(color), color.other())
    }

    /// Legal moves for the side to move, in generation order.
    pub fn get_legal_moves(&mut self) -> Vec<Move> {
        let mut out = Vec::with_capacity(64);
        self.legal_moves_into(&mut out);
        out
    }

    /// Fills `out` with the legal moves, reusing its allocation.
    pub fn legal_moves_into(&mut self, out: &mut Vec<Move>) {
        out.clear();
        crate::rules::pseudo_legal_moves_into(&self.board, self.turn, out);

        let mover = self.turn;
        // Filter illegal moves in-place by playing them on the mutable state.
        out.retain(|&mv| {
            self.make_move(mv);
            let illegal = self.is_in_check(mover);
            self.undo_move();
            !illegal
        });
    }

    pub fn has_legal_moves(&mut self) -> bool {
        let pseudo = pseudo_legal_moves(&self.board, self.turn);
        let mover = self.turn;
        pseudo.into_iter().any(|mv| {
            self.make_move(mv);
            let ok = !self.is_in_check(mover);
            self.undo_move();
            ok
        })
    }

    /// Side to move is in check and cannot escape.
    pub fn is_checkmate(&mut self) -> bool {
        self.is_in_check(self.turn) && !self.has_legal_moves()
    }

    /// Side to move is not in check but has no legal move.
    pub fn is_stalemate(&mut self) -> bool {
        !self.is_in_check(self.turn) && !self.has_legal_moves()
    }

    pub fn outcome(&mut self) -> Option<Outcome> {
        if self.has_legal_moves() {
            None
        } else if self.is_in_check(self.turn) {
            Some(Outcome::Checkmate {
                winner: self.turn.other(),
            })
        } else {
            Some(Outcome::Stalemate)
        }
    }

    /// Looks up the legal move with these endpoints.
    ///
    /// With `promotion` unset, a pawn reaching the last rank matches four
    /// moves and the lookup yields `None`; the caller has to pick a piece.
    pub fn find_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Option<Move> {
        let mut found = self
            .get_legal_moves()
            .into_iter()
            .filter(|m| m.from == from && m.to == to)
            .filter(|m| promotion.is_none() || m.promotion == promotion);
        let first = found.next()?;
        match found.next() {
            Some(_) => None,
            None => Some(first),
        }
    }

    /// Applies `mv`, which must be pseudo-legal for the side to move.
    ///
    /// # Panics
    ///
    /// If `mv.from` is empty; every applied move must leave a history record.
    pub fn make_move(&mut self, mv: Move) {
        let board = &mut self.board;
        let mut mv = mv;

        // Re-read the board so the record holds the pieces exactly as they stand.
        let Some(mover) = board.piece_at(mv.from) else {
            panic!("make_move: no piece on {}", mv.from);
        };
        mv.piece = mover;

        let undo = Undo {
            en_passant: board.en_passant_target,
            castling: self.castling,
            had_moved: mover.has_moved,
        };
        board.en_passant_target = None;

        if mv.is_en_passant {
            mv.captured = board.take(mv.en_passant_square());
        } else {
            mv.captured = board.piece_at(mv.to);
        }

        board.move_piece(mv.from, mv.to);
        board.set_has_moved(mv.to, true);

        if mv.is_castling {
            let (rook_from, rook_to) = mv.castling_rook();
            board.move_piece(rook_from, rook_to);
            board.set_has_moved(rook_to, true);
        }

        if let Some(kind) = mv.promotion {
            board.set_piece(
                mv.to,
                Some(Piece {
                    color: mover.color,
                    kind,
                    has_moved: true,
                }),
            );
        }

        if mover.kind == PieceKind::Pawn && (mv.to.row - mv.from.row).abs() == 2 {
            board.en_passant_target = Some(Square {
                row: (mv.from.row + mv.to.row) / 2,
                col: mv.from.col,
            });
        }

        match mover.kind {
            PieceKind::King => {
                let side = self.castling.get_mut(mover.color);
                side.kingside = false;
                side.queenside = false;
            }
            PieceKind::Rook => self.castling.clear_rook_square(mover.color, mv.from),
            _ => {}
        }
        if let Some(cap) = mv.captured
            && cap.kind == PieceKind::Rook
        {
            self.castling.clear_rook_square(cap.color, mv.to);
        }

        self.history.push(MoveRecord { mv, undo });
        self.turn = self.turn.other();
    }

    /// Takes back the most recent move. Returns it, or `None` if there is
    /// nothing to undo.
    pub fn undo_move(&mut self) -> Option<Move> {
        let MoveRecord { mv, undo } = self.history.pop()?;
        let board = &mut self.board;

        self.turn = self.turn.other();
        self.castling = undo.castling;
        board.en_passant_target = undo.en_passant;

        if mv.is_castling {
            let (rook_from, rook_to) = mv.castling_rook();
            board.move_piece(rook_to, rook_from);
            board.set_has_moved(rook_from, false);
        }

        // The recorded mover replaces a promoted piece and restores the king cache.
        board.set_piece(
            mv.from,
            Some(Piece {
                has_moved: undo.had_moved,
                ..mv.piece
            }),
        );
        if mv.is_en_passant {
            board.set_piece(mv.to, None);
            board.set_piece(mv.en_passant_square(), mv.captured);
        } else {
            board.set_piece(mv.to, mv.captured);
        }

        Some(mv)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
