//! Pseudo-legal move generation and the square-attack test.
//!
//! Moves are produced rank-major from row 0, file-minor, and within a piece
//! in the order of its direction table. Search and tests rely on that order
//! being stable.

use crate::{board::Board, moves::Move, types::*};

const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const QUEEN_DIRS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];
const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// All pseudo-legal moves for `color`, freshly allocated.
pub fn pseudo_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    pseudo_legal_moves_into(board, color, &mut out);
    out
}

/// Appends every pseudo-legal move for `color` to `out`.
pub fn pseudo_legal_moves_into(board: &Board, color: Color, out: &mut Vec<Move>) {
    for (from, pc) in board.pieces() {
        if pc.color == color {
            piece_moves(board, from, pc, out);
        }
    }
}

/// Pseudo-legal moves of the single piece `pc` standing on `from`.
pub fn piece_moves(board: &Board, from: Square, pc: Piece, out: &mut Vec<Move>) {
    match pc.kind {
        PieceKind::Pawn => gen_pawn(board, from, pc, out),
        PieceKind::Knight => gen_steps(board, from, pc, &KNIGHT_DELTAS, out),
        PieceKind::Bishop => gen_slider(board, from, pc, &BISHOP_DIRS, out),
        PieceKind::Rook => gen_slider(board, from, pc, &ROOK_DIRS, out),
        PieceKind::Queen => gen_slider(board, from, pc, &QUEEN_DIRS, out),
        PieceKind::King => {
            gen_steps(board, from, pc, &KING_DELTAS, out);
            gen_castle(board, from, pc, out);
        }
    }
}

fn push_pawn_move(mv: Move, promo_row: i8, out: &mut Vec<Move>) {
    if mv.to.row == promo_row {
        for kind in PieceKind::PROMOTIONS {
            out.push(Move {
                promotion: Some(kind),
                ..mv
            });
        }
    } else {
        out.push(mv);
    }
}

fn gen_pawn(board: &Board, from: Square, pc: Piece, out: &mut Vec<Move>) {
    let dir = pc.color.forward();
    let promo_row = pc.color.promotion_row();

    // forward 1
    if let Some(to) = from.offset(dir, 0)
        && board.is_empty(to)
    {
        push_pawn_move(Move::new(from, to, pc), promo_row, out);

        // forward 2 from start
        if from.row == pc.color.pawn_row()
            && let Some(to2) = from.offset(2 * dir, 0)
            && board.is_empty(to2)
        {
            out.push(Move::new(from, to2, pc));
        }
    }

    // captures + en-passant
    for dc in [-1, 1] {
        let Some(to) = from.offset(dir, dc) else {
            continue;
        };
        match board.piece_at(to) {
            Some(target) if target.color != pc.color => {
                push_pawn_move(Move::capture(from, to, pc, target), promo_row, out);
            }
            Some(_) => {}
            None if board.en_passant_target == Some(to) => {
                let mut mv = Move::new(from, to, pc);
                if let Some(victim) = board.piece_at(mv.en_passant_square())
                    && victim.color != pc.color
                    && victim.kind == PieceKind::Pawn
                {
                    mv.captured = Some(victim);
                    mv.is_en_passant = true;
                    out.push(mv);
                }
            }
            None => {}
        }
    }
}

fn gen_steps(board: &Board, from: Square, pc: Piece, deltas: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in deltas {
        if let Some(to) = from.offset(dr, dc) {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to, pc)),
                Some(target) if target.color != pc.color => {
                    out.push(Move::capture(from, to, pc, target))
                }
                _ => {}
            }
        }
    }
}

fn gen_slider(board: &Board, from: Square, pc: Piece, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    for &(dr, dc) in dirs {
        let mut cur = from.offset(dr, dc);
        while let Some(to) = cur {
            match board.piece_at(to) {
                None => out.push(Move::new(from, to, pc)),
                Some(target) if target.color != pc.color => {
                    out.push(Move::capture(from, to, pc, target));
                    break;
                }
                _ => break,
            }
            cur = to.offset(dr, dc);
        }
    }
}

fn gen_castle(board: &Board, from: Square, king: Piece, out: &mut Vec<Move>) {
    let home = king.color.home_row();
    if king.has_moved || from != (Square { row: home, col: 4 }) {
        return;
    }
    let enemy = king.color.other();
    let rook_ready = |col: i8| {
        matches!(
            board.piece_at(Square { row: home, col }),
            Some(p) if p.kind == PieceKind::Rook && p.color == king.color && !p.has_moved
        )
    };
    let empty = |cols: &[i8]| {
        cols.iter()
            .all(|&col| board.is_empty(Square { row: home, col }))
    };
    let safe = |cols: &[i8]| {
        cols.iter()
            .all(|&col| !square_under_attack(board, Square { row: home, col }, enemy))
    };

    // King side: rook h-file, f and g empty, e/f/g not attacked
    if rook_ready(7) && empty(&[5, 6]) && safe(&[4, 5, 6]) {
        let mut mv = Move::new(from, Square { row: home, col: 6 }, king);
        mv.is_castling = true;
        out.push(mv);
    }
    // Queen side: rook a-file, b/c/d empty, e/d/c not attacked
    if rook_ready(0) && empty(&[1, 2, 3]) && safe(&[4, 3, 2]) {
        let mut mv = Move::new(from, Square { row: home, col: 2 }, king);
        mv.is_castling = true;
        out.push(mv);
    }
}

/// True if a piece of color `by` could capture on `target`.
///
/// Scans outward from the target rather than generating the attacker's moves,
/// which also keeps castling generation from recursing.
pub fn square_under_attack(board: &Board, target: Square, by: Color) -> bool {
    let is = |sq: Option<Square>, kinds: &[PieceKind]| match sq.and_then(|s| board.piece_at(s)) {
        Some(pc) => pc.color == by && kinds.contains(&pc.kind),
        None => false,
    };

    // A pawn of `by` attacks from one row behind the target, relative to its direction
    let back = -by.forward();
    if is(target.offset(back, -1), &[PieceKind::Pawn]) || is(target.offset(back, 1), &[PieceKind::Pawn]) {
        return true;
    }

    if KNIGHT_DELTAS
        .iter()
        .any(|&(dr, dc)| is(target.offset(dr, dc), &[PieceKind::Knight]))
    {
        return true;
    }

    if KING_DELTAS
        .iter()
        .any(|&(dr, dc)| is(target.offset(dr, dc), &[PieceKind::King]))
    {
        return true;
    }

    let ray_hits = |dirs: &[(i8, i8)], kinds: &[PieceKind]| {
        dirs.iter().any(|&(dr, dc)| {
            let mut cur = target.offset(dr, dc);
            while let Some(sq) = cur {
                if let Some(pc) = board.piece_at(sq) {
                    return pc.color == by && kinds.contains(&pc.kind);
                }
                cur = sq.offset(dr, dc);
            }
            false
        })
    };

    ray_hits(&BISHOP_DIRS, &[PieceKind::Bishop, PieceKind::Queen])
        || ray_hits(&ROOK_DIRS, &[PieceKind::Rook, PieceKind::Queen])
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
