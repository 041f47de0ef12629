//! Material-only evaluation with flat mate scores.

use chess_core::{Color, GameState, PieceKind};

/// Score returned when the side to move is checkmated, signed toward the winner.
pub const MATE_SCORE: i32 = 9999;

/// Material values in pawns.
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        // King safety shows up only through the mate scores
        PieceKind::King => 0,
    }
}

/// Evaluates the position from White's perspective.
///
/// A side to move with no legal move scores as checkmate (-9999 when White
/// is mated, +9999 when Black is) or stalemate (0). Anything else is the
/// material balance.
pub fn evaluate(state: &mut GameState) -> i32 {
    if !state.has_legal_moves() {
        return terminal_score(state);
    }
    material(state)
}

/// Score of a position whose side to move has no legal move.
pub fn terminal_score(state: &GameState) -> i32 {
    let turn = state.turn();
    if !state.is_in_check(turn) {
        return 0;
    }
    match turn {
        Color::White => -MATE_SCORE,
        Color::Black => MATE_SCORE,
    }
}

/// White material minus Black material.
pub fn material(state: &GameState) -> i32 {
    state
        .board()
        .pieces()
        .map(|(_, pc)| {
            let v = piece_value(pc.kind);
            if pc.color == Color::White { v } else { -v }
        })
        .sum()
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
