use std::cmp::Reverse;

use chess_core::Move;

/// Puts promotions first, then captures, keeping generation order within
/// each group. Only the amount of pruning depends on this.
pub fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|m| Reverse((m.is_promotion(), m.is_capture())));
}
