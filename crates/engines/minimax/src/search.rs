//! Fixed-depth minimax with alpha-beta pruning.
//!
//! The search plays and takes back moves on the caller's `GameState`; no
//! position is ever copied.

use chess_core::{Color, GameState, Move};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::eval::{material, terminal_score};
use crate::ordering::order_moves;

/// Search settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies to look ahead. Depth 0 still expands the root.
    pub depth: u8,
    /// Try promotions and captures first below the root.
    pub order_moves: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            order_moves: true,
        }
    }
}

/// What a root search produced.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best move and its White-positive score (None if no legal moves)
    pub best_move: Option<(Move, i32)>,
    /// Positions visited, root excluded
    pub nodes: u64,
}

/// Picks the best move for the side to move, or `None` if it has none.
pub fn choose_move(state: &mut GameState, depth: u8) -> Option<Move> {
    let config = SearchConfig {
        depth,
        ..SearchConfig::default()
    };
    pick_best_move(state, &config).best_move.map(|(mv, _)| mv)
}

/// Scores every root move with a full window and keeps the best for the side
/// to move. White maximizes, Black minimizes; on equal scores the earlier
/// move in generation order is kept.
pub fn pick_best_move(state: &mut GameState, config: &SearchConfig) -> SearchOutcome {
    let moves = state.get_legal_moves();
    let mut nodes = 0u64;

    let maximizing = state.turn() == Color::White;
    let child_depth = config.depth.saturating_sub(1);
    let mut best: Option<(Move, i32)> = None;

    for mv in moves {
        state.make_move(mv);
        nodes += 1;
        let score = minimax(
            state,
            child_depth,
            i32::MIN,
            i32::MAX,
            !maximizing,
            config.order_moves,
            &mut nodes,
        );
        state.undo_move();
        trace!(%mv, score, "root move scored");

        let improves = match best {
            None => true,
            Some((_, b)) if maximizing => score > b,
            Some((_, b)) => score < b,
        };
        if improves {
            best = Some((mv, score));
        }
    }

    match best {
        Some((mv, score)) => debug!(depth = config.depth, nodes, score, best = %mv, "search complete"),
        None => debug!(depth = config.depth, "no legal moves at root"),
    }

    SearchOutcome {
        best_move: best,
        nodes,
    }
}

/// Recursive minimax with alpha-beta pruning. Scores are White-positive.
fn minimax(
    state: &mut GameState,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    ordered: bool,
    nodes: &mut u64,
) -> i32 {
    let mut moves = state.get_legal_moves();
    if moves.is_empty() {
        return terminal_score(state);
    }
    if depth == 0 {
        return material(state);
    }
    if ordered {
        order_moves(&mut moves);
    }

    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in moves {
        state.make_move(mv);
        *nodes += 1;
        let score = minimax(state, depth - 1, alpha, beta, !maximizing, ordered, nodes);
        state.undo_move();

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }
        if beta <= alpha {
            break; // alpha-beta cutoff
        }
    }
    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
