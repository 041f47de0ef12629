//! Minimax Chess Engine
//!
//! Fixed-depth minimax with alpha-beta pruning over a material-only
//! evaluation. Mate and stalemate are scored at terminal nodes.

mod eval;
mod ordering;
mod player;
mod search;

use chess_core::{Engine, GameState, SearchResult};

/// Engine wrapper around [`pick_best_move`] with node statistics.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    config: SearchConfig,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config, nodes: 0 }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, state: &mut GameState, depth: u8) -> SearchResult {
        let config = SearchConfig {
            depth,
            ..self.config
        };
        let outcome = search::pick_best_move(state, &config);
        self.nodes = outcome.nodes;

        SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome
                .best_move
                .map(|(_, s)| s)
                .unwrap_or_else(|| eval::terminal_score(state)),
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

// Re-export for direct use if needed
pub use eval::{evaluate, material, piece_value, terminal_score, MATE_SCORE};
pub use ordering::order_moves;
pub use player::AiPlayer;
pub use search::{choose_move, pick_best_move, SearchConfig, SearchOutcome};
