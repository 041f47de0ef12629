use chess_core::{Color, Engine, GameState, Move};
use tracing::debug;

use crate::{MinimaxEngine, SearchConfig};

/// An AI seat at the board: it only moves for its own color.
#[derive(Debug, Clone)]
pub struct AiPlayer {
    color: Color,
    config: SearchConfig,
    engine: MinimaxEngine,
}

impl AiPlayer {
    pub fn new(color: Color, config: SearchConfig) -> Self {
        Self {
            color,
            config,
            engine: MinimaxEngine::new(config),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// The AI's move, or `None` when it is not its turn or it has no legal
    /// move. The caller applies the move.
    pub fn choose_move(&mut self, state: &mut GameState) -> Option<Move> {
        if state.turn() != self.color {
            debug!(ai = %self.color, turn = %state.turn(), "asked to move out of turn");
            return None;
        }
        self.engine.search(state, self.config.depth).best_move
    }

    pub fn last_nodes(&self) -> u64 {
        self.engine.nodes()
    }
}
