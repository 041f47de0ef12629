//! Chess rules engine: board, pseudo-legal move generation, reversible move
//! application, legality filtering and terminal-state detection.

pub mod board;
pub mod error;
pub mod fen;
pub mod game;
pub mod moves;
pub mod notation;
pub mod perft;
pub mod rules;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::FenError;
pub use fen::START_FEN;
pub use game::*;
pub use moves::*;
pub use notation::*;
pub use perft::{perft, perft_divide};
pub use rules::{pseudo_legal_moves, pseudo_legal_moves_into, square_under_attack};
pub use types::*;

// =============================================================================
// Engine trait: implemented by move-choosing engines
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation of the chosen line, White-positive
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes searched (for stats)
    pub nodes: u64,
}

/// Trait that all chess engines must implement.
///
/// Engines search on the caller's `GameState` in place and must hand it back
/// unchanged.
pub trait Engine: Send {
    /// Search the position to the given depth.
    ///
    /// # Arguments
    /// * `state` - The current position to analyze
    /// * `depth` - Search depth in plies
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics
    fn search(&mut self, state: &mut GameState, depth: u8) -> SearchResult;

    /// Returns the engine's name for display
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
