//! Tests for terminal positions
//!
//! Checkmate and stalemate are ordinary states, queryable at any time:
//! - Checkmate: side to move in check with no legal move
//! - Stalemate: side to move not in check with no legal move

use chess_core::{Color, GameState, Outcome};

fn state(fen: &str) -> GameState {
    GameState::from_fen(fen).expect("test FEN should parse")
}

// =============================================================================
// Stalemate Tests
// =============================================================================

#[test]
fn test_stalemate_king_in_corner() {
    // Black king on a8, White queen on b6, White king on c7
    let mut st = state("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1");

    assert!(st.get_legal_moves().is_empty(), "Stalemate position should have no legal moves");
    assert!(!st.is_in_check(Color::Black), "Stalemate means king is not in check");
    assert!(st.is_stalemate());
    assert_eq!(st.outcome(), Some(Outcome::Stalemate));
}

#[test]
fn test_stalemate_king_and_pawn_endgame() {
    // White king on g6, white pawn on g7, black king on g8
    let mut st = state("6k1/6P1/6K1/8/8/8/8/8 b - - 0 1");

    assert!(st.get_legal_moves().is_empty());
    assert!(st.is_stalemate());
}

#[test]
fn test_king_with_a_move_is_not_stalemate() {
    // King can take the loose pawn or step to d2/f2
    let mut st = state("7k/8/8/8/8/8/4p3/4K3 w - - 0 1");
    assert!(!st.is_stalemate());
    assert!(st.outcome().is_none());
}

// =============================================================================
// Checkmate Tests
// =============================================================================

#[test]
fn test_back_rank_mate() {
    let mut st = state("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1");
    assert!(st.is_in_check(Color::Black));
    assert!(st.is_checkmate());
    assert_eq!(
        st.outcome(),
        Some(Outcome::Checkmate {
            winner: Color::White
        })
    );
}

#[test]
fn test_scholars_mate() {
    let mut st = state("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1");
    assert!(st.is_checkmate());
    assert!(!st.is_stalemate());
}

#[test]
fn test_check_with_escape_is_not_mate() {
    let mut st = state("4k3/8/8/8/8/8/8/4R1K1 b - - 0 1");
    assert!(st.is_in_check(Color::Black));
    assert!(!st.is_checkmate());
    assert!(!st.get_legal_moves().is_empty());
}

#[test]
fn test_queries_do_not_disturb_state() {
    let mut st = state("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1");
    let before = st.clone();
    st.is_checkmate();
    st.is_stalemate();
    st.outcome();
    st.get_legal_moves();
    assert_eq!(st, before);
}
