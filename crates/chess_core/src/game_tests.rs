use super::*;
use crate::{moves::SideRights, notation::parse_square};

fn sq(s: &str) -> Square {
    parse_square(s).unwrap()
}

fn state(fen: &str) -> GameState {
    GameState::from_fen(fen).unwrap()
}

fn play(st: &mut GameState, from: &str, to: &str) -> Move {
    let mv = st.find_move(sq(from), sq(to), None).unwrap();
    st.make_move(mv);
    mv
}

#[test]
fn test_startpos_legal_moves() {
    let mut st = GameState::new();
    assert_eq!(st.get_legal_moves().len(), 20);
    assert_eq!(st.turn(), Color::White);
    assert!(!st.is_in_check(Color::White));
}

#[test]
fn test_make_undo_restores_every_startpos_move() {
    let mut st = GameState::new();
    let before = st.clone();
    for mv in st.get_legal_moves() {
        st.make_move(mv);
        assert_eq!(st.turn(), Color::Black);
        assert_eq!(st.history().len(), 1);
        st.undo_move();
        assert_eq!(st, before, "undo of {mv} did not restore the position");
    }
}

#[test]
fn test_undo_on_empty_history_is_noop() {
    let mut st = GameState::new();
    let before = st.clone();
    assert_eq!(st.undo_move(), None);
    assert_eq!(st, before);
}

#[test]
fn test_double_step_sets_and_clears_en_passant() {
    let mut st = GameState::new();
    play(&mut st, "e2", "e4");
    assert_eq!(st.en_passant_target(), Some(sq("e3")));
    assert!(st.piece_at(sq("e4")).unwrap().has_moved);
    play(&mut st, "g8", "f6");
    assert_eq!(st.en_passant_target(), None);
}

#[test]
fn test_en_passant_round_trip() {
    let mut st = state("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
    play(&mut st, "d7", "d5");
    assert_eq!(st.en_passant_target(), Some(sq("d6")));

    let before = st.clone();
    let ep = st
        .get_legal_moves()
        .into_iter()
        .find(|m| m.is_en_passant)
        .expect("en passant should be legal");
    assert_eq!(ep.from, sq("e5"));
    assert_eq!(ep.to, sq("d6"));

    st.make_move(ep);
    assert!(st.piece_at(sq("d5")).is_none(), "captured pawn must leave d5");
    assert_eq!(st.piece_at(sq("d6")).map(|p| p.kind), Some(PieceKind::Pawn));
    assert_eq!(st.piece_at(sq("d6")).map(|p| p.color), Some(Color::White));
    assert!(st.piece_at(sq("e5")).is_none());
    assert_eq!(st.en_passant_target(), None);

    st.undo_move();
    assert_eq!(st, before);
    assert_eq!(st.piece_at(sq("d5")).map(|p| p.color), Some(Color::Black));
    assert!(st.piece_at(sq("d6")).is_none());
}

#[test]
fn test_en_passant_expires_after_one_ply() {
    let mut st = state("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1");
    play(&mut st, "d7", "d5");
    play(&mut st, "e1", "f1");
    play(&mut st, "e8", "f8");
    assert!(st.get_legal_moves().iter().all(|m| !m.is_en_passant));
}

#[test]
fn test_castling_apply_and_undo() {
    let mut st = state("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let before = st.clone();
    let castle = play(&mut st, "e1", "g1");
    assert!(castle.is_castling);

    assert_eq!(st.piece_at(sq("g1")).map(|p| p.kind), Some(PieceKind::King));
    assert_eq!(st.piece_at(sq("f1")).map(|p| p.kind), Some(PieceKind::Rook));
    assert!(st.piece_at(sq("h1")).is_none());
    assert!(st.piece_at(sq("e1")).is_none());
    assert!(st.piece_at(sq("f1")).unwrap().has_moved);
    assert_eq!(st.board().king_square(Color::White), sq("g1"));
    assert_eq!(
        st.castling_rights().white,
        SideRights {
            kingside: false,
            queenside: false
        }
    );
    assert_eq!(st.castling_rights().black, before.castling_rights().black);

    st.undo_move();
    assert_eq!(st, before);
    assert_eq!(st.board().king_square(Color::White), sq("e1"));
}

#[test]
fn test_queenside_castling_moves_rook_to_d() {
    let mut st = state("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
    play(&mut st, "e8", "c8");
    assert_eq!(st.piece_at(sq("d8")).map(|p| p.kind), Some(PieceKind::Rook));
    assert_eq!(st.piece_at(sq("c8")).map(|p| p.kind), Some(PieceKind::King));
    assert!(st.piece_at(sq("a8")).is_none());
}

#[test]
fn test_rook_move_clears_one_side() {
    let mut st = state("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    play(&mut st, "h1", "h2");
    let white = st.castling_rights().white;
    assert!(!white.kingside);
    assert!(white.queenside);
}

#[test]
fn test_rook_capture_clears_victim_right() {
    let mut st = state("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    play(&mut st, "a1", "a8");
    assert!(!st.castling_rights().white.queenside);
    assert!(!st.castling_rights().black.queenside);
    assert!(st.castling_rights().black.kingside);
}

#[test]
fn test_promotion_apply_and_undo() {
    let mut st = state("k7/4P3/8/8/8/8/8/K7 w - - 0 1");
    let before = st.clone();
    let promo = st.find_move(sq("e7"), sq("e8"), Some(PieceKind::Knight)).unwrap();
    st.make_move(promo);
    let placed = st.piece_at(sq("e8")).unwrap();
    assert_eq!(placed.kind, PieceKind::Knight);
    assert_eq!(placed.color, Color::White);
    assert!(placed.has_moved);
    assert!(st.piece_at(sq("e7")).is_none());

    st.undo_move();
    assert_eq!(st, before);
    assert_eq!(st.piece_at(sq("e7")).map(|p| p.kind), Some(PieceKind::Pawn));
}

#[test]
fn test_find_move_leaves_promotion_ambiguity_to_caller() {
    let mut st = state("k7/4P3/8/8/8/8/8/K7 w - - 0 1");
    assert_eq!(st.find_move(sq("e7"), sq("e8"), None), None);
    assert!(st.find_move(sq("e7"), sq("e8"), Some(PieceKind::Queen)).is_some());
    assert_eq!(st.find_move(sq("e7"), sq("e6"), None), None);
}

#[test]
fn test_pinned_piece_cannot_move() {
    // Knight on e2 pinned by the rook on e8
    let mut st = state("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1");
    assert!(st.get_legal_moves().iter().all(|m| m.from != sq("e2")));
}

#[test]
fn test_legal_moves_are_pseudo_legal_and_safe() {
    let mut st = state("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let pseudo = st.pseudo_legal_moves(st.turn());
    let legal = st.get_legal_moves();
    assert_eq!(legal.len(), 48);
    for mv in legal {
        assert!(pseudo.contains(&mv));
        st.make_move(mv);
        assert!(!st.is_in_check(Color::White), "{mv} leaves the king in check");
        st.undo_move();
    }
}

#[test]
fn test_checkmate_with_defended_queen() {
    // White Ka1, Black Qa2 defended by Kb3
    let mut st = state("8/8/8/8/8/1k6/q7/K7 w - - 0 1");
    assert!(st.is_in_check(Color::White));
    assert!(st.get_legal_moves().is_empty());
    assert!(st.is_checkmate());
    assert!(!st.is_stalemate());
    assert_eq!(
        st.outcome(),
        Some(Outcome::Checkmate {
            winner: Color::Black
        })
    );
}

#[test]
fn test_undefended_queen_next_to_king_is_not_mate() {
    // Same queen placement but the black king is far away on h8
    let mut st = state("7k/8/8/8/8/8/q7/K7 w - - 0 1");
    assert!(st.is_in_check(Color::White));
    let moves = st.get_legal_moves();
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].to, sq("a2"));
    assert!(moves[0].is_capture());
    assert!(!st.is_checkmate());
}

#[test]
fn test_stalemate() {
    // White Ka1 against Kc2 and Qb3
    let mut st = state("8/8/8/8/8/1q6/2k5/K7 w - - 0 1");
    assert!(!st.is_in_check(Color::White));
    assert!(st.get_legal_moves().is_empty());
    assert!(st.is_stalemate());
    assert!(!st.is_checkmate());
    assert_eq!(st.outcome(), Some(Outcome::Stalemate));
}

#[test]
fn test_fools_mate() {
    let mut st = GameState::new();
    play(&mut st, "f2", "f3");
    play(&mut st, "e7", "e5");
    play(&mut st, "g2", "g4");
    play(&mut st, "d8", "h4");
    assert!(st.is_checkmate());
    assert_eq!(st.history().len(), 4);

    for _ in 0..4 {
        st.undo_move();
    }
    assert_eq!(st, GameState::new());
}

#[test]
#[should_panic(expected = "no piece on e4")]
fn test_make_move_from_empty_square_panics() {
    let mut st = GameState::new();
    let ghost = Move::new(sq("e4"), sq("e5"), Piece::new(Color::White, PieceKind::Pawn));
    st.make_move(ghost);
}
