use crate::{game::GameState, moves::Move};

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`.
pub fn perft(state: &mut GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    fn inner(state: &mut GameState, depth: u8, layers: &mut [Vec<Move>]) -> u64 {
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        state.legal_moves_into(buf);
        if depth == 1 {
            return buf.len() as u64;
        }

        let mut nodes = 0u64;
        for mv in buf.iter().copied() {
            state.make_move(mv);
            nodes += inner(state, depth - 1, rest);
            state.undo_move();
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(64); depth as usize];
    inner(state, depth, &mut layers[..])
}

/// Per-root-move node counts, in generation order. Handy when a perft total
/// disagrees with a reference and the offending branch has to be found.
pub fn perft_divide(state: &mut GameState, depth: u8) -> Vec<(Move, u64)> {
    let moves = state.get_legal_moves();
    moves
        .into_iter()
        .map(|mv| {
            state.make_move(mv);
            let n = perft(state, depth.saturating_sub(1));
            state.undo_move();
            (mv, n)
        })
        .collect()
}
