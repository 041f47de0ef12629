use crate::{game::GameState, moves::Move, types::*};

/// Parses a coordinate such as `e4`.
pub fn parse_square(s: &str) -> Option<Square> {
    let b = s.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0].to_ascii_lowercase();
    let r = b[1];
    if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
        return None;
    }
    Square::new(8 - (r - b'0') as i8, (f - b'a') as i8)
}

/// Parses `e2 e4`, `e2e4`, `e7 e8 q` or `e7e8q` into a legal move of `state`.
///
/// Returns `None` when the text is malformed, the move is not legal, or a
/// promotion was left unspecified.
pub fn parse_move(state: &mut GameState, text: &str) -> Option<Move> {
    let compact: String = text.split_whitespace().collect();
    if compact.len() < 4 {
        return None;
    }
    let from = parse_square(compact.get(0..2)?)?;
    let to = parse_square(compact.get(2..4)?)?;
    let promotion = match compact.get(4..)? {
        "" => None,
        rest => {
            let mut chars = rest.trim_start_matches('=').chars();
            let kind = PieceKind::from_letter(chars.next()?)?;
            if chars.next().is_some() || !PieceKind::PROMOTIONS.contains(&kind) {
                return None;
            }
            Some(kind)
        }
    };
    state.find_move(from, to, promotion)
}

/// Whether a legal move from `from` to `to` needs a promotion choice.
pub fn needs_promotion_choice(state: &mut GameState, from: Square, to: Square) -> bool {
    state
        .get_legal_moves()
        .iter()
        .any(|m| m.from == from && m.to == to && m.is_promotion())
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
