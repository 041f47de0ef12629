//! Forsyth-Edwards Notation setup, used by tests and the console driver.

use crate::{
    board::Board,
    error::FenError,
    game::GameState,
    moves::CastlingRights,
    notation::parse_square,
    rules::square_under_attack,
    types::*,
};

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl GameState {
    /// Builds a position from FEN. The halfmove and fullmove fields are
    /// accepted but not tracked.
    ///
    /// `has_moved` is inferred: pawns off their start row have moved, kings
    /// and corner rooks are unmoved only when the castling field still
    /// grants the matching right.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::FieldCount(parts.len()));
        }

        let turn = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(FenError::SideToMove(other.to_string())),
        };

        let mut castling = CastlingRights::none();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => castling.white.kingside = true,
                    'Q' => castling.white.queenside = true,
                    'k' => castling.black.kingside = true,
                    'q' => castling.black.queenside = true,
                    _ => return Err(FenError::CastlingChar(c)),
                }
            }
        }

        let mut board = parse_placement(parts[0], castling)?;

        board.en_passant_target = match parts[3] {
            "-" => None,
            ep => Some(parse_square(ep).ok_or_else(|| FenError::EnPassant(ep.to_string()))?),
        };

        // The side that just moved may not have left its king en prise
        let waiting = turn.other();
        if square_under_attack(&board, board.king_square(waiting), turn) {
            return Err(FenError::WaitingSideInCheck(waiting));
        }

        Ok(GameState::with_board(board, turn, castling))
    }
}

fn parse_placement(field: &str, castling: CastlingRights) -> Result<Board, FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::RankCount(ranks.len()));
    }

    let mut board = Board::empty();
    let mut king_count = [0u8; 2];

    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let row = row as i8;
        let mut col: i8 = 0;
        for ch in rank_str.chars() {
            if let Some(d) = ch.to_digit(10) {
                // col never exceeds 8 here, so the sum cannot overflow
                let run = d as i8;
                if !(1..=8).contains(&run) || col + run > 8 {
                    return Err(FenError::RankLength {
                        rank: 8 - row as usize,
                    });
                }
                col += run;
                continue;
            }
            let kind = PieceKind::from_letter(ch).ok_or(FenError::PieceChar(ch))?;
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let sq = Square::new(row, col).ok_or(FenError::RankLength {
                rank: 8 - row as usize,
            })?;
            if kind == PieceKind::King {
                king_count[color.idx()] += 1;
            }
            board.set_piece(
                sq,
                Some(Piece {
                    color,
                    kind,
                    has_moved: inferred_has_moved(sq, color, kind, castling),
                }),
            );
            col += 1;
        }
        if col != 8 {
            return Err(FenError::RankLength {
                rank: 8 - row as usize,
            });
        }
    }

    for color in [Color::White, Color::Black] {
        if king_count[color.idx()] != 1 {
            return Err(FenError::King(color));
        }
    }
    Ok(board)
}

fn inferred_has_moved(sq: Square, color: Color, kind: PieceKind, castling: CastlingRights) -> bool {
    let rights = castling.get(color);
    let home = color.home_row();
    match kind {
        PieceKind::Pawn => sq.row != color.pawn_row(),
        PieceKind::King => !(sq == Square { row: home, col: 4 } && (rights.kingside || rights.queenside)),
        PieceKind::Rook if sq.row == home && sq.col == 0 => !rights.queenside,
        PieceKind::Rook if sq.row == home && sq.col == 7 => !rights.kingside,
        PieceKind::Rook => true,
        _ => false,
    }
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
