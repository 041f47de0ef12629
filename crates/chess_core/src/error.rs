//! Errors raised while setting up a position.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected at least 4 FEN fields, found {0}")]
    FieldCount(usize),

    #[error("expected 8 ranks in board field, found {0}")]
    RankCount(usize),

    #[error("rank {rank} does not describe exactly 8 files")]
    RankLength { rank: usize },

    #[error("invalid piece character '{0}'")]
    PieceChar(char),

    #[error("invalid side to move '{0}'")]
    SideToMove(String),

    #[error("invalid castling character '{0}'")]
    CastlingChar(char),

    #[error("invalid en-passant square '{0}'")]
    EnPassant(String),

    #[error("{0} king missing or duplicated")]
    King(crate::types::Color),

    #[error("{0} is in check but it is not {0}'s move")]
    WaitingSideInCheck(crate::types::Color),
}
