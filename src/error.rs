//! Error types for position construction, queries and move application.

use crate::board::{PieceKind, Square};

/// Why `make_move` refused a move. A rejected move never changes the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    #[error("move would leave the king in check")]
    SelfCheck,
    #[error("square is off the board")]
    OutOfBounds,
    #[error("no piece on the source square")]
    NoPieceAtSource,
    #[error("piece does not belong to the side to move")]
    NotYourTurn,
    #[error("piece cannot reach the destination square")]
    IllegalDestination,
    #[error("a promotion is waiting for its piece choice")]
    PromotionPending,
}

/// Errors raised by `Position` construction and queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("invalid piece placement: {0}")]
    InvalidPlacement(String),

    #[error("invalid castling rights: {0}")]
    InvalidCastling(String),

    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    #[error("invalid FEN string: {0}")]
    InvalidFen(String),

    #[error("square {0} is empty")]
    EmptySquare(Square),

    #[error("no promotion is pending")]
    NoPendingPromotion,

    #[error("cannot promote to {0:?}")]
    InvalidPromotion(PieceKind),

    #[error("move rejected: {0}")]
    Rejected(#[from] MoveRejection),
}
