pub mod board;
pub mod error;
pub mod logger;
pub mod movegen;
pub mod options;
pub mod perft;
pub mod position;
pub mod session;
pub mod utils;

pub use board::{Board, Color, Piece, PieceKind, Square, START_FEN, START_PLACEMENT};
pub use error::{MoveRejection, PositionError};
pub use options::{PositionOptions, RepetitionKey, SessionOptions};
pub use position::{CastlingRights, GameStatus, LastMove, MoveOutcome, Position};
