//! Game state and rules: side to move, castling rights, en passant memory,
//! pending promotion and repetition counts layered over a `Board`.
//!
//! Legality is decided by trial: a candidate move is applied to a scratch
//! grid, the mover's king is tested for attack, and the move is undone again
//! from a small `Undo` record. Nothing is deep-copied per candidate.

use std::collections::HashMap;
use std::fmt;

use crate::board::{Board, Color, Piece, PieceKind, Square};
use crate::error::{MoveRejection, PositionError};
use crate::movegen;
use crate::options::{PositionOptions, RepetitionKey};
use crate::utils::SquareSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    fn rook_from_file(self) -> usize {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    fn rook_to_file(self) -> usize {
        match self {
            CastleSide::Kingside => 5,
            CastleSide::Queenside => 3,
        }
    }

    fn king_to_file(self) -> usize {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }

    /// Files that must be empty between king and rook.
    fn gap_files(self) -> std::ops::Range<usize> {
        match self {
            CastleSide::Kingside => 5..7,
            CastleSide::Queenside => 1..4,
        }
    }

    /// Files the king stands on, crosses and lands on; none may be attacked.
    fn king_path(self) -> [usize; 3] {
        match self {
            CastleSide::Kingside => [KING_FILE, 5, 6],
            CastleSide::Queenside => [KING_FILE, 3, 2],
        }
    }

    /// Side of a castling king move, recognised by its two-file jump.
    fn of_king_move(from: Square, to: Square) -> Option<CastleSide> {
        if from.rank() != to.rank() {
            return None;
        }
        if to.file() == from.file() + 2 {
            Some(CastleSide::Kingside)
        } else if from.file() == to.file() + 2 {
            Some(CastleSide::Queenside)
        } else {
            None
        }
    }
}

const KING_FILE: usize = 4;

/// Castling rights as four independent flags.
///
/// Bit layout: bit 3 = K, bit 2 = Q, bit 1 = k, bit 0 = q. Flags are only ever
/// cleared during a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const WHITE_KINGSIDE: u8 = 0b1000;
    pub const WHITE_QUEENSIDE: u8 = 0b0100;
    pub const BLACK_KINGSIDE: u8 = 0b0010;
    pub const BLACK_QUEENSIDE: u8 = 0b0001;

    pub const ALL: CastlingRights = CastlingRights(0b1111);
    pub const NONE: CastlingRights = CastlingRights(0);

    fn bit(color: Color, side: CastleSide) -> u8 {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => Self::WHITE_KINGSIDE,
            (Color::White, CastleSide::Queenside) => Self::WHITE_QUEENSIDE,
            (Color::Black, CastleSide::Kingside) => Self::BLACK_KINGSIDE,
            (Color::Black, CastleSide::Queenside) => Self::BLACK_QUEENSIDE,
        }
    }

    pub fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit(color, side) != 0
    }

    pub fn clear(&mut self, color: Color, side: CastleSide) {
        self.0 &= !Self::bit(color, side);
    }

    pub fn clear_color(&mut self, color: Color) {
        for side in CastleSide::BOTH {
            self.clear(color, side);
        }
    }

    /// Drop the right tied to a rook corner, if `sq` is one. Anything moving
    /// off or onto a corner means its original rook is gone.
    fn clear_corner(&mut self, sq: Square) {
        for color in [Color::White, Color::Black] {
            for side in CastleSide::BOTH {
                if sq.rank() == color.home_rank() && sq.file() == side.rook_from_file() {
                    self.clear(color, side);
                }
            }
        }
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    /// Parse the FEN castling field: any subset of `KQkq` or `-`.
    pub fn from_fen_field(field: &str) -> Result<CastlingRights, PositionError> {
        if field == "-" {
            return Ok(CastlingRights::NONE);
        }
        if field.is_empty() {
            return Err(PositionError::InvalidCastling(field.to_string()));
        }
        let mut rights = 0u8;
        for ch in field.chars() {
            let bit = match ch {
                'K' => Self::WHITE_KINGSIDE,
                'Q' => Self::WHITE_QUEENSIDE,
                'k' => Self::BLACK_KINGSIDE,
                'q' => Self::BLACK_QUEENSIDE,
                _ => return Err(PositionError::InvalidCastling(field.to_string())),
            };
            if rights & bit != 0 {
                return Err(PositionError::InvalidCastling(field.to_string()));
            }
            rights |= bit;
        }
        Ok(CastlingRights(rights))
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (bit, ch) in [
            (Self::WHITE_KINGSIDE, 'K'),
            (Self::WHITE_QUEENSIDE, 'Q'),
            (Self::BLACK_KINGSIDE, 'k'),
            (Self::BLACK_QUEENSIDE, 'q'),
        ] {
            if self.0 & bit != 0 {
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

/// The most recent accepted move, kept for en passant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LastMove {
    pub from: Square,
    pub piece: Piece,
    pub to: Square,
}

impl LastMove {
    pub fn is_double_step(&self) -> bool {
        self.piece.kind == PieceKind::Pawn
            && self.from.file() == self.to.file()
            && self.from.rank().abs_diff(self.to.rank()) == 2
    }

    /// Square skipped by a double step.
    pub fn en_passant_square(&self) -> Option<Square> {
        if self.is_double_step() {
            Square::new((self.from.rank() + self.to.rank()) / 2, self.to.file())
        } else {
            None
        }
    }
}

/// A pawn that reached the last rank and waits for its piece choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PendingPromotion {
    pub color: Color,
    pub square: Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Move committed, turn passed to the opponent.
    Applied,
    /// Pawn lifted onto the promotion square; call `complete_promotion`.
    PromotionPending(Square),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate { winner: Color },
    Stalemate,
    ThreefoldRepetition,
    AwaitingPromotion,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate { .. } | GameStatus::Stalemate | GameStatus::ThreefoldRepetition
        )
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {} wins", winner),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::ThreefoldRepetition => write!(f, "draw by threefold repetition"),
            GameStatus::AwaitingPromotion => write!(f, "awaiting promotion"),
        }
    }
}

/// Occurrence counts per position key. Append-only for the life of a game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepetitionTable {
    counts: HashMap<String, u32>,
}

impl RepetitionTable {
    /// Bump the count for `key` and return the new count.
    pub fn record(&mut self, key: String) -> u32 {
        let count = self.counts.entry(key).or_insert(0);
        *count += 1;
        *count
    }

    pub fn count(&self, key: &str) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

// Undo entry per rollback
#[derive(Debug, Clone)]
struct Undo {
    from: Square,
    to: Square,
    moved: Piece,
    captured: Option<(Square, Piece)>,
    rook_move: Option<(Square, Square)>,
}

/// Relocate a piece with its side effects (en passant removal, castling rook).
/// Castling rights are left alone: trial moves never need them.
fn apply_move(board: &mut Board, from: Square, to: Square) -> Option<Undo> {
    let moved = board.get(from)?;

    let rook_move = match CastleSide::of_king_move(from, to) {
        Some(side) if moved.kind == PieceKind::King => Some((
            Square::new(from.rank(), side.rook_from_file())?,
            Square::new(from.rank(), side.rook_to_file())?,
        )),
        _ => None,
    };

    let mut captured = None;
    // Diagonal pawn step onto an empty square: en passant, victim beside the source
    if moved.kind == PieceKind::Pawn && from.file() != to.file() && board.is_empty(to) {
        let victim_sq = Square::new(from.rank(), to.file())?;
        captured = board.take(victim_sq).map(|victim| (victim_sq, victim));
    }

    board.take(from);
    if let Some(victim) = board.put(to, moved) {
        captured = Some((to, victim));
    }

    let rook_move = rook_move.filter(|&(rook_from, rook_to)| match board.take(rook_from) {
        Some(rook) => {
            board.put(rook_to, rook);
            true
        }
        None => false,
    });

    Some(Undo {
        from,
        to,
        moved,
        captured,
        rook_move,
    })
}

fn undo_move(board: &mut Board, undo: &Undo) {
    board.take(undo.to);
    board.put(undo.from, undo.moved);
    if let Some((rook_from, rook_to)) = undo.rook_move {
        if let Some(rook) = board.take(rook_to) {
            board.put(rook_from, rook);
        }
    }
    if let Some((sq, piece)) = undo.captured {
        board.put(sq, piece);
    }
}

fn king_attacked(board: &Board, side: Color) -> bool {
    match board.find_king(side) {
        Some(king) => movegen::attacked_squares(board, side.opposite()).contains(king),
        None => false,
    }
}

/// Trial-run `from -> to` on `scratch` and report whether the mover's king is safe.
/// `scratch` is restored before returning.
fn leaves_king_safe(scratch: &mut Board, from: Square, to: Square, side: Color) -> bool {
    match apply_move(scratch, from, to) {
        Some(undo) => {
            let safe = !king_attacked(scratch, side);
            undo_move(scratch, &undo);
            safe
        }
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
    side: Color,
    castling: CastlingRights,
    last_move: Option<LastMove>,
    pending_promotion: Option<PendingPromotion>,
    repetitions: RepetitionTable,
    options: PositionOptions,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// The standard starting position, White to move.
    pub fn new() -> Self {
        Self::from_board(Board::standard(), CastlingRights::ALL)
    }

    fn from_board(board: Board, castling: CastlingRights) -> Self {
        let mut pos = Self {
            board,
            side: Color::White,
            castling,
            last_move: None,
            pending_promotion: None,
            repetitions: RepetitionTable::default(),
            options: PositionOptions::default(),
        };
        pos.reseed_repetitions();
        pos
    }

    /// Build from a FEN placement field and a castling field (`KQkq`, a subset, or `-`).
    /// White moves first.
    pub fn from_parts(placement: &str, castling: &str) -> Result<Self, PositionError> {
        let board = Board::from_placement(placement)?;
        validate_board(&board, placement)?;
        let castling = CastlingRights::from_fen_field(castling)?;
        Ok(Self::from_board(board, castling))
    }

    /// Build from a full FEN. Placement, side to move and castling are read;
    /// an en passant square becomes the matching last move; clocks are ignored.
    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        let mut parts = fen.split_whitespace();
        let placement = parts
            .next()
            .ok_or_else(|| PositionError::InvalidFen(fen.to_string()))?;
        let side_part = parts.next().unwrap_or("w");
        let castle_part = parts.next().unwrap_or("-");
        let ep_part = parts.next().unwrap_or("-");

        let mut pos = Self::from_parts(placement, castle_part)?;
        pos.side = match side_part {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(PositionError::InvalidFen(fen.to_string())),
        };
        if ep_part != "-" {
            let ep_sq = Square::from_algebraic(ep_part)?;
            pos.last_move = Some(
                double_step_through(&pos.board, ep_sq, pos.side)
                    .ok_or_else(|| PositionError::InvalidFen(fen.to_string()))?,
            );
        }
        pos.reseed_repetitions();
        Ok(pos)
    }

    pub fn with_side_to_move(mut self, side: Color) -> Self {
        self.side = side;
        self.reseed_repetitions();
        self
    }

    pub fn with_options(mut self, options: PositionOptions) -> Self {
        self.options = options;
        self.reseed_repetitions();
        self
    }

    fn reseed_repetitions(&mut self) {
        self.repetitions = RepetitionTable::default();
        let key = self.position_key();
        self.repetitions.record(key);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    pub fn last_move(&self) -> Option<&LastMove> {
        self.last_move.as_ref()
    }

    pub fn pending_promotion(&self) -> Option<PendingPromotion> {
        self.pending_promotion
    }

    pub fn white_promote(&self) -> bool {
        matches!(self.pending_promotion, Some(p) if p.color == Color::White)
    }

    pub fn black_promote(&self) -> bool {
        matches!(self.pending_promotion, Some(p) if p.color == Color::Black)
    }

    pub fn options(&self) -> PositionOptions {
        self.options
    }

    pub fn repetitions(&self) -> &RepetitionTable {
        &self.repetitions
    }

    /// Whether the piece on `sq` belongs to the side to move.
    pub fn piece_matches_turn(&self, sq: Square) -> Result<bool, PositionError> {
        let piece = self.board.get(sq).ok_or(PositionError::EmptySquare(sq))?;
        Ok(piece.color == self.side)
    }

    // Generate moves APIs -----------------------------------------

    /// Destinations of the piece on `sq`. King steps onto attacked squares are
    /// excluded and castling is included; other pieces are not checked for pins.
    pub fn generate_moves(&self, sq: Square) -> Result<Vec<Square>, PositionError> {
        let piece = self.board.get(sq).ok_or(PositionError::EmptySquare(sq))?;
        Ok(self.targets(sq, piece))
    }

    /// Squares threatened by the piece on `sq` (attack-only generation).
    pub fn attacks_from(&self, sq: Square) -> Result<Vec<Square>, PositionError> {
        let piece = self.board.get(sq).ok_or(PositionError::EmptySquare(sq))?;
        let mut out = Vec::with_capacity(28);
        movegen::piece_targets(&self.board, sq, piece, self.last_move.as_ref(), true, &mut out);
        Ok(out)
    }

    /// `generate_moves` minus every move that would leave the own king attacked.
    pub fn legal_moves(&self, sq: Square) -> Result<Vec<Square>, PositionError> {
        let piece = self.board.get(sq).ok_or(PositionError::EmptySquare(sq))?;
        let mut scratch = self.board;
        let mut moves = self.targets(sq, piece);
        moves.retain(|&to| leaves_king_safe(&mut scratch, sq, to, piece.color));
        Ok(moves)
    }

    /// Every legal (from, to) pair for the side to move. Empty while a
    /// promotion is pending.
    pub fn all_legal_moves(&self) -> Vec<(Square, Square)> {
        if self.pending_promotion.is_some() {
            return Vec::new();
        }
        let mut scratch = self.board;
        let mut moves = Vec::with_capacity(64);
        for (from, piece) in self.board.pieces_of(self.side) {
            for to in self.targets(from, piece) {
                if leaves_king_safe(&mut scratch, from, to, piece.color) {
                    moves.push((from, to));
                }
            }
        }
        moves
    }

    fn targets(&self, from: Square, piece: Piece) -> Vec<Square> {
        let mut out = Vec::with_capacity(28);
        movegen::piece_targets(&self.board, from, piece, self.last_move.as_ref(), false, &mut out);
        if piece.kind == PieceKind::King {
            let (danger, _) = self.find_danger_squares(piece.color);
            out.retain(|&to| !danger.contains(to));
            for side in CastleSide::BOTH {
                if let Some(to) = self.castle_target(from, piece.color, side, danger) {
                    out.push(to);
                }
            }
        }
        out
    }

    fn castle_target(
        &self,
        king_from: Square,
        color: Color,
        side: CastleSide,
        danger: SquareSet,
    ) -> Option<Square> {
        if !self.castling.has(color, side) {
            return None;
        }
        let rank = color.home_rank();
        if king_from != Square::new(rank, KING_FILE)? {
            return None;
        }
        let rook_sq = Square::new(rank, side.rook_from_file())?;
        if self.board.get(rook_sq) != Some(Piece::new(color, PieceKind::Rook)) {
            return None;
        }
        for file in side.gap_files() {
            if !self.board.is_empty(Square::new(rank, file)?) {
                return None;
            }
        }
        for file in side.king_path() {
            if danger.contains(Square::new(rank, file)?) {
                return None;
            }
        }
        Square::new(rank, side.king_to_file())
    }

    /// Squares attacked by `side`'s opponent, computed with `side`'s king lifted
    /// off the board so it cannot shield squares behind itself. Also returns
    /// where that king stands.
    pub fn find_danger_squares(&self, side: Color) -> (SquareSet, Option<Square>) {
        let king = self.board.find_king(side);
        let mut board = self.board;
        if let Some(sq) = king {
            board.take(sq);
        }
        (movegen::attacked_squares(&board, side.opposite()), king)
    }

    pub fn king_in_check(&self, side: Color) -> bool {
        match self.find_danger_squares(side) {
            (danger, Some(king)) => danger.contains(king),
            (_, None) => false,
        }
    }

    pub fn has_legal_move(&self, side: Color) -> bool {
        let mut scratch = self.board;
        self.board.pieces_of(side).any(|(from, piece)| {
            self.targets(from, piece)
                .into_iter()
                .any(|to| leaves_king_safe(&mut scratch, from, to, side))
        })
    }

    /// True when no move of `side` gets its king out of check. Only meaningful
    /// for the side that is in check.
    pub fn king_in_checkmate(&self, side: Color) -> bool {
        !self.has_legal_move(side)
    }

    /// True when `side` has no legal move. Does not look at check: callers test
    /// `king_in_check` first, since no moves while in check is mate.
    pub fn is_stalemate(&self, side: Color) -> bool {
        !self.has_legal_move(side)
    }

    // Move application ---------------------------------------------

    /// Attempt a move for the side to move. A rejected move leaves the
    /// position untouched.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveRejection> {
        if self.pending_promotion.is_some() {
            return Err(MoveRejection::PromotionPending);
        }
        let piece = self.board.get(from).ok_or(MoveRejection::NoPieceAtSource)?;
        if piece.color != self.side {
            return Err(MoveRejection::NotYourTurn);
        }
        if !self.targets(from, piece).contains(&to) {
            return Err(MoveRejection::IllegalDestination);
        }

        let undo = apply_move(&mut self.board, from, to).ok_or(MoveRejection::NoPieceAtSource)?;
        if self.king_in_check(piece.color) {
            undo_move(&mut self.board, &undo);
            return Err(MoveRejection::SelfCheck);
        }

        if piece.kind == PieceKind::King {
            self.castling.clear_color(piece.color);
        }
        self.castling.clear_corner(from);
        self.castling.clear_corner(to);
        self.last_move = Some(LastMove { from, piece, to });

        if piece.kind == PieceKind::Pawn && to.rank() == piece.color.promotion_rank() {
            self.board.take(to);
            self.pending_promotion = Some(PendingPromotion {
                color: piece.color,
                square: to,
            });
            return Ok(MoveOutcome::PromotionPending(to));
        }

        self.finish_turn();
        Ok(MoveOutcome::Applied)
    }

    /// `make_move` from raw (rank, file) pairs, rejecting off-board coordinates.
    pub fn make_move_coords(
        &mut self,
        from: (usize, usize),
        to: (usize, usize),
    ) -> Result<MoveOutcome, MoveRejection> {
        let from = Square::new(from.0, from.1).ok_or(MoveRejection::OutOfBounds)?;
        let to = Square::new(to.0, to.1).ok_or(MoveRejection::OutOfBounds)?;
        self.make_move(from, to)
    }

    /// Place the chosen piece on the pending promotion square and pass the turn.
    pub fn complete_promotion(&mut self, kind: PieceKind) -> Result<(), PositionError> {
        let pending = self.pending_promotion.ok_or(PositionError::NoPendingPromotion)?;
        if !kind.is_promotion_target() {
            return Err(PositionError::InvalidPromotion(kind));
        }
        self.board.put(pending.square, Piece::new(pending.color, kind));
        self.pending_promotion = None;
        self.finish_turn();
        Ok(())
    }

    fn finish_turn(&mut self) {
        self.side = self.side.opposite();
        let key = self.position_key();
        self.repetitions.record(key);
    }

    // Repetition and serialization -------------------------------------

    /// Piece placement plus castling rights, e.g. `"<placement> KQkq"`.
    pub fn board_to_fen(&self) -> String {
        format!("{} {}", self.board.to_placement(), self.castling)
    }

    /// Key under which the current position is counted for repetitions.
    pub fn position_key(&self) -> String {
        match self.options.repetition_key {
            RepetitionKey::PlacementAndCastling => self.board_to_fen(),
            RepetitionKey::Strict => {
                let side = match self.side {
                    Color::White => 'w',
                    Color::Black => 'b',
                };
                let ep = self
                    .last_move
                    .and_then(|m| m.en_passant_square())
                    .map(|sq| sq.to_string())
                    .unwrap_or_else(|| "-".to_string());
                format!("{} {} {}", self.board_to_fen(), side, ep)
            }
        }
    }

    pub fn repetition_count(&self) -> u32 {
        self.repetitions.count(&self.position_key())
    }

    pub fn is_threefold_repetition(&self) -> bool {
        self.repetition_count() >= 3
    }

    /// Terminal-state polling for the side to move, in the order check,
    /// checkmate, stalemate, repetition.
    pub fn status(&self) -> GameStatus {
        if self.pending_promotion.is_some() {
            return GameStatus::AwaitingPromotion;
        }
        let side = self.side;
        if self.king_in_check(side) {
            if self.king_in_checkmate(side) {
                GameStatus::Checkmate {
                    winner: side.opposite(),
                }
            } else {
                GameStatus::Check
            }
        } else if self.is_stalemate(side) {
            GameStatus::Stalemate
        } else if self.is_threefold_repetition() {
            GameStatus::ThreefoldRepetition
        } else {
            GameStatus::Ongoing
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move, castling {}", self.side, self.castling)
    }
}

fn validate_board(board: &Board, placement: &str) -> Result<(), PositionError> {
    for color in [Color::White, Color::Black] {
        let kings = board.count(Piece::new(color, PieceKind::King));
        if kings != 1 {
            return Err(PositionError::InvalidPlacement(format!(
                "{} ({} has {} kings)",
                placement, color, kings
            )));
        }
    }
    let stray_pawn = board
        .pieces()
        .any(|(sq, piece)| piece.kind == PieceKind::Pawn && (sq.rank() == 0 || sq.rank() == 7));
    if stray_pawn {
        return Err(PositionError::InvalidPlacement(format!(
            "{} (pawn on a back rank)",
            placement
        )));
    }
    Ok(())
}

/// Reconstruct the double step that skipped `ep_sq`, given who moves next.
fn double_step_through(board: &Board, ep_sq: Square, side_to_move: Color) -> Option<LastMove> {
    let mover = side_to_move.opposite();
    let pawn = Piece::new(mover, PieceKind::Pawn);
    let from = ep_sq.offset(-mover.forward(), 0)?;
    let to = ep_sq.offset(mover.forward(), 0)?;
    if from.rank() != mover.pawn_rank() || board.get(to) != Some(pawn) {
        return None;
    }
    Some(LastMove { from, piece: pawn, to })
}
