//! Per-piece target generation over a bare `Board`.
//!
//! These functions know nothing about turn order, castling or king safety;
//! `Position` layers those on top. Two modes exist:
//! - normal: squares the piece may move to (empty or enemy-occupied);
//! - attack-only: squares the piece threatens, whoever stands there. Pawn
//!   pushes are dropped and both pawn diagonals are always reported.

use crate::board::{Board, Color, Piece, PieceKind, Square};
use crate::position::LastMove;
use crate::utils::{
    SquareSet, BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS,
};

/// Push every target of `piece` standing on `from` into `out`.
///
/// For a king this is plain one-step adjacency; castling and danger filtering
/// belong to `Position::generate_moves`.
pub fn piece_targets(
    board: &Board,
    from: Square,
    piece: Piece,
    last_move: Option<&LastMove>,
    attack_only: bool,
    out: &mut Vec<Square>,
) {
    match piece.kind {
        PieceKind::Pawn => pawn_targets(board, from, piece.color, last_move, attack_only, out),
        PieceKind::Knight => step_targets(board, from, piece.color, &KNIGHT_OFFSETS, attack_only, out),
        PieceKind::King => step_targets(board, from, piece.color, &KING_OFFSETS, attack_only, out),
        PieceKind::Bishop => slide_targets(board, from, piece.color, &BISHOP_DIRECTIONS, attack_only, out),
        PieceKind::Rook => slide_targets(board, from, piece.color, &ROOK_DIRECTIONS, attack_only, out),
        PieceKind::Queen => slide_targets(board, from, piece.color, &QUEEN_DIRECTIONS, attack_only, out),
    }
}

/// Union of the attack-only targets of every piece of color `by`.
pub fn attacked_squares(board: &Board, by: Color) -> SquareSet {
    let mut attacked = SquareSet::EMPTY;
    let mut buf = Vec::with_capacity(28);
    for (sq, piece) in board.pieces_of(by) {
        buf.clear();
        piece_targets(board, sq, piece, None, true, &mut buf);
        attacked.extend(buf.iter().copied());
    }
    attacked
}

fn pawn_targets(
    board: &Board,
    from: Square,
    color: Color,
    last_move: Option<&LastMove>,
    attack_only: bool,
    out: &mut Vec<Square>,
) {
    let forward = color.forward();

    if !attack_only {
        // Single push, then double push from the starting rank
        if let Some(one) = from.offset(forward, 0) {
            if board.is_empty(one) {
                out.push(one);
                if from.rank() == color.pawn_rank() {
                    if let Some(two) = one.offset(forward, 0) {
                        if board.is_empty(two) {
                            out.push(two);
                        }
                    }
                }
            }
        }
    }

    // Diagonals
    for df in [-1i8, 1] {
        if let Some(to) = from.offset(forward, df) {
            if attack_only {
                out.push(to);
            } else if matches!(board.get(to), Some(target) if target.color != color) {
                out.push(to);
            }
        }
    }

    // En passant lands on an empty diagonal, already covered in attack-only mode
    if !attack_only {
        if let Some(to) = en_passant_target(board, from, color, last_move) {
            out.push(to);
        }
    }
}

/// Landing square of an en passant capture by the `color` pawn on `from`, if
/// the last move was an enemy double step ending right beside it.
pub fn en_passant_target(
    board: &Board,
    from: Square,
    color: Color,
    last_move: Option<&LastMove>,
) -> Option<Square> {
    let last = last_move?;
    let enemy_pawn = Piece::new(color.opposite(), PieceKind::Pawn);
    if last.piece != enemy_pawn || !last.is_double_step() {
        return None;
    }
    if last.to.rank() != from.rank() || last.to.file().abs_diff(from.file()) != 1 {
        return None;
    }
    if board.get(last.to) != Some(enemy_pawn) {
        return None;
    }
    let landing = last.to.offset(color.forward(), 0)?;
    board.is_empty(landing).then_some(landing)
}

fn step_targets(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    attack_only: bool,
    out: &mut Vec<Square>,
) {
    for &(dr, df) in offsets {
        let Some(to) = from.offset(dr, df) else {
            continue;
        };
        match board.get(to) {
            Some(other) if other.color == color && !attack_only => {}
            _ => out.push(to),
        }
    }
}

fn slide_targets(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    attack_only: bool,
    out: &mut Vec<Square>,
) {
    for &(dr, df) in directions {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, df) {
            match board.get(to) {
                None => out.push(to),
                Some(blocker) => {
                    // Capture (or guard, in attack-only mode) then stop the ray
                    if attack_only || blocker.color != color {
                        out.push(to);
                    }
                    break;
                }
            }
            cur = to;
        }
    }
}
