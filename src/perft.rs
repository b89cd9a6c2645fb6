//! Perft: count leaf nodes of the legal move tree to validate move generation.
//!
//! A promotion is one move per piece choice, so it contributes four children.

use crate::board::{PieceKind, Square};
use crate::position::{MoveOutcome, Position};

/// Leaf count at `depth` plies below `pos`.
pub fn perft(pos: &Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    pos.all_legal_moves()
        .into_iter()
        .map(|(from, to)| {
            children(pos, from, to)
                .iter()
                .map(|child| perft(child, depth - 1))
                .sum::<u64>()
        })
        .sum()
}

/// Per-root-move counts, sorted by move text. Handy for diffing against
/// another engine.
pub fn divide(pos: &Position, depth: u8) -> Vec<(String, u64)> {
    let mut out = Vec::new();
    if depth == 0 {
        return out;
    }
    for (from, to) in pos.all_legal_moves() {
        let kids = children(pos, from, to);
        let promotes = kids.len() > 1;
        for (child, kind) in kids.iter().zip(PieceKind::PROMOTIONS) {
            let mut name = format!("{}{}", from, to);
            if promotes {
                name.push(kind.to_char());
            }
            out.push((name, perft(child, depth - 1)));
        }
    }
    out.sort();
    out
}

/// Positions reached by playing `from -> to`, one per promotion choice.
fn children(pos: &Position, from: Square, to: Square) -> Vec<Position> {
    let mut next = pos.clone();
    match next.make_move(from, to) {
        Ok(MoveOutcome::Applied) => vec![next],
        Ok(MoveOutcome::PromotionPending(_)) => PieceKind::PROMOTIONS
            .iter()
            .filter_map(|&kind| {
                let mut promoted = next.clone();
                promoted.complete_promotion(kind).ok()?;
                Some(promoted)
            })
            .collect(),
        Err(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_shallow_counts() {
        let pos = Position::new();
        assert_eq!(perft(&pos, 0), 1);
        assert_eq!(perft(&pos, 1), 20);
        assert_eq!(perft(&pos, 2), 400);
    }

    #[test]
    fn promotion_counts_four_ways() {
        let pos = Position::from_fen("8/P6k/8/8/8/8/8/K7 w - - 0 1").unwrap();
        let split = divide(&pos, 1);
        let promos: Vec<&str> = split
            .iter()
            .filter(|(m, _)| m.starts_with("a7a8"))
            .map(|(m, _)| m.as_str())
            .collect();
        assert_eq!(promos, vec!["a7a8b", "a7a8n", "a7a8q", "a7a8r"]);
        // 3 king moves plus 4 promotions
        assert_eq!(perft(&pos, 1), 7);
    }
}
