// Square sets, bit iterators and offset tables for move generation
//
// Square index mapping: index = rank * 8 + file, with rank 0 the top of the
// board (Black's back rank) and rank 7 the bottom (White's back rank).

use crate::board::Square;

// Offset tables as (rank delta, file delta)
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

// Bit operations
#[inline]
pub fn pop_lsb(bb: &mut u64) -> Option<usize> {
    if *bb == 0 {
        return None;
    }
    let lsb = bb.trailing_zeros() as usize;
    *bb &= *bb - 1;
    Some(lsb)
}

pub struct BitIter {
    bb: u64,
}
impl Iterator for BitIter {
    type Item = usize;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        pop_lsb(&mut self.bb)
    }
}
#[inline]
pub fn iter_bits(bb: u64) -> BitIter {
    BitIter { bb }
}

/// A set of board squares packed into a 64-bit mask.
///
/// Used for attacked ("danger") squares, where membership tests dominate and
/// duplicates from overlapping attackers must collapse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SquareSet(u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    #[inline]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= 1u64 << sq.index();
    }

    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.0 & (1u64 << sq.index()) != 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn bits(&self) -> u64 {
        self.0
    }

    /// Squares in index order (top-left to bottom-right).
    pub fn iter(&self) -> impl Iterator<Item = Square> {
        iter_bits(self.0).filter_map(Square::from_index)
    }
}

impl Extend<Square> for SquareSet {
    fn extend<I: IntoIterator<Item = Square>>(&mut self, iter: I) {
        for sq in iter {
            self.insert(sq);
        }
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        set.extend(iter);
        set
    }
}

impl std::ops::BitOr for SquareSet {
    type Output = SquareSet;
    fn bitor(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for SquareSet {
    fn bitor_assign(&mut self, rhs: SquareSet) {
        self.0 |= rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_lsb_walks_bits_low_to_high() {
        let mut bb = 0b1010_0001u64;
        assert_eq!(pop_lsb(&mut bb), Some(0));
        assert_eq!(pop_lsb(&mut bb), Some(5));
        assert_eq!(pop_lsb(&mut bb), Some(7));
        assert_eq!(pop_lsb(&mut bb), None);
    }

    #[test]
    fn square_set_collapses_duplicates() {
        let e4 = Square::new(4, 4).unwrap();
        let h1 = Square::new(7, 7).unwrap();
        let set: SquareSet = [e4, h1, e4].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(e4));
        assert!(set.contains(h1));
        assert!(!set.contains(Square::new(0, 0).unwrap()));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![e4, h1]);
    }

    #[test]
    fn offset_tables_have_no_duplicates() {
        for table in [&KNIGHT_OFFSETS[..], &KING_OFFSETS[..], &QUEEN_DIRECTIONS[..]] {
            for (i, a) in table.iter().enumerate() {
                assert!(!table[i + 1..].contains(a), "duplicate offset {:?}", a);
            }
        }
    }
}
