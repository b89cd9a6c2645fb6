// Mapping dei quadrati: (rank, file) con rank 0 = ottava traversa (lato del nero)
// e rank 7 = prima traversa (lato del bianco). file 0 = colonna a.
// Usiamo questo mapping coerente per tutte le operazioni, serializzazione inclusa.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::error::PositionError;

pub const START_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank holding this side's king and rooks at the start.
    pub fn home_rank(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Rank from which pawns may advance two squares.
    pub fn pawn_rank(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Rank on which this side's pawns promote.
    pub fn promotion_rank(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Rank delta of a pawn step: White moves up the board (towards rank 0).
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;
    fn not(self) -> Color {
        self.opposite()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl PieceKind {
    /// Kinds a pawn may promote to, in the usual order of preference.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Parse a lowercase or uppercase piece letter, ignoring its color.
    pub fn from_char(ch: char) -> Option<PieceKind> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase letter for this kind.
    pub fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn is_promotion_target(self) -> bool {
        Self::PROMOTIONS.contains(&self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn from_fen_char(ch: char) -> Option<Piece> {
        let kind = PieceKind::from_char(ch)?;
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece { color, kind })
    }

    pub fn fen_char(self) -> char {
        let ch = self.kind.to_char();
        match self.color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }

    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

/// A square on the board. Always in-bounds: the only constructors check ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    pub const fn new(rank: usize, file: usize) -> Option<Square> {
        if rank < 8 && file < 8 {
            Some(Square {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    pub fn from_index(idx: usize) -> Option<Square> {
        if idx < 64 {
            Square::new(idx / 8, idx % 8)
        } else {
            None
        }
    }

    pub fn rank(self) -> usize {
        self.rank as usize
    }

    pub fn file(self) -> usize {
        self.file as usize
    }

    pub fn index(self) -> usize {
        self.rank() * 8 + self.file()
    }

    /// Step by a (rank, file) delta; `None` when the step leaves the board.
    #[inline]
    pub fn offset(self, dr: i8, df: i8) -> Option<Square> {
        let rank = self.rank as i8 + dr;
        let file = self.file as i8 + df;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Square::new(rank as usize, file as usize)
        } else {
            None
        }
    }

    /// Parse algebraic notation (e.g. "e2" -> rank 6, file 4).
    pub fn from_algebraic(s: &str) -> Result<Square, PositionError> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(PositionError::InvalidSquare(s.to_string()));
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(PositionError::InvalidSquare(s.to_string()));
        }
        Square::new((b'8' - rank) as usize, (file - b'a') as usize)
            .ok_or_else(|| PositionError::InvalidSquare(s.to_string()))
    }
}

impl FromStr for Square {
    type Err = PositionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_algebraic(s)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file_char = (b'a' + self.file) as char;
        let rank_char = (b'8' - self.rank) as char;
        write!(f, "{}{}", file_char, rank_char)
    }
}

/// The 8x8 grid. Row 0 is the top of the board as seen by White.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard starting array.
    pub fn standard() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        let mut board = Board::empty();
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            board.squares[0][file] = Some(Piece::new(Color::Black, kind));
            board.squares[1][file] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board.squares[6][file] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board.squares[7][file] = Some(Piece::new(Color::White, kind));
        }
        board
    }

    /// Parse the piece-placement field of a FEN string.
    pub fn from_placement(placement: &str) -> Result<Board, PositionError> {
        let invalid = |why: &str| PositionError::InvalidPlacement(format!("{} ({})", placement, why));
        let mut board = Board::empty();
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(invalid("expected 8 ranks"));
        }
        for (rank, rank_part) in ranks.iter().enumerate() {
            let mut file = 0usize;
            for ch in rank_part.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(invalid("bad empty-square count"));
                    }
                    file += skip as usize;
                } else {
                    let piece = Piece::from_fen_char(ch).ok_or_else(|| invalid("invalid piece char"))?;
                    let sq = Square::new(rank, file).ok_or_else(|| invalid("rank overflows"))?;
                    board.put(sq, piece);
                    file += 1;
                }
                if file > 8 {
                    return Err(invalid("rank overflows"));
                }
            }
            if file != 8 {
                return Err(invalid("rank is short"));
            }
        }
        Ok(board)
    }

    /// Serialize the placement field; ranks top to bottom, digits for empty runs.
    pub fn to_placement(&self) -> String {
        let mut s = String::with_capacity(72);
        for (rank, row) in self.squares.iter().enumerate() {
            let mut empty = 0;
            for cell in row {
                match cell {
                    Some(piece) => {
                        if empty > 0 {
                            s.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        s.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                s.push(char::from(b'0' + empty));
            }
            if rank < 7 {
                s.push('/');
            }
        }
        s
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.rank()][sq.file()]
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    #[inline]
    pub fn put(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.squares[sq.rank()][sq.file()].replace(piece)
    }

    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.rank()][sq.file()].take()
    }

    /// Locate a king. White is searched from the bottom up, Black from the top
    /// down, since kings usually sit near their own back rank.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        let hit = |rank: usize| {
            (0..8).find_map(|file| {
                let sq = Square::new(rank, file)?;
                (self.get(sq) == Some(king)).then_some(sq)
            })
        };
        match color {
            Color::White => (0..8).rev().find_map(hit),
            Color::Black => (0..8).find_map(hit),
        }
    }

    /// Every occupied square with its piece, top-left first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..64).filter_map(move |idx| {
            let sq = Square::from_index(idx)?;
            self.get(sq).map(|piece| (sq, piece))
        })
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn count(&self, piece: Piece) -> usize {
        self.pieces().filter(|&(_, p)| p == piece).count()
    }
}

impl Index<usize> for Board {
    type Output = [Option<Piece>; 8];
    fn index(&self, rank: usize) -> &Self::Output {
        &self.squares[rank]
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;
    fn index(&self, sq: Square) -> &Self::Output {
        &self.squares[sq.rank()][sq.file()]
    }
}

// Simple display (diagramma testuale, traversa 8 in alto)
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, row) in self.squares.iter().enumerate() {
            for cell in row {
                match cell {
                    Some(piece) => write!(f, "{} ", piece.fen_char())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f, " {}", 8 - rank)?;
        }
        write!(f, "a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_placement_round_trips() {
        let board = Board::from_placement(START_PLACEMENT).unwrap();
        assert_eq!(board.to_placement(), START_PLACEMENT);
        assert_eq!(board[7][4], Some(Piece::new(Color::White, PieceKind::King)));
        assert_eq!(board[0][3], Some(Piece::new(Color::Black, PieceKind::Queen)));
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn malformed_placements_are_rejected() {
        for bad in [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNRR",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN",
            "rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR",
            "rnbqkbnr/pppppppp/08/8/8/8/PPPPPPPP/RNBQKBNR",
        ] {
            assert!(
                matches!(Board::from_placement(bad), Err(PositionError::InvalidPlacement(_))),
                "accepted {}",
                bad
            );
        }
    }

    #[test]
    fn algebraic_matches_rank_file_mapping() {
        let e2 = Square::from_algebraic("e2").unwrap();
        assert_eq!((e2.rank(), e2.file()), (6, 4));
        let a8: Square = "a8".parse().unwrap();
        assert_eq!((a8.rank(), a8.file()), (0, 0));
        assert_eq!(Square::new(7, 7).unwrap().to_string(), "h1");
        assert!(Square::from_algebraic("i1").is_err());
        assert!(Square::from_algebraic("a9").is_err());
        assert!(Square::from_algebraic("e").is_err());
    }

    #[test]
    fn offsets_stop_at_the_edge() {
        let a1 = Square::new(7, 0).unwrap();
        assert_eq!(a1.offset(1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
        assert_eq!(a1.offset(-1, 1), Square::new(6, 1));
        assert_eq!(Square::new(8, 0), None);
    }

    #[test]
    fn find_king_locates_both_colors() {
        let board = Board::from_placement("4k3/8/8/8/8/8/8/7K").unwrap();
        assert_eq!(board.find_king(Color::White), Square::new(7, 7));
        assert_eq!(board.find_king(Color::Black), Square::new(0, 4));
        let empty = Board::empty();
        assert_eq!(empty.find_king(Color::White), None);
    }
}
