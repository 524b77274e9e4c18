//! Board square representation.
//!
//! Squares use board-grid coordinates: rank 0 is Black's back rank (the
//! "8" rank in algebraic notation) and rank 7 is White's back rank ("1").
//! File 0 is the 'a' file.

use std::fmt;

/// A square on the chess board, indexed 0-63 as `rank * 8 + file`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from grid coordinates (each 0-7).
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Creates a square from coordinates already known to be on the board.
    ///
    /// Out-of-range coordinates are masked to 0-7.
    #[inline]
    pub const fn from_coords(rank: u8, file: u8) -> Self {
        debug_assert!(rank < 8 && file < 8);
        Square((rank & 7) * 8 + (file & 7))
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    ///
    /// The file letter may be either case.
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file = file_from_char(chars.next()?)?;
        let rank = rank_from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Square::new(rank, file)
    }

    /// Returns the grid rank (0 = Black's back rank).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Returns the file (0 = 'a').
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Returns `(rank, file)`.
    #[inline]
    pub const fn coords(self) -> (u8, u8) {
        (self.rank(), self.file())
    }

    /// Returns the square displaced by `(dr, df)`, or `None` off the board.
    #[inline]
    pub const fn offset(self, dr: i8, df: i8) -> Option<Self> {
        let rank = self.rank() as i8 + dr;
        let file = self.file() as i8 + df;
        if rank < 0 || rank > 7 || file < 0 || file > 7 {
            return None;
        }
        Some(Square(rank as u8 * 8 + file as u8))
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        format!("{}{}", file_to_char(self.file()), rank_to_char(self.rank()))
    }

    /// Iterates over all 64 squares, rank 0 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    // Common squares
    pub const A8: Square = Square(0);
    pub const E8: Square = Square(4);
    pub const H8: Square = Square(7);
    pub const A1: Square = Square(56);
    pub const E1: Square = Square(60);
    pub const H1: Square = Square(63);
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

/// Converts a file letter ('a'-'h', either case) to a file index.
#[inline]
pub const fn file_from_char(c: char) -> Option<u8> {
    match c.to_ascii_lowercase() {
        c @ 'a'..='h' => Some(c as u8 - b'a'),
        _ => None,
    }
}

/// Converts a rank digit ('1'-'8') to a grid rank ('8' -> 0, '1' -> 7).
#[inline]
pub const fn rank_from_char(c: char) -> Option<u8> {
    match c {
        '1'..='8' => Some(b'8' - c as u8),
        _ => None,
    }
}

#[inline]
pub const fn file_to_char(file: u8) -> char {
    (b'a' + file) as char
}

#[inline]
pub const fn rank_to_char(rank: u8) -> char {
    (b'8' - rank) as char
}

/// Maps a square token such as `"e4"` to `(rank, file)`.
pub fn square_to_coords(square: &str) -> Option<(u8, u8)> {
    Square::from_algebraic(square).map(Square::coords)
}

/// Maps `(rank, file)` back to its square token.
pub fn coords_to_square(rank: u8, file: u8) -> Option<String> {
    Square::new(rank, file).map(Square::to_algebraic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn square_new() {
        let e4 = Square::new(4, 4).unwrap();
        assert_eq!(e4.rank(), 4);
        assert_eq!(e4.file(), 4);
        assert_eq!(e4, Square::from_coords(4, 4));
        assert_eq!(Square::new(8, 0), None);
        assert_eq!(Square::new(0, 8), None);
        assert_eq!(Square::from_coords(7, 4), Square::E1);
    }

    #[test]
    fn square_from_algebraic() {
        assert_eq!(Square::from_algebraic("a1"), Some(Square::A1));
        assert_eq!(Square::from_algebraic("h8"), Some(Square::H8));
        assert_eq!(Square::from_algebraic("E1"), Some(Square::E1));
        assert_eq!(square_to_coords("e4"), Some((4, 4)));
        assert_eq!(square_to_coords("g1"), Some((7, 6)));
        assert_eq!(Square::from_algebraic("i1"), None);
        assert_eq!(Square::from_algebraic("a9"), None);
        assert_eq!(Square::from_algebraic("a0"), None);
        assert_eq!(Square::from_algebraic("e44"), None);
        assert_eq!(Square::from_algebraic(""), None);
    }

    #[test]
    fn square_to_algebraic() {
        assert_eq!(Square::A8.to_algebraic(), "a8");
        assert_eq!(Square::E1.to_algebraic(), "e1");
        assert_eq!(coords_to_square(5, 5).as_deref(), Some("f3"));
        assert_eq!(coords_to_square(8, 5), None);
    }

    #[test]
    fn square_offset() {
        let e4 = Square::new(4, 4).unwrap();
        assert_eq!(e4.offset(-1, 0), Square::new(3, 4));
        assert_eq!(e4.offset(2, 1), Square::new(6, 5));
        assert_eq!(Square::A8.offset(-1, 0), None);
        assert_eq!(Square::H1.offset(0, 1), None);
    }

    #[test]
    fn all_squares_map_both_ways() {
        assert_eq!(Square::all().count(), 64);
        for sq in Square::all() {
            let name = sq.to_algebraic();
            assert_eq!(square_to_coords(&name), Some(sq.coords()));
        }
    }

    proptest! {
        #[test]
        fn coords_round_trip(rank in 0u8..8, file in 0u8..8) {
            let name = coords_to_square(rank, file).unwrap();
            prop_assert_eq!(square_to_coords(&name), Some((rank, file)));
        }

        #[test]
        fn off_board_coords_rejected(rank in 8u8.., file in 0u8..8) {
            prop_assert!(coords_to_square(rank, file).is_none());
            prop_assert!(coords_to_square(file, rank).is_none());
        }
    }
}
