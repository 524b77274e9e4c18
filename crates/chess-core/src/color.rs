//! Player color representation.

use serde::{Deserialize, Serialize};

/// Represents the two players in chess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    #[default]
    White = 0,
    Black = 1,
}

impl Color {
    /// Side to move after `ply` half-moves from the initial position.
    #[inline]
    pub const fn from_ply(ply: usize) -> Self {
        if ply % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Rank step a pawn of this color takes when advancing.
    ///
    /// Rank 0 is Black's back rank, so White advances toward lower ranks.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Returns the back rank for this color (7 for White, 0 for Black).
    #[inline]
    pub const fn home_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Rank this color's pawns start on.
    #[inline]
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Rank a pawn lands on after a double push.
    #[inline]
    pub const fn double_push_rank(self) -> u8 {
        match self {
            Color::White => 4,
            Color::Black => 3,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_ply() {
        assert_eq!(Color::from_ply(0), Color::White);
        assert_eq!(Color::from_ply(1), Color::Black);
        assert_eq!(Color::from_ply(6), Color::White);
    }

    #[test]
    fn ranks_follow_board_orientation() {
        assert_eq!(Color::White.home_rank(), 7);
        assert_eq!(Color::Black.home_rank(), 0);
        assert_eq!(Color::White.pawn_rank(), 6);
        assert_eq!(Color::Black.pawn_rank(), 1);
        assert_eq!(Color::White.double_push_rank(), 4);
        assert_eq!(Color::Black.double_push_rank(), 3);
        assert_eq!(Color::White.forward(), -1);
        assert_eq!(Color::Black.forward(), 1);
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&Color::Black).unwrap();
        assert_eq!(json, "\"black\"");
        let parsed: Color = serde_json::from_str("\"white\"").unwrap();
        assert_eq!(parsed, Color::White);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Color::White), "White");
        assert_eq!(format!("{}", Color::Black), "Black");
    }
}
