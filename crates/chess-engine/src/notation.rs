//! Move-text parsing.
//!
//! Turns a short algebraic move such as `"Nbd2"`, `"exd5+"` or `"O-O"` into a
//! [`MoveIntent`]: the piece, its destination, and whatever origin hints the
//! text carries. No board lookups happen here; see [`crate::locator`] for that.
//!
//! Grammar: `[Piece][disambiguation]['x'][Square][annotations]` or a castling
//! token. Annotations (`+ # ! ?`) are discarded wherever they appear.

use chess_core::{file_from_char, rank_from_char, Color, ColoredPiece, Piece, Square};
use thiserror::Error;

use crate::board::{CastlingSide, KING_FILE};

const ANNOTATIONS: [char; 4] = ['+', '#', '!', '?'];
const CAPTURE_MARKER: char = 'x';

/// Errors that can occur when parsing move text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("move text too short to name a destination: '{0}'")]
    TooShort(String),

    #[error("invalid destination square '{0}'")]
    InvalidSquare(String),

    #[error("unknown piece letter '{0}'")]
    UnknownPiece(char),

    /// A disambiguation digit outside `1`-`8`, as in `e9xd5`. Such a hint
    /// could never match a square, so it is rejected here instead of
    /// surfacing later as a missing origin.
    #[error("invalid disambiguation rank '{0}'")]
    InvalidHint(char),
}

/// A parsed move, before its origin square is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveIntent {
    pub piece: Piece,
    pub color: Color,
    pub to: Square,
    pub capture: bool,
    pub from_file: Option<u8>,
    pub from_rank: Option<u8>,
    pub castling: Option<CastlingSide>,
}

impl MoveIntent {
    /// Castling intent for `color`: the king goes from the e-file to its
    /// castled file on the home rank.
    pub const fn castle(side: CastlingSide, color: Color) -> Self {
        MoveIntent {
            piece: Piece::King,
            color,
            to: Square::from_coords(color.home_rank(), side.king_to_file()),
            capture: false,
            from_file: None,
            from_rank: None,
            castling: Some(side),
        }
    }

    #[inline]
    pub const fn colored_piece(&self) -> ColoredPiece {
        ColoredPiece::new(self.piece, self.color)
    }

    /// Returns true if `square` agrees with the file and rank hints.
    #[inline]
    pub fn matches_hints(&self, square: Square) -> bool {
        self.from_file.map_or(true, |file| square.file() == file)
            && self.from_rank.map_or(true, |rank| square.rank() == rank)
    }

    /// King's starting square for a castling intent.
    pub(crate) const fn castling_origin(&self) -> Square {
        Square::from_coords(self.color.home_rank(), KING_FILE)
    }
}

/// Parses move text for the given side to move.
pub fn parse(text: &str, side_to_move: Color) -> Result<MoveIntent, ParseError> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| !ANNOTATIONS.contains(c))
        .collect();

    if let Some(side) = castling_side(&cleaned) {
        return Ok(MoveIntent::castle(side, side_to_move));
    }

    let (piece, body) = match cleaned.chars().next() {
        Some(c) if c.is_uppercase() => {
            let piece = Piece::from_notation_char(c).ok_or(ParseError::UnknownPiece(c))?;
            (piece, &cleaned[c.len_utf8()..])
        }
        _ => (Piece::Pawn, cleaned.as_str()),
    };

    let capture = body.contains(CAPTURE_MARKER);
    let chars: Vec<char> = body.chars().filter(|&c| c != CAPTURE_MARKER).collect();
    if chars.len() < 2 {
        return Err(ParseError::TooShort(text.to_string()));
    }

    let (hints, dest) = chars.split_at(chars.len() - 2);
    let to = match (file_from_char(dest[0]), rank_from_char(dest[1])) {
        (Some(file), Some(rank)) => Square::from_coords(rank, file),
        _ => return Err(ParseError::InvalidSquare(dest.iter().collect())),
    };

    let mut from_file = None;
    let mut from_rank = None;
    for &c in hints {
        if let Some(file) = file_from_char(c) {
            from_file = Some(file);
        } else if c.is_ascii_digit() {
            from_rank = Some(rank_from_char(c).ok_or(ParseError::InvalidHint(c))?);
        }
    }

    Ok(MoveIntent {
        piece,
        color: side_to_move,
        to,
        capture,
        from_file,
        from_rank,
        castling: None,
    })
}

/// Recognizes `O-O` / `O-O-O`, accepting zeros and either case.
fn castling_side(text: &str) -> Option<CastlingSide> {
    let normalized: String = text
        .chars()
        .map(|c| if c == '0' { 'O' } else { c.to_ascii_uppercase() })
        .collect();
    match normalized.as_str() {
        "O-O" => Some(CastlingSide::Kingside),
        "O-O-O" => Some(CastlingSide::Queenside),
        _ => None,
    }
}
