//! Board grid and mutable board state.

use std::fmt;

use chess_core::{Color, ColoredPiece, Piece, Square};
use thiserror::Error;

/// Character used for an empty cell in the board-cell alphabet.
pub const EMPTY_CELL: char = '.';

/// File the king starts on.
pub const KING_FILE: u8 = 4;

const STARTING_ROWS: [&str; 8] = [
    "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
    "RNBQKBNR",
];

/// Errors that can occur when building a board from cell rows.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("expected 8 ranks, got {0}")]
    WrongRankCount(usize),

    #[error("rank {rank} has {len} cells, expected 8")]
    WrongRankLength { rank: usize, len: usize },

    #[error("invalid cell character '{0}'")]
    InvalidCell(char),
}

/// Which side of the board a castling move goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    /// O-O
    Kingside,
    /// O-O-O
    Queenside,
}

impl CastlingSide {
    /// File the king lands on.
    #[inline]
    pub const fn king_to_file(self) -> u8 {
        match self {
            CastlingSide::Kingside => 6,
            CastlingSide::Queenside => 2,
        }
    }

    /// File the rook starts on.
    #[inline]
    pub const fn rook_from_file(self) -> u8 {
        match self {
            CastlingSide::Kingside => 7,
            CastlingSide::Queenside => 0,
        }
    }

    /// File the rook lands on.
    #[inline]
    pub const fn rook_to_file(self) -> u8 {
        match self {
            CastlingSide::Kingside => 5,
            CastlingSide::Queenside => 3,
        }
    }

    pub const fn notation(self) -> &'static str {
        match self {
            CastlingSide::Kingside => "O-O",
            CastlingSide::Queenside => "O-O-O",
        }
    }
}

/// Records which kings and rooks have left their home squares.
///
/// Flags only ever go from unset to set; [`BoardState::reset`] is the one
/// way to clear them. They are bookkeeping for callers and are never used to
/// refuse a castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_KING_MOVED: u8 = 0b00_0001;
    pub const WHITE_ROOK_A_MOVED: u8 = 0b00_0010;
    pub const WHITE_ROOK_H_MOVED: u8 = 0b00_0100;
    pub const BLACK_KING_MOVED: u8 = 0b00_1000;
    pub const BLACK_ROOK_A_MOVED: u8 = 0b01_0000;
    pub const BLACK_ROOK_H_MOVED: u8 = 0b10_0000;

    #[inline]
    const fn king_flag(color: Color) -> u8 {
        match color {
            Color::White => Self::WHITE_KING_MOVED,
            Color::Black => Self::BLACK_KING_MOVED,
        }
    }

    #[inline]
    const fn rook_flag(color: Color, side: CastlingSide) -> u8 {
        match (color, side) {
            (Color::White, CastlingSide::Queenside) => Self::WHITE_ROOK_A_MOVED,
            (Color::White, CastlingSide::Kingside) => Self::WHITE_ROOK_H_MOVED,
            (Color::Black, CastlingSide::Queenside) => Self::BLACK_ROOK_A_MOVED,
            (Color::Black, CastlingSide::Kingside) => Self::BLACK_ROOK_H_MOVED,
        }
    }

    /// Returns true once the given side's king has moved.
    #[inline]
    pub const fn king_moved(self, color: Color) -> bool {
        (self.0 & Self::king_flag(color)) != 0
    }

    /// Returns true once the a-file rook of the given side has left its corner.
    #[inline]
    pub const fn rook_a_moved(self, color: Color) -> bool {
        (self.0 & Self::rook_flag(color, CastlingSide::Queenside)) != 0
    }

    /// Returns true once the h-file rook of the given side has left its corner.
    #[inline]
    pub const fn rook_h_moved(self, color: Color) -> bool {
        (self.0 & Self::rook_flag(color, CastlingSide::Kingside)) != 0
    }

    #[inline]
    pub fn set_king_moved(&mut self, color: Color) {
        self.0 |= Self::king_flag(color);
    }

    #[inline]
    pub fn set_rook_moved(&mut self, color: Color, side: CastlingSide) {
        self.0 |= Self::rook_flag(color, side);
    }

    /// Returns the raw flags.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

/// A move whose origin square has been located on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedMove {
    pub from: Square,
    pub to: Square,
    pub piece: ColoredPiece,
    pub castling: Option<CastlingSide>,
}

impl fmt::Display for ResolvedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.castling {
            Some(side) => write!(f, "{}", side.notation()),
            None => write!(f, "{}{}", self.from, self.to),
        }
    }
}

/// An 8x8 grid of cells indexed by `(rank, file)`.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<ColoredPiece>; 8]; 8],
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting position.
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for (rank, row) in STARTING_ROWS.iter().enumerate() {
            for (file, c) in row.chars().enumerate() {
                board.cells[rank][file] = ColoredPiece::from_char(c);
            }
        }
        board
    }

    /// Builds a board from eight rows of cell characters, rank 0 first.
    ///
    /// Uses the board-cell alphabet: `KQRBNP` for White, `kqrbnp` for Black
    /// and `.` for an empty cell.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        if rows.len() != 8 {
            return Err(BoardError::WrongRankCount(rows.len()));
        }

        let mut board = Board::empty();
        for (rank, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != 8 {
                return Err(BoardError::WrongRankLength { rank, len });
            }
            for (file, c) in row.chars().enumerate() {
                board.cells[rank][file] = match c {
                    EMPTY_CELL => None,
                    _ => Some(ColoredPiece::from_char(c).ok_or(BoardError::InvalidCell(c))?),
                };
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<ColoredPiece> {
        self.cells[square.rank() as usize][square.file() as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Writes a cell, overwriting whatever was there.
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<ColoredPiece>) {
        self.cells[square.rank() as usize][square.file() as usize] = piece;
    }

    /// Empties a cell and returns its previous contents.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<ColoredPiece> {
        self.cells[square.rank() as usize][square.file() as usize].take()
    }

    /// Returns the board-cell character for a square.
    pub fn cell_char(&self, square: Square) -> char {
        self.piece_at(square)
            .map_or(EMPTY_CELL, ColoredPiece::to_char)
    }

    /// Returns the rows of cell characters, rank 0 first.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or(EMPTY_CELL, ColoredPiece::to_char))
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows().join("\n"))
    }
}

/// The board plus castling bookkeeping for one training session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    board: Board,
    castling: CastlingRights,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    /// Creates the standard starting position with no castling flags set.
    pub fn new() -> Self {
        BoardState {
            board: Board::starting(),
            castling: CastlingRights::NONE,
        }
    }

    /// Wraps an arbitrary board with no castling flags set.
    pub fn from_board(board: Board) -> Self {
        BoardState {
            board,
            castling: CastlingRights::NONE,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<ColoredPiece> {
        self.board.piece_at(square)
    }

    /// Applies a resolved move. Captures are realized by overwriting the
    /// destination cell.
    pub fn apply(&mut self, mv: &ResolvedMove) {
        let color = mv.piece.color;

        if let Some(side) = mv.castling {
            self.castle(color, side);
            return;
        }

        let moving = self.board.take(mv.from).unwrap_or(mv.piece);
        self.board.set(mv.to, Some(moving));

        match moving.piece {
            Piece::King => self.castling.set_king_moved(moving.color),
            Piece::Rook if mv.from.rank() == moving.color.home_rank() => {
                match mv.from.file() {
                    0 => self
                        .castling
                        .set_rook_moved(moving.color, CastlingSide::Queenside),
                    7 => self
                        .castling
                        .set_rook_moved(moving.color, CastlingSide::Kingside),
                    _ => {}
                }
            }
            _ => {}
        }
    }

    fn castle(&mut self, color: Color, side: CastlingSide) {
        let rank = color.home_rank();
        let square = |file: u8| Square::from_coords(rank, file);

        self.board.set(square(KING_FILE), None);
        self.board.set(
            square(side.king_to_file()),
            Some(ColoredPiece::new(Piece::King, color)),
        );
        self.board.set(square(side.rook_from_file()), None);
        self.board.set(
            square(side.rook_to_file()),
            Some(ColoredPiece::new(Piece::Rook, color)),
        );
        self.castling.set_king_moved(color);
    }

    /// Restores the starting position and clears all castling flags.
    pub fn reset(&mut self) {
        self.board = Board::starting();
        self.castling = CastlingRights::NONE;
    }
}
