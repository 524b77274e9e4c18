//! Text rendering of the board for the terminal.

use chess_core::{rank_to_char, Color, ColoredPiece, Piece, Square};
use chess_engine::board::EMPTY_CELL;
use chess_engine::Board;

const FILE_LABELS: &str = "   a b c d e f g h";

/// How pieces are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PieceStyle {
    /// Chess glyphs, `·` for empty squares.
    #[default]
    Unicode,
    /// Board-cell letters, `.` for empty squares.
    Ascii,
}

impl PieceStyle {
    pub fn from_unicode_flag(unicode: bool) -> Self {
        if unicode {
            PieceStyle::Unicode
        } else {
            PieceStyle::Ascii
        }
    }

    /// The character drawn for a cell.
    pub fn glyph(self, cell: Option<ColoredPiece>) -> char {
        match self {
            PieceStyle::Ascii => cell.map_or(EMPTY_CELL, ColoredPiece::to_char),
            PieceStyle::Unicode => cell.map_or('·', unicode_glyph),
        }
    }
}

fn unicode_glyph(cp: ColoredPiece) -> char {
    match (cp.color, cp.piece) {
        (Color::White, Piece::King) => '♔',
        (Color::White, Piece::Queen) => '♕',
        (Color::White, Piece::Rook) => '♖',
        (Color::White, Piece::Bishop) => '♗',
        (Color::White, Piece::Knight) => '♘',
        (Color::White, Piece::Pawn) => '♙',
        (Color::Black, Piece::King) => '♚',
        (Color::Black, Piece::Queen) => '♛',
        (Color::Black, Piece::Rook) => '♜',
        (Color::Black, Piece::Bishop) => '♝',
        (Color::Black, Piece::Knight) => '♞',
        (Color::Black, Piece::Pawn) => '♟',
    }
}

/// Renders the board from White's side inside a box, with file letters
/// above and below and rank numbers on both sides.
pub fn render_board(board: &Board, style: PieceStyle) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(FILE_LABELS);
    out.push('\n');
    out.push_str("  ┌─────────────────┐\n");
    for rank in 0..8u8 {
        let label = rank_to_char(rank);
        out.push(label);
        out.push_str(" │ ");
        for file in 0..8u8 {
            out.push(style.glyph(board.piece_at(Square::from_coords(rank, file))));
            out.push(' ');
        }
        out.push('│');
        out.push(' ');
        out.push(label);
        out.push('\n');
    }
    out.push_str("  └─────────────────┘\n");
    out.push_str(FILE_LABELS);
    out.push('\n');
    out
}
