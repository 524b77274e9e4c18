//! Origin-square lookup.
//!
//! Given a [`MoveIntent`] and a board, finds the square the moving piece
//! starts from. The search always starts at the destination and walks
//! outward using the piece's movement geometry, so blocked sliders are never
//! found and disambiguation hints act as filters on the candidates.
//!
//! Candidates are visited in a fixed order and the first match wins. Two
//! pieces that could both make the move do not produce an error; the result
//! is deterministic for a given board, not a legality verdict.

use chess_core::{ColoredPiece, Piece, Square};

use crate::board::Board;
use crate::notation::MoveIntent;

/// Knight jumps, in search order.
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

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Queen rays and king steps, row-major around the centre square.
pub const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Finds the origin square for `intent`, or `None` if no piece fits.
pub fn locate(intent: &MoveIntent, board: &Board) -> Option<Square> {
    if intent.castling.is_some() {
        return Some(intent.castling_origin());
    }

    let target = intent.colored_piece();
    match intent.piece {
        Piece::Pawn => locate_pawn(intent, board),
        Piece::Knight => KNIGHT_OFFSETS
            .iter()
            .filter_map(|&(dr, df)| intent.to.offset(dr, df))
            .find(|&sq| board.piece_at(sq) == Some(target) && intent.matches_hints(sq)),
        Piece::Bishop => cast_rays(intent, board, &BISHOP_DIRECTIONS),
        Piece::Rook => cast_rays(intent, board, &ROOK_DIRECTIONS),
        Piece::Queen => cast_rays(intent, board, &ALL_DIRECTIONS),
        Piece::King => ALL_DIRECTIONS
            .iter()
            .filter_map(|&(dr, df)| intent.to.offset(dr, df))
            .find(|&sq| board.piece_at(sq) == Some(target)),
    }
}

/// Walks each ray outward from the destination and stops at the first
/// occupied square, which is the only square on that ray that can match.
fn cast_rays(intent: &MoveIntent, board: &Board, directions: &[(i8, i8)]) -> Option<Square> {
    let target = intent.colored_piece();
    directions.iter().find_map(|&(dr, df)| {
        let mut sq = intent.to;
        while let Some(next) = sq.offset(dr, df) {
            sq = next;
            if let Some(occupant) = board.piece_at(sq) {
                return (occupant == target && intent.matches_hints(sq)).then_some(sq);
            }
        }
        None
    })
}

fn locate_pawn(intent: &MoveIntent, board: &Board) -> Option<Square> {
    let pawn = ColoredPiece::new(Piece::Pawn, intent.color);
    let back = -intent.color.forward();
    let to = intent.to;

    // The capture marker is trusted: the destination's occupant is not checked.
    if intent.capture {
        let file_steps = match intent.from_file {
            Some(file) => [Some(file as i8 - to.file() as i8), None],
            None => [Some(-1), Some(1)],
        };
        let found = file_steps
            .into_iter()
            .flatten()
            .filter_map(|df| to.offset(back, df))
            .find(|&sq| board.piece_at(sq) == Some(pawn));
        if found.is_some() {
            return found;
        }
    }

    let behind = to.offset(back, 0)?;
    if board.piece_at(behind) == Some(pawn) && board.is_empty(to) {
        return Some(behind);
    }

    if to.rank() == intent.color.double_push_rank() {
        let home = Square::from_coords(intent.color.pawn_rank(), to.file());
        if board.piece_at(home) == Some(pawn) && board.is_empty(behind) && board.is_empty(to) {
            return Some(home);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::parse;
    use chess_core::Color;

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn board(rows: [&str; 8]) -> Board {
        Board::from_rows(&rows).unwrap()
    }

    fn find(board: &Board, text: &str, side: Color) -> Option<Square> {
        locate(&parse(text, side).unwrap(), board)
    }

    #[test]
    fn pawn_pushes_from_start() {
        let start = Board::starting();
        assert_eq!(find(&start, "e4", Color::White), Some(sq("e2")));
        assert_eq!(find(&start, "e3", Color::White), Some(sq("e2")));
        assert_eq!(find(&start, "d5", Color::Black), Some(sq("d7")));
        assert_eq!(find(&start, "d6", Color::Black), Some(sq("d7")));
        assert_eq!(find(&start, "e5", Color::White), None);
        assert_eq!(find(&start, "e4", Color::Black), None);
    }

    #[test]
    fn pawn_push_needs_empty_squares() {
        let blocked = board([
            "rnbqkbnr", "pppppppp", "........", "........", "........", "....n...",
            "PPPPPPPP", "RNBQKBNR",
        ]);
        assert_eq!(find(&blocked, "e4", Color::White), None);
        assert_eq!(find(&blocked, "e3", Color::White), None);

        let occupied = board([
            "rnbqkbnr", "pppppppp", "........", "........", "....n...", "........",
            "PPPPPPPP", "RNBQKBNR",
        ]);
        assert_eq!(find(&occupied, "e4", Color::White), None);
    }

    #[test]
    fn pawn_capture_prefers_hinted_file() {
        let position = board([
            "rnbqkbnr", "ppp.pppp", "........", "...p....", "..P.P...", "........",
            "PP.P.PPP", "RNBQKBNR",
        ]);
        assert_eq!(find(&position, "exd5", Color::White), Some(sq("e4")));
        assert_eq!(find(&position, "cxd5", Color::White), Some(sq("c4")));
    }

    #[test]
    fn pawn_capture_without_hint_checks_lower_file_first() {
        let position = board([
            "rnbqkbnr", "ppp.pppp", "........", "...p....", "..P.P...", "........",
            "PP.P.PPP", "RNBQKBNR",
        ]);
        assert_eq!(find(&position, "xd5", Color::White), Some(sq("c4")));
    }

    #[test]
    fn black_pawn_capture() {
        let position = board([
            "rnbqkbnr", "pppp.ppp", "........", "....p...", "...P....", "........",
            "PPP.PPPP", "RNBQKBNR",
        ]);
        assert_eq!(find(&position, "exd4", Color::Black), Some(sq("e5")));
    }

    #[test]
    fn failed_capture_falls_back_to_push() {
        let start = Board::starting();
        assert_eq!(find(&start, "exe4", Color::White), Some(sq("e2")));
    }

    #[test]
    fn pawn_capture_hint_restricts_file() {
        let position = board([
            "rnbqkbnr", "p.pppppp", "........", "........", "........", ".p......",
            "PP.PPPPP", "RNBQKBNR",
        ]);
        assert_eq!(find(&position, "axb3", Color::White), Some(sq("a2")));
        assert_eq!(find(&position, "xb3", Color::White), Some(sq("a2")));
        assert_eq!(find(&position, "cxb3", Color::White), None);
    }

    #[test]
    fn knight_from_start() {
        let start = Board::starting();
        assert_eq!(find(&start, "Nf3", Color::White), Some(sq("g1")));
        assert_eq!(find(&start, "Nc3", Color::White), Some(sq("b1")));
        assert_eq!(find(&start, "Nf6", Color::Black), Some(sq("g8")));
        assert_eq!(find(&start, "Ne4", Color::White), None);
    }

    #[test]
    fn knight_disambiguation() {
        let position = board([
            "....k...", "........", "........", "........", "........", "........",
            "........", ".N..K.N.",
        ]);
        assert_eq!(find(&position, "Nd2", Color::White), Some(sq("b1")));

        let twins = board([
            "....k...", "........", "........", "........", "........", ".....N..",
            "........", ".N..K...",
        ]);
        assert_eq!(find(&twins, "Nd2", Color::White), Some(sq("f3")));
        assert_eq!(find(&twins, "Nbd2", Color::White), Some(sq("b1")));
        assert_eq!(find(&twins, "N1d2", Color::White), Some(sq("b1")));
        assert_eq!(find(&twins, "Nfd2", Color::White), Some(sq("f3")));
        assert_eq!(find(&twins, "Ncd2", Color::White), None);
    }

    #[test]
    fn bishop_rays_stop_at_blockers() {
        let start = Board::starting();
        assert_eq!(find(&start, "Bc4", Color::White), None);

        let open = board([
            "rnbqkbnr", "pppp.ppp", "........", "....p...", "....P...", "........",
            "PPPP.PPP", "RNBQKBNR",
        ]);
        assert_eq!(find(&open, "Bc4", Color::White), Some(sq("f1")));
        assert_eq!(find(&open, "Bc5", Color::Black), Some(sq("f8")));
        assert_eq!(find(&open, "Bb5", Color::White), Some(sq("f1")));
    }

    #[test]
    fn rook_file_and_rank_hints() {
        let position = board([
            "....k...", "........", "........", "........", "........", "........",
            "........", "R...K..R",
        ]);
        assert_eq!(find(&position, "Rd1", Color::White), Some(sq("a1")));
        assert_eq!(find(&position, "Rf1", Color::White), Some(sq("h1")));

        let rooks = board([
            "R...k...", "........", "........", "........", "........", "........",
            "........", "R...K...",
        ]);
        assert_eq!(find(&rooks, "Ra4", Color::White), Some(sq("a8")));
        assert_eq!(find(&rooks, "R1a4", Color::White), Some(sq("a1")));
        assert_eq!(find(&rooks, "R8a4", Color::White), Some(sq("a8")));
        assert_eq!(find(&rooks, "Rb8", Color::White), Some(sq("a8")));
    }

    #[test]
    fn hint_mismatch_on_first_blocker_abandons_ray() {
        let position = board([
            "....k...", "........", "........", "........", "R.......", "........",
            "........", "R...K...",
        ]);
        // a4 rook shields a1 from a5; the hint excludes a4, so nothing matches.
        assert_eq!(find(&position, "R1a5", Color::White), None);
        assert_eq!(find(&position, "Ra5", Color::White), Some(sq("a4")));
    }

    #[test]
    fn queen_moves() {
        let position = board([
            "rnb.kbnr", "pppp.ppp", "........", "....p...", "....P..q", "........",
            "PPPP.PPP", "RNBQKBNR",
        ]);
        assert_eq!(find(&position, "Qxf2", Color::Black), Some(sq("h4")));
        assert_eq!(find(&position, "Qh5", Color::White), Some(sq("d1")));
        assert_eq!(find(&position, "Qe2", Color::White), Some(sq("d1")));
    }

    #[test]
    fn king_steps() {
        let position = board([
            "....k...", "........", "........", "........", "........", "........",
            "........", "....K...",
        ]);
        assert_eq!(find(&position, "Ke2", Color::White), Some(sq("e1")));
        assert_eq!(find(&position, "Kd7", Color::Black), Some(sq("e8")));
        assert_eq!(find(&position, "Ke3", Color::White), None);
    }

    #[test]
    fn castling_origin_is_king_home() {
        let empty = Board::empty();
        assert_eq!(find(&empty, "O-O", Color::White), Some(Square::E1));
        assert_eq!(find(&empty, "O-O-O", Color::Black), Some(Square::E8));
    }

    #[test]
    fn first_match_wins_deterministically() {
        let position = board([
            "....k...", "........", "........", "........", "........", ".....N..",
            "........", ".N..K...",
        ]);
        let intent = parse("Nd2", Color::White).unwrap();
        let first = locate(&intent, &position);
        for _ in 0..10 {
            assert_eq!(locate(&intent, &position), first);
        }
    }
}
