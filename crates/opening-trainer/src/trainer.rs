//! Training session state.
//!
//! A [`Trainer`] walks one line of an [`OpeningTree`] at a time: the
//! computer answers with weighted random picks, the trainee must type one of
//! the moves the tree accepts, and every move is mirrored on a board.

use std::fmt;

use chess_core::Color;
use chess_engine::BoardState;
use chess_openings::{position_key, MoveOption, OpeningTree};
use rand::rngs::StdRng;
use rand::Rng;

/// Outcome of checking the trainee's move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveCheck {
    /// Nothing was typed.
    Empty,
    /// The current position has no moves left to play.
    EndOfLine,
    /// The move is one of the accepted answers and has been played.
    Correct,
    /// The move is not accepted here.
    Incorrect { valid: Vec<String> },
}

impl MoveCheck {
    pub fn is_correct(&self) -> bool {
        matches!(self, MoveCheck::Correct)
    }
}

impl fmt::Display for MoveCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveCheck::Empty => write!(f, "Empty move"),
            MoveCheck::EndOfLine => write!(f, "No more moves in this line!"),
            MoveCheck::Correct => write!(f, "Correct!"),
            MoveCheck::Incorrect { valid } => {
                write!(f, "Incorrect! Valid moves: {}", valid.join(", "))
            }
        }
    }
}

/// One trainee's progress through an opening tree.
#[derive(Debug, Clone)]
pub struct Trainer<R = StdRng> {
    tree: OpeningTree,
    line: Vec<String>,
    board: BoardState,
    rng: R,
}

impl<R: Rng> Trainer<R> {
    /// Starts a session at the root of `tree`.
    pub fn new(tree: OpeningTree, rng: R) -> Self {
        Trainer {
            tree,
            line: Vec::new(),
            board: BoardState::new(),
            rng,
        }
    }

    pub fn tree(&self) -> &OpeningTree {
        &self.tree
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Moves played so far, in order.
    pub fn line(&self) -> &[String] {
        &self.line
    }

    /// The color the trainee plays, as declared by the tree.
    pub fn player_color(&self) -> Color {
        self.tree.start
    }

    pub fn position_key(&self) -> String {
        position_key(&self.line)
    }

    /// White moves on even plies, Black on odd ones.
    pub fn side_to_move(&self) -> Color {
        Color::from_ply(self.line.len())
    }

    pub fn is_player_turn(&self) -> bool {
        self.tree.is_player_turn(&self.position_key())
    }

    pub fn has_more_moves(&self) -> bool {
        self.tree.has_more_moves(&self.position_key())
    }

    pub fn current_options(&self) -> Option<&[MoveOption]> {
        self.tree.options(&self.position_key())
    }

    /// Plays a weighted random move from the current position.
    ///
    /// Returns `None` if the tree has no moves here.
    pub fn make_computer_move(&mut self) -> Option<String> {
        let key = self.position_key();
        let selected = self
            .tree
            .select_move(&key, &mut self.rng)?
            .move_text
            .clone();
        tracing::debug!(position = %key, move_text = %selected, "computer move");
        self.play(&selected);
        Some(selected)
    }

    /// Checks the trainee's move and plays it if the tree accepts it.
    pub fn check_player_move(&mut self, text: &str) -> MoveCheck {
        let text = text.trim();
        if text.is_empty() {
            return MoveCheck::Empty;
        }

        let key = self.position_key();
        let valid: Vec<String> = match self.tree.options(&key) {
            Some(options) if !options.is_empty() => {
                options.iter().map(|o| o.move_text.clone()).collect()
            }
            _ => return MoveCheck::EndOfLine,
        };

        if valid.iter().any(|v| v == text) {
            self.play(text);
            MoveCheck::Correct
        } else {
            MoveCheck::Incorrect { valid }
        }
    }

    /// Records a move in the line and mirrors it on the board.
    ///
    /// The tree is authoritative: a move the board cannot resolve is still
    /// recorded so the line keeps following the tree.
    fn play(&mut self, text: &str) {
        let side = self.side_to_move();
        if let Err(e) = self.board.make_move(text, side) {
            tracing::warn!(move_text = text, %side, error = %e, "could not apply move to board");
        }
        self.line.push(text.to_string());
    }

    /// Returns to the starting position.
    pub fn reset(&mut self) {
        tracing::info!("position reset");
        self.line.clear();
        self.board.reset();
    }

    /// The moves played so far, space separated.
    pub fn current_line(&self) -> String {
        if self.line.is_empty() {
            "Starting position".to_string()
        } else {
            self.line.join(" ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::{ColoredPiece, Piece, Square};
    use chess_openings::{example_opening, OpeningNode};
    use rand::SeedableRng;

    fn trainer() -> Trainer {
        Trainer::new(example_opening(), StdRng::seed_from_u64(3))
    }

    #[test]
    fn starts_at_root() {
        let t = trainer();
        assert_eq!(t.position_key(), "");
        assert_eq!(t.current_line(), "Starting position");
        assert_eq!(t.side_to_move(), Color::White);
        assert_eq!(t.player_color(), Color::White);
        assert!(!t.is_player_turn());
        assert!(t.has_more_moves());
    }

    #[test]
    fn computer_then_player() {
        let mut t = trainer();
        assert_eq!(t.make_computer_move().as_deref(), Some("e4"));
        assert_eq!(t.side_to_move(), Color::Black);
        assert!(t.is_player_turn());
        assert_eq!(
            t.board().piece_at(Square::from_algebraic("e4").unwrap()),
            Some(ColoredPiece::new(Piece::Pawn, Color::White))
        );

        assert_eq!(t.check_player_move(" e5 "), MoveCheck::Correct);
        assert_eq!(t.current_line(), "e4 e5");
        assert_eq!(t.position_key(), "e4-e5");
        assert!(!t.is_player_turn());

        assert_eq!(t.make_computer_move().as_deref(), Some("Nf3"));
        assert_eq!(t.current_line(), "e4 e5 Nf3");
    }

    #[test]
    fn incorrect_move_lists_valid_moves() {
        let mut t = trainer();
        t.make_computer_move();
        let check = t.check_player_move("c5");
        assert_eq!(
            check,
            MoveCheck::Incorrect {
                valid: vec!["e6".to_string(), "e5".to_string()]
            }
        );
        assert_eq!(check.to_string(), "Incorrect! Valid moves: e6, e5");
        assert_eq!(t.line(), ["e4"]);
    }

    #[test]
    fn empty_and_end_of_line() {
        let mut t = trainer();
        assert_eq!(t.check_player_move("   "), MoveCheck::Empty);

        let mut tree = OpeningTree::new(Color::Black);
        tree.add_node("", OpeningNode::player(Vec::new()));
        let mut done = Trainer::new(tree, StdRng::seed_from_u64(0));
        assert_eq!(done.check_player_move("e4"), MoveCheck::EndOfLine);
        assert_eq!(done.make_computer_move(), None);
        assert!(!done.has_more_moves());
    }

    #[test]
    fn unresolvable_tree_move_is_still_recorded() {
        let mut tree = OpeningTree::new(Color::White);
        tree.add_node(
            "",
            OpeningNode::computer(vec![chess_openings::MoveOption::new("Ke4", 1.0)]),
        );
        let mut t = Trainer::new(tree, StdRng::seed_from_u64(0));
        assert_eq!(t.make_computer_move().as_deref(), Some("Ke4"));
        assert_eq!(t.line(), ["Ke4"]);
        assert_eq!(t.board(), &BoardState::new());
    }

    #[test]
    fn reset_clears_line_and_board() {
        let mut t = trainer();
        t.make_computer_move();
        t.check_player_move("e6");
        t.reset();
        assert!(t.line().is_empty());
        assert_eq!(t.board(), &BoardState::new());
        assert!(t.has_more_moves());
    }
}
