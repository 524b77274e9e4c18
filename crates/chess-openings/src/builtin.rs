//! Built-in training repertoire.
//!
//! The computer opens 1.e4 and the trainee answers with the French (1...e6)
//! or the Open Game (1...e5); each branch runs a few moves deep.

use chess_core::Color;

use crate::opening::{MoveOption, OpeningNode};
use crate::tree::OpeningTree;

fn options(moves: &[(&str, f64)]) -> Vec<MoveOption> {
    moves
        .iter()
        .map(|&(text, weight)| MoveOption::new(text, weight))
        .collect()
}

/// Creates the built-in example opening tree.
#[must_use]
pub fn example_opening() -> OpeningTree {
    let mut tree = OpeningTree::new(Color::White);

    let computer: [(&str, &[(&str, f64)]); 7] = [
        ("", &[("e4", 1.0)]),
        ("e4-e6", &[("d4", 1.0)]),
        ("e4-e5", &[("Nf3", 1.0)]),
        ("e4-e6-d4-d5", &[("Nc3", 0.5), ("Nd2", 0.5)]),
        ("e4-e6-d4-c5", &[("Nf3", 1.0)]),
        ("e4-e5-Nf3-Nc6", &[("Bb5", 0.7), ("Bc4", 0.3)]),
        ("e4-e5-Nf3-Nf6", &[("Nxe5", 1.0)]),
    ];
    for (key, moves) in computer {
        tree.add_node(key, OpeningNode::computer(options(moves)));
    }

    let player: [(&str, &[(&str, f64)]); 7] = [
        ("e4", &[("e6", 0.6), ("e5", 0.4)]),
        ("e4-e6-d4", &[("d5", 0.7), ("c5", 0.3)]),
        ("e4-e5-Nf3", &[("Nc6", 0.6), ("Nf6", 0.4)]),
        ("e4-e6-d4-d5-Nc3", &[("Nf6", 0.8), ("Bb4", 0.2)]),
        ("e4-e6-d4-d5-Nd2", &[("Nf6", 0.9), ("c5", 0.1)]),
        ("e4-e5-Nf3-Nc6-Bb5", &[("a6", 0.6), ("Nf6", 0.3), ("f5", 0.1)]),
        ("e4-e5-Nf3-Nc6-Bc4", &[("Bc5", 0.5), ("Nf6", 0.5)]),
    ];
    for (key, moves) in player {
        tree.add_node(key, OpeningNode::player(options(moves)));
    }

    tree
}
