//! Opening tree storage, lookup and persistence.

use std::collections::BTreeMap;
use std::path::Path;

use chess_core::Color;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::opening::{MoveOption, OpeningNode};

/// Separator between moves in a position key.
pub const KEY_SEPARATOR: &str = "-";

/// Errors that can occur when loading or saving opening trees.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Failed to read or write the opening file.
    #[error("failed to access opening file: {0}")]
    IoError(#[from] std::io::Error),

    /// The opening file is not a valid opening tree.
    #[error("invalid opening file: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Builds the key for the position reached after `moves`.
///
/// The starting position is the empty string; later positions join the move
/// texts with `-`, e.g. `"e4-e5-Nf3"`.
#[must_use]
pub fn position_key<S: AsRef<str>>(moves: &[S]) -> String {
    moves
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(KEY_SEPARATOR)
}

/// A training repertoire: positions keyed by move history, each with the
/// candidate moves and whose turn it is.
///
/// The JSON layout is `{"start": "white", "tree": {"": {...}, "e4": {...}}}`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OpeningTree {
    /// The color the trainee plays.
    #[serde(default)]
    pub start: Color,
    #[serde(default, rename = "tree")]
    nodes: BTreeMap<String, OpeningNode>,
}

impl OpeningTree {
    /// Creates a new empty tree for a trainee playing `start`.
    #[must_use]
    pub fn new(start: Color) -> Self {
        Self {
            start,
            nodes: BTreeMap::new(),
        }
    }

    /// Returns true if the tree has no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of positions in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Adds or replaces the node for a position.
    pub fn add_node(&mut self, position_key: impl Into<String>, node: OpeningNode) {
        self.nodes.insert(position_key.into(), node);
    }

    /// Looks up the node for a position.
    #[must_use]
    pub fn lookup(&self, position_key: &str) -> Option<&OpeningNode> {
        self.nodes.get(position_key)
    }

    /// Candidate moves for a position, if the position is in the tree.
    #[must_use]
    pub fn options(&self, position_key: &str) -> Option<&[MoveOption]> {
        self.lookup(position_key).map(|node| node.moves.as_slice())
    }

    /// Whether the trainee moves at this position. Unknown positions belong
    /// to the computer.
    #[must_use]
    pub fn is_player_turn(&self, position_key: &str) -> bool {
        self.lookup(position_key).is_some_and(|node| node.player)
    }

    /// Whether the line continues past this position.
    #[must_use]
    pub fn has_more_moves(&self, position_key: &str) -> bool {
        self.options(position_key)
            .is_some_and(|moves| !moves.is_empty())
    }

    /// Move texts accepted at a position, in file order.
    #[must_use]
    pub fn valid_moves(&self, position_key: &str) -> Vec<&str> {
        self.options(position_key)
            .unwrap_or_default()
            .iter()
            .map(|option| option.move_text.as_str())
            .collect()
    }

    /// Selects a random move from the candidates, weighted by their weights.
    ///
    /// If every weight is zero (or unusable), the choice is uniform. Weights
    /// are relative, so very large ones are fine.
    pub fn select_move<R: Rng>(&self, position_key: &str, rng: &mut R) -> Option<&MoveOption> {
        let moves = self.options(position_key)?;
        if moves.is_empty() {
            return None;
        }

        // Scaled by the largest weight so the sum stays finite.
        let max_weight = moves
            .iter()
            .map(MoveOption::effective_weight)
            .fold(0.0, f64::max);
        if max_weight <= 0.0 {
            return moves.choose(rng);
        }
        let scaled = |mv: &MoveOption| mv.effective_weight() / max_weight;

        let total_weight: f64 = moves.iter().map(scaled).sum();
        let mut choice = rng.gen_range(0.0..total_weight);
        for mv in moves {
            let weight = scaled(mv);
            if choice < weight {
                return Some(mv);
            }
            choice -= weight;
        }

        // Rounding can leave a sliver past the last bucket.
        moves.iter().rev().find(|mv| mv.effective_weight() > 0.0)
    }

    /// Parses a tree from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, TreeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the tree as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, TreeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads a tree from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, TreeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Writes the tree to a JSON file, replacing any existing file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), TreeError> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }
}
