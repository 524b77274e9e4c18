//! Core opening-tree types.

use serde::{Deserialize, Serialize};

fn default_weight() -> f64 {
    1.0
}

/// One candidate move at a tree node, with its selection weight.
///
/// Opening files write move options in several shapes; all of them
/// deserialize into this one type:
///
/// ```json
/// ["e4", 0.6]
/// ["e4"]
/// {"move": "e4", "weight": 0.6}
/// {"move": "e4"}
/// "e4"
/// ```
///
/// A missing weight defaults to 1.0. Options always serialize as
/// `[move, weight]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawMoveOption", into = "(String, f64)")]
pub struct MoveOption {
    /// The move in algebraic notation (e.g., "Nf3").
    pub move_text: String,
    /// Relative probability of the computer picking this move.
    pub weight: f64,
}

impl MoveOption {
    /// Creates a new move option with the given notation and weight.
    #[must_use]
    pub fn new(move_text: impl Into<String>, weight: f64) -> Self {
        Self {
            move_text: move_text.into(),
            weight,
        }
    }

    /// Weight used for random selection: non-finite and negative weights
    /// count as zero.
    #[must_use]
    pub fn effective_weight(&self) -> f64 {
        if self.weight.is_finite() && self.weight > 0.0 {
            self.weight
        } else {
            0.0
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMoveOption {
    Pair(String, f64),
    Single((String,)),
    Record {
        #[serde(rename = "move")]
        move_text: String,
        #[serde(default = "default_weight")]
        weight: f64,
    },
    Bare(String),
}

impl From<RawMoveOption> for MoveOption {
    fn from(raw: RawMoveOption) -> Self {
        match raw {
            RawMoveOption::Pair(move_text, weight) | RawMoveOption::Record { move_text, weight } => {
                MoveOption { move_text, weight }
            }
            RawMoveOption::Single((move_text,)) | RawMoveOption::Bare(move_text) => MoveOption {
                move_text,
                weight: default_weight(),
            },
        }
    }
}

impl From<MoveOption> for (String, f64) {
    fn from(option: MoveOption) -> Self {
        (option.move_text, option.weight)
    }
}

/// A position in the opening tree.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OpeningNode {
    /// True when the human trainee is to move here.
    #[serde(default)]
    pub player: bool,
    /// Candidate moves. For player nodes these are the accepted answers.
    #[serde(default)]
    pub moves: Vec<MoveOption>,
}

impl OpeningNode {
    /// Creates a node where the computer picks among `moves`.
    #[must_use]
    pub fn computer(moves: Vec<MoveOption>) -> Self {
        Self {
            player: false,
            moves,
        }
    }

    /// Creates a node where the trainee must answer with one of `moves`.
    #[must_use]
    pub fn player(moves: Vec<MoveOption>) -> Self {
        Self {
            player: true,
            moves,
        }
    }
}
