//! Opening trees for the trainer.
//!
//! This crate provides the training repertoire: positions keyed by the moves
//! played so far, each naming whose turn it is and the candidate moves with
//! their weights. It handles weighted random selection of computer moves and
//! loading/saving repertoires as JSON.

pub mod builtin;
pub mod opening;
pub mod tree;

pub use builtin::example_opening;
pub use opening::{MoveOption, OpeningNode};
pub use tree::{position_key, OpeningTree, TreeError};
