//! Core types for chess.
//!
//! This crate provides the fundamental types used across the trainer:
//! - [`Piece`], [`ColoredPiece`] and [`Color`] for piece representation
//! - [`Square`] for board coordinates, with [`square_to_coords`] and
//!   [`coords_to_square`] mapping to and from algebraic square tokens

mod color;
mod piece;
mod square;

pub use color::Color;
pub use piece::{ColoredPiece, Piece};
pub use square::{
    coords_to_square, file_from_char, file_to_char, rank_from_char, rank_to_char,
    square_to_coords, Square,
};
