//! Move-text resolution and board state for the opening trainer.
//!
//! This crate provides:
//! - [`parse`] - turns algebraic move text into a [`MoveIntent`]
//! - [`locate`] - finds the origin square of the piece named by an intent
//! - [`BoardState`] - the 8x8 grid plus castling bookkeeping, mutated by
//!   [`BoardState::apply`]
//! - [`resolve`] and [`BoardState::make_move`] - the three steps combined
//!
//! # Architecture
//!
//! Resolution is geometric only: pieces are found by walking outward from the
//! destination square, and nothing checks whether the mover's king is left in
//! check. When several pieces fit, the first one in a fixed search order is
//! chosen.
//!
//! # Example
//!
//! ```
//! use chess_core::Color;
//! use chess_engine::BoardState;
//!
//! let mut state = BoardState::new();
//! state.make_move("e4", Color::White).unwrap();
//! state.make_move("e5", Color::Black).unwrap();
//! let mv = state.make_move("Nf3", Color::White).unwrap();
//! assert_eq!(mv.from.to_algebraic(), "g1");
//! ```

pub mod board;
pub mod locator;
pub mod notation;
mod resolver;

pub use board::{Board, BoardError, BoardState, CastlingRights, CastlingSide, ResolvedMove};
pub use locator::locate;
pub use notation::{parse, MoveIntent, ParseError};
pub use resolver::{resolve, ResolveError};
