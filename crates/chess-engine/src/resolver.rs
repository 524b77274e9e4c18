//! Move-text resolution against a board.
//!
//! Composes [`parse`], [`locate`] and [`BoardState::apply`]: a failed parse
//! or a missing origin square leaves the board untouched.

use chess_core::Color;
use thiserror::Error;

use crate::board::{Board, BoardState, ResolvedMove};
use crate::locator::locate;
use crate::notation::{parse, ParseError};

/// Errors that can occur when resolving move text against a board.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("no piece on the board can play '{0}'")]
    NoOriginFound(String),
}

/// Resolves move text for `side` without touching the board.
pub fn resolve(board: &Board, text: &str, side: Color) -> Result<ResolvedMove, ResolveError> {
    let intent = parse(text, side)?;
    let from =
        locate(&intent, board).ok_or_else(|| ResolveError::NoOriginFound(text.to_string()))?;

    let resolved = ResolvedMove {
        from,
        to: intent.to,
        piece: intent.colored_piece(),
        castling: intent.castling,
    };
    tracing::debug!(text, %side, mv = %resolved, "resolved move");
    Ok(resolved)
}

impl BoardState {
    /// Resolves move text for `side` and applies it.
    pub fn make_move(&mut self, text: &str, side: Color) -> Result<ResolvedMove, ResolveError> {
        let resolved = resolve(self.board(), text, side)?;
        self.apply(&resolved);
        Ok(resolved)
    }
}
