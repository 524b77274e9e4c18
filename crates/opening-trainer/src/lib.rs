//! Interactive opening trainer.
//!
//! The computer plays weighted picks from an opening tree and the trainee
//! must answer with one of the moves the tree accepts. Every move is
//! mirrored on a [`chess_engine::BoardState`] so the position can be drawn.
//!
//! - [`config`] - `trainer.toml` settings and opening loading
//! - [`trainer`] - session state: the current line, board and move checks
//! - [`render`] - board drawing in Unicode or ASCII
//! - [`session`] - the line-oriented prompt loop

pub mod config;
pub mod render;
pub mod session;
pub mod trainer;

pub use config::{ConfigError, TrainerConfig};
pub use render::{render_board, PieceStyle};
pub use session::{Command, Session, SessionError};
pub use trainer::{MoveCheck, Trainer};
