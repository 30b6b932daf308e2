//! # Sliding Puzzle
//!
//! Board engine for the classic sliding-tile ("15") puzzle.
//!
//! A board is scrambled by walking the blank randomly away from the solved
//! arrangement, so every puzzle it produces can be solved. Players click
//! tiles next to the blank to slide them back; the first move that restores
//! the sorted order freezes the board.
//!
//! ## Modules
//! - `puzzle`: the `Puzzle` state machine, `Direction` and `MoveOutcome`.
//! - `session`: pointer-to-cell mapping and per-session configuration for frontends.
//! - `error`: construction errors.

pub mod error;
pub mod puzzle;
pub mod session;

pub use error::PuzzleError;
pub use puzzle::{Direction, MoveOutcome, Puzzle, Status};
pub use session::{ClickReport, Session, SessionConfig};
