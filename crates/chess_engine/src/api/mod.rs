//! Public game API
//!
//! The game state machine and terminal condition detector, built on the
//! board, move generator and legality checker.
//!
//! ## Module Organization
//!
//! - `game` - Game struct and lifecycle (new, start, pause, resume, reset)
//! - `moves` - Step protocol, promotion, undo, legal destinations
//! - `state` - Terminal outcomes (evaluate)

mod game;
mod moves;
mod state;


pub use game::{Game, LogEntry};
pub use state::Outcome;
