//! Chess rules engine
//!
//! Move legality, special moves (en passant, castling, promotion), a
//! turn-based game state machine with undo, and detection of checkmate,
//! stalemate and the draw rules. The engine draws nothing and reads no
//! input devices; presentation layers feed it [`MoveIntent`]s and
//! [`PromotionChoice`]s and read back the board, [`StepResult`]s and
//! [`Outcome`]s.
//!
//! ## Module Structure
//!
//! - `board` - Position store: square → piece arena, apply/revert
//! - `move_gen` - Per-piece reachability rules
//! - `legality` - King-safety check by simulate/inspect/revert
//! - `api` - [`Game`] lifecycle, step protocol, undo and terminal evaluation
//! - `hash` - Position fingerprints for repetition
//! - `notation` - Move-log text
//!
//! ## Example
//!
//! ```
//! use chess_engine::{Game, MoveIntent, Outcome, Square, StepResult};
//!
//! let mut game = Game::new();
//! game.start().unwrap();
//! for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4"), ("d8", "h4")] {
//!     let intent = MoveIntent::new(from.parse().unwrap(), to.parse::<Square>().unwrap());
//!     assert_eq!(game.play_move(intent), StepResult::TurnPassed);
//! }
//! assert_eq!(game.evaluate(), Outcome::BlackWinsCheckmate);
//! ```

pub mod api;
pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod hash;
pub mod legality;
pub mod move_gen;
pub mod notation;
pub mod player;
pub mod types;

pub use api::{Game, LogEntry, Outcome};
pub use board::{AppliedMove, Board};
pub use config::RulesConfig;
pub use error::{ChessEngineError, ChessEngineResult};
pub use hash::Fingerprint;
pub use player::Player;
pub use types::*;
