//! Game module - session driving on top of the rules engine
//!
//! - `referee` - [`Referee`] plays a move list through a [`chess_engine::Game`]
//!   and produces a [`Transcript`]

pub mod referee;

pub use referee::{RejectedMove, Referee, Transcript, DEFAULT_PROMOTION};
