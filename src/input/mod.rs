//! Input module - replaceable input policies
//!
//! The engine consumes [`chess_engine::MoveIntent`]s and
//! [`chess_engine::PromotionChoice`]s. How they are produced from user input
//! is a policy of this layer:
//!
//! - `keys` - promotion key mapping ([`PromotionKeymap`])
//! - `move_text` - coordinate move text such as `e2e4` or `e7e8q`

pub mod keys;
pub mod move_text;

pub use keys::PromotionKeymap;
pub use move_text::{parse_move, parse_move_list, MoveInput};
