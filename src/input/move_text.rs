//! Text move intents
//!
//! Coordinate notation as typed by a user or stored in a move file:
//! `e2e4`, `e2-e4`, or `e7e8q` with a trailing promotion key. Anything after
//! `#` on a line is a comment.

use chess_engine::{MoveIntent, PromotionChoice, Square};

use super::keys::PromotionKeymap;
use crate::core::{CoreError, CoreResult};

/// One parsed line of move input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveInput {
    pub intent: MoveIntent,
    pub promotion: Option<PromotionChoice>,
}

/// Parse a single move such as `"g1f3"`, `"e2-e4"` or `"b7b8n"`
pub fn parse_move(text: &str, keys: &PromotionKeymap) -> CoreResult<MoveInput> {
    let invalid = |reason: &str| CoreError::MoveText {
        text: text.to_string(),
        reason: reason.to_string(),
    };

    let compact: String = text.trim().chars().filter(|c| *c != '-').collect();
    let split = square_end(&compact, 0).ok_or_else(|| invalid("missing start square"))?;
    let end = square_end(&compact, split).ok_or_else(|| invalid("missing end square"))?;

    let from: Square = compact[..split].parse()?;
    let to: Square = compact[split..end].parse()?;

    let mut rest = compact[end..].chars();
    let promotion = match (rest.next(), rest.next()) {
        (None, _) => None,
        (Some(key), None) => Some(keys.choice_for(key)?),
        (Some(_), Some(_)) => return Err(invalid("trailing characters")),
    };

    Ok(MoveInput {
        intent: MoveIntent::new(from, to),
        promotion,
    })
}

/// Byte offset just past a `<letter><digits>` square starting at `start`
fn square_end(text: &str, start: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if !bytes.get(start)?.is_ascii_alphabetic() {
        return None;
    }
    let digits = bytes[start + 1..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    (digits > 0).then_some(start + 1 + digits)
}

/// Parse a move list: whitespace-separated moves, `#` starts a comment
pub fn parse_move_list(text: &str, keys: &PromotionKeymap) -> CoreResult<Vec<MoveInput>> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(str::split_whitespace)
        .map(|token| parse_move(token, keys))
        .collect()
}
