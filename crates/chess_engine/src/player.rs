//! Player state
//!
//! Each player owns the pieces it has captured. A capture moves the piece
//! value out of the board and onto the capturer's list; undo moves it back.
//!
//! # Material
//!
//! `material_captured` is the running sum of the captured pieces' values
//! (pawn 1, knight/bishop 3, rook 5, queen 9). It always equals the sum over
//! `captured`.

use serde::{Deserialize, Serialize};

use crate::types::{Color, Piece, Square};

/// One side of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    color: Color,
    material_captured: u32,
    captured: Vec<Piece>,
    /// Square picked by an input layer, not used by the rules
    selected: Option<Square>,
}

impl Player {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            material_captured: 0,
            captured: Vec::new(),
            selected: None,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn material_captured(&self) -> u32 {
        self.material_captured
    }

    /// Captured pieces, oldest first
    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn select(&mut self, square: Square) {
        self.selected = Some(square);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub(crate) fn add_capture(&mut self, piece: Piece) {
        self.material_captured += piece.value();
        self.captured.push(piece);
    }

    /// Hand back the most recent capture, e.g. when it is undone
    pub(crate) fn return_capture(&mut self) -> Option<Piece> {
        let piece = self.captured.pop()?;
        self.material_captured -= piece.value();
        Some(piece)
    }

    pub(crate) fn reset(&mut self) {
        self.material_captured = 0;
        self.captured.clear();
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceType;

    #[test]
    fn test_capture_and_return() {
        let mut player = Player::new(Color::White);
        let rook = Piece::new(PieceType::Rook, Color::Black, Square::new(1, 8));
        let pawn = Piece::new(PieceType::Pawn, Color::Black, Square::new(4, 5));

        player.add_capture(rook);
        player.add_capture(pawn);
        assert_eq!(player.material_captured(), 6);
        assert_eq!(player.captured().len(), 2);

        assert_eq!(player.return_capture(), Some(pawn), "last capture comes back first");
        assert_eq!(player.material_captured(), 5);
    }

    #[test]
    fn test_return_capture_on_empty_list() {
        let mut player = Player::new(Color::Black);
        assert_eq!(player.return_capture(), None);
        assert_eq!(player.material_captured(), 0);
    }

    #[test]
    fn test_selection() {
        let mut player = Player::new(Color::White);
        player.select(Square::new(5, 2));
        assert_eq!(player.selected(), Some(Square::new(5, 2)));
        player.reset();
        assert_eq!(player.selected(), None);
    }
}
