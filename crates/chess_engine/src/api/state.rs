//! Terminal condition detection
//!
//! # Evaluation order
//!
//! Only the first matching condition is reported:
//!
//! 1. **Checkmate / stalemate**: the side to move has no legal move; mate if
//!    its king is in check, stalemate otherwise
//! 2. **Fifty-move draw**: the countdown reached zero
//! 3. **Material draw**: both sides are below the material threshold and no
//!    pawns remain (e.g. K+N vs K, K vs K; K+R vs K plays on)
//! 4. **Repetition draw**: one position fingerprint has occurred the
//!    configured number of times

use serde::{Deserialize, Serialize};
use tracing::info;

use super::game::Game;
use crate::hash;
use crate::legality;
use crate::notation::CHECKMATE_SUFFIX;
use crate::types::*;

/// Result of [`Game::evaluate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// No terminal condition holds
    #[default]
    Ongoing,
    WhiteWinsCheckmate,
    BlackWinsCheckmate,
    StalemateDraw,
    RepetitionDraw,
    FiftyMoveDraw,
    MaterialDraw,
}

impl Outcome {
    pub fn is_game_over(self) -> bool {
        self != Outcome::Ongoing
    }

    pub fn is_checkmate(self) -> bool {
        matches!(self, Outcome::WhiteWinsCheckmate | Outcome::BlackWinsCheckmate)
    }

    pub fn is_draw(self) -> bool {
        matches!(
            self,
            Outcome::StalemateDraw
                | Outcome::RepetitionDraw
                | Outcome::FiftyMoveDraw
                | Outcome::MaterialDraw
        )
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            Outcome::WhiteWinsCheckmate => Some(Color::White),
            Outcome::BlackWinsCheckmate => Some(Color::Black),
            _ => None,
        }
    }

    /// Human-readable result line
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Ongoing => "Game in progress",
            Outcome::WhiteWinsCheckmate => "White wins by checkmate",
            Outcome::BlackWinsCheckmate => "Black wins by checkmate",
            Outcome::StalemateDraw => "Draw by stalemate",
            Outcome::RepetitionDraw => "Draw by repetition",
            Outcome::FiftyMoveDraw => "Draw by the fifty-move rule",
            Outcome::MaterialDraw => "Draw by insufficient material",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl Game {
    /// Judge the current position for the side to move
    ///
    /// On checkmate the latest log entry gets a `#` suffix (once). While a
    /// promotion is pending the pawn still stands on its last rank, so the
    /// position is not final and the result is [`Outcome::Ongoing`].
    pub fn evaluate(&mut self) -> Outcome {
        if self.pending_promotion.is_some() {
            return Outcome::Ongoing;
        }
        let outcome = self.detect_outcome();
        if outcome.is_checkmate() {
            if let Some(entry) = self.log.last_mut() {
                if !entry.text.ends_with(CHECKMATE_SUFFIX) {
                    entry.text.push(CHECKMATE_SUFFIX);
                }
            }
        }
        if outcome.is_game_over() {
            info!("[ENGINE] {} after {} plies", outcome, self.ply);
        }
        outcome
    }

    fn detect_outcome(&mut self) -> Outcome {
        let side = self.side_to_move();
        let last = self.last_move().copied();
        if !legality::has_legal_move(&mut self.board, side, last.as_ref()) {
            return if legality::is_king_in_check(&self.board, side) {
                match side {
                    Color::White => Outcome::BlackWinsCheckmate,
                    Color::Black => Outcome::WhiteWinsCheckmate,
                }
            } else {
                Outcome::StalemateDraw
            };
        }

        if self.countdown == 0 {
            return Outcome::FiftyMoveDraw;
        }

        if self.is_material_insufficient() {
            return Outcome::MaterialDraw;
        }

        if hash::max_occurrences(&self.fingerprints) >= self.config.repetition_limit {
            return Outcome::RepetitionDraw;
        }

        Outcome::Ongoing
    }

    fn is_material_insufficient(&self) -> bool {
        let threshold = self.config.material_draw_threshold;
        let no_pawns = !self
            .board
            .pieces()
            .any(|piece| piece.kind == PieceType::Pawn);
        no_pawns
            && self.board.material(Color::White) < threshold
            && self.board.material(Color::Black) < threshold
    }

    /// Whether the side to move is in check
    pub fn is_in_check(&self) -> bool {
        legality::is_king_in_check(&self.board, self.side_to_move())
    }

    /// Number of legal moves available to `color` in the current position
    pub fn legal_move_count(&mut self, color: Color) -> usize {
        let last = self.last_move().copied();
        legality::legal_move_count(&mut self.board, color, last.as_ref())
    }
}
