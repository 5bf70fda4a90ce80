//! Move execution
//!
//! The per-step protocol: resolve a pending promotion, check a move intent
//! for legality, commit it, and the reverse operation, undo.

use tracing::{debug, trace};

use super::game::{Game, LogEntry};
use crate::board::AppliedMove;
use crate::hash::Fingerprint;
use crate::legality;
use crate::notation;
use crate::types::*;

impl Game {
    /// Advance the game by one external event
    ///
    /// While a promotion is pending, a `promotion` choice resolves it and any
    /// `intent` in the same call is then processed; without a choice the
    /// call reports [`StepResult::AwaitingPromotion`] and ignores the intent.
    /// Illegal or missing intents leave everything unchanged and report
    /// [`StepResult::Still`], as does any call while the game is not running.
    /// A paused game with a pending promotion reports
    /// [`StepResult::AwaitingPromotion`] and accepts no choice until resumed.
    pub fn step(
        &mut self,
        intent: Option<MoveIntent>,
        promotion: Option<PromotionChoice>,
    ) -> StepResult {
        if !self.has_valid_players() {
            return StepResult::Invalid;
        }
        if self.status != GameStatus::Running {
            return match self.pending_promotion {
                Some(_) => StepResult::AwaitingPromotion,
                None => StepResult::Still,
            };
        }

        if let Some(square) = self.pending_promotion {
            match promotion {
                Some(choice) => self.promote(square, choice),
                None => return StepResult::AwaitingPromotion,
            }
        }

        match intent {
            Some(intent) => self.play(intent),
            None => StepResult::Still,
        }
    }

    /// Submit a move intent, see [`Game::step`]
    pub fn play_move(&mut self, intent: MoveIntent) -> StepResult {
        self.step(Some(intent), None)
    }

    /// Submit a promotion choice, see [`Game::step`]
    pub fn choose_promotion(&mut self, choice: PromotionChoice) -> StepResult {
        self.step(None, Some(choice))
    }

    /// Legal destination squares of the piece on `square` for the side to move
    ///
    /// Empty for empty squares, enemy pieces, and off-board input.
    pub fn legal_destinations(&mut self, square: Square) -> Vec<Square> {
        if !self.board.contains(square) {
            return Vec::new();
        }
        let mover = self.side_to_move();
        let last = self.last_move().copied();
        legality::legal_moves(&mut self.board, square, mover, last.as_ref())
            .into_iter()
            .map(|mv| mv.to)
            .collect()
    }

    /// Legal move of the side to move matching `intent`, with its category
    pub fn legal_move(&mut self, intent: MoveIntent) -> Option<Move> {
        if !self.board.contains(intent.from) || !self.board.contains(intent.to) {
            return None;
        }
        let mv = Move::resolve(&self.board, intent).ok()?;
        let mover = self.side_to_move();
        let last = self.last_move().copied();
        let category = legality::legal_category(&mut self.board, &mv, mover, last.as_ref())?;
        Some(Move {
            category: Some(category),
            ..mv
        })
    }

    fn play(&mut self, intent: MoveIntent) -> StepResult {
        if !self.board.contains(intent.from) || !self.board.contains(intent.to) {
            trace!("[ENGINE] Ignoring off-board intent {:?}", intent);
            return StepResult::Still;
        }
        let Ok(mv) = Move::resolve(&self.board, intent) else {
            trace!("[ENGINE] No piece on {}", intent.from);
            return StepResult::Still;
        };

        let mover = self.side_to_move();
        let last = self.last_move().copied();
        let Some(simulation) = legality::simulate(&mut self.board, &mv, mover, last.as_ref())
        else {
            trace!("[ENGINE] Illegal move {}{} for {}", intent.from, intent.to, mover);
            return StepResult::Still;
        };
        let applied = simulation.commit();
        self.record(applied);
        StepResult::TurnPassed
    }

    /// Book-keeping after a move has been committed to the board
    fn record(&mut self, applied: AppliedMove) {
        let mover = self.current;
        let color = self.players[mover].color();
        let mv = Move {
            category: Some(applied.category),
            ..applied.mv
        };

        if let Some(captured) = applied.captured {
            self.players[mover].add_capture(captured);
        }
        let countdown_before = self.countdown;
        self.countdown = if mv.piece.kind == PieceType::Pawn || applied.captured.is_some() {
            self.config.fifty_move_countdown
        } else {
            self.countdown.saturating_sub(1)
        };

        let text = notation::log_text(self.full_move, color, &applied);
        debug!("[ENGINE] {}", text);
        self.log.push(LogEntry {
            mv,
            text,
            applied,
            mover,
            countdown_before,
            full_move: self.full_move,
        });

        self.ply += 1;
        if color == Color::Black {
            self.full_move += 1;
        }
        self.fingerprints.push(Fingerprint::of(&self.board));
        self.players[mover].clear_selection();
        self.current = 1 - mover;

        if mv.piece.kind == PieceType::Pawn && mv.to.rank == self.board.promotion_rank(color) {
            debug!("[ENGINE] Pawn on {} awaits promotion", mv.to);
            self.pending_promotion = Some(mv.to);
        }
    }

    /// Replace the pending pawn with a new piece of the chosen type
    fn promote(&mut self, square: Square, choice: PromotionChoice) {
        self.pending_promotion = None;
        let Some(pawn) = self.board.take(square) else {
            return;
        };
        let kind = choice.piece_type();
        let promoted = Piece {
            move_count: pawn.move_count,
            ..Piece::new(kind, pawn.color, square)
        };
        self.board.put(promoted);

        if let Some(entry) = self.log.last_mut() {
            entry.mv.promoted = true;
            entry.text.push_str(&notation::promotion_suffix(kind));
        }
        if let Some(latest) = self.fingerprints.last_mut() {
            *latest = Fingerprint::of(&self.board);
        }
        debug!("[ENGINE] Pawn on {} promoted to {:?}", square, kind);
    }

    /// Take back the most recent move; no-op when nothing has been played
    ///
    /// Restores the board (including castling rooks, en passant victims and
    /// promoted pawns), the capturer's list and material, the counters, the
    /// fifty-move countdown and the side to move. A pending promotion is
    /// dropped along with the pawn move that caused it.
    pub fn undo(&mut self) {
        let Some(entry) = self.log.pop() else {
            return;
        };

        self.board.revert(entry.applied);
        if entry.applied.captured.is_some() {
            self.players[entry.mover].return_capture();
        }
        self.fingerprints.pop();
        self.countdown = entry.countdown_before;
        self.full_move = entry.full_move;
        self.ply = self.ply.saturating_sub(1);
        self.current = entry.mover;
        self.pending_promotion = None;
        debug!("[ENGINE] Undid {}", entry.text);
    }
}
