//! Legality checking
//!
//! A move is legal when the mover owns the start piece, the move rule
//! generator accepts the destination, and the mover's king is not left in
//! check. King safety is tested by really playing the move on the board
//! inside a [`Simulation`] and inspecting the result.
//!
//! ## Two-phase protocol
//!
//! 1. `Simulation::apply` plays the move (en passant victim removed, castling
//!    rook relocated)
//! 2. the caller inspects [`Simulation::board`]
//! 3. either [`Simulation::commit`] keeps the move, or the guard is dropped
//!    and the board is reverted to its exact prior state
//!
//! [`is_legal`] and [`legal_moves`] always drop the guard, so they leave the
//! board unchanged. The game state machine keeps the guard returned by
//! [`simulate`] and commits it.

use tracing::trace;

use crate::board::{AppliedMove, Board};
use crate::error::ChessEngineResult;
use crate::move_gen;
use crate::types::*;

/// A move tentatively applied to a board
///
/// Dropping the guard without calling [`Simulation::commit`] reverts the move.
#[must_use = "dropping a simulation reverts the move"]
pub struct Simulation<'a> {
    board: &'a mut Board,
    applied: AppliedMove,
    committed: bool,
}

impl<'a> Simulation<'a> {
    /// Play `mv` on `board`; fails if the move does not match the board
    pub fn apply(board: &'a mut Board, mv: &Move) -> ChessEngineResult<Self> {
        let applied = board.apply(mv)?;
        Ok(Self {
            board,
            applied,
            committed: false,
        })
    }

    /// The board with the move played
    pub fn board(&self) -> &Board {
        self.board
    }

    pub fn applied(&self) -> &AppliedMove {
        &self.applied
    }

    /// Keep the move on the board and hand back its undo record
    pub fn commit(mut self) -> AppliedMove {
        self.committed = true;
        self.applied
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.board.revert(self.applied);
        }
    }
}

/// Whether the king of `color` is attacked by an enemy piece
///
/// Only capture-style (`Normal`) reachability counts; a board with no king of
/// that color is never in check.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_square) = board.king_square(color) else {
        return false;
    };
    board.pieces_of(color.opposite()).any(|piece| {
        move_gen::can_move(board, piece, king_square, None) == Some(MoveCategory::Normal)
    })
}

/// Play `mv` for `mover` if it is legal, returning the uncommitted guard
///
/// Returns `None`, with the board unchanged, when the start piece is missing
/// or belongs to the other side, the destination is unreachable, the move
/// no longer matches the board, or the mover's king would be in check.
pub fn simulate<'a>(
    board: &'a mut Board,
    mv: &Move,
    mover: Color,
    last_move: Option<&Move>,
) -> Option<Simulation<'a>> {
    if mv.piece.color != mover || board.get(mv.from) != Some(&mv.piece) {
        return None;
    }
    let category = move_gen::can_move(board, &mv.piece, mv.to, last_move)?;
    let candidate = Move {
        category: Some(category),
        ..*mv
    };
    let simulation = Simulation::apply(board, &candidate).ok()?;
    if is_king_in_check(simulation.board(), mover) {
        trace!("[ENGINE] {}{} leaves the {} king in check", mv.from, mv.to, mover);
        return None;
    }
    Some(simulation)
}

/// The category `mv` would be played as, if legal; the board is left unchanged
pub fn legal_category(
    board: &mut Board,
    mv: &Move,
    mover: Color,
    last_move: Option<&Move>,
) -> Option<MoveCategory> {
    simulate(board, mv, mover, last_move).map(|simulation| simulation.applied().category)
}

pub fn is_legal(board: &mut Board, mv: &Move, mover: Color, last_move: Option<&Move>) -> bool {
    legal_category(board, mv, mover, last_move).is_some()
}

/// Every legal move of the piece on `from`, with categories filled in
///
/// Tries each square of the board in turn; empty `from` or a piece of the
/// wrong color yields no moves.
pub fn legal_moves(
    board: &mut Board,
    from: Square,
    mover: Color,
    last_move: Option<&Move>,
) -> Vec<Move> {
    let targets: Vec<Square> = board.squares().collect();
    targets
        .into_iter()
        .filter_map(|to| {
            let mv = Move::resolve(board, MoveIntent::new(from, to)).ok()?;
            let category = legal_category(board, &mv, mover, last_move)?;
            Some(Move {
                category: Some(category),
                ..mv
            })
        })
        .collect()
}

/// Number of legal moves available to `color`
pub fn legal_move_count(board: &mut Board, color: Color, last_move: Option<&Move>) -> usize {
    let origins: Vec<Square> = board.pieces_of(color).map(|piece| piece.position).collect();
    origins
        .into_iter()
        .map(|from| legal_moves(board, from, color, last_move).len())
        .sum()
}

/// Whether `color` has at least one legal move
pub fn has_legal_move(board: &mut Board, color: Color, last_move: Option<&Move>) -> bool {
    let origins: Vec<Square> = board.pieces_of(color).map(|piece| piece.position).collect();
    let targets: Vec<Square> = board.squares().collect();
    origins.into_iter().any(|from| {
        targets.iter().any(|&to| {
            Move::resolve(board, MoveIntent::new(from, to))
                .map(|mv| is_legal(board, &mv, color, last_move))
                .unwrap_or(false)
        })
    })
}
