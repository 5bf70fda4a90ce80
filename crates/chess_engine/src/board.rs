//! Position store
//!
//! The board is an arena of `N × N` slots indexed by square, each either
//! empty or owning one [`Piece`]. Moves and captures are slot takes and puts,
//! so a captured or promoted piece is simply a value moved out of its slot.
//!
//! Invariant: a stored piece's `position` always equals the square of the
//! slot holding it. Every method that stores a piece goes through
//! [`Board::put`], which enforces this.
//!
//! Indexing a square outside the board is a caller bug and panics; use
//! [`Board::contains`] or [`Board::check_bounds`] on untrusted input.

use serde::Serialize;

use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::*;

/// Dense square → optional piece mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: u8,
    slots: Vec<Option<Piece>>,
}

/// Undo record produced by [`Board::apply`]
///
/// Holds everything [`Board::revert`] needs to restore the exact pre-move
/// board: the move (with the mover as it was before moving), the piece taken
/// off the board, and the castling rook's relocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub mv: Move,
    pub category: MoveCategory,
    pub captured: Option<Piece>,
    pub rook_move: Option<(Square, Square)>,
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    /// Empty `size × size` board
    pub fn empty(size: u8) -> Self {
        assert!(
            (1..=MAX_BOARD_SIZE).contains(&size),
            "board size {size} must be within 1..={MAX_BOARD_SIZE}"
        );
        Self {
            size,
            slots: vec![None; size as usize * size as usize],
        }
    }

    /// Standard 8×8 board in the starting position
    pub fn standard() -> Self {
        let mut board = Self::empty(STANDARD_BOARD_SIZE);
        board.place_default_layout();
        board
    }

    /// `size × size` board with the default layout placed on it
    pub fn with_default_layout(size: u8) -> ChessEngineResult<Self> {
        if !(STANDARD_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(ChessEngineError::UnsupportedBoardSize { size });
        }
        let mut board = Self::empty(size);
        board.set_default_layout()?;
        Ok(board)
    }

    /// Clear the board and place the default starting layout
    ///
    /// Pawns fill the second rank of each side across every file. The
    /// back-rank pieces stand on files a..g with the second rook on the last
    /// file, which is h on a standard board.
    pub fn set_default_layout(&mut self) -> ChessEngineResult<()> {
        if self.size < STANDARD_BOARD_SIZE {
            return Err(ChessEngineError::UnsupportedBoardSize { size: self.size });
        }
        self.clear();
        self.place_default_layout();
        Ok(())
    }

    fn place_default_layout(&mut self) {
        let last = self.size;
        for file in 1..=last {
            self.place(PieceType::Pawn, Color::White, Square::new(file, 2));
            self.place(PieceType::Pawn, Color::Black, Square::new(file, last - 1));
        }
        for (i, kind) in BACK_RANK.iter().enumerate() {
            // The h-rook stands on the edge file so both castles stay possible
            let file = if i + 1 == BACK_RANK.len() { last } else { i as u8 + 1 };
            self.place(*kind, Color::White, Square::new(file, 1));
            self.place(*kind, Color::Black, Square::new(file, last));
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn contains(&self, square: Square) -> bool {
        (1..=self.size).contains(&square.file) && (1..=self.size).contains(&square.rank)
    }

    pub fn check_bounds(&self, square: Square) -> ChessEngineResult<()> {
        if self.contains(square) {
            Ok(())
        } else {
            Err(ChessEngineError::SquareOutOfBounds {
                file: square.file,
                rank: square.rank,
                size: self.size,
            })
        }
    }

    fn index(&self, square: Square) -> usize {
        assert!(
            self.contains(square),
            "square ({}, {}) is outside the {}x{} board",
            square.file,
            square.rank,
            self.size,
            self.size
        );
        (square.rank as usize - 1) * self.size as usize + (square.file as usize - 1)
    }

    pub fn get(&self, square: Square) -> Option<&Piece> {
        self.slots[self.index(square)].as_ref()
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Create a fresh piece on `square`, returning whatever stood there
    pub fn place(&mut self, kind: PieceType, color: Color, square: Square) -> Option<Piece> {
        self.put(Piece::new(kind, color, square))
    }

    /// Store `piece` under its own `position`, returning the previous occupant
    pub fn put(&mut self, piece: Piece) -> Option<Piece> {
        let idx = self.index(piece.position);
        self.slots[idx].replace(piece)
    }

    /// Remove and return the piece on `square`
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        let idx = self.index(square);
        self.slots[idx].take()
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    /// Every square, rank by rank from a1
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        let size = self.size;
        (1..=size).flat_map(move |rank| (1..=size).map(move |file| Square::new(file, rank)))
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.slots.iter().flatten()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |piece| piece.color == color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|piece| piece.kind == PieceType::King)
            .map(|piece| piece.position)
    }

    /// Total material value of one side
    pub fn material(&self, color: Color) -> u32 {
        self.pieces_of(color).map(Piece::value).sum()
    }

    pub fn square_shade(&self, square: Square) -> SquareShade {
        if (square.file + square.rank) % 2 == 0 {
            SquareShade::Dark
        } else {
            SquareShade::Light
        }
    }

    /// Rank a pawn of `color` promotes on
    pub fn promotion_rank(&self, color: Color) -> u8 {
        match color {
            Color::White => self.size,
            Color::Black => 1,
        }
    }

    /// Rank pawns of `color` start on and may double-step from
    pub fn pawn_start_rank(&self, color: Color) -> u8 {
        match color {
            Color::White => 2,
            Color::Black => self.size.saturating_sub(1),
        }
    }

    /// Castling geometry for a king travelling `king_from` → `king_to`
    ///
    /// The rook stands on the edge file in the direction of travel and lands
    /// on the square the king crosses. The side whose rook is nearer the king
    /// is the short castle (ties go to the higher files). Returns `None` when
    /// the king does not travel exactly two files along its rank.
    pub fn castle_rook_squares(
        &self,
        king_from: Square,
        king_to: Square,
    ) -> Option<(Square, Square, MoveCategory)> {
        let (file_delta, rank_delta) = king_from.delta(king_to);
        if rank_delta != 0 || file_delta.abs() != 2 {
            return None;
        }
        let dir = file_delta.signum();
        let (near_edge, far_edge) = if dir > 0 { (self.size, 1) } else { (1, self.size) };
        let rook_from = Square::new(near_edge, king_from.rank);
        let rook_to = king_from.offset(dir, 0)?;

        let this_side = king_from.file.abs_diff(near_edge);
        let other_side = king_from.file.abs_diff(far_edge);
        let category = if this_side < other_side || (this_side == other_side && dir > 0) {
            MoveCategory::ShortCastle
        } else {
            MoveCategory::LongCastle
        };
        Some((rook_from, rook_to, category))
    }

    /// Carry out `mv`, including special-move side effects
    ///
    /// Checks that the declared pieces still match the board; a mismatch
    /// leaves the board untouched and returns [`ChessEngineError::StaleMove`].
    /// Move counts of the mover (and of a castling rook) are incremented.
    /// Legality is not checked here.
    pub fn apply(&mut self, mv: &Move) -> ChessEngineResult<AppliedMove> {
        let stale = || ChessEngineError::StaleMove {
            from: mv.from.to_string(),
            to: mv.to.to_string(),
        };
        self.check_bounds(mv.from)?;
        self.check_bounds(mv.to)?;
        if mv.from == mv.to || self.get(mv.from) != Some(&mv.piece) {
            return Err(stale());
        }

        let category = mv.category.unwrap_or(MoveCategory::Normal);
        let mut rook_move = None;
        let captured = match category {
            MoveCategory::Normal => {
                if self.get(mv.to) != mv.captured.as_ref() {
                    return Err(stale());
                }
                self.take(mv.to)
            }
            MoveCategory::EnPassant => {
                let victim_square = Square::new(mv.to.file, mv.from.rank);
                let is_enemy_pawn = matches!(
                    self.get(victim_square),
                    Some(p) if p.kind == PieceType::Pawn && p.color != mv.piece.color
                );
                if !self.is_empty(mv.to) || !is_enemy_pawn {
                    return Err(stale());
                }
                self.take(victim_square)
            }
            MoveCategory::ShortCastle | MoveCategory::LongCastle => {
                let (rook_from, rook_to, _) =
                    self.castle_rook_squares(mv.from, mv.to).ok_or_else(stale)?;
                let is_own_rook = matches!(
                    self.get(rook_from),
                    Some(p) if p.kind == PieceType::Rook && p.color == mv.piece.color
                );
                if !self.is_empty(mv.to) || !self.is_empty(rook_to) || !is_own_rook {
                    return Err(stale());
                }
                if let Some(mut rook) = self.take(rook_from) {
                    rook.position = rook_to;
                    rook.move_count += 1;
                    self.put(rook);
                }
                rook_move = Some((rook_from, rook_to));
                None
            }
        };

        if let Some(mut mover) = self.take(mv.from) {
            mover.position = mv.to;
            mover.move_count += 1;
            self.put(mover);
        }

        Ok(AppliedMove {
            mv: *mv,
            category,
            captured,
            rook_move,
        })
    }

    /// Undo an [`AppliedMove`], restoring the exact pre-move board
    ///
    /// Whatever stands on the destination (the mover, or the piece it was
    /// promoted to) is discarded and the original mover is put back.
    pub fn revert(&mut self, applied: AppliedMove) {
        self.take(applied.mv.to);
        self.put(applied.mv.piece);
        if let Some((rook_from, rook_to)) = applied.rook_move {
            if let Some(mut rook) = self.take(rook_to) {
                rook.position = rook_from;
                rook.move_count = rook.move_count.saturating_sub(1);
                self.put(rook);
            }
        }
        if let Some(captured) = applied.captured {
            self.put(captured);
        }
    }
}
