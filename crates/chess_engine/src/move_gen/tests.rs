//! Test suite for the move rule generator
//!
//! # Test Organization
//!
//! - `test_pawn_*` - pushes, double step, captures, en passant
//! - `test_knight_*` - L-shaped jumps
//! - `test_sliding_*` / `test_rook_*` / `test_bishop_*` / `test_queen_*` - lines and blocking
//! - `test_king_*` - single steps and castling
//! - `test_attack_*` - attack detection used by castling

use super::*;
use crate::board::Board;

fn sq(text: &str) -> Square {
    text.parse().expect("test square")
}

/// Build an 8×8 board from `(kind, color, square)` triples
fn create_test_board(pieces: &[(PieceType, Color, &str)]) -> Board {
    let mut board = Board::empty(8);
    for &(kind, color, square) in pieces {
        board.place(kind, color, sq(square));
    }
    board
}

fn piece_at(board: &Board, square: &str) -> Piece {
    *board.get(sq(square)).expect("piece on square")
}

fn category(board: &Board, from: &str, to: &str, last: Option<&Move>) -> Option<MoveCategory> {
    can_move(board, &piece_at(board, from), sq(to), last)
}

/// Build the move record of a committed double push
fn double_push(board: &mut Board, from: &str, to: &str) -> Move {
    let mv = Move {
        category: Some(MoveCategory::Normal),
        ..Move::resolve(board, MoveIntent::new(sq(from), sq(to))).expect("pawn on square")
    };
    board.apply(&mv).expect("push matches board");
    mv
}

// ============================================================================
// Pawn Movement Tests
// ============================================================================

#[test]
fn test_pawn_single_forward_move() {
    //! White pawns advance toward higher ranks, black pawns toward lower ranks
    let board = create_test_board(&[
        (PieceType::Pawn, Color::White, "e2"),
        (PieceType::Pawn, Color::Black, "d7"),
    ]);

    assert_eq!(category(&board, "e2", "e3", None), Some(MoveCategory::Normal));
    assert_eq!(category(&board, "d7", "d6", None), Some(MoveCategory::Normal));
    assert_eq!(category(&board, "e2", "e1", None), None, "pawns never move backward");
    assert_eq!(category(&board, "d7", "d8", None), None, "pawns never move backward");
}

#[test]
fn test_pawn_double_move_from_start() {
    let board = create_test_board(&[(PieceType::Pawn, Color::White, "c2")]);
    assert_eq!(category(&board, "c2", "c4", None), Some(MoveCategory::Normal));
    assert_eq!(category(&board, "c2", "c5", None), None);
}

#[test]
fn test_pawn_double_move_needs_clear_path() {
    //! Both squares ahead must be empty, whatever their color
    let blocked_near = create_test_board(&[
        (PieceType::Pawn, Color::White, "c2"),
        (PieceType::Knight, Color::Black, "c3"),
    ]);
    assert_eq!(category(&blocked_near, "c2", "c4", None), None);

    let blocked_far = create_test_board(&[
        (PieceType::Pawn, Color::White, "c2"),
        (PieceType::Knight, Color::White, "c4"),
    ]);
    assert_eq!(category(&blocked_far, "c2", "c4", None), None);
    assert_eq!(category(&blocked_far, "c2", "c3", None), Some(MoveCategory::Normal));
}

#[test]
fn test_pawn_double_move_only_once() {
    //! A pawn that has moved, or stands off its start rank, cannot double-step
    let mut board = create_test_board(&[(PieceType::Pawn, Color::White, "c3")]);
    assert_eq!(category(&board, "c3", "c5", None), None, "not on the start rank");

    let mut pawn = piece_at(&board, "c3");
    board.take(sq("c3"));
    pawn.position = sq("c2");
    pawn.move_count = 2;
    board.put(pawn);
    assert_eq!(category(&board, "c2", "c4", None), None, "already moved");
}

#[test]
fn test_pawn_forward_move_blocked() {
    let board = create_test_board(&[
        (PieceType::Pawn, Color::White, "e4"),
        (PieceType::Pawn, Color::Black, "e5"),
    ]);
    assert_eq!(category(&board, "e4", "e5", None), None, "pawns cannot capture forward");
}

#[test]
fn test_pawn_diagonal_capture() {
    let board = create_test_board(&[
        (PieceType::Pawn, Color::White, "e4"),
        (PieceType::Knight, Color::Black, "d5"),
        (PieceType::Knight, Color::White, "f5"),
    ]);
    assert_eq!(category(&board, "e4", "d5", None), Some(MoveCategory::Normal));
    assert_eq!(category(&board, "e4", "f5", None), None, "own piece on the diagonal");
    assert_eq!(category(&board, "e4", "f3", None), None);
}

#[test]
fn test_pawn_no_diagonal_move_to_empty_square() {
    let board = create_test_board(&[(PieceType::Pawn, Color::White, "e4")]);
    assert_eq!(category(&board, "e4", "d5", None), None);
}

#[test]
fn test_pawn_en_passant_after_double_push() {
    //! Black d7-d5 beside a white pawn on e5 allows exd6 en passant
    let mut board = create_test_board(&[
        (PieceType::Pawn, Color::White, "e5"),
        (PieceType::Pawn, Color::Black, "d7"),
    ]);
    let last = double_push(&mut board, "d7", "d5");

    assert_eq!(
        category(&board, "e5", "d6", Some(&last)),
        Some(MoveCategory::EnPassant)
    );
    assert_eq!(category(&board, "e5", "d6", None), None, "no preceding move");
}

#[test]
fn test_pawn_en_passant_requires_double_push() {
    //! A single step that ends beside the pawn does not allow en passant
    let mut board = create_test_board(&[
        (PieceType::Pawn, Color::White, "e5"),
        (PieceType::Pawn, Color::Black, "d6"),
    ]);
    let last = double_push(&mut board, "d6", "d5");
    assert_eq!(category(&board, "e5", "d6", Some(&last)), None);
}

#[test]
fn test_pawn_en_passant_requires_adjacent_file() {
    let mut board = create_test_board(&[
        (PieceType::Pawn, Color::White, "e5"),
        (PieceType::Pawn, Color::Black, "c7"),
    ]);
    let last = double_push(&mut board, "c7", "c5");
    assert_eq!(category(&board, "e5", "c6", Some(&last)), None);
    assert_eq!(category(&board, "e5", "d6", Some(&last)), None);
}

// ============================================================================
// Knight Movement Tests
// ============================================================================

#[test]
fn test_knight_l_shape() {
    let board = create_test_board(&[(PieceType::Knight, Color::White, "d4")]);
    let expected = ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"];
    let mut targets: Vec<String> = reachable(&board, &piece_at(&board, "d4"), None)
        .into_iter()
        .map(|(square, _)| square.to_string())
        .collect();
    targets.sort();
    assert_eq!(targets, expected);
}

#[test]
fn test_knight_jumps_over_pieces() {
    let board = create_test_board(&[
        (PieceType::Knight, Color::White, "b1"),
        (PieceType::Pawn, Color::White, "b2"),
        (PieceType::Pawn, Color::White, "c2"),
        (PieceType::Pawn, Color::White, "a2"),
    ]);
    assert_eq!(category(&board, "b1", "c3", None), Some(MoveCategory::Normal));
    assert_eq!(category(&board, "b1", "d2", None), Some(MoveCategory::Normal));
    assert_eq!(category(&board, "b1", "b3", None), None, "b3 is not an L-jump");
}

// ============================================================================
// Sliding Piece Tests
// ============================================================================

#[test]
fn test_rook_lines() {
    let board = create_test_board(&[(PieceType::Rook, Color::White, "d4")]);
    assert_eq!(category(&board, "d4", "d8", None), Some(MoveCategory::Normal));
    assert_eq!(category(&board, "d4", "a4", None), Some(MoveCategory::Normal));
    assert_eq!(category(&board, "d4", "e5", None), None, "rooks never move diagonally");
    assert_eq!(reachable(&board, &piece_at(&board, "d4"), None).len(), 14);
}

#[test]
fn test_bishop_lines() {
    let board = create_test_board(&[(PieceType::Bishop, Color::White, "c1")]);
    assert_eq!(category(&board, "c1", "h6", None), Some(MoveCategory::Normal));
    assert_eq!(category(&board, "c1", "a3", None), Some(MoveCategory::Normal));
    assert_eq!(category(&board, "c1", "c5", None), None);
    assert_eq!(category(&board, "c1", "d3", None), None);
}

#[test]
fn test_queen_lines() {
    let board = create_test_board(&[(PieceType::Queen, Color::White, "d4")]);
    assert_eq!(category(&board, "d4", "h8", None), Some(MoveCategory::Normal));
    assert_eq!(category(&board, "d4", "d1", None), Some(MoveCategory::Normal));
    assert_eq!(category(&board, "d4", "e6", None), None);
    assert_eq!(reachable(&board, &piece_at(&board, "d4"), None).len(), 27);
}

#[test]
fn test_sliding_capture_stops_at_blocker() {
    //! The first occupied square in a direction is the last one reachable
    let board = create_test_board(&[
        (PieceType::Rook, Color::White, "a1"),
        (PieceType::Pawn, Color::Black, "a4"),
        (PieceType::Pawn, Color::White, "d1"),
    ]);
    assert_eq!(category(&board, "a1", "a4", None), Some(MoveCategory::Normal));
    assert_eq!(category(&board, "a1", "a5", None), None);
    assert_eq!(category(&board, "a1", "d1", None), None);
    assert_eq!(category(&board, "a1", "e1", None), None);
    assert_eq!(category(&board, "a1", "c1", None), Some(MoveCategory::Normal));
}

#[test]
fn test_sliding_blocking_holds_for_every_reachable_square() {
    //! For each slider and each reachable square, the squares strictly between
    //! are empty; an occupied reachable square is the end of its line.
    let board = create_test_board(&[
        (PieceType::Queen, Color::White, "d4"),
        (PieceType::Rook, Color::White, "b6"),
        (PieceType::Bishop, Color::Black, "f6"),
        (PieceType::Pawn, Color::Black, "d6"),
        (PieceType::Pawn, Color::White, "b2"),
        (PieceType::Knight, Color::Black, "g4"),
        (PieceType::Knight, Color::White, "d2"),
    ]);

    for from in ["d4", "b6", "f6"] {
        let piece = piece_at(&board, from);
        for (target, _) in reachable(&board, &piece, None) {
            let (df, dr) = piece.position.delta(target);
            let (sf, sr) = (df.signum(), dr.signum());
            let mut current = piece.position.offset(sf, sr).expect("on board");
            while current != target {
                assert!(board.is_empty(current), "{from}->{target} jumps over {current}");
                current = current.offset(sf, sr).expect("on board");
            }
            if !board.is_empty(target) {
                if let Some(next) = target.offset(sf, sr).filter(|s| board.contains(*s)) {
                    assert_eq!(
                        can_move(&board, &piece, next, None),
                        None,
                        "{from} reaches {next} past the occupied {target}"
                    );
                }
            }
        }
    }
}

// ============================================================================
// King Movement Tests
// ============================================================================

#[test]
fn test_king_single_steps() {
    let board = create_test_board(&[(PieceType::King, Color::White, "e4")]);
    assert_eq!(reachable(&board, &piece_at(&board, "e4"), None).len(), 8);
    assert_eq!(category(&board, "e4", "e6", None), None);
}

fn castling_board() -> Board {
    create_test_board(&[
        (PieceType::King, Color::White, "e1"),
        (PieceType::Rook, Color::White, "a1"),
        (PieceType::Rook, Color::White, "h1"),
        (PieceType::King, Color::Black, "e8"),
        (PieceType::Rook, Color::Black, "a8"),
        (PieceType::Rook, Color::Black, "h8"),
    ])
}

#[test]
fn test_king_castles_both_sides() {
    let board = castling_board();
    assert_eq!(category(&board, "e1", "g1", None), Some(MoveCategory::ShortCastle));
    assert_eq!(category(&board, "e1", "c1", None), Some(MoveCategory::LongCastle));
    assert_eq!(category(&board, "e8", "g8", None), Some(MoveCategory::ShortCastle));
    assert_eq!(category(&board, "e8", "c8", None), Some(MoveCategory::LongCastle));
}

#[test]
fn test_king_castle_blocked_by_piece_between() {
    //! b1 is not crossed by the king but still blocks the long castle
    let mut board = castling_board();
    board.place(PieceType::Knight, Color::White, sq("b1"));
    assert_eq!(category(&board, "e1", "c1", None), None);
    assert_eq!(category(&board, "e1", "g1", None), Some(MoveCategory::ShortCastle));
}

#[test]
fn test_king_castle_requires_unmoved_pieces() {
    let mut board = castling_board();
    let mut rook = board.take(sq("h1")).expect("rook on h1");
    rook.move_count = 1;
    board.put(rook);
    assert_eq!(category(&board, "e1", "g1", None), None, "rook has moved");

    let mut king = board.take(sq("e1")).expect("king on e1");
    king.move_count = 2;
    board.put(king);
    assert_eq!(category(&board, "e1", "c1", None), None, "king has moved");
}

#[test]
fn test_king_castle_through_attacked_square() {
    //! A rook eyeing f1 forbids O-O; one eyeing b1 does not forbid O-O-O
    let mut board = castling_board();
    board.place(PieceType::Rook, Color::Black, sq("f5"));
    board.place(PieceType::Rook, Color::Black, sq("b5"));
    assert_eq!(category(&board, "e1", "g1", None), None);
    assert_eq!(category(&board, "e1", "c1", None), Some(MoveCategory::LongCastle));
}

#[test]
fn test_king_cannot_castle_out_of_check() {
    let mut board = castling_board();
    board.place(PieceType::Rook, Color::Black, sq("e5"));
    assert_eq!(category(&board, "e1", "g1", None), None);
    assert_eq!(category(&board, "e1", "c1", None), None);
}

#[test]
fn test_king_castle_sees_pawn_diagonals() {
    //! Pawns guard the squares diagonally ahead of them and nothing else
    let mut board = castling_board();
    board.place(PieceType::Pawn, Color::Black, sq("f2"));
    assert_eq!(
        category(&board, "e1", "g1", None),
        None,
        "f2 pawn attacks e1 and g1"
    );

    let mut board = castling_board();
    board.place(PieceType::Pawn, Color::Black, sq("h3"));
    assert_eq!(category(&board, "e1", "g1", None), Some(MoveCategory::ShortCastle));
}

// ============================================================================
// Attack and Vision Tests
// ============================================================================

#[test]
fn test_attack_pawn_diagonals_only() {
    let board = create_test_board(&[(PieceType::Pawn, Color::White, "e4")]);
    assert!(is_square_attacked(&board, sq("d5"), Color::White));
    assert!(is_square_attacked(&board, sq("f5"), Color::White));
    assert!(!is_square_attacked(&board, sq("e5"), Color::White));
    assert!(!is_square_attacked(&board, sq("d5"), Color::Black));
}

#[test]
fn test_vision_excludes_castles() {
    let board = castling_board();
    let seen = vision(&board, &piece_at(&board, "e1"), None);
    assert!(seen.contains(&sq("f1")));
    assert!(!seen.contains(&sq("g1")));
    assert!(!seen.contains(&sq("c1")));
}

#[test]
fn test_own_square_and_own_pieces_unreachable() {
    let board = Board::standard();
    for piece in board.pieces() {
        assert_eq!(can_move(&board, piece, piece.position, None), None);
        for other in board.pieces_of(piece.color) {
            assert_eq!(can_move(&board, piece, other.position, None), None);
        }
    }
}
