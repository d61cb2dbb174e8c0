//! Pseudo-legal move enumeration for the search.
//!
//! No castling and no en passant: the search copies carry neither castling
//! flags nor an en passant target.

use super::super::movegen::{ALL_DIRECTIONS, BISHOP_DIRECTIONS, KNIGHT_OFFSETS, ROOK_DIRECTIONS};
use super::super::{Board, Color, Move, MoveList, Piece, Square};

/// Every pseudo-legal move for `color`, sources in row-major order.
pub(crate) fn generate_moves(board: &Board, color: Color) -> MoveList {
    let mut moves = MoveList::new();
    for (from, token) in board.pieces_of(color) {
        match token.piece {
            Piece::Pawn => pawn_moves(board, from, color, &mut moves),
            Piece::Knight => step_moves(board, from, color, &KNIGHT_OFFSETS, &mut moves),
            Piece::Bishop => slide_moves(board, from, color, &BISHOP_DIRECTIONS, &mut moves),
            Piece::Rook => slide_moves(board, from, color, &ROOK_DIRECTIONS, &mut moves),
            Piece::Queen => slide_moves(board, from, color, &ALL_DIRECTIONS, &mut moves),
            Piece::King => step_moves(board, from, color, &ALL_DIRECTIONS, &mut moves),
        }
    }
    moves
}

fn pawn_moves(board: &Board, from: Square, color: Color, moves: &mut MoveList) {
    let dir = color.pawn_direction();
    let Some(one) = from.offset(dir, 0) else {
        return;
    };

    if board.is_empty(one) {
        moves.push(Move::new(from, one));
        if from.0 == color.pawn_start_row() {
            if let Some(two) = one.offset(dir, 0).filter(|&sq| board.is_empty(sq)) {
                moves.push(Move::new(from, two));
            }
        }
    }

    for d_col in [-1, 1] {
        if let Some(to) = from.offset(dir, d_col) {
            if board.is_color(to, color.opponent()) {
                moves.push(Move::new(from, to));
            }
        }
    }
}

fn step_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(isize, isize)],
    moves: &mut MoveList,
) {
    for &(dr, dc) in offsets {
        if let Some(to) = from.offset(dr, dc) {
            if !board.is_color(to, color) {
                moves.push(Move::new(from, to));
            }
        }
    }
}

fn slide_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(isize, isize)],
    moves: &mut MoveList,
) {
    for &(dr, dc) in directions {
        let mut current = from;
        while let Some(to) = current.offset(dr, dc) {
            match board.piece_at(to) {
                None => moves.push(Move::new(from, to)),
                Some(token) => {
                    if token.color != color {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ColoredPiece;

    #[test]
    fn test_start_position_count() {
        let board = Board::starting_position();
        assert_eq!(generate_moves(&board, Color::White).len(), 20);
        assert_eq!(generate_moves(&board, Color::Black).len(), 20);
    }

    #[test]
    fn test_pawn_order() {
        let mut board = Board::empty();
        board.set_piece(Square(6, 4), ColoredPiece::new(Color::White, Piece::Pawn));
        board.set_piece(Square(5, 3), ColoredPiece::new(Color::Black, Piece::Knight));
        board.set_piece(Square(5, 5), ColoredPiece::new(Color::Black, Piece::Knight));
        let moves = generate_moves(&board, Color::White);
        let got: Vec<Move> = moves.iter().copied().collect();
        assert_eq!(
            got,
            vec![
                Move::new(Square(6, 4), Square(5, 4)),
                Move::new(Square(6, 4), Square(4, 4)),
                Move::new(Square(6, 4), Square(5, 3)),
                Move::new(Square(6, 4), Square(5, 5)),
            ]
        );
    }

    #[test]
    fn test_blocked_pawn_has_no_double_push() {
        let mut board = Board::empty();
        board.set_piece(Square(1, 0), ColoredPiece::new(Color::Black, Piece::Pawn));
        board.set_piece(Square(2, 0), ColoredPiece::new(Color::White, Piece::Rook));
        assert!(generate_moves(&board, Color::Black).is_empty());
    }

    #[test]
    fn test_rook_stops_at_capture() {
        let mut board = Board::empty();
        board.set_piece(Square(7, 0), ColoredPiece::new(Color::White, Piece::Rook));
        board.set_piece(Square(5, 0), ColoredPiece::new(Color::Black, Piece::Pawn));
        board.set_piece(Square(7, 2), ColoredPiece::new(Color::White, Piece::King));
        let moves = generate_moves(&board, Color::White);
        let rook: Vec<Square> = moves
            .iter()
            .filter(|m| m.from() == Square(7, 0))
            .map(|m| m.to())
            .collect();
        assert_eq!(rook, vec![Square(6, 0), Square(5, 0), Square(7, 1)]);
    }
}
