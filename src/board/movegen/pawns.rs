use super::super::{Board, Color, Piece, Square};

impl Board {
    /// Pawn geometry for a move from `from` to `to` by a pawn of `color`.
    ///
    /// Forward one onto an empty cell, forward two from the start row over
    /// two empty cells, or one diagonal step onto an opponent piece or onto
    /// the empty en passant target.
    pub(crate) fn is_pawn_move(
        &self,
        from: Square,
        to: Square,
        color: Color,
        en_passant: Option<Square>,
    ) -> bool {
        let dir = color.pawn_direction();
        let d_row = to.0 as isize - from.0 as isize;
        let d_col = to.1 as isize - from.1 as isize;
        let target = self.piece_at(to);

        if d_col == 0 {
            if d_row == dir && target.is_none() {
                return true;
            }
            if from.0 == color.pawn_start_row() && d_row == 2 * dir && target.is_none() {
                return from
                    .offset(dir, 0)
                    .is_some_and(|between| self.is_empty(between));
            }
            return false;
        }

        if d_col.abs() != 1 || d_row != dir {
            return false;
        }

        match target {
            Some(token) => token.color != color,
            None => Some(to) == en_passant && self.has_en_passant_victim(from, to, color),
        }
    }

    /// The pawn an en passant capture from `from` to `to` would remove sits
    /// beside the capturer, on the destination column.
    fn has_en_passant_victim(&self, from: Square, to: Square, color: Color) -> bool {
        self.piece_at(Square(from.0, to.1))
            .is_some_and(|p| p.color != color && p.piece == Piece::Pawn)
    }

    /// Pawns attack both forward diagonals, occupied or not.
    pub(crate) fn pawn_attacks(from: Square, to: Square, color: Color) -> bool {
        let d_row = to.0 as isize - from.0 as isize;
        let d_col = to.1 as isize - from.1 as isize;
        d_row == color.pawn_direction() && d_col.abs() == 1
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Color, ColoredPiece, Piece, Square};

    fn with(pieces: &[(Square, Color, Piece)]) -> Board {
        let mut board = Board::empty();
        for &(sq, color, piece) in pieces {
            board.set_piece(sq, ColoredPiece::new(color, piece));
        }
        board
    }

    #[test]
    fn test_single_and_double_push() {
        let board = with(&[(Square(6, 4), Color::White, Piece::Pawn)]);
        assert!(board.is_pawn_move(Square(6, 4), Square(5, 4), Color::White, None));
        assert!(board.is_pawn_move(Square(6, 4), Square(4, 4), Color::White, None));
        assert!(!board.is_pawn_move(Square(6, 4), Square(3, 4), Color::White, None));
        assert!(!board.is_pawn_move(Square(6, 4), Square(7, 4), Color::White, None));
    }

    #[test]
    fn test_double_push_needs_clear_path() {
        let board = with(&[
            (Square(1, 2), Color::Black, Piece::Pawn),
            (Square(2, 2), Color::White, Piece::Knight),
        ]);
        assert!(!board.is_pawn_move(Square(1, 2), Square(3, 2), Color::Black, None));
        assert!(!board.is_pawn_move(Square(1, 2), Square(2, 2), Color::Black, None));
    }

    #[test]
    fn test_double_push_only_from_start_row() {
        let board = with(&[(Square(5, 0), Color::White, Piece::Pawn)]);
        assert!(!board.is_pawn_move(Square(5, 0), Square(3, 0), Color::White, None));
    }

    #[test]
    fn test_diagonal_requires_victim() {
        let board = with(&[
            (Square(4, 4), Color::White, Piece::Pawn),
            (Square(3, 3), Color::Black, Piece::Knight),
            (Square(3, 5), Color::White, Piece::Knight),
        ]);
        assert!(board.is_pawn_move(Square(4, 4), Square(3, 3), Color::White, None));
        assert!(!board.is_pawn_move(Square(4, 4), Square(3, 5), Color::White, None));
        let empty_diag = with(&[(Square(4, 4), Color::White, Piece::Pawn)]);
        assert!(!empty_diag.is_pawn_move(Square(4, 4), Square(3, 3), Color::White, None));
    }

    #[test]
    fn test_en_passant_geometry() {
        let board = with(&[
            (Square(3, 4), Color::White, Piece::Pawn),
            (Square(3, 3), Color::Black, Piece::Pawn),
        ]);
        let target = Some(Square(2, 3));
        assert!(board.is_pawn_move(Square(3, 4), Square(2, 3), Color::White, target));
        assert!(!board.is_pawn_move(Square(3, 4), Square(2, 3), Color::White, None));
        assert!(!board.is_pawn_move(Square(3, 4), Square(2, 5), Color::White, target));
    }

    #[test]
    fn test_attack_pattern_ignores_occupancy() {
        assert!(Board::pawn_attacks(Square(6, 4), Square(5, 3), Color::White));
        assert!(Board::pawn_attacks(Square(1, 4), Square(2, 5), Color::Black));
        assert!(!Board::pawn_attacks(Square(6, 4), Square(5, 4), Color::White));
        assert!(!Board::pawn_attacks(Square(6, 4), Square(7, 3), Color::White));
    }
}
