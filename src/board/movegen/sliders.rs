use super::super::{Board, Square};

/// Bishop directions in search enumeration order.
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Rook directions in search enumeration order.
pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Queen (and king) directions in search enumeration order.
pub(crate) const ALL_DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Board {
    /// Same row or column, nothing in between.
    pub(crate) fn is_rook_move(&self, from: Square, to: Square) -> bool {
        if from.0 != to.0 && from.1 != to.1 {
            return false;
        }
        self.path_clear(from, to)
    }

    /// Same diagonal, nothing in between.
    pub(crate) fn is_bishop_move(&self, from: Square, to: Square) -> bool {
        if from.0.abs_diff(to.0) != from.1.abs_diff(to.1) {
            return false;
        }
        self.path_clear(from, to)
    }

    pub(crate) fn is_queen_move(&self, from: Square, to: Square) -> bool {
        self.is_rook_move(from, to) || self.is_bishop_move(from, to)
    }

    /// Every cell strictly between `from` and `to` is empty.
    ///
    /// The squares must share a row, column or diagonal.
    fn path_clear(&self, from: Square, to: Square) -> bool {
        let step_row = (to.0 as isize - from.0 as isize).signum();
        let step_col = (to.1 as isize - from.1 as isize).signum();
        let mut current = from;
        loop {
            current = match current.offset(step_row, step_col) {
                Some(next) => next,
                None => return false,
            };
            if current == to {
                return true;
            }
            if !self.is_empty(current) {
                return false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, Color, ColoredPiece, Piece, Square};

    #[test]
    fn test_rook_blocked_by_piece() {
        let mut board = Board::empty();
        board.set_piece(Square(7, 0), ColoredPiece::new(Color::White, Piece::Rook));
        board.set_piece(Square(4, 0), ColoredPiece::new(Color::Black, Piece::Pawn));
        assert!(board.is_rook_move(Square(7, 0), Square(4, 0)));
        assert!(!board.is_rook_move(Square(7, 0), Square(3, 0)));
        assert!(board.is_rook_move(Square(7, 0), Square(7, 7)));
        assert!(!board.is_rook_move(Square(7, 0), Square(6, 1)));
    }

    #[test]
    fn test_bishop_diagonals() {
        let mut board = Board::empty();
        board.set_piece(Square(7, 2), ColoredPiece::new(Color::White, Piece::Bishop));
        assert!(board.is_bishop_move(Square(7, 2), Square(2, 7)));
        assert!(board.is_bishop_move(Square(7, 2), Square(5, 0)));
        assert!(!board.is_bishop_move(Square(7, 2), Square(6, 2)));
        board.set_piece(Square(5, 4), ColoredPiece::new(Color::White, Piece::Pawn));
        assert!(!board.is_bishop_move(Square(7, 2), Square(4, 5)));
    }

    #[test]
    fn test_queen_is_union() {
        let mut board = Board::empty();
        board.set_piece(Square(4, 4), ColoredPiece::new(Color::White, Piece::Queen));
        assert!(board.is_queen_move(Square(4, 4), Square(0, 0)));
        assert!(board.is_queen_move(Square(4, 4), Square(4, 0)));
        assert!(!board.is_queen_move(Square(4, 4), Square(2, 3)));
    }
}
