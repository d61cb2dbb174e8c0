use super::super::{Board, CastlingState, Color, ColoredPiece, Piece, Square, Wing};
use super::knights::is_knight_move;

impl Board {
    /// True if any piece of `by` reaches `square` by geometry alone.
    ///
    /// Castling never attacks anything, and pawns attack both forward
    /// diagonals whether or not the square is occupied. A square holding a
    /// piece of `by` is never attacked by `by`.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        if !square.is_on_board() || self.is_color(square, by) {
            return false;
        }
        self.pieces_of(by)
            .any(|(from, token)| self.attacks(from, token, square))
    }

    fn attacks(&self, from: Square, token: ColoredPiece, target: Square) -> bool {
        if from == target {
            return false;
        }
        match token.piece {
            Piece::Pawn => Board::pawn_attacks(from, target, token.color),
            Piece::Knight => is_knight_move(from, target),
            Piece::Bishop => self.is_bishop_move(from, target),
            Piece::Rook => self.is_rook_move(from, target),
            Piece::Queen => self.is_queen_move(from, target),
            Piece::King => is_king_step(from, target),
        }
    }

    /// True if the king of `color` is attacked, or missing from the board.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.find_king(color) {
            Some(king) => self.is_square_attacked(king, color.opponent()),
            None => true,
        }
    }

    /// Castling legality for `color` on `wing`, on the current board.
    ///
    /// Requires both "moved" flags clear, the rook still on its home square,
    /// every cell between king and rook empty, and the king's start,
    /// pass-through and destination squares free of attack.
    pub(crate) fn can_castle(&self, castling: CastlingState, color: Color, wing: Wing) -> bool {
        if !castling.can_castle(color, wing) {
            return false;
        }

        let row = color.back_row();
        let king_home = Square(row, 4);
        let rook_home = Square(row, wing.rook_home_col());
        if self.piece_at(king_home) != Some(ColoredPiece::new(color, Piece::King))
            || self.piece_at(rook_home) != Some(ColoredPiece::new(color, Piece::Rook))
        {
            return false;
        }

        let (lo, hi) = match wing {
            Wing::Kingside => (5, 7),
            Wing::Queenside => (1, 4),
        };
        if (lo..hi).any(|col| !self.is_empty(Square(row, col))) {
            return false;
        }

        let enemy = color.opponent();
        let king_path = match wing {
            Wing::Kingside => [4, 5, 6],
            Wing::Queenside => [4, 3, 2],
        };
        king_path
            .iter()
            .all(|&col| !self.is_square_attacked(Square(row, col), enemy))
    }
}

/// One step in any of the eight directions.
pub(crate) fn is_king_step(from: Square, to: Square) -> bool {
    let d_row = from.0.abs_diff(to.0);
    let d_col = from.1.abs_diff(to.1);
    d_row <= 1 && d_col <= 1 && (d_row, d_col) != (0, 0)
}

/// Wing of a castling move: a king on its home square moving two files
/// along its back rank.
pub(crate) fn castling_wing(token: ColoredPiece, from: Square, to: Square) -> Option<Wing> {
    if token.piece != Piece::King {
        return None;
    }
    let row = token.color.back_row();
    if from != Square(row, 4) || to.0 != row {
        return None;
    }
    Wing::from_king_target(to.1)
}
