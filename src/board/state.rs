//! The 8x8 grid of piece tokens and the captured-piece lists.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, ColoredPiece, Piece, Square};

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// An 8x8 mapping from (row, col) to an optional piece token.
///
/// Every cell always holds a defined value: `None` is the empty marker.
/// The board is `Copy`, so a scratch copy for simulation is a plain
/// assignment that never aliases the original.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<ColoredPiece>; 8]; 8],
}

impl Board {
    /// A board with no pieces on it.
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    /// The standard initial position: Black on rows 0-1, White on rows 6-7.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        for (col, &piece) in BACK_RANK.iter().enumerate() {
            board.set_piece(Square(0, col), ColoredPiece::new(Color::Black, piece));
            board.set_piece(Square(1, col), ColoredPiece::new(Color::Black, Piece::Pawn));
            board.set_piece(Square(6, col), ColoredPiece::new(Color::White, Piece::Pawn));
            board.set_piece(Square(7, col), ColoredPiece::new(Color::White, piece));
        }
        board
    }

    /// Token on `square`; `None` for empty cells and off-board coordinates.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<ColoredPiece> {
        if square.is_on_board() {
            self.cells[square.0][square.1]
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// True if `square` holds a piece of `color`.
    #[inline]
    #[must_use]
    pub fn is_color(&self, square: Square, color: Color) -> bool {
        self.piece_at(square).is_some_and(|p| p.color == color)
    }

    /// Place a token, replacing whatever was there.
    #[inline]
    pub fn set_piece(&mut self, square: Square, token: ColoredPiece) {
        debug_assert!(square.is_on_board());
        self.cells[square.0][square.1] = Some(token);
    }

    /// Empty a cell, returning its previous content.
    #[inline]
    pub fn clear(&mut self, square: Square) -> Option<ColoredPiece> {
        debug_assert!(square.is_on_board());
        self.cells[square.0][square.1].take()
    }

    /// Move the token on `from` to `to`, returning whatever `to` held.
    #[inline]
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<ColoredPiece> {
        let moving = self.clear(from);
        let captured = self.cells[to.0][to.1];
        self.cells[to.0][to.1] = moving;
        captured
    }

    /// Every occupied cell in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Occupied cells of one color in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    /// First cell (row-major) holding the king of `color`.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = ColoredPiece::new(color, Piece::King);
        Square::all().find(|&sq| self.piece_at(sq) == Some(king))
    }

    #[inline]
    #[must_use]
    pub fn has_king(&self, color: Color) -> bool {
        self.find_king(color).is_some()
    }

    /// Number of cells that differ between two boards.
    #[must_use]
    pub fn diff_count(&self, other: &Board) -> usize {
        Square::all()
            .filter(|&sq| self.piece_at(sq) != other.piece_at(sq))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0..8 {
                let c = self.piece_at(Square(row, col)).map_or('.', ColoredPiece::to_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        write!(f, "    A B C D E F G H")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board:")?;
        write!(f, "{self}")
    }
}

/// Pieces removed from the board, in capture order, per capturing side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CapturedPieces {
    /// Black pieces taken by White
    pub by_white: Vec<ColoredPiece>,
    /// White pieces taken by Black
    pub by_black: Vec<ColoredPiece>,
}

impl CapturedPieces {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a captured token to the capturer's list.
    pub fn record(&mut self, capturer: Color, token: ColoredPiece) {
        match capturer {
            Color::White => self.by_white.push(token),
            Color::Black => self.by_black.push(token),
        }
    }

    #[must_use]
    pub fn taken_by(&self, capturer: Color) -> &[ColoredPiece] {
        match capturer {
            Color::White => &self.by_white,
            Color::Black => &self.by_black,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.by_white.len() + self.by_black.len()
    }

    pub fn clear(&mut self) {
        self.by_white.clear();
        self.by_black.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position_layout() {
        let board = Board::starting_position();
        assert_eq!(
            board.piece_at(Square(7, 4)),
            Some(ColoredPiece::new(Color::White, Piece::King))
        );
        assert_eq!(
            board.piece_at(Square(0, 3)),
            Some(ColoredPiece::new(Color::Black, Piece::Queen))
        );
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        for col in 0..8 {
            assert!(board.is_empty(Square(3, col)));
        }
    }

    #[test]
    fn test_off_board_reads_as_empty() {
        let board = Board::starting_position();
        assert_eq!(board.piece_at(Square(8, 0)), None);
        assert_eq!(board.piece_at(Square(0, 9)), None);
    }

    #[test]
    fn test_find_king_absent() {
        let mut board = Board::starting_position();
        assert_eq!(board.find_king(Color::Black), Some(Square(0, 4)));
        board.clear(Square(0, 4));
        assert_eq!(board.find_king(Color::Black), None);
        assert!(!board.has_king(Color::Black));
        assert!(board.has_king(Color::White));
    }

    #[test]
    fn test_relocate_returns_capture() {
        let mut board = Board::starting_position();
        let captured = board.relocate(Square(7, 3), Square(1, 3));
        assert_eq!(captured, Some(ColoredPiece::new(Color::Black, Piece::Pawn)));
        assert!(board.is_empty(Square(7, 3)));
        assert_eq!(board.diff_count(&Board::starting_position()), 2);
    }

    #[test]
    fn test_display_rows() {
        let text = Board::starting_position().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "8   r n b q k b n r");
        assert_eq!(lines[7], "1   R N B Q K B N R");
        assert_eq!(lines[9], "    A B C D E F G H");
    }

    #[test]
    fn test_captured_lists() {
        let mut captured = CapturedPieces::new();
        let pawn = ColoredPiece::new(Color::Black, Piece::Pawn);
        captured.record(Color::White, pawn);
        assert_eq!(captured.taken_by(Color::White), &[pawn]);
        assert!(captured.taken_by(Color::Black).is_empty());
        assert_eq!(captured.total(), 1);
    }
}
