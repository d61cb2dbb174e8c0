mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::castling_wing;
pub(crate) use knights::KNIGHT_OFFSETS;
pub(crate) use sliders::{ALL_DIRECTIONS, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

use kings::is_king_step;
use knights::is_knight_move;

use super::{Board, Color, Game, Move, MoveList, Piece, Square};

/// How much of the rules a legality query enforces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Validation {
    /// Geometry, occupancy and self-check prevention
    #[default]
    Legal,
    /// Geometry and occupancy only; the mover's king may be left attacked
    Pseudo,
}

impl Game {
    /// Full legality of moving `color`'s piece from `from` to `to`.
    #[must_use]
    pub fn is_valid_move(&self, from: Square, to: Square, color: Color) -> bool {
        self.is_valid_move_with(from, to, color, Validation::Legal)
    }

    /// Legality under an explicit validation mode.
    #[must_use]
    pub fn is_valid_move_with(
        &self,
        from: Square,
        to: Square,
        color: Color,
        mode: Validation,
    ) -> bool {
        if !from.is_on_board() || !to.is_on_board() {
            return false;
        }

        let token = match self.board.piece_at(from) {
            Some(token) if token.color == color => token,
            _ => return false,
        };
        if self.board.is_color(to, color) {
            return false;
        }

        if let Some(wing) = castling_wing(token, from, to) {
            // Castling checks the king's whole path itself.
            return self.board.can_castle(self.castling, color, wing);
        }

        let geometry = match token.piece {
            Piece::Pawn => self
                .board
                .is_pawn_move(from, to, color, self.en_passant_target),
            Piece::Knight => is_knight_move(from, to),
            Piece::Bishop => self.board.is_bishop_move(from, to),
            Piece::Rook => self.board.is_rook_move(from, to),
            Piece::Queen => self.board.is_queen_move(from, to),
            Piece::King => is_king_step(from, to),
        };
        if !geometry {
            return false;
        }

        match mode {
            Validation::Pseudo => true,
            Validation::Legal => !self.simulate(from, to).is_in_check(color),
        }
    }

    /// Board after a non-castling move, on a scratch copy.
    fn simulate(&self, from: Square, to: Square) -> Board {
        let mut scratch = self.board;
        let is_pawn = scratch
            .piece_at(from)
            .is_some_and(|p| p.piece == Piece::Pawn);
        if is_pawn && from.1 != to.1 && scratch.is_empty(to) && Some(to) == self.en_passant_target
        {
            scratch.clear(Square(from.0, to.1));
        }
        scratch.relocate(from, to);
        scratch
    }

    /// Every destination `from` can legally reach, in row-major order.
    #[must_use]
    pub fn calculate_possible_moves(&self, from: Square, color: Color) -> Vec<Square> {
        Square::all()
            .filter(|&to| self.is_valid_move(from, to, color))
            .collect()
    }

    /// Every legal move for `color`, sources and destinations row-major.
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (from, _) in self.board.pieces_of(color) {
            for to in Square::all() {
                if self.is_valid_move(from, to, color) {
                    moves.push(Move::new(from, to));
                }
            }
        }
        moves
    }

    /// True if `color`'s king is attacked or missing.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    /// In check with no legal move that resolves it.
    #[must_use]
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        if !self.is_in_check(color) {
            return false;
        }
        !self.board.pieces_of(color).any(|(from, _)| {
            Square::all().any(|to| self.is_valid_move(from, to, color))
        })
    }

    /// Always false: stalemate detection is not implemented.
    #[must_use]
    pub fn is_stalemate(&self, _color: Color) -> bool {
        false
    }

    #[must_use]
    pub fn find_king_position(&self, color: Color) -> Option<Square> {
        self.board.find_king(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ColoredPiece;

    #[test]
    fn test_starting_position_has_twenty_moves() {
        let game = Game::default();
        assert_eq!(game.legal_moves(Color::White).len(), 20);
        assert_eq!(game.legal_moves(Color::Black).len(), 20);
    }

    #[test]
    fn test_wrong_color_and_off_board_rejected() {
        let game = Game::default();
        assert!(!game.is_valid_move(Square(6, 4), Square(4, 4), Color::Black));
        assert!(!game.is_valid_move(Square(6, 4), Square(9, 4), Color::White));
        assert!(!game.is_valid_move(Square(8, 0), Square(7, 0), Color::White));
        assert!(!game.is_valid_move(Square(4, 4), Square(3, 4), Color::White));
    }

    #[test]
    fn test_pinned_piece_modes() {
        let mut board = Board::empty();
        board.set_piece(Square(7, 4), ColoredPiece::new(Color::White, Piece::King));
        board.set_piece(Square(6, 4), ColoredPiece::new(Color::White, Piece::Rook));
        board.set_piece(Square(0, 4), ColoredPiece::new(Color::Black, Piece::Rook));
        board.set_piece(Square(0, 0), ColoredPiece::new(Color::Black, Piece::King));
        let game = Game::from_board(board, Color::White);

        let (from, to) = (Square(6, 4), Square(6, 0));
        assert!(!game.is_valid_move(from, to, Color::White));
        assert!(game.is_valid_move_with(from, to, Color::White, Validation::Pseudo));
        assert!(game.is_valid_move(from, Square(0, 4), Color::White));
    }

    #[test]
    fn test_possible_moves_for_knight() {
        let game = Game::default();
        let moves = game.calculate_possible_moves(Square(7, 6), Color::White);
        assert_eq!(moves, vec![Square(5, 5), Square(5, 7)]);
        assert!(game
            .calculate_possible_moves(Square(7, 7), Color::White)
            .is_empty());
    }

    #[test]
    fn test_stalemate_always_false() {
        let mut board = Board::empty();
        board.set_piece(Square(0, 0), ColoredPiece::new(Color::Black, Piece::King));
        board.set_piece(Square(2, 1), ColoredPiece::new(Color::White, Piece::Queen));
        board.set_piece(Square(7, 7), ColoredPiece::new(Color::White, Piece::King));
        let game = Game::from_board(board, Color::Black);
        assert!(game.legal_moves(Color::Black).is_empty());
        assert!(!game.is_in_check(Color::Black));
        assert!(!game.is_stalemate(Color::Black));
        assert!(!game.is_in_checkmate(Color::Black));
    }
}
