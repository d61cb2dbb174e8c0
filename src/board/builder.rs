//! Fluent builder for setting up games piece by piece.
//!
//! # Example
//! ```
//! use chess_bot::board::{Color, GameBuilder, Piece, Square};
//!
//! let game = GameBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::King)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(game.board().pieces().count(), 3);
//! ```

use super::{Board, CastlingState, Color, ColoredPiece, Game, GameMode, Piece, Square, Wing};

/// A fluent builder for [`Game`] positions.
///
/// Castling flags start fresh (nothing has moved) and must be marked
/// explicitly.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    board: Board,
    side_to_move: Color,
    castling: CastlingState,
    en_passant_target: Option<Square>,
    mode: GameMode,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    /// An empty board, White to move.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            castling: CastlingState::fresh(),
            en_passant_target: None,
            mode: GameMode::default(),
        }
    }

    /// Start from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        GameBuilder {
            board: Board::starting_position(),
            ..Self::new()
        }
    }

    /// Place a piece, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.board.set_piece(square, ColoredPiece::new(color, piece));
        self
    }

    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.clear(square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub fn king_moved(mut self, color: Color) -> Self {
        self.castling.mark_king_moved(color);
        self
    }

    #[must_use]
    pub fn rook_moved(mut self, color: Color, wing: Wing) -> Self {
        self.castling.mark_rook_moved(color, wing);
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    #[must_use]
    pub const fn mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn build(self) -> Game {
        let mut game = Game::from_board(self.board, self.side_to_move);
        game.castling = self.castling;
        game.en_passant_target = self.en_passant_target;
        game.mode = self.mode;
        game
    }
}
