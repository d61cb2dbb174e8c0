//! Chess board representation and game logic.
//!
//! An 8x8 mailbox board with the full rules: castling, en passant,
//! promotion, check and checkmate. Row 0 is Black's back rank.
//!
//! # Example
//! ```
//! use chess_bot::board::{Color, Game, GameMode, Square};
//!
//! let mut game = Game::new(GameMode::AgainstFriend);
//! assert!(game.is_valid_move(Square(6, 4), Square(4, 4), Color::White));
//! game.move_piece(Square(6, 4), Square(4, 4)).unwrap();
//! assert_eq!(game.side_to_move(), Color::Black);
//! ```

mod builder;
mod error;
mod eval;
mod fen;
mod game;
mod make_move;
mod movegen;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::GameBuilder;
pub use error::{BotError, FenError, MoveError, MoveParseError, SquareError};
pub use game::{Game, GameMode, GameStatus};
pub use movegen::Validation;
pub use state::{Board, CapturedPieces};
pub use types::{
    CastlingState, Color, ColoredPiece, Move, MoveList, MoveRecord, Piece, Square, Wing,
};

// Public API - search functions and configuration
pub use search::{
    search, select_move, SearchParams, SearchResult, SearchState, DEFAULT_CENTER_BONUS,
    DEFAULT_DEPTH, INFINITY,
};

#[cfg(test)]
pub(crate) use search::generate_moves;
