pub mod board;
pub mod bot;
pub mod sync;

pub use board::{Board, Color, Game, GameMode, Move, Piece, Square};
pub use bot::BotPlayer;
