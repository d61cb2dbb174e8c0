//! Core chess types.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `Piece`, `Color` and `ColoredPiece` - piece kinds, sides and cell tokens
//! - `Square` - (row, col) board coordinate
//! - `Move`, `MoveRecord` and `MoveList` - move representation and history entries
//! - `CastlingState` and `Wing` - castling bookkeeping

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{CastlingState, Wing};
pub use moves::{Move, MoveList, MoveRecord};
pub use piece::{Color, ColoredPiece, Piece};
pub use square::Square;
