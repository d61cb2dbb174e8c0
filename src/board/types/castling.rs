//! Castling state: which kings and rooks have left their home squares.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

pub(crate) const WHITE_KING_MOVED: u8 = 1 << 0;
pub(crate) const BLACK_KING_MOVED: u8 = 1 << 1;
pub(crate) const WHITE_ROOK_Q_MOVED: u8 = 1 << 2;
pub(crate) const WHITE_ROOK_K_MOVED: u8 = 1 << 3;
pub(crate) const BLACK_ROOK_Q_MOVED: u8 = 1 << 4;
pub(crate) const BLACK_ROOK_K_MOVED: u8 = 1 << 5;

/// Castling wing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Wing {
    Kingside,
    Queenside,
}

impl Wing {
    pub const BOTH: [Wing; 2] = [Wing::Kingside, Wing::Queenside];

    /// Column the castling rook starts on
    #[inline]
    #[must_use]
    pub const fn rook_home_col(self) -> usize {
        match self {
            Wing::Kingside => 7,
            Wing::Queenside => 0,
        }
    }

    /// Column the king lands on
    #[inline]
    #[must_use]
    pub const fn king_target_col(self) -> usize {
        match self {
            Wing::Kingside => 6,
            Wing::Queenside => 2,
        }
    }

    /// Column the rook lands on
    #[inline]
    #[must_use]
    pub const fn rook_target_col(self) -> usize {
        match self {
            Wing::Kingside => 5,
            Wing::Queenside => 3,
        }
    }

    /// Wing whose king destination is `col`, if any.
    #[inline]
    #[must_use]
    pub const fn from_king_target(col: usize) -> Option<Wing> {
        match col {
            6 => Some(Wing::Kingside),
            2 => Some(Wing::Queenside),
            _ => None,
        }
    }
}

/// "Has moved" flags for both kings and all four rooks, as a bitmask.
///
/// Flags are only ever set, never cleared, for the lifetime of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingState(u8);

impl CastlingState {
    /// Nothing has moved (start of game)
    #[must_use]
    pub const fn fresh() -> Self {
        CastlingState(0)
    }

    #[inline]
    #[must_use]
    pub const fn king_moved(self, color: Color) -> bool {
        self.0 & Self::king_bit(color) != 0
    }

    #[inline]
    #[must_use]
    pub const fn rook_moved(self, color: Color, wing: Wing) -> bool {
        self.0 & Self::rook_bit(color, wing) != 0
    }

    /// True while neither the king nor the wing's rook has moved.
    #[inline]
    #[must_use]
    pub const fn can_castle(self, color: Color, wing: Wing) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, wing)
    }

    #[inline]
    pub fn mark_king_moved(&mut self, color: Color) {
        self.0 |= Self::king_bit(color);
    }

    #[inline]
    pub fn mark_rook_moved(&mut self, color: Color, wing: Wing) {
        self.0 |= Self::rook_bit(color, wing);
    }

    /// Get the raw bitmask value
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    const fn king_bit(color: Color) -> u8 {
        match color {
            Color::White => WHITE_KING_MOVED,
            Color::Black => BLACK_KING_MOVED,
        }
    }

    const fn rook_bit(color: Color, wing: Wing) -> u8 {
        match (color, wing) {
            (Color::White, Wing::Queenside) => WHITE_ROOK_Q_MOVED,
            (Color::White, Wing::Kingside) => WHITE_ROOK_K_MOVED,
            (Color::Black, Wing::Queenside) => BLACK_ROOK_Q_MOVED,
            (Color::Black, Wing::Kingside) => BLACK_ROOK_K_MOVED,
        }
    }
}
