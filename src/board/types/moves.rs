//! Move types, move records and the fixed-capacity move list.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, ColoredPiece};
use super::square::Square;
use crate::board::error::MoveParseError;

/// Maximum number of moves a single position can generate.
///
/// A move goes from one of the side's `n` squares to one of the other
/// `64 - n`, and `n * (64 - n)` never exceeds 1024, however the position
/// was set up.
pub(crate) const MAX_MOVES: usize = 1024;

/// Compact 12-bit move representation: a source and a destination cell.
///
/// Encoding:
/// - bits 0-5:  from square (0-63)
/// - bits 6-11: to square (0-63)
///
/// Castling, en passant and promotion are recognised from the position the
/// move is applied to, so no flag bits are needed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u16);

impl Move {
    /// Create a move. Both squares must be on the board.
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        debug_assert!(from.is_on_board() && to.is_on_board(), "Move::new off the board");
        let from_idx = from.as_index() as u16;
        let to_idx = to.as_index() as u16;
        Move(from_idx | (to_idx << 6))
    }

    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square::from_index((self.0 & 0x3F) as usize)
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square::from_index(((self.0 >> 6) & 0x3F) as usize)
    }

    #[inline]
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self})")
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    /// Accepts `e2e4`, `e2-e4`, or four row/col digits such as `6444`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        if compact.len() != 4 {
            return Err(MoveParseError::InvalidLength { len: compact.len() });
        }

        if compact.chars().all(|c| c.is_ascii_digit()) {
            let digits: Vec<usize> = compact
                .chars()
                .filter_map(|c| c.to_digit(10))
                .map(|d| d as usize)
                .collect();
            let from = Square::new(digits[0], digits[1]);
            let to = Square::new(digits[2], digits[3]);
            return match (from, to) {
                (Some(from), Some(to)) => Ok(Move::new(from, to)),
                _ => Err(MoveParseError::InvalidSquare {
                    notation: s.to_string(),
                }),
            };
        }

        let invalid = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let from: Square = compact.get(0..2).ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
        let to: Square = compact.get(2..4).ok_or_else(invalid)?.parse().map_err(|_| invalid())?;
        Ok(Move::new(from, to))
    }
}

/// An entry of the game history: what moved, from where, to where, by whom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub piece: ColoredPiece,
    pub from: Square,
    pub to: Square,
    pub color: Color,
}

impl MoveRecord {
    #[must_use]
    pub fn as_move(&self) -> Move {
        Move::new(self.from, self.to)
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.piece, self.from, self.to)
    }
}

/// Fixed-size list of moves to avoid heap allocation during search.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    #[must_use]
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [Move(0); MAX_MOVES],
            len: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, mv: Move) {
        debug_assert!(self.len < MAX_MOVES, "MoveList overflow");
        if self.len < MAX_MOVES {
            self.moves[self.len] = mv;
            self.len += 1;
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}
