//! Search constants.

/// Default look-ahead in plies
pub const DEFAULT_DEPTH: u32 = 3;

/// Default bonus per centrally placed piece
pub const DEFAULT_CENTER_BONUS: i32 = 10;

/// Initial bound of a node; a node whose every move is skipped keeps it
pub const INFINITY: i32 = 1_000_000;
