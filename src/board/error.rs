//! Error types for board and game operations.

use std::fmt;

use super::{Color, Square};

/// Error type for FEN and board-diagram parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 2)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Wrong number of rows in the placement
    InvalidRowCount { rows: usize },
    /// A row does not describe exactly eight cells
    InvalidRowWidth { row: usize, cells: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 2 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}'")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidRowCount { rows } => {
                write!(f, "Board must have 8 rows, found {rows}")
            }
            FenError::InvalidRowWidth { row, cells } => {
                write!(f, "Row {row} has {cells} cells, expected 8")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move text parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move text has the wrong length once separators are removed
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must name 2 squares in 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for applying a move to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The source square holds no piece
    EmptySource { square: Square },
    /// A coordinate lies outside the board
    OffBoard { square: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySource { square } => {
                write!(f, "No piece on source square {square}")
            }
            MoveError::OffBoard { square } => {
                write!(f, "Square {square} is off the board")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for bot scheduling misuse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotError {
    /// A scheduled move for this bot has not finished yet
    AlreadyThinking,
    /// The bot was asked to move for a side that is not on move
    NotBotsTurn { bot: Color, to_move: Color },
    /// Applying the chosen move failed
    Move(MoveError),
    /// The background thinking thread died
    WorkerPanicked,
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotError::AlreadyThinking => write!(f, "Bot is already thinking about a move"),
            BotError::NotBotsTurn { bot, to_move } => {
                write!(f, "Bot plays {bot} but {to_move} is to move")
            }
            BotError::Move(err) => write!(f, "Bot move failed: {err}"),
            BotError::WorkerPanicked => write!(f, "Bot thinking thread panicked"),
        }
    }
}

impl std::error::Error for BotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BotError::Move(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MoveError> for BotError {
    fn from(err: MoveError) -> Self {
        BotError::Move(err)
    }
}
