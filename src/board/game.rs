//! Authoritative game state: board, castling bookkeeping, en passant
//! target, history, captures and side to move.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, CapturedPieces, CastlingState, Color, MoveRecord, Square};

/// Who is playing the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameMode {
    /// A human plays against the bot, which plays `bot_color`
    AgainstComputer { bot_color: Color },
    /// Two humans share the board
    #[default]
    AgainstFriend,
}

impl GameMode {
    /// Color the bot plays, if any.
    #[must_use]
    pub const fn bot_color(self) -> Option<Color> {
        match self {
            GameMode::AgainstComputer { bot_color } => Some(bot_color),
            GameMode::AgainstFriend => None,
        }
    }
}

/// Check state of the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The given side is in check but has a way out
    Check(Color),
    /// The given side is checkmated (or has lost its king)
    Checkmate(Color),
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "Game in progress"),
            GameStatus::Check(color) => write!(f, "{color} is in check"),
            GameStatus::Checkmate(color) => {
                write!(f, "Checkmate: {} wins", color.opponent())
            }
        }
    }
}

/// A game of chess from the standard starting position onward.
///
/// All mutation goes through [`Game::move_piece`] (or
/// [`Game::initialize_board`]); history and captured lists only grow.
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) castling: CastlingState,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) history: Vec<MoveRecord>,
    pub(crate) captured: CapturedPieces,
    pub(crate) side_to_move: Color,
    pub(crate) mode: GameMode,
}

impl Game {
    #[must_use]
    pub fn new(mode: GameMode) -> Self {
        let mut game = Game {
            board: Board::empty(),
            castling: CastlingState::fresh(),
            en_passant_target: None,
            history: Vec::new(),
            captured: CapturedPieces::new(),
            side_to_move: Color::White,
            mode,
        };
        game.initialize_board();
        game
    }

    /// Start a game from an arbitrary arrangement with nothing moved yet.
    #[must_use]
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Game {
            board,
            castling: CastlingState::fresh(),
            en_passant_target: None,
            history: Vec::new(),
            captured: CapturedPieces::new(),
            side_to_move,
            mode: GameMode::default(),
        }
    }

    /// Reset to the standard starting position with empty history and
    /// captures, fresh castling rights, no en passant target, White to move.
    pub fn initialize_board(&mut self) {
        self.board = Board::starting_position();
        self.castling = CastlingState::fresh();
        self.en_passant_target = None;
        self.history.clear();
        self.captured.clear();
        self.side_to_move = Color::White;
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn castling(&self) -> CastlingState {
        self.castling
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    #[must_use]
    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
    }

    /// True when the side to move is the bot's side.
    #[must_use]
    pub fn is_bot_turn(&self) -> bool {
        self.mode.bot_color() == Some(self.side_to_move)
    }

    /// Check state of the side to move.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        let color = self.side_to_move;
        if self.is_in_checkmate(color) {
            GameStatus::Checkmate(color)
        } else if self.is_in_check(color) {
            GameStatus::Check(color)
        } else {
            GameStatus::Ongoing
        }
    }

    /// History formatted two plies per line, numbered like a score sheet.
    #[must_use]
    pub fn history_text(&self) -> String {
        let mut text = String::new();
        for (idx, pair) in self.history.chunks(2).enumerate() {
            text.push_str(&format!("{:>3}. {}", idx + 1, pair[0]));
            if let Some(reply) = pair.get(1) {
                text.push_str(&format!("   {reply}"));
            }
            text.push('\n');
        }
        text
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new(GameMode::default())
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move", self.side_to_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{ColoredPiece, Piece};

    #[test]
    fn test_new_game_state() {
        let game = Game::new(GameMode::AgainstComputer {
            bot_color: Color::Black,
        });
        assert_eq!(game.side_to_move(), Color::White);
        assert!(game.history().is_empty());
        assert_eq!(game.captured().total(), 0);
        assert_eq!(game.en_passant_target(), None);
        assert_eq!(game.castling(), CastlingState::fresh());
        assert_eq!(game.mode().bot_color(), Some(Color::Black));
        assert!(!game.is_bot_turn());
    }

    #[test]
    fn test_initialize_board_resets_everything() {
        let mut game = Game::default();
        game.move_piece(Square(6, 4), Square(4, 4)).unwrap();
        game.move_piece(Square(1, 3), Square(3, 3)).unwrap();
        game.move_piece(Square(4, 4), Square(3, 3)).unwrap();
        assert_eq!(game.captured().total(), 1);

        game.initialize_board();
        assert_eq!(*game.board(), Board::starting_position());
        assert!(game.history().is_empty());
        assert_eq!(game.captured().total(), 0);
        assert_eq!(game.en_passant_target(), None);
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn test_status_reports_check() {
        let mut board = Board::empty();
        board.set_piece(Square(7, 4), ColoredPiece::new(Color::White, Piece::King));
        board.set_piece(Square(0, 4), ColoredPiece::new(Color::Black, Piece::Rook));
        board.set_piece(Square(0, 0), ColoredPiece::new(Color::Black, Piece::King));
        let game = Game::from_board(board, Color::White);
        assert_eq!(game.status(), GameStatus::Check(Color::White));
    }

    #[test]
    fn test_history_text_pairs_plies() {
        let mut game = Game::default();
        game.move_piece(Square(6, 4), Square(4, 4)).unwrap();
        game.move_piece(Square(1, 4), Square(3, 4)).unwrap();
        game.move_piece(Square(7, 6), Square(5, 5)).unwrap();
        let text = game.history_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "  1. P e2-e4   p e7-e5");
        assert_eq!(lines[1], "  2. N g1-f3");
    }
}
