use super::error::FenError;
use super::{Board, CastlingState, Color, ColoredPiece, Game, Square, Wing};

impl Board {
    /// Build a board from eight rows of eight cells, top row first.
    ///
    /// Each cell is a piece letter (uppercase White, lowercase Black) or `.`
    /// for an empty cell. Spaces between cells are ignored.
    pub fn from_rows(rows: &[&str; 8]) -> Result<Self, FenError> {
        let mut board = Board::empty();
        for (row, text) in rows.iter().enumerate() {
            let cells: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != 8 {
                return Err(FenError::InvalidRowWidth {
                    row,
                    cells: cells.len(),
                });
            }
            for (col, &c) in cells.iter().enumerate() {
                if c == '.' {
                    continue;
                }
                let token = ColoredPiece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                board.set_piece(Square(row, col), token);
            }
        }
        Ok(board)
    }

    /// Piece placement field of a FEN string.
    #[must_use]
    pub fn placement(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut text = String::new();
            let mut empty = 0;
            for col in 0..8 {
                match self.piece_at(Square(row, col)) {
                    Some(token) => {
                        if empty > 0 {
                            text.push_str(&empty.to_string());
                            empty = 0;
                        }
                        text.push(token.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }
        rows.join("/")
    }

    fn from_placement(field: &str) -> Result<Self, FenError> {
        let rows: Vec<&str> = field.split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::InvalidRowCount { rows: rows.len() });
        }

        let mut board = Board::empty();
        for (row, text) in rows.iter().enumerate() {
            let mut col = 0;
            for c in text.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let token = ColoredPiece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if col >= 8 {
                    return Err(FenError::InvalidRowWidth { row, cells: col + 1 });
                }
                board.set_piece(Square(row, col), token);
                col += 1;
            }
            if col != 8 {
                return Err(FenError::InvalidRowWidth { row, cells: col });
            }
        }
        Ok(board)
    }
}

impl Game {
    /// Load a position from FEN.
    ///
    /// Placement and side to move are required. A missing castling letter
    /// marks that rook as moved, and a side with neither letter has its king
    /// marked as moved. The clocks are accepted and ignored; history starts
    /// empty.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let board = Board::from_placement(parts[0])?;
        let side = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut game = Game::from_board(board, side);
        game.castling = parse_castling(parts.get(2).copied().unwrap_or("-"))?;

        game.en_passant_target = match parts.get(3).copied() {
            None | Some("-") => None,
            Some(text) => Some(text.parse::<Square>().map_err(|_| FenError::InvalidEnPassant {
                found: text.to_string(),
            })?),
        };
        Ok(game)
    }

    /// Current position as FEN. The half-move clock is always 0.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        for (color, wing, letter) in CASTLING_LETTERS {
            if self.castling.can_castle(color, wing) {
                castling.push(letter);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .en_passant_target
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} 0 {}",
            self.board.placement(),
            active,
            castling,
            ep,
            self.history.len() / 2 + 1
        )
    }
}

const CASTLING_LETTERS: [(Color, Wing, char); 4] = [
    (Color::White, Wing::Kingside, 'K'),
    (Color::White, Wing::Queenside, 'Q'),
    (Color::Black, Wing::Kingside, 'k'),
    (Color::Black, Wing::Queenside, 'q'),
];

fn parse_castling(field: &str) -> Result<CastlingState, FenError> {
    let mut present = [false; 4];
    for c in field.chars() {
        if c == '-' {
            continue;
        }
        let idx = CASTLING_LETTERS
            .iter()
            .position(|&(_, _, letter)| letter == c)
            .ok_or(FenError::InvalidCastling { char: c })?;
        present[idx] = true;
    }

    let mut state = CastlingState::fresh();
    for (idx, &(color, wing, _)) in CASTLING_LETTERS.iter().enumerate() {
        if !present[idx] {
            state.mark_rook_moved(color, wing);
        }
    }
    for color in Color::BOTH {
        if Wing::BOTH.iter().all(|&wing| state.rook_moved(color, wing)) {
            state.mark_king_moved(color);
        }
    }
    Ok(state)
}
