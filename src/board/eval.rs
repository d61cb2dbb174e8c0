use super::{Board, Color, Square};

/// Rows and columns that earn the occupancy bonus.
const CENTER: std::ops::RangeInclusive<usize> = 2..=5;

impl Board {
    /// Static score of the position from `perspective`'s side.
    ///
    /// Material for each own piece counts positive and each opposing piece
    /// negative; every own piece in the central 4x4 block adds
    /// `center_bonus` and every opposing one subtracts it.
    #[must_use]
    pub fn evaluate(&self, perspective: Color, center_bonus: i32) -> i32 {
        self.pieces()
            .map(|(sq, token)| {
                let mut value = token.piece.value();
                if is_central(sq) {
                    value += center_bonus;
                }
                if token.color == perspective {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }

    /// Sum of piece values for one side.
    #[must_use]
    pub fn material(&self, color: Color) -> i32 {
        self.pieces_of(color).map(|(_, t)| t.piece.value()).sum()
    }
}

fn is_central(sq: Square) -> bool {
    CENTER.contains(&sq.0) && CENTER.contains(&sq.1)
}
