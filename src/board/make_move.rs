//! Applying moves to the authoritative game state.

use log::trace;

use super::error::MoveError;
use super::movegen::castling_wing;
use super::{ColoredPiece, Game, MoveRecord, Piece, Square, Wing};

impl Game {
    /// Apply a move that the caller has already validated.
    ///
    /// Castling relocates the rook too, en passant removes the jumped pawn,
    /// and a pawn reaching the far row becomes a queen. Legality is not
    /// re-checked; only an empty source or an off-board coordinate fails.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<MoveRecord, MoveError> {
        for square in [from, to] {
            if !square.is_on_board() {
                return Err(MoveError::OffBoard { square });
            }
        }
        let token = self
            .board
            .piece_at(from)
            .ok_or(MoveError::EmptySource { square: from })?;
        let mover = token.color;

        let record = MoveRecord {
            piece: token,
            from,
            to,
            color: mover,
        };

        if let Some(wing) = castling_wing(token, from, to) {
            let row = from.0;
            self.board.relocate(from, to);
            self.board.relocate(
                Square(row, wing.rook_home_col()),
                Square(row, wing.rook_target_col()),
            );
            self.castling.mark_king_moved(mover);
            self.castling.mark_rook_moved(mover, wing);
            self.en_passant_target = None;
            self.finish(record);
            trace!("castled {record} ({wing:?})");
            return Ok(record);
        }

        if token.piece == Piece::Pawn
            && from.1 != to.1
            && self.board.is_empty(to)
            && self.en_passant_target == Some(to)
        {
            self.board.relocate(from, to);
            if let Some(victim) = self.board.clear(Square(from.0, to.1)) {
                self.captured.record(mover, victim);
            }
            self.en_passant_target = None;
            self.finish(record);
            trace!("en passant {record}");
            return Ok(record);
        }

        if let Some(victim) = self.board.relocate(from, to) {
            self.captured.record(mover, victim);
        }

        match token.piece {
            Piece::King => self.castling.mark_king_moved(mover),
            Piece::Rook if from.0 == mover.back_row() => {
                for wing in Wing::BOTH {
                    if from.1 == wing.rook_home_col() {
                        self.castling.mark_rook_moved(mover, wing);
                    }
                }
            }
            _ => {}
        }

        self.en_passant_target = None;
        if token.piece == Piece::Pawn {
            if from.0 == mover.pawn_start_row() && from.0.abs_diff(to.0) == 2 {
                self.en_passant_target = Some(Square((from.0 + to.0) / 2, from.1));
            }
            if to.0 == mover.pawn_promotion_row() {
                self.board
                    .set_piece(to, ColoredPiece::new(mover, Piece::Queen));
            }
        }

        self.finish(record);
        trace!("moved {record}");
        Ok(record)
    }

    fn finish(&mut self, record: MoveRecord) {
        self.history.push(record);
        self.side_to_move = record.color.opponent();
    }
}
