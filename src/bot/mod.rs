//! The computer opponent.
//!
//! [`BotPlayer`] is the synchronous part: search the current game and apply
//! the chosen move. The [`controller`] module adds the cosmetic thinking
//! delay on a background thread.

pub mod controller;

use std::time::Duration;

use log::{debug, warn};
use rand::Rng;

use crate::board::{
    select_move, BotError, Color, Game, Move, MoveRecord, SearchParams, SearchState,
};

pub use controller::{schedule_move, BotController, PendingMove};

/// Shortest thinking delay
pub const MIN_THINKING_DELAY: Duration = Duration::from_secs(1);
/// Longest thinking delay
pub const MAX_THINKING_DELAY: Duration = Duration::from_secs(3);

/// A bot playing one color with fixed search settings.
#[derive(Clone, Debug)]
pub struct BotPlayer {
    color: Color,
    params: SearchParams,
}

impl BotPlayer {
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self::with_params(color, SearchParams::default())
    }

    #[must_use]
    pub fn with_params(color: Color, params: SearchParams) -> Self {
        BotPlayer { color, params }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Best move for the bot's color in `game`, without applying it.
    #[must_use]
    pub fn select_move(&self, game: &Game) -> Option<Move> {
        select_move(&SearchState::from_game(game), self.color, &self.params)
    }

    /// Search and apply the bot's move.
    ///
    /// `Ok(None)` means the bot had no move to play.
    pub fn play(&self, game: &mut Game) -> Result<Option<MoveRecord>, BotError> {
        let to_move = game.side_to_move();
        if to_move != self.color {
            return Err(BotError::NotBotsTurn {
                bot: self.color,
                to_move,
            });
        }

        let Some(mv) = self.select_move(game) else {
            warn!("{} bot found no move to play", self.color);
            return Ok(None);
        };
        let record = game.move_piece(mv.from(), mv.to())?;
        debug!("{} bot played {record}", self.color);
        Ok(Some(record))
    }
}

/// Uniformly random thinking delay between one and three seconds.
pub fn random_thinking_delay<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    let secs = rng.gen_range(MIN_THINKING_DELAY.as_secs_f64()..=MAX_THINKING_DELAY.as_secs_f64());
    Duration::from_secs_f64(secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{GameMode, Square};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_delay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let delay = random_thinking_delay(&mut rng);
            assert!(delay >= MIN_THINKING_DELAY);
            assert!(delay <= MAX_THINKING_DELAY);
        }
    }

    #[test]
    fn test_play_rejects_wrong_turn() {
        let mut game = Game::new(GameMode::AgainstComputer {
            bot_color: Color::Black,
        });
        let bot = BotPlayer::new(Color::Black);
        assert_eq!(
            bot.play(&mut game),
            Err(BotError::NotBotsTurn {
                bot: Color::Black,
                to_move: Color::White,
            })
        );
    }

    #[test]
    fn test_play_applies_reply() {
        let mut game = Game::default();
        game.move_piece(Square(6, 4), Square(4, 4)).unwrap();
        let bot = BotPlayer::with_params(Color::Black, SearchParams::with_depth(2));
        let record = bot.play(&mut game).unwrap().unwrap();
        assert_eq!(record.color, Color::Black);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.side_to_move(), Color::White);
        assert!(!game.is_in_check(Color::Black));
    }
}
