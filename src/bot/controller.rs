//! Scheduled bot moves.
//!
//! The bot "thinks" for a visible delay before moving. The delay runs on a
//! background thread that can be cancelled; the search itself stays a plain
//! blocking call made once the delay is over.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, warn};
use parking_lot::Mutex;

use super::BotPlayer;
use crate::board::{select_move, BotError, Color, Game, MoveRecord, SearchParams, SearchState};
use crate::sync::StopFlag;

/// Upper bound on a single sleep while waiting out the delay
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Outcome of a scheduled move: the applied record, or `None` when the job
/// was cancelled, the game moved on meanwhile, or no move was available.
pub type MoveOutcome = Result<Option<MoveRecord>, BotError>;

/// A bot move waiting for its delay to elapse.
pub struct PendingMove {
    stop: StopFlag,
    handle: JoinHandle<MoveOutcome>,
}

impl PendingMove {
    /// Ask the job to stop. Has no effect once the move is applied.
    pub fn cancel(&self) {
        self.stop.stop();
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the job is done.
    pub fn wait(self) -> MoveOutcome {
        self.handle.join().map_err(|_| BotError::WorkerPanicked)?
    }
}

/// After `delay`, search for `color` and apply the result to `game`.
///
/// The game lock is only held to copy the position and to apply the move.
/// If another move lands on the game while the bot is searching, the
/// result is dropped.
pub fn schedule_move(
    game: Arc<Mutex<Game>>,
    color: Color,
    delay: Duration,
    params: SearchParams,
) -> PendingMove {
    let stop = StopFlag::new();
    let job_stop = stop.clone();
    debug!("{color} bot thinking for {delay:?}");

    let handle = thread::spawn(move || {
        let deadline = Instant::now() + delay;
        loop {
            if job_stop.is_stopped() {
                debug!("{color} bot move cancelled");
                return Ok(None);
            }
            let now = Instant::now();
            if now >= deadline {
                break;
            }
            thread::sleep((deadline - now).min(POLL_INTERVAL));
        }

        let (state, plies) = {
            let game = game.lock();
            let to_move = game.side_to_move();
            if to_move != color {
                return Err(BotError::NotBotsTurn { bot: color, to_move });
            }
            (SearchState::from_game(&game), game.history().len())
        };

        let Some(mv) = select_move(&state, color, &params) else {
            warn!("{color} bot found no move to play");
            return Ok(None);
        };

        let mut game = game.lock();
        if job_stop.is_stopped() || game.history().len() != plies {
            debug!("{color} bot discarding {mv}: position changed");
            return Ok(None);
        }
        let record = game.move_piece(mv.from(), mv.to())?;
        debug!("{color} bot played {record}");
        Ok(Some(record))
    });

    PendingMove { stop, handle }
}

/// Owns the shared game and at most one pending bot move.
pub struct BotController {
    game: Arc<Mutex<Game>>,
    player: BotPlayer,
    pending: Option<PendingMove>,
}

impl BotController {
    #[must_use]
    pub fn new(game: Arc<Mutex<Game>>, player: BotPlayer) -> Self {
        BotController {
            game,
            player,
            pending: None,
        }
    }

    #[must_use]
    pub fn game(&self) -> &Arc<Mutex<Game>> {
        &self.game
    }

    #[must_use]
    pub fn is_thinking(&self) -> bool {
        self.pending.is_some()
    }

    /// Schedule the bot's move after `delay`.
    pub fn request_move(&mut self, delay: Duration) -> Result<(), BotError> {
        if self.pending.is_some() {
            return Err(BotError::AlreadyThinking);
        }
        let to_move = self.game.lock().side_to_move();
        if to_move != self.player.color() {
            return Err(BotError::NotBotsTurn {
                bot: self.player.color(),
                to_move,
            });
        }
        self.pending = Some(schedule_move(
            Arc::clone(&self.game),
            self.player.color(),
            delay,
            self.player.params().clone(),
        ));
        Ok(())
    }

    /// Collect the pending move if it has finished.
    pub fn poll(&mut self) -> Option<MoveOutcome> {
        if self.pending.as_ref()?.is_finished() {
            self.pending.take().map(PendingMove::wait)
        } else {
            None
        }
    }

    /// Block until the pending move (if any) is done.
    pub fn wait(&mut self) -> Option<MoveOutcome> {
        self.pending.take().map(PendingMove::wait)
    }

    /// Cancel the pending move and wait for its thread to exit.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
            let _ = pending.wait();
        }
    }
}

impl Drop for BotController {
    fn drop(&mut self) {
        self.cancel();
    }
}
