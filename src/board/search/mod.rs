//! Bot search: fixed-depth minimax with alpha-beta pruning.
//!
//! The search runs on [`SearchState`] copies holding only the board and the
//! captured lists. Castling flags and the en passant target are not
//! carried, so lookahead never castles or captures en passant, and a pawn
//! reaching the far row always becomes a queen.

mod constants;
mod movegen;
mod params;

use std::time::Instant;

use log::{debug, trace};

use super::{Board, CapturedPieces, Color, ColoredPiece, Game, Move, Piece};
pub use constants::{DEFAULT_CENTER_BONUS, DEFAULT_DEPTH, INFINITY};
pub(crate) use movegen::generate_moves;
pub use params::SearchParams;

/// Scratch position explored by the search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchState {
    pub board: Board,
    pub captured: CapturedPieces,
}

impl SearchState {
    #[must_use]
    pub fn new(board: Board) -> Self {
        SearchState {
            board,
            captured: CapturedPieces::new(),
        }
    }

    /// Copy the board and captured lists out of a game.
    #[must_use]
    pub fn from_game(game: &Game) -> Self {
        SearchState {
            board: *game.board(),
            captured: game.captured().clone(),
        }
    }

    /// The position after `mv`, leaving `self` untouched.
    #[must_use]
    pub fn after(&self, mv: Move) -> SearchState {
        let mut next = self.clone();
        next.apply(mv);
        next
    }

    fn apply(&mut self, mv: Move) {
        let Some(token) = self.board.piece_at(mv.from()) else {
            return;
        };
        if let Some(victim) = self.board.relocate(mv.from(), mv.to()) {
            self.captured.record(token.color, victim);
        }
        if token.piece == Piece::Pawn && mv.to().0 == token.color.pawn_promotion_row() {
            self.board
                .set_piece(mv.to(), ColoredPiece::new(token.color, Piece::Queen));
        }
    }

    /// Either king missing.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        !self.board.has_king(Color::White) || !self.board.has_king(Color::Black)
    }
}

/// Outcome of a search from the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when no move is available
    pub best_move: Option<Move>,
    /// Score of the best line from the searching side's view
    pub score: i32,
    /// Nodes visited
    pub nodes: u64,
}

struct Searcher<'a> {
    me: Color,
    params: &'a SearchParams,
    nodes: u64,
}

impl Searcher<'_> {
    fn minimax(
        &mut self,
        state: &SearchState,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        root: bool,
    ) -> (Option<Move>, i32) {
        self.nodes += 1;
        if depth == 0 || state.is_game_over() {
            return (None, self.evaluate(state));
        }

        let mover = if maximizing { self.me } else { self.me.opponent() };
        let moves = generate_moves(&state.board, mover);
        if moves.is_empty() {
            return (None, self.evaluate(state));
        }

        let mut best_move = None;
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for &mv in &moves {
            let next = state.after(mv);
            if next.board.is_in_check(mover) {
                continue;
            }

            let (_, score) = self.minimax(&next, depth - 1, alpha, beta, !maximizing, false);
            if root {
                trace!("root move {mv} scored {score}");
            }

            // The first playable move is kept even when it scores at the bound.
            if maximizing {
                if best_move.is_none() || score > best {
                    best = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(best);
            } else {
                if best_move.is_none() || score < best {
                    best = score;
                    best_move = Some(mv);
                }
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }

        (best_move, best)
    }

    fn evaluate(&self, state: &SearchState) -> i32 {
        state.board.evaluate(self.me, self.params.center_bonus)
    }
}

/// Search `params.depth` plies for the best move of `color`.
#[must_use]
pub fn search(state: &SearchState, color: Color, params: &SearchParams) -> SearchResult {
    let start = Instant::now();
    let mut searcher = Searcher {
        me: color,
        params,
        nodes: 0,
    };
    let (best_move, score) =
        searcher.minimax(state, params.depth, -INFINITY, INFINITY, true, true);

    debug!(
        "search {color} depth {} nodes {} best {} score {score} in {:?}",
        params.depth,
        searcher.nodes,
        best_move.map_or_else(|| "none".to_string(), |mv| mv.to_string()),
        start.elapsed()
    );

    SearchResult {
        best_move,
        score,
        nodes: searcher.nodes,
    }
}

/// Best move for `color`, or `None` when no move is available.
#[must_use]
pub fn select_move(state: &SearchState, color: Color, params: &SearchParams) -> Option<Move> {
    search(state, color, params).best_move
}
