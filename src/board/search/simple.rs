//! Core search implementation.
//!
//! This module implements:
//! - Alpha-beta minimax with Black maximizing and White minimizing
//! - Transposition table probe/store with window-classified bounds
//! - Null move pruning
//! - Late move reductions (LMR)
//! - Check, capture and promotion extensions
//! - Quiescence search at the horizon

mod iterative;
mod pruning;
mod quiescence;

use std::time::Instant;

use crate::sync::CancelToken;
use crate::tt::BoundType;

use super::constants::{
    INFINITY, LMR_MIN_DEPTH, LMR_MIN_MOVE_INDEX, MATE_SCORE, NODE_CHECK_INTERVAL,
};
use super::SearchTables;
use crate::board::{Color, Move, Position, MAX_PLY};

pub use iterative::RootResult;

/// Search context for a single search
pub struct SearchContext<'a> {
    pub(super) position: &'a mut Position,
    pub(super) tables: &'a mut SearchTables,
    token: &'a CancelToken,
    start_time: Instant,
    time_limit_ms: u64,
    q_depth: i32,
    nodes: u64,
    stopped: bool,
}

impl<'a> SearchContext<'a> {
    pub fn new(
        position: &'a mut Position,
        tables: &'a mut SearchTables,
        token: &'a CancelToken,
        time_limit_ms: u64,
        q_depth: i32,
    ) -> Self {
        SearchContext {
            position,
            tables,
            token,
            start_time: Instant::now(),
            time_limit_ms,
            q_depth,
            nodes: 0,
            stopped: false,
        }
    }

    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    fn elapsed_ms(&self) -> u64 {
        self.start_time.elapsed().as_millis() as u64
    }

    #[inline]
    fn out_of_time(&self) -> bool {
        self.elapsed_ms() > self.time_limit_ms
    }

    /// Count a node and poll time and cancellation at a bounded interval.
    /// Once tripped, the flag stays set for the rest of the search.
    #[inline]
    fn enter_node(&mut self) -> bool {
        self.nodes += 1;
        if !self.stopped
            && self.nodes % NODE_CHECK_INTERVAL == 0
            && (self.out_of_time() || self.token.is_cancelled())
        {
            self.stopped = true;
        }
        self.stopped
    }

    /// Captures, promotions and checking moves search one ply deeper.
    /// Call with `m` already made.
    #[inline]
    fn extension(&self, m: Move) -> i32 {
        let opponent = self.position.side_to_move();
        i32::from(m.is_tactical() || self.position.is_in_check(opponent))
    }

    /// Interrupted searches leave the table untouched.
    fn store_tt(&mut self, key: String, depth: i32, score: i32, bound: BoundType, best: Option<Move>) {
        if !self.stopped {
            self.tables.tt.store(key, depth, score, bound, best);
        }
    }

    /// Killer and history bookkeeping; captures are not recorded.
    pub(crate) fn on_beta_cutoff(&mut self, m: Move, side: Color, ply: usize, depth: i32) {
        if m.is_capture() {
            return;
        }
        self.tables.killers.update(ply, m);
        self.tables.history.update(side, m, depth);
    }

    /// Late quiet moves at depth 3 or more are first searched two plies
    /// shallower. Checks, extended moves and check evasions never are.
    #[inline]
    pub(crate) const fn reduces_late_move(depth: i32, index: usize, extension: i32, in_check: bool) -> bool {
        depth >= LMR_MIN_DEPTH && index >= LMR_MIN_MOVE_INDEX && extension == 0 && !in_check
    }

    /// A reduced score that improves on the mover's bound earns a
    /// full-depth re-search.
    #[inline]
    pub(crate) const fn reduced_score_promising(maximizing: bool, reduced: i32, alpha: i32, beta: i32) -> bool {
        if maximizing {
            reduced > alpha
        } else {
            reduced < beta
        }
    }

    /// Alpha-beta minimax for the side to move.
    pub fn minimax(&mut self, depth: i32, mut alpha: i32, mut beta: i32, ply: usize) -> i32 {
        if self.enter_node() || ply >= MAX_PLY {
            return self.position.evaluate();
        }

        let (alpha0, beta0) = (alpha, beta);
        let key = self.position.key();
        if let Some(score) = self.tables.tt.probe(&key, depth, alpha, beta) {
            return score;
        }

        let side = self.position.side_to_move();
        let in_check = self.position.is_in_check(side);
        let moves = self.position.legal_moves(side);
        if moves.is_empty() {
            let score = match (in_check, side) {
                (false, _) => 0,
                (true, Color::Black) => -MATE_SCORE + ply as i32,
                (true, Color::White) => MATE_SCORE - ply as i32,
            };
            self.store_tt(key, depth, score, BoundType::Exact, None);
            return score;
        }

        if depth <= 0 {
            let score = self.quiescence(alpha, beta, self.q_depth);
            self.store_tt(key, depth, score, BoundType::classify(score, alpha0, beta0), None);
            return score;
        }

        if let Some(score) = self.try_null_move(side, depth, alpha, beta, ply, in_check) {
            return score;
        }

        let hash_move = self.tables.tt.hash_move(&key, depth);
        let ordered = self.order_moves(&moves, side, ply, hash_move);
        let maximizing = side == Color::Black;
        let mut best = if maximizing { -INFINITY } else { INFINITY };
        let mut best_move = None;

        for (i, scored) in ordered.iter().enumerate() {
            let m = scored.mv;
            let info = self.position.make_move(m);
            let extension = self.extension(m);

            let score = if Self::reduces_late_move(depth, i, extension, in_check) {
                let reduced = self.minimax(depth - 2, alpha, beta, ply + 1);
                if Self::reduced_score_promising(maximizing, reduced, alpha, beta) {
                    self.minimax(depth - 1, alpha, beta, ply + 1)
                } else {
                    reduced
                }
            } else {
                self.minimax(depth - 1 + extension, alpha, beta, ply + 1)
            };
            self.position.unmake_move(m, info);

            if (maximizing && score > best) || (!maximizing && score < best) {
                best = score;
                best_move = Some(m);
            }
            if maximizing {
                alpha = alpha.max(best);
            } else {
                beta = beta.min(best);
            }
            if self.stopped {
                break;
            }
            if alpha >= beta {
                self.on_beta_cutoff(m, side, ply, depth);
                break;
            }
        }

        self.store_tt(key, depth, best, BoundType::classify(best, alpha0, beta0), best_move);
        best
    }
}
