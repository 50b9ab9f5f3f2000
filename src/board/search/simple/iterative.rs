use log::debug;

use super::super::constants::{ASPIRATION_BASE, ASPIRATION_MIN_DEPTH, ASPIRATION_PER_DEPTH, INFINITY};
use super::super::params::DifficultyProfile;
use super::SearchContext;
use crate::board::search::{SearchInfoCallback, SearchIterationInfo};
use crate::board::{Color, Move, MoveList};

/// Outcome of one root pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RootResult {
    /// False if time ran out or the search was cancelled mid-pass
    pub completed: bool,
    pub best_move: Option<Move>,
    pub score: i32,
}

impl RootResult {
    fn incomplete(best_move: Option<Move>, score: i32) -> Self {
        RootResult {
            completed: false,
            best_move,
            score,
        }
    }
}

impl SearchContext<'_> {
    /// Search every root move of `side` to `depth` inside `(alpha, beta)`.
    pub fn search_root(&mut self, side: Color, depth: u32, mut alpha: i32, mut beta: i32) -> RootResult {
        let depth = depth as i32;
        let key = self.position.key();
        let hash_move = self.tables.tt.hash_move(&key, depth);
        let moves = self.position.legal_moves(side);
        let ordered = self.order_moves(&moves, side, 0, hash_move);

        let maximizing = side == Color::Black;
        let mut best = if maximizing { -INFINITY } else { INFINITY };
        let mut best_move = None;

        for scored in ordered.iter() {
            if self.out_of_time() || self.token.is_cancelled() {
                self.stopped = true;
                return RootResult::incomplete(best_move, best);
            }

            let m = scored.mv;
            let info = self.position.make_move(m);
            let extension = self.extension(m);
            let score = self.minimax(depth - 1 + extension, alpha, beta, 1);
            self.position.unmake_move(m, info);

            if self.stopped {
                return RootResult::incomplete(best_move, best);
            }

            if (maximizing && score > best) || (!maximizing && score < best) {
                best = score;
                best_move = Some(m);
            }
            if maximizing {
                alpha = alpha.max(best);
            } else {
                beta = beta.min(best);
            }
            // Only reachable with a narrowed window.
            if alpha >= beta {
                break;
            }
        }

        RootResult {
            completed: true,
            best_move,
            score: best,
        }
    }

    /// Window around the previous depth's score, widening with depth.
    /// `None` means search the full window.
    pub(crate) fn aspiration_window(
        profile: &DifficultyProfile,
        previous: Option<i32>,
        depth: u32,
    ) -> Option<(i32, i32)> {
        match previous {
            Some(previous) if profile.aspiration && depth >= ASPIRATION_MIN_DEPTH => {
                let margin = ASPIRATION_BASE + ASPIRATION_PER_DEPTH * depth as i32;
                Some((previous - margin, previous + margin))
            }
            _ => None,
        }
    }

    /// One root pass at `depth`. A completed pass whose score lands on or
    /// outside `window` is repeated with the full window.
    pub(crate) fn search_depth(&mut self, side: Color, depth: u32, window: Option<(i32, i32)>) -> RootResult {
        let Some((lo, hi)) = window else {
            return self.search_root(side, depth, -INFINITY, INFINITY);
        };
        let narrow = self.search_root(side, depth, lo, hi);
        if narrow.completed && (narrow.score <= lo || narrow.score >= hi) {
            debug!("depth {depth}: score {} outside window [{lo}, {hi}], re-searching", narrow.score);
            return self.search_root(side, depth, -INFINITY, INFINITY);
        }
        narrow
    }

    /// Deepen one ply at a time until the depth ceiling, the time budget or
    /// cancellation. Only fully completed passes update the answer.
    ///
    /// Returns the best move, its score (`None` if no pass completed) and
    /// the deepest completed depth.
    pub fn iterative_deepening(
        &mut self,
        legal: &MoveList,
        profile: &DifficultyProfile,
        callback: Option<&SearchInfoCallback>,
    ) -> (Move, Option<i32>, u32) {
        let side = self.position.side_to_move();
        let ceiling = profile.depth_ceiling(legal.len());
        let Some(mut best_move) = legal.first() else {
            panic!("iterative_deepening called without legal moves");
        };
        let mut best_score: Option<i32> = None;
        let mut reached = 0;

        for depth in 1..=ceiling {
            if self.token.is_cancelled() || self.out_of_time() {
                break;
            }

            let window = Self::aspiration_window(profile, best_score, depth);
            let result = self.search_depth(side, depth, window);

            if !result.completed {
                debug!("depth {depth} interrupted after {} nodes", self.nodes);
                break;
            }
            if let Some(mv) = result.best_move {
                best_move = mv;
            }
            best_score = Some(result.score);
            reached = depth;

            let time_ms = self.elapsed_ms();
            debug!(
                "depth {depth} score {} best {best_move} nodes {} time {time_ms}ms",
                result.score, self.nodes
            );
            if let Some(cb) = callback {
                cb(&SearchIterationInfo {
                    depth,
                    score: result.score,
                    best_move,
                    nodes: self.nodes,
                    time_ms,
                });
            }
        }

        (best_move, best_score, reached)
    }
}
