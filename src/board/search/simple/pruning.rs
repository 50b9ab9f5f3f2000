use super::super::constants::{NULL_MOVE_MIN_DEPTH, NULL_MOVE_REDUCTION};
use super::SearchContext;
use crate::board::Color;

impl SearchContext<'_> {
    /// Null move pruning: hand the opponent a free move and search shallower.
    /// If the side to move still clears its bound, the node is cut.
    ///
    /// Skipped in check, at shallow depth and without non-pawn material,
    /// where zugzwang makes the pass unsound.
    pub(crate) fn try_null_move(
        &mut self,
        side: Color,
        depth: i32,
        alpha: i32,
        beta: i32,
        ply: usize,
        in_check: bool,
    ) -> Option<i32> {
        if in_check || depth < NULL_MOVE_MIN_DEPTH || !self.position.has_non_pawn_material(side) {
            return None;
        }

        let info = self.position.make_null_move();
        let score = self.minimax(depth - 1 - NULL_MOVE_REDUCTION, alpha, beta, ply + 1);
        self.position.unmake_null_move(info);

        if self.stopped {
            return None;
        }

        let cutoff = match side {
            Color::Black => score >= beta,
            Color::White => score <= alpha,
        };
        cutoff.then_some(score)
    }
}
