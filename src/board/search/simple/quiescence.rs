use super::SearchContext;
use crate::board::Color;

impl SearchContext<'_> {
    /// Quiescence search over captures and promotions only.
    ///
    /// The static evaluation is a stand-pat bound for the side to move;
    /// `depth_left` caps how far capture chains are followed.
    pub(crate) fn quiescence(&mut self, mut alpha: i32, mut beta: i32, depth_left: i32) -> i32 {
        let stopped = self.enter_node();
        let stand = self.position.evaluate();
        if stopped {
            return stand;
        }

        let side = self.position.side_to_move();
        let maximizing = side == Color::Black;
        if maximizing {
            if stand >= beta {
                return beta;
            }
            alpha = alpha.max(stand);
        } else {
            if stand <= alpha {
                return alpha;
            }
            beta = beta.min(stand);
        }

        if depth_left <= 0 {
            return stand;
        }

        let moves = self.position.legal_tactical_moves(side);
        if moves.is_empty() {
            return stand;
        }

        let ordered = self.order_moves(&moves, side, 0, None);
        let mut best = stand;
        for scored in ordered.iter() {
            let m = scored.mv;
            let info = self.position.make_move(m);
            let score = self.quiescence(alpha, beta, depth_left - 1);
            self.position.unmake_move(m, info);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if alpha >= beta || self.stopped {
                break;
            }
        }
        best
    }
}
