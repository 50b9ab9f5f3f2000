//! Move ordering for search.
//!
//! Scores are additive so a capture that also checks outranks a plain
//! capture of the same victim.

use super::constants::{
    ATTACKED_DESTINATION_PENALTY, CAPTURE_BONUS, CASTLE_BONUS, EN_PASSANT_BONUS, GIVES_CHECK_BONUS,
    HASH_MOVE_BONUS, KILLER_BONUS, PROMOTION_BONUS,
};
use super::SearchContext;
use crate::board::{Color, Move, MoveList, ScoredMoveList};

impl SearchContext<'_> {
    /// Score one move for `side` at `ply`. Plays the move to test for
    /// check and for an attacked landing square.
    pub(crate) fn score_move(&mut self, m: Move, side: Color, ply: usize, hash_move: Option<Move>) -> i32 {
        let mut score = 0;
        if hash_move == Some(m) {
            score += HASH_MOVE_BONUS;
        }
        if let Some(victim) = m.captured() {
            score += CAPTURE_BONUS + victim.value() - m.piece().value();
        }
        if m.is_promotion() {
            score += PROMOTION_BONUS;
        }
        if m.is_castling() {
            score += CASTLE_BONUS;
        }
        if m.is_en_passant() {
            score += EN_PASSANT_BONUS;
        }
        if !m.is_capture() && self.tables.killers.is_killer(ply, m) {
            score += KILLER_BONUS;
        }
        score += self.tables.history.score(side, m.piece(), m.to());

        let opponent = side.opponent();
        let info = self.position.make_move(m);
        if self.position.is_in_check(opponent) {
            score += GIVES_CHECK_BONUS;
        }
        if self.position.is_square_attacked(m.to(), opponent) {
            score -= ATTACKED_DESTINATION_PENALTY;
        }
        self.position.unmake_move(m, info);
        score
    }

    /// Best-first ordering; ties keep generation order.
    pub(crate) fn order_moves(
        &mut self,
        moves: &MoveList,
        side: Color,
        ply: usize,
        hash_move: Option<Move>,
    ) -> ScoredMoveList {
        let mut scored = ScoredMoveList::new();
        for &m in moves.iter() {
            let score = self.score_move(m, side, ply, hash_move);
            scored.push(m, score);
        }
        scored.sort_by_score_desc();
        scored
    }
}
