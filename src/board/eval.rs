//! Static evaluation, always from Black's side: positive favors Black.

use super::eval_terms::tables::{
    pst_value, BISHOP_PAIR_BONUS, CHECK_PENALTY, QUICK_CHECK_PENALTY,
};
use super::{Color, Piece, Position};

/// Score beyond which the advantage bar saturates
const WIN_PROBABILITY_CLAMP: f64 = 1600.0;
const WIN_PROBABILITY_SCALE: f64 = 230.0;

impl Position {
    /// Full static evaluation in centipawns.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        let mut score = 0;
        let mut bishops = [0; 2];

        for (sq, color, piece) in self.pieces() {
            score += color.sign() * (piece.value() + pst_value(piece, color, sq));
            if piece == Piece::Bishop {
                bishops[color.index()] += 1;
            }
        }
        for color in Color::BOTH {
            if bishops[color.index()] >= 2 {
                score += color.sign() * BISHOP_PAIR_BONUS;
            }
        }

        score += self.eval_mobility();
        score += self.eval_pawn_structure();
        score += self.eval_passed_pawns();
        score += self.eval_rooks();
        score += self.check_term(CHECK_PENALTY);
        score += self.eval_king_safety();
        score += self.eval_endgame();

        score
    }

    /// Material and check only; cheap enough for per-move feedback.
    #[must_use]
    pub fn quick_evaluate(&self) -> i32 {
        let material: i32 = self
            .pieces()
            .map(|(_, color, piece)| color.sign() * piece.value())
            .sum();
        material + self.check_term(QUICK_CHECK_PENALTY)
    }

    /// A side in check pays `penalty`.
    fn check_term(&self, penalty: i32) -> i32 {
        Color::BOTH
            .iter()
            .filter(|&&color| self.is_in_check(color))
            .map(|&color| -color.sign() * penalty)
            .sum()
    }
}

/// Black's winning chances in percent for an evaluation score.
#[must_use]
pub fn win_probability(score: i32) -> u8 {
    let x = f64::from(score).clamp(-WIN_PROBABILITY_CLAMP, WIN_PROBABILITY_CLAMP);
    let p = 100.0 / (1.0 + (-x / WIN_PROBABILITY_SCALE).exp());
    p.round() as u8
}
