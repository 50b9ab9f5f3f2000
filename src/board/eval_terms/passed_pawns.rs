//! Passed pawn bonus.

use crate::board::{Color, Piece, Position, Square};

use super::tables::PASSED_PAWN_STEP;

impl Position {
    /// A pawn is passed when no enemy pawn stands ahead of it on its own
    /// or an adjacent file.
    #[must_use]
    pub(crate) fn eval_passed_pawns(&self) -> i32 {
        let pawns: Vec<(Square, Color)> = self
            .pieces()
            .filter(|&(_, _, p)| p == Piece::Pawn)
            .map(|(sq, c, _)| (sq, c))
            .collect();

        let mut score = 0;
        for &(sq, color) in &pawns {
            let blocked = pawns.iter().any(|&(other, owner)| {
                owner != color
                    && other.file().abs_diff(sq.file()) <= 1
                    && match color {
                        Color::White => other.rank() > sq.rank(),
                        Color::Black => other.rank() < sq.rank(),
                    }
            });
            if !blocked {
                let advanced = color.pawn_start_rank().abs_diff(sq.rank()) as i32;
                score += color.sign() * advanced * PASSED_PAWN_STEP;
            }
        }
        score
    }
}
