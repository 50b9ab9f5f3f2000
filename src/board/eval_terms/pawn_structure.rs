//! Doubled and isolated pawns.

use crate::board::{Color, Piece, Position};

use super::tables::{DOUBLED_PAWN_PENALTY, ISOLATED_PAWN_PENALTY};
use super::PawnFiles;

impl Position {
    #[must_use]
    pub(crate) fn eval_pawn_structure(&self) -> i32 {
        let files = PawnFiles::new(self);
        let mut score = 0;

        for color in Color::BOTH {
            let mut penalty = 0;
            for file in 0..8 {
                let count = files.count(color, file);
                if count > 1 {
                    penalty += DOUBLED_PAWN_PENALTY * count;
                }
            }
            for (sq, c, piece) in self.pieces() {
                if c == color && piece == Piece::Pawn && !files.has_neighbour(color, sq.file()) {
                    penalty += ISOLATED_PAWN_PENALTY;
                }
            }
            score -= color.sign() * penalty;
        }

        score
    }
}
