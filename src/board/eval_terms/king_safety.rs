//! King safety from the pawn shield.

use crate::board::{Color, Piece, Position};

use super::tables::{QUEENLESS_BONUS, SHIELD_PAWN_BONUS, THIN_SHIELD_PENALTY};

impl Position {
    #[must_use]
    pub(crate) fn eval_king_safety(&self) -> i32 {
        let mut queens = [0; 2];
        for (_, color, piece) in self.pieces() {
            if piece == Piece::Queen {
                queens[color.index()] += 1;
            }
        }
        let queenless = queens == [0, 0];

        let mut score = 0;
        for color in Color::BOTH {
            let Some(king) = self.find_king(color) else {
                continue;
            };
            let shield = (-1..=1)
                .filter_map(|df| king.offset(color.pawn_direction(), df))
                .filter(|&sq| self.piece_at(sq) == Some((color, Piece::Pawn)))
                .count() as i32;

            let mut safety = shield * SHIELD_PAWN_BONUS;
            if queenless {
                safety += QUEENLESS_BONUS;
            }
            if queens[color.opponent().index()] > 0 && shield <= 1 {
                safety -= THIN_SHIELD_PENALTY;
            }
            score += color.sign() * safety;
        }
        score
    }
}
