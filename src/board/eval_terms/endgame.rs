//! King centralization once little material remains.

use crate::board::{Piece, Position, Square};

use super::tables::{CENTRALIZATION_WEIGHT, SIMPLE_ENDGAME_MATERIAL};

/// `(7 - manhattan distance to the centre) * weight`, computed on doubled
/// coordinates so the half-square centre stays integral.
fn centralization(sq: Square) -> i32 {
    let doubled = (7 - 2 * sq.rank() as i32).abs() + (7 - 2 * sq.file() as i32).abs();
    (14 - doubled) * CENTRALIZATION_WEIGHT / 2
}

impl Position {
    #[must_use]
    pub(crate) fn eval_endgame(&self) -> i32 {
        let material: i32 = self
            .pieces()
            .filter(|&(_, _, p)| p != Piece::King)
            .map(|(_, _, p)| p.value())
            .sum();
        if material > SIMPLE_ENDGAME_MATERIAL {
            return 0;
        }

        self.pieces()
            .filter(|&(_, _, p)| p == Piece::King)
            .map(|(sq, color, _)| color.sign() * centralization(sq))
            .sum()
    }
}
