use crate::board::{Color, Position};

use super::tables::MOBILITY_WEIGHT;

impl Position {
    /// Pseudo-legal move difference, castling included.
    #[must_use]
    pub(crate) fn eval_mobility(&self) -> i32 {
        let black = self.pseudo_move_count(Color::Black) as i32;
        let white = self.pseudo_move_count(Color::White) as i32;
        (black - white) * MOBILITY_WEIGHT
    }
}
