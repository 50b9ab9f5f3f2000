//! Rook file activity.

use crate::board::{Piece, Position};

use super::tables::{ROOK_OPEN_FILE, ROOK_SEMI_OPEN_FILE};
use super::PawnFiles;

impl Position {
    #[must_use]
    pub(crate) fn eval_rooks(&self) -> i32 {
        let files = PawnFiles::new(self);
        self.pieces()
            .filter(|&(_, _, p)| p == Piece::Rook)
            .map(|(sq, color, _)| {
                let file = sq.file();
                let bonus = if files.total(file) == 0 {
                    ROOK_OPEN_FILE
                } else if files.count(color, file) == 0 {
                    ROOK_SEMI_OPEN_FILE
                } else {
                    0
                };
                color.sign() * bonus
            })
            .sum()
    }
}
