//! Attack detection by direct offset checks and ray walks.
//!
//! Kept separate from move generation: legality filtering, castling gates,
//! move ordering and evaluation all ask "is this square attacked" far more
//! often than they need the attacking moves themselves.

use super::{Color, Piece, Position, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const DIAGONALS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

impl Position {
    /// True if any piece of `by` reaches `target` in one step.
    #[must_use]
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        // Pawns of `by` attack from one rank behind the target.
        let behind = -by.pawn_direction();
        for d_file in [-1, 1] {
            if let Some(sq) = target.offset(behind, d_file) {
                if self.piece_at(sq) == Some((by, Piece::Pawn)) {
                    return true;
                }
            }
        }

        let hits = |offsets: &[(isize, isize)], piece: Piece| {
            offsets.iter().any(|&(dr, df)| {
                target
                    .offset(dr, df)
                    .is_some_and(|sq| self.piece_at(sq) == Some((by, piece)))
            })
        };
        if hits(&KNIGHT_OFFSETS, Piece::Knight) || hits(&KING_OFFSETS, Piece::King) {
            return true;
        }

        self.ray_attacked(target, by, &DIAGONALS, Piece::attacks_diagonally)
            || self.ray_attacked(target, by, &ORTHOGONALS, Piece::attacks_straight)
    }

    /// Walk each ray to its first blocker and test it with `slides`.
    fn ray_attacked(
        &self,
        target: Square,
        by: Color,
        rays: &[(isize, isize)],
        slides: fn(Piece) -> bool,
    ) -> bool {
        for &(dr, df) in rays {
            let mut cursor = target.offset(dr, df);
            while let Some(sq) = cursor {
                if let Some((color, piece)) = self.piece_at(sq) {
                    if color == by && slides(piece) {
                        return true;
                    }
                    break;
                }
                cursor = sq.offset(dr, df);
            }
        }
        false
    }

    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, c, p)| c == color && p == Piece::King)
            .map(|(sq, _, _)| sq)
    }

    /// Square of `color`'s king.
    ///
    /// # Panics
    /// A position without that king breaks the core invariant and cannot
    /// be searched or evaluated.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        match self.find_king(color) {
            Some(sq) => sq,
            None => panic!("{color} king missing from position {}", self.key()),
        }
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), color.opponent())
    }
}
