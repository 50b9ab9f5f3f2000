//! Game status for the side to move.

use super::{Color, Position};

/// Outcome classification after a move, for the side now to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// Side to move is in check but has a way out
    Check,
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
}

impl GameStatus {
    /// True once the game cannot continue.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate { .. } | GameStatus::Stalemate | GameStatus::InsufficientMaterial
        )
    }
}

impl Position {
    #[must_use]
    pub fn status(&mut self) -> GameStatus {
        let side = self.side_to_move;
        let in_check = self.is_in_check(side);
        if self.legal_moves(side).is_empty() {
            return if in_check {
                GameStatus::Checkmate {
                    winner: side.opponent(),
                }
            } else {
                GameStatus::Stalemate
            };
        }
        if in_check {
            GameStatus::Check
        } else if self.is_insufficient_material() {
            GameStatus::InsufficientMaterial
        } else {
            GameStatus::Ongoing
        }
    }

    /// Bare kings, or bare kings plus a single bishop or knight.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let mut count = 0;
        let mut minors = 0;
        for (_, _, piece) in self.pieces() {
            count += 1;
            if piece.is_minor() {
                minors += 1;
            }
        }
        count == 2 || (count == 3 && minors == 1)
    }
}
