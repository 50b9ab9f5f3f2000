use super::super::attacks::KNIGHT_OFFSETS;
use super::super::{Color, Move, MoveList, Piece, Position, Square};

impl Position {
    pub(crate) fn push_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &(dr, df) in &KNIGHT_OFFSETS {
            let Some(to) = from.offset(dr, df) else {
                continue;
            };
            match self.piece_at(to) {
                None => moves.push(Move::new(from, to, Piece::Knight, None)),
                Some((owner, victim)) if owner != color => {
                    moves.push(Move::new(from, to, Piece::Knight, Some(victim)));
                }
                Some(_) => {}
            }
        }
    }
}
