use super::super::{Color, Move, MoveList, Piece, Position, Square};

impl Position {
    /// Pawn pushes, captures and en passant for the pawn of `color` on `from`.
    ///
    /// Reaching the last rank always yields a queen promotion.
    pub(crate) fn push_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();
        let promote = |m: Move| {
            if m.to().rank() == color.pawn_promotion_rank() {
                m.with_promotion(Piece::Queen)
            } else {
                m
            }
        };

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                moves.push(promote(Move::new(from, one, Piece::Pawn, None)));
                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.is_empty(two) {
                            moves.push(Move::new(from, two, Piece::Pawn, None));
                        }
                    }
                }
            }
        }

        for d_file in [-1, 1] {
            let Some(target) = from.offset(dir, d_file) else {
                continue;
            };
            match self.piece_at(target) {
                Some((owner, victim)) if owner != color => {
                    moves.push(promote(Move::new(from, target, Piece::Pawn, Some(victim))));
                }
                Some(_) => {}
                None => {
                    if self.en_passant_capture_available(from, target, color) {
                        moves.push(Move::en_passant(from, target));
                    }
                }
            }
        }
    }

    /// The pending target must belong to the other color's double push and
    /// the pushed pawn must still stand beside `from`.
    fn en_passant_capture_available(&self, from: Square, target: Square, color: Color) -> bool {
        let Some(ep) = self.en_passant else {
            return false;
        };
        ep.by != color
            && ep.target == target
            && self.piece_at(Square(from.rank(), target.file())) == Some((ep.by, Piece::Pawn))
    }
}
