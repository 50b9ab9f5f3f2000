use super::super::attacks::KING_OFFSETS;
use super::super::{Color, Move, MoveList, Piece, Position, Square};

impl Position {
    pub(crate) fn push_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for &(dr, df) in &KING_OFFSETS {
            let Some(to) = from.offset(dr, df) else {
                continue;
            };
            match self.piece_at(to) {
                None => moves.push(Move::new(from, to, Piece::King, None)),
                Some((owner, victim)) if owner != color => {
                    moves.push(Move::new(from, to, Piece::King, Some(victim)));
                }
                Some(_) => {}
            }
        }

        self.push_castling_moves(from, color, moves);
    }

    /// Castling is gated here, not in the legality filter: the right must
    /// remain, the king must stand unattacked on its home square, the path
    /// must be empty with its king-crossed squares unattacked, and the rook
    /// must be home.
    fn push_castling_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let rank = color.back_rank();
        let enemy = color.opponent();
        if from != Square(rank, 4) || self.is_square_attacked(from, enemy) {
            return;
        }

        let rook_home = |file| self.piece_at(Square(rank, file)) == Some((color, Piece::Rook));
        let empty = |files: &[usize]| files.iter().all(|&f| self.is_empty(Square(rank, f)));
        let safe = |files: &[usize]| {
            files
                .iter()
                .all(|&f| !self.is_square_attacked(Square(rank, f), enemy))
        };

        let rights = self.castling_rights;
        if rights.has(color, true) && rook_home(7) && empty(&[5, 6]) && safe(&[5, 6]) {
            moves.push(Move::castle(from, Square(rank, 6), true));
        }
        if rights.has(color, false) && rook_home(0) && empty(&[1, 2, 3]) && safe(&[2, 3]) {
            moves.push(Move::castle(from, Square(rank, 2), false));
        }
    }
}
