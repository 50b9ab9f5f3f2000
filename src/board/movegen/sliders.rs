use super::super::attacks::{DIAGONALS, ORTHOGONALS};
use super::super::{Color, Move, MoveList, Piece, Position, Square};

impl Position {
    /// Ray moves for a bishop, rook or queen; each ray stops at the first
    /// occupied square, which is included when it holds an enemy piece.
    pub(crate) fn push_slider_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        moves: &mut MoveList,
    ) {
        let rays = DIAGONALS
            .iter()
            .filter(|_| piece.attacks_diagonally())
            .chain(ORTHOGONALS.iter().filter(|_| piece.attacks_straight()));

        for &(dr, df) in rays {
            let mut cursor = from.offset(dr, df);
            while let Some(to) = cursor {
                match self.piece_at(to) {
                    None => moves.push(Move::new(from, to, piece, None)),
                    Some((owner, victim)) => {
                        if owner != color {
                            moves.push(Move::new(from, to, piece, Some(victim)));
                        }
                        break;
                    }
                }
                cursor = to.offset(dr, df);
            }
        }
    }
}
