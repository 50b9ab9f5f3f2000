//! Move generation: pseudo-legal moves per piece, then a make/unmake
//! legality filter that rejects anything leaving the mover's king in check.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::error::MoveParseError;
use super::{Color, Move, MoveList, Piece, Position, Square};

impl Position {
    /// Pseudo-legal moves of whatever piece stands on `from`, appended to `moves`.
    pub(crate) fn push_pseudo_moves(&self, from: Square, moves: &mut MoveList) {
        let Some((color, piece)) = self.piece_at(from) else {
            return;
        };
        match piece {
            Piece::Pawn => self.push_pawn_moves(from, color, moves),
            Piece::Knight => self.push_knight_moves(from, color, moves),
            Piece::Bishop | Piece::Rook | Piece::Queen => {
                self.push_slider_moves(from, color, piece, moves);
            }
            Piece::King => self.push_king_moves(from, color, moves),
        }
    }

    pub(crate) fn pseudo_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (sq, owner, _) in self.pieces() {
            if owner == color {
                self.push_pseudo_moves(sq, &mut moves);
            }
        }
        moves
    }

    /// Number of pseudo-legal moves for `color`, castling included.
    #[must_use]
    pub fn pseudo_move_count(&self, color: Color) -> usize {
        self.pseudo_moves(color).len()
    }

    /// Keep the moves that do not leave `color`'s king attacked.
    fn retain_legal(&mut self, color: Color, moves: &mut MoveList) {
        moves.retain(|&m| {
            let info = self.make_move(m);
            let safe = !self.is_in_check(color);
            self.unmake_move(m, info);
            safe
        });
    }

    /// Legal moves of the piece on `from`. Empty when the square is empty or
    /// holds a piece that does not belong to `side`; an illegal click is a
    /// normal event, not an error.
    pub fn legal_moves_for_square(&mut self, from: Square, side: Color) -> MoveList {
        let mut moves = MoveList::new();
        if matches!(self.piece_at(from), Some((owner, _)) if owner == side) {
            self.push_pseudo_moves(from, &mut moves);
            self.retain_legal(side, &mut moves);
        }
        moves
    }

    /// Every legal move for `side`, in board order (rank 1 first).
    pub fn legal_moves(&mut self, side: Color) -> MoveList {
        let mut moves = self.pseudo_moves(side);
        self.retain_legal(side, &mut moves);
        moves
    }

    /// Legal captures and promotions for `side`.
    pub(crate) fn legal_tactical_moves(&mut self, side: Color) -> MoveList {
        let mut moves = self.pseudo_moves(side);
        moves.retain(|m| m.is_tactical());
        self.retain_legal(side, &mut moves);
        moves
    }

    /// Leaf count of the legal move tree below this position.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let side = self.side_to_move;
        let moves = self.legal_moves(side);
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for &m in &moves {
            let info = self.make_move(m);
            nodes += self.perft(depth - 1);
            self.unmake_move(m, info);
        }

        nodes
    }

    /// Resolve coordinate notation (`e2e4`, `e7e8q`) to a legal move of the
    /// side to move. A promotion given without a letter promotes to a queen.
    pub fn parse_move(&mut self, notation: &str) -> Result<Move, MoveParseError> {
        let len = notation.chars().count();
        if !(4..=5).contains(&len) || !notation.is_ascii() {
            return Err(MoveParseError::InvalidLength { len });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: notation.to_string(),
        };
        let from: Square = notation[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = notation[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match notation[4..].chars().next() {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(p) if !matches!(p, Piece::Pawn | Piece::King) => Some(p),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        let side = self.side_to_move;
        self.legal_moves_for_square(from, side)
            .iter()
            .copied()
            .find(|m| m.to() == to && (promotion.is_none() || m.promotion() == promotion))
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: notation.to_string(),
            })
    }
}
