//! Fluent builder for assembling positions piece by piece.
//!
//! # Example
//! ```
//! use chess_opponent::board::{Color, Piece, PositionBuilder, Square};
//!
//! let position = PositionBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::Black)
//!     .build()
//!     .unwrap();
//! assert_eq!(position.side_to_move(), Color::Black);
//! ```

use super::error::PositionError;
use super::{CastlingRights, Color, EnPassant, Piece, Position, Square};

/// A fluent builder for constructing [`Position`]s.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant: Option<EnPassant>,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Empty board, White to move, no castling rights.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant: None,
        }
    }

    /// Builder preloaded with the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let start = Position::new();
        PositionBuilder {
            pieces: start.pieces().collect(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::all(),
            en_passant: None,
        }
    }

    /// Place a piece, replacing whatever stood on `square`.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Pending en passant after `by` double-pushed across `target`.
    #[must_use]
    pub const fn en_passant(mut self, by: Color, target: Square) -> Self {
        self.en_passant = Some(EnPassant { by, target });
        self
    }

    /// Validate and produce the position.
    ///
    /// # Errors
    /// Every square must lie on the board. Each color needs exactly one
    /// king, no pawn may stand on rank 1 or rank 8, and the side not to
    /// move may not be in check.
    pub fn build(self) -> Result<Position, PositionError> {
        let squares = self
            .pieces
            .iter()
            .map(|&(sq, _, _)| sq)
            .chain(self.en_passant.map(|ep| ep.target));
        for square in squares {
            if square.rank() >= 8 || square.file() >= 8 {
                return Err(PositionError::SquareOffBoard {
                    rank: square.rank(),
                    file: square.file(),
                });
            }
        }

        for color in Color::BOTH {
            let kings = self
                .pieces
                .iter()
                .filter(|&&(_, c, p)| c == color && p == Piece::King)
                .count();
            match kings {
                0 => return Err(PositionError::MissingKing { color }),
                1 => {}
                _ => return Err(PositionError::ExtraKing { color }),
            }
        }

        if let Some(&(square, _, _)) = self
            .pieces
            .iter()
            .find(|&&(sq, _, p)| p == Piece::Pawn && (sq.rank() == 0 || sq.rank() == 7))
        {
            return Err(PositionError::PawnOnBackRank { square });
        }

        let mut position = Position::empty();
        for (square, color, piece) in self.pieces {
            position.set_piece(square, color, piece);
        }
        position.side_to_move = self.side_to_move;
        position.castling_rights = self.castling_rights;
        position.en_passant = self.en_passant;

        let waiting = self.side_to_move.opponent();
        if position.is_in_check(waiting) {
            return Err(PositionError::OpponentInCheck { color: waiting });
        }
        Ok(position)
    }
}
