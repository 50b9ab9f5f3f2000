use std::fmt;
use std::fmt::Write as _;

use super::{CastlingRights, Color, Move, Piece, Square};

/// Pending en passant opportunity created by a double pawn push.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EnPassant {
    /// Color that made the double push; only the other color may capture
    pub by: Color,
    /// Square the pawn skipped over
    pub target: Square,
}

/// Everything `unmake_move` needs to restore the position.
#[derive(Clone, Copy, Debug)]
pub struct UnmakeInfo {
    pub(crate) captured: Option<(Color, Piece)>,
    pub(crate) previous_en_passant: Option<EnPassant>,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_side: Color,
}

pub struct NullMoveInfo {
    pub(crate) previous_en_passant: Option<EnPassant>,
}

/// Mailbox position: an 8x8 grid plus side to move, castling rights,
/// en passant target and the applied move history.
#[derive(Clone, Debug)]
pub struct Position {
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8], // [rank][file]
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant: Option<EnPassant>,
    pub(crate) history: Vec<Move>,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// Standard initial position, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.iter().enumerate() {
            position.set_piece(Square(0, file), Color::White, *piece);
            position.set_piece(Square(7, file), Color::Black, *piece);
            position.set_piece(Square(1, file), Color::White, Piece::Pawn);
            position.set_piece(Square(6, file), Color::Black, Piece::Pawn);
        }
        position.castling_rights = CastlingRights::all();
        position
    }

    pub(crate) fn empty() -> Self {
        Position {
            squares: [[None; 8]; 8],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant: None,
            history: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1]
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.0][sq.1] = Some((color, piece));
    }

    #[inline]
    pub(crate) fn take_piece(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1].take()
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Hand the move to `color` without playing a move.
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<EnPassant> {
        self.en_passant
    }

    /// Moves applied through [`Position::apply_move`], oldest first.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// History in coordinate notation, as used for book lookups.
    #[must_use]
    pub fn history_tokens(&self) -> Vec<String> {
        self.history.iter().map(ToString::to_string).collect()
    }

    /// Every occupied square with its occupant, rank 1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|(c, p)| (sq, c, p)))
    }

    /// True if `color` still has a knight, bishop, rook or queen.
    #[must_use]
    pub fn has_non_pawn_material(&self, color: Color) -> bool {
        self.pieces()
            .any(|(_, c, p)| c == color && !matches!(p, Piece::Pawn | Piece::King))
    }

    /// Canonical identity of the position for the transposition table:
    /// rows from rank 8 down, the side to move, castling rights and the
    /// en passant target.
    #[must_use]
    pub fn key(&self) -> String {
        let mut key = String::with_capacity(150);
        for rank in (0..8).rev() {
            for file in 0..8 {
                match self.squares[rank][file] {
                    Some((color, piece)) => {
                        key.push(color.to_char());
                        key.push(piece.to_char().to_ascii_uppercase());
                    }
                    None => key.push_str(".."),
                }
            }
            if rank > 0 {
                key.push('/');
            }
        }
        let _ = write!(key, "|{}|{}|", self.side_to_move.to_char(), self.castling_rights);
        match self.en_passant {
            Some(ep) => {
                let _ = write!(key, "{}", ep.target);
            }
            None => key.push('-'),
        }
        key
    }
}

/// Text diagram, rank 8 on top; White uppercase.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = match self.squares[rank][file] {
                    Some((Color::White, piece)) => piece.to_char().to_ascii_uppercase(),
                    Some((Color::Black, piece)) => piece.to_char(),
                    None => '.',
                };
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}
