use super::{CastlingRights, Color, EnPassant, Move, MoveKind, NullMoveInfo, Piece, Position, Square, UnmakeInfo};

/// Square of the piece removed by `m` (differs from `to` only for en passant).
#[inline]
fn capture_square(m: Move) -> Square {
    if m.is_en_passant() {
        Square(m.from().rank(), m.to().file())
    } else {
        m.to()
    }
}

/// Rook hop (from, to) implied by a castling move on `rank`.
#[inline]
fn castle_rook_squares(kind: MoveKind, rank: usize) -> Option<(Square, Square)> {
    match kind {
        MoveKind::CastleKingside => Some((Square(rank, 7), Square(rank, 5))),
        MoveKind::CastleQueenside => Some((Square(rank, 0), Square(rank, 3))),
        _ => None,
    }
}

/// Castling right tied to a rook's home corner.
#[inline]
fn corner_right(sq: Square) -> Option<(Color, bool)> {
    match (sq.rank(), sq.file()) {
        (0, 0) => Some((Color::White, false)),
        (0, 7) => Some((Color::White, true)),
        (7, 0) => Some((Color::Black, false)),
        (7, 7) => Some((Color::Black, true)),
        _ => None,
    }
}

fn update_castling_rights(
    rights: &mut CastlingRights,
    m: Move,
    color: Color,
    captured: Option<(Color, Piece)>,
) {
    match m.piece() {
        Piece::King => rights.remove_all(color),
        Piece::Rook => {
            if let Some((owner, kingside)) = corner_right(m.from()) {
                if owner == color {
                    rights.remove(owner, kingside);
                }
            }
        }
        _ => {}
    }

    if let Some((_, Piece::Rook)) = captured {
        if let Some((owner, kingside)) = corner_right(m.to()) {
            rights.remove(owner, kingside);
        }
    }
}

impl Position {
    /// Play `m` on the live position: the only mutation path the game uses.
    ///
    /// Flips the side to move, records the move in the history and returns
    /// the captured piece, if any. `m` must come from the legal move list.
    pub fn apply_move(&mut self, m: Move) -> Option<Piece> {
        let info = self.make_move(m);
        self.history.push(m);
        info.captured.map(|(_, piece)| piece)
    }

    /// Reversible move application used by search; the history is untouched.
    pub(crate) fn make_move(&mut self, m: Move) -> UnmakeInfo {
        let info = UnmakeInfo {
            captured: None,
            previous_en_passant: self.en_passant,
            previous_castling_rights: self.castling_rights,
            previous_side: self.side_to_move,
        };

        let Some((color, moving)) = self.take_piece(m.from()) else {
            panic!("make_move: no piece on {} for {m}", m.from());
        };

        let captured = self.take_piece(capture_square(m));

        let placed = if moving == Piece::Pawn && m.to().rank() == color.pawn_promotion_rank() {
            m.promotion().unwrap_or(Piece::Queen)
        } else {
            moving
        };
        self.set_piece(m.to(), color, placed);

        if let Some((rook_from, rook_to)) = castle_rook_squares(m.kind(), m.from().rank()) {
            if let Some((rook_color, rook)) = self.take_piece(rook_from) {
                self.set_piece(rook_to, rook_color, rook);
            }
        }

        update_castling_rights(&mut self.castling_rights, m, color, captured);

        self.en_passant = if moving == Piece::Pawn && m.from().rank().abs_diff(m.to().rank()) == 2 {
            Some(EnPassant {
                by: color,
                target: Square((m.from().rank() + m.to().rank()) / 2, m.from().file()),
            })
        } else {
            None
        };

        self.side_to_move = color.opponent();

        UnmakeInfo { captured, ..info }
    }

    pub(crate) fn unmake_move(&mut self, m: Move, info: UnmakeInfo) {
        if let Some((color, _)) = self.take_piece(m.to()) {
            self.set_piece(m.from(), color, m.piece());
        }

        if let Some((rook_from, rook_to)) = castle_rook_squares(m.kind(), m.from().rank()) {
            if let Some((rook_color, rook)) = self.take_piece(rook_to) {
                self.set_piece(rook_from, rook_color, rook);
            }
        }

        if let Some((color, piece)) = info.captured {
            self.set_piece(capture_square(m), color, piece);
        }

        self.en_passant = info.previous_en_passant;
        self.castling_rights = info.previous_castling_rights;
        self.side_to_move = info.previous_side;
    }

    /// Pass the turn: flips the side to move and clears en passant.
    pub(crate) fn make_null_move(&mut self) -> NullMoveInfo {
        let info = NullMoveInfo {
            previous_en_passant: self.en_passant,
        };
        self.en_passant = None;
        self.side_to_move = self.side_to_move.opponent();
        info
    }

    pub(crate) fn unmake_null_move(&mut self, info: NullMoveInfo) {
        self.en_passant = info.previous_en_passant;
        self.side_to_move = self.side_to_move.opponent();
    }
}
