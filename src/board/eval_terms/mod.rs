//! Positional evaluation terms.
//!
//! Every term returns centipawns from Black's side (positive favors Black):
//! - Pawn structure (doubled, isolated)
//! - Passed pawns scaled by advancement
//! - Rooks on open and semi-open files
//! - King pawn shield
//! - Mobility (pseudo-legal move difference)
//! - King centralization in simple endgames

mod endgame;
mod king_safety;
mod mobility;
mod passed_pawns;
mod pawn_structure;
mod rooks;
pub mod tables;

use crate::board::{Color, Piece, Position};

/// Pawn count per (color, file), shared by the pawn and rook terms.
pub(crate) struct PawnFiles {
    counts: [[i32; 8]; 2],
}

impl PawnFiles {
    pub(crate) fn new(position: &Position) -> Self {
        let mut counts = [[0; 8]; 2];
        for (sq, color, piece) in position.pieces() {
            if piece == Piece::Pawn {
                counts[color.index()][sq.file()] += 1;
            }
        }
        PawnFiles { counts }
    }

    #[inline]
    pub(crate) fn count(&self, color: Color, file: usize) -> i32 {
        self.counts[color.index()][file]
    }

    #[inline]
    pub(crate) fn total(&self, file: usize) -> i32 {
        self.counts[0][file] + self.counts[1][file]
    }

    /// Own pawns on a neighbouring file
    pub(crate) fn has_neighbour(&self, color: Color, file: usize) -> bool {
        (file > 0 && self.count(color, file - 1) > 0)
            || (file < 7 && self.count(color, file + 1) > 0)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Color, Piece, Position, PositionBuilder, Square};

    fn kings() -> PositionBuilder {
        PositionBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .piece(Square(7, 4), Color::Black, Piece::King)
    }

    fn build(builder: PositionBuilder) -> Position {
        builder.build().expect("valid position")
    }

    #[test]
    fn test_mobility_startpos_balanced() {
        assert_eq!(Position::new().eval_mobility(), 0);
    }

    #[test]
    fn test_doubled_pawns_penalized() {
        let position = build(
            kings()
                .piece(Square(3, 3), Color::White, Piece::Pawn)
                .piece(Square(2, 3), Color::White, Piece::Pawn)
                .piece(Square(2, 4), Color::White, Piece::Pawn),
        );
        // Two doubled White pawns count against White, so Black gains 24
        assert_eq!(position.eval_pawn_structure(), 24);
    }

    #[test]
    fn test_isolated_pawn_penalized() {
        let position = build(kings().piece(Square(6, 0), Color::Black, Piece::Pawn));
        assert_eq!(position.eval_pawn_structure(), -14);
    }

    #[test]
    fn test_passed_pawn_scaled_by_advancement() {
        let near = build(kings().piece(Square(5, 3), Color::White, Piece::Pawn));
        let far = build(kings().piece(Square(2, 3), Color::White, Piece::Pawn));
        assert_eq!(near.eval_passed_pawns(), -36);
        assert_eq!(far.eval_passed_pawns(), -9);
    }

    #[test]
    fn test_blocked_pawn_not_passed() {
        let position = build(
            kings()
                .piece(Square(3, 3), Color::White, Piece::Pawn)
                .piece(Square(5, 4), Color::Black, Piece::Pawn),
        );
        // d4 and e6 face each other on adjacent files: neither is passed
        assert_eq!(position.eval_passed_pawns(), 0);
    }

    #[test]
    fn test_rook_open_and_semi_open_files() {
        let open = build(kings().piece(Square(0, 0), Color::White, Piece::Rook));
        assert_eq!(open.eval_rooks(), -22);

        let semi_open = build(
            kings()
                .piece(Square(7, 0), Color::Black, Piece::Rook)
                .piece(Square(3, 0), Color::White, Piece::Pawn),
        );
        assert_eq!(semi_open.eval_rooks(), 10);
    }

    #[test]
    fn test_king_shield_counts_front_pawns() {
        let position = build(
            PositionBuilder::new()
                .piece(Square(0, 6), Color::White, Piece::King)
                .piece(Square(1, 5), Color::White, Piece::Pawn)
                .piece(Square(1, 6), Color::White, Piece::Pawn)
                .piece(Square(1, 7), Color::White, Piece::Pawn)
                .piece(Square(7, 6), Color::Black, Piece::King),
        );
        // White: 3 * 10 + 8 (queenless); Black: 0 + 8
        assert_eq!(position.eval_king_safety(), 8 - 38);
    }

    #[test]
    fn test_thin_shield_against_queen() {
        let position = build(
            kings()
                .piece(Square(7, 3), Color::Black, Piece::Queen)
                .piece(Square(0, 3), Color::White, Piece::Queen),
        );
        // Both shields empty and both sides keep a queen
        assert_eq!(position.eval_king_safety(), 0);

        let position = build(kings().piece(Square(7, 3), Color::Black, Piece::Queen));
        // Only White faces a queen: White -25, Black 0
        assert_eq!(position.eval_king_safety(), 25);
    }

    #[test]
    fn test_endgame_centralization() {
        let position = build(
            PositionBuilder::new()
                .piece(Square(3, 3), Color::Black, Piece::King)
                .piece(Square(0, 0), Color::White, Piece::King),
        );
        // d4: manhattan 1.0 from the centre -> 24; a1: 7.0 -> 0
        assert_eq!(position.eval_endgame(), 24);
    }

    #[test]
    fn test_no_centralization_with_heavy_material() {
        assert_eq!(Position::new().eval_endgame(), 0);
    }
}
