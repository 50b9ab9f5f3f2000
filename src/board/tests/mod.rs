//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Performance tests for move generation
//! - `draw.rs` - Game status (mate, stalemate, insufficient material)
//! - `make_unmake.rs` - Make/unmake move correctness
//! - `edge_cases.rs` - Special positions and edge cases
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Search results and equivalence with plain minimax
//! - `search_tables.rs` - Killer/history/transposition tables
//! - `proptest.rs` - Property-based tests

mod draw;
mod perft;
mod proptest;

use crate::board::{CastlingRights, Color, Piece, Position, PositionBuilder, Square};

/// Build a position from rank rows written rank 8 first, `/`-separated,
/// with digits for runs of empty squares; White uppercase.
/// `castling` uses the usual `KQkq` letters or `-`.
pub(super) fn position_from_rows(rows: &str, side: Color, castling: &str) -> Position {
    let mut builder = PositionBuilder::new().side_to_move(side);
    for (i, row) in rows.split('/').enumerate() {
        let rank = 7 - i;
        let mut file = 0;
        for c in row.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as usize;
                continue;
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let piece = Piece::from_char(c.to_ascii_lowercase()).expect("piece letter");
            builder = builder.piece(Square(rank, file), color, piece);
            file += 1;
        }
    }
    let mut rights = CastlingRights::none();
    for c in castling.chars() {
        match c {
            'K' => rights.set(Color::White, true),
            'Q' => rights.set(Color::White, false),
            'k' => rights.set(Color::Black, true),
            'q' => rights.set(Color::Black, false),
            _ => {}
        }
    }
    builder.castling(rights).build().expect("valid test position")
}

pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("square name")
}
