//! Property-based tests using proptest.

use crate::board::{Move, Position, UnmakeInfo};
use crate::tt::{BoundType, TranspositionTable};
use proptest::prelude::*;
use rand::prelude::*;

/// Strategy to generate a random legal move sequence length
fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=24usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

/// Play up to `count` random legal moves, returning the undo stack.
fn random_walk(position: &mut Position, seed: u64, count: usize) -> Vec<(Move, UnmakeInfo)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut stack = Vec::new();
    for _ in 0..count {
        let side = position.side_to_move();
        let moves = position.legal_moves(side);
        let Some(&m) = moves.as_slice().choose(&mut rng) else {
            break;
        };
        stack.push((m, position.make_move(m)));
    }
    stack
}

proptest! {
    /// Property: make_move followed by unmake_move restores the position exactly
    #[test]
    fn prop_make_unmake_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut position = Position::new();
        let initial_key = position.key();

        let mut stack = random_walk(&mut position, seed, num_moves);
        while let Some((m, info)) = stack.pop() {
            position.unmake_move(m, info);
        }

        prop_assert_eq!(position.key(), initial_key);
    }

    /// Property: no legal move leaves the mover's own king in check
    #[test]
    fn prop_legal_moves_keep_king_safe(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut position = Position::new();
        let _ = random_walk(&mut position, seed, num_moves);

        let side = position.side_to_move();
        for &m in position.legal_moves(side).iter() {
            let info = position.make_move(m);
            prop_assert!(!position.is_in_check(side), "{} leaves {} in check", m, side);
            position.unmake_move(m, info);
        }
    }

    /// Property: every legal move round-trips through coordinate notation
    #[test]
    fn prop_parse_move_round_trip(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut position = Position::new();
        let _ = random_walk(&mut position, seed, num_moves);

        let side = position.side_to_move();
        for &m in position.legal_moves(side).iter() {
            let parsed = position.parse_move(&m.to_string());
            prop_assert_eq!(parsed, Ok(m));
        }
    }

    /// Property: tactical moves are exactly the legal captures and promotions
    #[test]
    fn prop_tactical_subset(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut position = Position::new();
        let _ = random_walk(&mut position, seed, num_moves);

        let side = position.side_to_move();
        let legal = position.legal_moves(side);
        let tactical = position.legal_tactical_moves(side);
        let expected: Vec<Move> = legal.iter().copied().filter(|m| m.is_tactical()).collect();
        prop_assert_eq!(tactical.as_slice(), expected.as_slice());
    }

    /// Property: evaluation negates under color mirroring
    #[test]
    fn prop_eval_mirror_symmetry(seed in seed_strategy(), num_moves in move_count_strategy()) {
        use crate::board::{PositionBuilder, Square};

        let mut position = Position::new();
        let _ = random_walk(&mut position, seed, num_moves);

        let side = position.side_to_move();
        let mut builder = PositionBuilder::new().side_to_move(side.opponent());
        for (sq, color, piece) in position.pieces() {
            builder = builder.piece(Square(7 - sq.rank(), sq.file()), color.opponent(), piece);
        }
        if let Ok(mirror) = builder.build() {
            // Castling rights are not mirrored, so compare without them.
            let mut plain = PositionBuilder::new().side_to_move(side);
            for (sq, color, piece) in position.pieces() {
                plain = plain.piece(sq, color, piece);
            }
            let plain = plain.build().expect("position already valid");
            prop_assert_eq!(plain.evaluate(), -mirror.evaluate());
        }
    }

    /// Property: a probe never answers for a deeper request than was stored
    #[test]
    fn prop_tt_depth_gate(stored in 0i32..10, requested in 0i32..10, score in -1000i32..1000) {
        let mut tt = TranspositionTable::new();
        tt.store("key".to_string(), stored, score, BoundType::Exact, None);
        let hit = tt.probe("key", requested, -10_000, 10_000);
        if requested <= stored {
            prop_assert_eq!(hit, Some(score));
        } else {
            prop_assert_eq!(hit, None);
        }
    }
}
