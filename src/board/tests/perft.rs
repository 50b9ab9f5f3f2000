//! Perft (performance test) for move generation correctness.
//!
//! Depths are limited to those without promotions: only queen promotions
//! are generated, so deeper reference counts would not apply.

use super::position_from_rows;
use crate::board::{Color, Position};
use std::time::Instant;

struct TestPosition {
    name: &'static str,
    rows: &'static str,
    side: Color,
    castling: &'static str,
    depths: &'static [(usize, u64)],
}

const TEST_POSITIONS: &[TestPosition] = &[
    TestPosition {
        name: "Initial Position",
        rows: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        side: Color::White,
        castling: "KQkq",
        depths: &[(1, 20), (2, 400), (3, 8902)],
    },
    TestPosition {
        name: "Kiwipete",
        rows: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        side: Color::White,
        castling: "KQkq",
        depths: &[(1, 48), (2, 2039)],
    },
    TestPosition {
        name: "Position 3",
        rows: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
        side: Color::White,
        castling: "-",
        depths: &[(1, 14), (2, 191), (3, 2812)],
    },
];

#[test]
fn test_perft_positions() {
    for tp in TEST_POSITIONS {
        for &(depth, expected) in tp.depths {
            let mut position = position_from_rows(tp.rows, tp.side, tp.castling);
            let key = position.key();
            let start = Instant::now();
            let nodes = position.perft(depth);
            assert_eq!(
                nodes, expected,
                "{} depth {depth}: expected {expected}, got {nodes} ({:?})",
                tp.name,
                start.elapsed()
            );
            assert_eq!(position.key(), key, "{} not restored after perft", tp.name);
        }
    }
}

#[test]
#[ignore = "slow in debug builds"]
fn test_perft_deep() {
    let mut position = Position::new();
    assert_eq!(position.perft(4), 197_281);

    let mut kiwipete = position_from_rows(TEST_POSITIONS[1].rows, Color::White, "KQkq");
    assert_eq!(kiwipete.perft(3), 97_862);

    let mut pos3 = position_from_rows(TEST_POSITIONS[2].rows, Color::White, "-");
    assert_eq!(pos3.perft(4), 43_238);
}
