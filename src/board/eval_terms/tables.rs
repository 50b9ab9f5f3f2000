//! Evaluation constants and piece-square tables.
//!
//! Tables are written from White's side with row 0 = rank 8; Black reads
//! them mirrored.

use crate::board::{Color, Piece, Square};

// ============================================================================
// STRUCTURE AND ACTIVITY TERMS
// ============================================================================

pub const BISHOP_PAIR_BONUS: i32 = 42;
pub const MOBILITY_WEIGHT: i32 = 3;

pub const DOUBLED_PAWN_PENALTY: i32 = 12;
pub const ISOLATED_PAWN_PENALTY: i32 = 14;
/// Per rank advanced beyond the starting rank
pub const PASSED_PAWN_STEP: i32 = 9;

pub const ROOK_OPEN_FILE: i32 = 22;
pub const ROOK_SEMI_OPEN_FILE: i32 = 10;

pub const CHECK_PENALTY: i32 = 50;
/// Check weight in the material-only quick estimate
pub const QUICK_CHECK_PENALTY: i32 = 120;

// ============================================================================
// KING SAFETY
// ============================================================================

pub const SHIELD_PAWN_BONUS: i32 = 10;
pub const QUEENLESS_BONUS: i32 = 8;
pub const THIN_SHIELD_PENALTY: i32 = 25;

// ============================================================================
// ENDGAME
// ============================================================================

/// Non-king material (both sides) at or below which kings centralize
pub const SIMPLE_ENDGAME_MATERIAL: i32 = 2600;
pub const CENTRALIZATION_WEIGHT: i32 = 4;

// ============================================================================
// PIECE-SQUARE TABLES
// ============================================================================

#[rustfmt::skip]
const PAWN_PST: [[i32; 8]; 8] = [
    [  0,  0,   0,   0,   0,   0,  0,  0],
    [ 50, 50,  50,  50,  50,  50, 50, 50],
    [ 10, 10,  20,  30,  30,  20, 10, 10],
    [  5,  5,  10,  25,  25,  10,  5,  5],
    [  0,  0,   0,  20,  20,   0,  0,  0],
    [  5, -5, -10,   0,   0, -10, -5,  5],
    [  5, 10,  10, -20, -20,  10, 10,  5],
    [  0,  0,   0,   0,   0,   0,  0,  0],
];

#[rustfmt::skip]
const KNIGHT_PST: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

#[rustfmt::skip]
const BISHOP_PST: [[i32; 8]; 8] = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10,   5,   0,   0,   0,   0,   5, -10],
    [-10,  10,  10,  10,  10,  10,  10, -10],
    [-10,   0,  10,  10,  10,  10,   0, -10],
    [-10,   5,   5,  10,  10,   5,   5, -10],
    [-10,   0,   5,  10,  10,   5,   0, -10],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

#[rustfmt::skip]
const ROOK_PST: [[i32; 8]; 8] = [
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [ 5, 10, 10, 10, 10, 10, 10,  5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [ 0,  0,  0,  5,  5,  0,  0,  0],
];

#[rustfmt::skip]
const QUEEN_PST: [[i32; 8]; 8] = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10,   0,   0,  0,  0,   0,   0, -10],
    [-10,   0,   5,  5,  5,   5,   0, -10],
    [ -5,   0,   5,  5,  5,   5,   0,  -5],
    [  0,   0,   5,  5,  5,   5,   0,  -5],
    [-10,   5,   5,  5,  5,   5,   0, -10],
    [-10,   0,   5,  0,  0,   0,   0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

#[rustfmt::skip]
const KING_PST: [[i32; 8]; 8] = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [ 20,  20,   0,   0,   0,   0,  20,  20],
    [ 20,  30,  10,   0,   0,  10,  30,  20],
];

const PST: [[[i32; 8]; 8]; 6] = [PAWN_PST, KNIGHT_PST, BISHOP_PST, ROOK_PST, QUEEN_PST, KING_PST];

/// Placement bonus for `piece` of `color` on `sq`, from that color's side.
#[inline]
#[must_use]
pub fn pst_value(piece: Piece, color: Color, sq: Square) -> i32 {
    let row = match color {
        Color::White => 7 - sq.rank(),
        Color::Black => sq.rank(),
    };
    PST[piece.index()][row][sq.file()]
}
