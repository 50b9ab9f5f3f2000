//! Search constants.

// ============================================================================
// SCORES
// ============================================================================

/// Score of a side being mated at the root; mates deeper in the tree
/// lose one point per ply so faster mates are preferred.
pub const MATE_SCORE: i32 = 1_000_000;

/// Window bound wider than any reachable score
pub const INFINITY: i32 = 2 * MATE_SCORE;

// ============================================================================
// MOVE ORDERING PRIORITIES
// ============================================================================
// Bonuses are additive; a capturing hash move collects both.

/// Hash move (from transposition table) - highest priority
pub const HASH_MOVE_BONUS: i32 = 90_000;

/// Flat capture bonus; victim value minus attacker value is added on top
pub const CAPTURE_BONUS: i32 = 12_000;

pub const PROMOTION_BONUS: i32 = 9_000;

/// Quiet move that caused a cutoff at the same ply
pub const KILLER_BONUS: i32 = 6_000;

pub const GIVES_CHECK_BONUS: i32 = 1_800;

pub const CASTLE_BONUS: i32 = 800;

pub const EN_PASSANT_BONUS: i32 = 700;

/// Destination attacked by the opponent once the move is made
pub const ATTACKED_DESTINATION_PENALTY: i32 = 120;

// ============================================================================
// PRUNING AND REDUCTIONS
// ============================================================================

/// Null move is tried from this depth on
pub const NULL_MOVE_MIN_DEPTH: i32 = 3;

/// Null-move child depth is `depth - 1 - NULL_MOVE_REDUCTION`
pub const NULL_MOVE_REDUCTION: i32 = 2;

pub const LMR_MIN_DEPTH: i32 = 3;

/// The first moves in ordering are never reduced
pub const LMR_MIN_MOVE_INDEX: usize = 4;

// ============================================================================
// DRIVER
// ============================================================================

/// Time and cancellation are polled once per this many nodes
pub const NODE_CHECK_INTERVAL: u64 = 1024;

/// Aspiration margin is `ASPIRATION_BASE + ASPIRATION_PER_DEPTH * depth`
pub const ASPIRATION_BASE: i32 = 60;
pub const ASPIRATION_PER_DEPTH: i32 = 8;
pub const ASPIRATION_MIN_DEPTH: u32 = 3;

/// Roots with at most this many legal moves search to the full depth ceiling
pub const NARROW_ROOT_MOVES: usize = 16;
