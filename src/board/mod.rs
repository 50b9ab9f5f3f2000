//! Chess board representation and game logic.
//!
//! Uses an 8x8 mailbox with reversible make/unmake for search.
//! Supports castling, en passant and queen promotion; draws by
//! repetition and the fifty-move rule are not tracked.
//!
//! # Example
//! ```
//! use chess_opponent::board::{Color, Position};
//!
//! let mut position = Position::new();
//! let moves = position.legal_moves(Color::White);
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attacks;
mod builder;
pub(crate) mod error;
mod eval;
pub mod eval_terms;
mod make_unmake;
mod movegen;
mod search;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::PositionBuilder;
pub use error::{MoveParseError, PositionError, ProfileError, SquareError};
pub use eval::win_probability;
pub use state::{EnPassant, Position};
pub use status::GameStatus;
pub use types::{
    CastlingRights, Color, Move, MoveKind, MoveList, Piece, ScoredMove, ScoredMoveList, Square,
};

// Public API - search functions and configuration
pub use search::{
    request_move, request_move_with, Difficulty, DifficultyProfile, SearchConfig,
    SearchInfoCallback, SearchIterationInfo, SearchState, MATE_SCORE,
};

// Internal types exposed for advanced usage
pub use state::{NullMoveInfo, UnmakeInfo};

// Search internals for callers that drive iterations themselves
pub use search::{HistoryTable, KillerTable, RootResult, SearchContext, SearchStats, SearchTables};

pub(crate) use types::MAX_PLY;
