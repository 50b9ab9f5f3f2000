//! Transposition table for caching search results.
//!
//! Entries are keyed by the canonical position string from
//! [`Position::key`](crate::board::Position::key), so the side to move,
//! castling rights and en passant target are part of the identity. A store
//! always replaces the previous entry for its key, whatever its depth.

use std::collections::HashMap;

use log::trace;

use crate::board::Move;

/// Entry count above which the table is emptied before a new search.
pub const TT_CEILING: usize = 140_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundType {
    Exact,      // Score is the exact value
    LowerBound, // Score is at least this value (failed high - score >= beta)
    UpperBound, // Score is at most this value (failed low - score <= alpha)
}

impl BoundType {
    /// Classify a node result against the window it was searched with.
    #[must_use]
    pub fn classify(score: i32, alpha: i32, beta: i32) -> Self {
        if score <= alpha {
            BoundType::UpperBound
        } else if score >= beta {
            BoundType::LowerBound
        } else {
            BoundType::Exact
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TTEntry {
    depth: i32,
    score: i32,
    bound_type: BoundType,
    best_move: Option<Move>,
}

impl TTEntry {
    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn bound_type(&self) -> BoundType {
        self.bound_type
    }

    pub fn best_move(&self) -> Option<Move> {
        self.best_move
    }
}

#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<String, TTEntry>,
}

impl TranspositionTable {
    #[must_use]
    pub fn new() -> Self {
        TranspositionTable {
            entries: HashMap::new(),
        }
    }

    /// Score usable at `depth` within (`alpha`, `beta`), if any.
    ///
    /// Shallower entries never answer; exact entries always do; bounds only
    /// when they already prove a cutoff.
    #[must_use]
    pub fn probe(&self, key: &str, depth: i32, alpha: i32, beta: i32) -> Option<i32> {
        let entry = self.entries.get(key)?;
        if entry.depth < depth {
            return None;
        }
        match entry.bound_type {
            BoundType::Exact => Some(entry.score),
            BoundType::LowerBound if entry.score >= beta => Some(entry.score),
            BoundType::UpperBound if entry.score <= alpha => Some(entry.score),
            _ => None,
        }
    }

    /// Best move remembered for `key` at `depth` or deeper.
    #[must_use]
    pub fn hash_move(&self, key: &str, depth: i32) -> Option<Move> {
        self.entries
            .get(key)
            .filter(|entry| entry.depth >= depth)
            .and_then(|entry| entry.best_move)
    }

    pub fn store(
        &mut self,
        key: String,
        depth: i32,
        score: i32,
        bound_type: BoundType,
        best_move: Option<Move>,
    ) {
        self.entries.insert(
            key,
            TTEntry {
                depth,
                score,
                bound_type,
                best_move,
            },
        );
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&TTEntry> {
        self.entries.get(key)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Empty the table once it has grown past [`TT_CEILING`].
    pub fn enforce_ceiling(&mut self) {
        if self.entries.len() > TT_CEILING {
            trace!("clearing transposition table at {} entries", self.entries.len());
            self.entries.clear();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
