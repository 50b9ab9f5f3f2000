//! Cancellation primitives for search control.
//!
//! A session owns a monotonically increasing turn counter. Each search
//! captures the value current at its start; once the counter moves on
//! (new game, resignation) the search is abandoned and its result dropped.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared turn counter.
#[derive(Clone, Debug, Default)]
pub struct TurnCounter(Arc<AtomicU64>);

impl TurnCounter {
    #[must_use]
    pub fn new() -> Self {
        TurnCounter(Arc::new(AtomicU64::new(0)))
    }

    #[inline]
    #[must_use]
    pub fn current(&self) -> u64 {
        self.0.load(Ordering::Acquire)
    }

    /// Invalidate every token handed out so far.
    #[inline]
    pub fn advance(&self) -> u64 {
        self.0.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Token bound to the current turn.
    #[must_use]
    pub fn token(&self) -> CancelToken {
        CancelToken {
            counter: Some(Arc::clone(&self.0)),
            turn: self.current(),
        }
    }
}

/// Turn snapshot held by an in-flight search.
#[derive(Clone, Debug)]
pub struct CancelToken {
    counter: Option<Arc<AtomicU64>>,
    turn: u64,
}

impl CancelToken {
    /// Token that is never cancelled, for standalone searches.
    #[must_use]
    pub fn never() -> Self {
        CancelToken {
            counter: None,
            turn: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.counter
            .as_ref()
            .is_some_and(|counter| counter.load(Ordering::Acquire) != self.turn)
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::never()
    }
}
