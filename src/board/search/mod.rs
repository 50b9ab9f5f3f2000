//! Search module implementing alpha-beta with iterative deepening.
//!
//! Scores are always from Black's side: Black maximizes, White minimizes.
//!
//! Features:
//! - Iterative deepening with aspiration windows and a wall-clock budget
//! - Alpha-beta minimax with null move pruning and late move reductions
//! - Check, capture and promotion extensions
//! - Quiescence search over captures and promotions with fail-hard stand pat
//! - Move ordering (hash move, MVV-LVA, killers, history, check bonus)
//! - Opening book and randomized near-best choice for weaker levels

mod constants;
mod move_order;
mod params;
mod simple;

use std::sync::Arc;

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::book::OpeningBook;
use crate::sync::CancelToken;
use crate::tt::TranspositionTable;

use super::{Color, Move, MoveList, Piece, Position, Square, MAX_PLY};
pub use constants::MATE_SCORE;
pub use params::{Difficulty, DifficultyProfile};
pub use simple::{RootResult, SearchContext};

/// Two most recent quiet cutoff moves per ply, newest first.
pub struct KillerTable {
    slots: [[Option<Move>; 2]; MAX_PLY],
}

impl Default for KillerTable {
    fn default() -> Self {
        Self::new()
    }
}

impl KillerTable {
    #[must_use]
    pub fn new() -> Self {
        KillerTable {
            slots: [[None; 2]; MAX_PLY],
        }
    }

    #[must_use]
    pub fn is_killer(&self, ply: usize, mv: Move) -> bool {
        self.slots
            .get(ply)
            .is_some_and(|row| row.contains(&Some(mv)))
    }

    #[must_use]
    pub fn killers(&self, ply: usize) -> [Option<Move>; 2] {
        self.slots.get(ply).copied().unwrap_or([None; 2])
    }

    /// Push `mv` to the front unless it is already recorded.
    pub fn update(&mut self, ply: usize, mv: Move) {
        let Some(row) = self.slots.get_mut(ply) else {
            return;
        };
        if row.contains(&Some(mv)) {
            return;
        }
        row[1] = row[0];
        row[0] = Some(mv);
    }

    pub fn reset(&mut self) {
        self.slots = [[None; 2]; MAX_PLY];
    }
}

/// Cutoff history keyed by (color, piece, destination).
pub struct HistoryTable {
    entries: [[[i32; 64]; 6]; 2],
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryTable {
    #[must_use]
    pub fn new() -> Self {
        HistoryTable {
            entries: [[[0; 64]; 6]; 2],
        }
    }

    #[inline]
    fn index(to: Square) -> usize {
        to.rank() * 8 + to.file()
    }

    #[must_use]
    pub fn score(&self, color: Color, piece: Piece, to: Square) -> i32 {
        self.entries[color.index()][piece.index()][Self::index(to)]
    }

    /// Reward a quiet move that caused a cutoff at `depth`.
    pub fn update(&mut self, color: Color, mv: Move, depth: i32) {
        let entry = &mut self.entries[color.index()][mv.piece().index()][Self::index(mv.to())];
        *entry = entry.saturating_add(depth.saturating_mul(depth));
    }

    pub fn reset(&mut self) {
        self.entries = [[[0; 64]; 6]; 2];
    }
}

/// Tables that live across searches within one game.
#[derive(Default)]
pub struct SearchTables {
    pub tt: TranspositionTable,
    pub killers: KillerTable,
    pub history: HistoryTable,
}

impl SearchTables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything; used at the start of a new game.
    pub fn clear(&mut self) {
        self.tt.clear();
        self.killers.reset();
        self.history.reset();
    }
}

/// Statistics of the most recent search
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchStats {
    pub nodes: u64,
    pub depth: u32,
    pub score: Option<i32>,
}

/// Search state persisted across searches
#[derive(Default)]
pub struct SearchState {
    pub tables: SearchTables,
    pub stats: SearchStats,
}

impl SearchState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_game(&mut self) {
        self.tables.clear();
        self.stats = SearchStats::default();
    }
}

/// Information about a completed search iteration.
#[derive(Debug, Clone)]
pub struct SearchIterationInfo {
    pub depth: u32,
    pub score: i32,
    pub best_move: Move,
    pub nodes: u64,
    pub time_ms: u64,
}

/// Callback type for iteration info.
pub type SearchInfoCallback = Arc<dyn Fn(&SearchIterationInfo) + Send + Sync>;

/// Configuration for a search operation.
#[derive(Clone)]
pub struct SearchConfig<'a> {
    pub profile: DifficultyProfile,
    pub token: CancelToken,
    pub book: &'a OpeningBook,
    /// Optional callback for iteration info
    pub info_callback: Option<SearchInfoCallback>,
}

impl<'a> SearchConfig<'a> {
    /// Uncancellable search with the built-in book.
    #[must_use]
    pub fn new(profile: DifficultyProfile) -> Self {
        SearchConfig {
            profile,
            token: CancelToken::never(),
            book: OpeningBook::standard(),
            info_callback: None,
        }
    }

    #[must_use]
    pub fn with_token(mut self, token: CancelToken) -> Self {
        self.token = token;
        self
    }

    #[must_use]
    pub fn with_book(mut self, book: &'a OpeningBook) -> Self {
        self.book = book;
        self
    }

    /// Attach a callback for iteration info reporting.
    #[must_use]
    pub fn with_info_callback(mut self, callback: SearchInfoCallback) -> Self {
        self.info_callback = Some(callback);
        self
    }
}

/// Choose a move for `side`.
///
/// Returns `None` when `side` has no legal move, when the opponent of
/// `side` is already in check (`side` would be capturing a king), or when
/// `token` was cancelled before the search finished.
pub fn request_move(
    position: &mut Position,
    side: Color,
    profile: &DifficultyProfile,
    token: &CancelToken,
    state: &mut SearchState,
) -> Option<Move> {
    let config = SearchConfig::new(profile.clone()).with_token(token.clone());
    request_move_with(position, side, state, &config, &mut rand::thread_rng())
}

/// [`request_move`] with a full configuration and a caller-supplied RNG
/// for the book and jitter choices.
pub fn request_move_with<R: Rng + ?Sized>(
    position: &mut Position,
    side: Color,
    state: &mut SearchState,
    config: &SearchConfig<'_>,
    rng: &mut R,
) -> Option<Move> {
    if position.is_in_check(side.opponent()) {
        debug!("refusing to search for {side}: {} is already in check", side.opponent());
        return None;
    }
    let legal = position.legal_moves(side);
    if legal.is_empty() || config.token.is_cancelled() {
        return None;
    }

    let profile = &config.profile;
    if profile.use_book {
        if let Some(mv) = config.book.choose_with_rng(position, side, rng) {
            info!("{side} plays book move {mv}");
            return Some(mv);
        }
    }

    state.tables.tt.enforce_ceiling();

    let previous_side = position.side_to_move();
    position.set_side_to_move(side);
    let (best_move, best_score, nodes, depth) = {
        let mut ctx = SearchContext::new(
            position,
            &mut state.tables,
            &config.token,
            profile.time_limit_ms,
            profile.q_depth as i32,
        );
        let (best_move, best_score, depth) =
            ctx.iterative_deepening(&legal, profile, config.info_callback.as_ref());
        (best_move, best_score, ctx.nodes(), depth)
    };
    position.set_side_to_move(previous_side);

    state.stats = SearchStats {
        nodes,
        depth,
        score: best_score,
    };

    if config.token.is_cancelled() {
        debug!("search for {side} cancelled after {nodes} nodes");
        return None;
    }

    let chosen = if profile.jitter > 0 {
        pick_near_best(position, side, &legal, best_score, profile.jitter, rng).unwrap_or(best_move)
    } else {
        best_move
    };
    info!("{side} plays {chosen} (depth {depth}, score {best_score:?}, {nodes} nodes)");
    Some(chosen)
}

/// Uniform choice among root moves whose one-ply evaluation lies within
/// `jitter` of `best_score`; every move qualifies when no iteration finished.
fn pick_near_best<R: Rng + ?Sized>(
    position: &mut Position,
    side: Color,
    legal: &MoveList,
    best_score: Option<i32>,
    jitter: i32,
    rng: &mut R,
) -> Option<Move> {
    let candidates: Vec<Move> = legal
        .iter()
        .copied()
        .filter(|&mv| {
            let Some(best) = best_score else {
                return true;
            };
            let info = position.make_move(mv);
            let score = position.evaluate();
            position.unmake_move(mv, info);
            match side {
                Color::Black => score >= best - jitter,
                Color::White => score <= best + jitter,
            }
        })
        .collect();
    candidates.choose(rng).copied()
}
