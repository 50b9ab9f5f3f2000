//! Game session: one human against the engine.
//!
//! The session owns the live position and is the only place it is
//! mutated. Engine searches run either inline or on a worker thread; a
//! worker works on its own copy of the position and hands back a move that
//! is applied only if the turn it was started for is still current.

use std::fmt;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use log::{debug, info};
use parking_lot::Mutex;

use crate::board::{
    request_move_with, win_probability, Color, DifficultyProfile, GameStatus, Move, MoveParseError,
    Piece, Position, SearchConfig, SearchInfoCallback, SearchState,
};
use crate::book::OpeningBook;
use crate::sync::{CancelToken, TurnCounter};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
    Resigned { winner: Color },
    Timeout { winner: Color },
}

impl Outcome {
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner }
            | Outcome::Resigned { winner }
            | Outcome::Timeout { winner } => Some(winner),
            Outcome::Stalemate | Outcome::InsufficientMaterial => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "{winner} wins by checkmate"),
            Outcome::Stalemate => write!(f, "Draw by stalemate"),
            Outcome::InsufficientMaterial => write!(f, "Draw by insufficient material"),
            Outcome::Resigned { winner } => write!(f, "{winner} wins by resignation"),
            Outcome::Timeout { winner } => write!(f, "{winner} wins on time"),
        }
    }
}

/// Error type for rejected session actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The game already has an outcome
    GameOver { outcome: Outcome },
    /// It is the engine's turn
    NotYourTurn,
    /// The move text did not name a legal move
    Move(MoveParseError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::GameOver { outcome } => write!(f, "Game is over: {outcome}"),
            SessionError::NotYourTurn => write!(f, "Waiting for the engine to move"),
            SessionError::Move(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Move(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MoveParseError> for SessionError {
    fn from(err: MoveParseError) -> Self {
        SessionError::Move(err)
    }
}

/// Engine search running on a worker thread.
pub struct PendingSearch {
    handle: JoinHandle<Option<Move>>,
    token: CancelToken,
    started: Instant,
}

impl PendingSearch {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// A game between a human and the engine.
pub struct GameSession {
    position: Position,
    profile: DifficultyProfile,
    engine_side: Color,
    state: Arc<Mutex<SearchState>>,
    turns: TurnCounter,
    time_control_ms: Option<u64>,
    clocks_ms: [u64; 2],
    captured: [Vec<Piece>; 2],
    outcome: Option<Outcome>,
    progress: Option<SearchInfoCallback>,
}

impl GameSession {
    /// Untimed game with the engine playing Black.
    #[must_use]
    pub fn new(profile: DifficultyProfile) -> Self {
        GameSession {
            position: Position::new(),
            profile,
            engine_side: Color::Black,
            state: Arc::new(Mutex::new(SearchState::new())),
            turns: TurnCounter::new(),
            time_control_ms: None,
            clocks_ms: [0; 2],
            captured: [Vec::new(), Vec::new()],
            outcome: None,
            progress: None,
        }
    }

    /// Give each side `ms` milliseconds for the whole game.
    #[must_use]
    pub fn with_time_control(mut self, ms: u64) -> Self {
        self.time_control_ms = Some(ms);
        self.clocks_ms = [ms; 2];
        self
    }

    /// Report every completed search depth to `callback`.
    pub fn set_progress_callback(&mut self, callback: SearchInfoCallback) {
        self.progress = Some(callback);
    }

    /// Reset the board, clocks and search tables. Any running search is
    /// abandoned.
    pub fn new_game(&mut self) {
        let turn = self.turns.advance();
        self.position = Position::new();
        self.state.lock().new_game();
        self.clocks_ms = [self.time_control_ms.unwrap_or(0); 2];
        self.captured = [Vec::new(), Vec::new()];
        self.outcome = None;
        info!("new game (turn {turn}), engine plays {}", self.engine_side);
    }

    /// `side` gives up. Any running search is abandoned.
    pub fn resign(&mut self, side: Color) {
        self.turns.advance();
        if self.outcome.is_none() {
            let outcome = Outcome::Resigned {
                winner: side.opponent(),
            };
            info!("{side} resigns: {outcome}");
            self.outcome = Some(outcome);
        }
    }

    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[must_use]
    pub fn profile(&self) -> &DifficultyProfile {
        &self.profile
    }

    /// Takes effect from the next engine search.
    pub fn set_profile(&mut self, profile: DifficultyProfile) {
        self.profile = profile;
    }

    #[must_use]
    pub fn engine_side(&self) -> Color {
        self.engine_side
    }

    #[must_use]
    pub fn human_side(&self) -> Color {
        self.engine_side.opponent()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[must_use]
    pub fn status(&mut self) -> GameStatus {
        self.position.status()
    }

    /// Pieces `color` has taken from the opponent, in capture order.
    #[must_use]
    pub fn captured_by(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    /// Remaining time for `color`; `None` in untimed games.
    #[must_use]
    pub fn clock_ms(&self, color: Color) -> Option<u64> {
        self.time_control_ms.map(|_| self.clocks_ms[color.index()])
    }

    /// Chance (0-100) that Black wins, from the static evaluation.
    #[must_use]
    pub fn black_win_probability(&self) -> u8 {
        win_probability(self.position.evaluate())
    }

    /// Statistics of the last completed engine search.
    #[must_use]
    pub fn last_search_stats(&self) -> crate::board::SearchStats {
        self.state.lock().stats
    }

    /// Subtract `elapsed_ms` from `color`'s clock; a clock that reaches
    /// zero ends the game. No effect in untimed games.
    pub fn charge_clock(&mut self, color: Color, elapsed_ms: u64) {
        if self.time_control_ms.is_none() || self.outcome.is_some() {
            return;
        }
        let clock = &mut self.clocks_ms[color.index()];
        *clock = clock.saturating_sub(elapsed_ms);
        if *clock == 0 {
            let outcome = Outcome::Timeout {
                winner: color.opponent(),
            };
            info!("{color} flagged: {outcome}");
            self.turns.advance();
            self.outcome = Some(outcome);
        }
    }

    /// Validate and play the human's move given in coordinate notation.
    pub fn play_human_move(&mut self, notation: &str) -> Result<Move, SessionError> {
        if let Some(outcome) = self.outcome {
            return Err(SessionError::GameOver { outcome });
        }
        if self.position.side_to_move() != self.human_side() {
            return Err(SessionError::NotYourTurn);
        }
        let mv = self.position.parse_move(notation.trim())?;
        self.commit(mv);
        Ok(mv)
    }

    /// Search and play the engine's move on the calling thread.
    ///
    /// Returns `None` if the game is over or the engine has no move.
    pub fn play_engine_move(&mut self) -> Option<Move> {
        if !self.engine_to_move() {
            return None;
        }
        let started = Instant::now();
        let token = self.turns.token();
        let config = self.search_config(token);
        let mv = {
            let mut state = self.state.lock();
            request_move_with(
                &mut self.position,
                self.engine_side,
                &mut state,
                &config,
                &mut rand::thread_rng(),
            )
        }?;
        self.finish_engine_move(mv, started)
    }

    /// Start the engine's search on a worker thread.
    ///
    /// Returns `None` if it is not the engine's turn.
    pub fn spawn_engine_search(&self) -> Option<PendingSearch> {
        if !self.engine_to_move() {
            return None;
        }
        let token = self.turns.token();
        let config = self.search_config(token.clone());
        let mut position = self.position.clone();
        let state = Arc::clone(&self.state);
        let side = self.engine_side;

        let handle = thread::spawn(move || {
            let mut state = state.lock();
            request_move_with(&mut position, side, &mut state, &config, &mut rand::thread_rng())
        });
        Some(PendingSearch {
            handle,
            token,
            started: Instant::now(),
        })
    }

    /// Wait for a worker search and play its move, unless the game moved
    /// on (a move, new game, resignation or flag) since it started.
    pub fn complete_engine_search(&mut self, pending: PendingSearch) -> Option<Move> {
        let result = match pending.handle.join() {
            Ok(result) => result,
            Err(payload) => std::panic::resume_unwind(payload),
        };
        if pending.token.is_cancelled() {
            debug!("discarding stale engine search result {result:?}");
            return None;
        }
        self.finish_engine_move(result?, pending.started)
    }

    fn engine_to_move(&self) -> bool {
        self.outcome.is_none() && self.position.side_to_move() == self.engine_side
    }

    fn search_config(&self, token: CancelToken) -> SearchConfig<'static> {
        let config = SearchConfig::new(self.profile.clone())
            .with_token(token)
            .with_book(OpeningBook::standard());
        match &self.progress {
            Some(callback) => config.with_info_callback(Arc::clone(callback)),
            None => config,
        }
    }

    fn finish_engine_move(&mut self, mv: Move, started: Instant) -> Option<Move> {
        if !self.engine_to_move() || !self.position.legal_moves(self.engine_side).contains(&mv) {
            debug!("engine move {mv} no longer fits the position, dropping it");
            return None;
        }
        self.charge_clock(self.engine_side, started.elapsed().as_millis() as u64);
        if self.outcome.is_some() {
            return None;
        }
        self.commit(mv);
        Some(mv)
    }

    /// Play `mv` and start a new turn, so searches begun before it go stale.
    fn commit(&mut self, mv: Move) {
        self.turns.advance();
        let mover = self.position.side_to_move();
        if let Some(piece) = self.position.apply_move(mv) {
            self.captured[mover.index()].push(piece);
        }
        self.outcome = match self.position.status() {
            GameStatus::Checkmate { winner } => Some(Outcome::Checkmate { winner }),
            GameStatus::Stalemate => Some(Outcome::Stalemate),
            GameStatus::InsufficientMaterial => Some(Outcome::InsufficientMaterial),
            GameStatus::Ongoing | GameStatus::Check => None,
        };
        if let Some(outcome) = self.outcome {
            info!("game over after {mv}: {outcome}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    fn quick_profile() -> DifficultyProfile {
        DifficultyProfile {
            time_limit_ms: 200,
            base_depth: 1,
            max_depth: 2,
            q_depth: 1,
            jitter: 0,
            use_book: false,
            aspiration: false,
        }
    }

    #[test]
    fn test_human_move_rejected_when_illegal() {
        let mut session = GameSession::new(quick_profile());
        let err = session.play_human_move("e2e5").unwrap_err();
        assert!(matches!(err, SessionError::Move(MoveParseError::IllegalMove { .. })));
        assert!(session.position().history().is_empty());
    }

    #[test]
    fn test_human_cannot_move_twice() {
        let mut session = GameSession::new(quick_profile());
        session.play_human_move("e2e4").unwrap();
        assert_eq!(session.play_human_move("d2d4"), Err(SessionError::NotYourTurn));
    }

    #[test]
    fn test_engine_replies_with_black_move() {
        let mut session = GameSession::new(quick_profile());
        session.play_human_move("e2e4").unwrap();
        let reply = session.play_engine_move().unwrap();
        assert_eq!(session.position().history().len(), 2);
        assert_eq!(session.position().history()[1], reply);
        assert_eq!(session.position().side_to_move(), Color::White);
    }

    #[test]
    fn test_resign_records_opponent_win() {
        let mut session = GameSession::new(quick_profile());
        session.resign(Color::White);
        assert_eq!(
            session.outcome(),
            Some(Outcome::Resigned {
                winner: Color::Black
            })
        );
        assert!(matches!(
            session.play_human_move("e2e4"),
            Err(SessionError::GameOver { .. })
        ));
    }

    #[test]
    fn test_clock_flag_ends_game() {
        let mut session = GameSession::new(quick_profile()).with_time_control(1_000);
        session.charge_clock(Color::White, 400);
        assert_eq!(session.clock_ms(Color::White), Some(600));
        session.charge_clock(Color::White, 700);
        assert_eq!(session.clock_ms(Color::White), Some(0));
        assert_eq!(
            session.outcome(),
            Some(Outcome::Timeout {
                winner: Color::Black
            })
        );
    }

    #[test]
    fn test_untimed_clock_is_none() {
        let session = GameSession::new(quick_profile());
        assert_eq!(session.clock_ms(Color::Black), None);
    }

    #[test]
    fn test_new_game_discards_pending_search() {
        let mut session = GameSession::new(quick_profile());
        session.play_human_move("e2e4").unwrap();
        let pending = session.spawn_engine_search().unwrap();
        session.new_game();
        assert_eq!(session.complete_engine_search(pending), None);
        assert!(session.position().history().is_empty());
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn test_second_search_for_same_turn_is_dropped() {
        let mut session = GameSession::new(quick_profile());
        session.play_human_move("e2e4").unwrap();
        let first = session.spawn_engine_search().unwrap();
        let second = session.spawn_engine_search().unwrap();

        let reply = session.complete_engine_search(first).unwrap();
        assert_eq!(session.complete_engine_search(second), None);
        assert_eq!(session.position().history().len(), 2);
        assert_eq!(session.position().history()[1], reply);
        assert_eq!(session.position().side_to_move(), Color::White);
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn test_inline_move_invalidates_worker_search() {
        let mut session = GameSession::new(quick_profile());
        session.play_human_move("e2e4").unwrap();
        let pending = session.spawn_engine_search().unwrap();
        session.play_engine_move().unwrap();
        assert_eq!(session.complete_engine_search(pending), None);
        assert_eq!(session.position().history().len(), 2);
    }

    #[test]
    fn test_engine_move_must_be_legal_now() {
        let mut session = GameSession::new(quick_profile());
        session.play_human_move("e2e4").unwrap();
        let started = Instant::now();
        // A White move offered on Black's turn.
        let wrong_side = Move::new(Square(1, 3), Square(3, 3), Piece::Pawn, None);
        assert_eq!(session.finish_engine_move(wrong_side, started), None);
        let legal = session.position.parse_move("e7e5").unwrap();
        assert_eq!(session.finish_engine_move(legal, started), Some(legal));
        assert_eq!(session.finish_engine_move(legal, started), None);
        assert_eq!(session.position().history().len(), 2);
    }

    #[test]
    fn test_captures_are_recorded() {
        let mut session = GameSession::new(quick_profile());
        session.play_human_move("e2e4").unwrap();
        // Feed Black's reply by hand through the shared path.
        let mv = session.position.parse_move("d7d5").unwrap();
        session.commit(mv);
        session.play_human_move("e4d5").unwrap();
        assert_eq!(session.captured_by(Color::White), &[Piece::Pawn]);
        assert!(session.captured_by(Color::Black).is_empty());
    }
}
