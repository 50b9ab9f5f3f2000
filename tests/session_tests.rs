//! Game session tests: a human playing White against the engine.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use chess_opponent::board::{Color, DifficultyProfile, GameStatus, SearchIterationInfo};
use chess_opponent::session::{Outcome, SessionError};
use chess_opponent::GameSession;

fn fast_profile() -> DifficultyProfile {
    DifficultyProfile {
        time_limit_ms: 500,
        base_depth: 2,
        max_depth: 2,
        q_depth: 1,
        jitter: 0,
        use_book: true,
        aspiration: false,
    }
}

#[test]
fn engine_answers_on_worker_thread() {
    let mut session = GameSession::new(fast_profile());
    session.play_human_move("d2d4").unwrap();

    let pending = session.spawn_engine_search().expect("engine to move");
    let reply = session.complete_engine_search(pending).expect("engine reply");

    assert_eq!(session.position().history().len(), 2);
    assert_eq!(session.position().history()[1], reply);
    assert_eq!(session.position().side_to_move(), Color::White);
}

#[test]
fn progress_callback_sees_each_depth() {
    let profile = DifficultyProfile {
        use_book: false,
        ..fast_profile()
    };
    let mut session = GameSession::new(profile);
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    session.set_progress_callback(Arc::new(move |_: &SearchIterationInfo| {
        seen.fetch_add(1, Ordering::SeqCst);
    }));

    session.play_human_move("e2e4").unwrap();
    session.play_engine_move().expect("engine reply");

    assert!(calls.load(Ordering::SeqCst) >= 1);
    assert!(session.last_search_stats().depth >= 1);
}

#[test]
fn engine_does_not_move_on_human_turn() {
    let session = GameSession::new(fast_profile());
    assert!(session.spawn_engine_search().is_none());
}

#[test]
fn resignation_ends_the_game() {
    let mut session = GameSession::new(fast_profile());
    session.play_human_move("f2f3").unwrap();
    session.play_engine_move().expect("engine reply");
    session.resign(Color::White);

    assert_eq!(
        session.outcome(),
        Some(Outcome::Resigned {
            winner: Color::Black
        })
    );
    assert_eq!(session.outcome().and_then(Outcome::winner), Some(Color::Black));
    assert!(matches!(
        session.play_human_move("e2e4"),
        Err(SessionError::GameOver { .. })
    ));
    assert!(session.spawn_engine_search().is_none());
}

#[test]
fn new_game_resets_everything() {
    let mut session = GameSession::new(fast_profile()).with_time_control(60_000);
    session.play_human_move("e2e4").unwrap();
    session.play_engine_move().expect("engine reply");
    session.charge_clock(Color::White, 1_000);
    session.resign(Color::White);

    session.new_game();
    assert_eq!(session.outcome(), None);
    assert!(session.position().history().is_empty());
    assert_eq!(session.clock_ms(Color::White), Some(60_000));
    assert_eq!(session.clock_ms(Color::Black), Some(60_000));
    assert_eq!(session.status(), GameStatus::Ongoing);
    assert!(session.captured_by(Color::White).is_empty());
}

#[test]
fn engine_thinking_time_is_charged() {
    let mut session = GameSession::new(fast_profile()).with_time_control(60_000);
    session.play_human_move("e2e4").unwrap();
    session.play_engine_move().expect("engine reply");
    assert!(session.clock_ms(Color::Black).unwrap() <= 60_000);
    assert_eq!(session.clock_ms(Color::White), Some(60_000));
}

#[test]
fn illegal_input_is_reported() {
    let mut session = GameSession::new(fast_profile());
    let err = session.play_human_move("e9e4").unwrap_err();
    assert!(matches!(err, SessionError::Move(_)));
    assert!(!err.to_string().is_empty());
}
