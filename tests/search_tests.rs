//! Search tests to verify the engine finds correct moves through the public API.

use chess_opponent::board::{
    request_move, request_move_with, Color, DifficultyProfile, Piece, Position, PositionBuilder,
    SearchConfig, SearchState, Square,
};
use chess_opponent::sync::{CancelToken, TurnCounter};
use chess_opponent::OpeningBook;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sq(name: &str) -> Square {
    name.parse().expect("square name")
}

/// Fixed-depth profile without book or randomness.
fn test_profile(max_depth: u32) -> DifficultyProfile {
    DifficultyProfile {
        time_limit_ms: 30_000,
        base_depth: max_depth,
        max_depth,
        q_depth: 2,
        jitter: 0,
        use_book: false,
        aspiration: true,
    }
}

fn build(pieces: &[(&str, Color, Piece)], side: Color) -> Position {
    let mut builder = PositionBuilder::new().side_to_move(side);
    for &(name, color, piece) in pieces {
        builder = builder.piece(sq(name), color, piece);
    }
    builder.build().expect("valid test position")
}

fn best_move_text(position: &mut Position, side: Color, depth: u32) -> Option<String> {
    let mut state = SearchState::new();
    request_move(position, side, &test_profile(depth), &CancelToken::never(), &mut state)
        .map(|m| m.to_string())
}

/// Test that the engine finds a back-rank mate in one
#[test]
fn finds_mate_in_one_back_rank() {
    let mut position = build(
        &[
            ("g8", Color::Black, Piece::King),
            ("f7", Color::Black, Piece::Pawn),
            ("g7", Color::Black, Piece::Pawn),
            ("h7", Color::Black, Piece::Pawn),
            ("e1", Color::White, Piece::Queen),
            ("h1", Color::White, Piece::King),
        ],
        Color::White,
    );
    assert_eq!(best_move_text(&mut position, Color::White, 3).as_deref(), Some("e1e8"));
}

/// Test that Black, the maximizing side, mates as well
#[test]
fn black_finds_mate_in_one() {
    let mut position = build(
        &[
            ("g1", Color::White, Piece::King),
            ("f2", Color::White, Piece::Pawn),
            ("g2", Color::White, Piece::Pawn),
            ("h2", Color::White, Piece::Pawn),
            ("d8", Color::Black, Piece::Rook),
            ("g8", Color::Black, Piece::King),
        ],
        Color::Black,
    );
    assert_eq!(best_move_text(&mut position, Color::Black, 3).as_deref(), Some("d8d1"));
}

/// Test that the engine captures an undefended queen
#[test]
fn captures_free_queen() {
    let mut position = build(
        &[
            ("e8", Color::Black, Piece::King),
            ("d5", Color::Black, Piece::Queen),
            ("d2", Color::White, Piece::Rook),
            ("e1", Color::White, Piece::King),
        ],
        Color::White,
    );
    assert_eq!(best_move_text(&mut position, Color::White, 3).as_deref(), Some("d2d5"));
}

/// Test that the only legal move is returned
#[test]
fn single_legal_move() {
    let mut position = build(
        &[
            ("a8", Color::Black, Piece::King),
            ("b2", Color::Black, Piece::Rook),
            ("a1", Color::White, Piece::King),
        ],
        Color::White,
    );
    assert_eq!(position.legal_moves(Color::White).len(), 1);
    assert_eq!(best_move_text(&mut position, Color::White, 4).as_deref(), Some("a1b2"));
}

/// Test that a mated side gets no move
#[test]
fn no_move_in_checkmate() {
    let mut position = Position::new();
    for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        let m = position.parse_move(mv).unwrap();
        position.apply_move(m);
    }
    assert_eq!(best_move_text(&mut position, Color::White, 3), None);
}

/// Test that the side not to move gets no move while it is giving check
#[test]
fn no_move_while_opponent_in_check() {
    let mut position = Position::new();
    for mv in ["e2e4", "f7f6", "d2d4", "g7g5", "d1h5"] {
        let m = position.parse_move(mv).unwrap();
        position.apply_move(m);
    }
    let key = position.key();
    // Qxe8 is generated for White, but Black is the side to move.
    assert_eq!(position.legal_moves(Color::White).len(), 1);

    let mut state = SearchState::new();
    let reply = request_move(
        &mut position,
        Color::White,
        &DifficultyProfile::easy(),
        &CancelToken::never(),
        &mut state,
    );
    assert!(reply.is_none());
    assert_eq!(position.key(), key);
    assert!(position.legal_moves(Color::Black).is_empty());
}

/// Test that a cancelled token yields no move
#[test]
fn cancelled_search_returns_none() {
    let counter = TurnCounter::new();
    let token = counter.token();
    counter.advance();

    let mut position = Position::new();
    let mut state = SearchState::new();
    assert!(request_move(&mut position, Color::White, &test_profile(3), &token, &mut state).is_none());
}

/// Test that searching leaves the live position as it found it
#[test]
fn search_restores_position() {
    let mut position = Position::new();
    let key = position.key();
    let mut state = SearchState::new();

    // Search for Black although White is to move.
    let mv = request_move(
        &mut position,
        Color::Black,
        &test_profile(3),
        &CancelToken::never(),
        &mut state,
    )
    .expect("black has moves");
    assert!(mv.from().rank() >= 6);
    assert_eq!(position.key(), key);
    assert_eq!(position.side_to_move(), Color::White);
    assert!(state.stats.depth >= 1);
    assert!(state.stats.nodes > 0);
}

/// Test that book replies are used when enabled
#[test]
fn book_reply_after_e4() {
    let mut position = Position::new();
    let m = position.parse_move("e2e4").unwrap();
    position.apply_move(m);

    let profile = DifficultyProfile {
        use_book: true,
        ..test_profile(3)
    };
    let config = SearchConfig::new(profile);
    let mut state = SearchState::new();
    let mut rng = StdRng::seed_from_u64(11);
    let reply = request_move_with(&mut position, Color::Black, &mut state, &config, &mut rng)
        .expect("book reply")
        .to_string();

    let replies = OpeningBook::standard()
        .replies(&position.history_tokens())
        .expect("e2e4 is in book");
    assert!(replies.contains(&reply), "{reply} not among {replies:?}");
    // Book moves skip the search entirely.
    assert_eq!(state.stats.nodes, 0);
}

/// Test that a custom book overrides the built-in one
#[test]
fn custom_book_is_consulted() {
    let book = OpeningBook::new(Color::Black).with_line("d2d4", &["b8c6"]);
    let mut position = Position::new();
    let m = position.parse_move("d2d4").unwrap();
    position.apply_move(m);

    let profile = DifficultyProfile {
        use_book: true,
        ..test_profile(2)
    };
    let config = SearchConfig::new(profile).with_book(&book);
    let mut state = SearchState::new();
    let mut rng = StdRng::seed_from_u64(3);
    let reply = request_move_with(&mut position, Color::Black, &mut state, &config, &mut rng);
    assert_eq!(reply.map(|m| m.to_string()).as_deref(), Some("b8c6"));
}

/// Test that jitter still picks a legal move
#[test]
fn jitter_picks_legal_move() {
    let mut position = Position::new();
    let profile = DifficultyProfile {
        jitter: 200,
        ..test_profile(2)
    };
    let config = SearchConfig::new(profile);
    let mut state = SearchState::new();
    let mut rng = StdRng::seed_from_u64(5);
    let mv = request_move_with(&mut position, Color::White, &mut state, &config, &mut rng)
        .expect("white has moves");
    assert!(position.legal_moves(Color::White).contains(&mv));
}
