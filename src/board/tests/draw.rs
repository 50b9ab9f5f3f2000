//! Game status tests: checkmate, stalemate and insufficient material.

use super::position_from_rows;
use crate::board::{Color, GameStatus, Position};

#[test]
fn test_start_is_ongoing() {
    let mut position = Position::new();
    assert_eq!(position.status(), GameStatus::Ongoing);
    assert!(!position.status().is_over());
}

#[test]
fn test_fools_mate() {
    let mut position = Position::new();
    for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        let m = position.parse_move(mv).unwrap();
        position.apply_move(m);
    }
    assert_eq!(
        position.status(),
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
    assert!(position.status().is_over());
}

#[test]
fn test_stalemate() {
    let mut position = position_from_rows("7k/5Q2/6K1/8/8/8/8/8", Color::Black, "-");
    assert_eq!(position.status(), GameStatus::Stalemate);
    assert!(position.legal_moves(Color::Black).is_empty());
}

#[test]
fn test_check_is_not_over() {
    let mut position = position_from_rows("4k3/8/8/8/8/8/8/4RK2", Color::Black, "-");
    assert_eq!(position.status(), GameStatus::Check);
    assert!(!position.status().is_over());
}

#[test]
fn test_bare_kings_insufficient() {
    let mut position = position_from_rows("4k3/8/8/8/8/8/8/4K3", Color::White, "-");
    assert!(position.is_insufficient_material());
    assert_eq!(position.status(), GameStatus::InsufficientMaterial);
}

#[test]
fn test_single_minor_insufficient() {
    let knight = position_from_rows("4k3/8/8/8/8/8/8/3NK3", Color::White, "-");
    assert!(knight.is_insufficient_material());
    let bishop = position_from_rows("4k3/8/8/3b4/8/8/8/4K3", Color::White, "-");
    assert!(bishop.is_insufficient_material());
}

#[test]
fn test_sufficient_material() {
    let pawn = position_from_rows("4k3/8/8/8/8/8/4P3/4K3", Color::White, "-");
    assert!(!pawn.is_insufficient_material());
    let rook = position_from_rows("4k3/8/8/8/8/8/8/R3K3", Color::White, "-");
    assert!(!rook.is_insufficient_material());
    let two_minors = position_from_rows("4k3/8/8/8/8/8/8/2BNK3", Color::White, "-");
    assert!(!two_minors.is_insufficient_material());
}
