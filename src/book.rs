//! Opening book keyed by the space-joined move history.
//!
//! The built-in book plays Black. A lookup first tries the whole history,
//! then its prefixes from seven moves down to one, and only ever returns a
//! move that is legal in the current position.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Color, Move, Position};

/// Histories longer than this are out of book.
pub const MAX_BOOK_HISTORY: usize = 14;
/// Longest prefix tried when the full history is not a book line.
const MAX_PREFIX: usize = 7;

static STANDARD_BOOK: Lazy<OpeningBook> = Lazy::new(|| {
    OpeningBook::new(Color::Black)
        .with_line("e2e4", &["e7e5", "c7c5", "e7e6"])
        .with_line("d2d4", &["d7d5", "g8f6"])
        .with_line("c2c4", &["e7e5", "g8f6"])
        .with_line("g1f3", &["d7d5", "g8f6"])
        .with_line("e2e4 e7e5 g1f3", &["b8c6", "g8f6"])
        .with_line("e2e4 c7c5 g1f3", &["d7d6", "b8c6"])
        .with_line("d2d4 d7d5 c2c4", &["e7e6", "c7c6"])
        .with_line("e2e4 e7e5 g1f3 b8c6 f1c4", &["g8f6", "f8c5"])
        .with_line("e2e4 e7e5 g1f3 b8c6 f1b5", &["a7a6", "g8f6"])
});

#[derive(Clone, Debug)]
pub struct OpeningBook {
    side: Color,
    entries: HashMap<String, Vec<String>>,
}

impl OpeningBook {
    /// Empty book whose replies are played by `side`.
    #[must_use]
    pub fn new(side: Color) -> Self {
        OpeningBook {
            side,
            entries: HashMap::new(),
        }
    }

    /// The built-in Black repertoire.
    #[must_use]
    pub fn standard() -> &'static OpeningBook {
        &STANDARD_BOOK
    }

    /// Add replies for a history such as `"e2e4 e7e5 g1f3"`.
    #[must_use]
    pub fn with_line(mut self, history: &str, replies: &[&str]) -> Self {
        self.entries.insert(
            history.to_string(),
            replies.iter().map(|r| (*r).to_string()).collect(),
        );
        self
    }

    #[must_use]
    pub fn side(&self) -> Color {
        self.side
    }

    /// Raw replies for `history`: the exact line first, then the longest
    /// matching prefix.
    #[must_use]
    pub fn replies(&self, history: &[String]) -> Option<&[String]> {
        if history.len() > MAX_BOOK_HISTORY {
            return None;
        }
        if let Some(replies) = self.entries.get(&history.join(" ")) {
            return Some(replies.as_slice());
        }
        (1..=history.len().min(MAX_PREFIX))
            .rev()
            .find_map(|len| self.entries.get(&history[..len].join(" ")))
            .map(Vec::as_slice)
    }

    /// Book replies that are legal for `side` right now.
    pub fn candidates(&self, position: &mut Position, side: Color) -> Vec<Move> {
        if side != self.side {
            return Vec::new();
        }
        let Some(replies) = self.replies(&position.history_tokens()) else {
            return Vec::new();
        };
        let legal = position.legal_moves(side);
        replies
            .iter()
            .filter_map(|reply| legal.iter().find(|m| m.to_string() == *reply).copied())
            .collect()
    }

    pub fn choose(&self, position: &mut Position, side: Color) -> Option<Move> {
        self.choose_with_rng(position, side, &mut rand::thread_rng())
    }

    /// Uniform pick among [`OpeningBook::candidates`].
    pub fn choose_with_rng<R: Rng + ?Sized>(
        &self,
        position: &mut Position,
        side: Color,
        rng: &mut R,
    ) -> Option<Move> {
        self.candidates(position, side).choose(rng).copied()
    }
}
