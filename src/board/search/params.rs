//! Difficulty profiles.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::ProfileError;

/// Tuning knobs for one search request.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DifficultyProfile {
    /// Wall-clock budget for the whole iterative deepening run
    pub time_limit_ms: u64,
    pub base_depth: u32,
    pub max_depth: u32,
    /// Extra plies of captures and promotions past the horizon
    pub q_depth: u32,
    /// Centipawn margin for picking a random near-best move (0 = off)
    pub jitter: i32,
    pub use_book: bool,
    pub aspiration: bool,
}

impl DifficultyProfile {
    #[must_use]
    pub fn easy() -> Self {
        DifficultyProfile {
            time_limit_ms: 320,
            base_depth: 2,
            max_depth: 3,
            q_depth: 1,
            jitter: 70,
            use_book: false,
            aspiration: false,
        }
    }

    #[must_use]
    pub fn medium() -> Self {
        DifficultyProfile {
            time_limit_ms: 2600,
            base_depth: 5,
            max_depth: 7,
            q_depth: 3,
            jitter: 0,
            use_book: true,
            aspiration: true,
        }
    }

    #[must_use]
    pub fn hard() -> Self {
        DifficultyProfile {
            time_limit_ms: 6000,
            base_depth: 6,
            max_depth: 9,
            q_depth: 5,
            jitter: 0,
            use_book: true,
            aspiration: true,
        }
    }

    /// Depth ceiling for a root with `legal_moves` choices: narrow roots may
    /// go one ply deeper.
    #[must_use]
    pub fn depth_ceiling(&self, legal_moves: usize) -> u32 {
        if legal_moves <= super::constants::NARROW_ROOT_MOVES {
            self.max_depth
        } else {
            self.base_depth.max(self.max_depth.saturating_sub(1))
        }
    }
}

impl Default for DifficultyProfile {
    fn default() -> Self {
        Self::medium()
    }
}

/// Named difficulty presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn profile(self) -> DifficultyProfile {
        match self {
            Difficulty::Easy => DifficultyProfile::easy(),
            Difficulty::Medium => DifficultyProfile::medium(),
            Difficulty::Hard => DifficultyProfile::hard(),
        }
    }
}

impl From<Difficulty> for DifficultyProfile {
    fn from(level: Difficulty) -> Self {
        level.profile()
    }
}

impl FromStr for Difficulty {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ProfileError::UnknownLevel {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}
