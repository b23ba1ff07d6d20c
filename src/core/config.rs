//! Game configuration types.
//!
//! A game is configured at startup by providing:
//! - Board dimensions, directly or through a `Difficulty` preset
//! - An optional RNG seed (unseeded games draw one from OS entropy)
//! - `ScoringRules`: points per match and the end-of-game bonus caps

use serde::{Deserialize, Serialize};

use super::error::{MemoryError, Result};

/// Board size presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// 4x4, the fallback board used when no preset is chosen.
    #[default]
    Classic,
    /// 6x6.
    Easy,
    /// 8x8.
    Medium,
    /// 10x10.
    Hard,
}

impl Difficulty {
    /// Board dimensions as `(rows, cols)`.
    #[must_use]
    pub const fn dimensions(self) -> (usize, usize) {
        match self {
            Difficulty::Classic => (4, 4),
            Difficulty::Easy => (6, 6),
            Difficulty::Medium => (8, 8),
            Difficulty::Hard => (10, 10),
        }
    }

    /// Theme name handed to an `AssetResolver`.
    #[must_use]
    pub const fn theme(self) -> &'static str {
        match self {
            Difficulty::Classic => "classic",
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (rows, cols) = self.dimensions();
        write!(f, "{} ({}x{})", self.theme(), rows, cols)
    }
}

/// Scoring constants.
///
/// On the winning match the game adds
/// `max(0, time_bonus_cap - elapsed_secs) + max(0, moves_bonus_cap - moves * move_penalty)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Points for each matched pair.
    pub match_points: u32,
    /// Time bonus when the game is won instantly.
    pub time_bonus_cap: u32,
    /// Moves bonus before any move penalty.
    pub moves_bonus_cap: u32,
    /// Bonus lost per move.
    pub move_penalty: u32,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            match_points: 100,
            time_bonus_cap: 1000,
            moves_bonus_cap: 500,
            move_penalty: 10,
        }
    }
}

/// Breakdown of the one-time end-of-game bonus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndBonus {
    pub time: u32,
    pub moves: u32,
}

impl EndBonus {
    #[must_use]
    pub fn total(self) -> u32 {
        self.time.saturating_add(self.moves)
    }
}

impl ScoringRules {
    /// Compute the end-of-game bonus. Both parts clamp at zero.
    #[must_use]
    pub fn end_bonus(&self, elapsed_secs: u64, moves: u32) -> EndBonus {
        let elapsed = u32::try_from(elapsed_secs).unwrap_or(u32::MAX);
        EndBonus {
            time: self.time_bonus_cap.saturating_sub(elapsed),
            moves: self
                .moves_bonus_cap
                .saturating_sub(moves.saturating_mul(self.move_penalty)),
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid rows.
    pub rows: usize,

    /// Grid columns.
    pub cols: usize,

    /// Deal seed. `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Scoring constants.
    #[serde(default)]
    pub scoring: ScoringRules,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::from_difficulty(Difficulty::default())
    }
}

impl GameConfig {
    /// Create a configuration for a `rows` x `cols` board.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            seed: None,
            scoring: ScoringRules::default(),
        }
    }

    /// Create a configuration from a size preset.
    #[must_use]
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        let (rows, cols) = difficulty.dimensions();
        Self::new(rows, cols)
    }

    /// Fix the deal seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the scoring constants.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringRules) -> Self {
        self.scoring = scoring;
        self
    }

    /// Total number of cards.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Check the dimensions describe a non-empty board of whole pairs.
    pub fn validate(&self) -> Result<()> {
        validate_dimensions(self.rows, self.cols).map(|_| ())
    }
}

/// Returns the number of pairs for a `rows` x `cols` board.
pub(crate) fn validate_dimensions(rows: usize, cols: usize) -> Result<usize> {
    match rows.checked_mul(cols) {
        Some(len) if len > 0 && len % 2 == 0 => Ok(len / 2),
        _ => Err(MemoryError::InvalidDimension { rows, cols }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_dimensions() {
        assert_eq!(Difficulty::Classic.dimensions(), (4, 4));
        assert_eq!(Difficulty::Easy.dimensions(), (6, 6));
        assert_eq!(Difficulty::Medium.dimensions(), (8, 8));
        assert_eq!(Difficulty::Hard.dimensions(), (10, 10));
        assert_eq!(format!("{}", Difficulty::Medium), "medium (8x8)");
    }

    #[test]
    fn test_config_builder() {
        let config = GameConfig::from_difficulty(Difficulty::Easy).with_seed(9);

        assert_eq!(config.rows, 6);
        assert_eq!(config.cols, 6);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.card_count(), 36);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_odd_and_empty() {
        assert_eq!(
            GameConfig::new(3, 3).validate(),
            Err(MemoryError::InvalidDimension { rows: 3, cols: 3 })
        );
        assert!(GameConfig::new(0, 4).validate().is_err());
        assert!(GameConfig::new(usize::MAX, 2).validate().is_err());
        assert_eq!(validate_dimensions(2, 3), Ok(3));
    }

    #[test]
    fn test_end_bonus_clamps() {
        let rules = ScoringRules::default();

        assert_eq!(rules.end_bonus(0, 0), EndBonus { time: 1000, moves: 500 });
        assert_eq!(rules.end_bonus(30, 8), EndBonus { time: 970, moves: 420 });
        assert_eq!(rules.end_bonus(5000, 80).total(), 0);
        assert_eq!(rules.end_bonus(u64::MAX, u32::MAX).total(), 0);
    }

    #[test]
    fn test_end_bonus_total_saturates() {
        let bonus = EndBonus { time: u32::MAX, moves: 5 };
        assert_eq!(bonus.total(), u32::MAX);

        let rules = ScoringRules {
            time_bonus_cap: u32::MAX,
            moves_bonus_cap: u32::MAX,
            ..ScoringRules::default()
        };
        assert_eq!(rules.end_bonus(0, 0).total(), u32::MAX);
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"rows":2,"cols":4}"#).unwrap();

        assert_eq!(config.seed, None);
        assert_eq!(config.scoring, ScoringRules::default());
    }
}
