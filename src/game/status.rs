//! Plain data the game hands to a presentation layer.

use serde::{Deserialize, Serialize};

/// Outcome of resolving two pending cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    /// The identifiers were equal; both cards are now matched.
    Matched,
    /// The identifiers differ; the cards stay up until `flip_back`.
    NoMatch,
}

impl MatchResult {
    #[must_use]
    pub fn is_match(self) -> bool {
        self == MatchResult::Matched
    }
}

/// Coarse game phase.
///
/// `Playing` has an internal sub-state given by the pending count (0-2).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Dealt, no card flipped yet.
    #[default]
    Idle,
    Playing,
    /// Every pair found. Terminal until reset.
    GameOver,
}

/// Status readout for a HUD.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    pub score: u32,
    pub moves: u32,
    pub elapsed_seconds: u64,
    pub game_over: bool,
    pub matched_pairs: usize,
    pub total_pairs: usize,
}

impl GameStatus {
    /// Elapsed time as `MM:SS`.
    #[must_use]
    pub fn formatted_time(&self) -> String {
        format_mm_ss(self.elapsed_seconds)
    }
}

/// Format seconds as `MM:SS`. Minutes keep counting past 59.
#[must_use]
pub fn format_mm_ss(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mm_ss() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(75), "01:15");
        assert_eq!(format_mm_ss(6000), "100:00");
    }

    #[test]
    fn test_match_result() {
        assert!(MatchResult::Matched.is_match());
        assert!(!MatchResult::NoMatch.is_match());
        assert_eq!(GamePhase::default(), GamePhase::Idle);
    }
}
