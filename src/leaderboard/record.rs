//! Finished-game records.

use serde::{Deserialize, Serialize};

use crate::game::format_mm_ss;

/// One finished game, ready for a score sink.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub player_name: String,
    pub score: u32,
    pub moves: u32,
    pub elapsed_seconds: u64,
}

impl ScoreRecord {
    #[must_use]
    pub fn new(player_name: impl Into<String>, score: u32, moves: u32, elapsed_seconds: u64) -> Self {
        Self {
            player_name: player_name.into(),
            score,
            moves,
            elapsed_seconds,
        }
    }

    /// Elapsed time as `MM:SS`.
    #[must_use]
    pub fn formatted_time(&self) -> String {
        format_mm_ss(self.elapsed_seconds)
    }

    /// Does this record rank strictly above `other`?
    ///
    /// Higher score wins, then fewer moves, then less time.
    #[must_use]
    pub fn beats(&self, other: &ScoreRecord) -> bool {
        self.rank_key() < other.rank_key()
    }

    pub(crate) fn rank_key(&self) -> (std::cmp::Reverse<u32>, u32, u64) {
        (std::cmp::Reverse(self.score), self.moves, self.elapsed_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_time() {
        let record = ScoreRecord::new("Ada", 1500, 25, 120);
        assert_eq!(record.formatted_time(), "02:00");
    }

    #[test]
    fn test_beats() {
        let best = ScoreRecord::new("a", 1500, 25, 120);
        let fewer_moves = ScoreRecord::new("b", 1200, 20, 100);
        let same_score_more_moves = ScoreRecord::new("c", 1200, 30, 90);

        assert!(best.beats(&fewer_moves));
        assert!(fewer_moves.beats(&same_score_more_moves));
        assert!(!fewer_moves.beats(&fewer_moves.clone()));
    }
}
