//! In-memory ranked leaderboard.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::record::ScoreRecord;
use super::sink::{ScoreSink, SinkError};

/// Most entries a leaderboard keeps.
pub const MAX_ENTRIES: usize = 100;

/// Entries returned by `top(0)`.
pub const DEFAULT_TOP: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Entry {
    record: ScoreRecord,
    /// Submission order, the final tie-breaker.
    sequence: u64,
}

/// Best result per player, ranked.
///
/// Ranking: higher score, then fewer moves, then less time, then earlier
/// submission. A player's entry is only replaced by a better result.
///
/// ## Example
///
/// ```
/// use memory_match::leaderboard::{Leaderboard, ScoreRecord, ScoreSink};
///
/// let mut board = Leaderboard::new();
/// board.submit(ScoreRecord::new("Ada", 1500, 25, 120)).unwrap();
/// board.submit(ScoreRecord::new("Grace", 1700, 20, 100)).unwrap();
///
/// assert_eq!(board.rank_of("Grace"), Some(1));
/// assert_eq!(board.top(1)[0].player_name, "Grace");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<Entry>,
    capacity: usize,
    next_sequence: u64,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::with_capacity(MAX_ENTRIES)
    }
}

impl Leaderboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A leaderboard keeping at most `capacity` entries (at least one).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
            next_sequence: 0,
        }
    }

    /// Record a result and return the player's rank (1-based).
    ///
    /// Returns `None` when the result falls off the bottom of a full board.
    pub fn insert(&mut self, mut record: ScoreRecord) -> Result<Option<usize>, SinkError> {
        let name = record.player_name.trim();
        if name.is_empty() {
            return Err(SinkError::InvalidName);
        }
        record.player_name = name.to_string();

        let sequence = self.next_sequence;
        self.next_sequence = self.next_sequence.saturating_add(1);

        match self
            .entries
            .iter_mut()
            .find(|entry| entry.record.player_name == record.player_name)
        {
            Some(existing) if record.beats(&existing.record) => {
                existing.record = record.clone();
                existing.sequence = sequence;
            }
            Some(_) => {
                debug!(player = %record.player_name, "Kept earlier, better result");
            }
            None => self.entries.push(Entry { record: record.clone(), sequence }),
        }

        self.sort_entries();
        self.entries.truncate(self.capacity);

        Ok(self.rank_of(&record.player_name))
    }

    fn sort_entries(&mut self) {
        self.entries
            .sort_by(|a, b| (a.record.rank_key(), a.sequence).cmp(&(b.record.rank_key(), b.sequence)));
    }

    /// Re-establish what `insert` maintains on decoded state.
    fn normalize(&mut self) {
        self.capacity = self.capacity.max(1);

        for entry in &mut self.entries {
            entry.record.player_name = entry.record.player_name.trim().to_string();
        }
        self.entries.retain(|entry| !entry.record.player_name.is_empty());

        // Ranked first, so the kept duplicate is the player's best.
        self.sort_entries();
        let mut seen = FxHashSet::default();
        self.entries
            .retain(|entry| seen.insert(entry.record.player_name.clone()));
        self.entries.truncate(self.capacity);

        let after_last = self
            .entries
            .iter()
            .map(|entry| entry.sequence.saturating_add(1))
            .max()
            .unwrap_or(0);
        self.next_sequence = self.next_sequence.max(after_last);
    }

    /// The best `limit` records. `0` means `DEFAULT_TOP`.
    #[must_use]
    pub fn top(&self, limit: usize) -> Vec<ScoreRecord> {
        let limit = if limit == 0 { DEFAULT_TOP } else { limit.min(self.capacity) };
        self.entries
            .iter()
            .take(limit)
            .map(|entry| entry.record.clone())
            .collect()
    }

    /// A player's stored record.
    #[must_use]
    pub fn entry(&self, player_name: &str) -> Option<&ScoreRecord> {
        let name = player_name.trim();
        self.entries
            .iter()
            .map(|entry| &entry.record)
            .find(|record| record.player_name == name)
    }

    /// A player's 1-based rank.
    #[must_use]
    pub fn rank_of(&self, player_name: &str) -> Option<usize> {
        let name = player_name.trim();
        self.entries
            .iter()
            .position(|entry| entry.record.player_name == name)
            .map(|index| index + 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoreRecord> {
        self.entries.iter().map(|entry| &entry.record)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot the leaderboard.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SinkError> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore a snapshot taken with `to_bytes`.
    ///
    /// Snapshots are re-checked on load: blank names are dropped, each
    /// player keeps only their best entry, and the board is re-ranked and
    /// cut to capacity.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SinkError> {
        let mut board: Self = bincode::deserialize(bytes)?;
        board.normalize();
        debug!(entries = board.entries.len(), capacity = board.capacity, "Restored leaderboard");
        Ok(board)
    }
}

impl ScoreSink for Leaderboard {
    fn submit(&mut self, record: ScoreRecord) -> Result<(), SinkError> {
        self.insert(record).map(|_| ())
    }
}
