//! Score records and where they go.
//!
//! ## Key Types
//!
//! - `ScoreRecord`: `{ player_name, score, moves, elapsed_seconds }`
//! - `ScoreSink`: typed storage interface; implement it for a real backend
//! - `Leaderboard`: in-memory sink keeping each player's best result

mod ranking;
mod record;
mod sink;

pub use ranking::{Leaderboard, DEFAULT_TOP, MAX_ENTRIES};
pub use record::ScoreRecord;
pub use sink::{ScoreSink, SinkError};
