//! # memory-match
//!
//! Game-state core for a memory-matching ("concentration") card game.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: No rendering, input, or timers. A GUI,
//!    terminal, or web front end calls a small synchronous API and draws
//!    the plain data it gets back.
//!
//! 2. **Caller Owns Time**: The presentation layer schedules the display
//!    delay before `resolve` and polls elapsed time on its own cadence.
//!    The core only reads an injected monotonic `Clock`.
//!
//! 3. **Opaque Pair Keys**: Cards carry any equality-comparable identifier,
//!    numeric or an asset key, so one board type covers both.
//!
//! ## Modules
//!
//! - `core`: Errors, RNG, configuration, clocks
//! - `cards`: Card data and asset resolution
//! - `board`: Dealing and querying the grid
//! - `game`: Flip/match state machine and scoring
//! - `leaderboard`: Score records and sinks

pub mod board;
pub mod cards;
pub mod core;
pub mod game;
pub mod leaderboard;

// Re-export commonly used types
pub use crate::core::{
    Clock, Difficulty, EndBonus, GameConfig, GameRng, GameRngState, ManualClock, MemoryError,
    MonotonicClock, Result, ScoringRules, Stopwatch, Transition,
};

pub use crate::cards::{AssetCatalog, AssetResolver, Card};

pub use crate::board::Board;

pub use crate::game::{Game, GamePhase, GameStatus, MatchResult};

pub use crate::leaderboard::{Leaderboard, ScoreRecord, ScoreSink, SinkError};
