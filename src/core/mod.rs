//! Core building blocks: errors, RNG, configuration, clocks.
//!
//! These types know nothing about cards or boards. The board and game
//! modules are built on top of them.

pub mod clock;
pub mod config;
pub mod error;
pub mod rng;

pub use clock::{Clock, ManualClock, MonotonicClock, Stopwatch};
pub use config::{Difficulty, EndBonus, GameConfig, ScoringRules};
pub use error::{MemoryError, Result, Transition};
pub use rng::{GameRng, GameRngState};
