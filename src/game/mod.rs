//! Game sessions: the flip/match state machine, scoring, and win detection.
//!
//! ## Phases
//!
//! `Idle -> Playing -> GameOver`. While playing, the number of pending
//! cards (0, 1 or 2) decides what the player may do next:
//!
//! - 0 or 1 pending: `flip` another hidden card
//! - 2 pending: `resolve`, then `flip_back` on a mismatch
//!
//! A third flip while two are pending is rejected, not queued.

mod session;
mod status;

pub use session::Game;
pub use status::{format_mm_ss, GamePhase, GameStatus, MatchResult};
