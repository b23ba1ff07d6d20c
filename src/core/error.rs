//! Error types for board construction and game transitions.
//!
//! Construction problems (`InvalidDimension`, `NotEnoughIdentifiers`,
//! `DuplicateIdentifier`) are hard failures. Everything else is an
//! expected caller mistake: it is reported and the game state is left
//! exactly as it was.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, MemoryError>;

/// Why a flip or resolution was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// The game is already won.
    GameOver,
    /// The card is face-up or matched.
    AlreadyRevealed,
    /// Two cards are showing and must be resolved first.
    ResolutionPending,
    /// Resolution needs exactly two pending cards.
    NothingToResolve,
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Transition::GameOver => "the game is over",
            Transition::AlreadyRevealed => "the card is already face-up",
            Transition::ResolutionPending => "two cards are awaiting resolution",
            Transition::NothingToResolve => "fewer than two cards are pending",
        };
        f.write_str(reason)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    #[error("A {rows}x{cols} board cannot be split into pairs")]
    InvalidDimension { rows: usize, cols: usize },
    #[error("Card index {index} is out of range for a board of {len} cards")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Move rejected: {0}")]
    InvalidTransition(Transition),
    #[error("Board needs {needed} pair identifiers but only {supplied} were supplied")]
    NotEnoughIdentifiers { needed: usize, supplied: usize },
    #[error("Pair identifier at position {position} repeats an earlier one")]
    DuplicateIdentifier { position: usize },
    #[error("A score record can only be taken once the game is over")]
    GameNotOver,
    #[error("Player name must not be empty")]
    EmptyPlayerName,
}

impl From<Transition> for MemoryError {
    fn from(transition: Transition) -> Self {
        MemoryError::InvalidTransition(transition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = MemoryError::InvalidDimension { rows: 3, cols: 3 };
        assert_eq!(err.to_string(), "A 3x3 board cannot be split into pairs");

        let err: MemoryError = Transition::ResolutionPending.into();
        assert_eq!(err.to_string(), "Move rejected: two cards are awaiting resolution");
    }
}
