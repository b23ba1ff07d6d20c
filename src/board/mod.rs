//! Board construction and queries.
//!
//! A `Board` is dealt once per game: `pairs` identifiers, each duplicated,
//! then shuffled with a uniform permutation. After that only card flags
//! change.

mod grid;

pub use grid::Board;
