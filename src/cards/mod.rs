//! Cards and where their faces come from.
//!
//! ## Key Types
//!
//! - `Card<K>`: identifier plus face-up/matched flags
//! - `AssetResolver`: injected source of themed pair identifiers
//! - `AssetCatalog`: in-memory `AssetResolver`

pub mod assets;
pub mod card;

pub use assets::{AssetCatalog, AssetResolver};
pub use card::Card;
