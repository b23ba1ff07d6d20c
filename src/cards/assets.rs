//! Asset-resolution capability for themed boards.
//!
//! Where card faces come from (image folders, bundled resources, a CDN)
//! is the presentation layer's business. The board only needs a list of
//! opaque keys, one per pair, and asks an `AssetResolver` for them.

use rustc_hash::FxHashMap;

/// Supplies pair identifiers for a named theme.
pub trait AssetResolver {
    /// Up to `count` distinct asset keys for `theme`.
    ///
    /// Returns `None` if the theme is unknown. Returning fewer than
    /// `count` keys means the theme cannot fill the board.
    fn resolve(&self, theme: &str, count: usize) -> Option<Vec<String>>;
}

/// In-memory theme catalog.
///
/// ## Example
///
/// ```
/// use memory_match::cards::{AssetCatalog, AssetResolver};
///
/// let mut catalog = AssetCatalog::new();
/// catalog.register("easy", ["mario.png", "luigi.png", "peach.png"]);
///
/// assert_eq!(catalog.resolve("easy", 2).unwrap(), vec!["mario.png", "luigi.png"]);
/// assert!(catalog.resolve("hard", 2).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct AssetCatalog {
    themes: FxHashMap<String, Vec<String>>,
}

impl AssetCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the keys for a theme.
    ///
    /// Keys keep their order; repeated keys are dropped so that every key
    /// can stand for exactly one pair.
    pub fn register<I, S>(&mut self, theme: impl Into<String>, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for key in keys {
            let key = key.into();
            if !unique.contains(&key) {
                unique.push(key);
            }
        }
        self.themes.insert(theme.into(), unique);
    }
}

impl AssetResolver for AssetCatalog {
    fn resolve(&self, theme: &str, count: usize) -> Option<Vec<String>> {
        self.themes
            .get(theme)
            .map(|keys| keys.iter().take(count).cloned().collect())
    }
}
