//! The dealt grid of cards.

use std::hash::Hash;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cards::{AssetResolver, Card};
use crate::core::config::validate_dimensions;
use crate::core::error::{MemoryError, Result};
use crate::core::rng::GameRng;

/// A fixed-size board of shuffled pairs.
///
/// Cards are stored row-major: index `i` sits at row `i / cols`,
/// column `i % cols`. Every identifier on the board occurs exactly twice.
/// The shape never changes after construction; only card flags do.
///
/// ## Usage
///
/// ```
/// use memory_match::board::Board;
/// use memory_match::core::GameRng;
///
/// let mut rng = GameRng::new(42);
/// let board = Board::new(4, 4, &mut rng).unwrap();
///
/// assert_eq!(board.len(), 16);
/// assert_eq!(board.pair_count(), 8);
/// assert!(board.card(15).is_some());
/// assert!(board.card(16).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board<K> {
    cards: Vec<Card<K>>,
    rows: usize,
    cols: usize,
}

impl Board<usize> {
    /// Deal a board with numeric identifiers `0..pairs`.
    pub fn new(rows: usize, cols: usize, rng: &mut GameRng) -> Result<Self> {
        let pairs = validate_dimensions(rows, cols)?;
        Ok(Self::deal(rows, cols, (0..pairs).collect(), rng))
    }
}

impl Board<String> {
    /// Deal a board whose identifiers are asset keys for `theme`.
    ///
    /// Repeated keys from the resolver count once. If fewer distinct keys
    /// than pairs remain, the board falls back to numbered keys `"0"`,
    /// `"1"`, ... so the game stays playable.
    pub fn themed<R>(
        rows: usize,
        cols: usize,
        theme: &str,
        resolver: &R,
        rng: &mut GameRng,
    ) -> Result<Self>
    where
        R: AssetResolver + ?Sized,
    {
        let pairs = validate_dimensions(rows, cols)?;

        let mut keys = resolver.resolve(theme, pairs).unwrap_or_default();
        let mut seen = FxHashSet::default();
        keys.retain(|key| seen.insert(key.clone()));

        if keys.len() >= pairs {
            keys.truncate(pairs);
            return Ok(Self::deal(rows, cols, keys, rng));
        }

        warn!(
            theme,
            needed = pairs,
            found = keys.len(),
            "Not enough distinct assets for theme, using numbered cards"
        );
        Ok(Self::deal(rows, cols, (0..pairs).map(|i| i.to_string()).collect(), rng))
    }
}

impl<K: Clone + Eq + Hash> Board<K> {
    /// Deal a board from caller-supplied identifiers, one per pair.
    ///
    /// The first `rows * cols / 2` identifiers are used; any extra are
    /// ignored. The used identifiers must be distinct.
    pub fn with_identifiers<I>(rows: usize, cols: usize, ids: I, rng: &mut GameRng) -> Result<Self>
    where
        I: IntoIterator<Item = K>,
    {
        let pairs = validate_dimensions(rows, cols)?;
        let ids: Vec<K> = ids.into_iter().take(pairs).collect();

        if ids.len() < pairs {
            return Err(MemoryError::NotEnoughIdentifiers {
                needed: pairs,
                supplied: ids.len(),
            });
        }

        let mut seen = FxHashSet::default();
        if let Some(position) = ids.iter().position(|id| !seen.insert(id)) {
            return Err(MemoryError::DuplicateIdentifier { position });
        }

        Ok(Self::deal(rows, cols, ids, rng))
    }
}

impl<K> Board<K> {
    /// Duplicate each identifier and shuffle the full sequence.
    fn deal(rows: usize, cols: usize, ids: Vec<K>, rng: &mut GameRng) -> Self
    where
        K: Clone,
    {
        let mut cards = Vec::with_capacity(ids.len() * 2);
        for id in ids {
            cards.push(Card::new(id.clone()));
            cards.push(Card::new(id));
        }
        rng.shuffle(&mut cards);

        debug!(rows, cols, seed = rng.seed(), "Dealt board");
        Self { cards, rows, cols }
    }

    /// Get a card by index.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card<K>> {
        self.cards.get(index)
    }

    /// Get a card by index, reporting out-of-range indices as an error.
    pub fn try_card(&self, index: usize) -> Result<&Card<K>> {
        self.cards.get(index).ok_or(MemoryError::IndexOutOfRange {
            index,
            len: self.cards.len(),
        })
    }

    pub(crate) fn card_mut(&mut self, index: usize) -> Option<&mut Card<K>> {
        self.cards.get_mut(index)
    }

    /// Get a card by grid position.
    #[must_use]
    pub fn card_at(&self, row: usize, col: usize) -> Option<&Card<K>> {
        self.index_of(row, col).and_then(|index| self.card(index))
    }

    /// All cards in row-major order.
    #[must_use]
    pub fn cards(&self) -> &[Card<K>] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card<K>> {
        self.cards.iter()
    }

    /// Total number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a constructed board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Grid position `(row, col)` of a card index.
    #[must_use]
    pub fn position_of(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.cards.len()).then(|| (index / self.cols, index % self.cols))
    }

    /// Card index of a grid position.
    #[must_use]
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Win condition: every card is matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    /// Number of pairs found so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|card| card.is_matched()).count() / 2
    }

    /// Turn every card face-down and unmatched, then reshuffle.
    pub fn reset(&mut self, rng: &mut GameRng) {
        for card in &mut self.cards {
            card.clear();
        }
        rng.shuffle(&mut self.cards);
    }
}
