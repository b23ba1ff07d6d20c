//! A single card on the board.
//!
//! `Card` is a plain data holder. Its state only changes through the
//! crate-internal transitions used by `Board` and `Game`, which keeps the
//! invariant `matched => face_up` in one place.

use serde::{Deserialize, Serialize};

/// A card with pair identifier `K`.
///
/// Two cards with equal identifiers form a pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card<K> {
    id: K,
    face_up: bool,
    matched: bool,
}

impl<K> Card<K> {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: K) -> Self {
        Self {
            id,
            face_up: false,
            matched: false,
        }
    }

    /// The pair identifier.
    #[must_use]
    pub fn id(&self) -> &K {
        &self.id
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Can this card be flipped right now?
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        !self.face_up && !self.matched
    }

    /// Does this card pair with `other`?
    #[must_use]
    pub fn pairs_with(&self, other: &Card<K>) -> bool
    where
        K: PartialEq,
    {
        self.id == other.id
    }

    pub(crate) fn reveal(&mut self) {
        self.face_up = true;
    }

    /// Turn face-down again. Matched cards stay up.
    pub(crate) fn hide(&mut self) {
        if !self.matched {
            self.face_up = false;
        }
    }

    pub(crate) fn set_matched(&mut self) {
        self.matched = true;
        self.face_up = true;
    }

    /// Back to the freshly dealt state, used when a game is reset.
    pub(crate) fn clear(&mut self) {
        self.face_up = false;
        self.matched = false;
    }
}
