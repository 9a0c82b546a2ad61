//! The ordered deck and its resolved set.
//!
//! Insertion order is display order: the first card not yet resolved is
//! the Front card. Cards whose exit has been committed stay in the deck
//! (still rendering their exit animation) until the lifecycle manager
//! splices them out, but they are excluded from slot assignment via the
//! resolved set.
//!
//! Only the lifecycle manager and the resolution router write to this
//! structure; everything else reads per-frame snapshots.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Card, CardId};

/// Ordered queue of cards plus the resolved set.
///
/// Backed by a persistent vector so per-frame snapshots clone in O(1).
/// The resolved set makes resolution idempotent: an id present in it must
/// never be resolved a second time.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
    resolved: FxHashSet<CardId>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck from an ordered batch.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
            resolved: FxHashSet::default(),
        }
    }

    /// Total cards, including those animating out.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when no cards remain at all (exiting cards included).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards not yet resolved (eligible for slot assignment).
    #[must_use]
    pub fn unresolved_len(&self) -> usize {
        self.cards.len() - self.resolved_len()
    }

    /// Ids currently in the resolved set.
    #[must_use]
    pub fn resolved_len(&self) -> usize {
        self.resolved.len()
    }

    /// Iterate all cards in display order (exiting cards included).
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Iterate unresolved cards in display order.
    pub fn unresolved(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(|c| !self.resolved.contains(&c.id))
    }

    /// The Front card: first unresolved card, if any.
    #[must_use]
    pub fn front(&self) -> Option<&Card> {
        self.unresolved().next()
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Mutable lookup by id.
    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        let index = self.cards.iter().position(|c| c.id == id)?;
        self.cards.get_mut(index)
    }

    /// Does the deck contain this id (exiting cards included)?
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|c| c.id == id)
    }

    /// Append a card to the back of the deck.
    pub fn push_back(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Append an ordered batch to the back of the deck.
    pub fn append(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.cards.push_back(card);
        }
    }

    /// Mark a card resolved.
    ///
    /// Returns false if the id is already resolved or not in the deck —
    /// the caller must treat that as a guard trip and do nothing further.
    pub fn mark_resolved(&mut self, id: CardId) -> bool {
        if self.resolved.contains(&id) || !self.contains(id) {
            return false;
        }
        self.resolved.insert(id);
        true
    }

    /// Is this id in the resolved set?
    #[must_use]
    pub fn is_resolved(&self, id: CardId) -> bool {
        self.resolved.contains(&id)
    }

    /// Remove a card and clear its resolved-set entry in the same step.
    ///
    /// Called from the exit-completion path only.
    pub fn splice(&mut self, id: CardId) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id == id)?;
        let card = self.cards.remove(index);
        self.resolved.remove(&id);
        Some(card)
    }

    /// Clear the resolved set entirely (deck reset).
    pub fn clear_resolved(&mut self) {
        self.resolved.clear();
    }

    /// O(1) snapshot of the card order for readers.
    #[must_use]
    pub fn snapshot(&self) -> Vector<Card> {
        self.cards.clone()
    }
}
