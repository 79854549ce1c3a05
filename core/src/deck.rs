//! Deck - the Ordered Card List
//!
//! Insertion order is the visual stacking order. The deck is replaced
//! wholesale on every successful refresh and mutated only by the
//! rotation rule in between: the last card moves to the front, which
//! changes the visual order without altering the set of cards.
//!
//! The deck also computes the stacking layout: each card's vertical
//! offset is the running sum of the heights of all cards before it.

use crate::card::Card;

/// A card's resolved position in the stacking layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Vertical offset in layout units (sum of preceding heights).
    pub y: u32,
    /// The card's own height in layout units.
    pub height: u32,
}

/// The ordered card list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deck from cards, preserving their order.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Replace the whole deck with a freshly fetched card set.
    pub fn replace(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }

    /// Rotate once: remove the last card and reinsert it at the front.
    /// A no-op on an empty deck.
    pub fn rotate(&mut self) {
        if let Some(last) = self.cards.pop() {
            self.cards.insert(0, last);
        }
    }

    /// The cards in visual stacking order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Resolve the stacking layout: each card paired with its vertical
    /// offset, the running sum of preceding heights.
    #[must_use]
    pub fn layout(&self) -> Vec<(Placement, &Card)> {
        let mut y = 0u32;
        self.cards
            .iter()
            .map(|card| {
                let placement = Placement {
                    y,
                    height: card.height,
                };
                y += card.height;
                (placement, card)
            })
            .collect()
    }

    /// Total stacked height of the deck in layout units.
    #[must_use]
    pub fn total_height(&self) -> u32 {
        self.cards.iter().map(|c| c.height).sum()
    }
}
